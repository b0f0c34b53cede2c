//! Shared manifest fixture for unit tests.
//!
//! A trimmed but structurally faithful pbxproj: one existing source file
//! wired through all four sections, an `App` root group with `Stores` and
//! `Views` subgroups, and a catalog entry whose comment collides with the
//! `Stores` group name (group lookups must not match it).

pub(crate) const MANIFEST: &str = r#"// !$*UTF8*$!
{
	archiveVersion = 1;
	objectVersion = 56;
	objects = {

/* Begin PBXBuildFile section */
		D0C4E5F60718293A4B5C6D7E /* AppMain.swift in Sources */ = {isa = PBXBuildFile; fileRef = C0B3D4E5F60718293A4B5C6D /* AppMain.swift */; };
/* End PBXBuildFile section */

/* Begin PBXFileReference section */
		C0B3D4E5F60718293A4B5C6D /* AppMain.swift */ = {isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = AppMain.swift; sourceTree = "<group>"; };
		C1B4D5E6F70819293A4B5C6E /* Stores */ = {isa = PBXFileReference; lastKnownFileType = text; path = Stores; sourceTree = "<group>"; };
/* End PBXFileReference section */

/* Begin PBXGroup section */
		A1B2C3D4E5F60718293A4B5C /* App */ = {
			isa = PBXGroup;
			children = (
				C0B3D4E5F60718293A4B5C6D /* AppMain.swift */,
				B2C3D4E5F60718293A4B5C6D /* Stores */,
				B3C4D5E6F70819293A4B5C6E /* Views */,
			);
			path = App;
			sourceTree = "<group>";
		};
		B2C3D4E5F60718293A4B5C6D /* Stores */ = {
			isa = PBXGroup;
			children = (
			);
			path = Stores;
			sourceTree = "<group>";
		};
		B3C4D5E6F70819293A4B5C6E /* Views */ = {
			isa = PBXGroup;
			children = (
			);
			path = Views;
			sourceTree = "<group>";
		};
/* End PBXGroup section */

/* Begin PBXSourcesBuildPhase section */
		E1F20718293A4B5C6D7E8F90 /* Sources */ = {
			isa = PBXSourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
				D0C4E5F60718293A4B5C6D7E /* AppMain.swift in Sources */,
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
/* End PBXSourcesBuildPhase section */

	};
	rootObject = F00718293A4B5C6D7E8F9012 /* Project object */;
}
"#;

/// A copy of [`MANIFEST`] with a second `Views` group, for ambiguity tests.
pub(crate) fn with_duplicate_views() -> String {
	MANIFEST.replace(
		"/* End PBXGroup section */",
		"\t\tB4C5D6E7F80910293A4B5C6F /* Views */ = {\n\
		 \t\t\tisa = PBXGroup;\n\
		 \t\t\tchildren = (\n\
		 \t\t\t);\n\
		 \t\t\tpath = Views;\n\
		 \t\t\tsourceTree = \"<group>\";\n\
		 \t\t};\n\
		 /* End PBXGroup section */",
	)
}
