use serde::Deserialize;

/// Names of the manifest's well-known sections and records.
///
/// Every anchor the engine relies on is named here rather than baked into
/// the splicing code, so a project with unusual conventions can supply its
/// own layout. [`ManifestLayout::xcode`] is the stock pbxproj dialect.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManifestLayout {
	/// Section holding one catalog entry per physical file.
	pub catalog_section: String,
	/// Section holding one build-file wrapper per compiled file.
	pub build_file_section: String,
	/// Section holding the group hierarchy.
	pub group_section: String,
	/// `isa` tag of the single compile-phase record.
	pub compile_phase: String,
	/// Human name of the compile phase, used in build-file comments
	/// (`/* Foo.swift in Sources */`).
	pub phase_name: String,
	/// Group that newly created groups are parented under. Never
	/// auto-discovered; a manifest without it fails with `AnchorNotFound`.
	pub root_group: String,
}

impl ManifestLayout {
	/// The stock Xcode pbxproj layout with the given root group.
	pub fn xcode(root_group: impl Into<String>) -> Self {
		Self {
			catalog_section: "PBXFileReference".to_owned(),
			build_file_section: "PBXBuildFile".to_owned(),
			group_section: "PBXGroup".to_owned(),
			compile_phase: "PBXSourcesBuildPhase".to_owned(),
			phase_name: "Sources".to_owned(),
			root_group: root_group.into(),
		}
	}
}

impl Default for ManifestLayout {
	fn default() -> Self {
		Self::xcode("Sources")
	}
}
