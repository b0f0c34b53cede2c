//! Textual synthesis of new manifest records.
//!
//! Pure functions: identifiers and logical names in, exact record text out.
//! The tab-and-comma conventions of the surrounding manifest are reproduced
//! precisely, so spliced records are indistinguishable from records the IDE
//! wrote itself. Each function documents where its output is spliced,
//! because the leading/trailing newline differs by insertion point.

use crate::ident::Identifier;
use crate::layout::ManifestLayout;


/// Physical-file kind recorded in a catalog entry, derived from the logical
/// path's extension. Unknown extensions fall back to plain `text`.
pub fn file_kind(logical_path: &str) -> &'static str {
	let ext = logical_path.rsplit_once('.').map_or("", |(_, ext)| ext);
	match ext {
		"swift" => "sourcecode.swift",
		"m" => "sourcecode.c.objc",
		"h" => "sourcecode.c.h",
		"c" => "sourcecode.c.c",
		"plist" => "text.plist.xml",
		"storyboard" => "file.storyboard",
		"xcassets" => "folder.assetcatalog",
		"json" => "text.json",
		_ => "text",
	}
}

/// One catalog entry, newline-terminated, for appending at the catalog
/// section tail.
pub fn catalog_entry(layout: &ManifestLayout, ident: &Identifier, logical_path: &str) -> String {
	format!(
		"\t\t{ident} /* {logical_path} */ = {{isa = {isa}; lastKnownFileType = {kind}; path = {logical_path}; sourceTree = \"<group>\"; }};\n",
		isa = layout.catalog_section,
		kind = file_kind(logical_path),
	)
}

/// One build-file entry wrapping `file_ref`, newline-terminated, for
/// appending at the build-file section tail.
pub fn build_file_entry(
	layout: &ManifestLayout,
	ident: &Identifier,
	file_ref: &Identifier,
	logical_path: &str,
) -> String {
	format!(
		"\t\t{ident} /* {logical_path} in {phase} */ = {{isa = {isa}; fileRef = {file_ref} /* {logical_path} */; }};\n",
		phase = layout.phase_name,
		isa = layout.build_file_section,
	)
}

/// One child-reference line, led by its own newline, for inserting directly
/// after a group's `children = (` opener.
pub fn group_child_line(ident: &Identifier, name: &str) -> String {
	format!("\n\t\t\t\t{ident} /* {name} */,")
}

/// One build-phase reference line, newline-terminated, for inserting at the
/// start of the file list's closing line.
pub fn phase_file_line(layout: &ManifestLayout, ident: &Identifier, logical_path: &str) -> String {
	format!("\t\t\t\t{ident} /* {logical_path} in {phase} */,\n", phase = layout.phase_name)
}

/// A whole group block with an empty child list, newline-terminated, for
/// appending at the group section tail.
///
/// All four fields are mandatory; a group without `path` or `sourceTree`
/// is structurally invalid.
pub fn group_block(layout: &ManifestLayout, ident: &Identifier, name: &str) -> String {
	format!(
		"\t\t{ident} /* {name} */ = {{\n\
		 \t\t\tisa = {isa};\n\
		 \t\t\tchildren = (\n\
		 \t\t\t);\n\
		 \t\t\tpath = {name};\n\
		 \t\t\tsourceTree = \"<group>\";\n\
		 \t\t}};\n",
		isa = layout.group_section,
	)
}
