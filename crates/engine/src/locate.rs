//! Anchor location inside the manifest text.
//!
//! Every function here returns a byte offset into the *current* manifest
//! text. Offsets are consumed immediately by a single splice and never
//! reused: each insertion step re-runs its locator against the already
//! mutated text, because any earlier splice shifts everything behind it.
//!
//! Group lookups are anchored on the group's own declaration header (its
//! identifier plus comment, followed by the type tag and the child-list
//! opener), never on the name alone, so two groups sharing a name cannot
//! be confused with one another.

use std::ops::Range;

use regex::Regex;

use crate::error::{Error, Result};
use crate::ident::Identifier;
use crate::layout::ManifestLayout;


/// A resolved group: its identifier plus the name it was matched under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRef {
	/// The group record's identifier.
	pub ident: Identifier,
	/// The group's human-readable name.
	pub name: String,
}

fn compile(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|e| Error::Pattern(e.to_string()))
}

/// Half-open byte range of `section`'s body: everything between the begin
/// sentinel and the start of the end sentinel.
pub fn section_body(manifest: &str, section: &str) -> Result<Range<usize>> {
	let begin = format!("/* Begin {section} section */");
	let end = format!("/* End {section} section */");
	let begin_at = manifest.find(&begin).ok_or_else(|| Error::MalformedManifest {
		reason: format!("missing `{begin}` sentinel"),
	})?;
	let body_start = begin_at + begin.len();
	let end_at = manifest[body_start..]
		.find(&end)
		.map(|at| body_start + at)
		.ok_or_else(|| Error::MalformedManifest { reason: format!("missing `{end}` sentinel") })?;
	Ok(body_start..end_at)
}

/// Offset of the point just before `section`'s end sentinel, where new
/// records are appended at the section tail.
pub fn section_end(manifest: &str, section: &str) -> Result<usize> {
	Ok(section_body(manifest, section)?.end)
}

/// Looks up a group by name inside the group-declaration section.
///
/// Matching is scoped to the section body, so a same-named record in
/// another section (a file called `Stores`, say) cannot alias a group.
/// Zero matches is `Ok(None)`, a signal to the group registry to create
/// the group rather than an error; two or more matches is
/// [`Error::DuplicateGroupName`].
pub fn find_group(manifest: &str, layout: &ManifestLayout, name: &str) -> Result<Option<GroupRef>> {
	let body = section_body(manifest, &layout.group_section)?;
	let pattern = format!(r"(?m)^\t*([0-9A-F]{{24}}) /\* {} \*/ = \{{", regex::escape(name));
	let re = compile(&pattern)?;

	let mut found: Option<Identifier> = None;
	for caps in re.captures_iter(&manifest[body]) {
		if found.is_some() {
			return Err(Error::DuplicateGroupName { name: name.to_owned() });
		}
		found = Some(caps[1].parse()?);
	}
	Ok(found.map(|ident| GroupRef { ident, name: name.to_owned() }))
}

/// Offset just after `group`'s `children = (` opener, where a new child
/// reference line is inserted.
pub fn group_children_start(manifest: &str, layout: &ManifestLayout, group: &GroupRef) -> Result<usize> {
	let pattern = format!(
		r"{} /\* {} \*/ = \{{\s*isa = {};\s*children = \(",
		regex::escape(group.ident.as_str()),
		regex::escape(&group.name),
		regex::escape(&layout.group_section),
	);
	let m = compile(&pattern)?.find(manifest).ok_or_else(|| Error::AnchorNotFound {
		anchor: format!("children of group `{}` ({})", group.name, group.ident),
	})?;
	Ok(m.end())
}

/// Offset of the line holding the compile-phase file list's closing `);`,
/// where new build-phase references are appended at the list tail.
///
/// Appending (rather than inserting at the opener) keeps the phase list in
/// batch order: files added earlier stay earlier.
pub fn phase_files_end(manifest: &str, layout: &ManifestLayout) -> Result<usize> {
	let isa = format!("isa = {};", layout.compile_phase);
	let isa_at = manifest
		.find(&isa)
		.ok_or_else(|| Error::AnchorNotFound { anchor: format!("`{isa}` record") })?;
	let record_end = manifest[isa_at..].find("};").map(|at| isa_at + at).ok_or_else(|| {
		Error::MalformedManifest {
			reason: format!("unterminated `{}` record", layout.compile_phase),
		}
	})?;
	let files_at =
		manifest[isa_at..record_end].find("files = (").map(|at| isa_at + at).ok_or_else(|| {
			Error::AnchorNotFound {
				anchor: format!("file list of the `{}` record", layout.compile_phase),
			}
		})?;
	let list_start = files_at + "files = (".len();
	let close_at = manifest[list_start..record_end]
		.find(");")
		.map(|at| list_start + at)
		.ok_or_else(|| Error::MalformedManifest {
			reason: format!("unterminated file list in the `{}` record", layout.compile_phase),
		})?;
	// Rewind to the start of the closing line so appended lines keep the
	// one-item-per-line shape.
	Ok(manifest[..close_at].rfind('\n').map_or(close_at, |at| at + 1))
}
