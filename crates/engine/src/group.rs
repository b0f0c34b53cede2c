//! Group resolution and creation.

use tracing::debug;

use crate::error::{Error, Result};
use crate::ident::IdentGen;
use crate::layout::ManifestLayout;
use crate::locate::{self, GroupRef};
use crate::record;


/// Resolves `name` to a group, creating it when absent.
///
/// A created group is spliced at the group-section tail with an empty child
/// list and wired into the layout's root group, which must already exist.
/// Only one new leaf group is ever created per call; nested paths are not
/// supported. Returns the (possibly mutated) manifest together with the
/// resolved group.
pub fn resolve_or_create(
	manifest: String,
	layout: &ManifestLayout,
	idents: &mut IdentGen,
	name: &str,
) -> Result<(String, GroupRef)> {
	if let Some(group) = locate::find_group(&manifest, layout, name)? {
		return Ok((manifest, group));
	}

	let root = locate::find_group(&manifest, layout, &layout.root_group)?.ok_or_else(|| {
		Error::AnchorNotFound { anchor: format!("root group `{}`", layout.root_group) }
	})?;

	let group = GroupRef { ident: idents.fresh(), name: name.to_owned() };
	debug!(group = name, ident = %group.ident, root = %layout.root_group, "creating group");

	let mut manifest = manifest;
	let at = locate::section_end(&manifest, &layout.group_section)?;
	manifest.insert_str(at, &record::group_block(layout, &group.ident, name));

	// The root's children opener is re-located against the text that now
	// contains the new block.
	let at = locate::group_children_start(&manifest, layout, &root)?;
	manifest.insert_str(at, &record::group_child_line(&group.ident, name));

	Ok((manifest, group))
}
