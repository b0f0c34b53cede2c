//! The insertion engine: batch application of file additions.

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::group;
use crate::ident::IdentGen;
use crate::layout::ManifestLayout;
use crate::locate;
use crate::record;

/// One requested file addition: a logical path plus the group receiving it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Addition {
	/// File path relative to its group; usually a bare file name.
	#[serde(rename = "file")]
	pub logical_path: String,
	/// Name of the group whose child list receives the file.
	pub group: String,
}

impl Addition {
	/// Creates an addition of `logical_path` under `group`.
	pub fn new(logical_path: impl Into<String>, group: impl Into<String>) -> Self {
		Self { logical_path: logical_path.into(), group: group.into() }
	}
}

/// The manifest-mutation engine.
///
/// Holds the anchor layout and the identifier source. [`Engine::apply`] is
/// pure with respect to its input text: it either returns the fully mutated
/// manifest or an error, never partially spliced output. The caller owns
/// all I/O and is responsible for serializing concurrent edits to the same
/// file.
#[derive(Debug, Clone)]
pub struct Engine {
	layout: ManifestLayout,
	idents: IdentGen,
}

impl Engine {
	/// An engine over `layout` with randomly generated identifiers.
	pub fn new(layout: ManifestLayout) -> Self {
		Self::with_idents(layout, IdentGen::random())
	}

	/// An engine with a caller-supplied identifier source, for
	/// deterministic output.
	pub fn with_idents(layout: ManifestLayout, idents: IdentGen) -> Self {
		Self { layout, idents }
	}

	/// Applies `additions` in caller order and returns the mutated manifest.
	///
	/// All-or-nothing across the batch: on any error the input text is
	/// simply never replaced. Nothing is deduplicated against pre-existing
	/// entries; adding the same logical path twice yields two functionally
	/// aliasing record sets.
	pub fn apply(&mut self, manifest: &str, additions: &[Addition]) -> Result<String> {
		let mut text = manifest.to_owned();
		for addition in additions {
			text = self.apply_one(text, addition)?;
			info!(file = %addition.logical_path, group = %addition.group, "added file");
		}
		Ok(text)
	}

	/// Runs the full insertion sequence for a single addition.
	///
	/// Each step splices text, so every subsequent step re-locates its
	/// anchor against the mutated manifest; offsets computed earlier are
	/// never reused.
	fn apply_one(&mut self, manifest: String, addition: &Addition) -> Result<String> {
		let file_ident = self.idents.fresh();
		let build_ident = self.idents.fresh();

		let (mut text, group) =
			group::resolve_or_create(manifest, &self.layout, &mut self.idents, &addition.group)?;

		let at = locate::section_end(&text, &self.layout.catalog_section)?;
		text.insert_str(at, &record::catalog_entry(&self.layout, &file_ident, &addition.logical_path));
		debug!(file = %addition.logical_path, ident = %file_ident, "catalog entry spliced");

		let at = locate::section_end(&text, &self.layout.build_file_section)?;
		text.insert_str(
			at,
			&record::build_file_entry(&self.layout, &build_ident, &file_ident, &addition.logical_path),
		);
		debug!(file = %addition.logical_path, ident = %build_ident, "build-file entry spliced");

		let at = locate::group_children_start(&text, &self.layout, &group)?;
		text.insert_str(at, &record::group_child_line(&file_ident, &addition.logical_path));

		let at = locate::phase_files_end(&text, &self.layout)?;
		text.insert_str(at, &record::phase_file_line(&self.layout, &build_ident, &addition.logical_path));

		Ok(text)
	}
}
