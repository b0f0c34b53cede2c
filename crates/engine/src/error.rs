use thiserror::Error;

/// Convenience alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while editing a manifest.
///
/// Every variant is detected before any output text is produced; a failed
/// [`Engine::apply`](crate::Engine::apply) never yields partially spliced
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// A required group or build-phase anchor pattern is absent.
	#[error("anchor not found: {anchor}")]
	AnchorNotFound {
		/// Description of the anchor that failed to match.
		anchor: String,
	},
	/// More than one group shares the requested name.
	#[error("duplicate group name: {name}")]
	DuplicateGroupName {
		/// The ambiguous group name.
		name: String,
	},
	/// A section sentinel is missing or the section structure is violated.
	#[error("malformed manifest: {reason}")]
	MalformedManifest {
		/// What was wrong with the manifest shape.
		reason: String,
	},
	/// A token does not have the expected identifier shape.
	#[error("bad identifier: {0:?}")]
	BadIdentifier(String),
	/// An internally built anchor pattern failed to compile.
	#[error("anchor pattern error: {0}")]
	Pattern(String),
}
