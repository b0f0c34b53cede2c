//! Anchor-based insertion engine for Xcode `project.pbxproj` manifests.
//!
//! The manifest is treated as an opaque text document made of
//! cross-referencing record sections. [`Engine::apply`] splices new file
//! records into the four places that must stay mutually consistent (the
//! file catalog, the build-file registry, the owning group's child list,
//! and the compile phase's file list) and leaves every other byte
//! untouched. Nothing is parsed into an object model; every insertion
//! point is found by anchoring on the manifest's own sentinel comments
//! and record headers.

pub mod engine;
pub mod error;
pub mod group;
pub mod ident;
pub mod layout;
pub mod locate;
pub mod record;

#[cfg(test)]
mod testdata;

pub use engine::{Addition, Engine};
pub use error::{Error, Result};
pub use ident::{IdentGen, Identifier};
pub use layout::ManifestLayout;
pub use locate::GroupRef;
