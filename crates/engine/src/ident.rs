//! Record identifiers and their generator.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};


/// Length of a manifest identifier in characters.
pub const IDENT_LEN: usize = 24;

/// A fixed-width uppercase-hexadecimal record token.
///
/// Identifiers carry no structure; they are opaque keys whose uniqueness
/// within one manifest is statistical (24 hex digits, 96 bits of keyspace).
/// The engine never re-checks fresh tokens against identifiers already
/// present in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
	/// Borrows the token text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for Identifier {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let well_formed =
			s.len() == IDENT_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F'));
		if well_formed {
			Ok(Self(s.to_owned()))
		} else {
			Err(Error::BadIdentifier(s.to_owned()))
		}
	}
}

#[derive(Debug, Clone)]
enum Source {
	Random,
	Counter(u64),
}

/// Generates identifiers disjoint, with overwhelming probability, from every
/// token already present in the manifest.
#[derive(Debug, Clone)]
pub struct IdentGen {
	source: Source,
}

impl IdentGen {
	/// A generator backed by UUIDv4 entropy, truncated to [`IDENT_LEN`]
	/// uppercase hex digits.
	pub fn random() -> Self {
		Self { source: Source::Random }
	}

	/// A deterministic generator counting up from one, for reproducible
	/// output in tests.
	pub fn sequential() -> Self {
		Self { source: Source::Counter(1) }
	}

	/// Returns the next fresh identifier.
	pub fn fresh(&mut self) -> Identifier {
		match &mut self.source {
			Source::Random => {
				let mut buf = uuid::Uuid::encode_buffer();
				let hex = uuid::Uuid::new_v4().simple().encode_upper(&mut buf);
				Identifier(hex[..IDENT_LEN].to_owned())
			}
			Source::Counter(n) => {
				let ident = Identifier(format!("{n:024X}"));
				*n += 1;
				ident
			}
		}
	}
}
