//! Content codings.

use crate::error::{NegotiationError, Result};
use crate::metadata::{Category, Metadata, is_token};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A content coding such as `gzip` or `identity`.
///
/// Names are case-insensitive and stored lowercased; the legacy `x-gzip` and
/// `x-compress` spellings are folded into `gzip` and `compress`. The
/// hierarchy is flat: every encoding has `*` as parent.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{Encoding, Metadata};
///
/// assert_eq!(Encoding::new("X-GZIP"), Encoding::GZIP);
/// assert_eq!(Encoding::BROTLI.as_str(), "br");
/// assert_eq!(Encoding::GZIP.parent(), Some(Encoding::ALL));
/// assert!(Encoding::ALL.includes(&Encoding::DEFLATE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Encoding(Cow<'static, str>);

impl Encoding {
	pub const ALL: Self = Self::from_static("*");
	pub const BROTLI: Self = Self::from_static("br");
	pub const COMPRESS: Self = Self::from_static("compress");
	pub const DEFLATE: Self = Self::from_static("deflate");
	pub const GZIP: Self = Self::from_static("gzip");
	pub const IDENTITY: Self = Self::from_static("identity");
	pub const ZSTD: Self = Self::from_static("zstd");

	/// Builds an encoding from a lowercase static name.
	pub const fn from_static(name: &'static str) -> Self {
		Self(Cow::Borrowed(name))
	}

	/// Creates an encoding, normalizing case and legacy aliases.
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into().to_ascii_lowercase();
		match name.as_str() {
			"x-gzip" => Self::GZIP,
			"x-compress" => Self::COMPRESS,
			_ => Self(Cow::Owned(name)),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Metadata for Encoding {
	const CATEGORY: Category = Category::Encoding;

	fn all() -> Self {
		Self::ALL
	}

	fn parent(&self) -> Option<Self> {
		if self.is_all() { None } else { Some(Self::ALL) }
	}

	fn includes(&self, other: &Self) -> bool {
		self.is_all() || self == other
	}
}

impl fmt::Display for Encoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for Encoding {
	type Err = NegotiationError;

	fn from_str(s: &str) -> Result<Self> {
		let name = s.trim();
		if !is_token(name) {
			return Err(NegotiationError::invalid_token(Category::Encoding, s));
		}
		Ok(Self::new(name))
	}
}
