//! Character sets.

use crate::error::{NegotiationError, Result};
use crate::metadata::{Category, Metadata, is_token};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A character set such as `UTF-8`.
///
/// Names are case-insensitive and stored uppercased. A few common aliases
/// (`utf8`, `latin1`, `ascii`) are folded into their registered names. The
/// hierarchy is flat: every character set has `*` as parent.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{CharacterSet, Metadata};
///
/// assert_eq!(CharacterSet::new("utf8"), CharacterSet::UTF_8);
/// assert_eq!(CharacterSet::new("Latin1"), CharacterSet::ISO_8859_1);
/// assert_eq!(CharacterSet::UTF_8.parent(), Some(CharacterSet::ALL));
/// assert!(CharacterSet::ALL.includes(&CharacterSet::UTF_16));
/// assert!(!CharacterSet::UTF_8.includes(&CharacterSet::UTF_16));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterSet(Cow<'static, str>);

impl CharacterSet {
	pub const ALL: Self = Self::from_static("*");
	pub const ISO_8859_1: Self = Self::from_static("ISO-8859-1");
	pub const US_ASCII: Self = Self::from_static("US-ASCII");
	pub const UTF_16: Self = Self::from_static("UTF-16");
	pub const UTF_8: Self = Self::from_static("UTF-8");
	pub const WINDOWS_1252: Self = Self::from_static("WINDOWS-1252");

	/// Builds a character set from an uppercase static name.
	pub const fn from_static(name: &'static str) -> Self {
		Self(Cow::Borrowed(name))
	}

	/// Creates a character set, normalizing case and common aliases.
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into().to_ascii_uppercase();
		match name.as_str() {
			"UTF8" => Self::UTF_8,
			"UTF16" => Self::UTF_16,
			"LATIN1" | "ISO8859-1" | "ISO_8859-1" => Self::ISO_8859_1,
			"ASCII" | "US_ASCII" => Self::US_ASCII,
			"CP1252" => Self::WINDOWS_1252,
			_ => Self(Cow::Owned(name)),
		}
	}

	/// Returns the registered name.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Metadata for CharacterSet {
	const CATEGORY: Category = Category::CharacterSet;

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

impl fmt::Display for CharacterSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for CharacterSet {
	type Err = NegotiationError;

	fn from_str(s: &str) -> Result<Self> {
		let name = s.trim();
		if !is_token(name) {
			return Err(NegotiationError::invalid_token(Category::CharacterSet, s));
		}
		Ok(Self::new(name))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("utf-8", CharacterSet::UTF_8)]
	#[case("UTF8", CharacterSet::UTF_8)]
	#[case("ascii", CharacterSet::US_ASCII)]
	#[case("*", CharacterSet::ALL)]
	#[case("koi8-r", CharacterSet::new("KOI8-R"))]
	fn test_character_set_parse(#[case] input: &str, #[case] expected: CharacterSet) {
		assert_eq!(input.parse::<CharacterSet>().unwrap(), expected);
	}

	#[rstest]
	fn test_character_set_parse_rejects_blank() {
		assert!(" ".parse::<CharacterSet>().is_err());
		assert!("utf 8".parse::<CharacterSet>().is_err());
	}

	#[rstest]
	fn test_all_has_no_parent() {
		assert_eq!(CharacterSet::ALL.parent(), None);
		assert!(CharacterSet::ALL.is_all());
	}
}
