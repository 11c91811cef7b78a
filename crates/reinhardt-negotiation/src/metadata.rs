//! Shared contract for negotiable metadata.
//!
//! Every negotiable dimension (media type, language, character set and
//! encoding) is a small value type implementing [`Metadata`]. A value knows
//! its broader parent in the same category and whether it includes another
//! value, which is all the enricher and the scorer need.
//!
//! The hierarchy of each category is data: a value's parent is computed from
//! its own token, and the well-known values are `const` items.
//!
//! ```text
//! text/plain;charset=utf-8 -> text/plain -> text/* -> */*
//! en-us                    -> en         -> *
//! UTF-8                    -> *
//! gzip                     -> *
//! ```

use crate::charset::CharacterSet;
use crate::encoding::Encoding;
use crate::language::Language;
use crate::media_type::MediaType;
use std::fmt;

/// Negotiable metadata category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	/// `Accept` / `Content-Type`
	MediaType,
	/// `Accept-Language`
	Language,
	/// `Accept-Charset`
	CharacterSet,
	/// `Accept-Encoding`
	Encoding,
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::MediaType => "media type",
			Self::Language => "language",
			Self::CharacterSet => "character set",
			Self::Encoding => "encoding",
		};
		f.write_str(name)
	}
}

/// A value in a negotiable category.
///
/// `includes` is a reflexive, non-symmetric partial order: broader values
/// include narrower ones and themselves. The category's "all" value includes
/// every value and is the only value without a parent.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{Metadata, MediaType};
///
/// let plain = MediaType::TEXT_PLAIN;
/// assert_eq!(plain.parent(), Some(MediaType::TEXT_ALL));
/// assert!(MediaType::TEXT_ALL.includes(&plain));
/// assert!(!plain.includes(&MediaType::TEXT_ALL));
/// assert!(MediaType::all().includes(&plain));
/// assert_eq!(MediaType::all().parent(), None);
/// ```
pub trait Metadata: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {
	/// Category this metadata belongs to.
	const CATEGORY: Category;

	/// Returns the category's "all" wildcard value.
	fn all() -> Self;

	/// Returns the broader value in the same category, if any.
	fn parent(&self) -> Option<Self>;

	/// Checks whether this value includes `other`.
	fn includes(&self, other: &Self) -> bool;

	/// Returns the canonical token of this value.
	fn name(&self) -> String {
		self.to_string()
	}

	/// Checks whether this value is the category's "all" value.
	fn is_all(&self) -> bool {
		*self == Self::all()
	}
}

/// A metadata value of any category.
///
/// Returned by lookups that are not typed up front, such as resolving a
/// file extension through the [`MetadataService`](crate::MetadataService).
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
	MediaType(MediaType),
	Language(Language),
	CharacterSet(CharacterSet),
	Encoding(Encoding),
}

impl MetadataValue {
	/// Returns the category of the wrapped value.
	pub fn category(&self) -> Category {
		match self {
			Self::MediaType(_) => Category::MediaType,
			Self::Language(_) => Category::Language,
			Self::CharacterSet(_) => Category::CharacterSet,
			Self::Encoding(_) => Category::Encoding,
		}
	}
}

impl fmt::Display for MetadataValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MediaType(m) => m.fmt(f),
			Self::Language(l) => l.fmt(f),
			Self::CharacterSet(c) => c.fmt(f),
			Self::Encoding(e) => e.fmt(f),
		}
	}
}

impl From<MediaType> for MetadataValue {
	fn from(value: MediaType) -> Self {
		Self::MediaType(value)
	}
}

impl From<Language> for MetadataValue {
	fn from(value: Language) -> Self {
		Self::Language(value)
	}
}

impl From<CharacterSet> for MetadataValue {
	fn from(value: CharacterSet) -> Self {
		Self::CharacterSet(value)
	}
}

impl From<Encoding> for MetadataValue {
	fn from(value: Encoding) -> Self {
		Self::Encoding(value)
	}
}

/// Checks that `s` is a non-empty RFC 9110 token.
pub(crate) fn is_token(s: &str) -> bool {
	!s.is_empty()
		&& s.bytes().all(|b| {
			b.is_ascii_alphanumeric()
				|| matches!(
					b,
					b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^'
						| b'_' | b'`' | b'|' | b'~'
				)
		})
}
