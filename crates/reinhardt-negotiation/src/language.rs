//! Language tags and their primary-tag hierarchy.

use crate::error::{NegotiationError, Result};
use crate::metadata::{Category, Metadata};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A language tag such as `en`, `en-us` or `*`.
///
/// Tags are case-insensitive and stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(Cow<'static, str>);

impl Language {
	pub const ALL: Self = Self::from_static("*");
	pub const ENGLISH: Self = Self::from_static("en");
	pub const ENGLISH_GB: Self = Self::from_static("en-gb");
	pub const ENGLISH_US: Self = Self::from_static("en-us");
	pub const FRENCH: Self = Self::from_static("fr");
	pub const FRENCH_FRANCE: Self = Self::from_static("fr-fr");
	pub const GERMAN: Self = Self::from_static("de");
	pub const ITALIAN: Self = Self::from_static("it");
	pub const JAPANESE: Self = Self::from_static("ja");
	pub const SPANISH: Self = Self::from_static("es");

	/// Builds a language from a lowercase static tag.
	pub const fn from_static(tag: &'static str) -> Self {
		Self(Cow::Borrowed(tag))
	}

	/// Creates a language, lowercasing the tag.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Language;
	///
	/// let en_us = Language::new("en-US");
	/// assert_eq!(en_us, Language::ENGLISH_US);
	/// assert_eq!(en_us.tag(), "en-us");
	/// ```
	pub fn new(tag: impl Into<String>) -> Self {
		Self(Cow::Owned(tag.into().to_ascii_lowercase()))
	}

	/// Returns the full tag (e.g. `en-us`).
	pub fn tag(&self) -> &str {
		&self.0
	}

	/// Returns the primary tag (e.g. `en` for `en-us`).
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Language;
	///
	/// assert_eq!(Language::ENGLISH_US.primary_tag(), "en");
	/// assert_eq!(Language::FRENCH.primary_tag(), "fr");
	/// ```
	pub fn primary_tag(&self) -> &str {
		self.0.split('-').next().unwrap_or_default()
	}

	/// Returns the subtags following the primary tag.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Language;
	///
	/// let lang = Language::new("zh-Hant-TW");
	/// assert_eq!(lang.sub_tags().collect::<Vec<_>>(), vec!["hant", "tw"]);
	/// assert_eq!(Language::ENGLISH.sub_tags().count(), 0);
	/// ```
	pub fn sub_tags(&self) -> impl Iterator<Item = &str> {
		self.0.split('-').skip(1)
	}

	/// Checks whether this tag carries subtags.
	pub fn has_sub_tags(&self) -> bool {
		self.0.contains('-')
	}
}

impl Metadata for Language {
	const CATEGORY: Category = Category::Language;

	fn all() -> Self {
		Self::ALL
	}

	/// Drops the last subtag: `zh-hant-tw` has `zh-hant` as parent, `en-us`
	/// has `en`, and `en` has `*`.
	fn parent(&self) -> Option<Self> {
		if let Some((range, _)) = self.0.rsplit_once('-') {
			Some(Self::new(range))
		} else if self.is_all() {
			None
		} else {
			Some(Self::ALL)
		}
	}

	/// A tag includes itself and every tag it is a `-`-separated prefix of.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{Language, Metadata};
	///
	/// assert!(Language::ENGLISH.includes(&Language::ENGLISH_US));
	/// assert!(!Language::ENGLISH_US.includes(&Language::ENGLISH));
	/// assert!(!Language::ENGLISH_US.includes(&Language::ENGLISH_GB));
	/// assert!(!Language::new("e").includes(&Language::ENGLISH));
	/// assert!(Language::ALL.includes(&Language::JAPANESE));
	/// ```
	fn includes(&self, other: &Self) -> bool {
		if self.is_all() || self == other {
			return true;
		}
		other
			.0
			.strip_prefix(&*self.0)
			.is_some_and(|rest| rest.starts_with('-'))
	}

	fn is_all(&self) -> bool {
		self.0 == "*"
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for Language {
	type Err = NegotiationError;

	/// Parses a single language tag.
	///
	/// Each subtag must be 1 to 8 ASCII alphanumeric characters; `*` is only
	/// accepted on its own.
	fn from_str(s: &str) -> Result<Self> {
		let tag = s.trim();
		if tag == "*" {
			return Ok(Self::ALL);
		}
		let valid = !tag.is_empty()
			&& tag
				.split('-')
				.all(|sub| (1..=8).contains(&sub.len()) && sub.bytes().all(|b| b.is_ascii_alphanumeric()));
		if !valid {
			return Err(NegotiationError::invalid_token(Category::Language, s));
		}
		Ok(Self::new(tag))
	}
}
