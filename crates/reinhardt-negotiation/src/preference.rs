//! Quality-weighted preferences and preference lists.

use crate::error::{NegotiationError, Result};
use crate::metadata::Metadata;
use std::ops::Deref;

/// A metadata value with a quality weight in `[0.0, 1.0]`.
///
/// A quality of `0.0` is an explicit rejection ("not acceptable").
#[derive(Debug, Clone, PartialEq)]
pub struct Preference<T> {
	pub metadata: T,
	pub quality: f32,
}

impl<T: Metadata> Preference<T> {
	/// Creates a preference.
	///
	/// Callers hand in qualities already validated by the header parser; the
	/// range is only checked in debug builds. Use [`Preference::try_new`] for
	/// unvalidated input.
	pub fn new(metadata: T, quality: f32) -> Self {
		debug_assert!(
			(0.0..=1.0).contains(&quality),
			"quality {quality} is outside of [0.0, 1.0]"
		);
		Self { metadata, quality }
	}

	/// Creates a preference after checking the quality range.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{Preference, Language, NegotiationError};
	///
	/// assert!(Preference::try_new(Language::FRENCH, 0.8).is_ok());
	/// assert_eq!(
	///     Preference::try_new(Language::FRENCH, 1.5),
	///     Err(NegotiationError::InvalidQuality(1.5)),
	/// );
	/// ```
	pub fn try_new(metadata: T, quality: f32) -> Result<Self> {
		if !(0.0..=1.0).contains(&quality) {
			return Err(NegotiationError::InvalidQuality(quality));
		}
		Ok(Self { metadata, quality })
	}

	/// Creates a preference with quality `1.0`.
	pub fn preferred(metadata: T) -> Self {
		Self::new(metadata, 1.0)
	}

	/// Creates an explicit rejection (quality `0.0`).
	pub fn rejected(metadata: T) -> Self {
		Self::new(metadata, 0.0)
	}

	/// Checks whether this preference explicitly rejects its metadata.
	pub fn is_rejection(&self) -> bool {
		self.quality == 0.0
	}
}

/// An ordered list of preferences for one metadata category.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{PreferenceList, MediaType};
///
/// let accept = PreferenceList::new()
///     .with(MediaType::TEXT_HTML, 1.0)
///     .with(MediaType::APPLICATION_XML, 0.9)
///     .with(MediaType::IMAGE_PNG, 0.0);
///
/// assert_eq!(accept.len(), 3);
/// assert!(accept.is_rejected(&MediaType::IMAGE_PNG));
/// assert_eq!(accept.quality_of(&MediaType::APPLICATION_XML), Some(0.9));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceList<T> {
	entries: Vec<Preference<T>>,
}

impl<T: Metadata> PreferenceList<T> {
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// Appends a preference and returns the list, for chained construction.
	pub fn with(mut self, metadata: T, quality: f32) -> Self {
		self.push(Preference::new(metadata, quality));
		self
	}

	pub fn push(&mut self, preference: Preference<T>) {
		self.entries.push(preference);
	}

	/// Checks whether `metadata` carries an explicit `0.0` quality.
	pub fn is_rejected(&self, metadata: &T) -> bool {
		self.entries
			.iter()
			.any(|pref| pref.is_rejection() && pref.metadata == *metadata)
	}

	/// Returns the quality of the first entry equal to `metadata`.
	pub fn quality_of(&self, metadata: &T) -> Option<f32> {
		self.entries
			.iter()
			.find(|pref| pref.metadata == *metadata)
			.map(|pref| pref.quality)
	}

	/// Returns a copy sorted by descending quality.
	///
	/// The sort is stable: entries of equal quality keep their order.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{PreferenceList, Language};
	///
	/// let prefs = PreferenceList::new()
	///     .with(Language::ENGLISH, 0.5)
	///     .with(Language::FRENCH, 0.9)
	///     .with(Language::GERMAN, 0.5);
	/// let sorted = prefs.sorted_by_quality();
	/// let tags: Vec<_> = sorted.iter().map(|p| p.metadata.tag()).collect();
	/// assert_eq!(tags, vec!["fr", "en", "de"]);
	/// ```
	pub fn sorted_by_quality(&self) -> Self {
		let mut entries = self.entries.clone();
		entries.sort_by(|a, b| b.quality.total_cmp(&a.quality));
		Self { entries }
	}

	pub fn into_vec(self) -> Vec<Preference<T>> {
		self.entries
	}
}

impl<T: Metadata> Default for PreferenceList<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Deref for PreferenceList<T> {
	type Target = [Preference<T>];

	fn deref(&self) -> &Self::Target {
		&self.entries
	}
}

impl<T> From<Vec<Preference<T>>> for PreferenceList<T> {
	fn from(entries: Vec<Preference<T>>) -> Self {
		Self { entries }
	}
}

impl<T> FromIterator<Preference<T>> for PreferenceList<T> {
	fn from_iter<I: IntoIterator<Item = Preference<T>>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl<T: Metadata> FromIterator<(T, f32)> for PreferenceList<T> {
	fn from_iter<I: IntoIterator<Item = (T, f32)>>(iter: I) -> Self {
		iter.into_iter()
			.map(|(metadata, quality)| Preference::new(metadata, quality))
			.collect()
	}
}

impl<'a, T> IntoIterator for &'a PreferenceList<T> {
	type Item = &'a Preference<T>;
	type IntoIter = std::slice::Iter<'a, Preference<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
