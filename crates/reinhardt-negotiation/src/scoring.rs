//! Scoring of metadata values against enriched preference lists.

use crate::metadata::Metadata;
use crate::preference::Preference;

/// Score of a value no preference includes.
pub const INCOMPATIBLE: f32 = -1.0;
/// Score of an absent value, which puts no constraint on the client.
pub const NEUTRAL: f32 = 0.0;

/// Scores a single value against a preference list.
///
/// Returns [`NEUTRAL`] for an absent value, otherwise the highest quality of
/// the preferences including the value, or [`INCOMPATIBLE`] when none does.
///
/// An explicit `0.0` rejection of exactly this value is the best match for
/// it: the score is `0.0` even when broader entries such as the enriched
/// catch-all would include it.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{score, enrich, Language, Preference, INCOMPATIBLE, NEUTRAL};
///
/// let prefs = vec![
///     Preference::new(Language::FRENCH, 0.8),
///     Preference::new(Language::ENGLISH, 0.2),
/// ];
/// assert_eq!(score(Some(&Language::FRENCH_FRANCE), &prefs), 0.8);
/// assert_eq!(score(Some(&Language::GERMAN), &prefs), INCOMPATIBLE);
/// assert_eq!(score(Some(&Language::ENGLISH), &prefs), 0.2);
/// assert_eq!(score(None, &prefs), NEUTRAL);
///
/// // The enriched catch-all lets unlisted languages match
/// let enriched = enrich(&prefs, None);
/// assert_eq!(score(Some(&Language::FRENCH), &enriched), 0.8);
/// assert!(score(Some(&Language::GERMAN), &enriched) > 0.0);
/// ```
pub fn score<T: Metadata>(value: Option<&T>, prefs: &[Preference<T>]) -> f32 {
	match value {
		Some(value) => best_quality(value, prefs).unwrap_or(INCOMPATIBLE),
		None => NEUTRAL,
	}
}

/// Scores a list of values against a preference list.
///
/// Returns [`NEUTRAL`] for an empty list, otherwise the highest quality over
/// every (preference, value) pair where the preference includes the value,
/// or [`INCOMPATIBLE`] when no pair matches.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{score_all, Encoding, Preference, INCOMPATIBLE, NEUTRAL};
///
/// let prefs = vec![
///     Preference::new(Encoding::GZIP, 1.0),
///     Preference::new(Encoding::DEFLATE, 0.5),
/// ];
/// assert_eq!(score_all(&[Encoding::DEFLATE, Encoding::GZIP], &prefs), 1.0);
/// assert_eq!(score_all(&[Encoding::BROTLI], &prefs), INCOMPATIBLE);
/// assert_eq!(score_all(&[], &prefs), NEUTRAL);
/// ```
pub fn score_all<T: Metadata>(values: &[T], prefs: &[Preference<T>]) -> f32 {
	if values.is_empty() {
		return NEUTRAL;
	}
	values
		.iter()
		.filter_map(|value| best_quality(value, prefs))
		.fold(INCOMPATIBLE, f32::max)
}

/// Highest quality among the preferences including `value`, if any.
fn best_quality<T: Metadata>(value: &T, prefs: &[Preference<T>]) -> Option<f32> {
	if prefs
		.iter()
		.any(|pref| pref.is_rejection() && pref.metadata == *value)
	{
		return Some(0.0);
	}
	prefs
		.iter()
		.filter(|pref| pref.metadata.includes(value))
		.map(|pref| pref.quality)
		.reduce(f32::max)
}
