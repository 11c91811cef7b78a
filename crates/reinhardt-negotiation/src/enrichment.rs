//! Expansion of client preferences with parents, defaults and a catch-all.
//!
//! A client rarely lists every acceptable value. Before scoring, each raw
//! preference list is enriched so that broader values, the service default
//! and the category wildcard still score, but always far below anything the
//! client asked for explicitly:
//!
//! | entry | quality |
//! |---|---|
//! | client preference | as sent |
//! | parent of a preference | `0.005 + 0.001 * q` |
//! | service default | `0.003` |
//! | parent of the default | `0.002` |
//! | category "all" | `0.001` |

use crate::metadata::Metadata;
use crate::preference::{Preference, PreferenceList};

/// Quality base of an added parent entry.
pub const PARENT_QUALITY_BASE: f32 = 0.005;
/// Share of the child's quality carried into an added parent entry.
pub const PARENT_QUALITY_FACTOR: f32 = 0.001;
/// Quality of the service default entry.
pub const DEFAULT_QUALITY: f32 = 0.003;
/// Quality of the service default's parent entry.
pub const DEFAULT_PARENT_QUALITY: f32 = 0.002;
/// Quality of the category catch-all entry.
pub const ALL_QUALITY: f32 = 0.001;

/// Enriches a client preference list.
///
/// 1. Values the client rejected with quality `0.0` are never re-added.
/// 2. The client entries are kept in their original order.
/// 3. One forward pass over the growing list appends each entry's parent,
///    so grandparents of client values are reached through their parents.
/// 4. The service default and its parent are appended.
/// 5. Every "all" entry is dropped and a single `(all, 0.001)` is appended.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{enrich, Language, Metadata, Preference};
///
/// let user = vec![Preference::new(Language::ENGLISH_US, 1.0)];
/// let enriched = enrich(&user, Some(&Language::FRENCH));
///
/// let entries: Vec<_> = enriched
///     .iter()
///     .map(|p| (p.metadata.tag().to_string(), p.quality))
///     .collect();
/// assert_eq!(entries[0], ("en-us".to_string(), 1.0));
/// assert_eq!(entries[1].0, "en");
/// assert!((entries[1].1 - 0.006).abs() < 1e-6);
/// assert_eq!(entries.last().unwrap(), &("*".to_string(), 0.001));
/// ```
pub fn enrich<T: Metadata>(user: &[Preference<T>], default: Option<&T>) -> PreferenceList<T> {
	let undesired: Vec<&T> = user
		.iter()
		.filter(|pref| pref.is_rejection())
		.map(|pref| &pref.metadata)
		.collect();
	let can_add = |metadata: &T| !undesired.contains(&metadata);

	let mut result: Vec<Preference<T>> = user.to_vec();

	let mut i = 0;
	while i < result.len() {
		if let Some(parent) = result[i].metadata.parent()
			&& can_add(&parent)
		{
			let quality = PARENT_QUALITY_BASE + PARENT_QUALITY_FACTOR * result[i].quality;
			result.push(Preference::new(parent, quality));
		}
		i += 1;
	}

	if let Some(default) = default
		&& can_add(default)
	{
		result.push(Preference::new(default.clone(), DEFAULT_QUALITY));
		if let Some(parent) = default.parent()
			&& can_add(&parent)
		{
			result.push(Preference::new(parent, DEFAULT_PARENT_QUALITY));
		}
	}

	result.retain(|pref| !pref.metadata.is_all());
	result.push(Preference::new(T::all(), ALL_QUALITY));

	tracing::trace!(
		category = %T::CATEGORY,
		user = user.len(),
		enriched = result.len(),
		"Enriched preferences"
	);

	PreferenceList::from(result)
}
