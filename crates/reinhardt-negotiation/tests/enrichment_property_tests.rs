//! Enrichment property-based tests
//!
//! Property-based tests for preference enrichment and scoring.

use proptest::prelude::*;
use reinhardt_negotiation::enrichment::ALL_QUALITY;
use reinhardt_negotiation::{
	Language, MediaType, Metadata, Preference, PreferenceList, enrich, score,
};

const LANGUAGES: &[&str] = &["en", "en-us", "en-gb", "fr", "fr-ca", "de", "de-at", "ja"];

const MEDIA_TYPES: &[(&str, &str)] = &[
	("text", "html"),
	("text", "plain"),
	("text", "*"),
	("application", "json"),
	("application", "xml"),
	("application", "*"),
	("image", "png"),
];

fn quality() -> impl Strategy<Value = f32> {
	prop_oneof![Just(0.0f32), Just(1.0f32), (1u32..=999).prop_map(|q| q as f32 / 1000.0)]
}

fn language_prefs() -> impl Strategy<Value = PreferenceList<Language>> {
	prop::collection::btree_map(0..LANGUAGES.len(), quality(), 0..6).prop_map(|entries| {
		entries
			.into_iter()
			.map(|(i, q)| Preference::new(Language::new(LANGUAGES[i]), q))
			.collect()
	})
}

fn media_type_prefs() -> impl Strategy<Value = PreferenceList<MediaType>> {
	prop::collection::btree_map(0..MEDIA_TYPES.len(), quality(), 0..6).prop_map(|entries| {
		entries
			.into_iter()
			.map(|(i, q)| {
				let (main, sub) = MEDIA_TYPES[i];
				Preference::new(MediaType::new(main, sub), q)
			})
			.collect()
	})
}

fn default_language() -> impl Strategy<Value = Option<Language>> {
	prop::option::of((0..LANGUAGES.len()).prop_map(|i| Language::new(LANGUAGES[i])))
}

// ============================================================================
// Property-Based Tests: wildcard uniqueness
// ============================================================================

proptest! {
	/// Test: single trailing catch-all
	///
	/// Category: Property
	/// Verifies that exactly one "all" entry survives, last, at 0.001.
	#[test]
	fn prop_single_trailing_catch_all(prefs in language_prefs(), default in default_language()) {
		let enriched = enrich(&prefs, default.as_ref());

		let alls = enriched.iter().filter(|p| p.metadata.is_all()).count();
		prop_assert_eq!(alls, 1);
		let last = enriched.last().unwrap();
		prop_assert!(last.metadata.is_all());
		prop_assert_eq!(last.quality, ALL_QUALITY);
	}

	/// Test: media type catch-all
	///
	/// Category: Property
	/// Verifies that explicit wildcard entries from the client are collapsed.
	#[test]
	fn prop_media_type_catch_all(prefs in media_type_prefs()) {
		let mut with_all = prefs.clone();
		with_all.push(Preference::new(MediaType::ALL, 0.5));

		let enriched = enrich(&with_all, Some(&MediaType::APPLICATION_OCTET_STREAM));

		prop_assert_eq!(enriched.iter().filter(|p| p.metadata == MediaType::ALL).count(), 1);
		prop_assert_eq!(enriched.quality_of(&MediaType::ALL), Some(ALL_QUALITY));
	}

	/// Test: client entries first
	///
	/// Category: Property
	/// Verifies that the client's own entries open the list in their order.
	#[test]
	fn prop_client_entries_prefix(prefs in language_prefs(), default in default_language()) {
		let enriched = enrich(&prefs, default.as_ref());

		prop_assert!(enriched.len() > prefs.len());
		prop_assert_eq!(&enriched[..prefs.len()], &prefs[..]);
	}
}

// ============================================================================
// Property-Based Tests: rejection propagation
// ============================================================================

proptest! {
	/// Test: rejections are never re-added
	///
	/// Category: Property
	/// Verifies that enrichment adds no positive entry for a rejected value.
	#[test]
	fn prop_rejections_never_readded(prefs in language_prefs(), default in default_language()) {
		let enriched = enrich(&prefs, default.as_ref());

		for rejected in prefs.iter().filter(|p| p.is_rejection()) {
			for entry in enriched.iter().filter(|p| p.metadata == rejected.metadata) {
				prop_assert_eq!(entry.quality, 0.0);
			}
		}
	}

	/// Test: rejected values score zero
	///
	/// Category: Property
	/// Verifies that an exactly rejected value scores 0.0 whatever else matches.
	#[test]
	fn prop_rejected_values_score_zero(prefs in media_type_prefs()) {
		let enriched = enrich(&prefs, Some(&MediaType::APPLICATION_OCTET_STREAM));

		for rejected in prefs.iter().filter(|p| p.is_rejection()) {
			prop_assert_eq!(score(Some(&rejected.metadata), &enriched), 0.0);
		}
	}

	/// Test: enriched lists accept everything
	///
	/// Category: Property
	/// Verifies that a value nobody rejected never scores -1.0 after enrichment.
	#[test]
	fn prop_unrejected_values_are_compatible(
		prefs in language_prefs(),
		candidate in 0..LANGUAGES.len(),
	) {
		let candidate = Language::new(LANGUAGES[candidate]);
		prop_assume!(!prefs.is_rejected(&candidate));

		let enriched = enrich(&prefs, None);
		prop_assert!(score(Some(&candidate), &enriched) > 0.0);
	}
}
