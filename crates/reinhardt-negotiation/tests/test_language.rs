use reinhardt_negotiation::{
	ClientPreferences, Conneg, Language, Metadata, MetadataService, PreferenceList, Variant,
	VariantScorer, VariantSelection, enrich, score,
};
use rstest::rstest;

fn available(tags: &[&str]) -> Vec<Variant> {
	tags.iter()
		.map(|tag| {
			Variant::new()
				.with_language(Language::new(*tag))
				.with_identifier(*tag)
		})
		.collect()
}

fn negotiate(prefs: PreferenceList<Language>, variants: &[Variant]) -> Option<String> {
	let client = ClientPreferences::new().with_languages(prefs);
	let conneg = Conneg::new(&client, &MetadataService::new());
	conneg
		.preferred_variant(variants)
		.and_then(|variant| variant.identifier.clone())
}

#[test]
fn test_language_parse_normalizes_case() {
	let lang: Language = "en-US".parse().unwrap();
	assert_eq!(lang, Language::ENGLISH_US);
	assert_eq!(lang.tag(), "en-us");
	assert_eq!(lang.primary_tag(), "en");
	assert_eq!(lang.sub_tags().collect::<Vec<_>>(), vec!["us"]);
}

#[test]
fn test_language_without_region() {
	let lang: Language = "ja".parse().unwrap();
	assert_eq!(lang.primary_tag(), "ja");
	assert!(!lang.has_sub_tags());
	assert_eq!(lang.parent(), Some(Language::ALL));
}

#[rstest]
#[case(Language::ENGLISH, Language::ENGLISH_US, true)]
#[case(Language::ENGLISH, Language::ENGLISH_GB, true)]
#[case(Language::ENGLISH_US, Language::ENGLISH_US, true)]
#[case(Language::ENGLISH_US, Language::ENGLISH, false)]
#[case(Language::ENGLISH_US, Language::ENGLISH_GB, false)]
#[case(Language::ENGLISH, Language::FRENCH, false)]
#[case(Language::ALL, Language::FRENCH_FRANCE, true)]
fn test_language_includes(
	#[case] broader: Language,
	#[case] narrower: Language,
	#[case] expected: bool,
) {
	assert_eq!(broader.includes(&narrower), expected);
}

#[test]
fn test_regional_preference_reaches_primary_language() {
	// Arrange: the client only lists en-gb
	let prefs = enrich(
		&PreferenceList::new().with(Language::ENGLISH_GB, 1.0),
		None,
	);

	// Act
	let primary = score(Some(&Language::ENGLISH), &prefs);
	let sibling = score(Some(&Language::ENGLISH_US), &prefs);

	// Assert: "en" was added as a low-quality parent, which includes en-us
	assert!(primary > 0.005 && primary < 0.01);
	assert_eq!(sibling, primary);
}

#[test]
fn test_negotiate_simple() {
	let variants = available(&["en", "fr", "ja"]);
	let result = negotiate(PreferenceList::new().with(Language::FRENCH, 1.0), &variants);
	assert_eq!(result.as_deref(), Some("fr"));
}

#[test]
fn test_negotiate_with_quality() {
	let variants = available(&["en", "fr", "ja"]);
	let prefs = PreferenceList::new()
		.with(Language::FRENCH, 0.5)
		.with(Language::ENGLISH, 0.9);
	assert_eq!(negotiate(prefs, &variants).as_deref(), Some("en"));
}

#[test]
fn test_negotiate_with_region() {
	let variants = available(&["en-us", "en-gb", "fr"]);

	let exact = negotiate(PreferenceList::new().with(Language::ENGLISH_GB, 1.0), &variants);
	assert_eq!(exact.as_deref(), Some("en-gb"));

	// A bare "en" includes every regional variant; the first offered wins
	let broad = negotiate(PreferenceList::new().with(Language::ENGLISH, 1.0), &variants);
	assert_eq!(broad.as_deref(), Some("en-us"));
}

#[test]
fn test_negotiate_falls_back_to_service_default() {
	// Neither de nor es is offered; en-us is the service default language
	let variants = available(&["fr", "en-us"]);
	let prefs = PreferenceList::new()
		.with(Language::GERMAN, 1.0)
		.with(Language::SPANISH, 0.8);
	assert_eq!(negotiate(prefs, &variants).as_deref(), Some("en-us"));
}

#[test]
fn test_negotiate_custom_default() {
	let service = MetadataService::new().with_default_language(Language::JAPANESE);
	let client = ClientPreferences::new()
		.with_languages(PreferenceList::new().with(Language::GERMAN, 1.0));
	let variants = available(&["fr", "ja"]);

	let conneg = Conneg::new(&client, &service);
	let best = conneg.preferred_variant(&variants).unwrap();
	assert_eq!(best.language, Some(Language::JAPANESE));
}

#[test]
fn test_rejected_language_leaves_others_acceptable() {
	// Rejections pin only the rejected values; "fr" still scores through "*"
	let client = ClientPreferences::new()
		.with_languages(PreferenceList::new().with(Language::ENGLISH, 0.0));
	let conneg = Conneg::new(&client, &MetadataService::new());
	let variants = available(&["en", "fr"]);

	let selection = conneg.select_variant(&variants);
	match selection {
		VariantSelection::Preferred { variant, score } => {
			assert_eq!(variant.language, Some(Language::FRENCH));
			assert!(score > 0.0);
		}
		other => panic!("unexpected selection: {other:?}"),
	}
}

#[test]
fn test_without_defaults_unlisted_language_scores_through_catch_all() {
	// Arrange: no defaults, and the client's only language is not offered
	let service = MetadataService::new().with_use_defaults(false);
	let client = ClientPreferences::new()
		.with_languages(PreferenceList::new().with(Language::GERMAN, 1.0));
	let conneg = Conneg::new(&client, &service);

	// Act & Assert: "*" is always appended
	assert!(conneg.score_language(Some(&Language::ITALIAN)) > 0.0);
	assert_eq!(conneg.score_language(None), 0.0);
}
