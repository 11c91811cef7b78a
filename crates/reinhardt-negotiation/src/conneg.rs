//! Selection of the best representation variant for a client.
//!
//! A [`Conneg`] enriches the four client preference lists once, then scores
//! any number of variants against them. Each dimension yields a score in
//! `[0.0, 1.0]`, or `-1.0` when the client accepts nothing the variant
//! offers. A variant's overall score weights language over media type over
//! character set over encodings:
//!
//! ```text
//! score = (4 * language + 3 * media_type + 2 * character_set + encodings) / 9
//! ```
//!
//! Scoring stops at the first incompatible dimension, in that same order.

use crate::charset::CharacterSet;
use crate::encoding::Encoding;
use crate::enrichment::enrich;
use crate::language::Language;
use crate::media_type::MediaType;
use crate::preference::PreferenceList;
use crate::scoring::{INCOMPATIBLE, score, score_all};
use crate::service::MetadataService;
use crate::variant::Variant;

/// Raw preferences sent by a client, one list per dimension.
///
/// These usually come straight from the `Accept`, `Accept-Language`,
/// `Accept-Charset` and `Accept-Encoding` headers. An empty list means the
/// client expressed no preference for that dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientPreferences {
	pub media_types: PreferenceList<MediaType>,
	pub languages: PreferenceList<Language>,
	pub character_sets: PreferenceList<CharacterSet>,
	pub encodings: PreferenceList<Encoding>,
}

impl ClientPreferences {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_media_types(mut self, media_types: PreferenceList<MediaType>) -> Self {
		self.media_types = media_types;
		self
	}

	pub fn with_languages(mut self, languages: PreferenceList<Language>) -> Self {
		self.languages = languages;
		self
	}

	pub fn with_character_sets(mut self, character_sets: PreferenceList<CharacterSet>) -> Self {
		self.character_sets = character_sets;
		self
	}

	pub fn with_encodings(mut self, encodings: PreferenceList<Encoding>) -> Self {
		self.encodings = encodings;
		self
	}
}

/// Scores variants dimension by dimension.
///
/// Implementors provide the four per-dimension scores; the overall weighting
/// and the selection among variants are shared.
pub trait VariantScorer {
	fn score_language(&self, language: Option<&Language>) -> f32;

	fn score_media_type(&self, media_type: Option<&MediaType>) -> f32;

	fn score_character_set(&self, character_set: Option<&CharacterSet>) -> f32;

	fn score_encodings(&self, encodings: &[Encoding]) -> f32;

	/// Scores a variant, or returns `-1.0` as soon as one dimension is
	/// incompatible.
	fn score_variant(&self, variant: &Variant) -> f32 {
		let language = self.score_language(variant.language.as_ref());
		if language == INCOMPATIBLE {
			return INCOMPATIBLE;
		}
		let media_type = self.score_media_type(variant.media_type.as_ref());
		if media_type == INCOMPATIBLE {
			return INCOMPATIBLE;
		}
		let character_set = self.score_character_set(variant.character_set.as_ref());
		if character_set == INCOMPATIBLE {
			return INCOMPATIBLE;
		}
		let encodings = self.score_encodings(&variant.encodings);
		if encodings == INCOMPATIBLE {
			return INCOMPATIBLE;
		}
		(4.0 * language + 3.0 * media_type + 2.0 * character_set + encodings) / 9.0
	}

	/// Returns the highest scored variant.
	///
	/// Ties keep the earliest variant. When every variant is incompatible the
	/// first one is still returned; use [`VariantScorer::select_variant`] to
	/// tell the two situations apart.
	fn preferred_variant<'a>(&self, variants: &'a [Variant]) -> Option<&'a Variant> {
		best_scored(self, variants).map(|(variant, _)| variant)
	}

	/// Selects the highest scored variant and classifies the outcome.
	fn select_variant<'a>(&self, variants: &'a [Variant]) -> VariantSelection<'a> {
		match best_scored(self, variants) {
			None => VariantSelection::NoVariants,
			Some((variant, score)) if score == INCOMPATIBLE => {
				tracing::debug!(candidates = variants.len(), "No acceptable variant");
				VariantSelection::Incompatible { variant }
			}
			Some((variant, score)) => VariantSelection::Preferred { variant, score },
		}
	}
}

/// Outcome of [`VariantScorer::select_variant`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariantSelection<'a> {
	/// The client accepts `variant`, which scored best.
	Preferred { variant: &'a Variant, score: f32 },
	/// Nothing the resource offers is acceptable; `variant` is the first one
	/// offered, for callers that serve it anyway.
	Incompatible { variant: &'a Variant },
	/// The resource offered no variant.
	NoVariants,
}

impl<'a> VariantSelection<'a> {
	/// Returns the selected variant when the client accepts it.
	pub fn preferred(&self) -> Option<&'a Variant> {
		match self {
			Self::Preferred { variant, .. } => Some(variant),
			_ => None,
		}
	}

	pub fn is_acceptable(&self) -> bool {
		matches!(self, Self::Preferred { .. })
	}
}

fn best_scored<'a, S>(scorer: &S, variants: &'a [Variant]) -> Option<(&'a Variant, f32)>
where
	S: VariantScorer + ?Sized,
{
	let mut best: Option<(&'a Variant, f32)> = None;
	for variant in variants {
		let score = scorer.score_variant(variant);
		tracing::trace!(
			variant = variant.identifier.as_deref().unwrap_or("<anonymous>"),
			score,
			"Scored variant"
		);
		if best.is_none_or(|(_, best_score)| score > best_score) {
			best = Some((variant, score));
		}
	}
	best
}

/// Negotiation context for one client, holding its enriched preferences.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{
///     ClientPreferences, Conneg, Language, MediaType, MetadataService, PreferenceList,
///     Variant, VariantScorer,
/// };
///
/// let client = ClientPreferences::new()
///     .with_media_types(PreferenceList::new().with(MediaType::TEXT_HTML, 1.0))
///     .with_languages(
///         PreferenceList::new()
///             .with(Language::FRENCH, 1.0)
///             .with(Language::ENGLISH, 0.5),
///     );
/// let conneg = Conneg::new(&client, &MetadataService::new());
///
/// let variants = vec![
///     Variant::new().with_media_type(MediaType::TEXT_HTML).with_language(Language::ENGLISH),
///     Variant::new().with_media_type(MediaType::TEXT_HTML).with_language(Language::FRENCH_FRANCE),
///     Variant::new().with_media_type(MediaType::APPLICATION_JSON).with_language(Language::FRENCH),
/// ];
///
/// let best = conneg.preferred_variant(&variants).unwrap();
/// assert_eq!(best.language, Some(Language::FRENCH_FRANCE));
/// ```
#[derive(Debug, Clone)]
pub struct Conneg {
	media_types: PreferenceList<MediaType>,
	languages: PreferenceList<Language>,
	character_sets: PreferenceList<CharacterSet>,
	encodings: PreferenceList<Encoding>,
}

impl Conneg {
	/// Enriches the client preferences with the service defaults.
	pub fn new(client: &ClientPreferences, service: &MetadataService) -> Self {
		let use_defaults = service.use_defaults();
		Self {
			media_types: enrich(
				&client.media_types,
				use_defaults.then(|| service.default_media_type()),
			),
			languages: enrich(
				&client.languages,
				use_defaults.then(|| service.default_language()),
			),
			character_sets: enrich(
				&client.character_sets,
				use_defaults.then(|| service.default_character_set()),
			),
			encodings: enrich(
				&client.encodings,
				use_defaults.then(|| service.default_encoding()),
			),
		}
	}

	pub fn media_types(&self) -> &PreferenceList<MediaType> {
		&self.media_types
	}

	pub fn languages(&self) -> &PreferenceList<Language> {
		&self.languages
	}

	pub fn character_sets(&self) -> &PreferenceList<CharacterSet> {
		&self.character_sets
	}

	pub fn encodings(&self) -> &PreferenceList<Encoding> {
		&self.encodings
	}
}

impl VariantScorer for Conneg {
	fn score_language(&self, language: Option<&Language>) -> f32 {
		score(language, &self.languages)
	}

	fn score_media_type(&self, media_type: Option<&MediaType>) -> f32 {
		score(media_type, &self.media_types)
	}

	fn score_character_set(&self, character_set: Option<&CharacterSet>) -> f32 {
		score(character_set, &self.character_sets)
	}

	fn score_encodings(&self, encodings: &[Encoding]) -> f32 {
		score_all(encodings, &self.encodings)
	}
}
