//! Representation variants offered by a resource.

use crate::charset::CharacterSet;
use crate::encoding::Encoding;
use crate::language::Language;
use crate::media_type::MediaType;

/// One concrete representation a resource can produce.
///
/// Every dimension is optional; an absent dimension puts no constraint on
/// the client and scores neutrally.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{Variant, MediaType, Language, Encoding};
///
/// let variant = Variant::new()
///     .with_media_type(MediaType::TEXT_HTML)
///     .with_language(Language::FRENCH)
///     .with_encoding(Encoding::GZIP)
///     .with_identifier("/index.fr.html.gz");
///
/// assert_eq!(variant.media_type, Some(MediaType::TEXT_HTML));
/// assert_eq!(variant.encodings, vec![Encoding::GZIP]);
/// assert_eq!(variant.identifier.as_deref(), Some("/index.fr.html.gz"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variant {
	pub media_type: Option<MediaType>,
	pub language: Option<Language>,
	pub character_set: Option<CharacterSet>,
	pub encodings: Vec<Encoding>,
	/// Location or name of the representation, for the caller's use.
	pub identifier: Option<String>,
}

impl Variant {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_media_type(mut self, media_type: MediaType) -> Self {
		self.media_type = Some(media_type);
		self
	}

	pub fn with_language(mut self, language: Language) -> Self {
		self.language = Some(language);
		self
	}

	pub fn with_character_set(mut self, character_set: CharacterSet) -> Self {
		self.character_set = Some(character_set);
		self
	}

	/// Appends an encoding; encodings are applied in insertion order.
	pub fn with_encoding(mut self, encoding: Encoding) -> Self {
		self.encodings.push(encoding);
		self
	}

	pub fn with_encodings(mut self, encodings: impl IntoIterator<Item = Encoding>) -> Self {
		self.encodings.extend(encodings);
		self
	}

	pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
		self.identifier = Some(identifier.into());
		self
	}
}
