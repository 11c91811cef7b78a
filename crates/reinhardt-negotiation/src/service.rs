//! Default metadata and file extension mappings.

use crate::charset::CharacterSet;
use crate::encoding::Encoding;
use crate::error::Result;
use crate::language::Language;
use crate::media_type::MediaType;
use crate::metadata::MetadataValue;
use crate::settings::NegotiationSettings;

/// A file extension mapped to a metadata value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionMapping {
	pub extension: String,
	pub metadata: MetadataValue,
}

/// Defaults and extension mappings shared by every negotiation.
///
/// The service is built once and then only read, so it can be shared across
/// request handlers behind an `Arc`. The defaults are added to enriched
/// preference lists at very low quality, letting a representation that only
/// declares the default still win when nothing better matches.
///
/// Extensions are matched case-insensitively. An extension may be mapped in
/// several categories (`xml` to a media type, `en` to a language); lookups
/// return the first mapping registered for the requested category.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{MetadataService, MediaType, Language, Encoding};
///
/// let service = MetadataService::new()
///     .add_extension("geojson", MediaType::new("application", "geo+json"));
///
/// assert_eq!(service.default_media_type(), &MediaType::APPLICATION_OCTET_STREAM);
/// assert_eq!(service.media_type("JSON"), Some(&MediaType::APPLICATION_JSON));
/// assert_eq!(service.language("fr"), Some(&Language::FRENCH));
/// assert_eq!(service.encoding("gz"), Some(&Encoding::GZIP));
/// assert_eq!(service.extension_for_media_type(&MediaType::TEXT_PLAIN), Some("txt"));
/// assert!(service.media_type("geojson").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct MetadataService {
	default_media_type: MediaType,
	default_language: Language,
	default_character_set: CharacterSet,
	default_encoding: Encoding,
	use_defaults: bool,
	mappings: Vec<ExtensionMapping>,
}

impl Default for MetadataService {
	fn default() -> Self {
		Self::new()
	}
}

impl MetadataService {
	/// Creates a service with the standard defaults and the common extensions.
	pub fn new() -> Self {
		Self::without_extensions().with_common_extensions()
	}

	/// Creates a service with the standard defaults and no extension mapping.
	pub fn without_extensions() -> Self {
		Self {
			default_media_type: MediaType::APPLICATION_OCTET_STREAM,
			default_language: Language::ENGLISH_US,
			default_character_set: CharacterSet::UTF_8,
			default_encoding: Encoding::IDENTITY,
			use_defaults: true,
			mappings: Vec::new(),
		}
	}

	/// Builds a service from parsed settings.
	///
	/// # Errors
	///
	/// Returns [`NegotiationError::InvalidToken`](crate::NegotiationError::InvalidToken)
	/// when a default or a mapped value is not a valid token.
	pub fn from_settings(settings: &NegotiationSettings) -> Result<Self> {
		let mut service = Self::without_extensions()
			.with_default_media_type(settings.default_media_type.parse()?)
			.with_default_language(settings.default_language.parse()?)
			.with_default_character_set(settings.default_character_set.parse()?)
			.with_default_encoding(settings.default_encoding.parse()?)
			.with_use_defaults(settings.use_defaults);

		if settings.common_extensions {
			service = service.with_common_extensions();
		}

		let extensions = &settings.extensions;
		for (ext, value) in &extensions.media_types {
			service = service.add_extension(ext, value.parse::<MediaType>()?);
		}
		for (ext, value) in &extensions.languages {
			service = service.add_extension(ext, value.parse::<Language>()?);
		}
		for (ext, value) in &extensions.character_sets {
			service = service.add_extension(ext, value.parse::<CharacterSet>()?);
		}
		for (ext, value) in &extensions.encodings {
			service = service.add_extension(ext, value.parse::<Encoding>()?);
		}

		tracing::debug!(
			default_media_type = %service.default_media_type,
			default_language = %service.default_language,
			use_defaults = service.use_defaults,
			mappings = service.mappings.len(),
			"Built metadata service from settings"
		);

		Ok(service)
	}

	pub fn with_default_media_type(mut self, media_type: MediaType) -> Self {
		self.default_media_type = media_type;
		self
	}

	pub fn with_default_language(mut self, language: Language) -> Self {
		self.default_language = language;
		self
	}

	pub fn with_default_character_set(mut self, character_set: CharacterSet) -> Self {
		self.default_character_set = character_set;
		self
	}

	pub fn with_default_encoding(mut self, encoding: Encoding) -> Self {
		self.default_encoding = encoding;
		self
	}

	/// Controls whether the defaults take part in preference enrichment.
	pub fn with_use_defaults(mut self, use_defaults: bool) -> Self {
		self.use_defaults = use_defaults;
		self
	}

	pub fn default_media_type(&self) -> &MediaType {
		&self.default_media_type
	}

	pub fn default_language(&self) -> &Language {
		&self.default_language
	}

	pub fn default_character_set(&self) -> &CharacterSet {
		&self.default_character_set
	}

	pub fn default_encoding(&self) -> &Encoding {
		&self.default_encoding
	}

	pub fn use_defaults(&self) -> bool {
		self.use_defaults
	}

	/// Maps an extension after every existing mapping.
	pub fn add_extension(mut self, extension: &str, metadata: impl Into<MetadataValue>) -> Self {
		self.mappings.push(ExtensionMapping {
			extension: extension.to_ascii_lowercase(),
			metadata: metadata.into(),
		});
		self
	}

	/// Maps an extension ahead of every existing mapping, making it the one
	/// returned by reverse lookups for its metadata.
	pub fn add_preferred_extension(
		mut self,
		extension: &str,
		metadata: impl Into<MetadataValue>,
	) -> Self {
		self.mappings.insert(
			0,
			ExtensionMapping {
				extension: extension.to_ascii_lowercase(),
				metadata: metadata.into(),
			},
		);
		self
	}

	pub fn clear_extensions(mut self) -> Self {
		self.mappings.clear();
		self
	}

	pub fn mappings(&self) -> &[ExtensionMapping] {
		&self.mappings
	}

	/// Returns the first metadata mapped to `extension`, in any category.
	pub fn metadata_for_extension(&self, extension: &str) -> Option<&MetadataValue> {
		self.mappings_for(extension).next()
	}

	pub fn media_type(&self, extension: &str) -> Option<&MediaType> {
		self.mappings_for(extension).find_map(|value| match value {
			MetadataValue::MediaType(media_type) => Some(media_type),
			_ => None,
		})
	}

	pub fn language(&self, extension: &str) -> Option<&Language> {
		self.mappings_for(extension).find_map(|value| match value {
			MetadataValue::Language(language) => Some(language),
			_ => None,
		})
	}

	pub fn character_set(&self, extension: &str) -> Option<&CharacterSet> {
		self.mappings_for(extension).find_map(|value| match value {
			MetadataValue::CharacterSet(character_set) => Some(character_set),
			_ => None,
		})
	}

	pub fn encoding(&self, extension: &str) -> Option<&Encoding> {
		self.mappings_for(extension).find_map(|value| match value {
			MetadataValue::Encoding(encoding) => Some(encoding),
			_ => None,
		})
	}

	/// Returns the first extension mapped to exactly `metadata`.
	pub fn extension_for(&self, metadata: &MetadataValue) -> Option<&str> {
		self.mappings
			.iter()
			.find(|mapping| mapping.metadata == *metadata)
			.map(|mapping| mapping.extension.as_str())
	}

	pub fn extension_for_media_type(&self, media_type: &MediaType) -> Option<&str> {
		self.mappings
			.iter()
			.find(|mapping| {
				matches!(&mapping.metadata, MetadataValue::MediaType(m) if m == media_type)
			})
			.map(|mapping| mapping.extension.as_str())
	}

	// Stored extensions are lowercased on registration.
	fn mappings_for<'a>(
		&'a self,
		extension: &str,
	) -> impl Iterator<Item = &'a MetadataValue> + use<'a> {
		let key = extension.to_ascii_lowercase();
		self.mappings
			.iter()
			.filter(move |mapping| mapping.extension == key)
			.map(|mapping| &mapping.metadata)
	}

	fn with_common_extensions(mut self) -> Self {
		for (extension, metadata) in common_extensions() {
			self = self.add_extension(extension, metadata);
		}
		self.add_preferred_extension("txt", MediaType::TEXT_PLAIN)
	}
}

fn common_extensions() -> Vec<(&'static str, MetadataValue)> {
	vec![
		("de", Language::GERMAN.into()),
		("en", Language::ENGLISH.into()),
		("es", Language::SPANISH.into()),
		("fr", Language::FRENCH.into()),
		("it", Language::ITALIAN.into()),
		("ja", Language::JAPANESE.into()),
		("ascii", CharacterSet::US_ASCII.into()),
		("latin1", CharacterSet::ISO_8859_1.into()),
		("utf8", CharacterSet::UTF_8.into()),
		("utf16", CharacterSet::UTF_16.into()),
		("br", Encoding::BROTLI.into()),
		("gz", Encoding::GZIP.into()),
		("zst", Encoding::ZSTD.into()),
		("atom", MediaType::APPLICATION_ATOM_XML.into()),
		("bin", MediaType::APPLICATION_OCTET_STREAM.into()),
		("css", MediaType::TEXT_CSS.into()),
		("csv", MediaType::TEXT_CSV.into()),
		("exe", MediaType::APPLICATION_OCTET_STREAM.into()),
		("gif", MediaType::IMAGE_GIF.into()),
		("htm", MediaType::TEXT_HTML.into()),
		("html", MediaType::TEXT_HTML.into()),
		("jpe", MediaType::IMAGE_JPEG.into()),
		("jpeg", MediaType::IMAGE_JPEG.into()),
		("jpg", MediaType::IMAGE_JPEG.into()),
		("js", MediaType::TEXT_JAVASCRIPT.into()),
		("json", MediaType::APPLICATION_JSON.into()),
		("pdf", MediaType::APPLICATION_PDF.into()),
		("png", MediaType::IMAGE_PNG.into()),
		("rss", MediaType::from_static("application", "rss+xml").into()),
		("rtf", MediaType::from_static("application", "rtf").into()),
		("svg", MediaType::IMAGE_SVG.into()),
		("tar", MediaType::from_static("application", "x-tar").into()),
		("xht", MediaType::APPLICATION_XHTML.into()),
		("xhtml", MediaType::APPLICATION_XHTML.into()),
		("xml", MediaType::TEXT_XML.into()),
		("xml", MediaType::APPLICATION_XML.into()),
		("yaml", MediaType::APPLICATION_YAML.into()),
		("yml", MediaType::APPLICATION_YAML.into()),
		("z", MediaType::from_static("application", "x-compress").into()),
		("zip", MediaType::from_static("application", "zip").into()),
	]
}
