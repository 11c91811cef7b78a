//! TOML-backed negotiation settings.
//!
//! ```toml
//! default_media_type = "application/json"
//! default_language = "fr"
//! common_extensions = true
//!
//! [extensions.media_types]
//! geojson = "application/geo+json"
//!
//! [extensions.languages]
//! de = "de"
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Defaults and extension mappings used to build a
/// [`MetadataService`](crate::MetadataService).
///
/// Metadata values are kept as raw tokens here and only parsed when the
/// service is built, so a typo surfaces as
/// [`NegotiationError::InvalidToken`](crate::NegotiationError::InvalidToken)
/// naming the offending value.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationSettings {
	/// Media type assumed for representations that declare none
	#[serde(default = "default_media_type")]
	pub default_media_type: String,

	/// Language assumed for representations that declare none
	#[serde(default = "default_language")]
	pub default_language: String,

	/// Character set assumed for representations that declare none
	#[serde(default = "default_character_set")]
	pub default_character_set: String,

	/// Encoding assumed for representations that declare none
	#[serde(default = "default_encoding")]
	pub default_encoding: String,

	/// Whether the built-in extension table is registered
	#[serde(default = "default_true")]
	pub common_extensions: bool,

	/// Whether the defaults are added to enriched preference lists
	#[serde(default = "default_true")]
	pub use_defaults: bool,

	/// Additional extension mappings, registered after the built-in ones
	#[serde(default)]
	pub extensions: ExtensionSettings,
}

/// Extension mappings grouped by category.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionSettings {
	#[serde(default)]
	pub media_types: BTreeMap<String, String>,

	#[serde(default)]
	pub languages: BTreeMap<String, String>,

	#[serde(default)]
	pub character_sets: BTreeMap<String, String>,

	#[serde(default)]
	pub encodings: BTreeMap<String, String>,
}

fn default_media_type() -> String {
	"application/octet-stream".to_string()
}

fn default_language() -> String {
	"en-us".to_string()
}

fn default_character_set() -> String {
	"UTF-8".to_string()
}

fn default_encoding() -> String {
	"identity".to_string()
}

fn default_true() -> bool {
	true
}

impl Default for NegotiationSettings {
	fn default() -> Self {
		Self {
			default_media_type: default_media_type(),
			default_language: default_language(),
			default_character_set: default_character_set(),
			default_encoding: default_encoding(),
			common_extensions: true,
			use_defaults: true,
			extensions: ExtensionSettings::default(),
		}
	}
}

impl NegotiationSettings {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses settings from a TOML document; missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::NegotiationSettings;
	///
	/// let settings = NegotiationSettings::from_toml_str(r#"
	///     default_language = "fr"
	///
	///     [extensions.media_types]
	///     md = "text/markdown"
	/// "#).unwrap();
	///
	/// assert_eq!(settings.default_language, "fr");
	/// assert_eq!(settings.default_media_type, "application/octet-stream");
	/// assert_eq!(settings.extensions.media_types["md"], "text/markdown");
	/// ```
	pub fn from_toml_str(contents: &str) -> Result<Self> {
		Ok(toml::from_str(contents)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::NegotiationError;
	use rstest::rstest;

	#[rstest]
	fn test_empty_document_yields_defaults() {
		let settings = NegotiationSettings::from_toml_str("").unwrap();
		assert_eq!(settings, NegotiationSettings::default());
		assert!(settings.common_extensions);
		assert!(settings.use_defaults);
	}

	#[rstest]
	fn test_partial_document_keeps_other_defaults() {
		let settings = NegotiationSettings::from_toml_str(
			r#"
			use_defaults = false
			default_encoding = "gzip"

			[extensions.encodings]
			zst = "zstd"
			"#,
		)
		.unwrap();

		assert!(!settings.use_defaults);
		assert_eq!(settings.default_encoding, "gzip");
		assert_eq!(settings.default_character_set, "UTF-8");
		assert_eq!(settings.extensions.encodings["zst"], "zstd");
		assert!(settings.extensions.languages.is_empty());
	}

	#[rstest]
	#[case("default_language = 3")]
	#[case("common_extensions = \"yes\"")]
	#[case("[extensions")]
	fn test_malformed_document_is_settings_error(#[case] contents: &str) {
		let err = NegotiationSettings::from_toml_str(contents).unwrap_err();
		assert!(matches!(err, NegotiationError::Settings(_)));
	}
}
