//! Media types and their `type/subtype` hierarchy.

use crate::error::{NegotiationError, Result};
use crate::metadata::{Category, Metadata, is_token};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A media type parameter such as `charset=utf-8`.
///
/// Names are case-insensitive and stored lowercased; values are compared
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
	name: Cow<'static, str>,
	value: Cow<'static, str>,
}

impl Parameter {
	/// Creates a parameter, lowercasing its name.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: Cow::Owned(name.into().to_ascii_lowercase()),
			value: Cow::Owned(value.into()),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value(&self) -> &str {
		&self.value
	}
}

/// A media type (`type/subtype` with optional parameters).
///
/// The type and subtype are case-insensitive and stored lowercased. Two media
/// types are equal when their type, subtype and parameter sets are equal;
/// parameter order does not matter.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{MediaType, Metadata};
///
/// let json: MediaType = "Application/JSON; charset=utf-8".parse().unwrap();
/// assert_eq!(json.main_type(), "application");
/// assert_eq!(json.sub_type(), "json");
/// assert_eq!(json.parameter("charset"), Some("utf-8"));
///
/// // Parameters are dropped first, then the subtype, then the main type
/// assert_eq!(json.parent(), Some(MediaType::APPLICATION_JSON));
/// assert_eq!(MediaType::APPLICATION_JSON.parent(), Some(MediaType::APPLICATION_ALL));
/// assert_eq!(MediaType::APPLICATION_ALL.parent(), Some(MediaType::ALL));
/// ```
#[derive(Debug, Clone)]
pub struct MediaType {
	main_type: Cow<'static, str>,
	sub_type: Cow<'static, str>,
	parameters: Vec<Parameter>,
}

impl MediaType {
	pub const ALL: Self = Self::from_static("*", "*");
	pub const APPLICATION_ALL: Self = Self::from_static("application", "*");
	pub const APPLICATION_ALL_XML: Self = Self::from_static("application", "*+xml");
	pub const APPLICATION_ATOM_XML: Self = Self::from_static("application", "atom+xml");
	pub const APPLICATION_FORM_URLENCODED: Self =
		Self::from_static("application", "x-www-form-urlencoded");
	pub const APPLICATION_JSON: Self = Self::from_static("application", "json");
	pub const APPLICATION_OCTET_STREAM: Self = Self::from_static("application", "octet-stream");
	pub const APPLICATION_PDF: Self = Self::from_static("application", "pdf");
	pub const APPLICATION_XHTML: Self = Self::from_static("application", "xhtml+xml");
	pub const APPLICATION_XML: Self = Self::from_static("application", "xml");
	pub const APPLICATION_YAML: Self = Self::from_static("application", "yaml");
	pub const IMAGE_ALL: Self = Self::from_static("image", "*");
	pub const IMAGE_GIF: Self = Self::from_static("image", "gif");
	pub const IMAGE_JPEG: Self = Self::from_static("image", "jpeg");
	pub const IMAGE_PNG: Self = Self::from_static("image", "png");
	pub const IMAGE_SVG: Self = Self::from_static("image", "svg+xml");
	pub const MULTIPART_FORM_DATA: Self = Self::from_static("multipart", "form-data");
	pub const TEXT_ALL: Self = Self::from_static("text", "*");
	pub const TEXT_CSS: Self = Self::from_static("text", "css");
	pub const TEXT_CSV: Self = Self::from_static("text", "csv");
	pub const TEXT_HTML: Self = Self::from_static("text", "html");
	pub const TEXT_JAVASCRIPT: Self = Self::from_static("text", "javascript");
	pub const TEXT_PLAIN: Self = Self::from_static("text", "plain");
	pub const TEXT_XML: Self = Self::from_static("text", "xml");

	/// Builds a media type from lowercase static parts, without parameters.
	pub const fn from_static(main_type: &'static str, sub_type: &'static str) -> Self {
		Self {
			main_type: Cow::Borrowed(main_type),
			sub_type: Cow::Borrowed(sub_type),
			parameters: Vec::new(),
		}
	}

	/// Creates a media type, lowercasing the type and subtype.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::MediaType;
	///
	/// assert_eq!(MediaType::new("Text", "HTML"), MediaType::TEXT_HTML);
	/// ```
	pub fn new(main_type: impl Into<String>, sub_type: impl Into<String>) -> Self {
		Self {
			main_type: Cow::Owned(main_type.into().to_ascii_lowercase()),
			sub_type: Cow::Owned(sub_type.into().to_ascii_lowercase()),
			parameters: Vec::new(),
		}
	}

	/// Returns a copy with `name=value` added, replacing any parameter of the
	/// same name.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::MediaType;
	///
	/// let html = MediaType::TEXT_HTML.with_parameter("charset", "utf-8");
	/// assert_eq!(html.to_string(), "text/html;charset=utf-8");
	/// ```
	pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let param = Parameter::new(name, value);
		self.parameters.retain(|p| p.name != param.name);
		self.parameters.push(param);
		self
	}

	pub fn main_type(&self) -> &str {
		&self.main_type
	}

	pub fn sub_type(&self) -> &str {
		&self.sub_type
	}

	pub fn parameters(&self) -> &[Parameter] {
		&self.parameters
	}

	/// Returns the value of the named parameter.
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.parameters
			.iter()
			.find(|p| p.name.eq_ignore_ascii_case(name))
			.map(Parameter::value)
	}

	/// Returns a copy without any parameter.
	pub fn without_parameters(&self) -> Self {
		Self {
			main_type: self.main_type.clone(),
			sub_type: self.sub_type.clone(),
			parameters: Vec::new(),
		}
	}

	/// Checks type and subtype equality, ignoring parameters.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::MediaType;
	///
	/// let utf8_json = MediaType::APPLICATION_JSON.with_parameter("charset", "utf-8");
	/// assert!(utf8_json.equals_ignoring_parameters(&MediaType::APPLICATION_JSON));
	/// assert_ne!(utf8_json, MediaType::APPLICATION_JSON);
	/// ```
	pub fn equals_ignoring_parameters(&self, other: &Self) -> bool {
		self.main_type == other.main_type && self.sub_type == other.sub_type
	}

	/// Checks main type equality (`text/*` and `text/html` share `text`).
	pub fn same_main_type(&self, other: &Self) -> bool {
		self.main_type == other.main_type
	}

	/// Checks whether the subtype is `*` or a `*+suffix` range.
	pub fn is_range(&self) -> bool {
		self.sub_type == "*" || self.sub_type.starts_with("*+")
	}

	fn parameters_equal(&self, other: &Self) -> bool {
		self.parameters.len() == other.parameters.len()
			&& self.parameters.iter().all(|p| other.parameters.contains(p))
	}
}

impl PartialEq for MediaType {
	fn eq(&self, other: &Self) -> bool {
		self.equals_ignoring_parameters(other) && self.parameters_equal(other)
	}
}

impl Metadata for MediaType {
	const CATEGORY: Category = Category::MediaType;

	fn all() -> Self {
		Self::ALL
	}

	fn parent(&self) -> Option<Self> {
		if !self.parameters.is_empty() {
			Some(self.without_parameters())
		} else if self.sub_type == "*" {
			if self.main_type == "*" {
				None
			} else {
				Some(Self::ALL)
			}
		} else {
			Some(Self {
				main_type: self.main_type.clone(),
				sub_type: Cow::Borrowed("*"),
				parameters: Vec::new(),
			})
		}
	}

	/// `*/*` includes everything. Within a main type, `type/*` includes every
	/// subtype, `type/*+suffix` includes every subtype ending in `+suffix`,
	/// and an exact subtype includes a value carrying at least its own
	/// parameters.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{MediaType, Metadata};
	///
	/// assert!(MediaType::APPLICATION_ALL_XML.includes(&MediaType::APPLICATION_ATOM_XML));
	/// assert!(!MediaType::APPLICATION_ALL_XML.includes(&MediaType::APPLICATION_JSON));
	///
	/// let utf8 = MediaType::TEXT_PLAIN.with_parameter("charset", "utf-8");
	/// assert!(MediaType::TEXT_PLAIN.includes(&utf8));
	/// assert!(!utf8.includes(&MediaType::TEXT_PLAIN));
	/// ```
	fn includes(&self, other: &Self) -> bool {
		if self.is_all() || self == other {
			return true;
		}
		if !self.same_main_type(other) {
			return false;
		}
		if self.sub_type == other.sub_type {
			return self
				.parameters
				.iter()
				.all(|p| other.parameter(&p.name) == Some(p.value()));
		}
		if self.sub_type == "*" {
			return true;
		}
		match self.sub_type.strip_prefix('*') {
			Some(suffix) if suffix.starts_with('+') => other.sub_type.ends_with(suffix),
			_ => false,
		}
	}

	fn is_all(&self) -> bool {
		self.main_type == "*" && self.sub_type == "*" && self.parameters.is_empty()
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.main_type, self.sub_type)?;
		for param in &self.parameters {
			write!(f, ";{}={}", param.name, param.value)?;
		}
		Ok(())
	}
}

impl FromStr for MediaType {
	type Err = NegotiationError;

	/// Parses a single `type/subtype[;name=value]*` token.
	///
	/// A lone `*` is read as `*/*`. Ranges such as `*/html` are rejected.
	fn from_str(s: &str) -> Result<Self> {
		let invalid = || NegotiationError::invalid_token(Category::MediaType, s);
		let mut parts = s.split(';');
		let essence = parts.next().map(str::trim).unwrap_or_default();

		let (main_type, sub_type) = match essence.split_once('/') {
			Some((main, sub)) => (main.trim(), sub.trim()),
			None if essence == "*" => ("*", "*"),
			None => return Err(invalid()),
		};
		if !is_token(main_type) || !is_token(sub_type) {
			return Err(invalid());
		}
		if main_type == "*" && sub_type != "*" {
			return Err(invalid());
		}

		let mut media_type = Self::new(main_type, sub_type);
		for param in parts {
			let param = param.trim();
			if param.is_empty() {
				continue;
			}
			let (name, value) = param.split_once('=').ok_or_else(invalid)?;
			let name = name.trim();
			let value = value.trim().trim_matches('"');
			if !is_token(name) {
				return Err(invalid());
			}
			media_type = media_type.with_parameter(name, value);
		}
		Ok(media_type)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("text/plain", MediaType::TEXT_PLAIN)]
	#[case("TEXT/Plain", MediaType::TEXT_PLAIN)]
	#[case(" application/json ", MediaType::APPLICATION_JSON)]
	#[case("*", MediaType::ALL)]
	#[case("*/*", MediaType::ALL)]
	#[case("image/*", MediaType::IMAGE_ALL)]
	fn test_parse(#[case] input: &str, #[case] expected: MediaType) {
		assert_eq!(input.parse::<MediaType>().unwrap(), expected);
	}

	#[rstest]
	#[case("")]
	#[case("text")]
	#[case("*/html")]
	#[case("text/")]
	#[case("text/plain;charset")]
	#[case("te xt/plain")]
	fn test_parse_rejects_malformed(#[case] input: &str) {
		let err = input.parse::<MediaType>().unwrap_err();
		assert!(matches!(
			err,
			NegotiationError::InvalidToken {
				category: Category::MediaType,
				..
			}
		));
	}

	#[rstest]
	fn test_parameters_are_order_insensitive() {
		let a: MediaType = "text/plain;charset=utf-8;format=flowed".parse().unwrap();
		let b: MediaType = "text/plain; format=flowed; CHARSET=utf-8".parse().unwrap();
		assert_eq!(a, b);
	}

	#[rstest]
	fn test_parameter_values_are_case_sensitive() {
		let a = MediaType::TEXT_PLAIN.with_parameter("charset", "utf-8");
		let b = MediaType::TEXT_PLAIN.with_parameter("charset", "UTF-8");
		assert_ne!(a, b);
	}

	#[rstest]
	fn test_parent_chain() {
		let mut current = Some(MediaType::TEXT_HTML.with_parameter("level", "1"));
		let mut chain = Vec::new();
		while let Some(media_type) = current {
			chain.push(media_type.to_string());
			current = media_type.parent();
		}
		assert_eq!(chain, vec!["text/html;level=1", "text/html", "text/*", "*/*"]);
	}

	#[rstest]
	#[case(MediaType::ALL, MediaType::IMAGE_PNG, true)]
	#[case(MediaType::TEXT_ALL, MediaType::TEXT_HTML, true)]
	#[case(MediaType::TEXT_ALL, MediaType::APPLICATION_JSON, false)]
	#[case(MediaType::TEXT_HTML, MediaType::TEXT_HTML, true)]
	#[case(MediaType::TEXT_HTML, MediaType::TEXT_ALL, false)]
	#[case(MediaType::TEXT_HTML, MediaType::ALL, false)]
	#[case(MediaType::APPLICATION_ALL_XML, MediaType::APPLICATION_XHTML, true)]
	#[case(MediaType::APPLICATION_ALL_XML, MediaType::APPLICATION_XML, false)]
	fn test_includes(#[case] range: MediaType, #[case] value: MediaType, #[case] expected: bool) {
		assert_eq!(range.includes(&value), expected);
	}

	#[rstest]
	fn test_includes_checks_range_parameters() {
		let utf8 = MediaType::TEXT_PLAIN.with_parameter("charset", "utf-8");
		let latin1 = MediaType::TEXT_PLAIN.with_parameter("charset", "iso-8859-1");
		assert!(!utf8.includes(&latin1));
		assert!(utf8.includes(&utf8.clone().with_parameter("format", "flowed")));
	}

	#[rstest]
	fn test_is_range() {
		assert!(MediaType::TEXT_ALL.is_range());
		assert!(MediaType::APPLICATION_ALL_XML.is_range());
		assert!(!MediaType::TEXT_PLAIN.is_range());
	}
}
