//! Error types for metadata construction and negotiation settings.

use crate::metadata::Category;
use thiserror::Error;

/// Errors raised while building negotiation inputs.
///
/// Negotiation itself never fails: an unacceptable variant or an unmatched
/// preference is an ordinary return value. These errors only cover values
/// that could not be constructed in the first place.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NegotiationError {
	/// A metadata token was empty or malformed.
	#[error("Invalid {category} token: {token:?}")]
	InvalidToken {
		/// Category the token was parsed for.
		category: Category,
		/// The rejected token.
		token: String,
	},

	/// A quality value fell outside `[0.0, 1.0]`.
	#[error("Quality {0} is outside of [0.0, 1.0]")]
	InvalidQuality(f32),

	/// Negotiation settings could not be read.
	#[error("Settings error: {0}")]
	Settings(String),
}

impl NegotiationError {
	pub(crate) fn invalid_token(category: Category, token: impl Into<String>) -> Self {
		Self::InvalidToken {
			category,
			token: token.into(),
		}
	}
}

impl From<toml::de::Error> for NegotiationError {
	fn from(err: toml::de::Error) -> Self {
		Self::Settings(err.to_string())
	}
}

/// Result type for negotiation input construction.
pub type Result<T> = std::result::Result<T, NegotiationError>;
