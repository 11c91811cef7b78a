//! # Reinhardt Conneg
//!
//! Content negotiation and resource method dispatch for Reinhardt.
//!
//! ## Overview
//!
//! This crate ties together the two halves of negotiation:
//!
//! - [`negotiation`]: metadata hierarchies, client preferences, enrichment
//!   and variant scoring
//! - [`dispatch`]: resource method selection and path specificity ranking
//!
//! Most applications build one [`ConnegEngine`] at startup and share it
//! across request workers.
//!
//! ## Architecture
//!
//! ```text
//! settings.toml ─→ NegotiationSettings ─→ MetadataService ─→ ConnegEngine
//!                                                              │
//!       ClientPreferences ─→ conneg() ─→ Conneg ─→ preferred_variant()
//!       DispatchRequest ───────────────────────→ resolve_method()
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use reinhardt_conneg::prelude::*;
//!
//! let engine = ConnegEngine::default();
//! let client = ClientPreferences::new().with_media_types(
//!     PreferenceList::new()
//!         .with(MediaType::APPLICATION_JSON, 1.0)
//!         .with(MediaType::TEXT_HTML, 0.5),
//! );
//! let variants = vec![
//!     Variant::new().with_media_type(MediaType::TEXT_HTML),
//!     Variant::new().with_media_type(MediaType::APPLICATION_JSON),
//! ];
//!
//! let best = engine.preferred_variant(&client, &variants);
//! assert_eq!(best.and_then(|v| v.media_type.clone()), Some(MediaType::APPLICATION_JSON));
//! ```

use std::sync::Arc;

use thiserror::Error;

pub use reinhardt_dispatch as dispatch;
pub use reinhardt_negotiation as negotiation;

// Re-exports
pub use reinhardt_dispatch::{
	DispatchError, DispatchRequest, MethodResolution, PathCandidate, PathHandler,
	PathSpecificity, ResourceMethodDescriptor, SubResourceLocator,
};
pub use reinhardt_negotiation::{
	CharacterSet, ClientPreferences, Conneg, Encoding, Language, MediaType, MetadataService,
	NegotiationError, NegotiationSettings, PreferenceList, Variant, VariantScorer,
	VariantSelection,
};

/// Errors raised while building a [`ConnegEngine`] or its declarations
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
	/// Metadata token, quality or settings error
	#[error(transparent)]
	Negotiation(#[from] NegotiationError),
	/// Path template error
	#[error(transparent)]
	Dispatch(#[from] DispatchError),
}

/// Result type for the facade.
pub type Result<T> = std::result::Result<T, Error>;

/// Shared negotiation context.
///
/// Holds the immutable [`MetadataService`] used to enrich client
/// preferences. Cloning is cheap and every clone sees the same service.
#[derive(Debug, Clone, Default)]
pub struct ConnegEngine {
	service: Arc<MetadataService>,
}

impl ConnegEngine {
	/// Creates an engine around an already configured service.
	pub fn new(service: MetadataService) -> Self {
		Self {
			service: Arc::new(service),
		}
	}

	/// Creates an engine from loaded settings.
	pub fn from_settings(settings: &NegotiationSettings) -> Result<Self> {
		let service = MetadataService::from_settings(settings)?;
		tracing::trace!("Negotiation engine configured");
		Ok(Self::new(service))
	}

	/// Parses TOML settings and creates an engine from them.
	///
	/// # Examples
	///
	/// ```rust
	/// use reinhardt_conneg::{ConnegEngine, MediaType};
	///
	/// let engine = ConnegEngine::from_toml_str(r#"
	///     default_media_type = "application/json"
	///
	///     [extensions.media_types]
	///     ndjson = "application/x-ndjson"
	/// "#).unwrap();
	///
	/// assert_eq!(engine.service().default_media_type(), &MediaType::APPLICATION_JSON);
	/// assert!(engine.service().media_type("ndjson").is_some());
	/// ```
	pub fn from_toml_str(contents: &str) -> Result<Self> {
		let settings = NegotiationSettings::from_toml_str(contents)?;
		Self::from_settings(&settings)
	}

	pub fn service(&self) -> &MetadataService {
		&self.service
	}

	/// Enriches `client` against the configured service.
	pub fn conneg(&self, client: &ClientPreferences) -> Conneg {
		Conneg::new(client, &self.service)
	}

	/// Returns the variant the client prefers, if any was offered.
	pub fn preferred_variant<'a>(
		&self,
		client: &ClientPreferences,
		variants: &'a [Variant],
	) -> Option<&'a Variant> {
		self.conneg(client).preferred_variant(variants)
	}

	/// Like [`preferred_variant`](Self::preferred_variant), but tells an
	/// incompatible best choice apart from an acceptable one.
	pub fn select_variant<'a>(
		&self,
		client: &ClientPreferences,
		variants: &'a [Variant],
	) -> VariantSelection<'a> {
		self.conneg(client).select_variant(variants)
	}

	pub fn resolve_method<'a>(
		&self,
		descriptors: &'a [ResourceMethodDescriptor],
		request: &DispatchRequest,
	) -> MethodResolution<'a> {
		reinhardt_dispatch::select_method(descriptors, request)
	}

	pub fn most_specific<'a, C: PathCandidate>(&self, candidates: &'a [C]) -> Option<&'a C> {
		reinhardt_dispatch::most_specific(candidates)
	}
}

pub mod prelude {
	// Engine
	pub use crate::{ConnegEngine, Error, Result};

	// Negotiation
	pub use reinhardt_negotiation::{
		CharacterSet, ClientPreferences, Conneg, Encoding, Language, MediaType, Metadata,
		MetadataService, NegotiationSettings, Preference, PreferenceList, Variant,
		VariantScorer, VariantSelection,
	};

	// Dispatch
	pub use reinhardt_dispatch::{
		CandidateKind, DispatchRequest, MethodResolution, PathCandidate, PathHandler,
		PathSpecificity, ResourceMethodDescriptor, SubResourceLocator,
	};

	// External
	pub use http::{Method, StatusCode};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn assert_send_sync<T: Send + Sync>() {}

	#[rstest]
	fn test_engine_is_shareable() {
		assert_send_sync::<ConnegEngine>();
	}

	#[rstest]
	fn test_clones_share_service() {
		let engine = ConnegEngine::default();
		let clone = engine.clone();

		assert!(Arc::ptr_eq(&engine.service, &clone.service));
	}

	#[rstest]
	fn test_invalid_settings_convert_to_negotiation_error() {
		let result = ConnegEngine::from_toml_str("use_defaults = \"sometimes\"");

		assert!(matches!(result, Err(Error::Negotiation(NegotiationError::Settings(_)))));
	}

	#[rstest]
	fn test_template_error_converts() {
		let result: Result<ResourceMethodDescriptor> =
			ResourceMethodDescriptor::new(http::Method::GET)
				.with_path("/users/{id")
				.map_err(Error::from);

		assert!(matches!(result, Err(Error::Dispatch(DispatchError::InvalidTemplate { .. }))));
	}
}
