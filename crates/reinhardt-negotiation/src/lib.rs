//! # Reinhardt Negotiation
//!
//! Content negotiation for Reinhardt: choosing which representation of a
//! resource best fits what a client says it accepts.
//!
//! ## Overview
//!
//! Negotiation works over four metadata dimensions, each with its own
//! hierarchy of values:
//! - **Media types**: `text/html;level=1` → `text/html` → `text/*` → `*/*`
//! - **Languages**: `en-us` → `en` → `*`
//! - **Character sets**: `UTF-8` → `*`
//! - **Encodings**: `gzip` → `*`
//!
//! ## Architecture
//!
//! ```text
//! ClientPreferences ─┐
//!                    ├→ enrich() → Conneg ─→ score_variant() ─→ preferred_variant()
//! MetadataService ───┘   (parents, defaults, catch-all)   (weighted, short-circuit)
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use reinhardt_negotiation::{
//!     ClientPreferences, Conneg, Encoding, MediaType, MetadataService, PreferenceList,
//!     Variant, VariantScorer, VariantSelection,
//! };
//!
//! let service = MetadataService::new();
//! let client = ClientPreferences::new()
//!     .with_media_types(
//!         PreferenceList::new()
//!             .with(MediaType::APPLICATION_JSON, 1.0)
//!             .with(MediaType::TEXT_ALL, 0.5),
//!     )
//!     .with_encodings(PreferenceList::new().with(Encoding::GZIP, 1.0));
//!
//! let variants = vec![
//!     Variant::new().with_media_type(MediaType::TEXT_PLAIN),
//!     Variant::new()
//!         .with_media_type(MediaType::APPLICATION_JSON)
//!         .with_encoding(Encoding::GZIP),
//! ];
//!
//! let conneg = Conneg::new(&client, &service);
//! match conneg.select_variant(&variants) {
//!     VariantSelection::Preferred { variant, .. } => {
//!         assert_eq!(variant.media_type, Some(MediaType::APPLICATION_JSON));
//!     }
//!     other => panic!("unexpected selection: {other:?}"),
//! }
//! ```

pub mod charset;
pub mod conneg;
pub mod encoding;
pub mod enrichment;
pub mod error;
pub mod language;
pub mod media_type;
pub mod metadata;
pub mod preference;
pub mod scoring;
pub mod service;
pub mod settings;
pub mod variant;

// Re-exports
pub use charset::CharacterSet;
pub use conneg::{ClientPreferences, Conneg, VariantScorer, VariantSelection};
pub use encoding::Encoding;
pub use enrichment::enrich;
pub use error::{NegotiationError, Result};
pub use language::Language;
pub use media_type::{MediaType, Parameter};
pub use metadata::{Category, Metadata, MetadataValue};
pub use preference::{Preference, PreferenceList};
pub use scoring::{INCOMPATIBLE, NEUTRAL, score, score_all};
pub use service::{ExtensionMapping, MetadataService};
pub use settings::{ExtensionSettings, NegotiationSettings};
pub use variant::Variant;
