//! # Reinhardt Dispatch
//!
//! Resource method selection for Reinhardt: given the handlers declared for
//! one URI, pick the one that serves a request.
//!
//! ## Overview
//!
//! The dispatch system handles:
//! - HTTP method filtering, with `HEAD` served by `GET` handlers
//! - Narrowing by the request body type (`Content-Type`)
//! - Narrowing by the accepted response types (`Accept`)
//! - Ranking of handlers whose path templates match the same URI
//!
//! ## Architecture
//!
//! ```text
//! URI ─→ candidates ─→ most_specific() ─→ descriptors ─→ select_method()
//!        (templates)   (literal chars,      (one URI)     (method, consumes,
//!                       groups, kind)                      produces, tie-break)
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use http::Method;
//! use reinhardt_dispatch::{select_method, DispatchRequest, ResourceMethodDescriptor};
//! use reinhardt_negotiation::{MediaType, PreferenceList};
//!
//! let descriptors = vec![
//!     ResourceMethodDescriptor::new(Method::GET)
//!         .with_name("page")
//!         .produces(MediaType::TEXT_HTML),
//!     ResourceMethodDescriptor::new(Method::GET)
//!         .with_name("api")
//!         .produces(MediaType::APPLICATION_JSON),
//! ];
//!
//! let request = DispatchRequest::new(Method::GET)
//!     .with_accepted(PreferenceList::new().with(MediaType::APPLICATION_JSON, 1.0));
//!
//! let resolution = select_method(&descriptors, &request);
//! assert_eq!(resolution.selected().and_then(|d| d.name()), Some("api"));
//! ```

pub mod descriptor;
pub mod selector;
pub mod specificity;

// Re-exports
pub use descriptor::{PathHandler, ResourceMethodDescriptor, SubResourceLocator};
pub use selector::{DispatchRequest, MethodResolution, allowed_methods, select_method};
pub use specificity::{
	CandidateKind, DEFAULT_VARIABLE_REGEX, PathCandidate, PathSpecificity, most_specific,
};

use thiserror::Error;

/// Errors that can occur while declaring dispatch candidates
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
	/// Path template could not be analysed
	#[error("Invalid path template {template:?}: {reason}")]
	InvalidTemplate { template: String, reason: String },
}

/// Result type for dispatch declarations.
pub type Result<T> = std::result::Result<T, DispatchError>;
