//! Declarations of the handlers a resource exposes.

use crate::Result;
use crate::specificity::{CandidateKind, PathCandidate, PathSpecificity};
use http::Method;
use reinhardt_negotiation::MediaType;

static ANY_MEDIA_TYPE: [MediaType; 1] = [MediaType::ALL];

/// A request handler bound to an HTTP method, with the media types it reads
/// and writes.
///
/// An empty `consumes` list accepts any request body; an empty `produces`
/// list is treated as producing `*/*`.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use reinhardt_dispatch::{PathCandidate, ResourceMethodDescriptor};
/// use reinhardt_negotiation::MediaType;
///
/// let create = ResourceMethodDescriptor::new(Method::POST)
///     .with_name("create_user")
///     .consumes(MediaType::APPLICATION_JSON)
///     .produces(MediaType::APPLICATION_JSON)
///     .with_path("/users")
///     .unwrap();
///
/// assert_eq!(create.method(), &Method::POST);
/// assert_eq!(create.specificity().literal_chars, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceMethodDescriptor {
	method: Method,
	name: Option<String>,
	consumes: Vec<MediaType>,
	produces: Vec<MediaType>,
	specificity: PathSpecificity,
}

impl ResourceMethodDescriptor {
	pub fn new(method: Method) -> Self {
		Self {
			method,
			name: None,
			consumes: Vec::new(),
			produces: Vec::new(),
			specificity: PathSpecificity::default(),
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Adds a media type this handler accepts as request body.
	pub fn consumes(mut self, media_type: MediaType) -> Self {
		self.consumes.push(media_type);
		self
	}

	/// Adds a media type this handler can respond with.
	pub fn produces(mut self, media_type: MediaType) -> Self {
		self.produces.push(media_type);
		self
	}

	pub fn with_specificity(mut self, specificity: PathSpecificity) -> Self {
		self.specificity = specificity;
		self
	}

	/// Sets the specificity from the handler's path template.
	///
	/// # Errors
	///
	/// Returns [`DispatchError::InvalidTemplate`](crate::DispatchError::InvalidTemplate)
	/// when the template is malformed.
	pub fn with_path(self, template: &str) -> Result<Self> {
		Ok(self.with_specificity(PathSpecificity::from_template(template)?))
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn consumed_types(&self) -> &[MediaType] {
		&self.consumes
	}

	pub fn produced_types(&self) -> &[MediaType] {
		&self.produces
	}

	/// Returns the produced types, or `*/*` when none is declared.
	pub(crate) fn effective_produced_types(&self) -> &[MediaType] {
		if self.produces.is_empty() {
			&ANY_MEDIA_TYPE
		} else {
			&self.produces
		}
	}
}

impl PathCandidate for ResourceMethodDescriptor {
	fn specificity(&self) -> PathSpecificity {
		self.specificity
	}

	fn kind(&self) -> CandidateKind {
		CandidateKind::ResourceMethod
	}
}

/// A handler that resolves a sub-resource instead of answering the request.
#[derive(Debug, Clone, PartialEq)]
pub struct SubResourceLocator {
	name: Option<String>,
	specificity: PathSpecificity,
}

impl SubResourceLocator {
	pub fn new(specificity: PathSpecificity) -> Self {
		Self {
			name: None,
			specificity,
		}
	}

	/// Creates a locator from its path template.
	pub fn from_path(template: &str) -> Result<Self> {
		Ok(Self::new(PathSpecificity::from_template(template)?))
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}
}

impl PathCandidate for SubResourceLocator {
	fn specificity(&self) -> PathSpecificity {
		self.specificity
	}

	fn kind(&self) -> CandidateKind {
		CandidateKind::SubResourceLocator
	}
}

/// Either kind of path candidate, for ranking methods and locators together.
#[derive(Debug, Clone, PartialEq)]
pub enum PathHandler {
	Method(ResourceMethodDescriptor),
	Locator(SubResourceLocator),
}

impl PathHandler {
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Method(method) => method.name(),
			Self::Locator(locator) => locator.name(),
		}
	}
}

impl PathCandidate for PathHandler {
	fn specificity(&self) -> PathSpecificity {
		match self {
			Self::Method(method) => method.specificity(),
			Self::Locator(locator) => locator.specificity(),
		}
	}

	fn kind(&self) -> CandidateKind {
		match self {
			Self::Method(method) => method.kind(),
			Self::Locator(locator) => locator.kind(),
		}
	}
}

impl From<ResourceMethodDescriptor> for PathHandler {
	fn from(method: ResourceMethodDescriptor) -> Self {
		Self::Method(method)
	}
}

impl From<SubResourceLocator> for PathHandler {
	fn from(locator: SubResourceLocator) -> Self {
		Self::Locator(locator)
	}
}
