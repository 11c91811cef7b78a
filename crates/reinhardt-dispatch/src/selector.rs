//! Selection of the resource method that handles a request.
//!
//! Candidates are narrowed in passes, each keeping the original declaration
//! order:
//!
//! ```text
//! HTTP method ─→ consumed types ─→ produced types ─→ tie-break
//!   (405)        (skipped when      (against the     (accepted types in
//!                 no body type)      accepted types)  quality order)
//! ```
//!
//! The media type passes pick the first non-empty tier of exact matches,
//! then main type matches, then wildcard declarations.

use crate::descriptor::ResourceMethodDescriptor;
use http::{HeaderValue, Method, StatusCode};
use reinhardt_negotiation::{MediaType, Metadata, PreferenceList};

/// The parts of a request that drive method selection.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use reinhardt_dispatch::DispatchRequest;
/// use reinhardt_negotiation::{MediaType, PreferenceList};
///
/// let request = DispatchRequest::new(Method::POST)
///     .with_content_type(MediaType::APPLICATION_JSON)
///     .with_accepted(PreferenceList::new().with(MediaType::APPLICATION_JSON, 1.0));
///
/// assert_eq!(request.method, Method::POST);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRequest {
	pub method: Method,
	/// Declared type of the request body, if there is one.
	pub content_type: Option<MediaType>,
	/// Accepted response types; an empty list accepts anything.
	pub accepted: PreferenceList<MediaType>,
}

impl DispatchRequest {
	pub fn new(method: Method) -> Self {
		Self {
			method,
			content_type: None,
			accepted: PreferenceList::new(),
		}
	}

	pub fn with_content_type(mut self, content_type: MediaType) -> Self {
		self.content_type = Some(content_type);
		self
	}

	pub fn with_accepted(mut self, accepted: PreferenceList<MediaType>) -> Self {
		self.accepted = accepted;
		self
	}
}

/// Outcome of [`select_method`].
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResolution<'a> {
	/// The handler to invoke.
	Selected(&'a ResourceMethodDescriptor),
	/// No handler accepts the request's HTTP method.
	MethodNotAllowed {
		/// Methods the resource does accept, in declaration order.
		allowed: Vec<Method>,
	},
	/// The resource declares no handler at all.
	NotFound,
}

impl<'a> MethodResolution<'a> {
	pub fn selected(&self) -> Option<&'a ResourceMethodDescriptor> {
		match self {
			Self::Selected(descriptor) => Some(descriptor),
			_ => None,
		}
	}

	/// Returns the status a response should carry when nothing was selected,
	/// or `200 OK` for a selected handler.
	pub fn status_code(&self) -> StatusCode {
		match self {
			Self::Selected(_) => StatusCode::OK,
			Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
			Self::NotFound => StatusCode::NOT_FOUND,
		}
	}

	/// Builds the `Allow` header value for a method-not-allowed outcome.
	///
	/// # Examples
	///
	/// ```
	/// use http::Method;
	/// use reinhardt_dispatch::MethodResolution;
	///
	/// let resolution = MethodResolution::MethodNotAllowed {
	///     allowed: vec![Method::GET, Method::POST, Method::HEAD],
	/// };
	/// assert_eq!(resolution.allow_header().unwrap(), "GET, POST, HEAD");
	/// ```
	pub fn allow_header(&self) -> Option<HeaderValue> {
		match self {
			Self::MethodNotAllowed { allowed } => {
				let joined = allowed
					.iter()
					.map(Method::as_str)
					.collect::<Vec<_>>()
					.join(", ");
				HeaderValue::from_str(&joined).ok()
			}
			_ => None,
		}
	}
}

/// Tier of a media type pass that produced the surviving candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchTier {
	Exact,
	MainType,
	Wildcard,
}

/// Selects the handler for a request among the descriptors of one resource.
///
/// Selection is a pure function of its inputs.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use reinhardt_dispatch::{select_method, DispatchRequest, MethodResolution, ResourceMethodDescriptor};
/// use reinhardt_negotiation::MediaType;
///
/// let descriptors = vec![
///     ResourceMethodDescriptor::new(Method::POST)
///         .with_name("any_app")
///         .consumes(MediaType::APPLICATION_ALL),
///     ResourceMethodDescriptor::new(Method::POST)
///         .with_name("json")
///         .consumes(MediaType::APPLICATION_JSON),
/// ];
///
/// let request = DispatchRequest::new(Method::POST).with_content_type(MediaType::APPLICATION_JSON);
/// let selected = select_method(&descriptors, &request).selected().unwrap();
/// assert_eq!(selected.name(), Some("json"));
///
/// let request = DispatchRequest::new(Method::DELETE);
/// assert_eq!(
///     select_method(&descriptors, &request),
///     MethodResolution::MethodNotAllowed { allowed: vec![Method::POST] },
/// );
/// ```
pub fn select_method<'a>(
	descriptors: &'a [ResourceMethodDescriptor],
	request: &DispatchRequest,
) -> MethodResolution<'a> {
	if descriptors.is_empty() {
		tracing::debug!(method = %request.method, "No resource method declared");
		return MethodResolution::NotFound;
	}

	let is_head = request.method == Method::HEAD;
	let by_method: Vec<&ResourceMethodDescriptor> = descriptors
		.iter()
		.filter(|d| *d.method() == request.method || (is_head && *d.method() == Method::GET))
		.collect();
	if by_method.is_empty() {
		let allowed = allowed_methods(descriptors);
		tracing::debug!(
			method = %request.method,
			allowed = ?allowed,
			"Method not allowed"
		);
		return MethodResolution::MethodNotAllowed { allowed };
	}

	let by_consumes = match &request.content_type {
		Some(content_type) => {
			let wanted = std::slice::from_ref(content_type);
			match narrow(&by_method, wanted, ResourceMethodDescriptor::consumed_types) {
				Some((tier, narrowed)) => {
					tracing::trace!(tier = ?tier, remaining = narrowed.len(), "Narrowed by consumed type");
					if let [only] = narrowed[..] {
						return MethodResolution::Selected(only);
					}
					narrowed
				}
				None => {
					tracing::trace!(%content_type, "No method consumes the request body type");
					return MethodResolution::Selected(by_method[0]);
				}
			}
		}
		None => by_method,
	};

	let accepted = accepted_types(&request.accepted);
	let by_produces = match narrow(
		&by_consumes,
		&accepted,
		ResourceMethodDescriptor::effective_produced_types,
	) {
		Some((tier, narrowed)) => {
			tracing::trace!(tier = ?tier, remaining = narrowed.len(), "Narrowed by produced type");
			if let [only] = narrowed[..] {
				return MethodResolution::Selected(only);
			}
			narrowed
		}
		None => {
			tracing::trace!("No method produces an accepted type");
			return MethodResolution::Selected(by_consumes[0]);
		}
	};

	MethodResolution::Selected(tie_break(&by_produces, &accepted, is_head))
}

/// Returns the methods a resource accepts, adding `HEAD` when `GET` is
/// declared.
pub fn allowed_methods(descriptors: &[ResourceMethodDescriptor]) -> Vec<Method> {
	let mut allowed: Vec<Method> = Vec::new();
	for descriptor in descriptors {
		if !allowed.contains(descriptor.method()) {
			allowed.push(descriptor.method().clone());
		}
	}
	if allowed.contains(&Method::GET) && !allowed.contains(&Method::HEAD) {
		allowed.push(Method::HEAD);
	}
	allowed
}

/// Accepted types in quality order, without rejections. Defaults to `*/*`.
fn accepted_types(accepted: &PreferenceList<MediaType>) -> Vec<MediaType> {
	let types: Vec<MediaType> = accepted
		.sorted_by_quality()
		.into_vec()
		.into_iter()
		.filter(|pref| !pref.is_rejection())
		.map(|pref| pref.metadata)
		.collect();
	if types.is_empty() {
		vec![MediaType::ALL]
	} else {
		types
	}
}

/// Keeps the candidates of the first non-empty tier, or returns `None`.
fn narrow<'a, F>(
	candidates: &[&'a ResourceMethodDescriptor],
	wanted: &[MediaType],
	declared: F,
) -> Option<(MatchTier, Vec<&'a ResourceMethodDescriptor>)>
where
	F: Fn(&ResourceMethodDescriptor) -> &[MediaType],
{
	let tiers: [(MatchTier, fn(&MediaType, &MediaType) -> bool); 2] = [
		(MatchTier::Exact, MediaType::equals_ignoring_parameters),
		(MatchTier::MainType, MediaType::same_main_type),
	];

	for (tier, matches) in tiers {
		let narrowed: Vec<_> = candidates
			.iter()
			.copied()
			.filter(|d| {
				declared(*d)
					.iter()
					.any(|declared| wanted.iter().any(|w| matches(declared, w)))
			})
			.collect();
		if !narrowed.is_empty() {
			return Some((tier, narrowed));
		}
	}

	let narrowed: Vec<_> = candidates
		.iter()
		.copied()
		.filter(|d| {
			let types = declared(*d);
			types.is_empty() || types.iter().any(Metadata::is_all)
		})
		.collect();
	(!narrowed.is_empty()).then_some((MatchTier::Wildcard, narrowed))
}

/// Picks among equally matching candidates by the client's accepted types.
fn tie_break<'a>(
	candidates: &[&'a ResourceMethodDescriptor],
	accepted: &[MediaType],
	is_head: bool,
) -> &'a ResourceMethodDescriptor {
	for accepted_type in accepted {
		let mut best: Option<&'a ResourceMethodDescriptor> = None;
		for &candidate in candidates {
			let produces_accepted = candidate
				.effective_produced_types()
				.iter()
				.any(|produced| accepted_type.includes(produced));
			if !produces_accepted {
				continue;
			}
			match best {
				None => best = Some(candidate),
				Some(current)
					if is_head
						&& *current.method() == Method::GET
						&& *candidate.method() == Method::HEAD =>
				{
					best = Some(candidate);
				}
				Some(_) => {}
			}
		}
		if let Some(best) = best {
			tracing::trace!(
				accepted = %accepted_type,
				method = %best.method(),
				name = best.name().unwrap_or("<anonymous>"),
				"Tie broken by accepted type"
			);
			return best;
		}
	}

	candidates[0]
}
