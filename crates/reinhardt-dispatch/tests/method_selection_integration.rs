//! Integration tests for resource method selection
//!
//! Tests the full selection pipeline over realistic resources:
//! - HTTP method filtering and the HEAD/GET relationship
//! - Consumes and produces narrowing
//! - Method-not-allowed and not-found outcomes

use http::{Method, StatusCode};
use reinhardt_dispatch::{
	DispatchRequest, MethodResolution, ResourceMethodDescriptor, select_method,
};
use reinhardt_negotiation::{MediaType, PreferenceList};
use rstest::{fixture, rstest};

/// A `/articles` resource with HTML and JSON readers and two writers.
#[fixture]
fn articles() -> Vec<ResourceMethodDescriptor> {
	vec![
		ResourceMethodDescriptor::new(Method::GET)
			.with_name("list_html")
			.produces(MediaType::TEXT_HTML),
		ResourceMethodDescriptor::new(Method::GET)
			.with_name("list_json")
			.produces(MediaType::APPLICATION_JSON),
		ResourceMethodDescriptor::new(Method::POST)
			.with_name("create_form")
			.consumes(MediaType::APPLICATION_FORM_URLENCODED)
			.produces(MediaType::TEXT_HTML),
		ResourceMethodDescriptor::new(Method::POST)
			.with_name("create_json")
			.consumes(MediaType::APPLICATION_JSON)
			.produces(MediaType::APPLICATION_JSON),
	]
}

fn name<'a>(resolution: &MethodResolution<'a>) -> Option<&'a str> {
	resolution.selected().and_then(|d| d.name())
}

#[rstest]
fn test_browser_gets_html(articles: Vec<ResourceMethodDescriptor>) {
	// Arrange
	let request = DispatchRequest::new(Method::GET).with_accepted(
		PreferenceList::new()
			.with(MediaType::TEXT_HTML, 1.0)
			.with(MediaType::APPLICATION_XHTML, 1.0)
			.with(MediaType::APPLICATION_XML, 0.9)
			.with(MediaType::ALL, 0.8),
	);

	// Act
	let resolution = select_method(&articles, &request);

	// Assert
	assert_eq!(name(&resolution), Some("list_html"));
	assert_eq!(resolution.status_code(), StatusCode::OK);
}

#[rstest]
fn test_api_client_gets_json(articles: Vec<ResourceMethodDescriptor>) {
	let request = DispatchRequest::new(Method::GET)
		.with_accepted(PreferenceList::new().with(MediaType::APPLICATION_JSON, 1.0));

	assert_eq!(name(&select_method(&articles, &request)), Some("list_json"));
}

#[rstest]
fn test_wildcard_client_gets_first_declared(articles: Vec<ResourceMethodDescriptor>) {
	let request = DispatchRequest::new(Method::GET);

	assert_eq!(name(&select_method(&articles, &request)), Some("list_html"));
}

#[rstest]
#[case(MediaType::APPLICATION_FORM_URLENCODED, "create_form")]
#[case(MediaType::APPLICATION_JSON.with_parameter("charset", "utf-8"), "create_json")]
fn test_post_dispatches_on_body_type(
	articles: Vec<ResourceMethodDescriptor>,
	#[case] content_type: MediaType,
	#[case] expected: &str,
) {
	let request = DispatchRequest::new(Method::POST).with_content_type(content_type);

	assert_eq!(name(&select_method(&articles, &request)), Some(expected));
}

#[rstest]
fn test_consumes_exact_match_precedence() {
	// Arrange: the broader handler is declared first
	let descriptors = vec![
		ResourceMethodDescriptor::new(Method::PUT)
			.with_name("m2")
			.consumes(MediaType::APPLICATION_ALL),
		ResourceMethodDescriptor::new(Method::PUT)
			.with_name("m1")
			.consumes(MediaType::APPLICATION_JSON),
	];
	let request = DispatchRequest::new(Method::PUT).with_content_type(MediaType::APPLICATION_JSON);

	// Act
	let resolution = select_method(&descriptors, &request);

	// Assert
	assert_eq!(name(&resolution), Some("m1"));
}

#[rstest]
fn test_head_served_by_get_handlers(articles: Vec<ResourceMethodDescriptor>) {
	let request = DispatchRequest::new(Method::HEAD)
		.with_accepted(PreferenceList::new().with(MediaType::APPLICATION_JSON, 1.0));

	assert_eq!(name(&select_method(&articles, &request)), Some("list_json"));
}

#[rstest]
fn test_head_prefers_explicit_head_handler() {
	// Arrange: G and H are otherwise indistinguishable
	let g = ResourceMethodDescriptor::new(Method::GET).with_name("g");
	let h = ResourceMethodDescriptor::new(Method::HEAD).with_name("h");
	let request = DispatchRequest::new(Method::HEAD);

	// Act & Assert
	let both = vec![g.clone(), h];
	assert_eq!(name(&select_method(&both, &request)), Some("h"));
	let only_get = vec![g];
	assert_eq!(name(&select_method(&only_get, &request)), Some("g"));
}

#[rstest]
fn test_head_without_accepted_match_keeps_declaration_order() {
	// Neither handler produces the accepted type, but both survive narrowing
	// through their shared main type
	let descriptors = vec![
		ResourceMethodDescriptor::new(Method::GET)
			.with_name("get_plain")
			.produces(MediaType::TEXT_PLAIN),
		ResourceMethodDescriptor::new(Method::HEAD)
			.with_name("head_csv")
			.produces(MediaType::TEXT_CSV),
	];
	let request = DispatchRequest::new(Method::HEAD)
		.with_accepted(PreferenceList::new().with(MediaType::TEXT_HTML, 1.0));

	assert_eq!(name(&select_method(&descriptors, &request)), Some("get_plain"));
}

#[rstest]
fn test_unsupported_method_reports_allowed(articles: Vec<ResourceMethodDescriptor>) {
	// Act
	let resolution = select_method(&articles, &DispatchRequest::new(Method::DELETE));

	// Assert
	assert_eq!(
		resolution,
		MethodResolution::MethodNotAllowed {
			allowed: vec![Method::GET, Method::POST, Method::HEAD],
		}
	);
	assert_eq!(resolution.status_code(), StatusCode::METHOD_NOT_ALLOWED);
	assert_eq!(resolution.allow_header().unwrap(), "GET, POST, HEAD");
}

#[rstest]
fn test_options_is_not_synthesized() {
	let descriptors = vec![ResourceMethodDescriptor::new(Method::POST)];
	let resolution = select_method(&descriptors, &DispatchRequest::new(Method::OPTIONS));

	assert_eq!(
		resolution,
		MethodResolution::MethodNotAllowed {
			allowed: vec![Method::POST],
		}
	);
}

#[rstest]
fn test_empty_resource_is_not_found() {
	let resolution = select_method(&[], &DispatchRequest::new(Method::GET));

	assert_eq!(resolution, MethodResolution::NotFound);
	assert_eq!(resolution.status_code(), StatusCode::NOT_FOUND);
}
