//! Precedence among handlers whose path templates match the same URI.

use crate::{DispatchError, Result};
use std::cmp::Ordering;

/// Regular expression a template variable gets when it declares none.
pub const DEFAULT_VARIABLE_REGEX: &str = "[^/]+?";

/// Path template metrics that rank competing handlers.
///
/// Ordering is lexicographic over literal characters, then capturing groups,
/// then capturing groups with a non-default regular expression. A greater
/// value is a more specific template.
///
/// # Examples
///
/// ```
/// use reinhardt_dispatch::PathSpecificity;
///
/// let literal = PathSpecificity::new(8, 0, 0);
/// let templated = PathSpecificity::new(3, 2, 2);
/// assert!(literal > templated);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathSpecificity {
	pub literal_chars: usize,
	pub capturing_groups: usize,
	pub non_default_groups: usize,
}

impl PathSpecificity {
	pub const fn new(literal_chars: usize, capturing_groups: usize, non_default_groups: usize) -> Self {
		Self {
			literal_chars,
			capturing_groups,
			non_default_groups,
		}
	}

	/// Computes the metrics of a URI template such as `/users/{id: \d+}/posts`.
	///
	/// A leading `/` is not counted. Every other character outside a
	/// variable counts as one literal character. Each `{name}` or
	/// `{name: regex}` is a capturing group, and a group whose regex differs
	/// from [`DEFAULT_VARIABLE_REGEX`] is also a non-default group.
	///
	/// # Errors
	///
	/// Returns [`DispatchError::InvalidTemplate`] for a `}` outside a
	/// variable, a `{` inside one, an unterminated or unnamed variable, or a
	/// `;` matrix parameter.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_dispatch::PathSpecificity;
	///
	/// let spec = PathSpecificity::from_template("/users/{id: [0-9]+}/posts/{slug}").unwrap();
	/// assert_eq!(spec, PathSpecificity::new(13, 2, 1));
	///
	/// assert!(PathSpecificity::from_template("/users/{id").is_err());
	/// ```
	pub fn from_template(template: &str) -> Result<Self> {
		let body = template.strip_prefix('/').unwrap_or(template);
		let mut spec = Self::default();
		let mut chars = body.char_indices();

		while let Some((offset, c)) = chars.next() {
			match c {
				'{' => {
					let mut variable = String::new();
					let mut closed = false;
					for (_, c) in chars.by_ref() {
						match c {
							'}' => {
								closed = true;
								break;
							}
							'{' => {
								return Err(invalid(template, "nested '{' in a template variable"));
							}
							_ => variable.push(c),
						}
					}
					if !closed {
						return Err(invalid(
							template,
							&format!("no '}}' after the '{{' at offset {offset}"),
						));
					}
					spec.capturing_groups += 1;
					if parse_variable(template, &variable)? {
						spec.non_default_groups += 1;
					}
				}
				'}' => {
					return Err(invalid(template, "'}' is only allowed to close a template variable"));
				}
				';' => {
					return Err(invalid(template, "matrix parameters are not allowed in a template"));
				}
				_ => spec.literal_chars += 1,
			}
		}

		tracing::trace!(
			template,
			literal_chars = spec.literal_chars,
			capturing_groups = spec.capturing_groups,
			non_default_groups = spec.non_default_groups,
			"Computed path specificity"
		);
		Ok(spec)
	}
}

/// Validates the inside of `{...}` and returns whether it carries a
/// non-default regular expression.
fn parse_variable(template: &str, variable: &str) -> Result<bool> {
	let (name, regex) = match variable.split_once(':') {
		Some((name, regex)) => (name.trim(), Some(regex.trim())),
		None => (variable.trim(), None),
	};
	if name.is_empty() {
		return Err(invalid(template, "template variable without a name"));
	}
	if name.contains(char::is_whitespace) {
		return Err(invalid(
			template,
			&format!("template variable name {name:?} contains whitespace"),
		));
	}
	Ok(regex.is_some_and(|regex| !regex.is_empty() && regex != DEFAULT_VARIABLE_REGEX))
}

fn invalid(template: &str, reason: &str) -> DispatchError {
	DispatchError::InvalidTemplate {
		template: template.to_string(),
		reason: reason.to_string(),
	}
}

/// Whether a path candidate handles the request or hands it to a sub-resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
	ResourceMethod,
	SubResourceLocator,
}

/// A handler competing for a URI by its path template.
pub trait PathCandidate {
	fn specificity(&self) -> PathSpecificity;

	fn kind(&self) -> CandidateKind;
}

impl<C: PathCandidate + ?Sized> PathCandidate for &C {
	fn specificity(&self) -> PathSpecificity {
		(**self).specificity()
	}

	fn kind(&self) -> CandidateKind {
		(**self).kind()
	}
}

/// Returns the most specific candidate.
///
/// A candidate replaces the running best only when it is strictly more
/// specific, or equally specific while being a resource method that
/// displaces a sub-resource locator. Earlier candidates win remaining ties.
///
/// # Examples
///
/// ```
/// use reinhardt_dispatch::{most_specific, PathSpecificity, SubResourceLocator};
///
/// let locators = vec![
///     SubResourceLocator::new(PathSpecificity::new(3, 2, 0)).with_name("by_id"),
///     SubResourceLocator::new(PathSpecificity::new(8, 0, 0)).with_name("literal"),
/// ];
/// let best = most_specific(&locators).unwrap();
/// assert_eq!(best.name(), Some("literal"));
/// ```
pub fn most_specific<C: PathCandidate>(candidates: &[C]) -> Option<&C> {
	let (first, rest) = candidates.split_first()?;
	let mut best = first;
	let mut best_spec = first.specificity();

	for candidate in rest {
		let spec = candidate.specificity();
		let replace = match spec.cmp(&best_spec) {
			Ordering::Greater => true,
			Ordering::Equal => {
				candidate.kind() == CandidateKind::ResourceMethod
					&& best.kind() == CandidateKind::SubResourceLocator
			}
			Ordering::Less => false,
		};
		if replace {
			best = candidate;
			best_spec = spec;
		}
	}

	Some(best)
}
