//! Ordered route storage, structural matching and path generation.

use std::collections::HashMap;

use thiserror::Error;

use crate::pattern::PatternError;
use crate::request::Request;
use crate::reverse::{self, ReverseError};
use crate::route::Route;

/// Errors raised while registering a route.
#[derive(Debug, Error)]
pub enum RegistrationError {
	/// Another route already carries this name. The offending route is
	/// never added.
	#[error("route '{0}' is already defined")]
	DuplicateName(String),

	/// The route's pattern string failed to parse.
	#[error(transparent)]
	Pattern(#[from] PatternError),
}

/// Ordered collection of routes. Insertion order is matching priority and
/// is never reordered.
///
/// # Examples
///
/// ```
/// use waymark::{Method, Route, RouteContainer};
///
/// let mut container = RouteContainer::new();
/// let route = Route::new("/users/{id}", "user-detail", "UsersController::show").unwrap();
/// container.add_route(route).unwrap().allows(Method::GET);
///
/// assert_eq!(container.routes().len(), 1);
/// let path = container
///     .generate_path_with("user-detail", &[("id", "42")])
///     .unwrap();
/// assert_eq!(path, "/users/42");
/// ```
#[derive(Debug, Default)]
pub struct RouteContainer {
	routes: Vec<Route>,
}

impl RouteContainer {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self { routes: Vec::new() }
	}

	/// Appends a route, enforcing name uniqueness across the container.
	///
	/// Returns the stored route so callers can keep registering on it,
	/// e.g. via chained [`allows`](Route::allows).
	pub fn add_route(&mut self, route: Route) -> Result<&mut Route, RegistrationError> {
		if self.routes.iter().any(|existing| existing.name() == route.name()) {
			return Err(RegistrationError::DuplicateName(route.name().to_string()));
		}

		tracing::debug!(name = route.name(), path = route.path(), "route registered");
		self.routes.push(route);
		let last = self.routes.len() - 1;
		Ok(&mut self.routes[last])
	}

	/// All routes in registration order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Structural comparison between the request's path and one route's
	/// pattern. Method checking is the caller's concern.
	pub fn matches(&self, request: &Request, route: &Route) -> bool {
		route.pattern().is_match(request.path())
	}

	/// Looks up a route by its exact name.
	pub fn route_named(&self, name: &str) -> Option<&Route> {
		self.routes.iter().find(|route| route.name() == name)
	}

	/// Generates a concrete path for the named route.
	///
	/// Every placeholder must have an entry in `params`; entries with no
	/// matching placeholder are ignored. Values that would escape their
	/// segment are rejected.
	pub fn generate_path(
		&self,
		name: &str,
		params: &HashMap<String, String>,
	) -> Result<String, ReverseError> {
		let route = self
			.route_named(name)
			.ok_or_else(|| ReverseError::NotFound(name.to_string()))?;

		for param in route.pattern().param_names() {
			match params.get(param) {
				None => return Err(ReverseError::MissingParameter(param.to_string())),
				Some(value) if !reverse::is_safe_param(value) => {
					return Err(ReverseError::InvalidParameter(param.to_string()));
				}
				Some(_) => {}
			}
		}

		Ok(reverse::substitute(route.path(), params))
	}

	/// Slice convenience over [`generate_path`](RouteContainer::generate_path).
	pub fn generate_path_with<S: AsRef<str>>(
		&self,
		name: &str,
		params: &[(S, S)],
	) -> Result<String, ReverseError> {
		let params: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
			.collect();

		self.generate_path(name, &params)
	}

	/// Number of registered routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Whether the container holds no routes.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn route(path: &str, name: &str) -> Route {
		Route::new(path, name, "Controller::action").unwrap()
	}

	#[test]
	fn test_add_route_rejects_duplicate_name() {
		let mut container = RouteContainer::new();
		container.add_route(route("/a", "first")).unwrap();

		let err = container.add_route(route("/b", "first")).unwrap_err();
		assert!(matches!(err, RegistrationError::DuplicateName(name) if name == "first"));
		assert_eq!(container.len(), 1);
	}

	#[test]
	fn test_same_pattern_with_distinct_names_is_allowed() {
		let mut container = RouteContainer::new();
		container.add_route(route("/x", "get-x")).unwrap();
		container.add_route(route("/x", "post-x")).unwrap();
		assert_eq!(container.len(), 2);
	}

	#[test]
	fn test_route_named_exact_lookup() {
		let mut container = RouteContainer::new();
		container.add_route(route("/users/{id}", "user-detail")).unwrap();

		assert!(container.route_named("user-detail").is_some());
		assert!(container.route_named("user").is_none());
	}

	#[test]
	fn test_generate_path_ignores_unused_params() {
		let mut container = RouteContainer::new();
		container.add_route(route("/users/{id}", "user-detail")).unwrap();

		let path = container
			.generate_path_with("user-detail", &[("id", "42"), ("unused", "1")])
			.unwrap();
		assert_eq!(path, "/users/42");
	}

	#[test]
	fn test_generate_path_unknown_name() {
		let container = RouteContainer::new();
		let err = container.generate_path("missing", &HashMap::new()).unwrap_err();
		assert_eq!(err, ReverseError::NotFound("missing".to_string()));
	}

	#[test]
	fn test_generate_path_missing_parameter() {
		let mut container = RouteContainer::new();
		container.add_route(route("/users/{id}", "user-detail")).unwrap();

		let err = container.generate_path("user-detail", &HashMap::new()).unwrap_err();
		assert_eq!(err, ReverseError::MissingParameter("id".to_string()));
	}

	#[test]
	fn test_generate_path_rejects_segment_escape() {
		let mut container = RouteContainer::new();
		container.add_route(route("/users/{id}", "user-detail")).unwrap();

		let err = container
			.generate_path_with("user-detail", &[("id", "1/../../admin")])
			.unwrap_err();
		assert_eq!(err, ReverseError::InvalidParameter("id".to_string()));
	}
}
