//! Public routing façade.

use std::collections::HashMap;

use http::Method;
use thiserror::Error;

use crate::action::RouteAction;
use crate::container::{RegistrationError, RouteContainer};
use crate::request::Request;
use crate::reverse::ReverseError;
use crate::route::Route;

fn join_methods(methods: &[Method]) -> String {
	methods
		.iter()
		.map(Method::as_str)
		.collect::<Vec<_>>()
		.join(", ")
}

/// A structural match whose route does not allow the request method.
///
/// Carries the route's allowed-method set and the offending path so the
/// caller can produce a 405 response with an `Allow` header.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("method not allowed for '{path}', allow: {}", join_methods(.allowed))]
pub struct MethodNotAllowed {
	allowed: Vec<Method>,
	path: String,
}

impl MethodNotAllowed {
	fn new(allowed: Vec<Method>, path: impl Into<String>) -> Self {
		Self {
			allowed,
			path: path.into(),
		}
	}

	/// The methods the matched route allows.
	pub fn allowed(&self) -> &[Method] {
		&self.allowed
	}

	/// The request path that matched structurally.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Value for the `Allow` header of a 405 response, e.g. `"GET, HEAD"`.
	pub fn allow_header(&self) -> String {
		join_methods(&self.allowed)
	}
}

/// A resolved request: the winning route plus the values captured by its
/// placeholder segments.
#[derive(Debug)]
pub struct RouteMatch<'r> {
	pub route: &'r Route,
	pub params: HashMap<String, String>,
}

/// The public entry point: per-method registration plus resolution and
/// reverse generation.
///
/// # Examples
///
/// ```
/// use waymark::{Method, Request, Router};
/// use http::Uri;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.get("/users/{id}", "user-detail", "UsersController::show")?;
///
/// let request = Request::new(Method::GET, Uri::from_static("/users/42"));
/// let matched = router.resolve(&request)?.expect("route matches");
/// assert_eq!(matched.route.name(), "user-detail");
/// assert_eq!(matched.params.get("id"), Some(&"42".to_string()));
///
/// let path = router.generate_with("user-detail", &[("id", "42")])?;
/// assert_eq!(path, "/users/42");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Router {
	container: RouteContainer,
}

impl Router {
	/// Creates a router with an empty route container.
	pub fn new() -> Self {
		Self {
			container: RouteContainer::new(),
		}
	}

	/// Registers a GET route.
	pub fn get(
		&mut self,
		path: &str,
		name: &str,
		action: impl Into<RouteAction>,
	) -> Result<&mut Route, RegistrationError> {
		self.register(Method::GET, path, name, action)
	}

	/// Registers a POST route.
	pub fn post(
		&mut self,
		path: &str,
		name: &str,
		action: impl Into<RouteAction>,
	) -> Result<&mut Route, RegistrationError> {
		self.register(Method::POST, path, name, action)
	}

	/// Registers a PUT route.
	pub fn put(
		&mut self,
		path: &str,
		name: &str,
		action: impl Into<RouteAction>,
	) -> Result<&mut Route, RegistrationError> {
		self.register(Method::PUT, path, name, action)
	}

	/// Registers a DELETE route.
	pub fn delete(
		&mut self,
		path: &str,
		name: &str,
		action: impl Into<RouteAction>,
	) -> Result<&mut Route, RegistrationError> {
		self.register(Method::DELETE, path, name, action)
	}

	/// Registers a PATCH route.
	pub fn patch(
		&mut self,
		path: &str,
		name: &str,
		action: impl Into<RouteAction>,
	) -> Result<&mut Route, RegistrationError> {
		self.register(Method::PATCH, path, name, action)
	}

	/// Registers an OPTIONS route.
	pub fn options(
		&mut self,
		path: &str,
		name: &str,
		action: impl Into<RouteAction>,
	) -> Result<&mut Route, RegistrationError> {
		self.register(Method::OPTIONS, path, name, action)
	}

	fn register(
		&mut self,
		method: Method,
		path: &str,
		name: &str,
		action: impl Into<RouteAction>,
	) -> Result<&mut Route, RegistrationError> {
		let mut route = Route::new(path, name, action)?;
		route.allows(method);
		self.container.add_route(route)
	}

	/// Resolves a request against the registered routes.
	///
	/// Routes are tried in registration order and the first structural
	/// match decides: if the request method is in its allowed set the
	/// route is returned with extracted parameters, otherwise resolution
	/// fails with [`MethodNotAllowed`]. It does not fall through to
	/// later routes, even when one of them would accept the method.
	/// `Ok(None)` means no route structurally matched.
	pub fn resolve(&self, request: &Request) -> Result<Option<RouteMatch<'_>>, MethodNotAllowed> {
		for route in self.container.routes() {
			if !self.container.matches(request, route) {
				continue;
			}

			if !route.allows_method(&request.method) {
				tracing::debug!(
					path = request.path(),
					route = route.name(),
					"structural match with disallowed method"
				);
				return Err(MethodNotAllowed::new(
					route.allowed_methods().to_vec(),
					request.path(),
				));
			}

			let params = route
				.pattern()
				.extract_params(request.path())
				.unwrap_or_default();
			return Ok(Some(RouteMatch { route, params }));
		}

		Ok(None)
	}

	/// All registered routes in registration order.
	pub fn routes(&self) -> &[Route] {
		self.container.routes()
	}

	/// Generates a concrete path for a named route.
	pub fn generate(
		&self,
		name: &str,
		params: &HashMap<String, String>,
	) -> Result<String, ReverseError> {
		self.container.generate_path(name, params)
	}

	/// Slice convenience over [`generate`](Router::generate).
	pub fn generate_with<S: AsRef<str>>(
		&self,
		name: &str,
		params: &[(S, S)],
	) -> Result<String, ReverseError> {
		self.container.generate_path_with(name, params)
	}
}
