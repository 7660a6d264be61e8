//! Route definition.

use http::Method;

use crate::action::RouteAction;
use crate::pattern::{PathPattern, PatternError};

/// One registered mapping of pattern, name, action and allowed methods.
///
/// A route is built at registration time and immutable afterwards except
/// for [`allows`](Route::allows), which callers chain right after
/// registration to open additional methods.
///
/// # Examples
///
/// ```
/// use waymark::{Method, Route};
///
/// let mut route = Route::new("/users/{id}", "user-detail", "UsersController::show").unwrap();
/// route.allows(Method::GET).allows(Method::HEAD);
///
/// assert_eq!(route.path(), "/users/{id}");
/// assert_eq!(route.name(), "user-detail");
/// assert_eq!(route.allowed_methods(), &[Method::GET, Method::HEAD]);
/// ```
#[derive(Debug, Clone)]
pub struct Route {
	pattern: PathPattern,
	name: String,
	action: RouteAction,
	allowed: Vec<Method>,
}

impl Route {
	/// Creates a route from a pattern string, a unique name and an action.
	///
	/// The allowed-method set starts empty; a route with no allowed
	/// methods structurally matches but never resolves.
	pub fn new(
		path: &str,
		name: impl Into<String>,
		action: impl Into<RouteAction>,
	) -> Result<Self, PatternError> {
		Ok(Self {
			pattern: PathPattern::new(path)?,
			name: name.into(),
			action: action.into(),
			allowed: Vec::new(),
		})
	}

	/// Opens an HTTP method for this route. Chaining is supported; adding
	/// a method twice keeps a single entry (only membership is ever
	/// checked).
	pub fn allows(&mut self, method: Method) -> &mut Self {
		if !self.allowed.contains(&method) {
			self.allowed.push(method);
		}
		self
	}

	/// The allowed methods, in the order they were opened.
	pub fn allowed_methods(&self) -> &[Method] {
		&self.allowed
	}

	/// Whether the given method is allowed on this route.
	pub fn allows_method(&self, method: &Method) -> bool {
		self.allowed.contains(method)
	}

	/// The parsed path pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// The raw pattern string.
	pub fn path(&self) -> &str {
		self.pattern.as_str()
	}

	/// The unique route name used for reverse generation.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The action this route dispatches to.
	pub fn action(&self) -> &RouteAction {
		&self.action
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_route_allows_nothing() {
		let route = Route::new("/items", "items", "ItemsController::index").unwrap();
		assert!(route.allowed_methods().is_empty());
		assert!(!route.allows_method(&Method::GET));
	}

	#[test]
	fn test_allows_preserves_insertion_order_and_dedupes() {
		let mut route = Route::new("/items", "items", "ItemsController::index").unwrap();
		route
			.allows(Method::GET)
			.allows(Method::POST)
			.allows(Method::GET);

		assert_eq!(route.allowed_methods(), &[Method::GET, Method::POST]);
		assert!(route.allows_method(&Method::POST));
		assert!(!route.allows_method(&Method::DELETE));
	}

	#[test]
	fn test_invalid_pattern_fails_construction() {
		assert!(Route::new("/items/{id", "broken", "x").is_err());
	}
}
