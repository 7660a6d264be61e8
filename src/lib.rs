//! # Waymark
//!
//! HTTP request routing with named routes and reverse path generation:
//!
//! - **Per-method registration**: `get`/`post`/`put`/`delete`/`patch`/`options`,
//!   one route per call, chainable `allows` for extra methods
//! - **Structural matching**: `/`-delimited templates with `{name}`
//!   placeholders, tried in registration order, first match wins
//! - **Parameter extraction**: placeholder values captured into a map on
//!   every successful match
//! - **Reverse generation**: build a concrete path from a route name and
//!   parameters, Django `reverse()` style
//!
//! Routes are scanned linearly; a disallowed method on the first
//! structural match is a hard [`MethodNotAllowed`] fault (405), while the
//! absence of any structural match is a plain `None` (404). Handlers are
//! opaque to the router; dispatching a matched route is the server
//! layer's job.
//!
//! # Examples
//!
//! ```
//! use waymark::{Method, Request, Router};
//! use http::Uri;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.get("/users", "user-list", "UsersController::index")?;
//! router.get("/users/{id}", "user-detail", "UsersController::show")?;
//! router.post("/users", "user-create", "UsersController::create")?;
//!
//! // Structural match with an allowed method resolves to the route.
//! let request = Request::new(Method::GET, Uri::from_static("/users/42"));
//! let matched = router.resolve(&request)?.expect("route matches");
//! assert_eq!(matched.route.name(), "user-detail");
//! assert_eq!(matched.params.get("id"), Some(&"42".to_string()));
//!
//! // No structural match is an absence, not an error.
//! let request = Request::new(Method::GET, Uri::from_static("/teams"));
//! assert!(router.resolve(&request)?.is_none());
//!
//! // Reverse generation by route name.
//! assert_eq!(router.generate_with("user-detail", &[("id", "42")])?, "/users/42");
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod container;
pub mod pattern;
pub mod request;
pub mod reverse;
pub mod route;
pub mod router;

pub use action::RouteAction;
pub use container::{RegistrationError, RouteContainer};
pub use pattern::{PathPattern, PatternError};
pub use request::Request;
pub use reverse::ReverseError;
pub use route::Route;
pub use router::{MethodNotAllowed, RouteMatch, Router};

// HTTP method tokens come straight from the `http` crate.
pub use http::Method;
