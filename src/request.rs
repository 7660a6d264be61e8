//! Minimal request abstraction consumed by the router.
//!
//! Matching needs exactly two facts about a request: its HTTP method and
//! its URI path. Headers, body and query string belong to the transport
//! layer above this crate.

use http::{Method, Uri};

/// An incoming request as seen by the router.
///
/// # Examples
///
/// ```
/// use waymark::{Method, Request};
/// use http::Uri;
///
/// let request = Request::new(Method::GET, Uri::from_static("/users/42?full=1"));
/// assert_eq!(request.method, Method::GET);
/// // The query string never takes part in matching.
/// assert_eq!(request.path(), "/users/42");
/// ```
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
}

impl Request {
	/// Creates a request from a method and URI.
	pub fn new(method: Method, uri: Uri) -> Self {
		Self { method, uri }
	}

	/// The URI path, without query string or fragment.
	pub fn path(&self) -> &str {
		self.uri.path()
	}
}
