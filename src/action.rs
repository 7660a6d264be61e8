//! Route actions: what a matched route points at.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// The target a route dispatches to.
///
/// The router only records the action and hands it back on a match;
/// invoking it is the dispatching layer's job. An action is either an
/// opaque boxed handler object (downcast by the dispatcher that
/// registered it) or a symbolic view reference such as
/// `"UsersController::show"` resolved at dispatch time.
///
/// # Examples
///
/// ```
/// use waymark::RouteAction;
///
/// struct UsersHandler;
///
/// let action = RouteAction::handler(UsersHandler);
/// assert!(action.downcast_handler::<UsersHandler>().is_some());
///
/// let action = RouteAction::from("UsersController::show");
/// assert_eq!(action.as_view(), Some("UsersController::show"));
/// ```
#[derive(Clone)]
pub enum RouteAction {
	/// Boxed handler object.
	Handler(Arc<dyn Any + Send + Sync>),
	/// Symbolic view reference.
	View(String),
}

impl RouteAction {
	/// Wraps a handler object.
	pub fn handler<H>(handler: H) -> Self
	where
		H: Any + Send + Sync,
	{
		Self::Handler(Arc::new(handler))
	}

	/// Borrows the handler object as its concrete type, when this action
	/// holds a handler of that type.
	pub fn downcast_handler<H>(&self) -> Option<&H>
	where
		H: Any + Send + Sync,
	{
		match self {
			Self::Handler(handler) => handler.downcast_ref::<H>(),
			Self::View(_) => None,
		}
	}

	/// The view reference, when this action holds one.
	pub fn as_view(&self) -> Option<&str> {
		match self {
			Self::Handler(_) => None,
			Self::View(view) => Some(view),
		}
	}
}

impl fmt::Debug for RouteAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Handler(_) => f.write_str("RouteAction::Handler(..)"),
			Self::View(view) => write!(f, "RouteAction::View({:?})", view),
		}
	}
}

impl From<&str> for RouteAction {
	fn from(view: &str) -> Self {
		Self::View(view.to_string())
	}
}

impl From<String> for RouteAction {
	fn from(view: String) -> Self {
		Self::View(view)
	}
}

impl From<Arc<dyn Any + Send + Sync>> for RouteAction {
	fn from(handler: Arc<dyn Any + Send + Sync>) -> Self {
		Self::Handler(handler)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FirstHandler;
	struct OtherHandler;

	#[test]
	fn test_downcast_returns_registered_type_only() {
		let action = RouteAction::handler(FirstHandler);
		assert!(action.downcast_handler::<FirstHandler>().is_some());
		assert!(action.downcast_handler::<OtherHandler>().is_none());
		assert!(action.as_view().is_none());
	}

	#[test]
	fn test_view_reference_round_trips() {
		let action = RouteAction::from("ItemsController::index");
		assert_eq!(action.as_view(), Some("ItemsController::index"));
		assert!(action.downcast_handler::<FirstHandler>().is_none());
	}
}
