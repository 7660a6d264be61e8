//! Reverse path generation for named routes.

use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while generating a path from a route name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReverseError {
	/// No registered route carries the requested name.
	#[error("no route named '{0}'")]
	NotFound(String),

	/// The pattern has a placeholder with no matching parameter entry.
	#[error("missing value for parameter '{0}'")]
	MissingParameter(String),

	/// A parameter value would escape its segment (path separators, query
	/// or fragment delimiters, percent-encoded sequences).
	#[error("invalid value for parameter '{0}': contains reserved path characters")]
	InvalidParameter(String),
}

/// A value is safe to substitute when it cannot introduce new path
/// segments or smuggle a query/fragment into the generated path.
pub(crate) fn is_safe_param(value: &str) -> bool {
	!value.contains(['/', '?', '#', '%'])
}

/// Single-pass placeholder substitution over a raw pattern string.
///
/// Placeholders with no matching entry are left intact; callers verify
/// required parameters up front.
pub(crate) fn substitute(pattern: &str, params: &HashMap<String, String>) -> String {
	let mut result = String::with_capacity(pattern.len());
	let mut chars = pattern.chars();

	while let Some(ch) = chars.next() {
		if ch == '{' {
			let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			match params.get(&name) {
				Some(value) => result.push_str(value),
				None => {
					result.push('{');
					result.push_str(&name);
					result.push('}');
				}
			}
		} else {
			result.push(ch);
		}
	}

	result
}
