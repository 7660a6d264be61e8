//! Path pattern parsing and structural matching.
//!
//! A pattern is a `/`-delimited template such as `/users/{id}`. Segments
//! wrapped in braces are placeholders that match any single non-empty path
//! segment; every other segment is a literal compared byte-for-byte.
//! Patterns are parsed once at route registration and matched by walking
//! segments in lockstep; there is no compiled automaton behind them.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors raised while parsing a pattern string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
	/// A segment opened a placeholder with `{` but is not of the form
	/// `{name}`.
	#[error("malformed placeholder in segment '{0}'")]
	MalformedPlaceholder(String),

	/// A placeholder segment has no name (`{}`).
	#[error("empty placeholder name in pattern '{0}'")]
	EmptyPlaceholderName(String),
}

/// One parsed segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Param(String),
}

/// A parsed path template.
///
/// # Examples
///
/// ```
/// use waymark::PathPattern;
///
/// let pattern = PathPattern::new("/users/{id}").unwrap();
/// assert!(pattern.is_match("/users/42"));
/// assert!(pattern.is_match("/users/jane"));
/// assert!(!pattern.is_match("/users"));
/// assert!(!pattern.is_match("/users/42/posts"));
///
/// let params = pattern.extract_params("/users/42").unwrap();
/// assert_eq!(params.get("id"), Some(&"42".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
	raw: String,
	segments: Vec<Segment>,
}

impl PathPattern {
	/// Parses a pattern string.
	///
	/// A segment starting with `{` must be a well-formed `{name}`
	/// placeholder; anything else in a segment is taken literally.
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		let segments = pattern
			.split('/')
			.map(|segment| {
				if let Some(rest) = segment.strip_prefix('{') {
					let name = rest
						.strip_suffix('}')
						.ok_or_else(|| PatternError::MalformedPlaceholder(segment.to_string()))?;
					if name.is_empty() {
						return Err(PatternError::EmptyPlaceholderName(pattern.to_string()));
					}
					Ok(Segment::Param(name.to_string()))
				} else {
					Ok(Segment::Literal(segment.to_string()))
				}
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self {
			raw: pattern.to_string(),
			segments,
		})
	}

	/// Structural comparison against a concrete request path.
	///
	/// The path matches when both sides have the same number of
	/// `/`-delimited segments, every literal segment is equal
	/// (case-sensitive) and every placeholder lines up with a non-empty
	/// segment value.
	pub fn is_match(&self, path: &str) -> bool {
		let mut values = path.split('/');
		let mut segments = self.segments.iter();

		loop {
			match (segments.next(), values.next()) {
				(None, None) => return true,
				(Some(Segment::Literal(literal)), Some(value)) if literal == value => {}
				(Some(Segment::Param(_)), Some(value)) if !value.is_empty() => {}
				_ => return false,
			}
		}
	}

	/// Matches the path and returns the values captured by placeholder
	/// segments, or `None` when the path does not match.
	///
	/// # Examples
	///
	/// ```
	/// use waymark::PathPattern;
	///
	/// let pattern = PathPattern::new("/users/{user_id}/posts/{post_id}").unwrap();
	/// let params = pattern.extract_params("/users/7/posts/19").unwrap();
	/// assert_eq!(params.get("user_id"), Some(&"7".to_string()));
	/// assert_eq!(params.get("post_id"), Some(&"19".to_string()));
	/// assert!(pattern.extract_params("/users/7").is_none());
	/// ```
	pub fn extract_params(&self, path: &str) -> Option<HashMap<String, String>> {
		if !self.is_match(path) {
			return None;
		}

		let mut params = HashMap::new();
		for (segment, value) in self.segments.iter().zip(path.split('/')) {
			if let Segment::Param(name) = segment {
				params.insert(name.clone(), value.to_string());
			}
		}

		Some(params)
	}

	/// Placeholder names in pattern order.
	pub fn param_names(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().filter_map(|segment| match segment {
			Segment::Param(name) => Some(name.as_str()),
			Segment::Literal(_) => None,
		})
	}

	/// The original template string.
	pub fn as_str(&self) -> &str {
		&self.raw
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.raw == other.raw
	}
}

impl Eq for PathPattern {}

impl fmt::Display for PathPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.raw)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_literal_pattern_exact_match() {
		let pattern = PathPattern::new("/users").unwrap();
		assert!(pattern.is_match("/users"));
		assert!(!pattern.is_match("/users/"));
		assert!(!pattern.is_match("/user"));
	}

	#[test]
	fn test_placeholder_matches_any_non_empty_segment() {
		let pattern = PathPattern::new("/users/{id}").unwrap();
		assert!(pattern.is_match("/users/42"));
		assert!(pattern.is_match("/users/jane-doe"));
		assert!(!pattern.is_match("/users/"));
	}

	#[test]
	fn test_segment_count_must_agree() {
		let pattern = PathPattern::new("/a/{x}/c").unwrap();
		assert!(pattern.is_match("/a/b/c"));
		assert!(!pattern.is_match("/a/b"));
		assert!(!pattern.is_match("/a/b/c/d"));
	}

	#[test]
	fn test_literal_comparison_is_case_sensitive() {
		let pattern = PathPattern::new("/Users").unwrap();
		assert!(pattern.is_match("/Users"));
		assert!(!pattern.is_match("/users"));
	}

	#[test]
	fn test_param_names_in_pattern_order() {
		let pattern = PathPattern::new("/a/{x}/b/{y}").unwrap();
		let names: Vec<&str> = pattern.param_names().collect();
		assert_eq!(names, vec!["x", "y"]);
	}

	#[test]
	fn test_root_pattern() {
		let pattern = PathPattern::new("/").unwrap();
		assert!(pattern.is_match("/"));
		assert!(!pattern.is_match(""));
		assert!(!pattern.is_match("/a"));
	}

	#[test]
	fn test_unterminated_placeholder_is_rejected() {
		let err = PathPattern::new("/users/{id").unwrap_err();
		assert_eq!(err, PatternError::MalformedPlaceholder("{id".to_string()));
	}

	#[test]
	fn test_empty_placeholder_name_is_rejected() {
		let err = PathPattern::new("/users/{}").unwrap_err();
		assert_eq!(err, PatternError::EmptyPlaceholderName("/users/{}".to_string()));
	}

	#[test]
	fn test_display_round_trips_raw_pattern() {
		let pattern = PathPattern::new("/users/{id}").unwrap();
		assert_eq!(pattern.to_string(), "/users/{id}");
		assert_eq!(pattern.as_str(), "/users/{id}");
	}
}
