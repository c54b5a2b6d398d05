//! Extended CSS selectors
//!
//! The client runtime accepts plain CSS selectors plus a handful of relational
//! keywords (`closest`, `find`, `next`, `previous`, `this`, `document`,
//! `window`). Selector text is forwarded as-is; nothing here validates it.

use std::fmt;
use std::str::FromStr;

use crate::error::HtmxError;

/// Reference to an element (or elements) in extended selector syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementReference {
	/// Plain CSS selector
	Standard(String),
	/// The `document` object
	Document,
	/// The `window` object
	Window,
	/// Closest ancestor matching the selector
	Closest(String),
	/// First descendant matching the selector
	Find(String),
	/// Next sibling, optionally matching a selector
	Next(Option<String>),
	/// Previous sibling, optionally matching a selector
	Previous(Option<String>),
	/// The element carrying the attribute
	This,
}

impl ElementReference {
	/// Plain CSS selector reference.
	pub fn standard(selector: impl Into<String>) -> Self {
		Self::Standard(selector.into())
	}

	/// `closest <selector>` reference.
	pub fn closest(selector: impl Into<String>) -> Self {
		Self::Closest(selector.into())
	}

	/// `find <selector>` reference.
	pub fn find(selector: impl Into<String>) -> Self {
		Self::Find(selector.into())
	}

	/// `next <selector>` reference.
	pub fn next(selector: impl Into<String>) -> Self {
		Self::Next(Some(selector.into()))
	}

	/// `previous <selector>` reference.
	pub fn previous(selector: impl Into<String>) -> Self {
		Self::Previous(Some(selector.into()))
	}
}

impl fmt::Display for ElementReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Standard(selector) => f.write_str(selector),
			Self::Document => f.write_str("document"),
			Self::Window => f.write_str("window"),
			Self::Closest(selector) => write!(f, "closest {}", selector),
			Self::Find(selector) => write!(f, "find {}", selector),
			// Absent selector still keeps the separating space: "next "
			Self::Next(selector) => write!(f, "next {}", selector.as_deref().unwrap_or("")),
			Self::Previous(selector) => {
				write!(f, "previous {}", selector.as_deref().unwrap_or(""))
			}
			Self::This => f.write_str("this"),
		}
	}
}

impl From<&str> for ElementReference {
	fn from(selector: &str) -> Self {
		Self::Standard(selector.to_string())
	}
}

impl From<String> for ElementReference {
	fn from(selector: String) -> Self {
		Self::Standard(selector)
	}
}

/// Scroll target used by the `scroll:` and `show:` swap modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
	/// Top of the element
	Top,
	/// Bottom of the element
	Bottom,
}

impl Position {
	/// Convert position to its attribute token
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Top => "top",
			Self::Bottom => "bottom",
		}
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Position {
	type Err = HtmxError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"top" => Ok(Self::Top),
			"bottom" => Ok(Self::Bottom),
			other => Err(HtmxError::UnknownPosition(other.to_string())),
		}
	}
}
