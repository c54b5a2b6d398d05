//! The name/value pair every constructor produces.
//!
//! ## Overview
//!
//! An [`Attribute`] is ready to be attached to a markup element. The pair can
//! be handed to any [`AttributeSink`](crate::sink::AttributeSink) (for example
//! a `PageElement` attribute list), or rendered directly as HTML with
//! [`Display`](std::fmt::Display).
//!
//! ## Example
//!
//! ```
//! use reinhardt_htmx::hx;
//!
//! let attr = hx::get("/items?q=a&b");
//! assert_eq!(attr.name(), "hx-get");
//! assert_eq!(attr.to_string(), r#"hx-get="/items?q=a&amp;b""#);
//! ```

use std::borrow::Cow;
use std::fmt;

/// Prefix shared by every htmx attribute name.
const HX_PREFIX: &str = "hx-";

/// A single attribute name/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
	name: Cow<'static, str>,
	value: Cow<'static, str>,
}

impl Attribute {
	/// Creates a new attribute.
	pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		let name = name.into();
		let value = value.into();
		tracing::trace!(name = %name, value = %value, "built htmx attribute");
		Self { name, value }
	}

	/// Returns the attribute name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the attribute value.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Consumes the attribute and returns the `(name, value)` pair.
	pub fn into_pair(self) -> (Cow<'static, str>, Cow<'static, str>) {
		(self.name, self.value)
	}

	/// Rewrites an `hx-*` name to its `data-hx-*` form.
	///
	/// The client runtime accepts both spellings; the `data-` one keeps strict
	/// HTML validators quiet. Names outside the `hx-` family (such as the `_`
	/// scripting hook) are returned unchanged.
	pub fn data_prefixed(self) -> Self {
		if self.name.starts_with(HX_PREFIX) {
			Self {
				name: Cow::Owned(format!("data-{}", self.name)),
				value: self.value,
			}
		} else {
			self
		}
	}
}

impl fmt::Display for Attribute {
	/// Renders `name="value"` with the value HTML-escaped.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}=\"{}\"", self.name, html_escape(&self.value))
	}
}

impl From<Attribute> for (Cow<'static, str>, Cow<'static, str>) {
	fn from(attr: Attribute) -> Self {
		attr.into_pair()
	}
}

/// Renders attributes as they appear inside a start tag, separated by single
/// spaces.
pub fn render_attributes(attrs: &[Attribute]) -> String {
	attrs
		.iter()
		.map(|attr| attr.to_string())
		.collect::<Vec<_>>()
		.join(" ")
}

/// Escapes an attribute value for use inside a double-quoted HTML attribute.
///
/// Selector and trigger values rarely need escaping, but `hx-vals`,
/// `hx-headers` and `hx-confirm` routinely carry quotes and ampersands.
/// Returns a borrowed reference if no escaping is needed.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
