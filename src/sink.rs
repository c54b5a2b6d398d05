//! Attaching attributes to markup.
//!
//! The markup layer only needs to accept `(name, value)` string pairs. The
//! implementations here cover the attribute list shape used by
//! `PageElement` as well as plain maps used by component renderers.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::attribute::Attribute;

/// Anything that can receive an attribute name/value pair.
pub trait AttributeSink {
	/// Attach a single attribute.
	fn attach(&mut self, name: Cow<'static, str>, value: Cow<'static, str>);
}

impl AttributeSink for Vec<(Cow<'static, str>, Cow<'static, str>)> {
	fn attach(&mut self, name: Cow<'static, str>, value: Cow<'static, str>) {
		self.push((name, value));
	}
}

/// Later attributes with the same name overwrite earlier ones.
impl AttributeSink for HashMap<String, String> {
	fn attach(&mut self, name: Cow<'static, str>, value: Cow<'static, str>) {
		self.insert(name.into_owned(), value.into_owned());
	}
}

/// Later attributes with the same name overwrite earlier ones.
impl AttributeSink for BTreeMap<String, String> {
	fn attach(&mut self, name: Cow<'static, str>, value: Cow<'static, str>) {
		self.insert(name.into_owned(), value.into_owned());
	}
}

impl Attribute {
	/// Attach this attribute to a sink.
	pub fn attach_to<S: AttributeSink + ?Sized>(self, sink: &mut S) {
		let (name, value) = self.into_pair();
		sink.attach(name, value);
	}
}

/// Attach every attribute to a sink, in order.
pub fn attach_all<S, I>(sink: &mut S, attrs: I)
where
	S: AttributeSink + ?Sized,
	I: IntoIterator<Item = Attribute>,
{
	for attr in attrs {
		attr.attach_to(sink);
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	fn test_vec_sink_keeps_order_and_duplicates() {
		let mut attrs: Vec<(Cow<'static, str>, Cow<'static, str>)> = Vec::new();
		attach_all(
			&mut attrs,
			[
				Attribute::new("hx-get", "/a"),
				Attribute::new("hx-swap", "none"),
				Attribute::new("hx-get", "/b"),
			],
		);
		assert_eq!(attrs.len(), 3);
		assert_eq!(attrs[0], (Cow::Borrowed("hx-get"), Cow::Borrowed("/a")));
		assert_eq!(attrs[2].1, "/b");
	}

	#[rstest]
	fn test_map_sink_overwrites() {
		let mut attrs: HashMap<String, String> = HashMap::new();
		Attribute::new("hx-get", "/a").attach_to(&mut attrs);
		Attribute::new("hx-get", "/b").attach_to(&mut attrs);
		assert_eq!(attrs.len(), 1);
		assert_eq!(attrs["hx-get"], "/b");
	}

	#[rstest]
	fn test_btree_sink_is_sorted() {
		let mut attrs: BTreeMap<String, String> = BTreeMap::new();
		attach_all(
			&mut attrs,
			[
				Attribute::new("hx-target", "#a"),
				Attribute::new("hx-boost", "true"),
			],
		);
		let names: Vec<_> = attrs.keys().map(String::as_str).collect();
		assert_eq!(names, ["hx-boost", "hx-target"]);
	}

	#[rstest]
	fn test_dyn_sink() {
		let mut attrs: Vec<(Cow<'static, str>, Cow<'static, str>)> = Vec::new();
		let sink: &mut dyn AttributeSink = &mut attrs;
		Attribute::new("hx-select", "#main").attach_to(sink);
		assert_eq!(attrs.len(), 1);
	}
}
