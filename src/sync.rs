//! Request synchronization directives for `hx-sync`.

use std::fmt;

use crate::trigger::QueueMode;

/// Synchronization directive keyed by the selector of the element to sync on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyncOption {
	/// Client default strategy; renders as the bare selector
	Default(String),
	/// Drop the new request while one is in flight
	Drop(String),
	/// Abort the new request if another one starts
	Abort(String),
	/// Abort the in-flight request and replace it
	Replace(String),
	/// Queue the new request
	Queue(String, QueueMode),
}

impl SyncOption {
	/// Bare selector with the default strategy.
	pub fn default_for(selector: impl Into<String>) -> Self {
		Self::Default(selector.into())
	}

	/// `<selector>:drop`
	pub fn drop(selector: impl Into<String>) -> Self {
		Self::Drop(selector.into())
	}

	/// `<selector>:abort`
	pub fn abort(selector: impl Into<String>) -> Self {
		Self::Abort(selector.into())
	}

	/// `<selector>:replace`
	pub fn replace(selector: impl Into<String>) -> Self {
		Self::Replace(selector.into())
	}

	/// `<selector>:queue <mode>`
	pub fn queue(selector: impl Into<String>, mode: QueueMode) -> Self {
		Self::Queue(selector.into(), mode)
	}

	/// Returns the selector this directive is keyed by.
	pub fn selector(&self) -> &str {
		match self {
			Self::Default(selector)
			| Self::Drop(selector)
			| Self::Abort(selector)
			| Self::Replace(selector)
			| Self::Queue(selector, _) => selector,
		}
	}
}

impl fmt::Display for SyncOption {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Default(selector) => f.write_str(selector),
			Self::Drop(selector) => write!(f, "{}:drop", selector),
			Self::Abort(selector) => write!(f, "{}:abort", selector),
			Self::Replace(selector) => write!(f, "{}:replace", selector),
			Self::Queue(selector, mode) => write!(f, "{}:queue {}", selector, mode),
		}
	}
}

/// Joins serialized options with a single space.
pub(crate) fn format_sync(options: &[SyncOption]) -> String {
	options
		.iter()
		.map(|option| option.to_string())
		.collect::<Vec<_>>()
		.join(" ")
}
