//! Trigger descriptors for `hx-trigger`
//!
//! A trigger is an event name followed by zero or more modifiers. Modifiers
//! are kept in the order they were added; duplicates and conflicting
//! modifiers are passed through unchanged.
//!
//! ## Example
//!
//! ```
//! use reinhardt_htmx::{Duration, TriggerEvent};
//!
//! let event = TriggerEvent::new("keyup").changed().delay(Duration::Milliseconds(500));
//! assert_eq!(event.to_string(), "keyup changed delay:500ms");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::duration::Duration;
use crate::error::HtmxError;
use crate::selector::ElementReference;

/// Most triggers carry 0-2 modifiers in practice
const TYPICAL_MODIFIER_COUNT: usize = 2;

/// How repeated firings are queued while a request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueMode {
	/// Queue the first event
	First,
	/// Queue the last event
	Last,
	/// Queue every event
	All,
	/// Do not queue
	None,
}

impl QueueMode {
	/// Convert queue mode to its attribute token
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::First => "first",
			Self::Last => "last",
			Self::All => "all",
			Self::None => "none",
		}
	}
}

impl fmt::Display for QueueMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for QueueMode {
	type Err = HtmxError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"first" => Ok(Self::First),
			"last" => Ok(Self::Last),
			"all" => Ok(Self::All),
			"none" => Ok(Self::None),
			other => Err(HtmxError::UnknownQueueMode(other.to_string())),
		}
	}
}

/// A refinement of a trigger event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventModifier {
	/// Fire at most once
	Once,
	/// Fire only if the element's value changed
	Changed,
	/// Wait before firing; restarts on each new event
	Delay(Duration),
	/// Fire at most once per interval
	Throttle(Duration),
	/// Listen on another element
	From(ElementReference),
	/// Only fire when the event target matches the selector
	Target(String),
	/// Stop the event from reaching parent triggers
	Consume,
	/// Queueing policy
	Queue(QueueMode),
}

impl fmt::Display for EventModifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Once => f.write_str("once"),
			Self::Changed => f.write_str("changed"),
			Self::Delay(duration) => write!(f, "delay:{}", duration),
			Self::Throttle(duration) => write!(f, "throttle:{}", duration),
			Self::From(reference) => write!(f, "from:{}", reference),
			Self::Target(selector) => write!(f, "target:{}", selector),
			Self::Consume => f.write_str("consume"),
			Self::Queue(mode) => write!(f, "queue:{}", mode),
		}
	}
}

/// A single trigger: an event name plus ordered modifiers.
///
/// ## Example
///
/// ```
/// use reinhardt_htmx::{Duration, TriggerEvent};
///
/// let event = TriggerEvent::new("click").once().delay(Duration::Seconds(2));
/// assert_eq!(event.to_string(), "click once delay:2s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriggerEvent {
	name: String,
	modifiers: Vec<EventModifier>,
}

impl TriggerEvent {
	/// Create a trigger for the named event with no modifiers
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			modifiers: Vec::with_capacity(TYPICAL_MODIFIER_COUNT),
		}
	}

	/// Create a trigger from an event name and a modifier sequence
	pub fn with_modifiers(
		name: impl Into<String>,
		modifiers: impl IntoIterator<Item = EventModifier>,
	) -> Self {
		Self {
			name: name.into(),
			modifiers: modifiers.into_iter().collect(),
		}
	}

	/// Append a modifier
	pub fn modifier(mut self, modifier: EventModifier) -> Self {
		self.modifiers.push(modifier);
		self
	}

	/// Append `once`
	#[inline]
	pub fn once(self) -> Self {
		self.modifier(EventModifier::Once)
	}

	/// Append `changed`
	#[inline]
	pub fn changed(self) -> Self {
		self.modifier(EventModifier::Changed)
	}

	/// Append `delay:<duration>`
	#[inline]
	pub fn delay(self, duration: Duration) -> Self {
		self.modifier(EventModifier::Delay(duration))
	}

	/// Append `throttle:<duration>`
	#[inline]
	pub fn throttle(self, duration: Duration) -> Self {
		self.modifier(EventModifier::Throttle(duration))
	}

	/// Append `from:<reference>`
	#[inline]
	pub fn from_element(self, reference: impl Into<ElementReference>) -> Self {
		self.modifier(EventModifier::From(reference.into()))
	}

	/// Append `target:<selector>`
	#[inline]
	pub fn target(self, selector: impl Into<String>) -> Self {
		self.modifier(EventModifier::Target(selector.into()))
	}

	/// Append `consume`
	#[inline]
	pub fn consume(self) -> Self {
		self.modifier(EventModifier::Consume)
	}

	/// Append `queue:<mode>`
	#[inline]
	pub fn queue(self, mode: QueueMode) -> Self {
		self.modifier(EventModifier::Queue(mode))
	}

	/// Returns the event name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the modifiers in declaration order.
	pub fn modifiers(&self) -> &[EventModifier] {
		&self.modifiers
	}
}

impl fmt::Display for TriggerEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)?;
		for modifier in &self.modifiers {
			write!(f, " {}", modifier)?;
		}
		Ok(())
	}
}

impl From<&str> for TriggerEvent {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

/// Joins serialized events with `", "`; an empty list yields an empty string.
pub(crate) fn format_events(events: &[TriggerEvent]) -> String {
	events
		.iter()
		.map(|event| event.to_string())
		.collect::<Vec<_>>()
		.join(", ")
}

/// `every <duration>`, followed by ` [<filter>]` when a filter is given.
pub(crate) fn format_polling(duration: Duration, filter: Option<&str>) -> String {
	match filter {
		Some(filter) => format!("every {} [{}]", duration, filter),
		None => format!("every {}", duration),
	}
}
