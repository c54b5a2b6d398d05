//! # Reinhardt htmx
//!
//! Typed builders for the `hx-*` attributes understood by the htmx client
//! runtime.
//!
//! Each constructor in [`hx`] takes strongly-typed values (durations, swap
//! strategies, extended selectors, trigger descriptors) and returns a single
//! [`Attribute`] whose value is exactly the string the client expects. The
//! crate performs no I/O and holds no state; every constructor is a pure
//! function and can be called from any thread.
//!
//! ## Example
//!
//! ```
//! use std::borrow::Cow;
//!
//! use reinhardt_htmx::{
//!     hx, Duration, ElementReference, QueueMode, SwapStrategy, SyncOption, TriggerEvent,
//!     attach_all,
//! };
//!
//! let mut attrs: Vec<(Cow<'static, str>, Cow<'static, str>)> = Vec::new();
//! attach_all(&mut attrs, [
//!     hx::get("/search"),
//!     hx::trigger([TriggerEvent::new("keyup").changed().delay(Duration::Milliseconds(300))]),
//!     hx::target(ElementReference::closest("section")),
//!     hx::swap(SwapStrategy::InnerHtml, None),
//!     hx::sync([SyncOption::queue("this", QueueMode::Last)]),
//! ]);
//!
//! assert_eq!(attrs[1].1, "keyup changed delay:300ms");
//! assert_eq!(attrs[2].1, "closest section");
//! ```
//!
//! ## Modules
//!
//! - [`hx`]: attribute constructors
//! - [`trigger`], [`swap`], [`sync`], [`selector`], [`duration`], [`params`]:
//!   the typed values the constructors accept
//! - [`attribute`] and [`sink`]: the output pair and where it goes
//! - [`config`]: the client's global `htmx-config` settings

pub mod attribute;
pub mod config;
pub mod duration;
pub mod error;
pub mod hx;
pub mod params;
pub mod selector;
pub mod sink;
pub mod swap;
pub mod sync;
pub mod trigger;

// Re-export main types for convenience
pub use attribute::{Attribute, render_attributes};
pub use config::{HtmxConfig, ScrollBehavior};
pub use duration::Duration;
pub use error::{HtmxError, Result};
pub use params::Params;
pub use selector::{ElementReference, Position};
pub use sink::{AttributeSink, attach_all};
pub use swap::{SwapModifier, SwapStrategy};
pub use sync::SyncOption;
pub use trigger::{EventModifier, QueueMode, TriggerEvent};
