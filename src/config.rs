//! Client runtime configuration
//!
//! [`HtmxConfig`] mirrors the options the client reads from a
//! `<meta name="htmx-config">` element. It can be embedded in project
//! settings (every field is optional in TOML) and rendered to the meta tag's
//! attributes.
//!
//! ## Example
//!
//! ```
//! use reinhardt_htmx::{HtmxConfig, SwapStrategy};
//!
//! let config = HtmxConfig::from_toml_str(r#"
//! default_swap_style = "outerHTML"
//! timeout = 5000
//! "#).unwrap();
//!
//! assert_eq!(config.default_swap_style, SwapStrategy::OuterHtml);
//! assert!(config.history_enabled);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::error::{HtmxError, Result};
use crate::swap::SwapStrategy;

/// Value of the `name` attribute on the configuration meta element.
pub const META_NAME: &str = "htmx-config";

/// Scroll behavior used when the client scrolls after a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
	/// Jump immediately
	#[default]
	Instant,
	/// Animate the scroll
	Smooth,
	/// Defer to the CSS `scroll-behavior` property
	Auto,
}

impl ScrollBehavior {
	/// Convert scroll behavior to its configuration token
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Instant => "instant",
			Self::Smooth => "smooth",
			Self::Auto => "auto",
		}
	}
}

impl fmt::Display for ScrollBehavior {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ScrollBehavior {
	type Err = HtmxError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"instant" => Ok(Self::Instant),
			"smooth" => Ok(Self::Smooth),
			"auto" => Ok(Self::Auto),
			other => Err(HtmxError::UnknownScrollBehavior(other.to_string())),
		}
	}
}

/// Global client configuration.
///
/// Settings files use snake_case keys; the rendered JSON uses the camelCase
/// keys the client expects. Delays and timeouts are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct HtmxConfig {
	/// Snapshot pages into the history cache
	pub history_enabled: bool,
	/// Number of pages kept in the history cache
	pub history_cache_size: u32,
	/// Reload the page when a history entry is missing from the cache
	pub refresh_on_history_miss: bool,
	/// Swap strategy used when `hx-swap` is absent
	pub default_swap_style: SwapStrategy,
	/// Delay before swapping, in milliseconds
	pub default_swap_delay: u64,
	/// Delay before settling, in milliseconds
	pub default_settle_delay: u64,
	/// Inject the default indicator stylesheet
	pub include_indicator_styles: bool,
	/// Class that marks indicator elements
	pub indicator_class: String,
	/// Class applied while a request is in flight
	pub request_class: String,
	/// Class applied to newly added content
	pub added_class: String,
	/// Class applied while settling
	pub settling_class: String,
	/// Class applied while swapping
	pub swapping_class: String,
	/// Allow features that rely on `eval`
	pub allow_eval: bool,
	/// Process `<script>` tags found in new content
	pub allow_script_tags: bool,
	/// Only issue requests to the same origin
	pub self_requests_only: bool,
	/// Request timeout in milliseconds (0 disables it)
	pub timeout: u64,
	/// Scroll behavior after swaps
	pub scroll_behavior: ScrollBehavior,
	/// Wrap every swap in a view transition
	pub global_view_transitions: bool,
}

impl Default for HtmxConfig {
	fn default() -> Self {
		Self {
			history_enabled: true,
			history_cache_size: 10,
			refresh_on_history_miss: false,
			default_swap_style: SwapStrategy::InnerHtml,
			default_swap_delay: 0,
			default_settle_delay: 20,
			include_indicator_styles: true,
			indicator_class: "htmx-indicator".into(),
			request_class: "htmx-request".into(),
			added_class: "htmx-added".into(),
			settling_class: "htmx-settling".into(),
			swapping_class: "htmx-swapping".into(),
			allow_eval: true,
			allow_script_tags: true,
			self_requests_only: true,
			timeout: 0,
			scroll_behavior: ScrollBehavior::Instant,
			global_view_transitions: false,
		}
	}
}

impl HtmxConfig {
	/// Load configuration from a TOML settings fragment.
	///
	/// Missing keys fall back to the client defaults.
	///
	/// # Errors
	///
	/// Returns `HtmxError::Config` if the fragment is not valid TOML or a
	/// value has the wrong type.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let config: Self = toml::from_str(source)?;
		tracing::debug!(?config, "loaded htmx configuration");
		Ok(config)
	}

	/// Serialize to the JSON object the client reads.
	///
	/// # Errors
	///
	/// Returns `HtmxError::Serialization` if serialization fails.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Attributes for the configuration `<meta>` element: `name` and `content`.
	///
	/// # Errors
	///
	/// Returns `HtmxError::Serialization` if serialization fails.
	pub fn meta_attributes(&self) -> Result<[Attribute; 2]> {
		Ok([
			Attribute::new("name", META_NAME),
			Attribute::new("content", self.to_json()?),
		])
	}
}
