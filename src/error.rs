//! Error types for htmx attribute configuration.
//!
//! Attribute constructors never fail. Errors only arise when tokens are parsed
//! back from settings or when [`HtmxConfig`](crate::config::HtmxConfig) is
//! loaded or serialized.

use thiserror::Error;

/// Errors that can occur while parsing htmx tokens or handling configuration.
#[derive(Debug, Error)]
pub enum HtmxError {
	/// Token is not one of the nine swap strategy names.
	#[error("unknown swap strategy: {0}")]
	UnknownSwapStrategy(String),

	/// Token is neither `top` nor `bottom`.
	#[error("unknown scroll position: {0}. Expected `top` or `bottom`")]
	UnknownPosition(String),

	/// Token is not one of `first`, `last`, `all`, `none`.
	#[error("unknown queue mode: {0}")]
	UnknownQueueMode(String),

	/// Token is not one of `instant`, `smooth`, `auto`.
	#[error("unknown scroll behavior: {0}")]
	UnknownScrollBehavior(String),

	/// Duration is not of the form `<n>s`, `<n>ms` or `<n>`.
	#[error("invalid duration: {0}. Expected `<n>s`, `<n>ms` or a bare millisecond count")]
	InvalidDuration(String),

	/// JSON serialization failed.
	#[error("serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),

	/// TOML settings could not be deserialized.
	#[error("invalid htmx settings: {0}")]
	Config(#[from] toml::de::Error),
}

/// Result type for htmx operations.
pub type Result<T> = std::result::Result<T, HtmxError>;
