//! Time intervals in the client runtime's duration grammar.

use std::fmt;
use std::str::FromStr;

use crate::error::HtmxError;

const NANOS_PER_MILLI: u128 = 1_000_000;

/// A time interval, rendered as `<n>s` or `<n>ms`.
///
/// ## Example
///
/// ```
/// use reinhardt_htmx::Duration;
///
/// assert_eq!(Duration::Seconds(2).to_string(), "2s");
/// assert_eq!(Duration::Milliseconds(250).to_string(), "250ms");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Duration {
	/// Whole seconds
	Seconds(u64),
	/// Whole milliseconds
	Milliseconds(u64),
}

impl Duration {
	/// Total length in milliseconds, saturating at `u64::MAX`.
	pub fn as_millis(&self) -> u64 {
		match self {
			Self::Seconds(n) => n.saturating_mul(1000),
			Self::Milliseconds(n) => *n,
		}
	}
}

impl fmt::Display for Duration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Seconds(n) => write!(f, "{}s", n),
			Self::Milliseconds(n) => write!(f, "{}ms", n),
		}
	}
}

impl From<std::time::Duration> for Duration {
	/// Whole-second durations stay in seconds; anything else is expressed
	/// in milliseconds, rounded up so a non-zero interval never renders as
	/// `0ms`.
	fn from(value: std::time::Duration) -> Self {
		if value.subsec_nanos() == 0 {
			Self::Seconds(value.as_secs())
		} else {
			let millis = value.as_nanos().div_ceil(NANOS_PER_MILLI);
			Self::Milliseconds(u64::try_from(millis).unwrap_or(u64::MAX))
		}
	}
}

impl FromStr for Duration {
	type Err = HtmxError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || HtmxError::InvalidDuration(s.to_string());

		// "ms" must be checked before "s"
		let (digits, seconds) = if let Some(rest) = s.strip_suffix("ms") {
			(rest, false)
		} else if let Some(rest) = s.strip_suffix('s') {
			(rest, true)
		} else {
			(s, false)
		};

		if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
			return Err(invalid());
		}
		let n: u64 = digits.parse().map_err(|_| invalid())?;

		Ok(if seconds {
			Self::Seconds(n)
		} else {
			Self::Milliseconds(n)
		})
	}
}
