//! Swap strategies and modifiers for `hx-swap`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::duration::Duration;
use crate::error::HtmxError;
use crate::selector::Position;

/// Where and how response content is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SwapStrategy {
	/// Replace the inner HTML of the target (client default)
	#[default]
	#[serde(rename = "innerHTML")]
	InnerHtml,
	/// Replace the entire target element
	#[serde(rename = "outerHTML")]
	OuterHtml,
	/// `after` insertion
	#[serde(rename = "after")]
	After,
	/// Insert before the first child of the target
	#[serde(rename = "afterBegin")]
	AfterBegin,
	/// Insert before the target
	#[serde(rename = "beforeBegin")]
	BeforeBegin,
	/// Insert after the last child of the target
	#[serde(rename = "beforeEnd")]
	BeforeEnd,
	/// Insert after the target
	#[serde(rename = "afterEnd")]
	AfterEnd,
	/// Delete the target regardless of the response
	#[serde(rename = "delete")]
	Delete,
	/// Do not swap content
	#[serde(rename = "none")]
	None,
}

impl SwapStrategy {
	/// Convert strategy to its attribute token
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::InnerHtml => "innerHTML",
			Self::OuterHtml => "outerHTML",
			Self::After => "after",
			Self::AfterBegin => "afterBegin",
			Self::BeforeBegin => "beforeBegin",
			Self::BeforeEnd => "beforeEnd",
			Self::AfterEnd => "afterEnd",
			Self::Delete => "delete",
			Self::None => "none",
		}
	}
}

impl fmt::Display for SwapStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SwapStrategy {
	type Err = HtmxError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"innerHTML" => Ok(Self::InnerHtml),
			"outerHTML" => Ok(Self::OuterHtml),
			"after" => Ok(Self::After),
			"afterBegin" => Ok(Self::AfterBegin),
			"beforeBegin" => Ok(Self::BeforeBegin),
			"beforeEnd" => Ok(Self::BeforeEnd),
			"afterEnd" => Ok(Self::AfterEnd),
			"delete" => Ok(Self::Delete),
			"none" => Ok(Self::None),
			other => Err(HtmxError::UnknownSwapStrategy(other.to_string())),
		}
	}
}

/// Auxiliary swap behavior appended after the strategy name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapModifier {
	/// Use the View Transitions API
	Transition(bool),
	/// Delay between receiving the response and swapping
	SwapDelay(Duration),
	/// Delay between swapping and settling
	SettleDelay(Duration),
	/// Keep the page title even if the response carries a `<title>`
	IgnoreTitle(bool),
	/// Scroll the target to the given edge after swapping
	Scroll(Position),
	/// Scroll the target into view at the given edge after swapping
	Show(Position),
	/// Scroll focused elements into view
	FocusScroll(bool),
}

impl fmt::Display for SwapModifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Transition(enabled) => write!(f, "transition:{}", bool_token(*enabled)),
			Self::SwapDelay(duration) => write!(f, "swap:{}", duration),
			Self::SettleDelay(duration) => write!(f, "settle:{}", duration),
			Self::IgnoreTitle(enabled) => write!(f, "ignoreTitle:{}", bool_token(*enabled)),
			Self::Scroll(position) => write!(f, "scroll:{}", position),
			Self::Show(position) => write!(f, "show:{}", position),
			Self::FocusScroll(enabled) => write!(f, "focus-scroll:{}", bool_token(*enabled)),
		}
	}
}

/// The two boolean literals the client runtime understands.
pub(crate) fn bool_token(value: bool) -> &'static str {
	if value { "true" } else { "false" }
}

/// Renders a strategy followed by its modifiers, each preceded by one space.
pub(crate) fn format_swap(strategy: SwapStrategy, modifiers: &[SwapModifier]) -> String {
	let mut out = String::from(strategy.as_str());
	for modifier in modifiers {
		out.push(' ');
		out.push_str(&modifier.to_string());
	}
	out
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(SwapStrategy::InnerHtml, "innerHTML")]
	#[case(SwapStrategy::OuterHtml, "outerHTML")]
	#[case(SwapStrategy::After, "after")]
	#[case(SwapStrategy::AfterBegin, "afterBegin")]
	#[case(SwapStrategy::BeforeBegin, "beforeBegin")]
	#[case(SwapStrategy::BeforeEnd, "beforeEnd")]
	#[case(SwapStrategy::AfterEnd, "afterEnd")]
	#[case(SwapStrategy::Delete, "delete")]
	#[case(SwapStrategy::None, "none")]
	fn test_strategy_tokens(#[case] strategy: SwapStrategy, #[case] token: &str) {
		assert_eq!(strategy.as_str(), token);
		assert_eq!(token.parse::<SwapStrategy>().unwrap(), strategy);
		assert_eq!(
			serde_json::to_string(&strategy).unwrap(),
			format!("\"{}\"", token)
		);
	}

	#[rstest]
	#[case("innerhtml")]
	#[case("OuterHTML")]
	#[case("")]
	fn test_strategy_from_str_is_case_sensitive(#[case] input: &str) {
		assert!(matches!(
			input.parse::<SwapStrategy>(),
			Err(HtmxError::UnknownSwapStrategy(_))
		));
	}

	#[rstest]
	#[case(SwapModifier::Transition(true), "transition:true")]
	#[case(SwapModifier::Transition(false), "transition:false")]
	#[case(SwapModifier::SwapDelay(Duration::Seconds(1)), "swap:1s")]
	#[case(SwapModifier::SettleDelay(Duration::Milliseconds(20)), "settle:20ms")]
	#[case(SwapModifier::IgnoreTitle(true), "ignoreTitle:true")]
	#[case(SwapModifier::Scroll(Position::Top), "scroll:top")]
	#[case(SwapModifier::Show(Position::Bottom), "show:bottom")]
	#[case(SwapModifier::FocusScroll(false), "focus-scroll:false")]
	fn test_modifier_display(#[case] modifier: SwapModifier, #[case] expected: &str) {
		assert_eq!(modifier.to_string(), expected);
	}

	#[rstest]
	fn test_format_swap_inserts_single_space() {
		assert_eq!(format_swap(SwapStrategy::OuterHtml, &[]), "outerHTML");
		assert_eq!(
			format_swap(
				SwapStrategy::OuterHtml,
				&[
					SwapModifier::Transition(true),
					SwapModifier::Show(Position::Top)
				]
			),
			"outerHTML transition:true show:top"
		);
	}

	#[rstest]
	fn test_default_strategy() {
		assert_eq!(SwapStrategy::default(), SwapStrategy::InnerHtml);
	}
}
