//! Attribute constructors
//!
//! One function per attribute family. Every function is total: inputs are
//! forwarded verbatim and no selector, URL or script is validated.
//!
//! ## Example
//!
//! ```
//! use reinhardt_htmx::{hx, Duration, SwapModifier, SwapStrategy, TriggerEvent};
//!
//! let attrs = [
//!     hx::post("/todos"),
//!     hx::trigger([TriggerEvent::new("submit").once()]),
//!     hx::swap(SwapStrategy::OuterHtml, Some(SwapModifier::SwapDelay(Duration::Milliseconds(100)))),
//! ];
//!
//! assert_eq!(attrs[1].value(), "submit once");
//! assert_eq!(attrs[2].value(), "outerHTML swap:100ms");
//! ```

use std::borrow::Cow;

use crate::attribute::Attribute;
use crate::duration::Duration;
use crate::params::Params;
use crate::selector::ElementReference;
use crate::swap::{SwapModifier, SwapStrategy, bool_token, format_swap};
use crate::sync::{SyncOption, format_sync};
use crate::trigger::{TriggerEvent, format_events, format_polling};

/// Macro for defining request-method constructors
macro_rules! define_method {
	($(#[$meta:meta])* $name:ident, $attr:literal) => {
		$(#[$meta])*
		pub fn $name(url: impl Into<Cow<'static, str>>) -> Attribute {
			Attribute::new($attr, url)
		}
	};
}

define_method!(
	/// Issue a `GET` to the URL (`hx-get`).
	///
	/// ## Example
	///
	/// ```
	/// let attr = reinhardt_htmx::hx::get("/search");
	/// assert_eq!(attr.name(), "hx-get");
	/// assert_eq!(attr.value(), "/search");
	/// ```
	get, "hx-get"
);

define_method!(
	/// Issue a `POST` to the URL (`hx-post`).
	post, "hx-post"
);

define_method!(
	/// Issue a `PUT` to the URL (`hx-put`).
	put, "hx-put"
);

define_method!(
	/// Issue a `PATCH` to the URL (`hx-patch`).
	patch, "hx-patch"
);

define_method!(
	/// Issue a `DELETE` to the URL (`hx-delete`).
	delete, "hx-delete"
);

/// Events that fire the request (`hx-trigger`).
///
/// Events are joined with `", "`. An empty sequence yields an empty value,
/// which the client treats as "no explicit trigger".
pub fn trigger(events: impl IntoIterator<Item = TriggerEvent>) -> Attribute {
	let events: Vec<TriggerEvent> = events.into_iter().collect();
	Attribute::new("hx-trigger", format_events(&events))
}

/// Poll every `duration`, optionally guarded by a filter expression.
///
/// Renders `every <duration>` or `every <duration> [<filter>]`.
pub fn trigger_polling(duration: Duration, filter: Option<&str>) -> Attribute {
	Attribute::new("hx-trigger", format_polling(duration, filter))
}

/// Poll every `duration` after load, guarded by a filter expression.
///
/// Unlike [`trigger_polling`], the filter is required here:
/// `load every <duration> [<filter>]`.
pub fn trigger_load_polling(duration: Duration, filter: &str) -> Attribute {
	Attribute::new(
		"hx-trigger",
		format!("load {}", format_polling(duration, Some(filter))),
	)
}

/// Element whose class is toggled while a request is in flight (`hx-indicator`).
pub fn indicator(selector: impl Into<Cow<'static, str>>) -> Attribute {
	Attribute::new("hx-indicator", selector)
}

/// Element that receives the response (`hx-target`).
pub fn target(reference: ElementReference) -> Attribute {
	Attribute::new("hx-target", reference.to_string())
}

/// Subset of the response to swap in (`hx-select`).
pub fn select(selector: impl Into<Cow<'static, str>>) -> Attribute {
	Attribute::new("hx-select", selector)
}

/// How the response is swapped in (`hx-swap`).
///
/// A modifier, when present, is separated from the strategy by exactly one
/// space.
pub fn swap(strategy: SwapStrategy, modifier: Option<SwapModifier>) -> Attribute {
	Attribute::new("hx-swap", format_swap(strategy, modifier.as_slice()))
}

/// Like [`swap`], with any number of modifiers in the given order.
pub fn swap_with(strategy: SwapStrategy, modifiers: &[SwapModifier]) -> Attribute {
	Attribute::new("hx-swap", format_swap(strategy, modifiers))
}

/// Synchronize requests across elements (`hx-sync`).
pub fn sync(options: impl IntoIterator<Item = SyncOption>) -> Attribute {
	let options: Vec<SyncOption> = options.into_iter().collect();
	Attribute::new("hx-sync", format_sync(&options))
}

/// Push the request URL into browser history (`hx-push-url`).
pub fn push_url(enabled: bool) -> Attribute {
	Attribute::new("hx-push-url", bool_token(enabled))
}

/// Replace the current history entry with the request URL (`hx-replace-url`).
pub fn replace_url(enabled: bool) -> Attribute {
	Attribute::new("hx-replace-url", bool_token(enabled))
}

/// Ask for confirmation before issuing the request (`hx-confirm`).
pub fn confirm(text: impl Into<Cow<'static, str>>) -> Attribute {
	Attribute::new("hx-confirm", text)
}

/// Progressively enhance links and forms below this element (`hx-boost`).
pub fn boost(enabled: bool) -> Attribute {
	Attribute::new("hx-boost", bool_token(enabled))
}

/// Inline hyperscript (`_`).
pub fn hyper_script(script: impl Into<Cow<'static, str>>) -> Attribute {
	Attribute::new("_", script)
}

/// Additional elements whose values are submitted (`hx-include`).
pub fn include(reference: ElementReference) -> Attribute {
	Attribute::new("hx-include", reference.to_string())
}

/// Elements disabled while a request is in flight (`hx-disabled-elt`).
pub fn disabled_elt(reference: ElementReference) -> Attribute {
	Attribute::new("hx-disabled-elt", reference.to_string())
}

/// Extra values submitted with the request, as JSON (`hx-vals`).
pub fn vals(values: &serde_json::Value) -> Attribute {
	Attribute::new("hx-vals", values.to_string())
}

/// Extra request headers, as JSON (`hx-headers`).
pub fn headers(headers: &serde_json::Value) -> Attribute {
	Attribute::new("hx-headers", headers.to_string())
}

/// Inline handler for an event (`hx-on:<event>`).
///
/// htmx events use a double colon, e.g. `on(":after-request", ...)` renders
/// `hx-on::after-request`.
pub fn on(event: &str, script: impl Into<Cow<'static, str>>) -> Attribute {
	Attribute::new(format!("hx-on:{}", event), script)
}

/// Prompt for a value submitted in the `HX-Prompt` header (`hx-prompt`).
pub fn prompt(text: impl Into<Cow<'static, str>>) -> Attribute {
	Attribute::new("hx-prompt", text)
}

/// Enable client extensions by name (`hx-ext`).
pub fn ext<I, S>(names: I) -> Attribute
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let names: Vec<String> = names
		.into_iter()
		.map(|name| name.as_ref().to_string())
		.collect();
	Attribute::new("hx-ext", names.join(", "))
}

/// Filter the submitted parameters (`hx-params`).
pub fn params(params: Params) -> Attribute {
	Attribute::new("hx-params", params.to_string())
}

/// Mark response content for out-of-band swapping (`hx-swap-oob`).
///
/// Without a strategy the value is `true`, which swaps by id using
/// `outerHTML`.
pub fn swap_oob(strategy: Option<SwapStrategy>) -> Attribute {
	match strategy {
		Some(strategy) => Attribute::new("hx-swap-oob", strategy.as_str()),
		None => Attribute::new("hx-swap-oob", bool_token(true)),
	}
}

/// Keep this element unchanged across swaps (`hx-preserve`).
pub fn preserve() -> Attribute {
	Attribute::new("hx-preserve", bool_token(true))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	use serde_json::json;

	use super::*;
	use crate::selector::Position;
	use crate::trigger::{EventModifier, QueueMode};

	#[rstest]
	#[case(get("/a"), "hx-get")]
	#[case(post("/a"), "hx-post")]
	#[case(put("/a"), "hx-put")]
	#[case(patch("/a"), "hx-patch")]
	#[case(delete("/a"), "hx-delete")]
	fn test_method_constructors(#[case] attr: Attribute, #[case] name: &str) {
		assert_eq!(attr.name(), name);
		assert_eq!(attr.value(), "/a");
	}

	#[rstest]
	fn test_method_url_is_verbatim() {
		assert_eq!(get("not a url ?&#").value(), "not a url ?&#");
		assert_eq!(post(String::from("")).value(), "");
	}

	#[rstest]
	fn test_trigger_empty() {
		let attr = trigger([]);
		assert_eq!(attr.name(), "hx-trigger");
		assert_eq!(attr.value(), "");
	}

	#[rstest]
	fn test_trigger_with_modifiers() {
		let attr = trigger([TriggerEvent::with_modifiers(
			"click",
			[EventModifier::Once, EventModifier::Delay(Duration::Seconds(2))],
		)]);
		assert_eq!(attr.value(), "click once delay:2s");
	}

	#[rstest]
	fn test_trigger_multiple_events() {
		let attr = trigger([
			TriggerEvent::new("click"),
			TriggerEvent::new("keyup").changed(),
		]);
		assert_eq!(attr.value(), "click, keyup changed");
	}

	#[rstest]
	fn test_trigger_polling() {
		assert_eq!(
			trigger_polling(Duration::Seconds(1), None).value(),
			"every 1s"
		);
		assert_eq!(
			trigger_polling(Duration::Milliseconds(500), Some("ready")).value(),
			"every 500ms [ready]"
		);
	}

	#[rstest]
	fn test_trigger_load_polling() {
		let attr = trigger_load_polling(Duration::Seconds(5), "!done");
		assert_eq!(attr.name(), "hx-trigger");
		assert_eq!(attr.value(), "load every 5s [!done]");
	}

	#[rstest]
	fn test_selection_constructors() {
		assert_eq!(indicator("#spinner").name(), "hx-indicator");
		assert_eq!(indicator("#spinner").value(), "#spinner");
		assert_eq!(select("#main").name(), "hx-select");
		assert_eq!(select("#main").value(), "#main");
	}

	#[rstest]
	#[case(ElementReference::closest("#row"), "closest #row")]
	#[case(ElementReference::Next(None), "next ")]
	#[case(ElementReference::This, "this")]
	#[case(ElementReference::standard("#out"), "#out")]
	fn test_target(#[case] reference: ElementReference, #[case] expected: &str) {
		let attr = target(reference);
		assert_eq!(attr.name(), "hx-target");
		assert_eq!(attr.value(), expected);
	}

	#[rstest]
	#[case(None, "outerHTML")]
	#[case(Some(SwapModifier::Transition(true)), "outerHTML transition:true")]
	#[case(Some(SwapModifier::SettleDelay(Duration::Seconds(1))), "outerHTML settle:1s")]
	#[case(Some(SwapModifier::Scroll(Position::Bottom)), "outerHTML scroll:bottom")]
	fn test_swap(#[case] modifier: Option<SwapModifier>, #[case] expected: &str) {
		let attr = swap(SwapStrategy::OuterHtml, modifier);
		assert_eq!(attr.name(), "hx-swap");
		assert_eq!(attr.value(), expected);
	}

	#[rstest]
	fn test_swap_with_many_modifiers() {
		let attr = swap_with(
			SwapStrategy::BeforeEnd,
			&[
				SwapModifier::SwapDelay(Duration::Milliseconds(100)),
				SwapModifier::Show(Position::Bottom),
			],
		);
		assert_eq!(attr.value(), "beforeEnd swap:100ms show:bottom");
	}

	#[rstest]
	fn test_sync() {
		let attr = sync([
			SyncOption::default_for("#a"),
			SyncOption::queue("#b", QueueMode::All),
		]);
		assert_eq!(attr.name(), "hx-sync");
		assert_eq!(attr.value(), "#a #b:queue all");
	}

	#[rstest]
	#[case(true, "true")]
	#[case(false, "false")]
	fn test_boolean_flags(#[case] flag: bool, #[case] expected: &str) {
		assert_eq!(push_url(flag).name(), "hx-push-url");
		assert_eq!(push_url(flag).value(), expected);
		assert_eq!(boost(flag).name(), "hx-boost");
		assert_eq!(boost(flag).value(), expected);
		assert_eq!(replace_url(flag).name(), "hx-replace-url");
		assert_eq!(replace_url(flag).value(), expected);
	}

	#[rstest]
	fn test_passthrough_constructors() {
		let attr = confirm("Are you sure?");
		assert_eq!(attr.name(), "hx-confirm");
		assert_eq!(attr.value(), "Are you sure?");

		let attr = hyper_script("on click toggle .open on me");
		assert_eq!(attr.name(), "_");
		assert_eq!(attr.value(), "on click toggle .open on me");

		let attr = prompt("Your name");
		assert_eq!(attr.name(), "hx-prompt");
		assert_eq!(attr.value(), "Your name");
	}

	#[rstest]
	fn test_include_and_disabled_elt() {
		assert_eq!(
			include(ElementReference::closest("form")).value(),
			"closest form"
		);
		let attr = disabled_elt(ElementReference::This);
		assert_eq!(attr.name(), "hx-disabled-elt");
		assert_eq!(attr.value(), "this");
	}

	#[rstest]
	fn test_json_constructors() {
		let attr = vals(&json!({ "page": 2 }));
		assert_eq!(attr.name(), "hx-vals");
		assert_eq!(attr.value(), r#"{"page":2}"#);

		let attr = headers(&json!({ "X-Mode": "compact" }));
		assert_eq!(attr.name(), "hx-headers");
		assert_eq!(attr.value(), r#"{"X-Mode":"compact"}"#);
	}

	#[rstest]
	fn test_on() {
		let attr = on("click", "alert('hi')");
		assert_eq!(attr.name(), "hx-on:click");
		assert_eq!(attr.value(), "alert('hi')");

		assert_eq!(on(":after-request", "x()").name(), "hx-on::after-request");
	}

	#[rstest]
	fn test_ext_and_params() {
		assert_eq!(ext(["json-enc", "preload"]).value(), "json-enc, preload");
		assert_eq!(params(Params::exclude(["secret"])).value(), "not secret");
	}

	#[rstest]
	fn test_swap_oob_and_preserve() {
		assert_eq!(swap_oob(None).value(), "true");
		assert_eq!(swap_oob(Some(SwapStrategy::BeforeEnd)).value(), "beforeEnd");
		assert_eq!(preserve().name(), "hx-preserve");
		assert_eq!(preserve().value(), "true");
	}
}
