//! Parameter filtering for `hx-params`.

use std::fmt;

/// Which request parameters are submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Params {
	/// All parameters (`*`)
	All,
	/// No parameters (`none`)
	None,
	/// Everything except the listed names (`not a,b`)
	Exclude(Vec<String>),
	/// Only the listed names (`a,b`)
	Only(Vec<String>),
}

impl Params {
	/// Only the listed parameter names.
	pub fn only<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Only(names.into_iter().map(Into::into).collect())
	}

	/// Every parameter except the listed names.
	pub fn exclude<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Exclude(names.into_iter().map(Into::into).collect())
	}
}

impl fmt::Display for Params {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::All => f.write_str("*"),
			Self::None => f.write_str("none"),
			Self::Exclude(names) => write!(f, "not {}", names.join(",")),
			Self::Only(names) => f.write_str(&names.join(",")),
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(Params::All, "*")]
	#[case(Params::None, "none")]
	#[case(Params::exclude(["csrf", "page"]), "not csrf,page")]
	#[case(Params::only(["q"]), "q")]
	#[case(Params::only(["q", "sort"]), "q,sort")]
	fn test_params_display(#[case] params: Params, #[case] expected: &str) {
		assert_eq!(params.to_string(), expected);
	}
}
