//! Quantifier amounts and kinds.

use serde::{Deserialize, Serialize};

/// How many repetitions a quantifier asks for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Amount {
	/// `*`
	ZeroOrMore,
	/// `+`
	OneOrMore,
	/// `?`
	ZeroOrOne,
	/// `{n}`
	Exactly(u32),
	/// `{n,}`
	NOrMore(u32),
	/// `{,n}`
	UpToN(u32),
	/// `{lo,hi}` with `lo <= hi`
	Range(u32, u32),
}

/// How eagerly a quantifier matches.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum QuantKind {
	/// The default greedy behaviour.
	#[default]
	Eager,
	/// Suffixed with `?`.
	Reluctant,
	/// Suffixed with `+`.
	Possessive,
}

impl QuantKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Eager => "eager",
			Self::Reluctant => "reluctant",
			Self::Possessive => "possessive",
		}
	}
}
