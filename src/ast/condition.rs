//! Conditional pattern conditions.

use serde::{Deserialize, Serialize};

use super::{Group, Reference};

/// The condition of a `(?(cond)…)` conditional.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ConditionKind {
	/// `(?(VERSION=10.4)…)` / `(?(VERSION>=10.4)…)`
	PcreVersionCheck {
		kind: VersionCheckKind,
		major: u32,
		minor: u32,
	},
	/// A group used as the condition, e.g. the lookahead of `(?(?=a)b|c)`.
	Group(Box<Group>),
	/// Whether a group has matched: `(?(1)…)`, `(?(+1)…)`, `(?(<name>)…)`,
	/// `(?('name')…)`.
	GroupMatched(Reference),
	/// Whether the pattern is recursing through a group: `(?(R1)…)`,
	/// `(?(R&name)…)`.
	GroupRecursionCheck(Reference),
	/// `(?(R)…)`
	RecursionCheck,
	/// `(?(DEFINE)…)`
	DefineGroup,
}

/// The comparison of a PCRE version check.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum VersionCheckKind {
	/// `=`
	Equal,
	/// `>=`
	GreaterOrEqual,
}
