//! Groups and matching option sequences.

use crate::span::{Located, Span};
use serde::{Deserialize, Serialize};

use super::Ast;

/// A grouped subpattern, `(…)` and its many `(?…)` variants.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Group {
	pub span: Span,
	/// The kind of the group, located at its opening delimiter.
	pub kind: Located<GroupKind>,
	pub child: Box<Ast>,
}

/// The kind of a group.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GroupKind {
	/// `(…)`
	Capture,
	/// `(?<name>…)`, `(?'name'…)` or `(?P<name>…)`
	NamedCapture(String),
	/// `(?<name-prior>…)`, a .NET balancing group which also pops the prior
	/// capture.
	BalancedCapture {
		name: Option<String>,
		prior: String,
	},
	/// `(?:…)`
	NonCapture,
	/// `(?|…)`.
	///
	/// The branch-local renumbering this construct implies is not applied by
	/// the parser; groups keep their textual numbering.
	NonCaptureReset,
	/// `(?>…)` / `(*atomic:…)`
	AtomicNonCapturing,
	/// `(?=…)`
	Lookahead,
	/// `(?!…)`
	NegativeLookahead,
	/// `(?*…)` / `(*napla:…)`
	NonAtomicLookahead,
	/// `(?<=…)`
	Lookbehind,
	/// `(?<!…)`
	NegativeLookbehind,
	/// `(?<*…)` / `(*naplb:…)`
	NonAtomicLookbehind,
	/// `(*sr:…)`
	ScriptRun,
	/// `(*asr:…)`
	AtomicScriptRun,
	/// `(?imsx-x:…)`, or the isolated form `(?imsx-x)` whose scope implicitly
	/// runs to the end of the enclosing group.
	ChangeMatchingOptions {
		sequence: MatchingOptionSequence,
		isolated: bool,
	},
}

impl GroupKind {
	/// Returns whether this group creates a capture.
	pub fn is_capturing(&self) -> bool {
		matches!(
			self,
			GroupKind::Capture
				| GroupKind::NamedCapture(_)
				| GroupKind::BalancedCapture {
					..
				}
		)
	}

	/// The name of the capture, if this group is a named capture.
	pub fn name(&self) -> Option<&str> {
		match self {
			GroupKind::NamedCapture(name) => Some(name),
			GroupKind::BalancedCapture {
				name,
				..
			} => name.as_deref(),
			_ => None,
		}
	}

	/// Returns whether the group's scope is implicit, covering the remainder
	/// of the enclosing group rather than a parenthesized body.
	///
	/// This is true only for the isolated option-change form `(?imsx)`.
	pub fn has_implicit_scope(&self) -> bool {
		matches!(
			self,
			GroupKind::ChangeMatchingOptions {
				isolated: true,
				..
			}
		)
	}
}

/// A sequence of matching options, `imsx-x` with an optional leading `^`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub struct MatchingOptionSequence {
	/// The location of a leading `^`, which resets options to their defaults
	/// before applying the additions.
	pub caret: Option<Span>,
	pub adding: Vec<Located<MatchingOption>>,
	/// The location of the `-` before the removals, if present.
	pub minus: Option<Span>,
	pub removing: Vec<Located<MatchingOption>>,
}

/// A single matching option.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MatchingOption {
	/// `i`
	CaseInsensitive,
	/// `J`
	AllowDuplicateGroupNames,
	/// `m`
	Multiline,
	/// `n`
	NamedCapturesOnly,
	/// `s`
	SingleLine,
	/// `U`
	ReluctantByDefault,
	/// `x`
	Extended,
	/// `xx`
	ExtraExtended,
	/// `w` (ICU)
	UnicodeWordBoundaries,
	/// `D` (Oniguruma)
	AsciiOnlyDigit,
	/// `P` (Oniguruma)
	AsciiOnlyPosixProps,
	/// `S` (Oniguruma)
	AsciiOnlySpace,
	/// `W` (Oniguruma)
	AsciiOnlyWord,
	/// `y{g}` (Oniguruma)
	TextSegmentGraphemeMode,
	/// `y{w}` (Oniguruma)
	TextSegmentWordMode,
}

impl MatchingOption {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::CaseInsensitive => "i",
			Self::AllowDuplicateGroupNames => "J",
			Self::Multiline => "m",
			Self::NamedCapturesOnly => "n",
			Self::SingleLine => "s",
			Self::ReluctantByDefault => "U",
			Self::Extended => "x",
			Self::ExtraExtended => "xx",
			Self::UnicodeWordBoundaries => "w",
			Self::AsciiOnlyDigit => "D",
			Self::AsciiOnlyPosixProps => "P",
			Self::AsciiOnlySpace => "S",
			Self::AsciiOnlyWord => "W",
			Self::TextSegmentGraphemeMode => "y{g}",
			Self::TextSegmentWordMode => "y{w}",
		}
	}
}
