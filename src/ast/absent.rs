//! Oniguruma absent functions.

use crate::span::Span;
use serde::{Deserialize, Serialize};

use super::Ast;

/// An Oniguruma absent function, `(?~…)` or `(?~|…)`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AbsentFunction {
	pub span: Span,
	/// The span of the opening `(?~` or `(?~|`.
	pub start: Span,
	pub kind: AbsentKind,
}

/// Which absent function was written.
///
/// Nesting absent functions is declared undefined by Oniguruma but is parsed
/// structurally rather than rejected.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AbsentKind {
	/// `(?~absent)`
	Repeater(Box<Ast>),
	/// `(?~|absent|expr)`
	Expression {
		absentee: Box<Ast>,
		/// The location of the `|` between absentee and expression.
		pipe: Span,
		expr: Box<Ast>,
	},
	/// `(?~|absent)`
	Stopper(Box<Ast>),
	/// `(?~|)`
	Clearer,
}
