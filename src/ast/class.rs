//! Custom character classes.

use crate::span::{Located, Span};
use serde::{Deserialize, Serialize};

use super::{Atom, Quote, Trivia};

/// A `[…]` construct with members, ranges, nested classes and set operators.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct CustomCharacterClass {
	pub span: Span,
	/// Whether the class started with `[` or `[^`.
	pub start: Located<ClassStart>,
	pub members: Vec<ClassMember>,
}

impl CustomCharacterClass {
	pub fn is_inverted(&self) -> bool {
		matches!(self.start.value, ClassStart::Inverted)
	}

	/// Returns a copy of this class with trivia members removed.
	pub fn strip_trivia(&self) -> CustomCharacterClass {
		fn strip(members: &[ClassMember]) -> Vec<ClassMember> {
			members
				.iter()
				.filter(|x| !matches!(x, ClassMember::Trivia(_)))
				.map(|x| match x {
					ClassMember::Class(c) => ClassMember::Class(c.strip_trivia()),
					ClassMember::SetOperation(op) => ClassMember::SetOperation(SetOperation {
						lhs: strip(&op.lhs),
						op: op.op.clone(),
						rhs: strip(&op.rhs),
					}),
					x => x.clone(),
				})
				.collect()
		}
		CustomCharacterClass {
			span: self.span,
			start: self.start.clone(),
			members: strip(&self.members),
		}
	}
}

/// How a custom character class opens.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ClassStart {
	/// `[`
	Normal,
	/// `[^`
	Inverted,
}

/// A member of a custom character class.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ClassMember {
	Atom(Atom),
	Range(ClassRange),
	Quote(Quote),
	Trivia(Trivia),
	Class(CustomCharacterClass),
	SetOperation(SetOperation),
}

/// A character range `a-z`. Both endpoints carry a literal character value.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ClassRange {
	pub lhs: Atom,
	/// The location of the `-`.
	pub dash: Span,
	pub rhs: Atom,
}

/// A left-associative set operation between member runs, e.g.
/// `a-z&&[^aeiou]`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SetOperation {
	pub lhs: Vec<ClassMember>,
	pub op: Located<SetOp>,
	pub rhs: Vec<ClassMember>,
}

/// A set operator valid inside a custom character class.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SetOp {
	/// `&&`
	Intersection,
	/// `--`
	Subtraction,
	/// `~~`
	SymmetricDifference,
}

impl SetOp {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Intersection => "intersection",
			Self::Subtraction => "subtraction",
			Self::SymmetricDifference => "symmetricDifference",
		}
	}

	/// The operator as written in the pattern.
	pub fn token(&self) -> &'static str {
		match self {
			Self::Intersection => "&&",
			Self::Subtraction => "--",
			Self::SymmetricDifference => "~~",
		}
	}
}
