//! The regex abstract syntax tree.
//!
//! The types in this module form an owned tree built bottom-up by the parser
//! and returned to the caller. Every node carries a [`Span`] into the pattern
//! text, and nodes are immutable once constructed. The tree is a lossless
//! record of the *syntax* of a pattern; no semantic resolution (group
//! numbering across `(?|…)`, property validity, back-reference targets) is
//! performed here.

pub(crate) mod absent;
pub(crate) mod atom;
pub(crate) mod class;
pub(crate) mod condition;
pub(crate) mod dump;
pub(crate) mod group;
pub(crate) mod quantifier;

pub use self::absent::AbsentFunction;
pub use self::absent::AbsentKind;
pub use self::atom::Atom;
pub use self::atom::AtomKind;
pub use self::atom::BacktrackingDirective;
pub use self::atom::BacktrackingDirectiveKind;
pub use self::atom::Callout;
pub use self::atom::EscapedChar;
pub use self::atom::GeneralCategory;
pub use self::atom::PcreCalloutArg;
pub use self::atom::PosixClass;
pub use self::atom::Property;
pub use self::atom::PropertyKind;
pub use self::atom::Reference;
pub use self::atom::ReferenceKind;
pub use self::class::ClassMember;
pub use self::class::ClassRange;
pub use self::class::ClassStart;
pub use self::class::CustomCharacterClass;
pub use self::class::SetOp;
pub use self::class::SetOperation;
pub use self::condition::ConditionKind;
pub use self::condition::VersionCheckKind;
pub use self::group::Group;
pub use self::group::GroupKind;
pub use self::group::MatchingOption;
pub use self::group::MatchingOptionSequence;
pub use self::quantifier::Amount;
pub use self::quantifier::QuantKind;

use crate::span::{Located, Span};
use serde::{Deserialize, Serialize};

/// A single node of the regex syntax tree.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Ast {
	Alternation(Alternation),
	Concatenation(Concatenation),
	Group(Group),
	Conditional(Conditional),
	Quantification(Quantification),
	Quote(Quote),
	Trivia(Trivia),
	Atom(Atom),
	CustomCharacterClass(CustomCharacterClass),
	GlobalMatchingOptions(GlobalMatchingOptions),
	AbsentFunction(AbsentFunction),
	/// A zero-width node, produced for empty patterns and empty alternation
	/// branches like the second branch of `a|`.
	Empty(Span),
}

/// Two or more alternatives separated by `|`.
///
/// The number of pipe spans is always one less than the number of children;
/// empty branches are represented by [`Ast::Empty`] children.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Alternation {
	pub span: Span,
	pub children: Vec<Ast>,
	pub pipes: Vec<Span>,
}

/// A sequence of components matched one after the other.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Concatenation {
	pub span: Span,
	pub children: Vec<Ast>,
}

/// A conditional pattern `(?(cond)then|else)`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Conditional {
	pub span: Span,
	pub condition: Located<ConditionKind>,
	pub true_branch: Box<Ast>,
	/// The location of the `|` between the branches, if both were written.
	pub pipe: Option<Span>,
	pub false_branch: Box<Ast>,
}

/// A quantified operand, e.g. `a{2,4}?`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Quantification {
	pub span: Span,
	pub amount: Located<Amount>,
	pub kind: Located<QuantKind>,
	pub operand: Box<Ast>,
}

/// A quoted run of literal characters, `\Q…\E` or `\q{…}`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Quote {
	pub span: Span,
	pub literal: String,
}

/// Syntactically present but semantically irrelevant text: `(?#…)` comments,
/// and whitespace / `#…` line comments in the extended syntaxes.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Trivia {
	pub span: Span,
	pub contents: String,
}

/// Global matching options, e.g. `(*UTF)(*LIMIT_MATCH=3)`, wrapping the
/// pattern they precede.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct GlobalMatchingOptions {
	pub span: Span,
	pub options: Vec<Located<GlobalOption>>,
	pub ast: Box<Ast>,
}

/// A single global matching option.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GlobalOption {
	LimitDepth(u32),
	LimitHeap(u32),
	LimitMatch(u32),
	NotEmpty,
	NotEmptyAtStart,
	NoAutoPossess,
	NoDotStarAnchor,
	NoJit,
	NoStartOpt,
	UtfMode,
	UnicodeProperties,
	NewlineMatching(NewlineMatching),
	NewlineSequenceMatching(NewlineSequenceMatching),
}

/// What `(*CR)`-style options consider a newline.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NewlineMatching {
	CarriageReturnOnly,
	LinefeedOnly,
	CarriageAndLinefeed,
	AnyCarriageReturnOrLinefeed,
	AnyUnicode,
	NulCharacter,
}

/// What `\R` matches under `(*BSR_…)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NewlineSequenceMatching {
	AnyCarriageReturnOrLinefeed,
	AnyUnicode,
}

impl Ast {
	/// The span of the pattern text this node was parsed from.
	pub fn span(&self) -> Span {
		match self {
			Ast::Alternation(v) => v.span,
			Ast::Concatenation(v) => v.span,
			Ast::Group(v) => v.span,
			Ast::Conditional(v) => v.span,
			Ast::Quantification(v) => v.span,
			Ast::Quote(v) => v.span,
			Ast::Trivia(v) => v.span,
			Ast::Atom(v) => v.span,
			Ast::CustomCharacterClass(v) => v.span,
			Ast::GlobalMatchingOptions(v) => v.span,
			Ast::AbsentFunction(v) => v.span,
			Ast::Empty(span) => *span,
		}
	}

	/// The child nodes of this node, if the variant has any.
	///
	/// Custom character classes return `None` as their members are not
	/// themselves syntax-tree nodes.
	pub fn children(&self) -> Option<Vec<&Ast>> {
		match self {
			Ast::Alternation(v) => Some(v.children.iter().collect()),
			Ast::Concatenation(v) => Some(v.children.iter().collect()),
			Ast::Group(v) => Some(vec![&*v.child]),
			Ast::Conditional(v) => Some(vec![&*v.true_branch, &*v.false_branch]),
			Ast::Quantification(v) => Some(vec![&*v.operand]),
			Ast::GlobalMatchingOptions(v) => Some(vec![&*v.ast]),
			Ast::AbsentFunction(v) => match &v.kind {
				AbsentKind::Repeater(x) | AbsentKind::Stopper(x) => Some(vec![&**x]),
				AbsentKind::Expression {
					absentee,
					expr,
					..
				} => Some(vec![&**absentee, &**expr]),
				AbsentKind::Clearer => Some(Vec::new()),
			},
			Ast::Quote(_)
			| Ast::Trivia(_)
			| Ast::Atom(_)
			| Ast::CustomCharacterClass(_)
			| Ast::Empty(_) => None,
		}
	}

	/// Returns whether this node is a trivia node.
	pub fn is_trivia(&self) -> bool {
		matches!(self, Ast::Trivia(_))
	}

	/// Returns whether a quantifier may be applied to this node.
	///
	/// Atoms are quantifiable except anchors and backtracking directives.
	/// Groups, conditionals, custom classes and absent functions are
	/// quantifiable; everything else is not.
	pub fn is_quantifiable(&self) -> bool {
		match self {
			Ast::Atom(atom) => atom.is_quantifiable(),
			Ast::Group(_)
			| Ast::Conditional(_)
			| Ast::CustomCharacterClass(_)
			| Ast::AbsentFunction(_) => true,
			Ast::Alternation(_)
			| Ast::Concatenation(_)
			| Ast::Quantification(_)
			| Ast::Quote(_)
			| Ast::Trivia(_)
			| Ast::GlobalMatchingOptions(_)
			| Ast::Empty(_) => false,
		}
	}

	/// Returns a copy of this tree with all trivia nodes removed.
	///
	/// A concatenation reduced to a single child collapses to that child, and
	/// one reduced to nothing becomes [`Ast::Empty`].
	pub fn strip_trivia(&self) -> Ast {
		match self {
			Ast::Alternation(v) => Ast::Alternation(Alternation {
				span: v.span,
				children: v.children.iter().map(Ast::strip_trivia).collect(),
				pipes: v.pipes.clone(),
			}),
			Ast::Concatenation(v) => {
				let children: Vec<Ast> = v
					.children
					.iter()
					.filter(|x| !x.is_trivia())
					.map(Ast::strip_trivia)
					.collect();
				match children.len() {
					0 => Ast::Empty(v.span),
					1 => children.into_iter().next().unwrap(),
					_ => Ast::Concatenation(Concatenation {
						span: v.span,
						children,
					}),
				}
			}
			Ast::Group(v) => Ast::Group(Group {
				span: v.span,
				kind: v.kind.clone(),
				child: Box::new(v.child.strip_trivia()),
			}),
			Ast::Conditional(v) => Ast::Conditional(Conditional {
				span: v.span,
				condition: v.condition.clone(),
				true_branch: Box::new(v.true_branch.strip_trivia()),
				pipe: v.pipe,
				false_branch: Box::new(v.false_branch.strip_trivia()),
			}),
			Ast::Quantification(v) => Ast::Quantification(Quantification {
				span: v.span,
				amount: v.amount.clone(),
				kind: v.kind.clone(),
				operand: Box::new(v.operand.strip_trivia()),
			}),
			Ast::GlobalMatchingOptions(v) => Ast::GlobalMatchingOptions(GlobalMatchingOptions {
				span: v.span,
				options: v.options.clone(),
				ast: Box::new(v.ast.strip_trivia()),
			}),
			Ast::AbsentFunction(v) => Ast::AbsentFunction(AbsentFunction {
				span: v.span,
				start: v.start,
				kind: match &v.kind {
					AbsentKind::Repeater(x) => AbsentKind::Repeater(Box::new(x.strip_trivia())),
					AbsentKind::Stopper(x) => AbsentKind::Stopper(Box::new(x.strip_trivia())),
					AbsentKind::Expression {
						absentee,
						pipe,
						expr,
					} => AbsentKind::Expression {
						absentee: Box::new(absentee.strip_trivia()),
						pipe: *pipe,
						expr: Box::new(expr.strip_trivia()),
					},
					AbsentKind::Clearer => AbsentKind::Clearer,
				},
			}),
			Ast::CustomCharacterClass(v) => Ast::CustomCharacterClass(v.strip_trivia()),
			Ast::Quote(_) | Ast::Trivia(_) | Ast::Atom(_) | Ast::Empty(_) => self.clone(),
		}
	}

	/// Count the capturing groups in this tree.
	pub fn capture_count(&self) -> u32 {
		let mut count = 0;
		if let Ast::Group(group) = self {
			if group.kind.value.is_capturing() {
				count += 1;
			}
		}
		if let Some(children) = self.children() {
			for child in children {
				count += child.capture_count();
			}
		}
		// Group-condition groups are not reachable through `children`.
		if let Ast::Conditional(cond) = self {
			if let ConditionKind::Group(group) = &cond.condition.value {
				if group.kind.value.is_capturing() {
					count += 1;
				}
				count += group.child.capture_count();
			}
		}
		count
	}
}
