//! Deterministic tree rendering.
//!
//! The dump format is the golden output used by the tests. It deliberately
//! omits trivia, so dumping a parse and dumping the parse of that dump agree
//! on canonical inputs.

use std::fmt::{self, Display, Formatter, Write};

use super::{
	AbsentKind, Amount, Ast, Atom, AtomKind, Callout, ClassMember, ConditionKind,
	CustomCharacterClass, GlobalOption, GroupKind, MatchingOptionSequence, NewlineMatching,
	NewlineSequenceMatching, PcreCalloutArg, PropertyKind, Quantification, Reference,
	ReferenceKind, VersionCheckKind,
};

impl Ast {
	/// Render this tree to the deterministic dump format.
	pub fn dump(&self) -> String {
		self.to_string()
	}
}

impl Display for Ast {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Ast::Alternation(v) => {
				f.write_str("alternation(")?;
				for (i, child) in v.children.iter().enumerate() {
					if i > 0 {
						f.write_char(',')?;
					}
					// A branch which collapsed to pure trivia matches empty.
					if child.is_trivia() {
						f.write_str("empty")?;
					} else {
						Display::fmt(child, f)?;
					}
				}
				f.write_char(')')
			}
			Ast::Concatenation(v) => {
				// Trivia is omitted, and a concatenation it reduces to a
				// single component prints as that component.
				let children: Vec<&Ast> =
					v.children.iter().filter(|x| !x.is_trivia()).collect();
				match children.len() {
					0 => f.write_str("empty"),
					1 => Display::fmt(children[0], f),
					_ => {
						f.write_char('(')?;
						for (i, child) in children.iter().enumerate() {
							if i > 0 {
								f.write_char(',')?;
							}
							Display::fmt(child, f)?;
						}
						f.write_char(')')
					}
				}
			}
			Ast::Group(v) => {
				write!(f, "group_{}({})", GroupKindLabel(&v.kind.value), v.child)
			}
			Ast::Conditional(v) => {
				write!(
					f,
					"if {} then {} else {}",
					ConditionLabel(&v.condition.value),
					v.true_branch,
					v.false_branch
				)
			}
			Ast::Quantification(v) => Display::fmt(&QuantLabel(v), f),
			Ast::Quote(v) => write!(f, "quote \"{}\"", v.literal),
			Ast::Trivia(_) => f.write_str("trivia"),
			Ast::Atom(v) => Display::fmt(v, f),
			Ast::CustomCharacterClass(v) => Display::fmt(v, f),
			Ast::GlobalMatchingOptions(v) => {
				f.write_str("globalMatchingOptions<")?;
				for option in v.options.iter() {
					Display::fmt(&option.value, f)?;
				}
				write!(f, ">({})", v.ast)
			}
			Ast::AbsentFunction(v) => match &v.kind {
				AbsentKind::Repeater(x) => write!(f, "absent_repeater({x})"),
				AbsentKind::Expression {
					absentee,
					expr,
					..
				} => write!(f, "absent_expression({absentee},{expr})"),
				AbsentKind::Stopper(x) => write!(f, "absent_stopper({x})"),
				AbsentKind::Clearer => f.write_str("absent_clearer"),
			},
			Ast::Empty(_) => f.write_str("empty"),
		}
	}
}

struct QuantLabel<'a>(&'a Quantification);

impl Display for QuantLabel<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("quant_")?;
		match self.0.amount.value {
			Amount::ZeroOrMore => f.write_str("zeroOrMore")?,
			Amount::OneOrMore => f.write_str("oneOrMore")?,
			Amount::ZeroOrOne => f.write_str("zeroOrOne")?,
			Amount::Exactly(n) => write!(f, "exactly<{n}>")?,
			Amount::NOrMore(n) => write!(f, "nOrMore<{n}>")?,
			Amount::UpToN(n) => write!(f, "uptoN<{n}>")?,
			Amount::Range(lo, hi) => write!(f, ".range<{lo}...{hi}>")?,
		}
		write!(f, "_{}({})", self.0.kind.value.as_str(), self.0.operand)
	}
}

struct GroupKindLabel<'a>(&'a GroupKind);

impl Display for GroupKindLabel<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.0 {
			GroupKind::Capture => f.write_str("capture"),
			GroupKind::NamedCapture(name) => write!(f, "namedCapture<{name}>"),
			GroupKind::BalancedCapture {
				name,
				prior,
			} => {
				write!(f, "balancedCapture<{}-{prior}>", name.as_deref().unwrap_or(""))
			}
			GroupKind::NonCapture => f.write_str("nonCapture"),
			GroupKind::NonCaptureReset => f.write_str("nonCaptureReset"),
			GroupKind::AtomicNonCapturing => f.write_str("atomicNonCapturing"),
			GroupKind::Lookahead => f.write_str("lookahead"),
			GroupKind::NegativeLookahead => f.write_str("negativeLookahead"),
			GroupKind::NonAtomicLookahead => f.write_str("nonAtomicLookahead"),
			GroupKind::Lookbehind => f.write_str("lookbehind"),
			GroupKind::NegativeLookbehind => f.write_str("negativeLookbehind"),
			GroupKind::NonAtomicLookbehind => f.write_str("nonAtomicLookbehind"),
			GroupKind::ScriptRun => f.write_str("scriptRun"),
			GroupKind::AtomicScriptRun => f.write_str("atomicScriptRun"),
			GroupKind::ChangeMatchingOptions {
				sequence,
				..
			} => write!(f, "changeMatchingOptions<{sequence}>"),
		}
	}
}

impl Display for MatchingOptionSequence {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.caret.is_some() {
			f.write_char('^')?;
		}
		for option in self.adding.iter() {
			f.write_str(option.value.as_str())?;
		}
		if self.minus.is_some() {
			f.write_char('-')?;
			for option in self.removing.iter() {
				f.write_str(option.value.as_str())?;
			}
		}
		Ok(())
	}
}

struct ConditionLabel<'a>(&'a ConditionKind);

impl Display for ConditionLabel<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.0 {
			ConditionKind::PcreVersionCheck {
				kind,
				major,
				minor,
			} => {
				let op = match kind {
					VersionCheckKind::Equal => "=",
					VersionCheckKind::GreaterOrEqual => ">=",
				};
				write!(f, "VERSION{op}{major}.{minor}")
			}
			ConditionKind::Group(group) => {
				write!(f, "group_{}({})", GroupKindLabel(&group.kind.value), group.child)
			}
			ConditionKind::GroupMatched(reference) => match &reference.kind {
				ReferenceKind::Absolute(n) => write!(f, "{n}"),
				ReferenceKind::Relative(n) => write!(f, "{n:+}"),
				ReferenceKind::Named(name) => write!(f, "<{name}>"),
			},
			ConditionKind::GroupRecursionCheck(reference) => match &reference.kind {
				ReferenceKind::Absolute(n) => write!(f, "R{n}"),
				ReferenceKind::Relative(n) => write!(f, "R{n:+}"),
				ReferenceKind::Named(name) => write!(f, "R&{name}"),
			},
			ConditionKind::RecursionCheck => f.write_str("R"),
			ConditionKind::DefineGroup => f.write_str("DEFINE"),
		}
	}
}

impl Display for Atom {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match &self.kind {
			AtomKind::Char(c) => f.write_char(*c),
			AtomKind::Scalar(c) => {
				if c.is_ascii_graphic() || *c == ' ' {
					f.write_char(*c)
				} else {
					write!(f, "\\u{{{:X}}}", *c as u32)
				}
			}
			AtomKind::Escaped(e) => write!(f, "\\{}", e.as_char()),
			AtomKind::NamedCharacter(name) => write!(f, "\\N{{{name}}}"),
			AtomKind::Property(property) => {
				let sigil = if property.inverted {
					'P'
				} else {
					'p'
				};
				write!(f, "\\{sigil}{{{}}}", PropertyLabel(&property.kind))
			}
			AtomKind::KeyboardControl(c) => write!(f, "\\c{c}"),
			AtomKind::KeyboardMeta(c) => write!(f, "\\M-{c}"),
			AtomKind::KeyboardMetaControl(c) => write!(f, "\\M-\\C-{c}"),
			AtomKind::Any => f.write_char('.'),
			AtomKind::StartOfLine => f.write_char('^'),
			AtomKind::EndOfLine => f.write_char('$'),
			AtomKind::Backreference(reference) => Display::fmt(&BackrefLabel(reference), f),
			AtomKind::Subpattern(reference) => match &reference.kind {
				ReferenceKind::Absolute(0) => f.write_str("(?R)"),
				ReferenceKind::Absolute(n) => write!(f, "(?{n})"),
				ReferenceKind::Relative(n) => write!(f, "(?{n:+})"),
				ReferenceKind::Named(name) => write!(f, "\\g<{name}>"),
			},
			AtomKind::Callout(callout) => Display::fmt(callout, f),
			AtomKind::BacktrackingDirective(directive) => {
				write!(f, "(*{}", directive.kind.as_str())?;
				if let Some(name) = &directive.name {
					write!(f, ":{name}")?;
				}
				f.write_char(')')
			}
		}
	}
}

struct BackrefLabel<'a>(&'a Reference);

impl Display for BackrefLabel<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match &self.0.kind {
			ReferenceKind::Absolute(n) => write!(f, "\\{n}"),
			ReferenceKind::Relative(n) => write!(f, "\\g{{{n:+}}}"),
			ReferenceKind::Named(name) => {
				f.write_str("\\k<")?;
				f.write_str(name)?;
				if let Some(level) = &self.0.recursion_level {
					write!(f, "{:+}", level.value)?;
				}
				f.write_char('>')
			}
		}
	}
}

struct PropertyLabel<'a>(&'a PropertyKind);

impl Display for PropertyLabel<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.0 {
			PropertyKind::Any => f.write_str("any"),
			PropertyKind::Assigned => f.write_str("assigned"),
			PropertyKind::Ascii => f.write_str("ascii"),
			PropertyKind::Binary(name) => f.write_str(name),
			PropertyKind::GeneralCategory(category) => f.write_str(category.as_str()),
			PropertyKind::Script(name) => write!(f, "script={name}"),
			PropertyKind::ScriptExtensions(name) => write!(f, "scx={name}"),
			PropertyKind::Posix(class) => f.write_str(class.as_str()),
			PropertyKind::Other {
				key,
				value,
			} => {
				if let Some(key) = key {
					write!(f, "{key}=")?;
				}
				f.write_str(value)
			}
		}
	}
}

impl Display for Callout {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Callout::Pcre(PcreCalloutArg::Number(n)) => write!(f, "(?C{n})"),
			Callout::Pcre(PcreCalloutArg::String(s)) => write!(f, "(?C\"{s}\")"),
			Callout::OnigurumaNamed {
				name,
				tag,
				args,
			} => {
				write!(f, "(*{name}")?;
				if let Some(tag) = tag {
					write!(f, "[{tag}]")?;
				}
				if !args.is_empty() {
					write!(f, "{{{}}}", args.join(","))?;
				}
				f.write_char(')')
			}
			Callout::OnigurumaContents {
				contents,
				tag,
				direction,
			} => {
				write!(f, "(?{{{contents}}}")?;
				if let Some(tag) = tag {
					write!(f, "[{tag}]")?;
				}
				if let Some(direction) = direction {
					f.write_char(*direction)?;
				}
				f.write_char(')')
			}
		}
	}
}

impl Display for CustomCharacterClass {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("customCharacterClass(")?;
		let mut wrote = false;
		if self.is_inverted() {
			f.write_char('^')?;
			wrote = true;
		}
		for member in self.members.iter() {
			if matches!(member, ClassMember::Trivia(_)) {
				continue;
			}
			if wrote {
				f.write_char(',')?;
			}
			Display::fmt(member, f)?;
			wrote = true;
		}
		f.write_char(')')
	}
}

impl Display for ClassMember {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		fn write_members(f: &mut Formatter<'_>, members: &[ClassMember]) -> fmt::Result {
			f.write_char('[')?;
			let mut wrote = false;
			for member in members.iter() {
				if matches!(member, ClassMember::Trivia(_)) {
					continue;
				}
				if wrote {
					f.write_char(',')?;
				}
				Display::fmt(member, f)?;
				wrote = true;
			}
			f.write_char(']')
		}

		match self {
			ClassMember::Atom(atom) => Display::fmt(atom, f),
			ClassMember::Range(range) => write!(f, "{}-{}", range.lhs, range.rhs),
			ClassMember::Quote(quote) => write!(f, "quote \"{}\"", quote.literal),
			ClassMember::Trivia(_) => Ok(()),
			ClassMember::Class(class) => Display::fmt(class, f),
			ClassMember::SetOperation(op) => {
				f.write_str("op ")?;
				write_members(f, &op.lhs)?;
				write!(f, " {} ", op.op.value.as_str())?;
				write_members(f, &op.rhs)
			}
		}
	}
}

impl Display for GlobalOption {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			GlobalOption::LimitDepth(n) => write!(f, "(*LIMIT_DEPTH={n})"),
			GlobalOption::LimitHeap(n) => write!(f, "(*LIMIT_HEAP={n})"),
			GlobalOption::LimitMatch(n) => write!(f, "(*LIMIT_MATCH={n})"),
			GlobalOption::NotEmpty => f.write_str("(*NOTEMPTY)"),
			GlobalOption::NotEmptyAtStart => f.write_str("(*NOTEMPTY_ATSTART)"),
			GlobalOption::NoAutoPossess => f.write_str("(*NO_AUTO_POSSESS)"),
			GlobalOption::NoDotStarAnchor => f.write_str("(*NO_DOT_STAR_ANCHOR)"),
			GlobalOption::NoJit => f.write_str("(*NO_JIT)"),
			GlobalOption::NoStartOpt => f.write_str("(*NO_START_OPT)"),
			GlobalOption::UtfMode => f.write_str("(*UTF)"),
			GlobalOption::UnicodeProperties => f.write_str("(*UCP)"),
			GlobalOption::NewlineMatching(kind) => {
				let kind = match kind {
					NewlineMatching::CarriageReturnOnly => "CR",
					NewlineMatching::LinefeedOnly => "LF",
					NewlineMatching::CarriageAndLinefeed => "CRLF",
					NewlineMatching::AnyCarriageReturnOrLinefeed => "ANYCRLF",
					NewlineMatching::AnyUnicode => "ANY",
					NewlineMatching::NulCharacter => "NUL",
				};
				write!(f, "(*{kind})")
			}
			GlobalOption::NewlineSequenceMatching(kind) => {
				let kind = match kind {
					NewlineSequenceMatching::AnyCarriageReturnOrLinefeed => "BSR_ANYCRLF",
					NewlineSequenceMatching::AnyUnicode => "BSR_UNICODE",
				};
				write!(f, "(*{kind})")
			}
		}
	}
}
