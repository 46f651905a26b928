//! Lexing of the `(` family.
//!
//! `(?` alone introduces several dozen constructs, and not all of them are
//! groups: `(?1)`, `(?R)`, `(?&name)`, `(?P=name)` and the callout forms are
//! atoms. [`Lexer::lex_group_start`] restores the reader and returns `None`
//! for those so that [`Lexer::lex_atom`] can pick them up, and only reports
//! `UnknownGroupKind` for text no dialect defines.

use phf::phf_map;

use crate::ast::{
	Atom, AtomKind, BacktrackingDirective, BacktrackingDirectiveKind, Callout, ConditionKind,
	GlobalOption, GroupKind, MatchingOption, MatchingOptionSequence, NewlineMatching,
	NewlineSequenceMatching, PcreCalloutArg, Reference, ReferenceKind, VersionCheckKind,
};
use crate::span::{Located, Span};
use crate::syn::error::{bail, ParseErrorKind, ParseResult};
use crate::syn::parser::ParsingContext;

use super::escape::is_word_char;
use super::Lexer;

/// The `(*name:` spellings of group kinds.
static GROUP_VERBS: phf::Map<&'static str, GroupKind> = phf_map! {
	"atomic" => GroupKind::AtomicNonCapturing,
	"pla" => GroupKind::Lookahead,
	"positive_lookahead" => GroupKind::Lookahead,
	"nla" => GroupKind::NegativeLookahead,
	"negative_lookahead" => GroupKind::NegativeLookahead,
	"plb" => GroupKind::Lookbehind,
	"positive_lookbehind" => GroupKind::Lookbehind,
	"nlb" => GroupKind::NegativeLookbehind,
	"negative_lookbehind" => GroupKind::NegativeLookbehind,
	"napla" => GroupKind::NonAtomicLookahead,
	"non_atomic_positive_lookahead" => GroupKind::NonAtomicLookahead,
	"naplb" => GroupKind::NonAtomicLookbehind,
	"non_atomic_positive_lookbehind" => GroupKind::NonAtomicLookbehind,
	"sr" => GroupKind::ScriptRun,
	"script_run" => GroupKind::ScriptRun,
	"asr" => GroupKind::AtomicScriptRun,
	"atomic_script_run" => GroupKind::AtomicScriptRun,
};

/// The `(*VERB)` backtracking directives.
static DIRECTIVE_VERBS: phf::Map<&'static str, BacktrackingDirectiveKind> = phf_map! {
	"ACCEPT" => BacktrackingDirectiveKind::Accept,
	"FAIL" => BacktrackingDirectiveKind::Fail,
	"F" => BacktrackingDirectiveKind::Fail,
	"MARK" => BacktrackingDirectiveKind::Mark,
	"COMMIT" => BacktrackingDirectiveKind::Commit,
	"PRUNE" => BacktrackingDirectiveKind::Prune,
	"SKIP" => BacktrackingDirectiveKind::Skip,
	"THEN" => BacktrackingDirectiveKind::Then,
};

/// How an absent function opened.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum AbsentStart {
	/// `(?~`
	WithoutPipe,
	/// `(?~|`
	WithPipe,
}

impl Lexer<'_> {
	/// Lex the opening delimiter of a group, returning its kind.
	///
	/// Restores the reader and returns `None` when `(` introduces something
	/// which is not a group: an atom form, a comment, a conditional or an
	/// absent function.
	pub fn lex_group_start(
		&mut self,
		ctx: &ParsingContext,
	) -> ParseResult<Option<Located<GroupKind>>> {
		let start = self.reader.offset();
		if !self.reader.eat('(') {
			return Ok(None);
		}

		if self.reader.eat('*') {
			// Alphabetic group spellings; everything else `(*…` is an atom.
			let name_start = self.reader.offset();
			while self.reader.eat_when(|x| is_word_char(x)).is_some() {}
			let name = self.reader.span_text(self.reader.span_from(name_start));
			if let Some(kind) = GROUP_VERBS.get(name) {
				if self.reader.eat(':') {
					let kind = kind.clone();
					return Ok(Some(Located::new(kind, self.reader.span_from(start))));
				}
			}
			self.reader.backup(start);
			return Ok(None);
		}

		if !self.reader.eat('?') {
			return Ok(Some(Located::new(GroupKind::Capture, self.reader.span_from(start))));
		}

		let Some(c) = self.reader.peek() else {
			bail!(
				ParseErrorKind::UnexpectedEndOfInput {
					expected: "a group kind",
				},
				@self.reader.span_here()
			);
		};

		let kind = match c {
			':' => {
				self.reader.next();
				GroupKind::NonCapture
			}
			'|' => {
				self.reader.next();
				GroupKind::NonCaptureReset
			}
			'>' => {
				self.reader.next();
				GroupKind::AtomicNonCapturing
			}
			'=' => {
				self.reader.next();
				GroupKind::Lookahead
			}
			'!' => {
				self.reader.next();
				GroupKind::NegativeLookahead
			}
			'*' => {
				self.reader.next();
				GroupKind::NonAtomicLookahead
			}
			'<' => {
				self.reader.next();
				match self.reader.peek() {
					Some('=') => {
						self.reader.next();
						GroupKind::Lookbehind
					}
					Some('!') => {
						self.reader.next();
						GroupKind::NegativeLookbehind
					}
					Some('*') => {
						self.reader.next();
						GroupKind::NonAtomicLookbehind
					}
					_ => self.lex_named_group_body('>')?,
				}
			}
			'\'' => {
				self.reader.next();
				self.lex_named_group_body('\'')?
			}
			'P' => {
				if self.reader.starts_with("P<") {
					self.reader.next();
					self.reader.next();
					let (name, _) = self.lex_reference_name()?;
					self.expect('>')?;
					GroupKind::NamedCapture(name)
				} else if self.reader.starts_with("P=") || self.reader.starts_with("P>") {
					// Atom forms, `(?P=name)` and `(?P>name)`.
					self.reader.backup(start);
					return Ok(None);
				} else {
					bail!(
						ParseErrorKind::UnknownGroupKind(self.unknown_group_text()),
						@self.reader.span_from(start)
					);
				}
			}
			// Comments, conditionals, callouts, subpattern atoms; all
			// handled elsewhere.
			'#' | '(' | '{' | 'C' | 'R' | '&' | '0'..='9' => {
				self.reader.backup(start);
				return Ok(None);
			}
			'~' if ctx.syntax.oniguruma => {
				self.reader.backup(start);
				return Ok(None);
			}
			'+' | '-' if self.reader.peek_at(1).map(|x| x.is_ascii_digit()).unwrap_or(false) => {
				self.reader.backup(start);
				return Ok(None);
			}
			'i' | 'J' | 'm' | 'n' | 's' | 'U' | 'x' | 'w' | 'D' | 'S' | 'W' | 'y' | '^' | '-' => {
				let sequence = self.lex_matching_option_sequence()?;
				let isolated = match self.reader.peek() {
					Some(':') => {
						self.reader.next();
						false
					}
					Some(')') => {
						self.reader.next();
						true
					}
					Some(found) => bail!(
						ParseErrorKind::Unexpected {
							found,
							expected: "`:` or `)` after the matching options",
						},
						@self.reader.next_char_span()
					),
					None => bail!(
						ParseErrorKind::UnexpectedEndOfInput {
							expected: "`:` or `)` after the matching options",
						},
						@self.reader.span_here()
					),
				};
				GroupKind::ChangeMatchingOptions {
					sequence,
					isolated,
				}
			}
			_ => {
				bail!(
					ParseErrorKind::UnknownGroupKind(self.unknown_group_text()),
					@self.reader.span_from(start)
				);
			}
		};
		Ok(Some(Located::new(kind, self.reader.span_from(start))))
	}

	/// The offending text after `(?`, for `UnknownGroupKind` errors.
	fn unknown_group_text(&self) -> String {
		self.reader.remaining().chars().take_while(|x| *x != ')').take(8).collect()
	}

	/// Lex `name>`, `name-prior>` or `-prior>` after `(?<` / `(?'`.
	fn lex_named_group_body(&mut self, terminator: char) -> ParseResult<GroupKind> {
		let name = if self.reader.peek() == Some('-') {
			None
		} else {
			let name_start = self.reader.next_char_span();
			if let Some(c) = self.reader.peek() {
				if c.is_ascii_digit() {
					bail!(
						ParseErrorKind::Unexpected {
							found: c,
							expected: "a group name",
						},
						@name_start
					);
				}
			}
			let (name, _) = self.lex_reference_name()?;
			Some(name)
		};
		if self.reader.eat('-') {
			let (prior, _) = self.lex_reference_name()?;
			self.expect(terminator)?;
			return Ok(GroupKind::BalancedCapture {
				name,
				prior,
			});
		}
		let Some(name) = name else {
			// `-` with no prior name cannot get here; kept for safety.
			bail!(ParseErrorKind::Expected('-'), @self.reader.next_char_span());
		};
		self.expect(terminator)?;
		Ok(GroupKind::NamedCapture(name))
	}

	/// Lex a sequence of matching options, stopping before `:` or `)`.
	fn lex_matching_option_sequence(&mut self) -> ParseResult<MatchingOptionSequence> {
		let mut sequence = MatchingOptionSequence::default();
		let caret_span = self.reader.next_char_span();
		if self.reader.eat('^') {
			sequence.caret = Some(caret_span);
		}
		self.lex_matching_options(&mut sequence.adding)?;
		let minus_span = self.reader.next_char_span();
		if self.reader.eat('-') {
			sequence.minus = Some(minus_span);
			self.lex_matching_options(&mut sequence.removing)?;
		}
		Ok(sequence)
	}

	fn lex_matching_options(
		&mut self,
		into: &mut Vec<Located<MatchingOption>>,
	) -> ParseResult<()> {
		loop {
			let start = self.reader.offset();
			let option = match self.reader.peek() {
				Some(':') | Some(')') | Some('-') | None => return Ok(()),
				Some('i') => MatchingOption::CaseInsensitive,
				Some('J') => MatchingOption::AllowDuplicateGroupNames,
				Some('m') => MatchingOption::Multiline,
				Some('n') => MatchingOption::NamedCapturesOnly,
				Some('s') => MatchingOption::SingleLine,
				Some('U') => MatchingOption::ReluctantByDefault,
				Some('w') => MatchingOption::UnicodeWordBoundaries,
				Some('D') => MatchingOption::AsciiOnlyDigit,
				Some('P') => MatchingOption::AsciiOnlyPosixProps,
				Some('S') => MatchingOption::AsciiOnlySpace,
				Some('W') => MatchingOption::AsciiOnlyWord,
				Some('x') => {
					self.reader.next();
					let option = if self.reader.eat('x') {
						MatchingOption::ExtraExtended
					} else {
						MatchingOption::Extended
					};
					into.push(Located::new(option, self.reader.span_from(start)));
					continue;
				}
				Some('y') => {
					self.reader.next();
					self.expect('{')?;
					let option = match self.reader.next() {
						Some('g') => MatchingOption::TextSegmentGraphemeMode,
						Some('w') => MatchingOption::TextSegmentWordMode,
						Some(found) => bail!(
							ParseErrorKind::Unexpected {
								found,
								expected: "`g` or `w`",
							},
							@self.reader.span_from(start)
						),
						None => bail!(
							ParseErrorKind::UnexpectedEndOfInput {
								expected: "`g` or `w`",
							},
							@self.reader.span_here()
						),
					};
					self.expect('}')?;
					into.push(Located::new(option, self.reader.span_from(start)));
					continue;
				}
				Some(found) => bail!(
					ParseErrorKind::Unexpected {
						found,
						expected: "a matching option",
					},
					@self.reader.next_char_span()
				),
			};
			self.reader.next();
			into.push(Located::new(option, self.reader.span_from(start)));
		}
	}

	/// Lex a known conditional start `(?(cond)`, including the `)` which
	/// closes the condition.
	///
	/// Returns `None` both when the input isn't a conditional at all and
	/// when the condition is a group (handled by
	/// [`Lexer::lex_group_conditional_start`]).
	pub fn lex_known_conditional_start(
		&mut self,
		_ctx: &ParsingContext,
	) -> ParseResult<Option<Located<ConditionKind>>> {
		let start = self.reader.offset();
		if !self.reader.eat_str("(?(") {
			return Ok(None);
		}
		// A group condition: `(?(?=…)…)`, `(?((a))…)` or `(?((*pla:…))…)`.
		if matches!(self.reader.peek(), Some('?' | '*' | '(')) {
			self.reader.backup(start);
			return Ok(None);
		}

		let condition_start = self.reader.offset();
		let condition = match self.reader.peek() {
			Some('R') => {
				self.reader.next();
				if self.reader.eat('&') {
					let (name, span) = self.lex_reference_name()?;
					ConditionKind::GroupRecursionCheck(Reference::new(
						ReferenceKind::Named(name),
						span,
					))
				} else if self.reader.peek().map(|x| x.is_ascii_digit()).unwrap_or(false) {
					let (number, span) = self.lex_number()?;
					ConditionKind::GroupRecursionCheck(Reference::new(
						ReferenceKind::Absolute(number),
						span,
					))
				} else if self.reader.peek() == Some(')') {
					ConditionKind::RecursionCheck
				} else {
					bail!(
						ParseErrorKind::UnknownConditionalStart,
						@self.reader.span_from(condition_start)
					);
				}
			}
			Some('<') => {
				self.reader.next();
				let (name, span) = self.lex_reference_name()?;
				self.expect('>')?;
				ConditionKind::GroupMatched(Reference::new(ReferenceKind::Named(name), span))
			}
			Some('\'') => {
				self.reader.next();
				let (name, span) = self.lex_reference_name()?;
				self.expect('\'')?;
				ConditionKind::GroupMatched(Reference::new(ReferenceKind::Named(name), span))
			}
			Some(c) if c.is_ascii_digit() => {
				let (number, span) = self.lex_number()?;
				ConditionKind::GroupMatched(Reference::new(ReferenceKind::Absolute(number), span))
			}
			Some('+') | Some('-') => {
				let negative = self.reader.next() == Some('-');
				let (number, span) = self.lex_number()?;
				let offset = number as i32;
				ConditionKind::GroupMatched(Reference::new(
					ReferenceKind::Relative(if negative {
						-offset
					} else {
						offset
					}),
					self.reader.span_from(condition_start).covers(span),
				))
			}
			Some(c) if c.is_ascii_alphabetic() => {
				let word_start = self.reader.offset();
				while self.reader.eat_when(|x| x.is_ascii_alphabetic()).is_some() {}
				let word = self.reader.span_text(self.reader.span_from(word_start));
				match word {
					"DEFINE" => ConditionKind::DefineGroup,
					"VERSION" => self.lex_version_check()?,
					_ => bail!(
						ParseErrorKind::UnknownConditionalStart,
						@self.reader.span_from(condition_start)
					),
				}
			}
			_ => bail!(
				ParseErrorKind::UnknownConditionalStart,
				@self.reader.span_from(condition_start)
			),
		};
		self.expect(')')?;
		Ok(Some(Located::new(condition, self.reader.span_from(start))))
	}

	/// Lex `=M.N` / `>=M.N` after `VERSION`.
	fn lex_version_check(&mut self) -> ParseResult<ConditionKind> {
		let kind = if self.reader.eat('>') {
			if !self.reader.eat('=') {
				bail!(ParseErrorKind::ExpectedEquals, @self.reader.next_char_span());
			}
			VersionCheckKind::GreaterOrEqual
		} else if self.reader.eat('=') {
			VersionCheckKind::Equal
		} else {
			bail!(ParseErrorKind::ExpectedEquals, @self.reader.next_char_span());
		};
		let (major, _) = self.lex_number()?;
		self.expect('.')?;
		let (minor, _) = self.lex_number()?;
		Ok(ConditionKind::PcreVersionCheck {
			kind,
			major,
			minor,
		})
	}

	/// Lex the start of a conditional whose condition is itself a group,
	/// `(?(` followed by a group start.
	///
	/// Consumes only the leading `(?`, leaving the reader at the `(` which
	/// opens the condition group.
	pub fn lex_group_conditional_start(
		&mut self,
		_ctx: &ParsingContext,
	) -> ParseResult<Option<Span>> {
		let start = self.reader.offset();
		if !self.reader.eat_str("(?") {
			return Ok(None);
		}
		if self.reader.peek() != Some('(') {
			self.reader.backup(start);
			return Ok(None);
		}
		Ok(Some(self.reader.span_from(start)))
	}

	/// Lex the start of an Oniguruma absent function.
	pub fn lex_absent_function_start(
		&mut self,
		ctx: &ParsingContext,
	) -> ParseResult<Option<Located<AbsentStart>>> {
		if !ctx.syntax.oniguruma {
			return Ok(None);
		}
		let start = self.reader.offset();
		if !self.reader.eat_str("(?~") {
			return Ok(None);
		}
		let kind = if self.reader.eat('|') {
			AbsentStart::WithPipe
		} else {
			AbsentStart::WithoutPipe
		};
		Ok(Some(Located::new(kind, self.reader.span_from(start))))
	}

	/// Lex the `(`-introduced atoms: recursion calls like `(?R)` and `(?1)`,
	/// named calls, `(?P=name)` back-references, callouts and backtracking
	/// directives.
	pub(super) fn lex_paren_atom(&mut self, ctx: &ParsingContext) -> ParseResult<Option<Atom>> {
		let start = self.reader.offset();
		if !self.reader.eat('(') {
			return Ok(None);
		}

		if self.reader.eat('*') {
			return self.lex_star_atom(ctx, start).map(Some);
		}

		if !self.reader.eat('?') {
			self.reader.backup(start);
			return Ok(None);
		}

		let kind = match self.reader.peek() {
			Some('C') => {
				self.reader.next();
				let arg = if self.reader.peek().map(|x| x.is_ascii_digit()).unwrap_or(false) {
					let (number, _) = self.lex_number()?;
					PcreCalloutArg::Number(number)
				} else if self.reader.eat('"') {
					PcreCalloutArg::String(self.lex_text_until('"')?)
				} else if self.reader.eat('{') {
					PcreCalloutArg::String(self.lex_text_until('}')?)
				} else {
					PcreCalloutArg::Number(0)
				};
				self.expect(')')?;
				AtomKind::Callout(Callout::Pcre(arg))
			}
			Some('{') => {
				self.reader.next();
				let contents = self.lex_text_until('}')?;
				let tag = if self.reader.eat('[') {
					Some(self.lex_text_until(']')?)
				} else {
					None
				};
				let direction = self.reader.eat_when(|x| matches!(x, 'X' | '<' | '>'));
				self.expect(')')?;
				AtomKind::Callout(Callout::OnigurumaContents {
					contents,
					tag,
					direction,
				})
			}
			Some('R') => {
				let span = self.reader.next_char_span();
				self.reader.next();
				self.expect(')')?;
				AtomKind::Subpattern(Reference::new(ReferenceKind::Absolute(0), span))
			}
			Some('&') => {
				self.reader.next();
				let (name, span) = self.lex_reference_name()?;
				self.expect(')')?;
				AtomKind::Subpattern(Reference::new(ReferenceKind::Named(name), span))
			}
			Some('P') => {
				self.reader.next();
				if self.reader.eat('>') {
					let (name, span) = self.lex_reference_name()?;
					self.expect(')')?;
					AtomKind::Subpattern(Reference::new(ReferenceKind::Named(name), span))
				} else if self.reader.eat('=') {
					let (name, span) = self.lex_reference_name()?;
					self.expect(')')?;
					AtomKind::Backreference(Reference::new(ReferenceKind::Named(name), span))
				} else {
					self.reader.backup(start);
					return Ok(None);
				}
			}
			Some(c) if c.is_ascii_digit() => {
				let (number, span) = self.lex_number()?;
				self.expect(')')?;
				AtomKind::Subpattern(Reference::new(ReferenceKind::Absolute(number), span))
			}
			Some('+') | Some('-') => {
				let sign_start = self.reader.offset();
				let negative = self.reader.next() == Some('-');
				let (number, _) = self.lex_number()?;
				let span = self.reader.span_from(sign_start);
				self.expect(')')?;
				let offset = number as i32;
				AtomKind::Subpattern(Reference::new(
					ReferenceKind::Relative(if negative {
						-offset
					} else {
						offset
					}),
					span,
				))
			}
			_ => {
				self.reader.backup(start);
				return Ok(None);
			}
		};
		Ok(Some(Atom::new(kind, self.reader.span_from(start))))
	}

	/// Lex a `(*…)` atom: a backtracking directive or an Oniguruma named
	/// callout. The `(*` has already been consumed.
	fn lex_star_atom(&mut self, ctx: &ParsingContext, start: u32) -> ParseResult<Atom> {
		let name_start = self.reader.offset();
		while self.reader.eat_when(is_word_char).is_some() {}
		let name_span = self.reader.span_from(name_start);
		let name = self.reader.span_text(name_span);

		if let Some(kind) = DIRECTIVE_VERBS.get(name).copied() {
			let name = if self.reader.eat(':') {
				Some(self.lex_text_until(')')?)
			} else {
				self.expect(')')?;
				None
			};
			if kind == BacktrackingDirectiveKind::Mark && name.is_none() {
				bail!(ParseErrorKind::Expected(':'), @name_span.after());
			}
			return Ok(Atom::new(
				AtomKind::BacktrackingDirective(BacktrackingDirective {
					kind,
					name,
				}),
				self.reader.span_from(start),
			));
		}

		// `(*:name)` is a MARK.
		if name.is_empty() && self.reader.eat(':') {
			let name = self.lex_text_until(')')?;
			return Ok(Atom::new(
				AtomKind::BacktrackingDirective(BacktrackingDirective {
					kind: BacktrackingDirectiveKind::Mark,
					name: Some(name),
				}),
				self.reader.span_from(start),
			));
		}

		// An Oniguruma callout of name, `(*name[tag]{args})`.
		if ctx.syntax.oniguruma && !name.is_empty() {
			let name = name.to_owned();
			let tag = if self.reader.eat('[') {
				Some(self.lex_text_until(']')?)
			} else {
				None
			};
			let args = if self.reader.eat('{') {
				self.lex_text_until('}')?.split(',').map(|x| x.trim().to_owned()).collect()
			} else {
				Vec::new()
			};
			self.expect(')')?;
			return Ok(Atom::new(
				AtomKind::Callout(Callout::OnigurumaNamed {
					name,
					tag,
					args,
				}),
				self.reader.span_from(start),
			));
		}

		bail!(
			ParseErrorKind::UnknownGroupKind(format!("*{name}")),
			@self.reader.span_from(start)
		)
	}

	/// Collect text up to and including the given terminator.
	fn lex_text_until(&mut self, terminator: char) -> ParseResult<String> {
		let mut text = String::new();
		loop {
			match self.reader.next() {
				Some(c) if c == terminator => return Ok(text),
				Some(c) => text.push(c),
				None => bail!(
					ParseErrorKind::UnexpectedEndOfInput {
						expected: "a closing delimiter",
					},
					@self.reader.span_here()
				),
			}
		}
	}

	/// Lex the run of global matching options a pattern may start with,
	/// e.g. `(*UTF)(*LIMIT_MATCH=3)`.
	pub fn lex_global_matching_options(
		&mut self,
	) -> ParseResult<Vec<Located<GlobalOption>>> {
		let mut options = Vec::new();
		loop {
			let start = self.reader.offset();
			if !self.reader.eat_str("(*") {
				break;
			}
			let name_start = self.reader.offset();
			while self.reader.eat_when(|x| x.is_ascii_uppercase() || x == '_').is_some() {}
			let name = self.reader.span_text(self.reader.span_from(name_start));
			let option = match name {
				"LIMIT_DEPTH" | "LIMIT_RECURSION" => GlobalOption::LimitDepth(self.lex_limit()?),
				"LIMIT_HEAP" => GlobalOption::LimitHeap(self.lex_limit()?),
				"LIMIT_MATCH" => GlobalOption::LimitMatch(self.lex_limit()?),
				"NOTEMPTY" => GlobalOption::NotEmpty,
				"NOTEMPTY_ATSTART" => GlobalOption::NotEmptyAtStart,
				"NO_AUTO_POSSESS" => GlobalOption::NoAutoPossess,
				"NO_DOT_STAR_ANCHOR" => GlobalOption::NoDotStarAnchor,
				"NO_JIT" => GlobalOption::NoJit,
				"NO_START_OPT" => GlobalOption::NoStartOpt,
				"UTF" => GlobalOption::UtfMode,
				"UCP" => GlobalOption::UnicodeProperties,
				"CR" => GlobalOption::NewlineMatching(NewlineMatching::CarriageReturnOnly),
				"LF" => GlobalOption::NewlineMatching(NewlineMatching::LinefeedOnly),
				"CRLF" => GlobalOption::NewlineMatching(NewlineMatching::CarriageAndLinefeed),
				"ANYCRLF" => {
					GlobalOption::NewlineMatching(NewlineMatching::AnyCarriageReturnOrLinefeed)
				}
				"ANY" => GlobalOption::NewlineMatching(NewlineMatching::AnyUnicode),
				"NUL" => GlobalOption::NewlineMatching(NewlineMatching::NulCharacter),
				"BSR_ANYCRLF" => GlobalOption::NewlineSequenceMatching(
					NewlineSequenceMatching::AnyCarriageReturnOrLinefeed,
				),
				"BSR_UNICODE" => {
					GlobalOption::NewlineSequenceMatching(NewlineSequenceMatching::AnyUnicode)
				}
				// Not a global option; `(*FAIL)` and friends are atoms.
				_ => {
					self.reader.backup(start);
					break;
				}
			};
			self.expect(')')?;
			options.push(Located::new(option, self.reader.span_from(start)));
		}
		Ok(options)
	}

	fn lex_limit(&mut self) -> ParseResult<u32> {
		if !self.reader.eat('=') {
			bail!(ParseErrorKind::ExpectedEquals, @self.reader.next_char_span());
		}
		let (number, _) = self.lex_number()?;
		Ok(number)
	}
}
