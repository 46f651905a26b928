//! Module implementing the regex parser.
//!
//! The parser is a relatively simple recursive descent parser. Most of its
//! functions peek a char through the lexer's scanners and then decide which
//! path to take. There is no token stream; each scanner is called at exactly
//! the positions where its construct may appear, and each either consumes a
//! whole construct or restores the reader.
//!
//! # Implementation details
//!
//! The parser threads a [`ParsingContext`] through the lexer calls. The
//! context carries the three pieces of state which make regex lexing
//! context-sensitive: whether the parser is inside a custom character class,
//! how many capturing groups have been opened so far (which decides whether
//! `\12` is a back-reference or an octal escape), and which group names have
//! been seen. It also carries the [`SyntaxOptions`] for the parse.
//!
//! Nesting constructs (groups, classes, conditionals, absent functions)
//! count against a fixed depth limit so that a pathological pattern cannot
//! overflow the stack.

pub(crate) mod class;
pub(crate) mod conditional;
pub(crate) mod delim;

#[cfg(test)]
pub mod test;

use std::collections::HashSet;

use crate::ast::{
	Alternation, Ast, Concatenation, GlobalMatchingOptions, Group, GroupKind, MatchingOption,
	MatchingOptionSequence, Quantification,
};
use crate::span::Span;
use crate::syn::error::{bail, ParseErrorKind, ParseResult};
use crate::syn::lexer::Lexer;
use crate::syn::options::SyntaxOptions;

/// The state which makes regex lexing context-sensitive, threaded from the
/// parser into every lexer call.
#[non_exhaustive]
pub struct ParsingContext {
	/// Whether the parser is currently inside a custom character class.
	pub in_custom_character_class: bool,
	/// The number of capturing groups whose opening delimiter has been
	/// consumed so far.
	pub prior_group_count: u32,
	/// The names of the named and balanced captures seen so far.
	pub used_group_names: HashSet<String>,
	pub syntax: SyntaxOptions,
}

impl ParsingContext {
	pub(crate) fn new(syntax: SyntaxOptions) -> Self {
		ParsingContext {
			in_custom_character_class: false,
			prior_group_count: 0,
			used_group_names: HashSet::new(),
			syntax,
		}
	}
}

/// The default limit on nesting depth.
const MAX_NESTING_DEPTH: u32 = 256;

/// The regex parser.
#[non_exhaustive]
pub struct Parser<'a> {
	pub(crate) lexer: Lexer<'a>,
	pub(crate) ctx: ParsingContext,
	remaining_depth: u32,
}

impl<'a> Parser<'a> {
	/// Create a new parser for the given pattern.
	pub fn new(input: &'a str, syntax: SyntaxOptions) -> Self {
		Parser {
			lexer: Lexer::new(input),
			ctx: ParsingContext::new(syntax),
			remaining_depth: MAX_NESTING_DEPTH,
		}
	}

	/// Disallow patterns nesting deeper than the given limit.
	pub fn with_depth_limit(mut self, limit: u32) -> Self {
		self.remaining_depth = limit;
		self
	}

	/// Parse the whole pattern. This is the primary entry point.
	pub fn parse_complete(&mut self) -> ParseResult<Ast> {
		let options = self.lexer.lex_global_matching_options()?;
		let ast = self.parse_regex_body()?;
		match self.lexer.reader.peek() {
			None => {}
			Some(')') => {
				bail!(ParseErrorKind::UnbalancedEndOfGroup, @self.lexer.reader.next_char_span())
			}
			Some(found) => {
				// All productions stop only at `|`, `)` or the end of input,
				// so anything else here is unreachable in practice.
				bail!(
					ParseErrorKind::Unexpected {
						found,
						expected: "the end of the pattern",
					},
					@self.lexer.reader.next_char_span()
				)
			}
		}
		if options.is_empty() {
			Ok(ast)
		} else {
			Ok(Ast::GlobalMatchingOptions(GlobalMatchingOptions {
				span: self.lexer.reader.span_from(0),
				options,
				ast: Box::new(ast),
			}))
		}
	}

	/// Parse a `RecursiveRegex`: an alternation, or nothing at all.
	///
	/// Stops before `)` without consuming it.
	pub(crate) fn parse_regex_body(&mut self) -> ParseResult<Ast> {
		let start = self.lexer.reader.offset();
		let first = self.parse_concatenation()?;
		if self.lexer.reader.peek() != Some('|') {
			return Ok(first);
		}

		let mut children = vec![first];
		let mut pipes = Vec::new();
		while self.lexer.reader.peek() == Some('|') {
			pipes.push(self.lexer.reader.next_char_span());
			self.lexer.reader.next();
			children.push(self.parse_concatenation()?);
		}
		Ok(Ast::Alternation(Alternation {
			span: self.lexer.reader.span_from(start),
			children,
			pipes,
		}))
	}

	/// Parse a run of concatenation components.
	///
	/// An empty run is [`Ast::Empty`] and a single component collapses to
	/// itself.
	fn parse_concatenation(&mut self) -> ParseResult<Ast> {
		let start = self.lexer.reader.offset();
		let mut children: Vec<Ast> = Vec::new();
		loop {
			while let Some(trivia) = self.lexer.lex_trivia(&self.ctx)? {
				children.push(Ast::Trivia(trivia));
			}
			match self.lexer.reader.peek() {
				None | Some('|') | Some(')') => break,
				_ => {}
			}
			if let Some(quote) = self.lexer.lex_quote(&self.ctx)? {
				children.push(Ast::Quote(quote));
				continue;
			}
			match self.parse_quantification()? {
				Some(component) => children.push(component),
				None => break,
			}
		}
		match children.len() {
			0 => Ok(Ast::Empty(self.lexer.reader.span_from(start))),
			1 => Ok(children.into_iter().next().unwrap()),
			_ => Ok(Ast::Concatenation(Concatenation {
				span: self.lexer.reader.span_from(start),
				children,
			})),
		}
	}

	/// Parse an operand with an optional quantifier.
	fn parse_quantification(&mut self) -> ParseResult<Option<Ast>> {
		let operand = self.parse_quantifier_operand()?;
		if let Some((amount, kind)) = self.lexer.lex_quantifier(&self.ctx)? {
			let quantifier_span = amount.span.covers(kind.span);
			let Some(operand) = operand else {
				bail!(ParseErrorKind::NotQuantifiable, @quantifier_span);
			};
			if !operand.is_quantifiable() {
				bail!(ParseErrorKind::NotQuantifiable, @quantifier_span);
			}
			let span = operand.span().covers(quantifier_span);
			return Ok(Some(Ast::Quantification(Quantification {
				span,
				amount,
				kind,
				operand: Box::new(operand),
			})));
		}
		Ok(operand)
	}

	/// Parse a single quantifiable operand.
	fn parse_quantifier_operand(&mut self) -> ParseResult<Option<Ast>> {
		if let Some(conditional) = self.parse_conditional()? {
			return Ok(Some(conditional));
		}
		if let Some(absent) = self.parse_absent_function()? {
			return Ok(Some(absent));
		}
		if let Some(group) = self.parse_group()? {
			return Ok(Some(Ast::Group(group)));
		}
		if let Some(class) = self.parse_custom_class()? {
			return Ok(Some(Ast::CustomCharacterClass(class)));
		}
		if let Some(atom) = self.lexer.lex_atom(&self.ctx)? {
			return Ok(Some(Ast::Atom(atom)));
		}
		Ok(None)
	}

	/// Parse a group, recording captures in the context as soon as the
	/// opening delimiter is consumed so that `(a\1)` sees its own group.
	pub(crate) fn parse_group(&mut self) -> ParseResult<Option<Group>> {
		let Some(kind) = self.lexer.lex_group_start(&self.ctx)? else {
			return Ok(None);
		};

		if kind.value.is_capturing() {
			self.ctx.prior_group_count += 1;
		}
		if let Some(name) = kind.value.name() {
			self.ctx.used_group_names.insert(name.to_owned());
		}

		// `x` and `xx` change what the lexer itself does, so option changes
		// apply to the syntax options for the scope of the group.
		let saved_syntax = self.ctx.syntax;
		if let GroupKind::ChangeMatchingOptions {
			sequence,
			..
		} = &kind.value
		{
			apply_matching_options(&mut self.ctx.syntax, sequence);
		}

		if kind.value.has_implicit_scope() {
			// The isolated option change applies to the remainder of the
			// enclosing group, including any later alternation branches.
			let child = self.parse_regex_body()?;
			self.ctx.syntax = saved_syntax;
			let span = kind.span.covers(child.span());
			return Ok(Some(Group {
				span,
				kind,
				child: Box::new(child),
			}));
		}

		self.enter_recursion(kind.span)?;
		let child = self.parse_regex_body()?;
		self.exit_recursion();
		self.ctx.syntax = saved_syntax;
		let close = self.expect_group_closer(kind.span)?;
		Ok(Some(Group {
			span: kind.span.covers(close),
			kind,
			child: Box::new(child),
		}))
	}

	/// Require the `)` which closes a group opened at `opened`.
	pub(crate) fn expect_group_closer(&mut self, opened: Span) -> ParseResult<Span> {
		let span = self.lexer.reader.next_char_span();
		if self.lexer.reader.eat(')') {
			Ok(span)
		} else {
			bail!(
				ParseErrorKind::ExpectedGroupCloser {
					opened,
				},
				@span
			)
		}
	}

	pub(crate) fn enter_recursion(&mut self, at: Span) -> ParseResult<()> {
		if self.remaining_depth == 0 {
			bail!(ParseErrorKind::ExceededDepthLimit, @at);
		}
		self.remaining_depth -= 1;
		Ok(())
	}

	pub(crate) fn exit_recursion(&mut self) {
		self.remaining_depth += 1;
	}
}

/// Apply the whitespace-relevant part of a matching option sequence to the
/// active syntax options.
fn apply_matching_options(syntax: &mut SyntaxOptions, sequence: &MatchingOptionSequence) {
	if sequence.caret.is_some() {
		syntax.extended_syntax = false;
		syntax.non_semantic_whitespace = false;
	}
	for option in sequence.adding.iter() {
		if matches!(option.value, MatchingOption::Extended | MatchingOption::ExtraExtended) {
			syntax.extended_syntax = true;
			syntax.non_semantic_whitespace = true;
		}
	}
	for option in sequence.removing.iter() {
		if matches!(option.value, MatchingOption::Extended | MatchingOption::ExtraExtended) {
			syntax.extended_syntax = false;
			syntax.non_semantic_whitespace = false;
		}
	}
}
