//! Lexing of custom character class delimiters and operators.

use crate::ast::{Atom, ClassStart, SetOp};
use crate::span::{Located, Span};
use crate::syn::error::ParseResult;
use crate::syn::parser::ParsingContext;

use super::Lexer;

impl Lexer<'_> {
	/// Lex the opening `[` or `[^` of a custom character class.
	///
	/// Inside a class the caller tries [`Lexer::lex_posix_class`] first, so
	/// `[:alpha:]` never arrives here as a nested class.
	pub fn lex_custom_class_start(
		&mut self,
		_ctx: &ParsingContext,
	) -> ParseResult<Option<Located<ClassStart>>> {
		let start = self.reader.offset();
		if !self.reader.eat('[') {
			return Ok(None);
		}
		let kind = if self.reader.eat('^') {
			ClassStart::Inverted
		} else {
			ClassStart::Normal
		};
		Ok(Some(Located::new(kind, self.reader.span_from(start))))
	}

	/// Lex a set operator, `&&`, `--` or `~~`.
	///
	/// Only meaningful inside a custom character class; a single `&`, `-` or
	/// `~` stays a literal member.
	pub fn lex_custom_class_bin_op(
		&mut self,
		ctx: &ParsingContext,
	) -> ParseResult<Option<Located<SetOp>>> {
		if !ctx.in_custom_character_class {
			return Ok(None);
		}
		let start = self.reader.offset();
		let op = if self.reader.eat_str("&&") {
			SetOp::Intersection
		} else if self.reader.eat_str("--") {
			SetOp::Subtraction
		} else if self.reader.eat_str("~~") {
			SetOp::SymmetricDifference
		} else {
			return Ok(None);
		};
		Ok(Some(Located::new(op, self.reader.span_from(start))))
	}

	/// After a class member atom, lex `-X` turning the pair into a range.
	///
	/// `-]` keeps the dash a literal member and `--` is the subtraction
	/// operator, so neither starts a range.
	pub fn lex_custom_class_range_end(
		&mut self,
		ctx: &ParsingContext,
	) -> ParseResult<Option<(Span, Atom)>> {
		let start = self.reader.offset();
		if self.reader.peek() != Some('-') {
			return Ok(None);
		}
		match self.reader.peek_at(1) {
			None | Some(']') | Some('-') => return Ok(None),
			_ => {}
		}
		let dash = self.reader.next_char_span();
		self.reader.next();
		let Some(rhs) = self.lex_atom(ctx)? else {
			self.reader.backup(start);
			return Ok(None);
		};
		Ok(Some((dash, rhs)))
	}
}
