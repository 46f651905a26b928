//! Parsing of custom character classes.
//!
//! Member runs accumulate until `]` or a binary operator. Each operator
//! folds the members so far into the left side of a set operation, which
//! makes chains like `a&&b--c` left-associative.

use std::mem;

use crate::ast::{ClassMember, ClassRange, CustomCharacterClass, SetOperation};
use crate::span::Span;
use crate::syn::error::{bail, ParseErrorKind, ParseResult};

use super::Parser;

impl Parser<'_> {
	/// Parse a custom character class, or return `None` when the input
	/// doesn't start one.
	pub(crate) fn parse_custom_class(&mut self) -> ParseResult<Option<CustomCharacterClass>> {
		let Some(start) = self.lexer.lex_custom_class_start(&self.ctx)? else {
			return Ok(None);
		};

		self.enter_recursion(start.span)?;
		let was_in_class = mem::replace(&mut self.ctx.in_custom_character_class, true);
		let result = self.parse_custom_class_body();
		self.ctx.in_custom_character_class = was_in_class;
		self.exit_recursion();
		let (members, close) = result?;

		let span = start.span.covers(close);
		if !members.iter().any(|x| !matches!(x, ClassMember::Trivia(_))) {
			bail!(ParseErrorKind::ExpectedCustomCharacterClassMembers, @span);
		}
		Ok(Some(CustomCharacterClass {
			span,
			start,
			members,
		}))
	}

	/// Parse members and set operations up to and including the closing `]`.
	fn parse_custom_class_body(&mut self) -> ParseResult<(Vec<ClassMember>, Span)> {
		let mut members = self.parse_class_member_run()?;
		loop {
			if let Some(op) = self.lexer.lex_custom_class_bin_op(&self.ctx)? {
				if !members.iter().any(|x| !matches!(x, ClassMember::Trivia(_))) {
					bail!(ParseErrorKind::ExpectedCustomCharacterClassMembers, @op.span);
				}
				let rhs = self.parse_class_member_run()?;
				if !rhs.iter().any(|x| !matches!(x, ClassMember::Trivia(_))) {
					bail!(
						ParseErrorKind::ExpectedCustomCharacterClassMembers,
						@self.lexer.reader.next_char_span()
					);
				}
				members = vec![ClassMember::SetOperation(SetOperation {
					lhs: members,
					op,
					rhs,
				})];
				continue;
			}

			let close = self.lexer.reader.next_char_span();
			if self.lexer.reader.eat(']') {
				return Ok((members, close));
			}
			// The member run only stops at `]`, an operator or the end.
			bail!(
				ParseErrorKind::UnexpectedEndOfInput {
					expected: "`]` to close the character class",
				},
				@self.lexer.reader.span_here()
			);
		}
	}

	/// Parse a run of plain members, stopping before `]`, an operator or the
	/// end of input.
	fn parse_class_member_run(&mut self) -> ParseResult<Vec<ClassMember>> {
		let mut members = Vec::new();
		loop {
			while let Some(trivia) = self.lexer.lex_trivia(&self.ctx)? {
				members.push(ClassMember::Trivia(trivia));
			}
			match self.lexer.reader.peek() {
				None | Some(']') => break,
				_ => {}
			}
			if self.lexer.reader.starts_with("&&")
				|| self.lexer.reader.starts_with("--")
				|| self.lexer.reader.starts_with("~~")
			{
				break;
			}

			if let Some(posix) = self.lexer.lex_posix_class(&self.ctx)? {
				members.push(ClassMember::Atom(posix));
				continue;
			}
			if let Some(class) = self.parse_custom_class()? {
				members.push(ClassMember::Class(class));
				continue;
			}
			if let Some(quote) = self.lexer.lex_quote(&self.ctx)? {
				members.push(ClassMember::Quote(quote));
				continue;
			}

			let Some(atom) = self.lexer.lex_atom(&self.ctx)? else {
				break;
			};
			if let Some((dash, rhs)) = self.lexer.lex_custom_class_range_end(&self.ctx)? {
				if atom.literal_char().is_none() {
					bail!(ParseErrorKind::InvalidCharacterClassRangeOperand, @atom.span);
				}
				if rhs.literal_char().is_none() {
					bail!(ParseErrorKind::InvalidCharacterClassRangeOperand, @rhs.span);
				}
				members.push(ClassMember::Range(ClassRange {
					lhs: atom,
					dash,
					rhs,
				}));
				continue;
			}
			members.push(ClassMember::Atom(atom));
		}
		Ok(members)
	}
}
