//! The regex lexer.
//!
//! The lexer is not a token stream; it is a collection of context-sensitive
//! scanners the parser calls on demand. Context matters everywhere: `\1` is a
//! back-reference or an octal escape depending on how many capturing groups
//! were opened before it, `-` and `]` change meaning inside a custom
//! character class, and `(?` can introduce several dozen constructs.
//!
//! Every scanner follows the same discipline: record the reader offset before
//! doing anything, and on failure restore it so that no input is consumed.
//! On success exactly the matched bytes are consumed.

mod class;
mod escape;
mod group;
mod property;
mod quantifier;
mod reader;

#[cfg(test)]
mod test;

pub use reader::Reader;

pub(crate) use group::AbsentStart;

use crate::ast::{Atom, AtomKind, Quote, Trivia};
use crate::span::Span;
use crate::syn::error::{bail, ParseErrorKind, ParseResult};
use crate::syn::parser::ParsingContext;

/// The regex lexer.
///
/// Wraps the [`Reader`] and exposes one method per scanner. The lexer itself
/// is stateless; all context it needs is passed in through the
/// [`ParsingContext`].
#[non_exhaustive]
pub struct Lexer<'a> {
	pub(crate) reader: Reader<'a>,
}

impl<'a> Lexer<'a> {
	/// Create a new lexer.
	pub fn new(source: &'a str) -> Lexer<'a> {
		Lexer {
			reader: Reader::new(source),
		}
	}

	/// Require the next char to be the given one, returning its span.
	pub(crate) fn expect(&mut self, c: char) -> ParseResult<Span> {
		let span = self.reader.next_char_span();
		if self.reader.eat(c) {
			Ok(span)
		} else {
			bail!(ParseErrorKind::Expected(c), @span)
		}
	}

	/// Lex a `(?#…)` comment.
	pub fn lex_comment(&mut self, ctx: &ParsingContext) -> ParseResult<Option<Trivia>> {
		let start = self.reader.offset();
		if ctx.in_custom_character_class || !self.reader.eat_str("(?#") {
			return Ok(None);
		}
		let content_start = self.reader.offset();
		loop {
			match self.reader.peek() {
				Some(')') => break,
				Some(_) => {
					self.reader.next();
				}
				None => {
					bail!(
						ParseErrorKind::UnexpectedEndOfInput {
							expected: "`)` to close the comment",
						},
						@self.reader.span_here()
					)
				}
			}
		}
		let contents = self.reader.span_text(self.reader.span_from(content_start)).to_owned();
		self.reader.next();
		Ok(Some(Trivia {
			span: self.reader.span_from(start),
			contents,
		}))
	}

	/// Lex a run of non-semantic whitespace, or a `#…` line comment under the
	/// extended syntax.
	pub fn lex_non_semantic_whitespace(
		&mut self,
		ctx: &ParsingContext,
	) -> ParseResult<Option<Trivia>> {
		let start = self.reader.offset();

		if ctx.syntax.skips_whitespace() {
			while self.reader.eat_when(is_pattern_whitespace).is_some() {}
			if self.reader.offset() != start {
				let span = self.reader.span_from(start);
				return Ok(Some(Trivia {
					span,
					contents: self.reader.span_text(span).to_owned(),
				}));
			}
		}

		if ctx.syntax.hash_comments()
			&& !ctx.in_custom_character_class
			&& self.reader.peek() == Some('#')
		{
			while let Some(c) = self.reader.next() {
				if c == '\n' {
					break;
				}
			}
			let span = self.reader.span_from(start);
			return Ok(Some(Trivia {
				span,
				contents: self.reader.span_text(span).to_owned(),
			}));
		}

		Ok(None)
	}

	/// Lex a single piece of trivia of either kind.
	pub fn lex_trivia(&mut self, ctx: &ParsingContext) -> ParseResult<Option<Trivia>> {
		if let Some(comment) = self.lex_comment(ctx)? {
			return Ok(Some(comment));
		}
		self.lex_non_semantic_whitespace(ctx)
	}

	/// Lex a quoted literal sequence, `\Q…\E` or PCRE's `\q{…}`.
	///
	/// An unterminated `\Q` runs to the end of the pattern.
	pub fn lex_quote(&mut self, ctx: &ParsingContext) -> ParseResult<Option<Quote>> {
		let start = self.reader.offset();

		if self.reader.eat_str("\\Q") {
			let mut literal = String::new();
			while let Some(c) = self.reader.peek() {
				if self.reader.eat_str("\\E") {
					return Ok(Some(Quote {
						span: self.reader.span_from(start),
						literal,
					}));
				}
				literal.push(c);
				self.reader.next();
			}
			return Ok(Some(Quote {
				span: self.reader.span_from(start),
				literal,
			}));
		}

		if ctx.syntax.pcre && self.reader.eat_str("\\q") {
			if !self.reader.eat('{') {
				bail!(ParseErrorKind::ExpectedBrace, @self.reader.next_char_span());
			}
			let mut literal = String::new();
			loop {
				match self.reader.next() {
					Some('}') => break,
					Some(c) => literal.push(c),
					None => {
						bail!(
							ParseErrorKind::UnexpectedEndOfInput {
								expected: "`}` to close the quote",
							},
							@self.reader.span_here()
						)
					}
				}
			}
			return Ok(Some(Quote {
				span: self.reader.span_from(start),
				literal,
			}));
		}

		Ok(None)
	}

	/// Lex a single atom, or return `None` at a position where the current
	/// production ends (`|`, `)` and end of input outside custom character
	/// classes, `]` inside them).
	pub fn lex_atom(&mut self, ctx: &ParsingContext) -> ParseResult<Option<Atom>> {
		let start = self.reader.offset();
		let Some(c) = self.reader.peek() else {
			return Ok(None);
		};

		if ctx.in_custom_character_class {
			match c {
				']' => return Ok(None),
				'\\' => return self.lex_escaped_atom(ctx),
				_ => {
					self.reader.next();
					return Ok(Some(Atom::new(AtomKind::Char(c), self.reader.span_from(start))));
				}
			}
		}

		let kind = match c {
			'|' | ')' => return Ok(None),
			// Quantifier characters are never atoms; the caller reports
			// `NotQuantifiable` when they show up without an operand.
			'*' | '+' | '?' => return Ok(None),
			'(' => return self.lex_paren_atom(ctx),
			'\\' => return self.lex_escaped_atom(ctx),
			'^' => AtomKind::StartOfLine,
			'$' => AtomKind::EndOfLine,
			'.' => AtomKind::Any,
			_ => AtomKind::Char(c),
		};
		self.reader.next();
		Ok(Some(Atom::new(kind, self.reader.span_from(start))))
	}
}

/// The characters the extended syntaxes treat as non-semantic.
fn is_pattern_whitespace(c: char) -> bool {
	matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{B}' | '\u{C}')
}
