//! Lexing of escape sequences.
//!
//! The back-reference / octal ambiguity lives here: `\12` is a back-reference
//! when at least twelve capturing groups were opened before it, and an octal
//! scalar otherwise.

use crate::ast::{Atom, AtomKind, EscapedChar, Reference, ReferenceKind};
use crate::span::{Located, Span};
use crate::syn::error::{bail, ParseErrorKind, ParseResult};
use crate::syn::parser::ParsingContext;

use super::Lexer;

impl Lexer<'_> {
	/// Lex an atom starting with `\`.
	pub(super) fn lex_escaped_atom(&mut self, ctx: &ParsingContext) -> ParseResult<Option<Atom>> {
		let start = self.reader.offset();
		if !self.reader.eat('\\') {
			return Ok(None);
		}
		let Some(c) = self.reader.next() else {
			bail!(
				ParseErrorKind::UnexpectedEndOfInput {
					expected: "an escape sequence",
				},
				@self.reader.span_here()
			);
		};

		let kind = match c {
			'1'..='9' if !ctx.in_custom_character_class => {
				self.lex_backreference_or_octal(ctx, c)?
			}
			'0'..='9' => self.lex_octal(c)?,
			'o' => {
				if !self.reader.eat('{') {
					bail!(ParseErrorKind::ExpectedBrace, @self.reader.next_char_span());
				}
				let (value, span) = self.lex_radix_digits(8, "`}`")?;
				self.expect('}')?;
				AtomKind::Scalar(scalar_value(value, span)?)
			}
			'x' => {
				if self.reader.eat('{') {
					let (value, span) = self.lex_radix_digits(16, "`}`")?;
					self.expect('}')?;
					AtomKind::Scalar(scalar_value(value, span)?)
				} else {
					// Up to two hex digits; a bare `\x` is NUL.
					let mut value = 0u32;
					for _ in 0..2 {
						let Some(d) = self.reader.eat_when(|x| x.is_ascii_hexdigit()) else {
							break;
						};
						value = value * 16 + d.to_digit(16).unwrap();
					}
					AtomKind::Scalar(scalar_value(value, self.reader.span_from(start))?)
				}
			}
			'u' => {
				if self.reader.eat('{') {
					let (value, span) = self.lex_radix_digits(16, "`}`")?;
					self.expect('}')?;
					AtomKind::Scalar(scalar_value(value, span)?)
				} else {
					let (value, span) = self.lex_exact_hex_digits(4)?;
					AtomKind::Scalar(scalar_value(value, span)?)
				}
			}
			'U' => {
				let (value, span) = self.lex_exact_hex_digits(8)?;
				AtomKind::Scalar(scalar_value(value, span)?)
			}
			'N' => {
				if ctx.in_custom_character_class {
					bail!(ParseErrorKind::InvalidEscape('N'), @self.reader.span_from(start));
				}
				if self.reader.eat('{') {
					if self.reader.eat_str("U+") {
						let (value, span) = self.lex_radix_digits(16, "`}`")?;
						self.expect('}')?;
						AtomKind::Scalar(scalar_value(value, span)?)
					} else {
						let mut name = String::new();
						loop {
							match self.reader.next() {
								Some('}') => break,
								Some(c) => name.push(c),
								None => bail!(
									ParseErrorKind::UnexpectedEndOfInput {
										expected: "`}` to close the character name",
									},
									@self.reader.span_here()
								),
							}
						}
						AtomKind::NamedCharacter(name)
					}
				} else {
					AtomKind::Escaped(EscapedChar::NotNewline)
				}
			}
			'p' | 'P' => return self.lex_property(c == 'P', start).map(Some),
			'c' => {
				let Some(target) = self.reader.next() else {
					bail!(
						ParseErrorKind::UnexpectedEndOfInput {
							expected: "a control character",
						},
						@self.reader.span_here()
					);
				};
				AtomKind::KeyboardControl(target)
			}
			'C' => {
				if self.reader.eat('-') {
					let Some(target) = self.reader.next() else {
						bail!(
							ParseErrorKind::UnexpectedEndOfInput {
								expected: "a control character",
							},
							@self.reader.span_here()
						);
					};
					AtomKind::KeyboardControl(target)
				} else if ctx.in_custom_character_class {
					bail!(ParseErrorKind::InvalidEscape('C'), @self.reader.span_from(start));
				} else {
					AtomKind::Escaped(EscapedChar::SingleDataUnit)
				}
			}
			'M' => {
				self.expect('-')?;
				if self.reader.eat_str("\\C-") {
					let Some(target) = self.reader.next() else {
						bail!(
							ParseErrorKind::UnexpectedEndOfInput {
								expected: "a meta control character",
							},
							@self.reader.span_here()
						);
					};
					AtomKind::KeyboardMetaControl(target)
				} else {
					let Some(target) = self.reader.next() else {
						bail!(
							ParseErrorKind::UnexpectedEndOfInput {
								expected: "a meta character",
							},
							@self.reader.span_here()
						);
					};
					AtomKind::KeyboardMeta(target)
				}
			}
			'k' if !ctx.in_custom_character_class => self.lex_named_backreference(start)?,
			'g' if !ctx.in_custom_character_class => self.lex_g_reference(start)?,
			_ => {
				if let Some(escape) = EscapedChar::from_char(c, ctx.in_custom_character_class) {
					AtomKind::Escaped(escape)
				} else if c.is_ascii_alphanumeric() {
					bail!(ParseErrorKind::InvalidEscape(c), @self.reader.span_from(start));
				} else {
					// Escaped punctuation is the literal character.
					AtomKind::Char(c)
				}
			}
		};
		Ok(Some(Atom::new(kind, self.reader.span_from(start))))
	}

	/// Disambiguate `\n` between a back-reference and an octal escape, based
	/// on the number of capturing groups opened so far.
	fn lex_backreference_or_octal(
		&mut self,
		ctx: &ParsingContext,
		first: char,
	) -> ParseResult<AtomKind> {
		let digit_start = self.reader.offset() - first.len_utf8() as u32;
		while self.reader.eat_when(|x| x.is_ascii_digit()).is_some() {}
		let span = self.reader.span_from(digit_start);
		let digits = self.reader.span_text(span);
		let number = parse_number(digits, span)?;

		if number <= ctx.prior_group_count {
			return Ok(AtomKind::Backreference(Reference::new(
				ReferenceKind::Absolute(number),
				span,
			)));
		}
		if digits.len() > 3 {
			bail!(ParseErrorKind::InvalidEscape(first), @span);
		}
		self.reader.backup(digit_start);
		let first = self.reader.next().unwrap();
		self.lex_octal(first)
	}

	/// Lex up to three octal digits, the first already consumed.
	fn lex_octal(&mut self, first: char) -> ParseResult<AtomKind> {
		let start = self.reader.offset() - first.len_utf8() as u32;
		let Some(mut value) = first.to_digit(8) else {
			bail!(ParseErrorKind::InvalidEscape(first), @self.reader.span_from(start));
		};
		for _ in 0..2 {
			let Some(d) = self.reader.eat_when(|x| x.is_digit(8)) else {
				break;
			};
			value = value * 8 + d.to_digit(8).unwrap();
		}
		Ok(AtomKind::Scalar(scalar_value(value, self.reader.span_from(start))?))
	}

	/// Lex `\k<name>`, `\k'name'` and `\k{name}` named back-references, with
	/// an optional Oniguruma recursion level in the angled form.
	fn lex_named_backreference(&mut self, start: u32) -> ParseResult<AtomKind> {
		let (terminator, allow_level) = match self.reader.next() {
			Some('<') => ('>', true),
			Some('\'') => ('\'', true),
			Some('{') => ('}', false),
			_ => bail!(ParseErrorKind::InvalidEscape('k'), @self.reader.span_from(start)),
		};
		let (name, name_span) = self.lex_reference_name()?;
		let mut reference = Reference::new(ReferenceKind::Named(name), name_span);
		if allow_level {
			reference.recursion_level = self.lex_recursion_level()?;
		}
		self.expect(terminator)?;
		Ok(AtomKind::Backreference(reference))
	}

	/// Lex the `\g` family: braced and bare forms are back-references,
	/// angled and quoted forms are subpattern calls.
	fn lex_g_reference(&mut self, start: u32) -> ParseResult<AtomKind> {
		if self.reader.eat('{') {
			let reference = self.lex_number_or_name_reference()?;
			self.expect('}')?;
			return Ok(AtomKind::Backreference(reference));
		}
		if self.reader.eat('<') {
			let reference = self.lex_number_or_name_reference()?;
			self.expect('>')?;
			return Ok(AtomKind::Subpattern(reference));
		}
		if self.reader.eat('\'') {
			let reference = self.lex_number_or_name_reference()?;
			self.expect('\'')?;
			return Ok(AtomKind::Subpattern(reference));
		}
		// Bare `\g1`, `\g+1`, `\g-1`.
		if matches!(self.reader.peek(), Some('+' | '-'))
			&& self.reader.peek_at(1).map(|x| x.is_ascii_digit()).unwrap_or(false)
			|| self.reader.peek().map(|x| x.is_ascii_digit()).unwrap_or(false)
		{
			let reference = self.lex_number_or_name_reference()?;
			return Ok(AtomKind::Backreference(reference));
		}
		bail!(ParseErrorKind::InvalidEscape('g'), @self.reader.span_from(start))
	}

	/// Lex a signed number, unsigned number or name reference body.
	fn lex_number_or_name_reference(&mut self) -> ParseResult<Reference> {
		let start = self.reader.offset();
		match self.reader.peek() {
			Some('+' | '-') => {
				let negative = self.reader.next() == Some('-');
				let (number, _) = self.lex_number()?;
				let span = self.reader.span_from(start);
				if number == 0 {
					bail!(ParseErrorKind::ExpectedNumber, @span);
				}
				let offset = number as i32;
				Ok(Reference::new(
					ReferenceKind::Relative(if negative {
						-offset
					} else {
						offset
					}),
					span,
				))
			}
			Some(c) if c.is_ascii_digit() => {
				let (number, span) = self.lex_number()?;
				Ok(Reference::new(ReferenceKind::Absolute(number), span))
			}
			_ => {
				let (name, span) = self.lex_reference_name()?;
				Ok(Reference::new(ReferenceKind::Named(name), span))
			}
		}
	}

	/// Lex a run of word characters forming a group name.
	pub(super) fn lex_reference_name(&mut self) -> ParseResult<(String, Span)> {
		let start = self.reader.offset();
		while self.reader.eat_when(is_word_char).is_some() {}
		let span = self.reader.span_from(start);
		if span.is_empty() {
			match self.reader.peek() {
				Some(c) => bail!(
					ParseErrorKind::Unexpected {
						found: c,
						expected: "a group name",
					},
					@self.reader.next_char_span()
				),
				None => bail!(
					ParseErrorKind::UnexpectedEndOfInput {
						expected: "a group name",
					},
					@self.reader.span_here()
				),
			}
		}
		Ok((self.reader.span_text(span).to_owned(), span))
	}

	/// Lex an optional `+n` / `-n` recursion level.
	fn lex_recursion_level(&mut self) -> ParseResult<Option<Located<i32>>> {
		let start = self.reader.offset();
		let negative = match self.reader.peek() {
			Some('+') => false,
			Some('-') => true,
			_ => return Ok(None),
		};
		self.reader.next();
		let (number, _) = self.lex_number()?;
		let span = self.reader.span_from(start);
		let level = number as i32;
		Ok(Some(Located::new(
			if negative {
				-level
			} else {
				level
			},
			span,
		)))
	}

	/// Lex a run of decimal digits.
	pub(super) fn lex_number(&mut self) -> ParseResult<(u32, Span)> {
		let start = self.reader.offset();
		while self.reader.eat_when(|x| x.is_ascii_digit()).is_some() {}
		let span = self.reader.span_from(start);
		if span.is_empty() {
			bail!(ParseErrorKind::ExpectedNumber, @self.reader.next_char_span());
		}
		Ok((parse_number(self.reader.span_text(span), span)?, span))
	}

	/// Lex one or more digits in the given radix, up to the closing
	/// delimiter.
	fn lex_radix_digits(&mut self, radix: u32, closer: &'static str) -> ParseResult<(u32, Span)> {
		let start = self.reader.offset();
		let mut value: u32 = 0;
		let mut any = false;
		while let Some(d) = self.reader.eat_when(|x| x.is_digit(radix)) {
			any = true;
			value = value
				.checked_mul(radix)
				.and_then(|x| x.checked_add(d.to_digit(radix).unwrap()))
				.ok_or_else(|| {
					crate::syn::error::ParseError::new(
						ParseErrorKind::NumberOverflow,
						self.reader.span_from(start),
					)
				})?;
		}
		if !any {
			if self.reader.is_empty() {
				bail!(
					ParseErrorKind::UnexpectedEndOfInput {
						expected: closer,
					},
					@self.reader.span_here()
				);
			}
			bail!(ParseErrorKind::ExpectedNumber, @self.reader.next_char_span());
		}
		Ok((value, self.reader.span_from(start)))
	}

	/// Lex exactly `count` hex digits.
	fn lex_exact_hex_digits(&mut self, count: u32) -> ParseResult<(u32, Span)> {
		let start = self.reader.offset();
		let mut value: u32 = 0;
		for _ in 0..count {
			let Some(d) = self.reader.eat_when(|x| x.is_ascii_hexdigit()) else {
				bail!(ParseErrorKind::ExpectedNumber, @self.reader.next_char_span());
			};
			value = value.wrapping_mul(16).wrapping_add(d.to_digit(16).unwrap());
		}
		Ok((value, self.reader.span_from(start)))
	}
}

/// Convert a number to a unicode scalar value.
fn scalar_value(value: u32, span: Span) -> ParseResult<char> {
	char::from_u32(value)
		.ok_or_else(|| crate::syn::error::ParseError::new(ParseErrorKind::InvalidUnicodeScalar, span))
}

fn parse_number(digits: &str, span: Span) -> ParseResult<u32> {
	digits
		.parse::<u32>()
		.map_err(|_| crate::syn::error::ParseError::new(ParseErrorKind::NumberOverflow, span))
}

pub(super) fn is_word_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_'
}
