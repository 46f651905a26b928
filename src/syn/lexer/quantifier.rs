//! Lexing of quantifiers.

use crate::ast::{Amount, QuantKind};
use crate::span::Located;
use crate::syn::error::{bail, ParseErrorKind, ParseResult};
use crate::syn::parser::ParsingContext;

use super::Lexer;

impl Lexer<'_> {
	/// Lex a quantifier: `*`, `+`, `?`, `{n}`, `{n,}`, `{,n}` or `{n,m}`,
	/// followed by an optional `?` (reluctant) or `+` (possessive).
	///
	/// Braces which don't form a quantifier are restored and re-lexed as
	/// literals, matching PCRE's treatment of `a{x}`. A `{lo,hi}` which
	/// *does* form a quantifier commits, so an out-of-order range is an
	/// error rather than a literal.
	pub fn lex_quantifier(
		&mut self,
		ctx: &ParsingContext,
	) -> ParseResult<Option<(Located<Amount>, Located<QuantKind>)>> {
		let start = self.reader.offset();

		// In the extended syntaxes a quantifier may be separated from its
		// operand by trivia, as in `a *`. That trivia is consumed here.
		while self.lex_trivia(ctx)?.is_some() {}

		let amount_start = self.reader.offset();
		let amount = match self.reader.peek() {
			Some('*') => {
				self.reader.next();
				Amount::ZeroOrMore
			}
			Some('+') => {
				self.reader.next();
				Amount::OneOrMore
			}
			Some('?') => {
				self.reader.next();
				Amount::ZeroOrOne
			}
			Some('{') => match self.lex_braced_amount(amount_start)? {
				Some(amount) => amount,
				None => {
					self.reader.backup(start);
					return Ok(None);
				}
			},
			_ => {
				self.reader.backup(start);
				return Ok(None);
			}
		};
		let amount = Located::new(amount, self.reader.span_from(amount_start));

		let kind_span = self.reader.next_char_span();
		let kind = if self.reader.eat('?') {
			Located::new(QuantKind::Reluctant, kind_span)
		} else if self.reader.eat('+') {
			Located::new(QuantKind::Possessive, kind_span)
		} else {
			Located::new(QuantKind::Eager, self.reader.span_here())
		};

		Ok(Some((amount, kind)))
	}

	/// Lex the inside of a `{…}` amount. Returns `None` if the braces don't
	/// have quantifier shape; the caller restores the reader.
	fn lex_braced_amount(&mut self, start: u32) -> ParseResult<Option<Amount>> {
		self.reader.next();

		let low = self.lex_optional_number()?;
		if self.reader.eat(',') {
			let high = self.lex_optional_number()?;
			if !self.reader.eat('}') {
				return Ok(None);
			}
			match (low, high) {
				(Some(low), Some(high)) => {
					if low > high {
						bail!(
							ParseErrorKind::InvalidQuantifierRange {
								low,
								high,
							},
							@self.reader.span_from(start)
						);
					}
					Ok(Some(Amount::Range(low, high)))
				}
				(Some(low), None) => Ok(Some(Amount::NOrMore(low))),
				(None, Some(high)) => Ok(Some(Amount::UpToN(high))),
				(None, None) => Ok(None),
			}
		} else {
			if !self.reader.eat('}') {
				return Ok(None);
			}
			match low {
				Some(n) => Ok(Some(Amount::Exactly(n))),
				None => Ok(None),
			}
		}
	}

	fn lex_optional_number(&mut self) -> ParseResult<Option<u32>> {
		if self.reader.peek().map(|x| x.is_ascii_digit()).unwrap_or(false) {
			let (number, _) = self.lex_number()?;
			Ok(Some(number))
		} else {
			Ok(None)
		}
	}
}
