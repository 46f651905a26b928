//! Parser error types and source snippet rendering.

use std::fmt;

use thiserror::Error;

use crate::span::{Location, Span};

/// The result returned by most lexer and parser functions.
pub type ParseResult<T> = Result<T, ParseError>;

/// The reason a pattern failed to parse.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
	/// The pattern ended while a construct was still being lexed.
	#[error("unexpected end of pattern, expected {expected}")]
	UnexpectedEndOfInput {
		expected: &'static str,
	},
	/// The lexer found a character it can't accept at this position.
	#[error("unexpected character {found:?}, expected {expected}")]
	Unexpected {
		found: char,
		expected: &'static str,
	},
	/// A specific character had to be next.
	#[error("expected `{0}`")]
	Expected(char),
	/// An escape which requires a braced body was missing its `{`.
	#[error("expected `{{`")]
	ExpectedBrace,
	#[error("expected a number")]
	ExpectedNumber,
	/// A number too large for the construct it appears in.
	#[error("number is too large")]
	NumberOverflow,
	#[error("expected `=`")]
	ExpectedEquals,
	/// An escape sequence the dialects don't define, e.g. `\i`.
	#[error("invalid escape sequence `\\{0}`")]
	InvalidEscape(char),
	/// A scalar escape which does not denote a unicode scalar value.
	#[error("invalid unicode scalar value")]
	InvalidUnicodeScalar,
	/// A `{lo,hi}` quantifier with `lo > hi`.
	#[error("quantifier range is out of order, {low} is greater than {high}")]
	InvalidQuantifierRange {
		low: u32,
		high: u32,
	},
	/// A known property key carried a value which isn't part of that key's
	/// domain, e.g. `\p{gc=Banana}`.
	#[error("unknown value `{value}` for character property key `{key}`")]
	UnknownProperty {
		key: String,
		value: String,
	},
	/// A `)` with no group left open.
	#[error("closing parenthesis does not balance any open group")]
	UnbalancedEndOfGroup,
	/// A group body ran out before its `)`.
	#[error("expected `)` to close the group")]
	ExpectedGroupCloser {
		/// The span of the delimiter which opened the group.
		opened: Span,
	},
	/// A conditional ran out before its `)`.
	#[error("expected `)` to close the conditional")]
	ExpectedConditionalCloser {
		/// The span of the `(?(` which opened the conditional.
		opened: Span,
	},
	/// `(?` introduced something no dialect defines.
	#[error("unknown group kind `(?{0}`")]
	UnknownGroupKind(String),
	/// `(?(` introduced something which is neither a known condition nor a
	/// condition group.
	#[error("unknown conditional condition")]
	UnknownConditionalStart,
	/// The pattern passed to [`parse_with_delimiters`](crate::parse_with_delimiters)
	/// doesn't start with a recognized delimiter.
	#[error("unknown pattern delimiter")]
	UnknownDelimiter,
	/// A quantifier was applied to something which can't be repeated.
	#[error("this expression cannot be quantified")]
	NotQuantifiable,
	/// A conditional body with more than two alternation branches.
	#[error("conditional can have at most two branches, found {0}")]
	TooManyBranchesInConditional(u32),
	/// An absent expression with more than two alternation branches.
	#[error("absent expression can have at most two children, found {0}")]
	TooManyAbsentExpressionChildren(u32),
	/// A custom character class, or one side of a set operation, without any
	/// members.
	#[error("expected at least one member in the character class")]
	ExpectedCustomCharacterClassMembers,
	/// A `-` range with an endpoint which doesn't stand for a single
	/// character, e.g. `[a-\d]`.
	#[error("range operands must be single characters")]
	InvalidCharacterClassRangeOperand,
	/// The pattern nests deeper than the parser's depth limit.
	#[error("parsing exceeded the nesting depth limit")]
	ExceededDepthLimit,
}

/// A located parsing error.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
#[non_exhaustive]
pub struct ParseError {
	pub kind: ParseErrorKind,
	/// Where in the pattern the error applies.
	pub at: Span,
}

impl ParseError {
	/// Create a new parse error.
	pub fn new(kind: ParseErrorKind, at: Span) -> Self {
		ParseError {
			kind,
			at,
		}
	}

	/// Create a rendered error from the pattern this error was generated
	/// from.
	pub fn render_on(&self, source: &str) -> RenderedError {
		let text = self.kind.to_string();
		let mut snippets = vec![Snippet::from_span(source, self.at, None)];
		match self.kind {
			ParseErrorKind::ExpectedGroupCloser {
				opened,
			} => {
				snippets.push(Snippet::from_span(
					source,
					opened,
					Some("expected this group to be closed"),
				));
			}
			ParseErrorKind::ExpectedConditionalCloser {
				opened,
			} => {
				snippets.push(Snippet::from_span(
					source,
					opened,
					Some("expected this conditional to be closed"),
				));
			}
			_ => {}
		}
		RenderedError {
			text,
			snippets,
		}
	}
}

/// A macro for returning a located parse error early.
macro_rules! bail {
	($kind:expr, @$span:expr) => {
		return Err($crate::syn::error::ParseError::new($kind, $span))
	};
}
pub(crate) use bail;

/// An error rendered against its source, with `^^^` markers under the
/// offending text.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct RenderedError {
	pub text: String,
	pub snippets: Vec<Snippet>,
}

impl fmt::Display for RenderedError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}", self.text)?;
		for snippet in self.snippets.iter() {
			writeln!(f, "{snippet}")?;
		}
		Ok(())
	}
}

/// A piece of the pattern with a location and an optional explanation.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Snippet {
	/// The source line the error is on.
	source: String,
	/// Whether the start of the line was cut off.
	truncated: bool,
	/// The location of the start of the snippet in the pattern.
	location: Location,
	/// The offset, in chars, into the snippet where the marker starts.
	offset: usize,
	/// The amount of characters to be pointed to.
	length: usize,
	/// A possible explanation for this snippet.
	explain: Option<&'static str>,
}

impl Snippet {
	/// How far into the line the error can be before the front of the line
	/// is cut off.
	const MAX_LINE_OFFSET: usize = 60;

	fn from_span(source: &str, span: Span, explain: Option<&'static str>) -> Self {
		let start = Location::of_span_start(source, span);
		let end = Location::of_span_end(source, span);
		let line = source.split('\n').nth(start.line - 1).unwrap_or("");
		let mut offset = start.column - 1;
		let length = if start.line == end.line {
			(end.column - start.column).max(1)
		} else {
			1
		};

		// Keep the marker visible on very long single-line patterns.
		let mut truncated = false;
		let mut line = line.trim_end();
		if offset > Self::MAX_LINE_OFFSET {
			let skip = offset - 10;
			let mut chars = line.chars();
			for _ in 0..skip {
				chars.next();
			}
			line = chars.as_str();
			offset = 10;
			truncated = true;
		}

		Snippet {
			source: line.to_owned(),
			truncated,
			location: start,
			offset,
			length,
			explain,
		}
	}
}

impl fmt::Display for Snippet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let spacing = self.location.line.ilog10() as usize + 1;
		for _ in 0..spacing {
			f.write_str(" ")?;
		}
		f.write_str(" |\n")?;
		write!(f, "{:>spacing$} | ", self.location.line)?;
		if self.truncated {
			f.write_str("...")?;
		}
		writeln!(f, "{}", self.source)?;
		for _ in 0..spacing {
			f.write_str(" ")?;
		}
		f.write_str(" | ")?;
		let marker_offset = self.offset + if self.truncated { 3 } else { 0 };
		for _ in 0..marker_offset {
			f.write_str(" ")?;
		}
		for _ in 0..self.length {
			f.write_str("^")?;
		}
		if let Some(explain) = self.explain {
			write!(f, " {explain}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::{ParseError, ParseErrorKind};
	use crate::span::Span;

	#[test]
	fn render_marks_the_span() {
		let source = "a{5,2}";
		let error = ParseError::new(
			ParseErrorKind::InvalidQuantifierRange {
				low: 5,
				high: 2,
			},
			Span::new(1, 5),
		);
		let rendered = error.render_on(source);
		let expected = r#"quantifier range is out of order, 5 is greater than 2
  |
1 | a{5,2}
  |  ^^^^^
"#;
		assert_eq!(rendered.to_string(), expected);
	}

	#[test]
	fn render_group_closer_points_both_ways() {
		let source = "(ab";
		let error = ParseError::new(
			ParseErrorKind::ExpectedGroupCloser {
				opened: Span::new(0, 1),
			},
			Span::new(3, 0),
		);
		let rendered = error.render_on(source);
		assert_eq!(rendered.snippets.len(), 2);
		assert!(rendered.to_string().contains("expected this group to be closed"));
	}

	#[test]
	fn render_truncates_long_lines() {
		let mut source = "a".repeat(100);
		source.push(')');
		let error = ParseError::new(ParseErrorKind::UnbalancedEndOfGroup, Span::new(100, 1));
		let rendered = error.render_on(&source);
		let shown = rendered.to_string();
		assert!(shown.contains("..."));
		assert!(shown.contains('^'));
	}
}
