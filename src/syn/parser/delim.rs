//! Delimited pattern handling.
//!
//! This is the only place which knows about delimiters: each recognized
//! delimiter pair maps to the syntax options it implies.

use crate::span::Span;
use crate::syn::error::{bail, ParseErrorKind, ParseResult};
use crate::syn::options::SyntaxOptions;

/// The recognized delimiter pairs, tried in order. Longer openers come
/// first so `#/…/#` isn't taken for a pattern starting with `#`.
const DELIMITERS: &[(&str, &str, SyntaxOptions)] = &[
	("#/", "/#", SyntaxOptions::extended()),
	("re'", "'", SyntaxOptions::traditional()),
	("rx'", "'", SyntaxOptions::whitespace_insensitive()),
	("/", "/", SyntaxOptions::traditional()),
	("'", "'", SyntaxOptions::traditional()),
	("|", "|", SyntaxOptions::whitespace_insensitive()),
];

/// Strip a recognized delimiter pair from the input, returning the pattern
/// between the delimiters and the syntax options the delimiter implies.
pub(crate) fn strip_delimiters(input: &str) -> ParseResult<(&str, SyntaxOptions)> {
	for (open, close, options) in DELIMITERS.iter() {
		let Some(rest) = input.strip_prefix(open) else {
			continue;
		};
		let Some(pattern) = rest.strip_suffix(close) else {
			bail!(
				ParseErrorKind::UnexpectedEndOfInput {
					expected: "a closing delimiter",
				},
				@Span::new(input.len() as u32, 0)
			);
		};
		return Ok((pattern, *options));
	}
	bail!(ParseErrorKind::UnknownDelimiter, @Span::new(0, input.len() as u32))
}
