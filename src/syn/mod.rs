//! Module containing the implementation of the regex lexer and parser.
//!
//! The lexer does not pre-tokenize the pattern; the parser calls its
//! context-sensitive scanners on demand. Both report failure through a single
//! located [`ParseError`], and a successful parse returns an owned
//! [`Ast`](crate::ast::Ast).

pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;

pub use error::{ParseError, ParseErrorKind, ParseResult, RenderedError};
pub use options::SyntaxOptions;

use tracing::trace;

use crate::ast::Ast;
use parser::Parser;

/// Parse a pattern into its syntax tree.
///
/// Errors are fatal: the first error wins and no partial tree is returned.
pub fn parse(input: &str, syntax: SyntaxOptions) -> ParseResult<Ast> {
	trace!("parsing pattern of {} bytes", input.len());
	let mut parser = Parser::new(input, syntax);
	parser.parse_complete()
}

/// Parse a delimited pattern like `/…/` or `re'…'`, inferring the syntax
/// options from the delimiter.
///
/// The delimiters are stripped before lexing, so spans in the returned tree
/// are relative to the pattern text between them.
pub fn parse_with_delimiters(input: &str) -> ParseResult<Ast> {
	let (pattern, syntax) = parser::delim::strip_delimiters(input)?;
	trace!("inferred syntax options {syntax:?} from delimiter");
	parse(pattern, syntax)
}
