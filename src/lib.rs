//! A dialect-aware regular expression lexer and parser.
//!
//! `resyn` turns the textual syntax of PCRE, Oniguruma, ICU and ECMAScript
//! patterns into a lossless, span-carrying abstract syntax tree. It is a
//! front end only: there is no matching engine here, no NFA or DFA
//! construction, and no Unicode database. The tree records exactly what was
//! written, precisely located, and leaves semantic questions (does this
//! back-reference resolve, is this property name real) to its consumers.
//!
//! ```
//! use resyn::{parse, SyntaxOptions};
//!
//! let ast = parse("a|b|c", SyntaxOptions::default()).unwrap();
//! assert_eq!(ast.dump(), "alternation(a,b,c)");
//! ```
//!
//! Errors are fatal and located: a failed parse returns a single
//! [`ParseError`] carrying an error kind and the span of the offending
//! text, which [`ParseError::render_on`] can turn into an annotated
//! snippet of the pattern.

pub mod ast;
pub mod span;
pub mod syn;

pub use syn::error::{ParseError, ParseErrorKind, ParseResult, RenderedError};
pub use syn::options::SyntaxOptions;
pub use syn::{parse, parse_with_delimiters};

/// Render a syntax tree to the deterministic, trivia-omitting dump format.
pub fn dump(ast: &ast::Ast) -> String {
	ast.dump()
}
