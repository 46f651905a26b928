use crate::ast::Ast;
use crate::span::Span;
use crate::syn::error::ParseResult;
use crate::syn::options::SyntaxOptions;

mod conditionals;
mod errors;
mod scenarios;

pub(crate) fn parse(input: &str) -> ParseResult<Ast> {
	crate::syn::parse(input, SyntaxOptions::default())
}

pub(crate) fn parse_extended(input: &str) -> ParseResult<Ast> {
	crate::syn::parse(input, SyntaxOptions::extended())
}

/// Assert that a pattern parses and dumps to the expected golden string.
macro_rules! assert_dump {
	($input:expr, $expected:expr) => {{
		let ast = crate::syn::parser::test::parse($input).unwrap();
		assert_eq!(ast.dump(), $expected, "pattern {:?}", $input);
	}};
}
pub(crate) use assert_dump;

/// Walk the tree checking that child spans are contained in their parent's
/// span and that alternation pipes lie between their neighbouring branches.
pub(crate) fn assert_well_nested(ast: &Ast) {
	let span = ast.span();
	if let Some(children) = ast.children() {
		for child in children {
			assert!(
				span.contains(child.span()),
				"child span {:?} escapes parent span {:?}",
				child.span(),
				span
			);
			assert_well_nested(child);
		}
	}
	if let Ast::Alternation(alternation) = ast {
		assert_eq!(alternation.pipes.len() + 1, alternation.children.len());
		for (i, pipe) in alternation.pipes.iter().enumerate() {
			assert!(alternation.children[i].span().end() <= pipe.offset);
			assert!(pipe.end() <= alternation.children[i + 1].span().offset);
		}
	}
}

#[test]
fn empty_pattern() {
	let ast = parse("").unwrap();
	assert_eq!(ast, Ast::Empty(Span::new(0, 0)));
	assert_eq!(ast.dump(), "empty");
}

#[test]
fn single_atom_collapses() {
	// A one-component concatenation is the component itself.
	let ast = parse("a").unwrap();
	assert!(matches!(ast, Ast::Atom(_)));
}
