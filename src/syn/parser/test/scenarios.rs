//! End-to-end scenarios and tree-level invariants.

use crate::syn::options::SyntaxOptions;
use crate::syn::parser::Parser;

use super::{assert_dump, assert_well_nested, parse, parse_extended};

/// A grab bag of valid patterns exercising most constructs at once.
const CORPUS: &[&str] = &[
	"",
	"a",
	"a|b|c",
	"(a(b)c)",
	"a{2,4}?",
	"[a-z&&[^aeiou]]",
	"(?(<x>)yes|no)",
	"(?~|foo|bar)",
	"(?<x>a)\\k<x>",
	"(?i)a|b",
	"(*UTF)(*UCP)^a+$",
	"\\p{script=Greek}+",
	"(?(R&x)a|b)",
	"(?:(a)|(b))(?1)",
	"[-a-z\\d[:punct:]]",
	"a(?#comment)b",
	"\\Qa|b\\E[c]",
	"(?<a-b>x)(?'c'y)",
	"(?~a)(?~|)(?~|x)",
	"(*MARK:here)a(*SKIP)",
];

#[test]
fn scenario_alternation() {
	assert_dump!("a|b|c", "alternation(a,b,c)");
}

#[test]
fn scenario_nested_captures() {
	assert_dump!("(a(b)c)", "group_capture((a,group_capture(b),c))");
	assert_eq!(parse("(a(b)c)").unwrap().capture_count(), 2);
}

#[test]
fn scenario_reluctant_range() {
	assert_dump!("a{2,4}?", "quant_.range<2...4>_reluctant(a)");
}

#[test]
fn scenario_set_operation() {
	assert_dump!(
		"[a-z&&[^aeiou]]",
		"customCharacterClass(op [a-z] intersection [customCharacterClass(^,a,e,i,o,u)])"
	);
}

#[test]
fn scenario_unresolved_conditional_name() {
	assert_dump!("(?(<x>)yes|no)", "if <x> then (y,e,s) else (n,o)");
}

#[test]
fn scenario_absent_expression() {
	assert_dump!("(?~|foo|bar)", "absent_expression((f,o,o),(b,a,r))");
}

#[test]
fn spans_are_well_nested() {
	for pattern in CORPUS {
		let ast = parse(pattern).unwrap();
		assert_well_nested(&ast);
	}
	for pattern in ["a b # c\nd", "[a b]", "( a | b )"] {
		let ast = parse_extended(pattern).unwrap();
		assert_well_nested(&ast);
	}
}

#[test]
fn top_level_span_covers_the_input() {
	for pattern in CORPUS {
		let ast = parse(pattern).unwrap();
		let span = ast.span();
		assert_eq!(span.offset, 0, "pattern {pattern:?}");
		assert_eq!(span.end() as usize, pattern.len(), "pattern {pattern:?}");
	}
}

#[test]
fn prior_group_count_matches_the_tree() {
	for pattern in CORPUS {
		let mut parser = Parser::new(pattern, SyntaxOptions::default());
		let ast = parser.parse_complete().unwrap();
		assert_eq!(
			parser.ctx.prior_group_count,
			ast.capture_count(),
			"pattern {pattern:?}"
		);
	}
}

#[test]
fn used_group_names_are_recorded() {
	let mut parser = Parser::new("(?<a>x)(?'b'y)(?:z)(?<c-d>w)", SyntaxOptions::default());
	parser.parse_complete().unwrap();
	let mut names: Vec<&str> = parser.ctx.used_group_names.iter().map(|x| x.as_str()).collect();
	names.sort_unstable();
	assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn dump_is_deterministic() {
	for pattern in CORPUS {
		let first = parse(pattern).unwrap().dump();
		let second = parse(pattern).unwrap().dump();
		assert_eq!(first, second);
	}
}

#[test]
fn dump_ignores_trivia() {
	// Stripping trivia never changes the dump.
	for pattern in ["a b", "a | b", "[a b]", "a # c\n| b", "( a )"] {
		let ast = parse_extended(pattern).unwrap();
		assert_eq!(ast.dump(), ast.strip_trivia().dump(), "pattern {pattern:?}");
	}
	// And comments vanish under the default syntax too.
	assert_dump!("a(?#note)b", "(a,b)");
}

#[test]
fn dump_is_idempotent_on_canonical_atoms() {
	// For inputs which dump to themselves, a re-parse dumps identically.
	for pattern in ["a", ".", "^", "$", "\\d", "\\n", "\\p{alpha}"] {
		let once = parse(pattern).unwrap().dump();
		let twice = parse(&once).unwrap().dump();
		assert_eq!(once, twice, "pattern {pattern:?}");
	}
}

#[test]
fn quantifiable_table() {
	// Quantifiable: atoms (bar anchors/directives), groups, conditionals,
	// classes, absent functions.
	for pattern in ["a", "\\d", "(a)", "(?:a)", "[ab]", "(?(1)a)", "(?~a)"] {
		assert!(parse(pattern).unwrap().is_quantifiable(), "pattern {pattern:?}");
	}
	// Not quantifiable: anchors, directives, and every compound node.
	for pattern in ["^", "$", "\\b", "(*FAIL)", "a|b", "ab", "a*", "\\Qab\\E", "", "(*UTF)a"] {
		assert!(!parse(pattern).unwrap().is_quantifiable(), "pattern {pattern:?}");
	}
}

#[test]
fn children_match_the_variant() {
	let ast = parse("a|b").unwrap();
	assert_eq!(ast.children().unwrap().len(), 2);

	let ast = parse("abc").unwrap();
	assert_eq!(ast.children().unwrap().len(), 3);

	let ast = parse("(a)").unwrap();
	assert_eq!(ast.children().unwrap().len(), 1);

	let ast = parse("(?(1)a|b)").unwrap();
	assert_eq!(ast.children().unwrap().len(), 2);

	let ast = parse("a*").unwrap();
	assert_eq!(ast.children().unwrap().len(), 1);

	let ast = parse("a").unwrap();
	assert!(ast.children().is_none());

	let ast = parse("[ab]").unwrap();
	assert!(ast.children().is_none());
}

#[test]
fn delimited_parsing() {
	let ast = crate::syn::parse_with_delimiters("/a|b/").unwrap();
	assert_eq!(ast.dump(), "alternation(a,b)");

	// The pound form implies extended syntax.
	let ast = crate::syn::parse_with_delimiters("#/a b/#").unwrap();
	assert_eq!(ast.dump(), "(a,b)");

	let ast = crate::syn::parse_with_delimiters("re'a+'").unwrap();
	assert_eq!(ast.dump(), "quant_oneOrMore_eager(a)");

	let err = crate::syn::parse_with_delimiters("a|b").unwrap_err();
	assert_eq!(err.kind, crate::syn::error::ParseErrorKind::UnknownDelimiter);
}

#[test]
fn identical_inputs_parse_identically() {
	for pattern in CORPUS {
		let a = parse(pattern).unwrap();
		let b = parse(pattern).unwrap();
		assert_eq!(a, b, "pattern {pattern:?}");
	}
}
