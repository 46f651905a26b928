use crate::ast::{
	Amount, AtomKind, ClassStart, EscapedChar, GlobalOption, GroupKind, PropertyKind, QuantKind,
	ReferenceKind, SetOp,
};
use crate::span::Span;
use crate::syn::error::ParseErrorKind;
use crate::syn::options::SyntaxOptions;
use crate::syn::parser::ParsingContext;

use super::Lexer;

fn ctx() -> ParsingContext {
	ParsingContext::new(SyntaxOptions::default())
}

fn class_ctx() -> ParsingContext {
	let mut ctx = ctx();
	ctx.in_custom_character_class = true;
	ctx
}

fn extended_ctx() -> ParsingContext {
	ParsingContext::new(SyntaxOptions::extended())
}

#[test]
fn literal_atom_with_span() {
	let mut lexer = Lexer::new("ab");
	let atom = lexer.lex_atom(&ctx()).unwrap().unwrap();
	assert_eq!(atom.kind, AtomKind::Char('a'));
	assert_eq!(atom.span, Span::new(0, 1));
	assert_eq!(lexer.reader.offset(), 1);
}

#[test]
fn atom_stops_at_structure() {
	for input in ["|a", ")a", "*", "+", "?"] {
		let mut lexer = Lexer::new(input);
		assert_eq!(lexer.lex_atom(&ctx()).unwrap(), None, "input {input:?}");
		assert_eq!(lexer.reader.offset(), 0);
	}
}

#[test]
fn simple_escapes() {
	let mut lexer = Lexer::new(r"\n");
	let atom = lexer.lex_atom(&ctx()).unwrap().unwrap();
	assert_eq!(atom.kind, AtomKind::Escaped(EscapedChar::Newline));

	let mut lexer = Lexer::new(r"\A");
	let atom = lexer.lex_atom(&ctx()).unwrap().unwrap();
	assert_eq!(atom.kind, AtomKind::Escaped(EscapedChar::StartOfSubject));
	assert!(!atom.is_quantifiable());

	let mut lexer = Lexer::new(r"\.");
	let atom = lexer.lex_atom(&ctx()).unwrap().unwrap();
	assert_eq!(atom.kind, AtomKind::Char('.'));
}

#[test]
fn word_boundary_is_backspace_in_class() {
	let mut lexer = Lexer::new(r"\b");
	let atom = lexer.lex_atom(&ctx()).unwrap().unwrap();
	assert_eq!(atom.kind, AtomKind::Escaped(EscapedChar::WordBoundary));

	let mut lexer = Lexer::new(r"\b");
	let atom = lexer.lex_atom(&class_ctx()).unwrap().unwrap();
	assert_eq!(atom.kind, AtomKind::Escaped(EscapedChar::Backspace));
}

#[test]
fn unknown_escape_is_an_error() {
	let mut lexer = Lexer::new(r"\i");
	let err = lexer.lex_atom(&ctx()).unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::InvalidEscape('i'));
}

#[test]
fn trailing_backslash() {
	let mut lexer = Lexer::new("\\");
	let err = lexer.lex_atom(&ctx()).unwrap_err();
	assert!(matches!(
		err.kind,
		ParseErrorKind::UnexpectedEndOfInput {
			..
		}
	));
}

#[test]
fn backreference_when_group_count_allows() {
	let mut context = ctx();
	context.prior_group_count = 12;
	let mut lexer = Lexer::new(r"\12");
	let atom = lexer.lex_atom(&context).unwrap().unwrap();
	let AtomKind::Backreference(reference) = atom.kind else {
		panic!("expected a back-reference, got {:?}", atom.kind);
	};
	assert_eq!(reference.kind, ReferenceKind::Absolute(12));
}

#[test]
fn octal_when_group_count_too_low() {
	let mut lexer = Lexer::new(r"\12");
	let atom = lexer.lex_atom(&ctx()).unwrap().unwrap();
	// 012 is a line feed.
	assert_eq!(atom.kind, AtomKind::Scalar('\n'));
}

#[test]
fn digits_in_class_are_always_octal() {
	let mut context = class_ctx();
	context.prior_group_count = 5;
	let mut lexer = Lexer::new(r"\1");
	let atom = lexer.lex_atom(&context).unwrap().unwrap();
	assert_eq!(atom.kind, AtomKind::Scalar('\u{1}'));
}

#[test]
fn non_octal_digit_escape() {
	let mut lexer = Lexer::new(r"\9");
	let err = lexer.lex_atom(&ctx()).unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::InvalidEscape('9'));
}

#[test]
fn hex_scalars() {
	let mut lexer = Lexer::new(r"\x41");
	assert_eq!(lexer.lex_atom(&ctx()).unwrap().unwrap().kind, AtomKind::Scalar('A'));

	let mut lexer = Lexer::new(r"\x{1F600}");
	assert_eq!(lexer.lex_atom(&ctx()).unwrap().unwrap().kind, AtomKind::Scalar('\u{1F600}'));

	let mut lexer = Lexer::new(r"\u0041");
	assert_eq!(lexer.lex_atom(&ctx()).unwrap().unwrap().kind, AtomKind::Scalar('A'));

	let mut lexer = Lexer::new(r"\U00000041");
	assert_eq!(lexer.lex_atom(&ctx()).unwrap().unwrap().kind, AtomKind::Scalar('A'));

	let mut lexer = Lexer::new(r"\o{101}");
	assert_eq!(lexer.lex_atom(&ctx()).unwrap().unwrap().kind, AtomKind::Scalar('A'));
}

#[test]
fn scalar_out_of_range() {
	let mut lexer = Lexer::new(r"\x{110000}");
	let err = lexer.lex_atom(&ctx()).unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::InvalidUnicodeScalar);
}

#[test]
fn named_characters() {
	let mut lexer = Lexer::new(r"\N{LATIN SMALL LETTER A}");
	assert_eq!(
		lexer.lex_atom(&ctx()).unwrap().unwrap().kind,
		AtomKind::NamedCharacter("LATIN SMALL LETTER A".to_owned())
	);

	let mut lexer = Lexer::new(r"\N{U+61}");
	assert_eq!(lexer.lex_atom(&ctx()).unwrap().unwrap().kind, AtomKind::Scalar('a'));

	let mut lexer = Lexer::new(r"\N");
	assert_eq!(
		lexer.lex_atom(&ctx()).unwrap().unwrap().kind,
		AtomKind::Escaped(EscapedChar::NotNewline)
	);
}

#[test]
fn properties() {
	let mut lexer = Lexer::new(r"\p{Lu}");
	let AtomKind::Property(property) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a property");
	};
	assert!(!property.inverted);
	assert!(matches!(property.kind, PropertyKind::GeneralCategory(_)));

	let mut lexer = Lexer::new(r"\P{Alpha}");
	let AtomKind::Property(property) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a property");
	};
	assert!(property.inverted);
	assert_eq!(property.kind, PropertyKind::Binary("Alphabetic".to_owned()));

	// `\P{^…}` cancels out.
	let mut lexer = Lexer::new(r"\P{^Alpha}");
	let AtomKind::Property(property) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a property");
	};
	assert!(!property.inverted);

	let mut lexer = Lexer::new(r"\p{script=Greek}");
	let AtomKind::Property(property) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a property");
	};
	assert_eq!(property.kind, PropertyKind::Script("Greek".to_owned()));

	// Loose matching: case, underscores and spaces are insignificant.
	let mut lexer = Lexer::new(r"\p{white space}");
	let AtomKind::Property(property) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a property");
	};
	assert_eq!(property.kind, PropertyKind::Binary("White_Space".to_owned()));
}

#[test]
fn unknown_property_value_for_known_key() {
	let mut lexer = Lexer::new(r"\p{gc=Banana}");
	let err = lexer.lex_atom(&ctx()).unwrap_err();
	assert_eq!(
		err.kind,
		ParseErrorKind::UnknownProperty {
			key: "gc".to_owned(),
			value: "Banana".to_owned(),
		}
	);
}

#[test]
fn unknown_bare_property_is_preserved() {
	let mut lexer = Lexer::new(r"\p{Banana}");
	let AtomKind::Property(property) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a property");
	};
	assert_eq!(
		property.kind,
		PropertyKind::Other {
			key: None,
			value: "Banana".to_owned(),
		}
	);
}

#[test]
fn posix_classes_inside_classes() {
	let mut lexer = Lexer::new("[:alpha:]");
	let atom = lexer.lex_posix_class(&class_ctx()).unwrap().unwrap();
	let AtomKind::Property(property) = atom.kind else {
		panic!("expected a property");
	};
	assert!(!property.inverted);

	let mut lexer = Lexer::new("[:^alpha:]");
	let atom = lexer.lex_posix_class(&class_ctx()).unwrap().unwrap();
	let AtomKind::Property(property) = atom.kind else {
		panic!("expected a property");
	};
	assert!(property.inverted);

	// Not a POSIX body; the reader must be restored.
	let mut lexer = Lexer::new("[:a]");
	assert_eq!(lexer.lex_posix_class(&class_ctx()).unwrap(), None);
	assert_eq!(lexer.reader.offset(), 0);
}

#[test]
fn keyboard_escapes() {
	let mut lexer = Lexer::new(r"\cA");
	assert_eq!(lexer.lex_atom(&ctx()).unwrap().unwrap().kind, AtomKind::KeyboardControl('A'));

	let mut lexer = Lexer::new(r"\C-a");
	assert_eq!(lexer.lex_atom(&ctx()).unwrap().unwrap().kind, AtomKind::KeyboardControl('a'));

	let mut lexer = Lexer::new(r"\M-a");
	assert_eq!(lexer.lex_atom(&ctx()).unwrap().unwrap().kind, AtomKind::KeyboardMeta('a'));

	let mut lexer = Lexer::new(r"\M-\C-a");
	assert_eq!(lexer.lex_atom(&ctx()).unwrap().unwrap().kind, AtomKind::KeyboardMetaControl('a'));
}

#[test]
fn named_backreferences() {
	let mut lexer = Lexer::new(r"\k<name>");
	let AtomKind::Backreference(reference) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a back-reference");
	};
	assert_eq!(reference.kind, ReferenceKind::Named("name".to_owned()));
	assert_eq!(reference.recursion_level, None);

	let mut lexer = Lexer::new(r"\k<name+2>");
	let AtomKind::Backreference(reference) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a back-reference");
	};
	assert_eq!(reference.recursion_level.unwrap().value, 2);
}

#[test]
fn g_references() {
	let mut lexer = Lexer::new(r"\g{2}");
	let AtomKind::Backreference(reference) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a back-reference");
	};
	assert_eq!(reference.kind, ReferenceKind::Absolute(2));

	let mut lexer = Lexer::new(r"\g{-1}");
	let AtomKind::Backreference(reference) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a back-reference");
	};
	assert_eq!(reference.kind, ReferenceKind::Relative(-1));

	let mut lexer = Lexer::new(r"\g<name>");
	let AtomKind::Subpattern(reference) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a subpattern call");
	};
	assert_eq!(reference.kind, ReferenceKind::Named("name".to_owned()));

	let mut lexer = Lexer::new(r"\g1");
	let AtomKind::Backreference(reference) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a back-reference");
	};
	assert_eq!(reference.kind, ReferenceKind::Absolute(1));
}

#[test]
fn paren_atoms() {
	let mut lexer = Lexer::new("(?R)");
	let AtomKind::Subpattern(reference) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a subpattern call");
	};
	assert_eq!(reference.kind, ReferenceKind::Absolute(0));

	let mut lexer = Lexer::new("(?+2)");
	let AtomKind::Subpattern(reference) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a subpattern call");
	};
	assert_eq!(reference.kind, ReferenceKind::Relative(2));

	let mut lexer = Lexer::new("(?P=name)");
	let AtomKind::Backreference(reference) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a back-reference");
	};
	assert_eq!(reference.kind, ReferenceKind::Named("name".to_owned()));

	let mut lexer = Lexer::new("(?&name)");
	let AtomKind::Subpattern(reference) = lexer.lex_atom(&ctx()).unwrap().unwrap().kind else {
		panic!("expected a subpattern call");
	};
	assert_eq!(reference.kind, ReferenceKind::Named("name".to_owned()));
}

#[test]
fn backtracking_directives() {
	let mut lexer = Lexer::new("(*PRUNE:here)");
	let AtomKind::BacktrackingDirective(directive) =
		lexer.lex_atom(&ctx()).unwrap().unwrap().kind
	else {
		panic!("expected a directive");
	};
	assert_eq!(directive.name.as_deref(), Some("here"));

	let mut lexer = Lexer::new("(*:here)");
	let AtomKind::BacktrackingDirective(directive) =
		lexer.lex_atom(&ctx()).unwrap().unwrap().kind
	else {
		panic!("expected a directive");
	};
	assert_eq!(directive.name.as_deref(), Some("here"));
}

#[test]
fn quantifiers() {
	let mut lexer = Lexer::new("*?");
	let (amount, kind) = lexer.lex_quantifier(&ctx()).unwrap().unwrap();
	assert_eq!(amount.value, Amount::ZeroOrMore);
	assert_eq!(kind.value, QuantKind::Reluctant);

	let mut lexer = Lexer::new("{2,4}+");
	let (amount, kind) = lexer.lex_quantifier(&ctx()).unwrap().unwrap();
	assert_eq!(amount.value, Amount::Range(2, 4));
	assert_eq!(kind.value, QuantKind::Possessive);

	let mut lexer = Lexer::new("{3}");
	let (amount, kind) = lexer.lex_quantifier(&ctx()).unwrap().unwrap();
	assert_eq!(amount.value, Amount::Exactly(3));
	assert_eq!(kind.value, QuantKind::Eager);

	let mut lexer = Lexer::new("{3,}");
	let (amount, _) = lexer.lex_quantifier(&ctx()).unwrap().unwrap();
	assert_eq!(amount.value, Amount::NOrMore(3));

	let mut lexer = Lexer::new("{,4}");
	let (amount, _) = lexer.lex_quantifier(&ctx()).unwrap().unwrap();
	assert_eq!(amount.value, Amount::UpToN(4));
}

#[test]
fn braces_which_are_not_quantifiers_restore() {
	for input in ["{x}", "{", "{2", "{,}"] {
		let mut lexer = Lexer::new(input);
		assert!(lexer.lex_quantifier(&ctx()).unwrap().is_none(), "input {input:?}");
		assert_eq!(lexer.reader.offset(), 0, "input {input:?}");
	}
}

#[test]
fn out_of_order_quantifier_range() {
	let mut lexer = Lexer::new("{5,2}");
	let err = lexer.lex_quantifier(&ctx()).unwrap_err();
	assert_eq!(
		err.kind,
		ParseErrorKind::InvalidQuantifierRange {
			low: 5,
			high: 2,
		}
	);
}

#[test]
fn quantifier_after_trivia_in_extended_mode() {
	let mut lexer = Lexer::new(" *");
	let (amount, _) = lexer.lex_quantifier(&extended_ctx()).unwrap().unwrap();
	assert_eq!(amount.value, Amount::ZeroOrMore);

	// Without a quantifier the trivia must be restored.
	let mut lexer = Lexer::new(" a");
	assert!(lexer.lex_quantifier(&extended_ctx()).unwrap().is_none());
	assert_eq!(lexer.reader.offset(), 0);
}

#[test]
fn group_starts() {
	let cases: &[(&str, GroupKind)] = &[
		("(a", GroupKind::Capture),
		("(?:", GroupKind::NonCapture),
		("(?|", GroupKind::NonCaptureReset),
		("(?>", GroupKind::AtomicNonCapturing),
		("(?=", GroupKind::Lookahead),
		("(?!", GroupKind::NegativeLookahead),
		("(?*", GroupKind::NonAtomicLookahead),
		("(?<=", GroupKind::Lookbehind),
		("(?<!", GroupKind::NegativeLookbehind),
		("(?<*", GroupKind::NonAtomicLookbehind),
		("(*sr:", GroupKind::ScriptRun),
		("(*atomic_script_run:", GroupKind::AtomicScriptRun),
		("(*positive_lookahead:", GroupKind::Lookahead),
		("(?<name>", GroupKind::NamedCapture("name".to_owned())),
		("(?'name'", GroupKind::NamedCapture("name".to_owned())),
		("(?P<name>", GroupKind::NamedCapture("name".to_owned())),
		(
			"(?<a-b>",
			GroupKind::BalancedCapture {
				name: Some("a".to_owned()),
				prior: "b".to_owned(),
			},
		),
		(
			"(?<-b>",
			GroupKind::BalancedCapture {
				name: None,
				prior: "b".to_owned(),
			},
		),
	];
	for (input, expected) in cases {
		let mut lexer = Lexer::new(input);
		let kind = lexer.lex_group_start(&ctx()).unwrap().unwrap();
		assert_eq!(kind.value, *expected, "input {input:?}");
	}
}

#[test]
fn group_start_restores_for_atom_forms() {
	for input in ["(?1)", "(?R)", "(?&name)", "(?P=name)", "(?P>name)", "(?C1)", "(?+1)", "(?-1)"]
	{
		let mut lexer = Lexer::new(input);
		assert!(lexer.lex_group_start(&ctx()).unwrap().is_none(), "input {input:?}");
		assert_eq!(lexer.reader.offset(), 0, "input {input:?}");
	}
}

#[test]
fn unknown_group_kind() {
	let mut lexer = Lexer::new("(?q)");
	let err = lexer.lex_group_start(&ctx()).unwrap_err();
	assert!(matches!(err.kind, ParseErrorKind::UnknownGroupKind(_)));
}

#[test]
fn matching_option_groups() {
	let mut lexer = Lexer::new("(?ims-x:");
	let kind = lexer.lex_group_start(&ctx()).unwrap().unwrap();
	let GroupKind::ChangeMatchingOptions {
		sequence,
		isolated,
	} = kind.value
	else {
		panic!("expected an option change");
	};
	assert!(!isolated);
	assert_eq!(sequence.adding.len(), 3);
	assert_eq!(sequence.removing.len(), 1);

	let mut lexer = Lexer::new("(?i)");
	let kind = lexer.lex_group_start(&ctx()).unwrap().unwrap();
	assert!(kind.value.has_implicit_scope());

	let mut lexer = Lexer::new("(?xx)");
	let kind = lexer.lex_group_start(&ctx()).unwrap().unwrap();
	let GroupKind::ChangeMatchingOptions {
		sequence,
		..
	} = kind.value
	else {
		panic!("expected an option change");
	};
	assert_eq!(sequence.adding.len(), 1);
}

#[test]
fn conditional_starts() {
	let mut lexer = Lexer::new("(?(1)");
	let condition = lexer.lex_known_conditional_start(&ctx()).unwrap().unwrap();
	assert_eq!(condition.span, Span::new(0, 5));

	let mut lexer = Lexer::new("(?(R)");
	assert!(lexer.lex_known_conditional_start(&ctx()).unwrap().is_some());

	let mut lexer = Lexer::new("(?(DEFINE)");
	assert!(lexer.lex_known_conditional_start(&ctx()).unwrap().is_some());

	let mut lexer = Lexer::new("(?(VERSION>=10.4)");
	assert!(lexer.lex_known_conditional_start(&ctx()).unwrap().is_some());

	// A group condition is left for lex_group_conditional_start.
	let mut lexer = Lexer::new("(?(?=a)");
	assert!(lexer.lex_known_conditional_start(&ctx()).unwrap().is_none());
	assert_eq!(lexer.reader.offset(), 0);
	let open = lexer.lex_group_conditional_start(&ctx()).unwrap().unwrap();
	assert_eq!(open, Span::new(0, 2));
	assert_eq!(lexer.reader.peek(), Some('('));
}

#[test]
fn version_check_requires_equals() {
	let mut lexer = Lexer::new("(?(VERSION>10.4)");
	let err = lexer.lex_known_conditional_start(&ctx()).unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::ExpectedEquals);
}

#[test]
fn absent_function_starts() {
	let mut lexer = Lexer::new("(?~a");
	let start = lexer.lex_absent_function_start(&ctx()).unwrap().unwrap();
	assert_eq!(start.span, Span::new(0, 3));

	let mut lexer = Lexer::new("(?~|");
	let start = lexer.lex_absent_function_start(&ctx()).unwrap().unwrap();
	assert_eq!(start.span, Span::new(0, 4));

	let mut context = ctx();
	context.syntax.oniguruma = false;
	let mut lexer = Lexer::new("(?~a");
	assert!(lexer.lex_absent_function_start(&context).unwrap().is_none());
}

#[test]
fn global_matching_options() {
	let mut lexer = Lexer::new("(*UTF)(*LIMIT_MATCH=3)x");
	let options = lexer.lex_global_matching_options().unwrap();
	assert_eq!(options.len(), 2);
	assert_eq!(options[0].value, GlobalOption::UtfMode);
	assert_eq!(options[1].value, GlobalOption::LimitMatch(3));
	assert_eq!(lexer.reader.peek(), Some('x'));

	// `(*FAIL)` is a directive, not a global option.
	let mut lexer = Lexer::new("(*FAIL)");
	assert!(lexer.lex_global_matching_options().unwrap().is_empty());
	assert_eq!(lexer.reader.offset(), 0);
}

#[test]
fn comments_are_trivia() {
	let mut lexer = Lexer::new("(?#hello)a");
	let trivia = lexer.lex_trivia(&ctx()).unwrap().unwrap();
	assert_eq!(trivia.contents, "hello");
	assert_eq!(lexer.reader.peek(), Some('a'));

	let mut lexer = Lexer::new("(?#open");
	assert!(lexer.lex_trivia(&ctx()).is_err());
}

#[test]
fn extended_whitespace_and_line_comments() {
	let mut lexer = Lexer::new("  # note\nx");
	let trivia = lexer.lex_trivia(&extended_ctx()).unwrap().unwrap();
	assert_eq!(trivia.contents, "  ");
	let trivia = lexer.lex_trivia(&extended_ctx()).unwrap().unwrap();
	assert_eq!(trivia.contents, "# note\n");
	assert_eq!(lexer.reader.peek(), Some('x'));

	// Whitespace is semantic in the default syntax.
	let mut lexer = Lexer::new(" x");
	assert!(lexer.lex_trivia(&ctx()).unwrap().is_none());
}

#[test]
fn quotes() {
	let mut lexer = Lexer::new(r"\Qa+b\Ec");
	let quote = lexer.lex_quote(&ctx()).unwrap().unwrap();
	assert_eq!(quote.literal, "a+b");
	assert_eq!(lexer.reader.peek(), Some('c'));

	// An unterminated quote runs to the end of the pattern.
	let mut lexer = Lexer::new(r"\Qab");
	let quote = lexer.lex_quote(&ctx()).unwrap().unwrap();
	assert_eq!(quote.literal, "ab");

	let mut lexer = Lexer::new(r"\q{ab}");
	let quote = lexer.lex_quote(&ctx()).unwrap().unwrap();
	assert_eq!(quote.literal, "ab");
}

#[test]
fn class_operators_and_ranges() {
	let mut lexer = Lexer::new("&&");
	let op = lexer.lex_custom_class_bin_op(&class_ctx()).unwrap().unwrap();
	assert_eq!(op.value, SetOp::Intersection);

	// Operators mean nothing outside a class.
	let mut lexer = Lexer::new("&&");
	assert!(lexer.lex_custom_class_bin_op(&ctx()).unwrap().is_none());

	let mut lexer = Lexer::new("-z]");
	let (dash, rhs) = lexer.lex_custom_class_range_end(&class_ctx()).unwrap().unwrap();
	assert_eq!(dash, Span::new(0, 1));
	assert_eq!(rhs.kind, AtomKind::Char('z'));

	// `-]` is a literal dash and `--` is an operator.
	let mut lexer = Lexer::new("-]");
	assert!(lexer.lex_custom_class_range_end(&class_ctx()).unwrap().is_none());
	let mut lexer = Lexer::new("--a]");
	assert!(lexer.lex_custom_class_range_end(&class_ctx()).unwrap().is_none());
}

#[test]
fn class_starts() {
	let mut lexer = Lexer::new("[a");
	let start = lexer.lex_custom_class_start(&ctx()).unwrap().unwrap();
	assert_eq!(start.value, ClassStart::Normal);

	let mut lexer = Lexer::new("[^a");
	let start = lexer.lex_custom_class_start(&ctx()).unwrap().unwrap();
	assert_eq!(start.value, ClassStart::Inverted);
	assert_eq!(start.span, Span::new(0, 2));
}
