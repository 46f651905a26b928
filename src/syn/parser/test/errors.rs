use crate::span::Span;
use crate::syn::error::ParseErrorKind;

use super::parse;

#[test]
fn stray_closing_paren() {
	let err = parse(")").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::UnbalancedEndOfGroup);
	assert_eq!(err.at, Span::new(0, 1));

	let err = parse("ab)").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::UnbalancedEndOfGroup);
	assert_eq!(err.at, Span::new(2, 1));
}

#[test]
fn unclosed_group_points_at_the_opener() {
	let err = parse("(ab").unwrap_err();
	let ParseErrorKind::ExpectedGroupCloser {
		opened,
	} = err.kind
	else {
		panic!("expected ExpectedGroupCloser, got {:?}", err.kind);
	};
	assert_eq!(opened, Span::new(0, 1));
	assert_eq!(err.at, Span::new(3, 0));
}

#[test]
fn unknown_group_kind() {
	let err = parse("(?q)").unwrap_err();
	let ParseErrorKind::UnknownGroupKind(text) = err.kind else {
		panic!("expected UnknownGroupKind, got {:?}", err.kind);
	};
	assert_eq!(text, "q");
}

#[test]
fn group_name_errors() {
	let err = parse("(?<>a)").unwrap_err();
	assert!(matches!(
		err.kind,
		ParseErrorKind::Unexpected {
			..
		}
	));

	// Names cannot start with a digit.
	let err = parse("(?<1x>a)").unwrap_err();
	assert!(matches!(
		err.kind,
		ParseErrorKind::Unexpected {
			..
		}
	));

	// A missing terminator is an `Expected` error.
	let err = parse("(?<x a)").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::Expected('>'));
}

#[test]
fn escape_errors() {
	let err = parse("\\p Lu").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::ExpectedBrace);

	let err = parse("\\o41").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::ExpectedBrace);

	let err = parse("\\u12").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::ExpectedNumber);

	let err = parse("\\x{}").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::ExpectedNumber);

	let err = parse("\\M x").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::Expected('-'));
}

#[test]
fn matching_option_errors() {
	let err = parse("(?ia:x)").unwrap_err();
	assert!(matches!(
		err.kind,
		ParseErrorKind::Unexpected {
			found: 'a',
			..
		}
	));

	let err = parse("(?i").unwrap_err();
	assert!(matches!(
		err.kind,
		ParseErrorKind::UnexpectedEndOfInput {
			..
		}
	));
}

#[test]
fn global_option_errors() {
	let err = parse("(*LIMIT_MATCH)").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::ExpectedEquals);

	let err = parse("(*LIMIT_MATCH=)").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::ExpectedNumber);
}

#[test]
fn depth_limit() {
	let deep = "(".repeat(400) + &")".repeat(400);
	let err = parse(&deep).unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::ExceededDepthLimit);

	// A pattern inside the limit parses fine.
	let ok = "(".repeat(40) + "a" + &")".repeat(40);
	parse(&ok).unwrap();
}

#[test]
fn errors_render_against_the_source() {
	let source = "(?(1)a|b|c)";
	let err = parse(source).unwrap_err();
	let rendered = err.render_on(source);
	assert!(rendered.text.contains("at most two branches"));
	assert!(rendered.to_string().contains('^'));
}
