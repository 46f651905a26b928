use crate::ast::{Ast, ConditionKind, ReferenceKind};
use crate::syn::error::ParseErrorKind;

use super::{assert_dump, parse};

#[test]
fn known_conditions_dump() {
	assert_dump!("(?(1)a|b)", "if 1 then a else b");
	assert_dump!("(?(1)a)", "if 1 then a else empty");
	assert_dump!("(?(+1)a)", "if +1 then a else empty");
	assert_dump!("(?(-2)a)", "if -2 then a else empty");
	assert_dump!("(?(<x>)a|b)", "if <x> then a else b");
	assert_dump!("(?('x')a|b)", "if <x> then a else b");
	assert_dump!("(?(R)a)", "if R then a else empty");
	assert_dump!("(?(R2)a)", "if R2 then a else empty");
	assert_dump!("(?(R&x)a)", "if R&x then a else empty");
	assert_dump!("(?(DEFINE)(?<x>a))", "if DEFINE then group_namedCapture<x>(a) else empty");
	assert_dump!("(?(VERSION>=10.4)a|b)", "if VERSION>=10.4 then a else b");
	assert_dump!("(?(VERSION=10.4)a)", "if VERSION=10.4 then a else empty");
}

#[test]
fn group_conditions() {
	assert_dump!("(?(?=x)a|b)", "if group_lookahead(x) then a else b");
	assert_dump!("(?(?<!x)a)", "if group_negativeLookbehind(x) then a else empty");
}

#[test]
fn unresolved_names_still_parse() {
	// Whether group `x` exists is a consumer concern.
	let ast = parse("(?(<x>)yes|no)").unwrap();
	let Ast::Conditional(conditional) = ast else {
		panic!("expected a conditional");
	};
	let ConditionKind::GroupMatched(reference) = &conditional.condition.value else {
		panic!("expected a group-matched condition");
	};
	assert_eq!(reference.kind, ReferenceKind::Named("x".to_owned()));
	assert_eq!(conditional.true_branch.dump(), "(y,e,s)");
	assert_eq!(conditional.false_branch.dump(), "(n,o)");
	assert!(conditional.pipe.is_some());
}

#[test]
fn too_many_branches() {
	let err = parse("(?(1)a|b|c)").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::TooManyBranchesInConditional(3));
}

#[test]
fn unknown_condition() {
	let err = parse("(?(xyz)a)").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::UnknownConditionalStart);
}

#[test]
fn unterminated_conditional() {
	let err = parse("(?(1)a").unwrap_err();
	assert!(matches!(
		err.kind,
		ParseErrorKind::ExpectedConditionalCloser {
			..
		}
	));
}

#[test]
fn version_check_needs_equals() {
	let err = parse("(?(VERSION>10.4)a)").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::ExpectedEquals);
}

#[test]
fn condition_groups_count_captures() {
	// The condition group is `((a))`: two captures.
	let ast = parse("(?((a))b|c)").unwrap();
	assert_eq!(ast.capture_count(), 2);
	assert_dump!("(?((a))b|c)", "if group_capture(group_capture(a)) then b else c");
}

#[test]
fn absent_functions() {
	assert_dump!("(?~ab)", "absent_repeater((a,b))");
	assert_dump!("(?~|ab)", "absent_stopper((a,b))");
	assert_dump!("(?~|)", "absent_clearer");
	assert_dump!("(?~|foo|bar)", "absent_expression((f,o,o),(b,a,r))");
	// Nesting is structurally allowed.
	assert_dump!("(?~(?~a))", "absent_repeater(absent_repeater(a))");
}

#[test]
fn too_many_absent_children() {
	let err = parse("(?~|a|b|c)").unwrap_err();
	assert_eq!(err.kind, ParseErrorKind::TooManyAbsentExpressionChildren(3));
}

#[test]
fn absent_functions_are_gated_on_oniguruma() {
	let mut options = crate::syn::options::SyntaxOptions::traditional();
	options.oniguruma = false;
	let err = crate::syn::parse("(?~a)", options).unwrap_err();
	assert!(matches!(err.kind, ParseErrorKind::UnknownGroupKind(_)));
}
