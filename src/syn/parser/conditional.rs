//! Parsing of conditionals and absent functions.
//!
//! Both constructs parse their body as a full `RecursiveRegex` and then
//! inspect its shape: a two-branch alternation splits into the two arms,
//! more than two branches is an error, and anything else is a single arm.

use crate::ast::{
	AbsentFunction, AbsentKind, Ast, Conditional, ConditionKind,
};
use crate::span::{Located, Span};
use crate::syn::error::{bail, ParseErrorKind, ParseResult};
use crate::syn::lexer::AbsentStart;

use super::Parser;

impl Parser<'_> {
	/// Parse a conditional, or return `None` when the input doesn't start
	/// one.
	pub(crate) fn parse_conditional(&mut self) -> ParseResult<Option<Ast>> {
		if let Some(condition) = self.lexer.lex_known_conditional_start(&self.ctx)? {
			return self.parse_conditional_tail(condition).map(Some);
		}

		let Some(open) = self.lexer.lex_group_conditional_start(&self.ctx)? else {
			return Ok(None);
		};
		// The reader is at the `(` which opens the condition group.
		let Some(group) = self.parse_group()? else {
			bail!(ParseErrorKind::UnknownConditionalStart, @open);
		};
		let condition_span = open.covers(group.span);
		let condition = Located::new(ConditionKind::Group(Box::new(group)), condition_span);
		self.parse_conditional_tail(condition).map(Some)
	}

	/// Parse the branches and closing `)` of a conditional whose condition
	/// has been consumed.
	fn parse_conditional_tail(&mut self, condition: Located<ConditionKind>) -> ParseResult<Ast> {
		self.enter_recursion(condition.span)?;
		let body = self.parse_regex_body()?;
		self.exit_recursion();
		let close = self.expect_conditional_closer(condition.span)?;

		let (true_branch, pipe, false_branch) = split_conditional_branches(body)?;
		Ok(Ast::Conditional(Conditional {
			span: condition.span.covers(close),
			condition,
			true_branch: Box::new(true_branch),
			pipe,
			false_branch: Box::new(false_branch),
		}))
	}

	fn expect_conditional_closer(&mut self, opened: Span) -> ParseResult<Span> {
		let span = self.lexer.reader.next_char_span();
		if self.lexer.reader.eat(')') {
			Ok(span)
		} else {
			bail!(
				ParseErrorKind::ExpectedConditionalCloser {
					opened,
				},
				@span
			)
		}
	}

	/// Parse an absent function, or return `None` when the input doesn't
	/// start one.
	pub(crate) fn parse_absent_function(&mut self) -> ParseResult<Option<Ast>> {
		let Some(start) = self.lexer.lex_absent_function_start(&self.ctx)? else {
			return Ok(None);
		};

		self.enter_recursion(start.span)?;
		let body = self.parse_regex_body()?;
		self.exit_recursion();
		let close = self.expect_group_closer(start.span)?;

		let kind = match start.value {
			AbsentStart::WithoutPipe => AbsentKind::Repeater(Box::new(body)),
			AbsentStart::WithPipe => match body {
				Ast::Empty(_) => AbsentKind::Clearer,
				Ast::Alternation(alternation) => {
					if alternation.children.len() > 2 {
						bail!(
							ParseErrorKind::TooManyAbsentExpressionChildren(
								alternation.children.len() as u32
							),
							@alternation.pipes[1]
						);
					}
					let pipe = alternation.pipes[0];
					let mut children = alternation.children.into_iter();
					let absentee = children.next().unwrap();
					let expr = children.next().unwrap();
					AbsentKind::Expression {
						absentee: Box::new(absentee),
						pipe,
						expr: Box::new(expr),
					}
				}
				body => AbsentKind::Stopper(Box::new(body)),
			},
		};
		Ok(Some(Ast::AbsentFunction(AbsentFunction {
			span: start.span.covers(close),
			start: start.span,
			kind,
		})))
	}
}

/// Split a conditional body into its branches.
fn split_conditional_branches(body: Ast) -> ParseResult<(Ast, Option<Span>, Ast)> {
	match body {
		Ast::Alternation(alternation) => {
			if alternation.children.len() > 2 {
				bail!(
					ParseErrorKind::TooManyBranchesInConditional(
						alternation.children.len() as u32
					),
					@alternation.pipes[1]
				);
			}
			let pipe = alternation.pipes[0];
			let mut children = alternation.children.into_iter();
			let true_branch = children.next().unwrap();
			let false_branch = children.next().unwrap();
			Ok((true_branch, Some(pipe), false_branch))
		}
		body => {
			let false_span = body.span().after();
			Ok((body, None, Ast::Empty(false_span)))
		}
	}
}
