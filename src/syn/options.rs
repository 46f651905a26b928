//! Syntax options controlling which constructs are recognized.

/// Options controlling lexing and parsing of a pattern.
///
/// The defaults recognize the syntactic superset of all supported dialects
/// with no extended whitespace handling, matching what a bare `/…/` pattern
/// means. Dialect flags are mostly informational; the parser accepts the
/// superset and gates only the constructs which are actively ambiguous
/// outside their home dialect.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct SyntaxOptions {
	/// Enable `#` line comments and non-semantic whitespace.
	pub extended_syntax: bool,
	/// Like extended syntax, but without `#` comments.
	pub non_semantic_whitespace: bool,
	/// Reserved for future syntax experiments.
	pub experimental: bool,
	/// Recognize PCRE-only constructs such as `\q{…}`.
	pub pcre: bool,
	/// Recognize Oniguruma-only constructs such as absent functions `(?~…)`.
	pub oniguruma: bool,
	pub icu: bool,
	pub ecmascript: bool,
}

impl SyntaxOptions {
	/// The default options: every dialect, no extended whitespace.
	pub const fn traditional() -> Self {
		SyntaxOptions {
			extended_syntax: false,
			non_semantic_whitespace: false,
			experimental: false,
			pcre: true,
			oniguruma: true,
			icu: true,
			ecmascript: true,
		}
	}

	/// The traditional options with extended syntax enabled.
	pub const fn extended() -> Self {
		let mut options = Self::traditional();
		options.extended_syntax = true;
		options.non_semantic_whitespace = true;
		options
	}

	/// The traditional options with only whitespace skipping enabled.
	pub const fn whitespace_insensitive() -> Self {
		let mut options = Self::traditional();
		options.non_semantic_whitespace = true;
		options
	}

	/// Returns whether whitespace outside constructs is non-semantic.
	pub(crate) fn skips_whitespace(&self) -> bool {
		self.extended_syntax || self.non_semantic_whitespace
	}

	/// Returns whether `#` starts a line comment.
	pub(crate) fn hash_comments(&self) -> bool {
		self.extended_syntax
	}
}

impl Default for SyntaxOptions {
	fn default() -> Self {
		Self::traditional()
	}
}
