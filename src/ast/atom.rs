//! Atoms: the indivisible tokens of a pattern.

use crate::span::{Located, Span};
use serde::{Deserialize, Serialize};

/// A single indivisible regex token: a literal character, an escape, an
/// anchor, a class shorthand, a back-reference, a callout, and so on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Atom {
	pub span: Span,
	pub kind: AtomKind,
}

impl Atom {
	pub fn new(kind: AtomKind, span: Span) -> Self {
		Atom {
			span,
			kind,
		}
	}

	/// Returns whether a quantifier may follow this atom.
	///
	/// Anchors and backtracking directives are not quantifiable.
	pub fn is_quantifiable(&self) -> bool {
		!matches!(
			self.kind,
			AtomKind::StartOfLine
				| AtomKind::EndOfLine
				| AtomKind::BacktrackingDirective(_)
		) && !matches!(&self.kind, AtomKind::Escaped(e) if e.is_anchor())
	}

	/// The single character this atom stands for, if it stands for one.
	///
	/// This is what makes an atom usable as a range endpoint inside a custom
	/// character class: `a`, `\x61` and `\n` all qualify, `\d` or `\p{L}`
	/// do not.
	pub fn literal_char(&self) -> Option<char> {
		match &self.kind {
			AtomKind::Char(c) => Some(*c),
			AtomKind::Scalar(c) => Some(*c),
			AtomKind::Escaped(e) => e.literal_char(),
			_ => None,
		}
	}
}

/// The kind of an atom.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AtomKind {
	/// A literal character.
	Char(char),
	/// An explicitly written scalar, e.g. `\x41`, `\u{1F600}` or `\101`.
	Scalar(char),
	/// A letter escape with fixed meaning, e.g. `\n`, `\d` or `\A`.
	Escaped(EscapedChar),
	/// A named character `\N{LATIN SMALL LETTER A}`.
	NamedCharacter(String),
	/// A character property `\p{…}` / `\P{…}`.
	Property(Property),
	/// A control character `\cX` or `\C-X`.
	KeyboardControl(char),
	/// A meta character `\M-X`.
	KeyboardMeta(char),
	/// A meta control character `\M-\C-X`.
	KeyboardMetaControl(char),
	/// The `.` wildcard.
	Any,
	/// The `^` anchor.
	StartOfLine,
	/// The `$` anchor.
	EndOfLine,
	/// A back-reference to an already matched group.
	Backreference(Reference),
	/// A subpattern invocation, e.g. `(?R)`, `(?2)` or `\g<name>`.
	Subpattern(Reference),
	/// A callout to user supplied code.
	Callout(Callout),
	/// A backtracking control verb, e.g. `(*PRUNE:name)`.
	BacktrackingDirective(BacktrackingDirective),
}

/// The escapes `\x` where `x` is a letter with a fixed meaning.
///
/// `\b` means a word boundary outside a custom character class and backspace
/// within one; the lexer resolves that before constructing the atom.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EscapedChar {
	/// `\a`
	Alarm,
	/// `\e`
	Escape,
	/// `\f`
	FormFeed,
	/// `\n`
	Newline,
	/// `\r`
	CarriageReturn,
	/// `\t`
	Tab,
	/// `\b` inside a custom character class
	Backspace,
	/// `\C`
	SingleDataUnit,
	/// `\d`
	DecimalDigit,
	/// `\D`
	NotDecimalDigit,
	/// `\h`
	HorizontalWhitespace,
	/// `\H`
	NotHorizontalWhitespace,
	/// `\N` without a following brace
	NotNewline,
	/// `\R`
	NewlineSequence,
	/// `\s`
	Whitespace,
	/// `\S`
	NotWhitespace,
	/// `\v`
	VerticalWhitespace,
	/// `\V`
	NotVerticalWhitespace,
	/// `\w`
	WordCharacter,
	/// `\W`
	NotWordCharacter,
	/// `\X`
	GraphemeCluster,
	/// `\b` outside a custom character class
	WordBoundary,
	/// `\B`
	NotWordBoundary,
	/// `\A`
	StartOfSubject,
	/// `\Z`
	EndOfSubjectBeforeNewline,
	/// `\z`
	EndOfSubject,
	/// `\G`
	FirstMatchingPositionOfSubject,
	/// `\K`
	ResetStartOfMatch,
	/// `\y` (Oniguruma text segment boundary)
	TextSegment,
	/// `\Y`
	NotTextSegment,
}

impl EscapedChar {
	/// Resolve a letter following `\` to its escape, if it has one.
	pub fn from_char(c: char, in_custom_char_class: bool) -> Option<Self> {
		let escape = match c {
			'a' => Self::Alarm,
			'e' => Self::Escape,
			'f' => Self::FormFeed,
			'n' => Self::Newline,
			'r' => Self::CarriageReturn,
			't' => Self::Tab,
			'b' if in_custom_char_class => Self::Backspace,
			'b' => Self::WordBoundary,
			'd' => Self::DecimalDigit,
			'D' => Self::NotDecimalDigit,
			'h' => Self::HorizontalWhitespace,
			'H' => Self::NotHorizontalWhitespace,
			's' => Self::Whitespace,
			'S' => Self::NotWhitespace,
			'v' => Self::VerticalWhitespace,
			'V' => Self::NotVerticalWhitespace,
			'w' => Self::WordCharacter,
			'W' => Self::NotWordCharacter,
			'X' if !in_custom_char_class => Self::GraphemeCluster,
			'R' if !in_custom_char_class => Self::NewlineSequence,
			'C' if !in_custom_char_class => Self::SingleDataUnit,
			'B' if !in_custom_char_class => Self::NotWordBoundary,
			'A' if !in_custom_char_class => Self::StartOfSubject,
			'Z' if !in_custom_char_class => Self::EndOfSubjectBeforeNewline,
			'z' if !in_custom_char_class => Self::EndOfSubject,
			'G' if !in_custom_char_class => Self::FirstMatchingPositionOfSubject,
			'K' if !in_custom_char_class => Self::ResetStartOfMatch,
			'y' if !in_custom_char_class => Self::TextSegment,
			'Y' if !in_custom_char_class => Self::NotTextSegment,
			_ => return None,
		};
		Some(escape)
	}

	/// The letter as written after the backslash.
	pub fn as_char(&self) -> char {
		match self {
			Self::Alarm => 'a',
			Self::Escape => 'e',
			Self::FormFeed => 'f',
			Self::Newline => 'n',
			Self::CarriageReturn => 'r',
			Self::Tab => 't',
			Self::Backspace => 'b',
			Self::SingleDataUnit => 'C',
			Self::DecimalDigit => 'd',
			Self::NotDecimalDigit => 'D',
			Self::HorizontalWhitespace => 'h',
			Self::NotHorizontalWhitespace => 'H',
			Self::NotNewline => 'N',
			Self::NewlineSequence => 'R',
			Self::Whitespace => 's',
			Self::NotWhitespace => 'S',
			Self::VerticalWhitespace => 'v',
			Self::NotVerticalWhitespace => 'V',
			Self::WordCharacter => 'w',
			Self::NotWordCharacter => 'W',
			Self::GraphemeCluster => 'X',
			Self::WordBoundary => 'b',
			Self::NotWordBoundary => 'B',
			Self::StartOfSubject => 'A',
			Self::EndOfSubjectBeforeNewline => 'Z',
			Self::EndOfSubject => 'z',
			Self::FirstMatchingPositionOfSubject => 'G',
			Self::ResetStartOfMatch => 'K',
			Self::TextSegment => 'y',
			Self::NotTextSegment => 'Y',
		}
	}

	/// Returns whether this escape is a zero-width anchor.
	pub fn is_anchor(&self) -> bool {
		matches!(
			self,
			Self::WordBoundary
				| Self::NotWordBoundary
				| Self::StartOfSubject
				| Self::EndOfSubjectBeforeNewline
				| Self::EndOfSubject
				| Self::FirstMatchingPositionOfSubject
				| Self::ResetStartOfMatch
				| Self::TextSegment
				| Self::NotTextSegment
		)
	}

	/// The single character escapes like `\n` stand for, if fixed.
	pub fn literal_char(&self) -> Option<char> {
		let c = match self {
			Self::Alarm => '\u{7}',
			Self::Escape => '\u{1B}',
			Self::FormFeed => '\u{C}',
			Self::Newline => '\n',
			Self::CarriageReturn => '\r',
			Self::Tab => '\t',
			Self::Backspace => '\u{8}',
			_ => return None,
		};
		Some(c)
	}
}

/// A character property `\p{…}`, `\P{…}` or POSIX `[:…:]`.
///
/// The parser only *classifies* the property; whether the name is valid
/// against a Unicode database is a consumer concern.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Property {
	pub kind: PropertyKind,
	/// Whether the sense is inverted, via `\P{…}`, `\p{^…}` or `[:^…:]`.
	pub inverted: bool,
}

/// Classification of a property body.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PropertyKind {
	/// `\p{any}`
	Any,
	/// `\p{assigned}`
	Assigned,
	/// `\p{ascii}`
	Ascii,
	/// A boolean property such as `Alpha` or `White_Space`, stored under its
	/// canonical name.
	Binary(String),
	GeneralCategory(GeneralCategory),
	/// `script=…` / `sc=…`
	Script(String),
	/// `scx=…`
	ScriptExtensions(String),
	/// A POSIX class name, from `[:alpha:]` or `\p{alpha}`.
	Posix(PosixClass),
	/// Anything not recognized above, preserved for downstream validation.
	Other {
		key: Option<String>,
		value: String,
	},
}

/// A Unicode general category, by its two-letter abbreviation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[allow(missing_docs)]
pub enum GeneralCategory {
	CasedLetter,
	Letter,
	UppercaseLetter,
	LowercaseLetter,
	TitlecaseLetter,
	ModifierLetter,
	OtherLetter,
	Mark,
	NonspacingMark,
	SpacingMark,
	EnclosingMark,
	Number,
	DecimalNumber,
	LetterNumber,
	OtherNumber,
	Punctuation,
	ConnectorPunctuation,
	DashPunctuation,
	OpenPunctuation,
	ClosePunctuation,
	InitialPunctuation,
	FinalPunctuation,
	OtherPunctuation,
	Symbol,
	MathSymbol,
	CurrencySymbol,
	ModifierSymbol,
	OtherSymbol,
	Separator,
	SpaceSeparator,
	LineSeparator,
	ParagraphSeparator,
	Other,
	Control,
	Format,
	PrivateUse,
	Surrogate,
	Unassigned,
}

impl GeneralCategory {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::CasedLetter => "LC",
			Self::Letter => "L",
			Self::UppercaseLetter => "Lu",
			Self::LowercaseLetter => "Ll",
			Self::TitlecaseLetter => "Lt",
			Self::ModifierLetter => "Lm",
			Self::OtherLetter => "Lo",
			Self::Mark => "M",
			Self::NonspacingMark => "Mn",
			Self::SpacingMark => "Mc",
			Self::EnclosingMark => "Me",
			Self::Number => "N",
			Self::DecimalNumber => "Nd",
			Self::LetterNumber => "Nl",
			Self::OtherNumber => "No",
			Self::Punctuation => "P",
			Self::ConnectorPunctuation => "Pc",
			Self::DashPunctuation => "Pd",
			Self::OpenPunctuation => "Ps",
			Self::ClosePunctuation => "Pe",
			Self::InitialPunctuation => "Pi",
			Self::FinalPunctuation => "Pf",
			Self::OtherPunctuation => "Po",
			Self::Symbol => "S",
			Self::MathSymbol => "Sm",
			Self::CurrencySymbol => "Sc",
			Self::ModifierSymbol => "Sk",
			Self::OtherSymbol => "So",
			Self::Separator => "Z",
			Self::SpaceSeparator => "Zs",
			Self::LineSeparator => "Zl",
			Self::ParagraphSeparator => "Zp",
			Self::Other => "C",
			Self::Control => "Cc",
			Self::Format => "Cf",
			Self::PrivateUse => "Co",
			Self::Surrogate => "Cs",
			Self::Unassigned => "Cn",
		}
	}
}

/// A POSIX character class name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[allow(missing_docs)]
pub enum PosixClass {
	Alnum,
	Alpha,
	Ascii,
	Blank,
	Cntrl,
	Digit,
	Graph,
	Lower,
	Print,
	Punct,
	Space,
	Upper,
	Word,
	Xdigit,
}

impl PosixClass {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Alnum => "alnum",
			Self::Alpha => "alpha",
			Self::Ascii => "ascii",
			Self::Blank => "blank",
			Self::Cntrl => "cntrl",
			Self::Digit => "digit",
			Self::Graph => "graph",
			Self::Lower => "lower",
			Self::Print => "print",
			Self::Punct => "punct",
			Self::Space => "space",
			Self::Upper => "upper",
			Self::Word => "word",
			Self::Xdigit => "xdigit",
		}
	}
}

/// A reference to a group, used by back-references and subpattern calls.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Reference {
	pub kind: ReferenceKind,
	/// An Oniguruma recursion level, e.g. the `+2` of `\k<name+2>`.
	pub recursion_level: Option<Located<i32>>,
	/// The span of the number or name itself.
	pub span: Span,
}

impl Reference {
	pub fn new(kind: ReferenceKind, span: Span) -> Self {
		Reference {
			kind,
			recursion_level: None,
			span,
		}
	}
}

/// How a reference names its group.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ReferenceKind {
	/// A group number; `0` refers to the whole pattern.
	Absolute(u32),
	/// A non-zero offset relative to the referencing position; the sign
	/// encodes the direction.
	Relative(i32),
	/// A group name.
	Named(String),
}

/// A callout to user supplied code during matching.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Callout {
	/// PCRE `(?C…)`.
	Pcre(PcreCalloutArg),
	/// Oniguruma callout of name, `(*name[tag]{args})`.
	OnigurumaNamed {
		name: String,
		tag: Option<String>,
		args: Vec<String>,
	},
	/// Oniguruma callout of contents, `(?{…}[tag]D)`.
	OnigurumaContents {
		contents: String,
		tag: Option<String>,
		/// The direction flag, one of `X`, `<` or `>`.
		direction: Option<char>,
	},
}

/// The argument of a PCRE callout.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PcreCalloutArg {
	Number(u32),
	String(String),
}

/// A backtracking control verb.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct BacktrackingDirective {
	pub kind: BacktrackingDirectiveKind,
	pub name: Option<String>,
}

/// The verb of a backtracking directive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BacktrackingDirectiveKind {
	Accept,
	Fail,
	Mark,
	Commit,
	Prune,
	Skip,
	Then,
}

impl BacktrackingDirectiveKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Accept => "ACCEPT",
			Self::Fail => "FAIL",
			Self::Mark => "MARK",
			Self::Commit => "COMMIT",
			Self::Prune => "PRUNE",
			Self::Skip => "SKIP",
			Self::Then => "THEN",
		}
	}
}
