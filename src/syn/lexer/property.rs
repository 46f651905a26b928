//! Lexing and classification of character properties.
//!
//! Covers the `\p{…}` / `\P{…}` escapes and the POSIX `[:…:]` syntax inside
//! custom character classes. Classification is purely syntactic: names are
//! matched loosely (ignoring case, `_`, `-` and spaces) against the tables
//! below, and anything unrecognized is preserved as
//! [`PropertyKind::Other`] rather than rejected. Only a *known key* with an
//! unknown value, like `\p{gc=Banana}`, is an error here.

use phf::phf_map;
use unicase::UniCase;

use crate::ast::{Atom, AtomKind, GeneralCategory, PosixClass, Property, PropertyKind};
use crate::span::Span;
use crate::syn::error::{bail, ParseErrorKind, ParseResult};
use crate::syn::parser::ParsingContext;

use super::Lexer;

/// General categories by their abbreviation and long name.
static GENERAL_CATEGORIES: phf::Map<UniCase<&'static str>, GeneralCategory> = phf_map! {
	UniCase::ascii("L") => GeneralCategory::Letter,
	UniCase::ascii("Letter") => GeneralCategory::Letter,
	UniCase::ascii("LC") => GeneralCategory::CasedLetter,
	UniCase::ascii("CasedLetter") => GeneralCategory::CasedLetter,
	UniCase::ascii("Lu") => GeneralCategory::UppercaseLetter,
	UniCase::ascii("UppercaseLetter") => GeneralCategory::UppercaseLetter,
	UniCase::ascii("Ll") => GeneralCategory::LowercaseLetter,
	UniCase::ascii("LowercaseLetter") => GeneralCategory::LowercaseLetter,
	UniCase::ascii("Lt") => GeneralCategory::TitlecaseLetter,
	UniCase::ascii("TitlecaseLetter") => GeneralCategory::TitlecaseLetter,
	UniCase::ascii("Lm") => GeneralCategory::ModifierLetter,
	UniCase::ascii("ModifierLetter") => GeneralCategory::ModifierLetter,
	UniCase::ascii("Lo") => GeneralCategory::OtherLetter,
	UniCase::ascii("OtherLetter") => GeneralCategory::OtherLetter,
	UniCase::ascii("M") => GeneralCategory::Mark,
	UniCase::ascii("Mark") => GeneralCategory::Mark,
	UniCase::ascii("CombiningMark") => GeneralCategory::Mark,
	UniCase::ascii("Mn") => GeneralCategory::NonspacingMark,
	UniCase::ascii("NonspacingMark") => GeneralCategory::NonspacingMark,
	UniCase::ascii("Mc") => GeneralCategory::SpacingMark,
	UniCase::ascii("SpacingMark") => GeneralCategory::SpacingMark,
	UniCase::ascii("Me") => GeneralCategory::EnclosingMark,
	UniCase::ascii("EnclosingMark") => GeneralCategory::EnclosingMark,
	UniCase::ascii("N") => GeneralCategory::Number,
	UniCase::ascii("Number") => GeneralCategory::Number,
	UniCase::ascii("Nd") => GeneralCategory::DecimalNumber,
	UniCase::ascii("DecimalNumber") => GeneralCategory::DecimalNumber,
	UniCase::ascii("digit") => GeneralCategory::DecimalNumber,
	UniCase::ascii("Nl") => GeneralCategory::LetterNumber,
	UniCase::ascii("LetterNumber") => GeneralCategory::LetterNumber,
	UniCase::ascii("No") => GeneralCategory::OtherNumber,
	UniCase::ascii("OtherNumber") => GeneralCategory::OtherNumber,
	UniCase::ascii("P") => GeneralCategory::Punctuation,
	UniCase::ascii("Punctuation") => GeneralCategory::Punctuation,
	UniCase::ascii("punct") => GeneralCategory::Punctuation,
	UniCase::ascii("Pc") => GeneralCategory::ConnectorPunctuation,
	UniCase::ascii("ConnectorPunctuation") => GeneralCategory::ConnectorPunctuation,
	UniCase::ascii("Pd") => GeneralCategory::DashPunctuation,
	UniCase::ascii("DashPunctuation") => GeneralCategory::DashPunctuation,
	UniCase::ascii("Ps") => GeneralCategory::OpenPunctuation,
	UniCase::ascii("OpenPunctuation") => GeneralCategory::OpenPunctuation,
	UniCase::ascii("Pe") => GeneralCategory::ClosePunctuation,
	UniCase::ascii("ClosePunctuation") => GeneralCategory::ClosePunctuation,
	UniCase::ascii("Pi") => GeneralCategory::InitialPunctuation,
	UniCase::ascii("InitialPunctuation") => GeneralCategory::InitialPunctuation,
	UniCase::ascii("Pf") => GeneralCategory::FinalPunctuation,
	UniCase::ascii("FinalPunctuation") => GeneralCategory::FinalPunctuation,
	UniCase::ascii("Po") => GeneralCategory::OtherPunctuation,
	UniCase::ascii("OtherPunctuation") => GeneralCategory::OtherPunctuation,
	UniCase::ascii("S") => GeneralCategory::Symbol,
	UniCase::ascii("Symbol") => GeneralCategory::Symbol,
	UniCase::ascii("Sm") => GeneralCategory::MathSymbol,
	UniCase::ascii("MathSymbol") => GeneralCategory::MathSymbol,
	UniCase::ascii("Sc") => GeneralCategory::CurrencySymbol,
	UniCase::ascii("CurrencySymbol") => GeneralCategory::CurrencySymbol,
	UniCase::ascii("Sk") => GeneralCategory::ModifierSymbol,
	UniCase::ascii("ModifierSymbol") => GeneralCategory::ModifierSymbol,
	UniCase::ascii("So") => GeneralCategory::OtherSymbol,
	UniCase::ascii("OtherSymbol") => GeneralCategory::OtherSymbol,
	UniCase::ascii("Z") => GeneralCategory::Separator,
	UniCase::ascii("Separator") => GeneralCategory::Separator,
	UniCase::ascii("Zs") => GeneralCategory::SpaceSeparator,
	UniCase::ascii("SpaceSeparator") => GeneralCategory::SpaceSeparator,
	UniCase::ascii("Zl") => GeneralCategory::LineSeparator,
	UniCase::ascii("LineSeparator") => GeneralCategory::LineSeparator,
	UniCase::ascii("Zp") => GeneralCategory::ParagraphSeparator,
	UniCase::ascii("ParagraphSeparator") => GeneralCategory::ParagraphSeparator,
	UniCase::ascii("C") => GeneralCategory::Other,
	UniCase::ascii("Other") => GeneralCategory::Other,
	UniCase::ascii("Cc") => GeneralCategory::Control,
	UniCase::ascii("Control") => GeneralCategory::Control,
	UniCase::ascii("cntrl") => GeneralCategory::Control,
	UniCase::ascii("Cf") => GeneralCategory::Format,
	UniCase::ascii("Format") => GeneralCategory::Format,
	UniCase::ascii("Co") => GeneralCategory::PrivateUse,
	UniCase::ascii("PrivateUse") => GeneralCategory::PrivateUse,
	UniCase::ascii("Cn") => GeneralCategory::Unassigned,
	UniCase::ascii("Unassigned") => GeneralCategory::Unassigned,
	UniCase::ascii("Cs") => GeneralCategory::Surrogate,
	UniCase::ascii("Surrogate") => GeneralCategory::Surrogate,
};

/// Boolean properties by their abbreviation and long name, mapped to the
/// canonical name recorded in the tree.
static BINARY_PROPERTIES: phf::Map<UniCase<&'static str>, &'static str> = phf_map! {
	UniCase::ascii("Alpha") => "Alphabetic",
	UniCase::ascii("Alphabetic") => "Alphabetic",
	UniCase::ascii("Upper") => "Uppercase",
	UniCase::ascii("Uppercase") => "Uppercase",
	UniCase::ascii("Lower") => "Lowercase",
	UniCase::ascii("Lowercase") => "Lowercase",
	UniCase::ascii("WSpace") => "White_Space",
	UniCase::ascii("WhiteSpace") => "White_Space",
	UniCase::ascii("Cased") => "Cased",
	UniCase::ascii("CI") => "Case_Ignorable",
	UniCase::ascii("CaseIgnorable") => "Case_Ignorable",
	UniCase::ascii("NChar") => "Noncharacter_Code_Point",
	UniCase::ascii("NoncharacterCodePoint") => "Noncharacter_Code_Point",
	UniCase::ascii("DI") => "Default_Ignorable_Code_Point",
	UniCase::ascii("DefaultIgnorableCodePoint") => "Default_Ignorable_Code_Point",
	UniCase::ascii("AHex") => "ASCII_Hex_Digit",
	UniCase::ascii("ASCIIHexDigit") => "ASCII_Hex_Digit",
	UniCase::ascii("Hex") => "Hex_Digit",
	UniCase::ascii("HexDigit") => "Hex_Digit",
	UniCase::ascii("IDS") => "ID_Start",
	UniCase::ascii("IDStart") => "ID_Start",
	UniCase::ascii("IDC") => "ID_Continue",
	UniCase::ascii("IDContinue") => "ID_Continue",
	UniCase::ascii("XIDS") => "XID_Start",
	UniCase::ascii("XIDStart") => "XID_Start",
	UniCase::ascii("XIDC") => "XID_Continue",
	UniCase::ascii("XIDContinue") => "XID_Continue",
	UniCase::ascii("Math") => "Math",
	UniCase::ascii("Dash") => "Dash",
	UniCase::ascii("Dia") => "Diacritic",
	UniCase::ascii("Diacritic") => "Diacritic",
	UniCase::ascii("Ext") => "Extender",
	UniCase::ascii("Extender") => "Extender",
	UniCase::ascii("GrBase") => "Grapheme_Base",
	UniCase::ascii("GraphemeBase") => "Grapheme_Base",
	UniCase::ascii("GrExt") => "Grapheme_Extend",
	UniCase::ascii("GraphemeExtend") => "Grapheme_Extend",
	UniCase::ascii("QMark") => "Quotation_Mark",
	UniCase::ascii("QuotationMark") => "Quotation_Mark",
	UniCase::ascii("Radical") => "Radical",
	UniCase::ascii("SD") => "Soft_Dotted",
	UniCase::ascii("SoftDotted") => "Soft_Dotted",
	UniCase::ascii("Term") => "Terminal_Punctuation",
	UniCase::ascii("TerminalPunctuation") => "Terminal_Punctuation",
	UniCase::ascii("STerm") => "Sentence_Terminal",
	UniCase::ascii("SentenceTerminal") => "Sentence_Terminal",
	UniCase::ascii("UIdeo") => "Unified_Ideograph",
	UniCase::ascii("UnifiedIdeograph") => "Unified_Ideograph",
	UniCase::ascii("Ideo") => "Ideographic",
	UniCase::ascii("Ideographic") => "Ideographic",
	UniCase::ascii("VS") => "Variation_Selector",
	UniCase::ascii("VariationSelector") => "Variation_Selector",
	UniCase::ascii("Dep") => "Deprecated",
	UniCase::ascii("Deprecated") => "Deprecated",
	UniCase::ascii("LOE") => "Logical_Order_Exception",
	UniCase::ascii("LogicalOrderException") => "Logical_Order_Exception",
	UniCase::ascii("PatSyn") => "Pattern_Syntax",
	UniCase::ascii("PatternSyntax") => "Pattern_Syntax",
	UniCase::ascii("PatWS") => "Pattern_White_Space",
	UniCase::ascii("PatternWhiteSpace") => "Pattern_White_Space",
	UniCase::ascii("RI") => "Regional_Indicator",
	UniCase::ascii("RegionalIndicator") => "Regional_Indicator",
	UniCase::ascii("BidiC") => "Bidi_Control",
	UniCase::ascii("BidiControl") => "Bidi_Control",
	UniCase::ascii("BidiM") => "Bidi_Mirrored",
	UniCase::ascii("BidiMirrored") => "Bidi_Mirrored",
	UniCase::ascii("JoinC") => "Join_Control",
	UniCase::ascii("JoinControl") => "Join_Control",
	UniCase::ascii("Emoji") => "Emoji",
	UniCase::ascii("EPres") => "Emoji_Presentation",
	UniCase::ascii("EmojiPresentation") => "Emoji_Presentation",
	UniCase::ascii("EMod") => "Emoji_Modifier",
	UniCase::ascii("EmojiModifier") => "Emoji_Modifier",
	UniCase::ascii("EBase") => "Emoji_Modifier_Base",
	UniCase::ascii("EmojiModifierBase") => "Emoji_Modifier_Base",
	UniCase::ascii("EComp") => "Emoji_Component",
	UniCase::ascii("EmojiComponent") => "Emoji_Component",
	UniCase::ascii("ExtPict") => "Extended_Pictographic",
	UniCase::ascii("ExtendedPictographic") => "Extended_Pictographic",
};

static POSIX_CLASSES: phf::Map<UniCase<&'static str>, PosixClass> = phf_map! {
	UniCase::ascii("alnum") => PosixClass::Alnum,
	UniCase::ascii("alpha") => PosixClass::Alpha,
	UniCase::ascii("ascii") => PosixClass::Ascii,
	UniCase::ascii("blank") => PosixClass::Blank,
	UniCase::ascii("cntrl") => PosixClass::Cntrl,
	UniCase::ascii("digit") => PosixClass::Digit,
	UniCase::ascii("graph") => PosixClass::Graph,
	UniCase::ascii("lower") => PosixClass::Lower,
	UniCase::ascii("print") => PosixClass::Print,
	UniCase::ascii("punct") => PosixClass::Punct,
	UniCase::ascii("space") => PosixClass::Space,
	UniCase::ascii("upper") => PosixClass::Upper,
	UniCase::ascii("word") => PosixClass::Word,
	UniCase::ascii("xdigit") => PosixClass::Xdigit,
};

impl Lexer<'_> {
	/// Lex the braced body of `\p{…}` / `\P{…}`. The `\p` or `\P` has
	/// already been consumed; `start` is the offset of the backslash.
	pub(super) fn lex_property(&mut self, capital: bool, start: u32) -> ParseResult<Atom> {
		if !self.reader.eat('{') {
			bail!(ParseErrorKind::ExpectedBrace, @self.reader.next_char_span());
		}
		let caret = self.reader.eat('^');
		let body_start = self.reader.offset();
		loop {
			match self.reader.peek() {
				Some('}') => break,
				Some(_) => {
					self.reader.next();
				}
				None => bail!(
					ParseErrorKind::UnexpectedEndOfInput {
						expected: "`}` to close the character property",
					},
					@self.reader.span_here()
				),
			}
		}
		let body_span = self.reader.span_from(body_start);
		let body = self.reader.span_text(body_span);
		let kind = classify_property(body, body_span)?;
		self.reader.next();
		Ok(Atom::new(
			AtomKind::Property(Property {
				kind,
				inverted: capital ^ caret,
			}),
			self.reader.span_from(start),
		))
	}

	/// Lex a POSIX character class `[:alpha:]` / `[:^alpha:]`.
	///
	/// Only valid inside a custom character class; tried before nested class
	/// parsing so `[:` is not mistaken for a new class.
	pub fn lex_posix_class(&mut self, ctx: &ParsingContext) -> ParseResult<Option<Atom>> {
		if !ctx.in_custom_character_class {
			return Ok(None);
		}
		let start = self.reader.offset();
		if !self.reader.eat_str("[:") {
			return Ok(None);
		}
		let caret = self.reader.eat('^');
		let name_start = self.reader.offset();
		while self.reader.eat_when(|x| x.is_ascii_alphanumeric() || x == '_').is_some() {}
		let name_span = self.reader.span_from(name_start);
		if name_span.is_empty() || !self.reader.eat_str(":]") {
			self.reader.backup(start);
			return Ok(None);
		}
		let name = self.reader.span_text(name_span);
		let kind = match POSIX_CLASSES.get(&UniCase::ascii(name)) {
			Some(class) => PropertyKind::Posix(*class),
			None => classify_property(name, name_span)?,
		};
		Ok(Some(Atom::new(
			AtomKind::Property(Property {
				kind,
				inverted: caret,
			}),
			self.reader.span_from(start),
		)))
	}
}

/// Classify a property body, either `key=value` or a bare name.
fn classify_property(body: &str, span: Span) -> ParseResult<PropertyKind> {
	if let Some((key, value)) = body.split_once('=') {
		let normalized = normalize(key);
		let lookup = UniCase::ascii(normalized.as_str());
		if lookup == UniCase::ascii("gc") || lookup == UniCase::ascii("generalcategory") {
			let Some(category) = lookup_loose(&GENERAL_CATEGORIES, value) else {
				bail!(
					ParseErrorKind::UnknownProperty {
						key: key.to_owned(),
						value: value.to_owned(),
					},
					@span
				);
			};
			return Ok(PropertyKind::GeneralCategory(*category));
		}
		if lookup == UniCase::ascii("sc") || lookup == UniCase::ascii("script") {
			return Ok(PropertyKind::Script(value.to_owned()));
		}
		if lookup == UniCase::ascii("scx") || lookup == UniCase::ascii("scriptextensions") {
			return Ok(PropertyKind::ScriptExtensions(value.to_owned()));
		}
		// Unknown keys are a consumer concern.
		return Ok(PropertyKind::Other {
			key: Some(key.to_owned()),
			value: value.to_owned(),
		});
	}

	let normalized = normalize(body);
	let lookup = UniCase::ascii(normalized.as_str());
	if lookup == UniCase::ascii("any") {
		return Ok(PropertyKind::Any);
	}
	if lookup == UniCase::ascii("assigned") {
		return Ok(PropertyKind::Assigned);
	}
	if lookup == UniCase::ascii("ascii") {
		return Ok(PropertyKind::Ascii);
	}
	if let Some(category) = lookup_loose(&GENERAL_CATEGORIES, body) {
		return Ok(PropertyKind::GeneralCategory(*category));
	}
	if let Some(name) = lookup_loose(&BINARY_PROPERTIES, body) {
		return Ok(PropertyKind::Binary(name.to_string()));
	}
	if let Some(class) = lookup_loose(&POSIX_CLASSES, body) {
		return Ok(PropertyKind::Posix(*class));
	}
	// A bare script name, block name or anything newer than these tables.
	Ok(PropertyKind::Other {
		key: None,
		value: body.to_owned(),
	})
}

/// Loose matching: `\p{White Space}`, `\p{white-space}` and `\p{WhiteSpace}`
/// all resolve to the same property.
fn lookup_loose<'a, V>(map: &'a phf::Map<UniCase<&'static str>, V>, name: &str) -> Option<&'a V> {
	let normalized = normalize(name);
	map.get(&UniCase::ascii(normalized.as_str()))
}

fn normalize(name: &str) -> String {
	let mut stripped: &str = name;
	// An `is` prefix is dropped, as in `\p{isAlpha}`.
	if stripped.len() > 2 && (stripped.starts_with("is") || stripped.starts_with("Is")) {
		stripped = &stripped[2..];
	}
	stripped.chars().filter(|x| !matches!(x, '_' | '-' | ' ')).collect()
}
