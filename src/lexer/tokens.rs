//! Tokens, as produced by the classifier.
use std::fmt::{self, Display};

/// A single classified character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    character: char,
    kind: TokenKind,
}
impl Token {
    pub fn new(character: char, kind: TokenKind) -> Self {
        Self { character, kind }
    }

    /// The source character this token was produced from.
    pub fn character(&self) -> char {
        self.character
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Token: {}, Name: {}", self.character, self.kind)
    }
}

/// The lexical category of a single character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Unknown,
    Whitespace,
    Digit,
    ExclamationPoint,
    Ampersand,
    UnicodeLetter,
    Comma,
    QuestionMark,
    Period,
    Colon,
    SemiColon,
    GreaterThan,
    LessThan,
    LeftParenthesis,
    RightParenthesis,
    LeftCurlyBrace,
    RightCurlyBrace,
    SubtractionSign,
    EqualitySign,
    Percent,
    Newline,
    ForwardSlash,
    BackwardSlash,
    Quote,
    Apostrophe,
    LeftBracket,
    RightBracket,
    /// The `Z` designator of a UTC timestamp.
    UtcDateZ,
    /// The `T` separator of a UTC timestamp.
    UtcDateT,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 29] = [
        TokenKind::Unknown,
        TokenKind::Whitespace,
        TokenKind::Digit,
        TokenKind::ExclamationPoint,
        TokenKind::Ampersand,
        TokenKind::UnicodeLetter,
        TokenKind::Comma,
        TokenKind::QuestionMark,
        TokenKind::Period,
        TokenKind::Colon,
        TokenKind::SemiColon,
        TokenKind::GreaterThan,
        TokenKind::LessThan,
        TokenKind::LeftParenthesis,
        TokenKind::RightParenthesis,
        TokenKind::LeftCurlyBrace,
        TokenKind::RightCurlyBrace,
        TokenKind::SubtractionSign,
        TokenKind::EqualitySign,
        TokenKind::Percent,
        TokenKind::Newline,
        TokenKind::ForwardSlash,
        TokenKind::BackwardSlash,
        TokenKind::Quote,
        TokenKind::Apostrophe,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::UtcDateZ,
        TokenKind::UtcDateT,
    ];

    /// Human-readable name, for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Unknown => "Unknown",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Digit => "Digit",
            TokenKind::ExclamationPoint => "Exclamation Point",
            TokenKind::Ampersand => "Ampersand",
            TokenKind::UnicodeLetter => "Letter",
            TokenKind::Comma => "Comma",
            TokenKind::QuestionMark => "Question Mark",
            TokenKind::Period => "Period",
            TokenKind::Colon => "Colon",
            TokenKind::SemiColon => "Semi-Colon",
            TokenKind::GreaterThan => "Greater Than",
            TokenKind::LessThan => "Less Than",
            TokenKind::LeftParenthesis => "Left Parenthesis",
            TokenKind::RightParenthesis => "Right Parenthesis",
            TokenKind::LeftCurlyBrace => "Left Curly Brace",
            TokenKind::RightCurlyBrace => "Right Curly Brace",
            TokenKind::SubtractionSign => "Subtraction Sign",
            TokenKind::EqualitySign => "Equality Symbol",
            TokenKind::Percent => "Percent Symbol",
            TokenKind::Newline => "Newline Character",
            TokenKind::ForwardSlash => "/",
            TokenKind::BackwardSlash => "\\",
            TokenKind::Quote => "Quote",
            TokenKind::Apostrophe => "Apostrophe",
            TokenKind::LeftBracket => "Left Bracket",
            TokenKind::RightBracket => "Right Bracket",
            TokenKind::UtcDateZ => "UTC Date Z",
            TokenKind::UtcDateT => "UTC Date T",
        }
    }

    /// The only character that classifies as this kind, if there is exactly one.
    pub fn literal(self) -> Option<char> {
        let ch = match self {
            TokenKind::Unknown | TokenKind::Digit | TokenKind::UnicodeLetter => return None,
            TokenKind::Whitespace => ' ',
            TokenKind::ExclamationPoint => '!',
            TokenKind::Ampersand => '&',
            TokenKind::Comma => ',',
            TokenKind::QuestionMark => '?',
            TokenKind::Period => '.',
            TokenKind::Colon => ':',
            TokenKind::SemiColon => ';',
            TokenKind::GreaterThan => '>',
            TokenKind::LessThan => '<',
            TokenKind::LeftParenthesis => '(',
            TokenKind::RightParenthesis => ')',
            TokenKind::LeftCurlyBrace => '{',
            TokenKind::RightCurlyBrace => '}',
            TokenKind::SubtractionSign => '-',
            TokenKind::EqualitySign => '=',
            TokenKind::Percent => '%',
            TokenKind::Newline => '\n',
            TokenKind::ForwardSlash => '/',
            TokenKind::BackwardSlash => '\\',
            TokenKind::Quote => '"',
            TokenKind::Apostrophe => '\'',
            TokenKind::LeftBracket => '[',
            TokenKind::RightBracket => ']',
            TokenKind::UtcDateZ => 'Z',
            TokenKind::UtcDateT => 'T',
        };
        Some(ch)
    }
}
impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
