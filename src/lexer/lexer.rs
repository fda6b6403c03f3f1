//! Character classification.
use super::{char_ext::*, tokens::*};

/// Classifies a single character.
///
/// Literal characters are matched before the general letter rule, so `Z`
/// and `T` are always [`TokenKind::UtcDateZ`] and [`TokenKind::UtcDateT`].
/// Anything that matches no rule is [`TokenKind::Unknown`].
pub fn classify(ch: char) -> Token {
    let kind = match ch {
        ' ' => TokenKind::Whitespace,
        '0'..='9' => TokenKind::Digit,
        '!' => TokenKind::ExclamationPoint,
        '&' => TokenKind::Ampersand,
        ',' => TokenKind::Comma,
        '?' => TokenKind::QuestionMark,
        '.' => TokenKind::Period,
        ':' => TokenKind::Colon,
        ';' => TokenKind::SemiColon,
        '>' => TokenKind::GreaterThan,
        '<' => TokenKind::LessThan,
        '(' => TokenKind::LeftParenthesis,
        ')' => TokenKind::RightParenthesis,
        '%' => TokenKind::Percent,
        '\n' => TokenKind::Newline,
        '=' => TokenKind::EqualitySign,
        '-' => TokenKind::SubtractionSign,
        '{' => TokenKind::LeftCurlyBrace,
        '}' => TokenKind::RightCurlyBrace,
        '/' => TokenKind::ForwardSlash,
        '\\' => TokenKind::BackwardSlash,
        '"' => TokenKind::Quote,
        '\'' => TokenKind::Apostrophe,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        'Z' => TokenKind::UtcDateZ,
        'T' => TokenKind::UtcDateT,
        _ if ch.is_unicode_letter() => TokenKind::UnicodeLetter,
        _ => TokenKind::Unknown,
    };

    Token::new(ch, kind)
}

/// Classifies every character of `source`, left to right.
/// Produces exactly one token per character.
pub fn lex(source: &str) -> Vec<Token> {
    source.chars().map(classify).collect()
}
