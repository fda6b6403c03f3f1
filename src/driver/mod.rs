//! Reads a source line by line and classifies every character of every line.
mod error;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, trace};

use crate::lexer::{lex, tokens::Token};

pub use error::ReadError;

/// Reads `source` to the end and classifies each of its lines.
///
/// Line terminators (`\n`, `\r\n`, or a `\r` ending the last line) are
/// stripped before classification, so the result never contains a newline
/// token for them. Invalid UTF-8 is replaced with `U+FFFD`, which classifies
/// as unknown. Element `i` of the result holds the tokens of line `i`. The
/// first read error aborts the whole operation.
pub fn tokenize_lines<R: BufRead>(source: R) -> Result<Vec<Vec<Token>>, ReadError> {
    let lines = read_lines(source)?;
    debug!("Read {} lines", lines.len());

    let tokenized: Vec<Vec<Token>> = lines.iter().map(|line| lex(line)).collect();
    trace!(
        "Produced {} tokens",
        tokenized.iter().map(Vec::len).sum::<usize>()
    );

    Ok(tokenized)
}

/// Classifies each line of an in-memory string.
pub fn tokenize_str(source: &str) -> Vec<Vec<Token>> {
    match tokenize_lines(source.as_bytes()) {
        Ok(lines) => lines,
        Err(err) => unreachable!("Reading from memory failed: {}", err),
    }
}

/// Opens the file at `path` and classifies each of its lines.
pub fn tokenize_file(path: impl AsRef<Path>) -> Result<Vec<Vec<Token>>, ReadError> {
    let path = path.as_ref();
    debug!("Opening {}", path.display());

    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    tokenize_lines(BufReader::new(file))
}

fn read_lines<R: BufRead>(mut source: R) -> Result<Vec<String>, ReadError> {
    let mut lines = vec![];
    let mut buf = vec![];

    loop {
        buf.clear();
        let read = source
            .read_until(b'\n', &mut buf)
            .map_err(|source| ReadError::Read {
                line: lines.len() + 1,
                source,
            })?;
        if read == 0 {
            return Ok(lines);
        }

        lines.push(decode_line(strip_terminator(&buf)));
    }
}

/// Removes a trailing `\n`, then a single trailing `\r`.
fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn decode_line(line: &[u8]) -> String {
    String::from_utf8_lossy(line).into_owned()
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};

    use super::*;
    use crate::lexer::tokens::TokenKind;

    fn kinds(lines: &[Vec<Token>]) -> Vec<Vec<TokenKind>> {
        lines
            .iter()
            .map(|line| line.iter().map(Token::kind).collect())
            .collect()
    }

    fn assert_tokenizes(source: &str, expected: Vec<Vec<TokenKind>>) {
        let lines = tokenize_lines(Cursor::new(source)).expect("Unexpected read error");
        assert_eq!(expected, kinds(&lines), "When tokenizing {:?}", source);
        assert_eq!(expected, kinds(&tokenize_str(source)), "When tokenizing {:?}", source);
    }

    /// Yields `good` and then fails.
    struct FailingReader {
        good: Cursor<Vec<u8>>,
    }
    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.good.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "disk on fire")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn splits_lines_on_lf() {
        assert_tokenizes(
            "a\nb",
            vec![vec![TokenKind::UnicodeLetter], vec![TokenKind::UnicodeLetter]],
        );
    }

    #[test]
    fn splits_lines_on_crlf() {
        assert_tokenizes(
            "1\r\n2\r\n",
            vec![vec![TokenKind::Digit], vec![TokenKind::Digit]],
        );
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_tokenizes("Z!\n", vec![vec![TokenKind::UtcDateZ, TokenKind::ExclamationPoint]]);
    }

    #[test]
    fn keeps_empty_lines() {
        assert_tokenizes(
            "\n\n.",
            vec![vec![], vec![], vec![TokenKind::Period]],
        );
    }

    #[test]
    fn empty_source_has_no_lines() {
        assert_tokenizes("", vec![]);
    }

    #[test]
    fn lines_preserve_order_and_length() {
        let source = "first line\nsecond, §\nT-Z";
        let lines = tokenize_lines(Cursor::new(source)).expect("Unexpected read error");

        assert_eq!(lines.len(), 3);
        for (tokens, line) in lines.iter().zip(source.lines()) {
            assert_eq!(tokens.len(), line.chars().count());
            let characters: String = tokens.iter().map(Token::character).collect();
            assert_eq!(characters, line);
        }
    }

    #[test]
    fn read_error_aborts() {
        let reader = BufReader::new(FailingReader {
            good: Cursor::new(b"ok\nfine\npartial".to_vec()),
        });

        match tokenize_lines(reader) {
            Ok(lines) => panic!("Expected a read error, but got {:?}", lines),
            Err(ReadError::Read { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source.kind(), io::ErrorKind::Other);
            }
            Err(other) => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn invalid_utf8_is_unknown() {
        let lines = tokenize_lines(Cursor::new(b"ok\na\xffb".to_vec())).expect("Unexpected read error");

        assert_eq!(
            kinds(&lines),
            vec![
                vec![TokenKind::UnicodeLetter, TokenKind::UnicodeLetter],
                vec![
                    TokenKind::UnicodeLetter,
                    TokenKind::Unknown,
                    TokenKind::UnicodeLetter,
                ],
            ]
        );
        assert_eq!(lines[1][1].character(), char::REPLACEMENT_CHARACTER);
    }

    #[test]
    fn strips_carriage_return_ending_last_line() {
        assert_tokenizes("1\n2\r", vec![vec![TokenKind::Digit], vec![TokenKind::Digit]]);
    }

    #[test]
    fn keeps_carriage_return_inside_line() {
        assert_tokenizes(
            "a\rb",
            vec![vec![
                TokenKind::UnicodeLetter,
                TokenKind::Unknown,
                TokenKind::UnicodeLetter,
            ]],
        );
    }

    #[test]
    fn strips_only_one_carriage_return() {
        assert_tokenizes(
            "a\r\r\n",
            vec![vec![TokenKind::UnicodeLetter, TokenKind::Unknown]],
        );
    }

    #[test]
    fn missing_file_fails_to_open() {
        let path = std::env::temp_dir().join("charlex-does-not-exist.txt");
        let err = tokenize_file(&path).expect_err("Expected opening to fail");

        assert!(matches!(err, ReadError::Open { .. }));
        assert_eq!(err.io_error().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn tokenizes_file() {
        let path = std::env::temp_dir().join(format!("charlex-{}.txt", std::process::id()));
        std::fs::write(&path, "1,2\n  \n").expect("Unable to write test file");

        let lines = tokenize_file(&path);
        std::fs::remove_file(&path).expect("Unable to remove test file");

        assert_eq!(
            kinds(&lines.expect("Unexpected read error")),
            vec![
                vec![TokenKind::Digit, TokenKind::Comma, TokenKind::Digit],
                vec![TokenKind::Whitespace, TokenKind::Whitespace],
            ]
        );
    }
}
