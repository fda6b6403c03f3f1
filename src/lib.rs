//! Classifies text, character by character, into a fixed set of lexical
//! token kinds.
//!
//! [`lexer::classify`] maps a single character to a [`lexer::tokens::Token`];
//! the [`driver`] applies it to every line of a source.
pub mod driver;
pub mod lexer;
