//! Functionality for classifying characters into [`Token`]s.
mod char_ext;
mod lexer;

pub mod tokens;

pub use char_ext::CharExt;
pub use lexer::*;

#[allow(unused_imports, reason = "Docstring uses this")]
use tokens::Token;
