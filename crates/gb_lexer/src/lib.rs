//! gb_lexer: word splitter for GoldByte source.
//!
//! Normalizes source text, splits each line into words, and collects diagnostics.
//! Entry points: `Lexer::new(input).lex()`, `normalize_source` and `keyword`.
mod keywords;
mod lexer;
mod normalize;

pub use keywords::{HEADER_MACROS, keyword};
pub use lexer::{LexResult, LexedLine, Lexer, Word};
pub use normalize::normalize_source;
