//!
//!
//!
//!
mod classify;
mod expr;
mod parser;

pub use classify::{classify_literal, parse_cast, parse_definition, parse_invocation};
pub use parser::{ParseResult, Parser};
pub use gb_ir::*;
