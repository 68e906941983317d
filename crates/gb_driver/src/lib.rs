//!
//!
mod frontend;

pub use frontend::{Driver, LexedFile, LexedWord, ParsedFile};
