//!
//!
mod error;
mod keyword;
mod loc;
mod render;
mod source;
pub mod words;

pub use error::{ErrorKind, GbError};
pub use keyword::Keyword;
pub use loc::{DiagnosticKind, DiagnosticsFormatter};
pub use render::{render_error, render_error_in};
pub use source::SourceFile;
pub use words::unquote;
