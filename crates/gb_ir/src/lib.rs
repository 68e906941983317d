//!
//!
//!
mod frontend;
mod names;
mod program;
mod token;
mod value;

pub use frontend::*;
pub use names::*;
pub use program::*;
pub use token::*;
pub use value::*;
