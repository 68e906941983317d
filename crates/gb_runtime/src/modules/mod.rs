//! Library resolution and inclusion.

mod library;
mod loader;

pub(crate) use library::use_library;
pub use loader::{BUNDLED_LIBRARIES, LibraryLoader, StdLibraryLoader};
