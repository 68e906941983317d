//! GoldByte runtime: storage, evaluators, the interpreter and its macros.

#![allow(clippy::collapsible_if)]
#![allow(clippy::new_without_default)]
#![allow(clippy::too_many_arguments)]

pub mod eval;
mod interpreter;
pub mod macro_registry;
mod macros;
mod modules;
mod runtime;
pub mod storage;
mod util;

pub use interpreter::ExecContext;
pub use macro_registry::{Macro, MacroCall, MacroFn, MacroProvider, MacroRegistry, StdMacroProvider};
pub use modules::{BUNDLED_LIBRARIES, LibraryLoader, StdLibraryLoader};
pub use runtime::{Flow, Runtime, RuntimeConfig};
pub use storage::{Function, Scope, Storage, Variable, WriteOutcome};

pub use util::Appendable;
pub use util::{
    Capabilities, CaptureConsole, Console, ErrorHandler, FileKind, FileSystem, Lcg64,
    RngAlgorithm, StdConsole, StdFileSystem, StderrErrorHandler, value_to_string,
};
pub use util::{FastHashMap, fast_map_new};
