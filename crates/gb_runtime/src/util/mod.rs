mod appendable;
mod capabilities;
mod fast_map;

pub use appendable::{Appendable, value_to_string};
pub use capabilities::{
    Capabilities, CaptureConsole, Console, ErrorHandler, FileKind, FileSystem, Lcg64,
    RngAlgorithm, StdConsole, StdFileSystem, StderrErrorHandler,
};
pub use fast_map::{FastHashMap, fast_map_new};
