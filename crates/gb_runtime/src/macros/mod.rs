//! Built-in macro handlers.

mod common;
mod console;
mod system;
mod variables;

pub use console::{macro_input, macro_print, macro_println};
pub use system::{
    macro_disable, macro_enable, macro_error, macro_free, macro_new, macro_panic, macro_throw,
    macro_use,
};
pub use variables::{macro_assign, macro_dyn_var_make, macro_dyn_var_read, macro_modulo, macro_rand};
