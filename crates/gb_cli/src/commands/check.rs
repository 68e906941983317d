use gb_driver::Driver;
use gb_ir::ParseOptions;

use crate::args::{CliArgs, usage};
use crate::commands::common::file_arg;
use crate::commands::emit_diagnostics;

pub(crate) fn run(args: &CliArgs, driver: &Driver) -> i32 {
    let Some(path) = file_arg(args) else {
        eprintln!("Missing <file>\n{}", usage());
        return 2;
    };
    let parsed = match driver.parse_file(&path, ParseOptions::default()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return 2;
        }
    };
    emit_diagnostics(&parsed.source, &parsed.diagnostics, args.json_out);
    if parsed.has_errors() { 1 } else { 0 }
}
