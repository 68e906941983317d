use std::io::{BufRead, Write};

use gb_driver::Driver;
use gb_runtime::{Runtime, RuntimeConfig};
use gb_syntax::{SourceFile, render_error_in};

use crate::args::CliArgs;
use crate::commands::common::{runtime_config, set_stdlib_path};

const ORIGIN: &str = "<repl>";
const PROMPT: &str = "> ";

/// Every line runs against the same runtime, so definitions persist.
pub(crate) fn run(args: &CliArgs) -> i32 {
    let config = RuntimeConfig {
        allow_multiline: false,
        show_exit_message: false,
        skip_main: true,
        ..runtime_config(args)
    };
    let mut rt = Runtime::with_config(config);
    rt.set_frontend(Box::new(Driver::new()));
    set_stdlib_path(&mut rt);

    loop {
        {
            let mut out = std::io::stdout().lock();
            let _ = out.write_all(PROMPT.as_bytes());
            let _ = out.flush();
        }
        let mut buf = String::new();
        match std::io::stdin().lock().read_line(&mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("stdin error: {e}");
                return 2;
            }
        }
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim() == ":exit" {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = rt.load(line, ORIGIN) {
            let source = SourceFile::new(ORIGIN, line);
            eprintln!("RuntimeError: {}", render_error_in(&source, &e));
        }
        if rt.is_halted() {
            break;
        }
    }
    0
}
