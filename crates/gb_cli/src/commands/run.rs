use gb_driver::Driver;
use gb_runtime::Runtime;

use crate::args::{CliArgs, usage};
use crate::commands::common::{CliErrorHandler, file_arg, read_source, runtime_config, set_stdlib_path};

pub(crate) fn run(args: &CliArgs) -> i32 {
    let Some(path) = file_arg(args) else {
        eprintln!("Missing <file>\n{}", usage());
        return 2;
    };
    let source = match read_source(&path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return 2;
        }
    };

    let mut rt = Runtime::with_config(runtime_config(args));
    rt.set_frontend(Box::new(Driver::new()));
    rt.set_entry_path(&path);
    set_stdlib_path(&mut rt);
    let text = source.text.clone();
    rt.set_error_handler(Box::new(CliErrorHandler { source }));

    rt.start(&text, &path)
}
