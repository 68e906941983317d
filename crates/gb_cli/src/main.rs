mod args;
mod commands;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use gb_driver::Driver;

fn main() {
    let args = match args::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let driver = Driver::new();

    let code = match args.cmd.as_str() {
        "run" => commands::run::run(&args),
        "check" => commands::check::run(&args, &driver),
        "tokens" => commands::tokens::run(&args, &driver),
        "repl" => commands::repl::run(&args),
        "info" => commands::info::run(&args),
        other => {
            eprintln!("Unknown command: {other}\n{}", args::usage());
            2
        }
    };
    std::process::exit(code);
}
