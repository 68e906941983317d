use std::path::{Path, PathBuf};

use gb_runtime::{ErrorHandler, Runtime, RuntimeConfig};
use gb_syntax::{GbError, SourceFile, render_error_in};

use crate::args::CliArgs;

const EXTENSION: &str = "goldbyte";

/// The single `<file>` argument. `game` means `game.goldbyte` when no file
/// named `game` exists.
pub(crate) fn file_arg(args: &CliArgs) -> Option<String> {
    let [path] = args.positional.as_slice() else {
        return None;
    };
    let bare = Path::new(path);
    if !bare.exists() && bare.extension().is_none() {
        let with_ext = bare.with_extension(EXTENSION);
        if with_ext.exists() {
            return Some(with_ext.to_string_lossy().to_string());
        }
    }
    Some(path.clone())
}

pub(crate) fn read_source(path: &str) -> Result<SourceFile, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("Failed to read file {path}: {e}"))?;
    Ok(SourceFile::new(path.to_string(), text))
}

pub(crate) fn print_json(obj: serde_json::Value) {
    println!("{}", obj);
}

fn trace_enabled() -> bool {
    std::env::var("GB_TRACE").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

pub(crate) fn runtime_config(args: &CliArgs) -> RuntimeConfig {
    RuntimeConfig {
        show_exit_message: !args.no_exit_message,
        trace: trace_enabled(),
        ..RuntimeConfig::default()
    }
}

/// `GB_STDLIB_PATH`, else a `stdlib` directory next to the workspace the
/// binary was built in, else `./stdlib`. Without any, `std` is bundled.
pub(crate) fn set_stdlib_path(rt: &mut Runtime) {
    if let Some(dir) = stdlib_dir() {
        rt.set_stdlib_path(dir.to_string_lossy().to_string());
    }
}

fn stdlib_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("GB_STDLIB_PATH") {
        return Some(PathBuf::from(dir));
    }
    let next_to_exe = std::env::current_exe().ok().and_then(|exe_path| {
        let project_root = exe_path.parent()?.parent()?.parent()?;
        Some(project_root.join("stdlib"))
    });
    if let Some(stdlib) = next_to_exe.filter(|p| p.is_dir()) {
        return Some(stdlib);
    }
    let cwd = std::env::current_dir().ok()?.join("stdlib");
    cwd.is_dir().then_some(cwd)
}

/// Prints `RuntimeError: ` and the rendered error, quoting the source line
/// when the error came from `source`.
pub(crate) struct CliErrorHandler {
    pub source: SourceFile,
}

impl ErrorHandler for CliErrorHandler {
    fn report(&mut self, error: &GbError) {
        eprintln!("RuntimeError: {}", render_error_in(&self.source, error));
    }
}
