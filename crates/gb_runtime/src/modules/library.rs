use gb_syntax::{DiagnosticKind, GbError};

use crate::Runtime;

/// Loads the library named by `raw` into the global namespace once.
/// `at` builds errors for failures that belong to the including line.
pub(crate) fn use_library(
    rt: &mut Runtime,
    raw: &str,
    at: impl Fn(DiagnosticKind) -> GbError,
) -> Result<(), GbError> {
    if !rt.config.allow_libraries {
        return Err(at(DiagnosticKind::LibrariesDisallowed));
    }
    let key = rt.library_loader.resolve_key(rt, raw).map_err(&at)?;
    if rt.config.trace {
        eprintln!("trace: use {key}");
    }
    if rt.loaded_libraries.contains(&key) {
        return Ok(());
    }
    if let Some(pos) = rt.library_stack.iter().position(|k| k == &key) {
        let mut chain = rt.library_stack[pos..].to_vec();
        chain.push(key);
        return Err(at(DiagnosticKind::CircularLibrary(chain)));
    }

    let text = rt.library_loader.load_text(rt, &key).map_err(&at)?;
    rt.library_stack.push(key.clone());
    let result = rt.load(&text, &key);
    rt.library_stack.pop();
    result.map_err(|err| err.with_origin(key.clone()))?;
    rt.loaded_libraries.insert(key);
    Ok(())
}
