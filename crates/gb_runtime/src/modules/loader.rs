use std::path::{Path, PathBuf};

use gb_syntax::DiagnosticKind;

use crate::Runtime;
use crate::util::FileKind;

pub const EXTENSION: &str = "goldbyte";

const BUNDLED_PREFIX: &str = "bundled:";

/// Libraries compiled into the binary, by the name they are included as.
pub const BUNDLED_LIBRARIES: &[(&str, &str)] = &[
    ("std", include_str!("../../stdlib/std.goldbyte")),
    ("std/math", include_str!("../../stdlib/math.goldbyte")),
    ("std/text", include_str!("../../stdlib/text.goldbyte")),
];

/// Turns the argument of `USE` into a stable key and loads its source.
/// Two includes of the same library must resolve to the same key.
pub trait LibraryLoader {
    fn resolve_key(&self, rt: &Runtime, raw: &str) -> Result<String, DiagnosticKind>;
    fn load_text(&self, rt: &Runtime, key: &str) -> Result<String, DiagnosticKind>;
}

pub struct StdLibraryLoader;

impl LibraryLoader for StdLibraryLoader {
    fn resolve_key(&self, rt: &Runtime, raw: &str) -> Result<String, DiagnosticKind> {
        if let Some((name, _)) = BUNDLED_LIBRARIES.iter().find(|(name, _)| *name == raw) {
            if let Some(dir) = rt.stdlib_path() {
                let file = name.strip_prefix("std/").unwrap_or(name);
                if let Ok(key) = locate_file(rt, &PathBuf::from(dir).join(file)) {
                    return Ok(key);
                }
            }
            return Ok(format!("{BUNDLED_PREFIX}{name}"));
        }

        let raw_path = expand_home(raw);
        if raw_path.is_absolute() {
            return locate_file(rt, &raw_path);
        }

        let mut candidates = Vec::new();
        if let Some(base) = current_base_dir(rt) {
            candidates.push(base.join(&raw_path));
        }
        candidates.push(raw_path);

        let mut last_err = None;
        for candidate in &candidates {
            match locate_file(rt, candidate) {
                Ok(key) => return Ok(key),
                Err(err @ DiagnosticKind::LibraryIsDirectory(_)) => return Err(err),
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or_else(|| DiagnosticKind::LibraryNotFound(raw.to_string())))
    }

    fn load_text(&self, rt: &Runtime, key: &str) -> Result<String, DiagnosticKind> {
        if let Some(name) = key.strip_prefix(BUNDLED_PREFIX) {
            return BUNDLED_LIBRARIES
                .iter()
                .find(|(bundled, _)| *bundled == name)
                .map(|(_, text)| text.to_string())
                .ok_or_else(|| DiagnosticKind::LibraryNotFound(name.to_string()));
        }
        rt.caps
            .fs
            .read_to_string(key)
            .map_err(DiagnosticKind::LibraryLoadFailed)
    }
}

/// `path` itself, or `path.goldbyte` when `path` has no extension and that
/// file exists.
fn locate_file(rt: &Runtime, path: &Path) -> Result<String, DiagnosticKind> {
    if path.extension().is_none() {
        let with_ext = path.with_extension(EXTENSION);
        if rt.caps.fs.kind(&with_ext.to_string_lossy()) == FileKind::File {
            return checked_file(rt, &with_ext);
        }
    }
    checked_file(rt, path)
}

fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(rest),
            None => PathBuf::from(raw),
        },
        None => PathBuf::from(raw),
    }
}

fn checked_file(rt: &Runtime, path: &Path) -> Result<String, DiagnosticKind> {
    let text = path.to_string_lossy();
    match rt.caps.fs.kind(&text) {
        FileKind::Missing => Err(DiagnosticKind::LibraryNotFound(text.to_string())),
        FileKind::Directory => Err(DiagnosticKind::LibraryIsDirectory(text.to_string())),
        FileKind::File => rt
            .caps
            .fs
            .canonicalize(&text)
            .map_err(DiagnosticKind::LibraryLoadFailed),
    }
}

/// Directory of the file currently being loaded, or of the entry file.
fn current_base_dir(rt: &Runtime) -> Option<PathBuf> {
    let base = rt
        .library_stack
        .last()
        .filter(|key| !key.starts_with(BUNDLED_PREFIX))
        .cloned()
        .or_else(|| rt.entry_path.clone())?;
    PathBuf::from(base).parent().map(|p| p.to_path_buf())
}
