//! System capability traits for dependency injection.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use gb_syntax::{GbError, render_error};

pub trait Console {
    fn emit(&mut self, text: &str);
    fn emit_warning(&mut self, text: &str);
    /// Blocks until a line is available. `None` at end of input.
    fn read_line(&mut self) -> Option<String>;
}

pub struct StdConsole;

impl Console for StdConsole {
    fn emit(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }

    fn emit_warning(&mut self, text: &str) {
        eprintln!("[WARNING] {text}");
    }

    fn read_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match std::io::stdin().lock().read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buf.trim_end_matches(['\n', '\r']).to_string()),
        }
    }
}

#[derive(Default)]
struct Captured {
    output: String,
    warnings: Vec<String>,
    input: VecDeque<String>,
}

/// Console that records output in memory and replays scripted input.
/// Clones share the same buffers.
#[derive(Clone, Default)]
pub struct CaptureConsole {
    inner: Rc<RefCell<Captured>>,
}

impl CaptureConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let console = Self::new();
        console
            .inner
            .borrow_mut()
            .input
            .extend(lines.into_iter().map(Into::into));
        console
    }

    pub fn output(&self) -> String {
        self.inner.borrow().output.clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.inner.borrow().warnings.clone()
    }
}

impl Console for CaptureConsole {
    fn emit(&mut self, text: &str) {
        self.inner.borrow_mut().output.push_str(text);
    }

    fn emit_warning(&mut self, text: &str) {
        self.inner.borrow_mut().warnings.push(text.to_string());
    }

    fn read_line(&mut self) -> Option<String> {
        self.inner.borrow_mut().input.pop_front()
    }
}

pub trait ErrorHandler {
    fn report(&mut self, error: &GbError);
}

pub struct StderrErrorHandler;

impl ErrorHandler for StderrErrorHandler {
    fn report(&mut self, error: &GbError) {
        eprintln!("{}", render_error(error));
    }
}

/// Collecting handler; clones share the list.
impl ErrorHandler for Rc<RefCell<Vec<GbError>>> {
    fn report(&mut self, error: &GbError) {
        self.borrow_mut().push(error.clone());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Missing,
    File,
    Directory,
}

pub trait FileSystem {
    fn kind(&self, path: &str) -> FileKind;
    fn canonicalize(&self, path: &str) -> Result<String, String>;
    fn read_to_string(&self, path: &str) -> Result<String, String>;
}

pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn kind(&self, path: &str) -> FileKind {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => FileKind::Directory,
            Ok(_) => FileKind::File,
            Err(_) => FileKind::Missing,
        }
    }

    fn canonicalize(&self, path: &str) -> Result<String, String> {
        let canonical = std::fs::canonicalize(path).map_err(|e| e.to_string())?;
        Ok(canonical.to_string_lossy().to_string())
    }

    fn read_to_string(&self, path: &str) -> Result<String, String> {
        std::fs::read_to_string(path).map_err(|e| e.to_string())
    }
}

pub trait RngAlgorithm {
    fn next_u64(&self, state: &mut u64) -> u64;
}

pub struct Lcg64;

impl RngAlgorithm for Lcg64 {
    fn next_u64(&self, state: &mut u64) -> u64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        *state
    }
}

pub struct Capabilities {
    pub console: Box<dyn Console>,
    pub error_handler: Box<dyn ErrorHandler>,
    pub fs: Box<dyn FileSystem>,
    pub rng: Box<dyn RngAlgorithm>,
    pub rng_state: u64,
}

impl Default for Capabilities {
    fn default() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x853c49e6748fea9b);
        Self {
            console: Box::new(StdConsole),
            error_handler: Box::new(StderrErrorHandler),
            fs: Box::new(StdFileSystem),
            rng: Box::new(Lcg64),
            rng_state: seed,
        }
    }
}
