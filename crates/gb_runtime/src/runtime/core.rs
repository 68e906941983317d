use gb_ir::Frontend;
use indexmap::IndexSet;

use super::config::RuntimeConfig;
use crate::macro_registry::{Macro, MacroProvider, StdMacroProvider};
use crate::modules::{self, LibraryLoader};
use crate::storage::Storage;
use crate::util::{Capabilities, Console, ErrorHandler, FileSystem, RngAlgorithm};

pub struct Runtime {
    pub storage: Storage,
    pub(crate) config: RuntimeConfig,
    pub(crate) caps: Capabilities,
    pub(crate) frontend: Option<Box<dyn Frontend>>,
    pub(crate) library_loader: Box<dyn LibraryLoader>,
    pub(crate) entry_path: Option<String>,
    pub(crate) stdlib_path: Option<String>,
    /// Keys of the libraries currently being loaded, outermost first.
    pub(crate) library_stack: Vec<String>,
    pub(crate) loaded_libraries: IndexSet<String>,
    pub(crate) next_scope: u64,
    /// Set once `exit` ran anywhere; every enclosing program unwinds.
    pub(crate) halted: bool,
}

impl Runtime {
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        let mut rt = Self {
            storage: Storage::new(),
            config,
            caps: Capabilities::default(),
            frontend: None,
            library_loader: Box::new(modules::StdLibraryLoader),
            entry_path: None,
            stdlib_path: None,
            library_stack: Vec::new(),
            loaded_libraries: IndexSet::new(),
            next_scope: 0,
            halted: false,
        };
        rt.install_macros(&StdMacroProvider);
        rt
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RuntimeConfig) {
        self.config = config;
    }

    pub fn set_frontend(&mut self, frontend: Box<dyn Frontend>) {
        self.frontend = Some(frontend);
    }

    pub fn set_console(&mut self, console: Box<dyn Console>) {
        self.caps.console = console;
    }

    pub fn set_error_handler(&mut self, handler: Box<dyn ErrorHandler>) {
        self.caps.error_handler = handler;
    }

    pub fn set_file_system(&mut self, fs: Box<dyn FileSystem>) {
        self.caps.fs = fs;
    }

    pub fn set_rng_algorithm(&mut self, rng: Box<dyn RngAlgorithm>) {
        self.caps.rng = rng;
    }

    pub fn set_rng_seed(&mut self, seed: u64) {
        self.caps.rng_state = seed;
    }

    pub fn set_library_loader(&mut self, loader: Box<dyn LibraryLoader>) {
        self.library_loader = loader;
    }

    /// Libraries included with a relative path are looked up next to this
    /// file. Falls back to the raw path when it can't be canonicalized.
    pub fn set_entry_path(&mut self, path: &str) {
        let canonical = self
            .caps
            .fs
            .canonicalize(path)
            .unwrap_or_else(|_| path.to_string());
        self.entry_path = Some(canonical);
    }

    pub fn entry_path(&self) -> Option<&str> {
        self.entry_path.as_deref()
    }

    /// Directory searched for `std/<name>` before the bundled sources.
    pub fn set_stdlib_path(&mut self, path: String) {
        self.stdlib_path = Some(path);
    }

    pub fn stdlib_path(&self) -> Option<&str> {
        self.stdlib_path.as_deref()
    }

    pub fn register_macro(&mut self, name: &str, handler: impl Macro + 'static) {
        self.storage.macros.register(name, handler);
    }

    pub fn install_macros(&mut self, provider: &dyn MacroProvider) {
        provider.install(&mut self.storage.macros);
    }

    /// Whether `exit` ran since the last [`run`](Self::run).
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn loaded_libraries(&self) -> impl Iterator<Item = &str> {
        self.loaded_libraries.iter().map(String::as_str)
    }

    pub(crate) fn emit(&mut self, text: &str) {
        self.caps.console.emit(text);
    }

    pub(crate) fn read_line(&mut self) -> Option<String> {
        self.caps.console.read_line()
    }

    /// Uniform integer in `[min, max]`. Callers guarantee `min <= max`.
    pub(crate) fn random_in(&mut self, min: i64, max: i64) -> i64 {
        let raw = self.caps.rng.next_u64(&mut self.caps.rng_state);
        let span = (max.wrapping_sub(min) as u64).wrapping_add(1);
        let offset = if span == 0 { raw } else { raw % span };
        min.wrapping_add(offset as i64)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
