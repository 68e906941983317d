#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use gb_runtime::{CaptureConsole, Runtime, RuntimeConfig};
use gb_syntax::GbError;

pub struct Harness {
    pub rt: Runtime,
    pub console: CaptureConsole,
    pub errors: Rc<RefCell<Vec<GbError>>>,
}

pub fn harness() -> Harness {
    harness_with(RuntimeConfig {
        show_exit_message: false,
        ..RuntimeConfig::default()
    })
}

pub fn harness_with(config: RuntimeConfig) -> Harness {
    let console = CaptureConsole::new();
    let errors = Rc::new(RefCell::new(Vec::new()));
    let mut rt = Runtime::with_config(config);
    rt.set_frontend(Box::new(gb_driver::Driver::new()));
    rt.set_console(Box::new(console.clone()));
    rt.set_error_handler(Box::new(errors.clone()));
    Harness {
        rt,
        console,
        errors,
    }
}

/// Top-level code only; `main` is not required.
pub fn script() -> Harness {
    harness_with(RuntimeConfig {
        show_exit_message: false,
        skip_main: true,
        ..RuntimeConfig::default()
    })
}

impl Harness {
    pub fn with_input(mut self, lines: &[&str]) -> Self {
        self.console = CaptureConsole::with_input(lines.iter().copied());
        self.rt.set_console(Box::new(self.console.clone()));
        self
    }

    pub fn start(&mut self, src: &str) -> i32 {
        self.rt.start(src, "")
    }

    pub fn output(&self) -> String {
        self.console.output()
    }

    pub fn first_error(&self) -> GbError {
        self.errors
            .borrow()
            .first()
            .cloned()
            .expect("an error was reported")
    }

    pub fn assert_clean(&self) {
        let errors = self.errors.borrow();
        assert!(errors.is_empty(), "{errors:?}");
    }
}
