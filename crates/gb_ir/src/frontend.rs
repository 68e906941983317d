use gb_syntax::GbError;

use crate::Program;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub allow_multiline: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_multiline: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CompiledUnit {
    pub text: String,
    pub program: Program,
    pub diagnostics: Vec<GbError>,
}

impl CompiledUnit {
    /// The program, or the first diagnostic if parsing failed.
    pub fn into_program(self) -> Result<Program, GbError> {
        match self.diagnostics.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.program),
        }
    }
}

pub trait Frontend {
    fn compile_text(
        &self,
        path: &str,
        input: &str,
        options: ParseOptions,
    ) -> Result<CompiledUnit, GbError>;
}
