#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    // Lexer
    UnterminatedString,

    // Parser
    UnexpectedToken(String),
    UnfinishedCodeBlock,
    UnexpectedClosingBrace,
    ClosingBraceNotAlone,
    InvalidBlock,
    MultilineDisabled,
    HeaderMacroMisplaced,
    InvalidEquation,
    UnfinishedEquation,
    InvalidLogicalExpression,
    UnfinishedLogicalExpression,
    InvalidFunctionArgument(String),
    InvalidFunctionDefinition(String),

    // Types
    TypeMismatch {
        expected: String,
        actual: String,
    },
    ArgumentCountMismatch {
        expected: usize,
        actual: usize,
    },
    InvalidArgumentType {
        function: String,
        expected: String,
        actual: String,
    },
    InvalidVariableType(String),
    InvalidCast {
        value: String,
        target: String,
    },
    NotANumber(String),
    ExpectedNumberInComparison,
    ExpectedBool,
    VoidReturnWithValue,
    MissingReturnValue,
    EntryPointType(String),

    // Interpreter
    DivisionByZero,
    UndefinedVariable(String),
    UndefinedFunction(String),
    UndefinedStruct(String),
    UnexpectedInStatement(String),
    IncompleteStatement(&'static str),
    NoReturnValue(String),
    ConstantWrite(String),
    ObjectNotFound(String),
    UnexpectedCodeBlock,
    LibraryNotFound(String),
    LibraryIsDirectory(String),
    CircularLibrary(Vec<String>),
    LibrariesDisallowed,
    LibraryLoadFailed(String),

    // Macros
    UnknownMacro(String),
    MacroDisabled(String),
    InvalidMacroArgument,
    ExpectedMacroArgument {
        position: usize,
        expected: &'static str,
    },
    InputUnavailable,
    InvalidRange {
        min: String,
        max: String,
    },

    // Custom
    Raw(String),
}

pub struct DiagnosticsFormatter;

impl DiagnosticsFormatter {
    pub fn format(kind: &DiagnosticKind) -> String {
        match kind {
            DiagnosticKind::UnterminatedString => "Unterminated string literal.".into(),
            DiagnosticKind::UnexpectedToken(word) => format!("Unexpected token: {}", word),
            DiagnosticKind::UnfinishedCodeBlock => "Didn't finish code block.".into(),
            DiagnosticKind::UnexpectedClosingBrace => "Unexpected closing brace.".into(),
            DiagnosticKind::ClosingBraceNotAlone => {
                "Closing brace must be the only word on its line.".into()
            }
            DiagnosticKind::InvalidBlock => "Invalid block.".into(),
            DiagnosticKind::MultilineDisabled => "Multi-line constructs are disabled.".into(),
            DiagnosticKind::HeaderMacroMisplaced => {
                "Header macros must be placed at the top of the file.".into()
            }
            DiagnosticKind::InvalidEquation => "Invalid arrangement in equation.".into(),
            DiagnosticKind::UnfinishedEquation => "Didn't finish equation.".into(),
            DiagnosticKind::InvalidLogicalExpression => {
                "Invalid arrangement in logical expression.".into()
            }
            DiagnosticKind::UnfinishedLogicalExpression => {
                "Didn't finish logical expression.".into()
            }
            DiagnosticKind::InvalidFunctionArgument(arg) => {
                format!("Invalid function argument: {}", arg)
            }
            DiagnosticKind::InvalidFunctionDefinition(word) => {
                format!("Invalid function definition: {}", word)
            }
            DiagnosticKind::TypeMismatch { expected, actual } => {
                format!("Expected {}, got {}.", expected, actual)
            }
            DiagnosticKind::ArgumentCountMismatch { expected, actual } => {
                format!("Expected {} arguments, got {}.", expected, actual)
            }
            DiagnosticKind::InvalidArgumentType {
                function,
                expected,
                actual,
            } => format!(
                "Invalid type for argument for function \"{}\": expected {}, got {}.",
                function, expected, actual
            ),
            DiagnosticKind::InvalidVariableType(ty) => format!("Invalid variable type: {}", ty),
            DiagnosticKind::InvalidCast { value, target } => {
                format!("Can't cast \"{}\" to {}.", value, target)
            }
            DiagnosticKind::NotANumber(name) => format!("\"{}\" is not a number.", name),
            DiagnosticKind::ExpectedNumberInComparison => {
                "Expected number in comparison.".into()
            }
            DiagnosticKind::ExpectedBool => "Expected bool in logical expression.".into(),
            DiagnosticKind::VoidReturnWithValue => {
                "Can't return a value from a VOID function.".into()
            }
            DiagnosticKind::MissingReturnValue => "Expected value from function.".into(),
            DiagnosticKind::EntryPointType(name) => {
                format!("Function \"{}\" must be declared with NUMBER return type.", name)
            }
            DiagnosticKind::DivisionByZero => "Can't divide by 0".into(),
            DiagnosticKind::UndefinedVariable(name) => {
                format!("Variable \"{}\" doesn't exist.", name)
            }
            DiagnosticKind::UndefinedFunction(name) => {
                format!("No function found named \"{}\".", name)
            }
            DiagnosticKind::UndefinedStruct(name) => {
                format!("No struct found named \"{}\".", name)
            }
            DiagnosticKind::UnexpectedInStatement(what) => {
                format!("Unexpected {} in statement.", what)
            }
            DiagnosticKind::IncompleteStatement(missing) => format!("Expected {}.", missing),
            DiagnosticKind::NoReturnValue(name) => {
                format!("Function \"{}\" doesn't return a value.", name)
            }
            DiagnosticKind::ConstantWrite(name) => {
                format!("Can't change value of constant \"{}\".", name)
            }
            DiagnosticKind::ObjectNotFound(name) => format!("Object \"{}\" doesn't exist.", name),
            DiagnosticKind::UnexpectedCodeBlock => {
                "Got code block, even though it's not needed.".into()
            }
            DiagnosticKind::LibraryNotFound(path) => format!("Library doesn't exist: {}", path),
            DiagnosticKind::LibraryIsDirectory(path) => {
                format!("Library can't be directory: {}", path)
            }
            DiagnosticKind::CircularLibrary(chain) => {
                format!("Circular library inclusion: {}", chain.join(" -> "))
            }
            DiagnosticKind::LibrariesDisallowed => "Libraries are disallowed.".into(),
            DiagnosticKind::LibraryLoadFailed(msg) => format!("Library load failed: {}", msg),
            DiagnosticKind::UnknownMacro(name) => format!("Unknown macro: [{}]", name),
            DiagnosticKind::MacroDisabled(name) => format!("Macro [{}] is disabled.", name),
            DiagnosticKind::InvalidMacroArgument => "Invalid argument for macro.".into(),
            DiagnosticKind::ExpectedMacroArgument { position, expected } => {
                format!("Expected {} as argument {}.", expected, position + 1)
            }
            DiagnosticKind::InputUnavailable => "No input available.".into(),
            DiagnosticKind::InvalidRange { min, max } => {
                format!("Invalid range: {} is greater than {}.", min, max)
            }
            DiagnosticKind::Raw(s) => s.clone(),
        }
    }
}
