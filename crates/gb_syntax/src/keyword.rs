use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Var,
    Const,
    If,
    While,
    Func,
    Return,
    Exit,
    Namespace,
    Struct,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Var => "var",
            Keyword::Const => "const",
            Keyword::If => "if",
            Keyword::While => "while",
            Keyword::Func => "func",
            Keyword::Return => "return",
            Keyword::Exit => "exit",
            Keyword::Namespace => "namespace",
            Keyword::Struct => "struct",
        }
    }

    /// Keywords whose line owns a code block.
    pub fn opens_block(self) -> bool {
        matches!(
            self,
            Keyword::If | Keyword::While | Keyword::Func | Keyword::Namespace | Keyword::Struct
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
