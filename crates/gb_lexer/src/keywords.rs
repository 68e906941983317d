use gb_syntax::Keyword;

static KEYWORDS: phf::Map<&'static str, Keyword> = phf::phf_map! {
    "var" => Keyword::Var,
    "const" => Keyword::Const,
    "if" => Keyword::If,
    "while" => Keyword::While,
    "func" => Keyword::Func,
    "return" => Keyword::Return,
    "exit" => Keyword::Exit,
    "namespace" => Keyword::Namespace,
    "struct" => Keyword::Struct,
};

/// Macros that may only appear before any other statement of a file.
pub static HEADER_MACROS: phf::Set<&'static str> = phf::phf_set! {
    "use",
};

pub fn keyword(word: &str) -> Option<Keyword> {
    KEYWORDS.get(word).copied()
}
