use std::panic;

use gb_ir::ParseOptions;
use gb_lexer::{Lexer, normalize_source};
use gb_parser::Parser;

const SAMPLE: &str = "\
use std
namespace game {
    struct Player {
        var NUMBER hp 10
        func hit(n:NUMBER):VOID {
            ASSIGN $self::hp |self::hp - n|
        }
    }
}
func main():NUMBER {
    NEW game::Player p
    p::hit(3)
    while #p::hp > 0 && true# {
        PRINTLN \"%(p::hp)\"
        ASSIGN $p::hp |p::hp - 1|
    }
    return (NUMBER)\"0\"
}
";

fn mutate_sources(src: &str) -> Vec<String> {
    let chars: Vec<char> = src.chars().collect();
    let mut out = vec![src.to_string()];
    for step in [3usize, 7, 11, 17] {
        let mut removed = chars.clone();
        let mut i = step;
        while i < removed.len() {
            removed.remove(i);
            i += step;
        }
        out.push(removed.iter().collect());

        let mut inserted = chars.clone();
        let mut i = step;
        while i < inserted.len() {
            inserted.insert(i, ['{', '}', '|', '#', '"', '(', ':'][i % 7]);
            i += step * 2;
        }
        out.push(inserted.iter().collect());
    }
    out
}

#[test]
fn lexer_and_parser_do_not_panic_on_mutations() {
    for variant in mutate_sources(SAMPLE) {
        let result = panic::catch_unwind(|| {
            let normalized = normalize_source(&variant);
            let lex = Lexer::new(&normalized.text).lex();
            let _ = Parser::new(&lex.lines, ParseOptions::default()).parse();
        });
        assert!(result.is_ok(), "panic on {variant:?}");
    }
}
