use gb_ir::{InvocationArgument, Token, Value};
use gb_parser::{classify_literal, parse_invocation};
use proptest::prelude::*;

proptest! {
    #[test]
    fn finite_numbers_classify_as_numbers(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        let word = n.to_string();
        prop_assert_eq!(classify_literal(&word), Some(Token::Number(n)));
    }

    #[test]
    fn lowercase_words_are_plain_text(word in "[a-z][a-z0-9_]{0,8}") {
        prop_assume!(word != "true" && word != "false");
        prop_assert_eq!(classify_literal(&word), Some(Token::PlainText(word.clone())));
    }

    #[test]
    fn invocation_keeps_argument_order(args in proptest::collection::vec(-1000i32..1000, 0..6)) {
        let list: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let word = format!("f({})", list.join(","));
        let call = parse_invocation(&word).unwrap().unwrap();
        prop_assert_eq!(call.name, "f");
        let expected: Vec<InvocationArgument> = args
            .iter()
            .map(|a| InvocationArgument::Literal(Value::Number(f64::from(*a))))
            .collect();
        prop_assert_eq!(call.args, expected);
    }
}
