use std::sync::LazyLock;

use gb_ir::{NamespacePath, QualifiedName};
use regex::{Captures, Regex};

use crate::storage::Storage;
use crate::util::Appendable;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\(([^()\s]+)\)").expect("valid placeholder pattern"));

/// Replaces `%(a|b)` with the display text of each named variable that
/// exists. Missing names contribute nothing.
pub fn interpolate(text: &str, storage: &Storage, namespace: &NamespacePath) -> String {
    if !text.contains("%(") {
        return text.to_string();
    }
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            let mut out = String::new();
            for name in caps[1].split('|').filter(|n| !n.is_empty()) {
                let key = QualifiedName::resolve(name, namespace);
                if let Some(var) = storage.get(&key) {
                    out.append_value(&var.value);
                }
            }
            out
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Scope, Variable};
    use gb_ir::Value;

    #[test]
    fn placeholders_expand() {
        let mut storage = Storage::new();
        let ns = NamespacePath::parse("p");
        storage
            .set(QualifiedName::local("n"), Variable::new(Value::Number(5.0), Scope::Global))
            .unwrap();
        storage
            .set(
                QualifiedName::new(ns.clone(), "name"),
                Variable::new(Value::Str("Ann".into()), Scope::Global),
            )
            .unwrap();

        assert_eq!(interpolate("n=%(n)", &storage, &ns), "n=5");
        assert_eq!(interpolate("%(self::name|n)!", &storage, &ns), "Ann5!");
        assert_eq!(interpolate("[%(missing)]", &storage, &ns), "[]");
        assert_eq!(interpolate("plain %", &storage, &ns), "plain %");
    }
}
