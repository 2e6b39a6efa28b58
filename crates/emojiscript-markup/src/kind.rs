//! Canonical tag kinds and their synonyms.

use std::collections::HashMap;
use std::sync::OnceLock;

/// The behavior a tag name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Print,
    Variable,
    Function,
    Loop,
    While,
    If,
    Else,
    Class,
    Method,
    Import,
    Export,
    Return,
    Array,
    Object,
    Try,
    Catch,
    Comment,
    Async,
    Await,
    Switch,
    Case,
    Break,
    Continue,
}

/// Every tag name the generator understands, grouped by kind.
const SYNONYMS: &[(TagKind, &[&str])] = &[
    (TagKind::Print, &["print", "log", "console"]),
    (TagKind::Variable, &["var", "let", "const", "variable"]),
    (TagKind::Function, &["function", "func", "fn"]),
    (TagKind::Loop, &["loop", "for", "foreach", "repeat"]),
    (TagKind::While, &["while"]),
    (TagKind::If, &["if", "condition"]),
    (TagKind::Else, &["else"]),
    (TagKind::Class, &["extend", "class"]),
    (TagKind::Method, &["method"]),
    (TagKind::Import, &["import", "require", "use"]),
    (TagKind::Export, &["export"]),
    (TagKind::Return, &["return"]),
    (TagKind::Array, &["array", "list"]),
    (TagKind::Object, &["object", "dict", "map"]),
    (TagKind::Try, &["try"]),
    (TagKind::Catch, &["catch"]),
    (TagKind::Comment, &["comment"]),
    (TagKind::Async, &["async"]),
    (TagKind::Await, &["await"]),
    (TagKind::Switch, &["switch", "match"]),
    (TagKind::Case, &["case"]),
    (TagKind::Break, &["break"]),
    (TagKind::Continue, &["continue"]),
];

static KINDS: OnceLock<HashMap<&'static str, TagKind>> = OnceLock::new();

fn kinds() -> &'static HashMap<&'static str, TagKind> {
    KINDS.get_or_init(|| {
        SYNONYMS
            .iter()
            .flat_map(|(kind, names)| names.iter().map(move |name| (*name, *kind)))
            .collect()
    })
}

impl TagKind {
    /// Resolve a tag name (any ASCII case) to its kind.
    pub fn lookup(name: &str) -> Option<TagKind> {
        kinds().get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Tag names that resolve to this kind.
    pub fn names(&self) -> &'static [&'static str] {
        SYNONYMS
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, names)| *names)
            .unwrap_or(&[])
    }

    /// All kinds in declaration order.
    pub fn all() -> impl Iterator<Item = TagKind> {
        SYNONYMS.iter().map(|(kind, _)| *kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_resolve_to_one_kind() {
        for name in ["print", "log", "console"] {
            assert_eq!(TagKind::lookup(name), Some(TagKind::Print));
        }
        assert_eq!(TagKind::lookup("extend"), Some(TagKind::Class));
        assert_eq!(TagKind::lookup("foreach"), Some(TagKind::Loop));
        assert_eq!(TagKind::lookup("dict"), Some(TagKind::Object));
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(TagKind::lookup("PRINT"), Some(TagKind::Print));
        assert_eq!(TagKind::lookup("Const"), Some(TagKind::Variable));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(TagKind::lookup("div"), None);
        assert_eq!(TagKind::lookup(""), None);
    }

    #[test]
    fn test_names_roundtrip() {
        for kind in TagKind::all() {
            for name in kind.names() {
                assert_eq!(TagKind::lookup(name), Some(kind));
            }
        }
    }
}
