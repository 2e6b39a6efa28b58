//! Identifier validation and lightweight source checks.

/// Words that may not be used as declared names. Matched exactly, so `If`
/// is accepted.
pub const RESERVED_WORDS: &[&str] = &[
    "if", "else", "for", "while", "function", "return", "const", "let", "var",
];

/// Why a declared name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("empty identifier")]
    Empty,

    #[error("invalid identifier: {0}")]
    Malformed(String),

    #[error("'{0}' is a reserved keyword")]
    Reserved(String),
}

/// Check `name` against `^[A-Za-z_][A-Za-z0-9_]*$` and the reserved words.
pub fn validate_identifier(name: &str) -> Result<(), IdentifierError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(IdentifierError::Empty);
    };
    if !(first.is_ascii_alphabetic() || first == '_')
        || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(IdentifierError::Malformed(name.to_string()));
    }
    if RESERVED_WORDS.contains(&name) {
        return Err(IdentifierError::Reserved(name.to_string()));
    }
    Ok(())
}

/// Count `{}` and `()` and report any imbalance.
pub fn check_balance(code: &str) -> Vec<String> {
    let mut problems = Vec::new();
    if code.is_empty() {
        problems.push("Code cannot be empty".to_string());
    }

    let (mut braces, mut parens) = (0i64, 0i64);
    for ch in code.chars() {
        match ch {
            '{' => braces += 1,
            '}' => braces -= 1,
            '(' => parens += 1,
            ')' => parens -= 1,
            _ => {}
        }
    }

    if braces != 0 {
        problems.push("Unbalanced braces".to_string());
    }
    if parens != 0 {
        problems.push("Unbalanced parentheses".to_string());
    }
    problems
}

const MARKUP_OPENERS: &[&str] = &[
    "<print", "<var", "<let", "<const", "<function", "<loop", "<if", "<class",
];

/// Whether `code` contains any of the common opening tags.
pub fn looks_like_markup(code: &str) -> bool {
    let lower = code.to_ascii_lowercase();
    MARKUP_OPENERS.iter().any(|tag| lower.contains(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for name in ["x", "_tmp", "camelCase", "snake_case_2", "If"] {
            assert_eq!(validate_identifier(name), Ok(()), "{name}");
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(validate_identifier(""), Err(IdentifierError::Empty));
        assert_eq!(
            validate_identifier("2fast"),
            Err(IdentifierError::Malformed("2fast".into()))
        );
        assert_eq!(
            validate_identifier("my-var"),
            Err(IdentifierError::Malformed("my-var".into()))
        );
        assert_eq!(
            validate_identifier("$el"),
            Err(IdentifierError::Malformed("$el".into()))
        );
    }

    #[test]
    fn test_reserved_words() {
        for word in RESERVED_WORDS {
            assert_eq!(
                validate_identifier(word),
                Err(IdentifierError::Reserved(word.to_string()))
            );
        }
        assert_eq!(
            validate_identifier("if").unwrap_err().to_string(),
            "'if' is a reserved keyword"
        );
    }

    #[test]
    fn test_verdict_is_stable() {
        for name in ["ok", "if", "", "9"] {
            assert_eq!(validate_identifier(name), validate_identifier(name));
        }
    }

    #[test]
    fn test_check_balance() {
        assert!(check_balance("function f() { return (1); }").is_empty());
        assert_eq!(check_balance(""), ["Code cannot be empty"]);
        assert_eq!(
            check_balance("if (x { y"),
            ["Unbalanced braces", "Unbalanced parentheses"]
        );
        assert_eq!(check_balance("f())"), ["Unbalanced parentheses"]);
    }

    #[test]
    fn test_looks_like_markup() {
        assert!(looks_like_markup("<PRINT>1</PRINT>"));
        assert!(looks_like_markup("x\n<loop times=\"3\"></loop>"));
        assert!(!looks_like_markup("const x = a < b;"));
    }
}
