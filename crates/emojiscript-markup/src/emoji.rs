//! Emoji to keyword preprocessing.
//!
//! Runs before tag scanning so emoji-token programs and markup can be mixed
//! in one document, e.g. `<💾 name="x" value="5"/>` is read as `<var …/>`.

/// Emoji and the keyword each one stands for.
pub const EMOJI_KEYWORDS: &[(&str, &str)] = &[
    ("💾", "var"),
    ("🔒", "const"),
    ("📝", "log"),
    ("🔢", "number"),
    ("📊", "array"),
    ("📦", "object"),
    ("⚡", "function"),
    ("🔁", "loop"),
    ("❓", "if"),
    ("✅", "true"),
    ("❌", "false"),
    ("➕", "+"),
    ("➖", "-"),
    ("✖\u{fe0f}", "*"),
    ("➗", "/"),
];

/// Replace every known emoji with its keyword.
pub fn replace_emoji_keywords(input: &str) -> String {
    EMOJI_KEYWORDS
        .iter()
        .fold(input.to_string(), |acc, (emoji, keyword)| {
            if acc.contains(emoji) {
                acc.replace(emoji, keyword)
            } else {
                acc
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_tag_names() {
        assert_eq!(
            replace_emoji_keywords("<💾 name=\"x\" value=\"✅\"/>"),
            "<var name=\"x\" value=\"true\"/>"
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(replace_emoji_keywords("a ➕ b ✖️ c"), "a + b * c");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(replace_emoji_keywords("<print>1</print>"), "<print>1</print>");
    }
}
