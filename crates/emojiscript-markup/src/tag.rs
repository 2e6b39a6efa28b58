//! Parsed markup tags.

use serde::Serialize;
use std::collections::BTreeMap;

/// A parsed `<name attr="v">content</name>` unit.
///
/// `content` holds the text between the open and close tags with every
/// nested tag already replaced by its generated output. The nested tags are
/// still kept in `children` for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Lowercased tag name.
    pub name: String,
    /// Attribute values. A bare attribute is recorded as `"true"`.
    pub attributes: BTreeMap<String, String>,
    pub content: String,
    pub children: Vec<Tag>,
    /// 1-based line of the opening `<`.
    pub line: usize,
    /// 1-based column of the opening `<`.
    pub column: usize,
}

impl Tag {
    pub fn new(name: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            line,
            column,
            ..Self::default()
        }
    }

    /// Builder-style attribute setter, mostly for tests.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Attribute value, treating an empty value the same as a missing one.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// True only when the attribute is literally `"true"` (bare attributes included).
    pub fn flag(&self, name: &str) -> bool {
        self.attributes.get(name).is_some_and(|v| v == "true")
    }

    /// Content with surrounding whitespace removed.
    pub fn body(&self) -> &str {
        self.content.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_lowercased() {
        let tag = Tag::new("PRINT", 1, 1);
        assert_eq!(tag.name, "print");
    }

    #[test]
    fn test_empty_attr_is_missing() {
        let tag = Tag::new("var", 1, 1).with_attr("name", "").with_attr("value", "5");
        assert_eq!(tag.attr("name"), None);
        assert_eq!(tag.attr("value"), Some("5"));
    }

    #[test]
    fn test_flag() {
        let tag = Tag::new("function", 1, 1)
            .with_attr("async", "true")
            .with_attr("static", "yes");
        assert!(tag.flag("async"));
        assert!(!tag.flag("static"));
        assert!(!tag.flag("missing"));
    }
}
