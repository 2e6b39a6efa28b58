//! Markup scanner and parser.
//!
//! Scans left to right. Top-level input is a mix of tags and raw code lines;
//! each tag is rendered as soon as its closing tag is found, with nested tags
//! rendered first and spliced into the parent's content as plain text.

use crate::cursor::{Checkpoint, Cursor, is_whitespace};
use crate::emoji::replace_emoji_keywords;
use crate::error::TranspileError;
use crate::flavor::Flavor;
use crate::output::javascript::{DiagnosticMark, Generator};
use crate::tag::Tag;
use serde::Serialize;

/// Result of transpiling one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transpilation {
    /// Rendered output, one top-level unit per line group, newline-terminated.
    pub output: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Names declared by variable tags, sorted.
    pub declared: Vec<String>,
    /// Top-level tags that parsed successfully, with their children.
    pub tags: Vec<Tag>,
}

impl Transpilation {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Deepest tag nesting accepted. Deeper tags are reported instead of parsed.
pub const MAX_DEPTH: usize = 256;

/// Where scanning picks up after a failure, and how many diagnostics had
/// been recorded when the scan first passed that point.
#[derive(Debug, Clone, Copy)]
struct Resume {
    position: Checkpoint,
    diagnostics: DiagnosticMark,
}

/// A tag-level failure and where scanning should pick up again.
#[derive(Debug)]
struct ParseFailure {
    message: String,
    resume: Resume,
}

/// Parses one markup document. Built per call and consumed by [`parse`].
///
/// [`parse`]: MarkupParser::parse
pub struct MarkupParser {
    cursor: Cursor,
    generator: Generator,
    depth: usize,
}

impl MarkupParser {
    /// Emoji keywords are substituted here, before any scanning.
    pub fn new(source: &str, flavor: Flavor) -> Self {
        Self {
            cursor: Cursor::new(replace_emoji_keywords(source)),
            generator: Generator::new(flavor),
            depth: 0,
        }
    }

    /// Parse and render the whole document.
    ///
    /// Tag-level errors do not stop the scan: the failing tag is reported and
    /// scanning resumes after it, so one pass surfaces as many problems as
    /// possible. Diagnostics recorded past the resume point are dropped
    /// before the rescan so each problem is reported once. If anything was
    /// reported the result is returned inside
    /// [`TranspileError::Rejected`].
    pub fn parse(mut self) -> Result<Transpilation, TranspileError> {
        if self.cursor.remaining().trim().is_empty() {
            return Err(TranspileError::EmptyInput);
        }

        let mut output = String::new();
        let mut tags = Vec::new();

        while let Some(ch) = self.cursor.peek() {
            if ch == '<' {
                match self.parse_tag() {
                    Ok(tag) => {
                        output.push_str(&self.generator.render(&tag));
                        output.push('\n');
                        tags.push(tag);
                    }
                    Err(failure) => {
                        tracing::debug!(message = %failure.message, "skipping tag");
                        self.cursor.restore(failure.resume.position);
                        self.generator.rewind(failure.resume.diagnostics);
                        self.generator.error(failure.message);
                    }
                }
            } else if !is_whitespace(ch) {
                output.push_str(&self.parse_raw_code());
                output.push('\n');
            } else {
                self.cursor.advance();
            }
        }

        let (errors, warnings, declared) = self.generator.finish();
        let result = Transpilation {
            output,
            errors,
            warnings,
            declared,
            tags,
        };

        if result.is_clean() {
            Ok(result)
        } else {
            tracing::warn!(errors = result.errors.len(), "document rejected");
            Err(TranspileError::Rejected(Box::new(result)))
        }
    }

    /// Parse one tag starting at `<`, rendering any nested tags into its content.
    fn parse_tag(&mut self) -> Result<Tag, ParseFailure> {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        self.cursor.advance();
        let retry = self.resume_point();

        if self.depth >= MAX_DEPTH {
            return Err(ParseFailure {
                message: format!("tag nesting too deep at line {line}, column {column}"),
                resume: retry,
            });
        }

        if self.cursor.peek() == Some('/') {
            return Err(self.stray_closing_tag(line, column, retry));
        }

        let name = self.read_identifier();
        if name.is_empty() {
            return Err(self.fail_here("expected tag name", retry));
        }

        let mut tag = Tag::new(name, line, column);
        self.read_attributes(&mut tag);

        if self.cursor.peek() == Some('/') {
            self.cursor.advance();
            if self.cursor.peek() != Some('>') {
                return Err(self.fail_here("expected '>' after '/'", retry));
            }
            self.cursor.advance();
            tracing::debug!(tag = %tag.name, line, column, "parsed self-closing tag");
            return Ok(tag);
        }

        if self.cursor.peek() != Some('>') {
            return Err(self.fail_here("expected '>'", retry));
        }
        self.cursor.advance();

        self.depth += 1;
        let parsed = self.parse_content(tag);
        self.depth -= 1;
        parsed
    }

    /// Accumulate content until the matching close tag.
    ///
    /// A `</other>` that does not match is kept as literal text. A `<` that is
    /// not followed by a letter is literal too (`a < b`).
    ///
    /// The source's own margin (the leading whitespace of the first indented
    /// content line) is removed from every literal line, so the generator's
    /// indentation is the only indentation in the output. Rendered children
    /// are spliced in verbatim.
    fn parse_content(&mut self, mut tag: Tag) -> Result<Tag, ParseFailure> {
        let content_start = self.resume_point();
        let mut content = String::new();
        let mut line_start = false;
        let mut leading = String::new();
        let mut margin: Option<usize> = None;

        while let Some(ch) = self.cursor.peek() {
            if line_start {
                if ch == ' ' || ch == '\t' {
                    leading.push(ch);
                    self.cursor.advance();
                    continue;
                }
                if ch != '\n' && ch != '\r' {
                    let margin = *margin.get_or_insert(leading.len());
                    content.push_str(&leading[leading.len().min(margin)..]);
                }
                leading.clear();
                line_start = false;
            }

            if ch != '<' {
                content.push(ch);
                self.cursor.advance();
                line_start = ch == '\n';
                continue;
            }

            match self.cursor.peek_next() {
                Some('/') => {
                    let saved = self.cursor.checkpoint();
                    self.cursor.advance();
                    self.cursor.advance();
                    let closing = self.read_identifier();

                    if closing.eq_ignore_ascii_case(&tag.name) {
                        self.cursor.skip_whitespace();
                        if self.cursor.peek() != Some('>') {
                            return Err(ParseFailure {
                                message: format!(
                                    "expected '>' in closing tag at line {}",
                                    self.cursor.line()
                                ),
                                resume: content_start,
                            });
                        }
                        self.cursor.advance();
                        tag.content = content.trim().to_string();
                        tracing::debug!(
                            tag = %tag.name,
                            line = tag.line,
                            column = tag.column,
                            children = tag.children.len(),
                            "parsed tag"
                        );
                        return Ok(tag);
                    }

                    self.cursor.restore(saved);
                    content.push('<');
                    self.cursor.advance();
                }
                Some(next) if next.is_ascii_alphabetic() => {
                    let child = self.parse_tag()?;
                    content.push_str(&self.generator.render(&child));
                    tag.children.push(child);
                }
                _ => {
                    content.push('<');
                    self.cursor.advance();
                }
            }
        }

        Err(ParseFailure {
            message: format!(
                "unclosed tag <{}> at line {}, column {}",
                tag.name, tag.line, tag.column
            ),
            resume: content_start,
        })
    }

    /// A `</name>` with no open tag to close. Consumed when well-formed.
    fn stray_closing_tag(&mut self, line: usize, column: usize, retry: Resume) -> ParseFailure {
        self.cursor.advance();
        let name = self.read_identifier();
        if name.is_empty() {
            return self.fail_here("expected tag name in closing tag", retry);
        }
        self.cursor.skip_whitespace();
        if self.cursor.peek() != Some('>') {
            return ParseFailure {
                message: format!("expected '>' in closing tag at line {}", self.cursor.line()),
                resume: retry,
            };
        }
        self.cursor.advance();
        ParseFailure {
            message: format!("unexpected closing tag </{name}> at line {line}, column {column}"),
            resume: self.resume_point(),
        }
    }

    fn read_attributes(&mut self, tag: &mut Tag) {
        self.cursor.skip_whitespace();
        while let Some(ch) = self.cursor.peek() {
            if ch == '>' || ch == '/' {
                break;
            }
            let name = self.read_identifier();
            if name.is_empty() {
                break;
            }

            self.cursor.skip_whitespace();
            let value = if self.cursor.peek() == Some('=') {
                self.cursor.advance();
                self.cursor.skip_whitespace();
                self.read_attribute_value()
            } else {
                "true".to_string()
            };
            tag.attributes.insert(name, value);
            self.cursor.skip_whitespace();
        }
    }

    /// Quoted (`"…"` or `'…'`, backslash escapes the next char) or bare up to
    /// whitespace or `>`.
    fn read_attribute_value(&mut self) -> String {
        let Some(quote @ ('"' | '\'')) = self.cursor.peek() else {
            return self
                .cursor
                .take_while(|c| c != '>' && !is_whitespace(c))
                .to_string();
        };

        self.cursor.advance();
        let mut value = String::new();
        while let Some(ch) = self.cursor.advance() {
            match ch {
                c if c == quote => break,
                '\\' => {
                    if let Some(escaped) = self.cursor.advance() {
                        value.push(escaped);
                    }
                }
                c => value.push(c),
            }
        }
        value
    }

    /// Tag and attribute names: ASCII letters, digits, `-` and `_`.
    fn read_identifier(&mut self) -> String {
        self.cursor
            .take_while(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            .to_string()
    }

    /// Everything up to the next `<`, trimmed.
    fn parse_raw_code(&mut self) -> String {
        self.cursor.take_while(|c| c != '<').trim().to_string()
    }

    fn resume_point(&self) -> Resume {
        Resume {
            position: self.cursor.checkpoint(),
            diagnostics: self.generator.mark(),
        }
    }

    fn fail_here(&self, what: &str, resume: Resume) -> ParseFailure {
        ParseFailure {
            message: format!(
                "{what} at line {}, column {}",
                self.cursor.line(),
                self.cursor.column()
            ),
            resume,
        }
    }
}

/// Transpile a markup document in one call.
pub fn transpile(source: &str, flavor: Flavor) -> Result<Transpilation, TranspileError> {
    MarkupParser::new(source, flavor).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(source: &str) -> Transpilation {
        transpile(source, Flavor::JavaScript).expect("transpile failed")
    }

    fn rejected(source: &str) -> Transpilation {
        match transpile(source, Flavor::JavaScript) {
            Err(TranspileError::Rejected(partial)) => *partial,
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            transpile("  \n\t", Flavor::JavaScript),
            Err(TranspileError::EmptyInput)
        ));
    }

    #[test]
    fn test_attributes() {
        let result = ok(r#"<var name="a" value='it\'s' async flag=yes />"#);
        let tag = &result.tags[0];
        assert_eq!(tag.attributes["name"], "a");
        assert_eq!(tag.attributes["value"], "it's");
        assert_eq!(tag.attributes["async"], "true");
        assert_eq!(tag.attributes["flag"], "yes");
    }

    #[test]
    fn test_unquoted_value_stops_at_gt() {
        let result = ok("<print name=x>1</print>");
        assert_eq!(result.tags[0].attributes["name"], "x");
        assert_eq!(result.output, "console.log(1);\n");
    }

    #[test]
    fn test_tag_position_is_opening_angle() {
        let result = ok("  \n   <print>1</print>");
        assert_eq!((result.tags[0].line, result.tags[0].column), (2, 4));
    }

    #[test]
    fn test_raw_passthrough() {
        let result = ok("  const x = 1;  \n<print>x</print>\nx++;");
        assert_eq!(result.output, "const x = 1;\nconsole.log(x);\nx++;\n");
    }

    #[test]
    fn test_nested_children() {
        let result = ok(r#"<if condition="x>1"><print>1</print></if>"#);
        assert_eq!(result.tags.len(), 1);
        assert_eq!(result.tags[0].children.len(), 1);
        assert_eq!(result.tags[0].content, "console.log(1);");
        assert_eq!(result.output, "if (x>1) {\n  console.log(1);\n}\n");
    }

    #[test]
    fn test_same_name_nesting() {
        let result = ok("<if condition=\"a\"><if condition=\"b\">go();</if></if>");
        assert_eq!(
            result.output,
            "if (a) {\n  if (b) {\n    go();\n  }\n}\n"
        );
    }

    #[test]
    fn test_source_margin_is_removed() {
        let result = ok("<function name=\"f\">\n    if (x) {\n      y();\n    }\n</function>");
        assert_eq!(result.tags[0].content, "if (x) {\n  y();\n}");
        assert_eq!(
            result.output,
            "function f() {\n  if (x) {\n    y();\n  }\n}\n"
        );
    }

    #[test]
    fn test_case_insensitive_close() {
        let result = ok("<Print>1</PRINT>");
        assert_eq!(result.tags[0].name, "print");
        assert_eq!(result.output, "console.log(1);\n");
    }

    #[test]
    fn test_less_than_in_content_is_literal() {
        let result = ok("<print>a < b</print>");
        assert_eq!(result.output, "console.log(a < b);\n");
    }

    #[test]
    fn test_mismatched_close_is_literal() {
        let result = ok("<print>\"</b>\"</print>");
        assert_eq!(result.output, "console.log(\"</b>\");\n");
    }

    #[test]
    fn test_unclosed_tag() {
        let result = rejected(r#"<function name="f">"#);
        assert_eq!(result.errors, ["unclosed tag <function> at line 1, column 1"]);
        assert_eq!(result.output, "");
    }

    #[test]
    fn test_unclosed_tag_renders_inner_content() {
        let result = rejected("<while>\n<print>1</print>");
        assert_eq!(result.errors, ["unclosed tag <while> at line 1, column 1"]);
        assert_eq!(result.output, "console.log(1);\n");
    }

    #[test]
    fn test_crossed_tags_terminate() {
        let result = rejected("<div><span>x</div></span>");
        assert!(result
            .errors
            .iter()
            .any(|e| e.starts_with("unclosed tag <div>")));
    }

    #[test]
    fn test_nested_diagnostics_reported_once() {
        let result = rejected("<while>\n<let name=\"1\"/>");
        assert_eq!(
            result.errors,
            [
                "unclosed tag <while> at line 1, column 1",
                "invalid variable: invalid identifier: 1",
            ]
        );
        assert_eq!(result.output, "/* Invalid variable: invalid identifier: 1 */\n");
    }

    #[test]
    fn test_diagnostics_before_resume_point_are_kept() {
        let result = rejected("<while>\n<let name=\"1\"/>\n<if>");
        assert_eq!(
            result.errors,
            [
                "invalid variable: invalid identifier: 1",
                "unclosed tag <if> at line 3, column 1",
            ]
        );
    }

    #[test]
    fn test_nesting_limit() {
        let source = "<a>".repeat(33_000);
        let result = rejected(&source);
        assert_eq!(result.errors[0], "tag nesting too deep at line 1, column 769");
    }

    #[test]
    fn test_deep_balanced_nesting_terminates() {
        let depth = 11_000;
        let source = format!("{}x{}", "<if>".repeat(depth), "</if>".repeat(depth));
        let result = rejected(&source);
        assert!(result.errors[0].starts_with("tag nesting too deep at line 1"));
    }

    #[test]
    fn test_nesting_within_limit() {
        let depth = 100;
        let source = format!(
            "{}go();{}",
            "<if condition=\"c\">".repeat(depth),
            "</if>".repeat(depth)
        );
        let result = ok(&source);
        assert_eq!(result.tags[0].name, "if");
        assert!(result.output.contains(&format!("{}go();", "  ".repeat(depth))));
    }

    #[test]
    fn test_missing_tag_name() {
        let result = rejected("< print>1</print>");
        assert_eq!(result.errors[0], "expected tag name at line 1, column 2");
    }

    #[test]
    fn test_missing_gt_after_slash() {
        let result = rejected("<br / >");
        assert_eq!(result.errors[0], "expected '>' after '/' at line 1, column 6");
    }

    #[test]
    fn test_stray_closing_tag() {
        let result = rejected("<print>1</print></print>");
        assert_eq!(result.output, "console.log(1);\n");
        assert_eq!(
            result.errors,
            ["unexpected closing tag </print> at line 1, column 17"]
        );
    }

    #[test]
    fn test_errors_and_warnings_stay_separate() {
        let result = rejected("<blink>hi</blink>\n<let name=\"9\" value=\"1\"/>");
        assert_eq!(result.warnings, ["unknown tag: <blink>"]);
        assert_eq!(result.errors, ["invalid variable: invalid identifier: 9"]);
        assert_eq!(
            result.output,
            "/* Unknown tag: <blink> */\nhi\n/* Invalid variable: invalid identifier: 9 */\n"
        );
    }

    #[test]
    fn test_rejected_message_joins_errors() {
        let err = transpile("<var/>\n<class/>", Flavor::JavaScript).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parsing errors: invalid variable: empty identifier; invalid class name: empty identifier"
        );
    }

    #[test]
    fn test_emoji_tags() {
        let result = ok("<💾 name=\"x\" value=\"✅\"/>");
        assert_eq!(result.output, "let x = true;\n");
    }

    #[test]
    fn test_declared_names() {
        let result = ok("<let name=\"b\" value=\"1\"/><const name=\"a\" value=\"2\"/>");
        assert_eq!(result.declared, ["a", "b"]);
    }
}
