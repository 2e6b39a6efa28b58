//! JavaScript generator for markup tags.
//!
//! Renders one [`Tag`] at a time. Nested tags have already been rendered into
//! the tag's content by the parser, so every rule here treats content as
//! opaque text and only decides the surrounding statement shape.

use crate::flavor::Flavor;
use crate::kind::TagKind;
use crate::tag::Tag;
use crate::validate::validate_identifier;
use std::collections::BTreeSet;

/// Substrings that get wrapped in an `UNSAFE` comment when they appear in an
/// expression. Plain substring matching; trivially bypassed.
pub const UNSAFE_PATTERNS: &[&str] = &["eval(", "Function(", "__proto__", "constructor"];

type EmitFn = fn(&mut Generator, &Tag) -> String;

/// Lengths of the error and warning lists at one point of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticMark {
    errors: usize,
    warnings: usize,
}

/// Renders tags as JavaScript and collects diagnostics along the way.
#[derive(Debug, Default)]
pub struct Generator {
    flavor: Flavor,
    errors: Vec<String>,
    warnings: Vec<String>,
    /// Names declared by variable tags. Flat and advisory: nothing is
    /// rejected for re-declaration or undeclared use.
    declared: BTreeSet<String>,
}

impl Generator {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            ..Self::default()
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn declared(&self) -> impl Iterator<Item = &str> {
        self.declared.iter().map(String::as_str)
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn mark(&self) -> DiagnosticMark {
        DiagnosticMark {
            errors: self.errors.len(),
            warnings: self.warnings.len(),
        }
    }

    /// Drop every error and warning recorded after `mark`.
    pub fn rewind(&mut self, mark: DiagnosticMark) {
        self.errors.truncate(mark.errors);
        self.warnings.truncate(mark.warnings);
    }

    /// Consume the generator, returning errors, warnings and declared names.
    pub fn finish(self) -> (Vec<String>, Vec<String>, Vec<String>) {
        (
            self.errors,
            self.warnings,
            self.declared.into_iter().collect(),
        )
    }

    /// Render a tag. Never fails: unknown tags become a comment plus their
    /// raw content and a warning.
    pub fn render(&mut self, tag: &Tag) -> String {
        match TagKind::lookup(&tag.name) {
            Some(kind) => {
                tracing::debug!(tag = %tag.name, ?kind, "rendering tag");
                emitter(kind)(self, tag)
            }
            None => self.emit_unknown(tag),
        }
    }

    /// `: <ty>` in the typed flavor, nothing otherwise.
    fn annotation(&self, ty: Option<&str>) -> String {
        match ty {
            Some(ty) if self.flavor.is_typed() => format!(": {ty}"),
            _ => String::new(),
        }
    }

    /// Wrap each unsafe pattern in an inline comment and record a warning.
    pub fn annotate_unsafe(&mut self, expr: &str) -> String {
        let mut result = expr.to_string();
        for pattern in UNSAFE_PATTERNS {
            if result
                .to_ascii_lowercase()
                .contains(&pattern.to_ascii_lowercase())
            {
                self.warn(format!("potentially unsafe pattern detected: {pattern}"));
                result = result.replace(pattern, &format!("/* UNSAFE: {pattern} */"));
            }
        }
        result
    }

    fn emit_unknown(&mut self, tag: &Tag) -> String {
        self.warn(format!("unknown tag: <{}>", tag.name));
        let comment = format!("/* Unknown tag: <{}> */", tag.name);
        if tag.body().is_empty() {
            comment
        } else {
            format!("{comment}\n{}", tag.body())
        }
    }

    fn emit_print(&mut self, tag: &Tag) -> String {
        let content = self.annotate_unsafe(tag.body());
        format!("console.log({content});")
    }

    fn emit_variable(&mut self, tag: &Tag) -> String {
        let mut name = tag.attr("name").unwrap_or_default().to_string();
        let mut value = tag.attr("value").unwrap_or_default().to_string();
        if name.is_empty() {
            if let Some((lhs, rhs)) = tag.body().split_once('=') {
                name = lhs.trim().to_string();
                value = rhs.trim().to_string();
            }
        }

        if let Err(err) = validate_identifier(&name) {
            self.error(format!("invalid variable: {err}"));
            return format!("/* Invalid variable: {err} */");
        }
        self.declared.insert(name.clone());

        let keyword = if tag.name == "const" { "const" } else { "let" };
        let ty = self.annotation(tag.attr("type"));
        if value.is_empty() {
            return format!("{keyword} {name}{ty};");
        }
        let value = self.annotate_unsafe(&value);
        format!("{keyword} {name}{ty} = {value};")
    }

    fn emit_function(&mut self, tag: &Tag) -> String {
        let name = tag.attr("name").unwrap_or_default();
        if let Err(err) = validate_identifier(name) {
            self.error(format!("invalid function name: {err}"));
            return format!("/* Invalid function: {err} */");
        }

        let asyncness = if tag.flag("async") { "async " } else { "" };
        let params = tag.attr("params").unwrap_or_default();
        let returns = self.annotation(tag.attr("returns"));
        block(
            &format!("{asyncness}function {name}({params}){returns}"),
            tag.body(),
        )
    }

    fn emit_loop(&mut self, tag: &Tag) -> String {
        let step = tag.attr("step").unwrap_or("1");
        if let Some(items) = tag.attr("in") {
            let var = tag.attr("var").unwrap_or("item");
            return block(&format!("for (const {var} of {items})"), tag.body());
        }

        let var = tag.attr("var").unwrap_or("i");
        if let Some(times) = tag.attr("times") {
            return block(
                &format!("for (let {var} = 0; {var} < {times}; {var}++)"),
                tag.body(),
            );
        }
        if let (Some(from), Some(to)) = (tag.attr("from"), tag.attr("to")) {
            return block(
                &format!("for (let {var} = {from}; {var} < {to}; {var} += {step})"),
                tag.body(),
            );
        }
        "/* Invalid loop configuration */".to_string()
    }

    fn emit_while(&mut self, tag: &Tag) -> String {
        let condition = self.annotate_unsafe(tag.attr("condition").unwrap_or("true"));
        block(&format!("while ({condition})"), tag.body())
    }

    fn emit_if(&mut self, tag: &Tag) -> String {
        let (condition, body) = match tag.attr("condition") {
            Some(condition) => (condition, tag.body()),
            None => match tag.body().split_once('\n') {
                Some((first, rest)) => (first.trim(), rest.trim()),
                None => (tag.body(), ""),
            },
        };
        let condition = self.annotate_unsafe(condition);
        block(&format!("if ({condition})"), body)
    }

    fn emit_else(&mut self, tag: &Tag) -> String {
        block("else", tag.body())
    }

    fn emit_class(&mut self, tag: &Tag) -> String {
        let name = tag.attr("name").unwrap_or_default();
        if let Err(err) = validate_identifier(name) {
            self.error(format!("invalid class name: {err}"));
            return format!("/* Invalid class: {err} */");
        }

        let head = match tag.attr("extends") {
            Some(parent) => format!("class {name} extends {parent}"),
            None => format!("class {name}"),
        };
        block(&head, tag.body())
    }

    fn emit_method(&mut self, tag: &Tag) -> String {
        let name = tag.attr("name").unwrap_or_default();
        let params = tag.attr("params").unwrap_or_default();
        let staticness = if tag.flag("static") { "static " } else { "" };
        let returns = self.annotation(tag.attr("returns"));
        block(
            &format!("{staticness}{name}({params}){returns}"),
            tag.body(),
        )
    }

    fn emit_import(&mut self, tag: &Tag) -> String {
        let module = tag.attr("from").unwrap_or_default();
        match tag.attr("items") {
            Some(items) => format!("import {{ {items} }} from '{module}';"),
            None => format!("import '{module}';"),
        }
    }

    fn emit_export(&mut self, tag: &Tag) -> String {
        let body = tag.body();
        if tag.flag("default") {
            return format!("export default {body}");
        }
        match tag.attr("name") {
            Some(name) => format!("export const {name} = {body};"),
            None => format!("export {body}"),
        }
    }

    fn emit_return(&mut self, tag: &Tag) -> String {
        let value = match tag.body() {
            "" => tag.attr("value").unwrap_or_default(),
            body => body,
        };
        if value.is_empty() {
            return "return;".to_string();
        }
        let value = self.annotate_unsafe(value);
        format!("return {value};")
    }

    fn emit_array(&mut self, tag: &Tag) -> String {
        let items = tag.attr("items").unwrap_or(tag.body());
        format!("[{items}]")
    }

    fn emit_object(&mut self, tag: &Tag) -> String {
        match tag.body() {
            "" => "{}".to_string(),
            body => format!("{{ {body} }}"),
        }
    }

    fn emit_try(&mut self, tag: &Tag) -> String {
        block("try", tag.body())
    }

    fn emit_catch(&mut self, tag: &Tag) -> String {
        let error = tag.attr("error").unwrap_or("e");
        block(&format!("catch ({error})"), tag.body())
    }

    fn emit_comment(&mut self, tag: &Tag) -> String {
        tag.body()
            .split('\n')
            .map(|line| format!("// {}", line.trim()).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn emit_async(&mut self, tag: &Tag) -> String {
        block("async () =>", tag.body())
    }

    fn emit_await(&mut self, tag: &Tag) -> String {
        let expr = self.annotate_unsafe(tag.body());
        format!("await {expr}")
    }

    fn emit_switch(&mut self, tag: &Tag) -> String {
        let on = tag.attr("on").unwrap_or_default();
        block(&format!("switch ({on})"), tag.body())
    }

    fn emit_case(&mut self, tag: &Tag) -> String {
        let value = tag.attr("value").unwrap_or_default();
        let head = format!("case {value}:");
        match tag.body() {
            "" => head,
            body => format!("{head}\n{}", indent_block(body)),
        }
    }

    fn emit_break(&mut self, _tag: &Tag) -> String {
        "break;".to_string()
    }

    fn emit_continue(&mut self, _tag: &Tag) -> String {
        "continue;".to_string()
    }
}

/// Indent every non-blank line by one level. Blank lines stay empty.
///
/// Each tag is rendered at column zero; depth comes from this being applied
/// again as the output is spliced into each enclosing block.
fn indent_block(block: &str) -> String {
    block
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<head> {` + indented body + `}`.
fn block(head: &str, body: &str) -> String {
    format!("{head} {{\n{}\n}}", indent_block(body))
}

fn emitter(kind: TagKind) -> EmitFn {
    match kind {
        TagKind::Print => Generator::emit_print,
        TagKind::Variable => Generator::emit_variable,
        TagKind::Function => Generator::emit_function,
        TagKind::Loop => Generator::emit_loop,
        TagKind::While => Generator::emit_while,
        TagKind::If => Generator::emit_if,
        TagKind::Else => Generator::emit_else,
        TagKind::Class => Generator::emit_class,
        TagKind::Method => Generator::emit_method,
        TagKind::Import => Generator::emit_import,
        TagKind::Export => Generator::emit_export,
        TagKind::Return => Generator::emit_return,
        TagKind::Array => Generator::emit_array,
        TagKind::Object => Generator::emit_object,
        TagKind::Try => Generator::emit_try,
        TagKind::Catch => Generator::emit_catch,
        TagKind::Comment => Generator::emit_comment,
        TagKind::Async => Generator::emit_async,
        TagKind::Await => Generator::emit_await,
        TagKind::Switch => Generator::emit_switch,
        TagKind::Case => Generator::emit_case,
        TagKind::Break => Generator::emit_break,
        TagKind::Continue => Generator::emit_continue,
    }
}
