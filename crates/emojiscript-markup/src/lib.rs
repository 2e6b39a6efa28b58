//! Markup-tag transpiler for EmojiScript.
//!
//! `emojiscript-markup` reads programs written as HTML-like tags and emits
//! the equivalent JavaScript. It maps tags to statements at the surface
//! level; there is no type checker and no IR beyond the tag tree.
//!
//! # Architecture
//!
//! ```text
//! Source text          Scanner/Parser              Generator
//! ───────────    ──────────────────────────    ──────────────────
//! emoji → keyword ─> <tag attr="v">…</tag> ──> per-kind emit_* ──> JavaScript
//!                    (nested tags rendered        (indentation,
//!                     into parent content)         validation)
//! ```
//!
//! Generation is interleaved with parsing: a tag is rendered as soon as its
//! closing tag is found, and the rendered text of nested tags is spliced into
//! the parent's content before the parent itself is rendered.
//!
//! # Example
//!
//! ```
//! use emojiscript_markup::{Flavor, transpile};
//!
//! let result = transpile("<var name=\"x\" value=\"5\"/>", Flavor::JavaScript).unwrap();
//! assert_eq!(result.output.trim(), "let x = 5;");
//! ```
//!
//! Documents with errors still produce partial output:
//!
//! ```
//! use emojiscript_markup::{Flavor, TranspileError, transpile};
//!
//! let err = transpile("<const name=\"if\" value=\"1\"/>", Flavor::JavaScript).unwrap_err();
//! let TranspileError::Rejected(partial) = err else { panic!("expected rejection") };
//! assert_eq!(partial.errors, ["invalid variable: 'if' is a reserved keyword"]);
//! ```

pub mod cursor;
pub mod emoji;
pub mod error;
pub mod flavor;
pub mod kind;
pub mod output;
pub mod parser;
pub mod tag;
pub mod validate;

pub use error::TranspileError;
pub use flavor::Flavor;
pub use kind::TagKind;
pub use output::javascript::Generator;
pub use parser::{MarkupParser, Transpilation, transpile};
pub use tag::Tag;
pub use validate::{IdentifierError, check_balance, looks_like_markup, validate_identifier};
