//! Output generators - render parsed tags as source code.

pub mod javascript;

pub use javascript::{DiagnosticMark, Generator, UNSAFE_PATTERNS};
