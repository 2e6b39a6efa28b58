//! CLI command implementations - one command per file.

pub mod examples;
pub mod transpile;
pub mod validate;

use std::path::Path;

/// Read a document from a file, or from stdin when `input` is `-`.
///
/// Inputs longer than `max_len` bytes are refused.
pub fn read_input(input: &Path, max_len: usize) -> Result<String, String> {
    let content = if input.as_os_str() == "-" {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        buf
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?
    };

    if content.len() > max_len {
        return Err(format!(
            "{} exceeds maximum length ({} > {} bytes)",
            display_name(input),
            content.len(),
            max_len
        ));
    }
    Ok(content)
}

/// Substrings that make the CLI refuse an input outright, matched
/// case-insensitively. The library only annotates its own smaller set.
pub const BLOCKED_PATTERNS: &[&str] = &["eval(", "exec(", "__import__", "subprocess", "os.system"];

/// Refuse inputs containing any of [`BLOCKED_PATTERNS`].
pub fn screen_input(input: &Path, content: &str) -> Result<(), String> {
    let lower = content.to_ascii_lowercase();
    match BLOCKED_PATTERNS.iter().find(|p| lower.contains(*p)) {
        Some(pattern) => Err(format!(
            "{}: unsafe pattern detected: {}",
            display_name(input),
            pattern
        )),
        None => Ok(()),
    }
}

/// How an input path is named in messages.
pub fn display_name(input: &Path) -> String {
    if input.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        input.display().to_string()
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            1
        }
    }
}
