//! Transpile command - convert a markup document to JavaScript.

use clap::Args;
use emojiscript_markup::{Flavor, Transpilation, TranspileError, looks_like_markup, transpile};
use serde::Serialize;
use std::path::PathBuf;

use crate::commands::{display_name, print_json, read_input, screen_input};
use crate::config::EmojiscriptConfig;

/// Transpile command arguments
#[derive(Args)]
pub struct TranspileArgs {
    /// Input markup file, use - for stdin
    pub input: PathBuf,

    /// Output flavor: javascript (js) or typescript (ts)
    #[arg(short, long)]
    pub flavor: Option<Flavor>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the full result (output, errors, warnings) as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of a transpile result.
#[derive(Debug, Serialize)]
pub struct TranspileReport {
    pub success: bool,
    pub flavor: Flavor,
    pub output: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub declared: Vec<String>,
}

impl TranspileReport {
    pub fn new(flavor: Flavor, result: Result<Transpilation, TranspileError>) -> Self {
        match result {
            Ok(done) => Self::from_transpilation(flavor, true, done),
            Err(TranspileError::Rejected(partial)) => {
                Self::from_transpilation(flavor, false, *partial)
            }
            Err(e @ TranspileError::EmptyInput) => Self {
                success: false,
                flavor,
                output: String::new(),
                errors: e.messages(),
                warnings: Vec::new(),
                declared: Vec::new(),
            },
        }
    }

    fn from_transpilation(flavor: Flavor, success: bool, t: Transpilation) -> Self {
        Self {
            success,
            flavor,
            output: t.output,
            errors: t.errors,
            warnings: t.warnings,
            declared: t.declared,
        }
    }
}

/// Run the transpile command
pub fn run(args: TranspileArgs, config: &EmojiscriptConfig) -> i32 {
    let content = match read_input(&args.input, config.max_input_len()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return 1;
        }
    };

    if let Err(e) = screen_input(&args.input, &content) {
        eprintln!("{}", e);
        return 1;
    }

    let flavor = args.flavor.unwrap_or_else(|| config.flavor());
    let name = display_name(&args.input);
    if !looks_like_markup(&content) {
        tracing::info!(input = %name, "no markup tags found, passing code through");
    }

    let report = TranspileReport::new(flavor, transpile(&content, flavor));
    if args.json || config.json() {
        let code = print_json(&report);
        return if report.success { code } else { 1 };
    }

    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }
    if !report.success {
        for error in &report.errors {
            eprintln!("error: {}", error);
        }
        eprintln!("{}: {} error(s), output not written", name, report.errors.len());
        return 1;
    }

    if let Some(path) = args.output {
        if let Err(e) = std::fs::write(&path, &report.output) {
            eprintln!("Failed to write {}: {}", path.display(), e);
            return 1;
        }
        eprintln!("Transpiled {} -> {} ({})", name, path.display(), flavor);
    } else {
        print!("{}", report.output);
    }

    0
}
