//! Validate command - quick structural check without transpiling.

use clap::Args;
use emojiscript_markup::check_balance;
use serde::Serialize;
use std::path::PathBuf;

use crate::commands::{display_name, print_json, read_input};
use crate::config::EmojiscriptConfig;

/// Validate command arguments
#[derive(Args)]
pub struct ValidateArgs {
    /// Input file, use - for stdin
    pub input: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct ValidateReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidateReport {
    pub fn check(code: &str) -> Self {
        let errors = check_balance(code);
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Run the validate command
pub fn run(args: ValidateArgs, config: &EmojiscriptConfig) -> i32 {
    let content = match read_input(&args.input, config.max_input_len()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return 1;
        }
    };

    let report = ValidateReport::check(&content);
    tracing::debug!(valid = report.valid, errors = report.errors.len(), "validated");

    if args.json || config.json() {
        let code = print_json(&report);
        return if report.valid { code } else { 1 };
    }

    let name = display_name(&args.input);
    if report.valid {
        println!("{}: ok", name);
        0
    } else {
        for error in &report.errors {
            println!("{}: {}", name, error);
        }
        1
    }
}
