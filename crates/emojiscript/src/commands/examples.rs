//! Examples command - list the built-in example programs.

use clap::Args;

use crate::commands::print_json;
use crate::config::EmojiscriptConfig;
use crate::examples::EXAMPLES;

/// Examples command arguments
#[derive(Args)]
pub struct ExamplesArgs {
    /// Only show examples in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Print the examples as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the examples command
pub fn run(args: ExamplesArgs, config: &EmojiscriptConfig) -> i32 {
    let selected: Vec<_> = EXAMPLES
        .iter()
        .filter(|e| {
            args.category
                .as_deref()
                .is_none_or(|c| e.category.eq_ignore_ascii_case(c))
        })
        .collect();

    if selected.is_empty() {
        eprintln!("No examples found");
        return 1;
    }

    if args.json || config.json() {
        return print_json(&selected);
    }

    for example in selected {
        println!("# {} ({})", example.title, example.category);
        println!("# {}", example.description);
        println!("{}", example.code);
        println!();
    }
    0
}
