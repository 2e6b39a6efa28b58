//! `emojiscript` - transpile EmojiScript markup documents to JavaScript.

mod commands;
mod config;
mod examples;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{examples as examples_cmd, transpile, validate};
use crate::config::EmojiscriptConfig;

#[derive(Parser)]
#[command(name = "emojiscript")]
#[command(about = "Transpile EmojiScript markup to JavaScript", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transpile a markup document
    Transpile(transpile::TranspileArgs),

    /// Check brace and parenthesis balance of a document
    Validate(validate::ValidateArgs),

    /// List the built-in example programs
    Examples(examples_cmd::ExamplesArgs),
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: libc::signal only changes the signal disposition; SIG_DFL is a
    // valid handler for SIGPIPE.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

/// Diagnostics go to stderr; stdout carries only generated code or JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    reset_sigpipe();
    init_tracing();

    let cli = Cli::parse();
    let root = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let config = EmojiscriptConfig::load(&root);
    tracing::debug!(?config, "loaded configuration");

    let code = match cli.command {
        Commands::Transpile(args) => transpile::run(args, &config),
        Commands::Validate(args) => validate::run(args, &config),
        Commands::Examples(args) => examples_cmd::run(args, &config),
    };
    std::process::exit(code);
}
