//! count-tokens CLI binary.
//!
//! Reads all of standard input and prints the number of tokens it encodes
//! to under a model's tokenizer (default `gpt-3.5-turbo`).
//!
//! ```text
//! $ echo -n "hello world" | count-tokens
//! 2
//! ```

use std::io;

use anyhow::Context;
use clap::Parser;
use count_tokens::{read_text, Config, Tokenizer, DEFAULT_MODEL, VERSION};

#[derive(Parser)]
#[command(name = "count-tokens")]
#[command(version = VERSION)]
#[command(about = "Count the tokens in standard input", long_about = None)]
struct Cli {
    /// Model whose tokenizer is used
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::default().with_model(cli.model);
    if cli.verbose {
        config = config.verbose();
    }

    init_logging(&config.log_level);
    run(&config)
}

fn run(config: &Config) -> anyhow::Result<()> {
    let text = read_text(io::stdin().lock()).context("reading standard input")?;
    tracing::debug!(bytes = text.len(), "read input");

    let tokenizer = Tokenizer::for_model(&config.model)?;
    let count = tokenizer.count(&text)?;

    println!("{count}");
    Ok(())
}

// Logs go to stderr; stdout carries only the count.
fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}
