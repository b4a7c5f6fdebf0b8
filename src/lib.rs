//! # count-tokens
//!
//! Measure how many tokens a piece of text occupies under an OpenAI model's
//! tokenizer.
//!
//! The crate is a thin layer over [tiktoken-rs](https://docs.rs/tiktoken-rs):
//! it maps a model name to its BPE vocabulary, encodes the text and reports
//! the length of the resulting token sequence.
//!
//! ```text
//!  stdin ──> read_text ──> resolve_encoding(model) ──> Tokenizer::load
//!                                                         │
//!  stdout <── count <── Tokenizer::encode(text) <─────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use count_tokens::{count_tokens, DEFAULT_MODEL};
//!
//! let tokens = count_tokens("hello world", DEFAULT_MODEL).unwrap();
//! assert_eq!(tokens, 2);
//! ```
//!
//! Reusing one tokenizer for several texts:
//!
//! ```
//! use count_tokens::Tokenizer;
//!
//! let tokenizer = Tokenizer::for_model("gpt-4o").unwrap();
//! let a = tokenizer.count("first document").unwrap();
//! let b = tokenizer.count("second document").unwrap();
//! assert!(a > 0 && b > 0);
//! ```
//!
//! ## Modules
//!
//! - [`models`]: Encodings and the model name registry
//! - [`tokenizer`]: BPE tokenizer wrapper
//! - [`config`]: Runtime settings for the CLI
//! - [`error`]: Error types and result aliases

use std::io::Read;

pub mod config;
pub mod error;
pub mod models;
pub mod tokenizer;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use models::{resolve_encoding, Encoding};
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Model used when none is given
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Count the tokens `text` occupies under `model`'s tokenizer
///
/// Loads the vocabulary on every call; use [`Tokenizer`] directly to count
/// many texts.
pub fn count_tokens(text: &str, model: &str) -> Result<usize> {
    Tokenizer::for_model(model)?.count(text)
}

/// Read a text source to end-of-stream
///
/// The input must be valid UTF-8. Line endings are normalized with
/// [`normalize_newlines`], so CRLF and LF files count the same.
pub fn read_text(mut reader: impl Read) -> Result<String> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(normalize_newlines(buffer))
}

/// Translate `\r\n` and lone `\r` into `\n`
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
