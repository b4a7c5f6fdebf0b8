//! Token counting utilities.
//!
//! This module wraps tiktoken encodings behind an explicit [`Tokenizer`]
//! resource: resolve a model, load its vocabulary once, then encode.
//!
//! # Supported Encodings
//!
//! - **r50k_base**: GPT-3 base models, `gpt2`
//! - **p50k_base** / **p50k_edit**: Codex and text-davinci-00x
//! - **cl100k_base**: GPT-3.5, GPT-4, embeddings
//! - **o200k_base**: GPT-4o, GPT-4.1, GPT-5, o-series
//!
//! # Example
//!
//! ```
//! use count_tokens::tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::for_model("gpt-3.5-turbo").unwrap();
//! let tokens = tokenizer.count("Hello, world!").unwrap();
//! println!("Token count: {}", tokens);
//! ```

mod counter;

pub use counter::Tokenizer;
