//! Model registry and encodings.
//!
//! Maps model names to the BPE vocabulary they tokenize with.
//!
//! # Example
//!
//! ```
//! use count_tokens::models::{resolve_encoding, Encoding};
//!
//! let encoding = resolve_encoding("gpt-3.5-turbo").unwrap();
//! assert_eq!(encoding, Encoding::Cl100kBase);
//! assert_eq!(encoding.name(), "cl100k_base");
//! ```

mod encoding;
mod registry;

pub use encoding::Encoding;
pub use registry::{
    known_models, resolve_encoding, ModelEntry, MODEL_PREFIX_TO_ENCODING, MODEL_TO_ENCODING,
};
