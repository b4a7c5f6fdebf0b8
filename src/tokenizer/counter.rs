//! Token counting implementation.
//!
//! Uses tiktoken-rs for BPE encoding. Each [`Tokenizer`] owns its vocabulary
//! tables; nothing is cached process-wide.

use std::fmt;

use tiktoken_rs::{cl100k_base, o200k_base, p50k_base, p50k_edit, r50k_base, CoreBPE};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::models::{resolve_encoding, Encoding};

/// Build the BPE tables for an encoding
fn load_bpe(encoding: Encoding) -> Result<CoreBPE> {
    let bpe = match encoding {
        Encoding::R50kBase => r50k_base(),
        Encoding::P50kBase => p50k_base(),
        Encoding::P50kEdit => p50k_edit(),
        Encoding::Cl100kBase => cl100k_base(),
        Encoding::O200kBase => o200k_base(),
    };
    bpe.map_err(|e| Error::TokenizerLoad(format!("{}: {e}", encoding.name())))
}

/// Find the leftmost special token occurring in `text`
fn find_special_token(text: &str, encoding: Encoding) -> Option<&'static str> {
    encoding
        .special_tokens()
        .iter()
        .filter_map(|token| text.find(token).map(|pos| (pos, *token)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, token)| token)
}

/// BPE tokenizer bound to a single encoding
///
/// # Example
/// ```
/// use count_tokens::tokenizer::Tokenizer;
/// use count_tokens::models::Encoding;
///
/// let tokenizer = Tokenizer::for_model("gpt-3.5-turbo").unwrap();
/// assert_eq!(tokenizer.encoding(), Encoding::Cl100kBase);
///
/// let tokens = tokenizer.encode("hello world").unwrap();
/// assert_eq!(tokens.len(), tokenizer.count("hello world").unwrap());
/// ```
pub struct Tokenizer {
    encoding: Encoding,
    bpe: CoreBPE,
}

impl Tokenizer {
    /// Load the vocabulary for an encoding
    pub fn load(encoding: Encoding) -> Result<Self> {
        debug!(encoding = encoding.name(), "loading tokenizer");
        let bpe = load_bpe(encoding)?;
        Ok(Self { encoding, bpe })
    }

    /// Resolve a model's encoding and load it
    pub fn for_model(model: &str) -> Result<Self> {
        Self::load(resolve_encoding(model)?)
    }

    /// Encode text into token ids
    ///
    /// Special tokens are never produced from plain text: input that
    /// contains one (e.g. `<|endoftext|>`) fails with
    /// [`Error::DisallowedSpecialToken`] instead of being silently split.
    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        if let Some(token) = find_special_token(text, self.encoding) {
            return Err(Error::DisallowedSpecialToken {
                token,
                encoding: self.encoding,
            });
        }

        let tokens = self.bpe.encode_ordinary(text);
        trace!(
            encoding = self.encoding.name(),
            bytes = text.len(),
            tokens = tokens.len(),
            "encoded text"
        );
        Ok(tokens)
    }

    /// Count tokens in text
    pub fn count(&self, text: &str) -> Result<usize> {
        Ok(self.encode(text)?.len())
    }

    /// Get the encoding used by this tokenizer
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}
