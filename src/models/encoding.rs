//! Tokenizer encoding types.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Tokenizer encoding type
///
/// Each variant names one of OpenAI's published BPE vocabularies. The
/// encoding, not the model, determines how text is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// r50k_base (GPT-3 base models, `gpt2`)
    R50kBase,
    /// p50k_base (Codex, text-davinci-002/003)
    P50kBase,
    /// p50k_edit (edit models)
    P50kEdit,
    /// cl100k_base (GPT-3.5, GPT-4, embeddings)
    Cl100kBase,
    /// o200k_base (GPT-4o, GPT-4.1, GPT-5, o-series)
    O200kBase,
}

impl Encoding {
    /// All known encodings
    pub const ALL: [Encoding; 5] = [
        Encoding::R50kBase,
        Encoding::P50kBase,
        Encoding::P50kEdit,
        Encoding::Cl100kBase,
        Encoding::O200kBase,
    ];

    /// Resolve the encoding a model uses
    ///
    /// # Examples
    /// ```
    /// use count_tokens::models::Encoding;
    ///
    /// assert_eq!(Encoding::for_model("gpt-3.5-turbo").unwrap(), Encoding::Cl100kBase);
    /// assert_eq!(Encoding::for_model("gpt-4o-mini").unwrap(), Encoding::O200kBase);
    /// assert!(Encoding::for_model("no-such-model").is_err());
    /// ```
    pub fn for_model(model: &str) -> Result<Self> {
        super::resolve_encoding(model)
    }

    /// Get encoding name as string
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::R50kBase => "r50k_base",
            Encoding::P50kBase => "p50k_base",
            Encoding::P50kEdit => "p50k_edit",
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::O200kBase => "o200k_base",
        }
    }

    /// Parse an encoding from its canonical name
    ///
    /// `gpt2` is accepted as an alias of `r50k_base`; the two share a
    /// vocabulary.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "r50k_base" | "gpt2" => Ok(Encoding::R50kBase),
            "p50k_base" => Ok(Encoding::P50kBase),
            "p50k_edit" => Ok(Encoding::P50kEdit),
            "cl100k_base" => Ok(Encoding::Cl100kBase),
            "o200k_base" => Ok(Encoding::O200kBase),
            _ => Err(Error::UnknownEncoding(name.to_string())),
        }
    }

    /// Special-token strings reserved by this encoding
    ///
    /// Plain text containing any of these cannot be encoded ordinarily.
    pub fn special_tokens(&self) -> &'static [&'static str] {
        const ENDOFTEXT: &str = "<|endoftext|>";
        const FIM_PREFIX: &str = "<|fim_prefix|>";
        const FIM_MIDDLE: &str = "<|fim_middle|>";
        const FIM_SUFFIX: &str = "<|fim_suffix|>";
        const ENDOFPROMPT: &str = "<|endofprompt|>";

        match self {
            Encoding::R50kBase | Encoding::P50kBase => &[ENDOFTEXT],
            Encoding::P50kEdit => &[ENDOFTEXT, FIM_PREFIX, FIM_MIDDLE, FIM_SUFFIX],
            Encoding::Cl100kBase => &[ENDOFTEXT, FIM_PREFIX, FIM_MIDDLE, FIM_SUFFIX, ENDOFPROMPT],
            Encoding::O200kBase => &[ENDOFTEXT, ENDOFPROMPT],
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
