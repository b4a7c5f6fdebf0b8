//! Token counting error types.
//!
//! Every failure propagates unchanged to the process boundary; nothing in
//! this crate retries or substitutes a fallback count.

use thiserror::Error;

use crate::models::Encoding;

/// Token counting errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Standard input (or another text source) could not be fully read.
    ///
    /// Non-UTF-8 input lands here too, as `std::io::ErrorKind::InvalidData`.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] std::io::Error),

    /// Model name has no associated encoding.
    #[error("Could not map model '{0}' to a tokenizer encoding")]
    UnknownModel(String),

    /// Encoding name is not one of the known vocabularies.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// The BPE vocabulary for an encoding could not be built.
    #[error("Tokenizer load error: {0}")]
    TokenizerLoad(String),

    /// Text contains a special token the ordinary encoder refuses to encode.
    #[error("Encountered text corresponding to disallowed special token '{token}' ({encoding})")]
    DisallowedSpecialToken {
        /// The special token found in the text.
        token: &'static str,
        /// Encoding whose special-token set matched.
        encoding: Encoding,
    },
}

/// Result type alias for token counting operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_message() {
        let err = Error::UnknownModel("not-a-model".to_string());
        assert_eq!(
            err.to_string(),
            "Could not map model 'not-a-model' to a tokenizer encoding"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let err: Error = io.into();
        assert!(matches!(err, Error::InputRead(_)));
        assert!(err.to_string().contains("bad utf-8"));
    }

    #[test]
    fn test_special_token_message() {
        let err = Error::DisallowedSpecialToken {
            token: "<|endoftext|>",
            encoding: Encoding::Cl100kBase,
        };
        let msg = err.to_string();
        assert!(msg.contains("<|endoftext|>"));
        assert!(msg.contains("cl100k_base"));
    }
}
