//! Model name to encoding registry.
//!
//! Resolution is a two-step table lookup:
//! 1. Exact model names (`gpt-3.5-turbo`, `gpt-4o`, `davinci`, ...)
//! 2. Model name prefixes for dated snapshots and fine-tunes
//!    (`gpt-3.5-turbo-0613`, `ft:gpt-4o:org::id`, ...)

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Encoding;

/// Registry entry: (model name or prefix, encoding)
pub type ModelEntry = (&'static str, Encoding);

/// Exact model names
pub static MODEL_TO_ENCODING: &[ModelEntry] = &[
    // ============================================================
    // Chat models
    // ============================================================
    ("o1", Encoding::O200kBase),
    ("o3", Encoding::O200kBase),
    ("o4-mini", Encoding::O200kBase),
    ("gpt-5", Encoding::O200kBase),
    ("gpt-4.1", Encoding::O200kBase),
    ("gpt-4o", Encoding::O200kBase),
    ("gpt-4", Encoding::Cl100kBase),
    ("gpt-3.5-turbo", Encoding::Cl100kBase),
    ("gpt-3.5", Encoding::Cl100kBase),
    // Azure deployment name
    ("gpt-35-turbo", Encoding::Cl100kBase),
    // ============================================================
    // Base models
    // ============================================================
    ("davinci-002", Encoding::Cl100kBase),
    ("babbage-002", Encoding::Cl100kBase),
    // ============================================================
    // Embeddings
    // ============================================================
    ("text-embedding-ada-002", Encoding::Cl100kBase),
    ("text-embedding-3-small", Encoding::Cl100kBase),
    ("text-embedding-3-large", Encoding::Cl100kBase),
    // ============================================================
    // Legacy completions
    // ============================================================
    ("text-davinci-003", Encoding::P50kBase),
    ("text-davinci-002", Encoding::P50kBase),
    ("text-davinci-001", Encoding::R50kBase),
    ("text-curie-001", Encoding::R50kBase),
    ("text-babbage-001", Encoding::R50kBase),
    ("text-ada-001", Encoding::R50kBase),
    ("davinci", Encoding::R50kBase),
    ("curie", Encoding::R50kBase),
    ("babbage", Encoding::R50kBase),
    ("ada", Encoding::R50kBase),
    // Codex
    ("code-davinci-002", Encoding::P50kBase),
    ("code-davinci-001", Encoding::P50kBase),
    ("code-cushman-002", Encoding::P50kBase),
    ("code-cushman-001", Encoding::P50kBase),
    ("davinci-codex", Encoding::P50kBase),
    ("cushman-codex", Encoding::P50kBase),
    // Edit
    ("text-davinci-edit-001", Encoding::P50kEdit),
    ("code-davinci-edit-001", Encoding::P50kEdit),
    // Legacy embeddings
    ("text-similarity-davinci-001", Encoding::R50kBase),
    ("text-similarity-curie-001", Encoding::R50kBase),
    ("text-similarity-babbage-001", Encoding::R50kBase),
    ("text-similarity-ada-001", Encoding::R50kBase),
    ("text-search-davinci-doc-001", Encoding::R50kBase),
    ("text-search-curie-doc-001", Encoding::R50kBase),
    ("text-search-babbage-doc-001", Encoding::R50kBase),
    ("text-search-ada-doc-001", Encoding::R50kBase),
    ("code-search-babbage-code-001", Encoding::R50kBase),
    ("code-search-ada-code-001", Encoding::R50kBase),
    // Open source
    ("gpt2", Encoding::R50kBase),
    ("gpt-2", Encoding::R50kBase),
];

/// Model name prefixes, checked in order after the exact table misses
///
/// Longer prefixes must precede shorter ones they overlap with
/// (`ft:gpt-4o` before `ft:gpt-4`).
pub static MODEL_PREFIX_TO_ENCODING: &[ModelEntry] = &[
    ("o1-", Encoding::O200kBase),
    ("o3-", Encoding::O200kBase),
    ("o4-mini-", Encoding::O200kBase),
    // Chat
    ("gpt-5-", Encoding::O200kBase),
    ("gpt-4.5-", Encoding::O200kBase),
    ("gpt-4.1-", Encoding::O200kBase),
    ("chatgpt-4o-", Encoding::O200kBase),
    ("gpt-4o-", Encoding::O200kBase),
    ("gpt-4-", Encoding::Cl100kBase),
    ("gpt-3.5-turbo-", Encoding::Cl100kBase),
    ("gpt-35-turbo-", Encoding::Cl100kBase),
    // Fine-tuned
    ("ft:gpt-4o", Encoding::O200kBase),
    ("ft:gpt-4", Encoding::Cl100kBase),
    ("ft:gpt-3.5-turbo", Encoding::Cl100kBase),
    ("ft:davinci-002", Encoding::Cl100kBase),
    ("ft:babbage-002", Encoding::Cl100kBase),
];

/// Resolve the encoding for a model name
///
/// Matching is case-sensitive. Names found in neither table fail with
/// [`Error::UnknownModel`].
///
/// # Examples
/// ```
/// use count_tokens::models::{resolve_encoding, Encoding};
///
/// assert_eq!(resolve_encoding("gpt-3.5-turbo").unwrap(), Encoding::Cl100kBase);
/// assert_eq!(resolve_encoding("gpt-3.5-turbo-0613").unwrap(), Encoding::Cl100kBase);
/// assert_eq!(resolve_encoding("text-davinci-003").unwrap(), Encoding::P50kBase);
/// ```
pub fn resolve_encoding(model: &str) -> Result<Encoding> {
    if let Some(&(_, encoding)) = MODEL_TO_ENCODING.iter().find(|(name, _)| *name == model) {
        debug!(model, encoding = encoding.name(), "resolved model by name");
        return Ok(encoding);
    }

    if let Some(&(prefix, encoding)) = MODEL_PREFIX_TO_ENCODING
        .iter()
        .find(|(prefix, _)| model.starts_with(*prefix))
    {
        debug!(model, prefix, encoding = encoding.name(), "resolved model by prefix");
        return Ok(encoding);
    }

    Err(Error::UnknownModel(model.to_string()))
}

/// List the exact model names the registry knows
pub fn known_models() -> impl Iterator<Item = &'static str> {
    MODEL_TO_ENCODING.iter().map(|(name, _)| *name)
}
