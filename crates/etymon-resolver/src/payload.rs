use serde::Deserialize;

use etymon_types::{RelatedWordDraft, RelatedWordKind};

use crate::{ResolveError, RootSkeleton};

/// The JSON object the model is instructed to produce. Top-level fields
/// are defaulted so an empty object still parses and fails the semantic
/// check instead of the structural one.
#[derive(Deserialize)]
struct RootPayload {
    #[serde(default)]
    root: String,
    #[serde(default, rename = "rootMeaning")]
    root_meaning: String,
    #[serde(default, rename = "relatedWords")]
    related_words: Vec<RelatedWordPayload>,
}

#[derive(Deserialize)]
struct RelatedWordPayload {
    #[serde(default, rename = "prefixOrSuffix")]
    prefix_or_suffix: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    word: String,
}

/// Strip a markdown code fence the model may have added despite being told
/// not to.
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let inner = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };

    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Parse and validate the model's answer into a skeleton. Affix kinds are
/// normalized here: an out-of-contract `type` reads as a prefix.
pub(crate) fn parse_root_payload(text: &str) -> Result<RootSkeleton, ResolveError> {
    let payload: RootPayload =
        serde_json::from_str(strip_code_fence(text)).map_err(ResolveError::MalformedPayload)?;

    if payload.root.is_empty() || payload.related_words.is_empty() {
        return Err(ResolveError::NoRootInformation);
    }

    let related_words = payload
        .related_words
        .into_iter()
        .map(|entry| RelatedWordDraft {
            affix: entry.prefix_or_suffix,
            kind: RelatedWordKind::from_wire(&entry.kind),
            word: entry.word,
        })
        .collect();

    Ok(RootSkeleton {
        root: payload.root,
        root_meaning: payload.root_meaning,
        related_words,
    })
}
