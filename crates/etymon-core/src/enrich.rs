use futures::future::join_all;
use tokio_util::sync::CancellationToken;

use etymon_dictionary::DefinitionSource;
use etymon_types::{EnrichedRelatedWord, RelatedWordDraft, color_for};

pub const DEFINITION_FALLBACK: &str = "Definition not found.";
pub const EXAMPLE_FALLBACK: &str = "Example not found.";
/// Used when a definition was found but its meaning group has no example.
pub const EXAMPLE_UNAVAILABLE: &str = "Example not available.";

/// Attach a definition, example sentence and display color to every draft.
///
/// All lookups start eagerly and settle independently; the barrier waits
/// for every one of them. A failed lookup only affects its own entry,
/// which falls back to placeholder text. Output order is input order,
/// regardless of completion order.
pub async fn enrich_related_words(
    source: &dyn DefinitionSource,
    drafts: Vec<RelatedWordDraft>,
    cancel: &CancellationToken,
) -> Vec<EnrichedRelatedWord> {
    let lookups = drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| async move {
            let sense = tokio::select! {
                _ = cancel.cancelled() => None,
                result = source.lookup(&draft.word) => match result {
                    Ok(sense) => Some(sense),
                    Err(error) => {
                        tracing::warn!(word = %draft.word, %error, "definition lookup failed");
                        None
                    }
                },
            };

            let (definition, example) = match sense {
                Some(sense) => (
                    sense.definition,
                    sense
                        .example
                        .unwrap_or_else(|| EXAMPLE_UNAVAILABLE.to_string()),
                ),
                None => (DEFINITION_FALLBACK.to_string(), EXAMPLE_FALLBACK.to_string()),
            };

            EnrichedRelatedWord {
                affix: draft.affix,
                kind: draft.kind,
                word: draft.word,
                definition,
                example,
                color: color_for(index),
            }
        });

    join_all(lookups).await
}
