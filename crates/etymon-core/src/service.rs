use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use etymon_config::Config;
use etymon_dictionary::{DefinitionSource, DictionaryApiClient};
use etymon_resolver::{OpenRouterResolver, ResolveError, RootResolver};
use etymon_types::WordRootResult;

use crate::enrich::enrich_related_words;
use crate::preprocess::normalize_query;

/// Orchestrates one query: root resolution first, fully awaited, then the
/// concurrent definition enrichment of every related word.
pub struct WordRootService {
    resolver: Arc<dyn RootResolver>,
    definitions: Arc<dyn DefinitionSource>,
}

impl WordRootService {
    pub fn new(resolver: Arc<dyn RootResolver>, definitions: Arc<dyn DefinitionSource>) -> Self {
        Self {
            resolver,
            definitions,
        }
    }

    /// Wire up the live providers from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(OpenRouterResolver::new(config.resolver.clone())),
            Arc::new(DictionaryApiClient::new(config.dictionary.clone())),
        )
    }

    /// Resolve and enrich without an external cancellation scope.
    pub async fn fetch_word_root(&self, word: &str) -> Result<WordRootResult, ResolveError> {
        self.fetch_word_root_scoped(word, &CancellationToken::new())
            .await
    }

    /// Resolve and enrich within a cancellation scope. A superseding query
    /// cancels the token so in-flight lookups from the old query are
    /// abandoned instead of racing the newer result.
    pub async fn fetch_word_root_scoped(
        &self,
        word: &str,
        cancel: &CancellationToken,
    ) -> Result<WordRootResult, ResolveError> {
        let word = normalize_query(word);
        if word.is_empty() {
            return Err(ResolveError::EmptyWord);
        }
        if cancel.is_cancelled() {
            return Err(ResolveError::Cancelled);
        }

        let skeleton = tokio::select! {
            _ = cancel.cancelled() => return Err(ResolveError::Cancelled),
            result = self.resolver.resolve(&word) => result?,
        };
        tracing::debug!(
            root = %skeleton.root,
            related = skeleton.related_words.len(),
            "root resolved"
        );

        let related_words =
            enrich_related_words(self.definitions.as_ref(), skeleton.related_words, cancel).await;

        if cancel.is_cancelled() {
            return Err(ResolveError::Cancelled);
        }

        Ok(WordRootResult {
            root: skeleton.root,
            root_meaning: skeleton.root_meaning,
            related_words,
        })
    }
}
