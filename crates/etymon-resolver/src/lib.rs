use etymon_types::RelatedWordDraft;

pub mod openrouter;
mod payload;

pub use openrouter::OpenRouterResolver;

/// Root resolution provider interface
#[async_trait::async_trait]
pub trait RootResolver: Send + Sync {
    /// Resolve a word into its etymological root and a list of words
    /// formed by affixing that root.
    async fn resolve(&self, word: &str) -> Result<RootSkeleton, ResolveError>;
}

/// Resolver output before enrichment: the root, its meaning, and the
/// related words in the order the upstream reported them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSkeleton {
    pub root: String,
    pub root_meaning: String,
    pub related_words: Vec<RelatedWordDraft>,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Empty or whitespace-only input; raised before any I/O.
    #[error("word required")]
    EmptyWord,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx from the completion endpoint; body kept for diagnostics.
    #[error("root lookup failed with HTTP {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The completion envelope had no `choices[0].message.content`.
    #[error("unexpected response shape")]
    MissingContent,

    /// The model's answer was not valid JSON after fence stripping.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// Parsed fine but carried no usable root or related words.
    #[error("could not extract root information, try a different word")]
    NoRootInformation,

    /// The query's cancellation scope was triggered.
    #[error("query cancelled")]
    Cancelled,
}
