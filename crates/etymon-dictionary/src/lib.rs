use async_trait::async_trait;

use etymon_config::dictionary::DictionaryConfig;

mod wire;

/// Definition provider interface
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Look up the leading sense of `word`.
    async fn lookup(&self, word: &str) -> Result<WordSense, LookupError>;
}

/// The leading sense of a word: its first definition and, when one
/// exists, an example sentence from the same meaning group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSense {
    pub definition: String,
    pub example: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("dictionary returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("no usable definition")]
    NoDefinition,
}

/// Client for the free dictionaryapi.dev lookup endpoint.
#[derive(Clone)]
pub struct DictionaryApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl DictionaryApiClient {
    pub fn new(config: DictionaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl DefinitionSource for DictionaryApiClient {
    async fn lookup(&self, word: &str) -> Result<WordSense, LookupError> {
        let url = format!("{}/{}", self.base_url, word);

        tracing::debug!(%word, "fetching definition");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let entries: Vec<wire::DictEntry> = response.json().await?;
        wire::leading_sense(&entries).ok_or(LookupError::NoDefinition)
    }
}
