use serde::Deserialize;
use serde_json::json;

use etymon_config::resolver::ResolverConfig;

use crate::payload::parse_root_payload;
use crate::{ResolveError, RootResolver, RootSkeleton};

/// Root resolver backed by the OpenRouter chat-completions endpoint.
/// One outbound call per resolve, no retries, no timeout of its own.
#[derive(Clone)]
pub struct OpenRouterResolver {
    client: reqwest::Client,
    config: ResolverConfig,
}

impl OpenRouterResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl RootResolver for OpenRouterResolver {
    async fn resolve(&self, word: &str) -> Result<RootSkeleton, ResolveError> {
        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "user", "content": build_prompt(word) }
            ]
        });

        let mut request = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body);

        if let Some(site_url) = &self.config.site_url {
            request = request.header("HTTP-Referer", site_url);
        }
        if let Some(site_name) = &self.config.site_name {
            request = request.header("X-Title", site_name);
        }

        tracing::debug!(model = %self.config.model, %word, "requesting root resolution");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "root resolution request failed");
            return Err(ResolveError::Upstream { status, body });
        }

        let raw = response.text().await?;
        let content = extract_content(&raw)?;

        parse_root_payload(&content)
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Unwrap `choices[0].message.content` from the completion envelope.
fn extract_content(raw: &str) -> Result<String, ResolveError> {
    let envelope: ChatResponse =
        serde_json::from_str(raw).map_err(|_| ResolveError::MissingContent)?;

    envelope
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(ResolveError::MissingContent)
}

/// Instruction prompt for the model: root, root meaning, 5-7 affixed
/// relatives, and the exact JSON shape to return with no commentary.
fn build_prompt(word: &str) -> String {
    format!(
        r#"For the word "{word}", identify its main etymological root.
Provide:
1. The root itself (e.g., "port").
2. The meaning of the root (e.g., "to carry").
3. A list of 5-7 English words formed by adding common prefixes OR suffixes to this root.
For each of these related words, provide:
    a. The prefix or suffix used (e.g., "trans", "able").
    b. Its type (either "prefix" or "suffix").
    c. The resulting word (e.g., "transport", "portable").

Return this information as a JSON object with the exact following structure:
{{
  "root": "string",
  "rootMeaning": "string",
  "relatedWords": [
    {{ "prefixOrSuffix": "string", "type": "string", "word": "string" }}
  ]
}}

Example for "transport" (which has "port" as a root):
{{
  "root": "port",
  "rootMeaning": "to carry",
  "relatedWords": [
    {{ "prefixOrSuffix": "trans", "type": "prefix", "word": "transport" }},
    {{ "prefixOrSuffix": "ex", "type": "prefix", "word": "export" }},
    {{ "prefixOrSuffix": "im", "type": "prefix", "word": "import" }},
    {{ "prefixOrSuffix": "sup", "type": "prefix", "word": "support" }},
    {{ "prefixOrSuffix": "re", "type": "prefix", "word": "report" }},
    {{ "prefixOrSuffix": "able", "type": "suffix", "word": "portable" }},
    {{ "prefixOrSuffix": "er", "type": "suffix", "word": "porter" }}
  ]
}}
Do not include any commentary or markdown formatting like ```json outside the JSON object itself. Only return the JSON object."#
    )
}
