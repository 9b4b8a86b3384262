use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "deepseek/deepseek-chat-v3-0324:free".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ResolverConfig {
    /// Bearer credential forwarded to the completion endpoint.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Sent as `HTTP-Referer` when present; the header is omitted entirely
    /// when unset, never sent empty.
    #[serde(default)]
    pub site_url: Option<String>,
    /// Sent as `X-Title` when present; omitted entirely when unset.
    #[serde(default)]
    pub site_name: Option<String>,
}

impl ResolverConfig {
    pub fn new() -> Self {
        let api_key = env::var("OPENROUTER_API_KEY").unwrap_or_default();
        let api_url = env::var("OPENROUTER_API_URL").unwrap_or_else(|_| default_api_url());
        let model = env::var("OPENROUTER_MODEL").unwrap_or_else(|_| default_model());
        let site_url = env::var("SITE_URL").ok().filter(|v| !v.is_empty());
        let site_name = env::var("SITE_NAME").ok().filter(|v| !v.is_empty());

        Self {
            api_key,
            api_url,
            model,
            site_url,
            site_name,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
            site_url: None,
            site_name: None,
        }
    }
}
