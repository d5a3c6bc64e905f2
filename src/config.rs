use std::env;
use std::fmt;

use anyhow::Context;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Empty when `GEMINI_API_KEY` is unset; the upstream rejects it on first use.
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid number, got {raw:?}"))?,
            None => 8000,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            api_key: lookup("GEMINI_API_KEY")
                .map(|key| sanitize_api_key(&key))
                .unwrap_or_default(),
            base_url: lookup("GEMINI_BASE_URL")
                .map(|url| trim_base_url(&url))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// The client appends `/chat/completions` itself, so a trailing slash doubles it.
pub fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Keeps only characters valid in an `Authorization` header value. A mangled key
/// is rejected upstream on first use instead of aborting client construction.
pub fn sanitize_api_key(key: &str) -> String {
    key.chars().filter(|c| c.is_ascii_graphic()).collect()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key_set", &!self.api_key.is_empty())
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}
