use reqwest::Client;
use tracing::{debug, info};

use crate::config::SubtitleConfig;
use crate::error::Result;

/// Result of a subtitle lookup. The service signals "no subtitles for this
/// hash" with an empty response body rather than an HTTP error, so absence
/// is a value here, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SubtitleOutcome {
    Found(String),
    NotFound,
}

impl SubtitleOutcome {
    pub fn from_body(body: String) -> Self {
        if body.trim().is_empty() {
            Self::NotFound
        } else {
            Self::Found(body)
        }
    }
}

/// Client for the captioning service keyed by video fingerprints.
pub struct SubtitleClient {
    client: Client,
    config: SubtitleConfig,
}

impl SubtitleClient {
    pub fn new(config: SubtitleConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// Download the subtitle track for a fingerprinted movie.
    pub async fn fetch(&self, hash: &str) -> Result<SubtitleOutcome> {
        debug!(
            "Requesting subtitles from {} for hash {}",
            self.config.endpoint, hash
        );

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("action", "download"),
                ("hash", hash),
                ("language", self.config.language.as_str()),
            ])
            .send()
            .await?;

        let body = response.text().await?;
        let outcome = SubtitleOutcome::from_body(body);

        if let SubtitleOutcome::Found(text) = &outcome {
            info!("Received {} bytes of subtitle text", text.len());
        }

        Ok(outcome)
    }
}
