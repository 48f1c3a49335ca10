//! Push notification delivery.

use reqwest::Client;
use url::Url;

use crate::error::{Result, WatchError};

/// Client for pushing notifications to an ntfy topic.
pub struct Notifier {
    client: Client,
    topic_url: String,
    token: Option<String>,
}

impl Notifier {
    /// Creates a new notifier that publishes to `topic_url`.
    pub fn new(topic_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let topic_url = topic_url.into();

        if Url::parse(&topic_url).is_err() {
            return Err(WatchError::InvalidUrl(topic_url));
        }

        Ok(Self {
            client: Client::new(),
            topic_url,
            token,
        })
    }

    /// Publishes `message` under `title`, tagged with `tag` for the icon
    /// shown by subscribed clients. The message body is rendered as
    /// Markdown.
    pub async fn notify(&self, title: &str, tag: &str, message: &str) -> Result<()> {
        let mut request = self
            .client
            .post(&self.topic_url)
            .header("X-Title", title)
            .header("X-Tags", tag)
            .header("X-Markdown", "yes")
            .body(message.to_string());

        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(WatchError::Notify { status, message });
        }

        Ok(())
    }
}
