//! Outbound Discord notifier
//!
//! Fire-and-forget webhook posts for recruitment events. An unconfigured
//! webhook is a no-op, and delivery failures are logged, never propagated:
//! the primary transaction has already committed by the time this runs.

use serde_json::json;
use tracing::{debug, warn};

/// Best-effort Discord webhook client
pub struct DiscordNotifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl DiscordNotifier {
    /// Create a notifier; `None` disables sending entirely
    #[must_use]
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// A notifier that never sends, for tests and local development
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// Whether a webhook is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Post a plain message; failures are swallowed after a warning
    pub async fn send_message(&self, content: &str) {
        let Some(url) = &self.webhook_url else {
            debug!("Discord webhook not configured; skipping message");
            return;
        };

        let payload = json!({ "content": content });
        match self.client.post(url).json(&payload).send().await {
            Ok(response) if !response.status().is_success() => {
                warn!(status = %response.status(), "Discord webhook rejected message");
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "Discord webhook send failed");
            }
        }
    }
}

impl std::fmt::Debug for DiscordNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordNotifier")
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_notifier_is_noop() {
        let notifier = DiscordNotifier::disabled();
        assert!(!notifier.is_configured());
        // Must not error or panic
        notifier.send_message("hello").await;
    }
}
