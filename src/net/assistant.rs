//! Assistant exchange.
//!
//! One chat turn is a multipart form POST carrying the free-text message and,
//! after the first turn, the session identifier the service echoed back. The
//! reply's optional `outlet` field drives the map: `null` means no map action,
//! an empty list means "clear highlighting", a non-empty list names markers
//! to highlight.

use crate::core::config::MapConfig;
use crate::Result;
use serde::Deserialize;

/// One reply from the assistant service
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantReply {
    #[serde(default)]
    pub reply: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub outlet: Option<Vec<String>>,
}

/// Client for the assistant endpoint
pub struct AssistantClient {
    client: reqwest::Client,
    url: String,
}

impl AssistantClient {
    pub fn new(config: &MapConfig) -> Self {
        Self::with_url(config.assistant_url.clone())
    }

    /// Points the client at a custom URL (staging, or a mock server in tests)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Sends one chat turn.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapError::Network`] on transport failure or a non-2xx
    /// status, and [`crate::MapError::Network`] wrapping the body decode
    /// failure if the reply is not the expected shape. Callers surface these
    /// as a transcript notice and leave the session id untouched so the user
    /// can retry.
    pub async fn send(&self, message: &str, session_id: Option<&str>) -> Result<AssistantReply> {
        let mut form = reqwest::multipart::Form::new().text("message", message.to_owned());
        if let Some(sid) = session_id {
            form = form.text("session_id", sid.to_owned());
        }

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_with_outlets() {
        let reply: AssistantReply = serde_json::from_str(
            r#"{"reply":"Found it","session_id":"abc","outlet":["Cheras"]}"#,
        )
        .unwrap();
        assert_eq!(reply.reply, "Found it");
        assert_eq!(reply.session_id.as_deref(), Some("abc"));
        assert_eq!(reply.outlet, Some(vec!["Cheras".to_string()]));
    }

    #[test]
    fn test_reply_distinguishes_null_and_empty_outlet() {
        let null: AssistantReply =
            serde_json::from_str(r#"{"reply":"hi","outlet":null}"#).unwrap();
        assert!(null.outlet.is_none());

        let empty: AssistantReply =
            serde_json::from_str(r#"{"reply":"hi","outlet":[]}"#).unwrap();
        assert_eq!(empty.outlet, Some(Vec::new()));
    }

    #[test]
    fn test_reply_with_missing_fields() {
        let reply: AssistantReply = serde_json::from_str(r#"{}"#).unwrap();
        assert!(reply.reply.is_empty());
        assert!(reply.session_id.is_none());
        assert!(reply.outlet.is_none());
    }
}
