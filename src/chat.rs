//! Assistant chat boundary: request/response text generation with no
//! domain logic. Failures degrade to a fixed user-visible apology.

use serde::{Deserialize, Serialize};

/// Reply shown when the provider fails or returns nothing usable
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a response.";

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Request(#[from] Box<ureq::Error>),
    #[error("chat response unreadable: {0}")]
    Response(#[from] std::io::Error),
    #[error("chat endpoint returned an empty reply")]
    EmptyReply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A completion backend: ordered history plus an optional system
/// prompt in, a single reply out.
pub trait ChatProvider {
    fn reply(&self, history: &[ChatMessage], system: Option<&str>) -> Result<String, ChatError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    history: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: Option<String>,
}

/// HTTP provider posting `{history, system}` and expecting `{reply}`
pub struct HttpChatProvider {
    endpoint: String,
}

impl HttpChatProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpChatProvider {
            endpoint: endpoint.into(),
        }
    }
}

impl ChatProvider for HttpChatProvider {
    fn reply(&self, history: &[ChatMessage], system: Option<&str>) -> Result<String, ChatError> {
        let request = ChatRequest { history, system };
        let response = ureq::post(&self.endpoint)
            .send_json(&request)
            .map_err(Box::new)?;
        let body: ChatResponse = response.into_json()?;
        match body.reply {
            Some(reply) if !reply.trim().is_empty() => Ok(reply),
            _ => Err(ChatError::EmptyReply),
        }
    }
}

/// Ask the provider, degrading to the fixed apology on any failure
pub fn reply_or_fallback(
    provider: &dyn ChatProvider,
    history: &[ChatMessage],
    system: Option<&str>,
) -> String {
    match provider.reply(history, system) {
        Ok(reply) => reply,
        Err(err) => {
            log::warn!("chat provider failed: {}", err);
            FALLBACK_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted(Result<&'static str, ChatError>);

    impl ChatProvider for Scripted {
        fn reply(&self, _: &[ChatMessage], _: Option<&str>) -> Result<String, ChatError> {
            match &self.0 {
                Ok(reply) => Ok(reply.to_string()),
                Err(_) => Err(ChatError::EmptyReply),
            }
        }
    }

    #[test]
    fn reply_passes_through() {
        let provider = Scripted(Ok("Deductible expenses reduce your taxable base."));
        let history = [ChatMessage::user("What are deductions?")];
        assert_eq!(
            reply_or_fallback(&provider, &history, None),
            "Deductible expenses reduce your taxable base."
        );
    }

    #[test]
    fn failure_degrades_to_apology() {
        let provider = Scripted(Err(ChatError::EmptyReply));
        let history = [
            ChatMessage::user("hello"),
            ChatMessage::assistant("hi"),
            ChatMessage::user("help me"),
        ];
        assert_eq!(
            reply_or_fallback(&provider, &history, Some("You are a tax assistant")),
            FALLBACK_REPLY
        );
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }
}
