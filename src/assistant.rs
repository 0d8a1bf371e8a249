//! Chat assistant collaborator
//!
//! The one asynchronous path in the system: a user's outgoing message is
//! committed as its own transition, the client awaits the remote completion,
//! and the result — the assistant's reply, or a fixed apology on any failure
//! — is committed as a second transition to the same conversation bucket.
//!
//! There is no retry and no cancellation. A second message sent while one is
//! pending is not blocked; completions land in commit order, which is also
//! display order.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::shared::config::AssistantConfig;
use crate::shared::model::{Message, ASSISTANT_USER_ID};
use crate::store::{projections, Action, AppStore};

/// Reply committed when the completion call fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Who produced a turn in the prior conversation history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// A human participant
    User,
    /// The assistant
    Model,
}

/// One prior turn handed to the completion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Map a conversation bucket to completion-call history: the reserved
/// assistant sender id becomes the model role, everything else the user role.
pub fn history_from_messages(messages: &[Message]) -> Vec<ChatTurn> {
    messages
        .iter()
        .map(|msg| ChatTurn {
            role: if msg.is_from_assistant() {
                ChatRole::Model
            } else {
                ChatRole::User
            },
            text: msg.text.clone(),
        })
        .collect()
}

/// Chat completion errors
#[derive(Debug, Error)]
pub enum AssistantError {
    /// No API key configured
    #[error("no assistant API key configured")]
    MissingApiKey,

    /// Transport-level failure
    #[error("assistant request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("assistant returned status {0}")]
    Api(reqwest::StatusCode),

    /// The API answered but carried no usable text
    #[error("assistant returned an empty reply")]
    EmptyReply,
}

/// A chat completion collaborator
#[async_trait]
pub trait ChatAssistant: Send + Sync {
    /// Produce a reply to `message` given the prior turn history.
    async fn reply(&self, message: &str, history: &[ChatTurn]) -> Result<String, AssistantError>;
}

/// Gemini `generateContent` client
pub struct GeminiChat {
    http: reqwest::Client,
    config: AssistantConfig,
    api_key: String,
}

impl GeminiChat {
    /// Build a client from the configuration; fails only when no API key is
    /// available.
    pub fn new(config: AssistantConfig) -> Result<Self, AssistantError> {
        let api_key = config
            .api_key()
            .ok_or(AssistantError::MissingApiKey)?
            .to_string();
        Ok(Self {
            http: reqwest::Client::new(),
            config,
            api_key,
        })
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

fn role_name(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Model => "model",
    }
}

#[async_trait]
impl ChatAssistant for GeminiChat {
    async fn reply(&self, message: &str, history: &[ChatTurn]) -> Result<String, AssistantError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: role_name(turn.role).to_string(),
                parts: vec![Part {
                    text: turn.text.clone(),
                }],
            })
            .collect();
        contents.push(Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: message.to_string(),
            }],
        });

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_base(),
            self.config.model()
        );
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest { contents })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssistantError::Api(response.status()));
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AssistantError::EmptyReply);
        }
        Ok(text)
    }
}

/// Send a chat message from the session user to `receiver_id`.
///
/// The outgoing message commits immediately. When the receiver is the
/// assistant, the completion is awaited and its reply (or the apology
/// fallback) commits as a second transition to the same bucket. History is
/// captured before the outgoing message commits, so the completion sees only
/// prior turns. A no-op when nobody is signed in.
pub async fn send_chat_message<A>(store: &mut AppStore, assistant: &A, receiver_id: &str, text: &str)
where
    A: ChatAssistant + ?Sized,
{
    let Some(sender) = store.state().current_user.clone() else {
        return;
    };

    let history = history_from_messages(projections::conversation(store.state(), receiver_id));
    let outgoing = Message::new(sender.id.clone(), receiver_id, text);
    store.dispatch(Action::SendMessage(outgoing)).await;

    if receiver_id != ASSISTANT_USER_ID {
        return;
    }

    let reply_text = match assistant.reply(text, &history).await {
        Ok(reply) => reply,
        Err(err) => {
            warn!(error = %err, "assistant completion failed; committing fallback reply");
            FALLBACK_REPLY.to_string()
        }
    };
    let reply = Message::new(ASSISTANT_USER_ID, sender.id, reply_text);
    store.dispatch(Action::SendMessage(reply)).await;
}
