//! One-shot messages carried across a Post/Redirect/Get round trip.

use crate::registry::Outcome;
use crate::utils::escape_html;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tower_sessions::Session;

const FLASH_MESSAGES_KEY: &str = "_flash_messages";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: Level,
    pub content: String,
}

fn session_from_parts(parts: &Parts) -> Result<Session, StatusCode> {
    parts
        .extensions
        .get::<Session>()
        .cloned()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Messages left by the previous request. Reading them clears them.
pub struct IncomingFlashMessages(VecDeque<FlashMessage>);

impl IncomingFlashMessages {
    pub fn iter(&self) -> impl Iterator<Item = &FlashMessage> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for m in self.iter() {
            html.push_str(&format!(
                "<p class=\"flash flash-{}\">{}</p>\n",
                m.level.as_str(),
                escape_html(&m.content)
            ));
        }
        html
    }
}

impl<S> FromRequestParts<S> for IncomingFlashMessages
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = session_from_parts(parts)?;

        let messages: VecDeque<FlashMessage> = match session.remove(FLASH_MESSAGES_KEY).await {
            Ok(messages) => messages.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Failed to read flash messages: {:?}", e);
                VecDeque::new()
            }
        };

        Ok(IncomingFlashMessages(messages))
    }
}

/// Queues messages for the next rendered page.
pub struct FlashMessageSender {
    session: Session,
}

impl FlashMessageSender {
    async fn send(&self, message: FlashMessage) -> Result<(), tower_sessions::session::Error> {
        let mut messages: VecDeque<FlashMessage> = self
            .session
            .get(FLASH_MESSAGES_KEY)
            .await?
            .unwrap_or_default();
        messages.push_back(message);
        self.session.insert(FLASH_MESSAGES_KEY, messages).await
    }

    pub async fn error(
        &self,
        content: impl Into<String>,
    ) -> Result<(), tower_sessions::session::Error> {
        self.send(FlashMessage {
            level: Level::Error,
            content: content.into(),
        })
        .await
    }

    pub async fn info(
        &self,
        content: impl Into<String>,
    ) -> Result<(), tower_sessions::session::Error> {
        self.send(FlashMessage {
            level: Level::Info,
            content: content.into(),
        })
        .await
    }

    /// Successes are shown as info, failures as errors.
    pub async fn outcome(&self, outcome: &Outcome) -> Result<(), tower_sessions::session::Error> {
        if outcome.success {
            self.info(outcome.message.clone()).await
        } else {
            self.error(outcome.message.clone()).await
        }
    }
}

impl<S> FromRequestParts<S> for FlashMessageSender
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = session_from_parts(parts)?;
        Ok(FlashMessageSender { session })
    }
}
