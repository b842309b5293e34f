//! Inbound platform events.
//!
//! The host delivers every table interaction as a chat message; the engine
//! cares only about API messages (lines starting with `!`) and ignores the
//! rest without logging.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host chat-message categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Plain table talk.
    General,
    /// A command line addressed to scripts.
    Api,
    /// A private message between seats.
    Whisper,
    /// Third-person emote.
    Emote,
}

/// A chat message as delivered by the host platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub kind: MessageKind,
    pub content: String,
    /// Host id of the speaking player.
    pub player_id: String,
    /// When the host delivered the message.
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// An API command line stamped now.
    pub fn api(player_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Api,
            content: content.into(),
            player_id: player_id.into(),
            sent_at: Utc::now(),
        }
    }

    /// A plain chat line stamped now.
    pub fn general(player_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::General,
            content: content.into(),
            player_id: player_id.into(),
            sent_at: Utc::now(),
        }
    }
}
