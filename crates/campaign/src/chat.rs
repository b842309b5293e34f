//! Outbound chat.

use chrono::{DateTime, Utc};

/// Reserved whisper target addressing whoever holds the GM seat rather
/// than a named player.
pub const GM_TARGET: &str = "GM";

/// One whispered message, as recorded by sinks that keep a transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct Whisper {
    /// Display name of the recipient, or [`GM_TARGET`].
    pub to: String,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Receives the engine's whispered replies. All engine output is
/// whispered; nothing is broadcast to the table.
pub trait ChatSink {
    fn whisper(&mut self, to: &str, text: &str);
}
