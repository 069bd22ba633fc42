//! Bump signal and recording models.

use chrono::{DateTime, Utc};

/// Which message format a bump was detected through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpSource {
    /// Slash-command interaction metadata named `bump`.
    Interaction,
    /// Success phrase in the reply's embed text.
    EmbedText,
}

impl BumpSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interaction => "interaction",
            Self::EmbedText => "embed_text",
        }
    }
}

/// A successful bump extracted from a promotion bot reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpSignal {
    /// ID of the promotion bot's reply; makes recording idempotent
    pub message_id: u64,
    /// Channel the bump happened in, where reminders are posted
    pub channel_id: u64,
    /// User who performed the bump
    pub user_id: u64,
    /// Time the reply was posted
    pub bumped_at: DateTime<Utc>,
    pub source: BumpSource,
}

/// Result of recording a bump signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordBumpOutcome {
    /// The bump was new; the user's count after incrementing.
    Recorded { bump_count: i32 },
    /// The message was already counted; the user's current count.
    AlreadyRecorded { bump_count: i32 },
}

impl RecordBumpOutcome {
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}
