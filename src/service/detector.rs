//! Bump detection over promotion bot replies.
//!
//! The promotion bot answers a successful `/bump` in one of two shapes:
//!
//! 1. A reply produced by the `bump` slash-command interaction, carrying the invoking user.
//!    Replies that only carry the newer interaction metadata do not name the command and
//!    fall through to the embed check, which then takes the user from that metadata.
//! 2. An embed whose title or description contains a success phrase ("Bump done", or the
//!    Japanese "表示順をアップしたよ"). The user then comes from the interaction if there is
//!    one, otherwise from the first `<@id>` mention in the embed text or message content,
//!    otherwise from the message's mention list.
//!
//! A success phrase without any resolvable user is reported as ambiguous and dropped.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{
    bump::{BumpSignal, BumpSource},
    message::InboundMessage,
};

/// Name of the promotion bot's bump command.
pub const BUMP_COMMAND_NAME: &str = "bump";

static SUCCESS_PHRASE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)bump done|表示順をアップしたよ").ok());

static USER_MENTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"<@!?(\d+)>").ok());

/// Result of inspecting one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Bump(BumpSignal),
    /// Looked like a bump success but no user could be resolved.
    Ambiguous(&'static str),
    NotABump,
}

/// Detects successful bumps in messages from the configured promotion bot.
#[derive(Debug, Clone, Copy)]
pub struct BumpDetector {
    bump_bot_id: u64,
}

impl BumpDetector {
    /// Creates a detector for replies authored by `bump_bot_id`.
    pub fn new(bump_bot_id: u64) -> Self {
        Self { bump_bot_id }
    }

    pub fn bump_bot_id(&self) -> u64 {
        self.bump_bot_id
    }

    /// Inspects a message for a bump success signal.
    pub fn detect(&self, message: &InboundMessage) -> Detection {
        if message.author_id != self.bump_bot_id {
            return Detection::NotABump;
        }

        if let Some(interaction) = message
            .interaction
            .as_ref()
            .filter(|i| i.name.as_deref() == Some(BUMP_COMMAND_NAME))
        {
            return Detection::Bump(signal(message, interaction.user_id, BumpSource::Interaction));
        }

        if !message.embed_texts.iter().any(|text| has_success_phrase(text)) {
            return Detection::NotABump;
        }

        match resolve_user(message) {
            Some(user_id) => Detection::Bump(signal(message, user_id, BumpSource::EmbedText)),
            None => Detection::Ambiguous("success embed without a resolvable user"),
        }
    }
}

fn has_success_phrase(text: &str) -> bool {
    SUCCESS_PHRASE
        .as_ref()
        .is_some_and(|regex| regex.is_match(text))
}

/// Finds the acting user for an embed-text success message.
fn resolve_user(message: &InboundMessage) -> Option<u64> {
    if let Some(interaction) = &message.interaction {
        return Some(interaction.user_id);
    }

    message
        .embed_texts
        .iter()
        .chain(std::iter::once(&message.content))
        .find_map(|text| first_mention(text))
        .or_else(|| message.mention_ids.first().copied())
}

fn first_mention(text: &str) -> Option<u64> {
    USER_MENTION
        .as_ref()?
        .captures_iter(text)
        .find_map(|caps| caps.get(1)?.as_str().parse().ok())
}

fn signal(message: &InboundMessage, user_id: u64, source: BumpSource) -> BumpSignal {
    BumpSignal {
        message_id: message.message_id,
        channel_id: message.channel_id,
        user_id,
        bumped_at: message.timestamp,
        source,
    }
}
