//! Gateway-independent view of a chat message, as seen by the bump detector.

use chrono::{DateTime, Utc};
use serenity::all::{Message, MessageInteractionMetadata};

/// Slash-command interaction that produced a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionInfo {
    /// Command name, e.g. `bump`. `None` when only the newer interaction metadata was sent,
    /// which names the invoking user but not the command.
    pub name: Option<String>,
    /// User who invoked the command
    pub user_id: u64,
}

/// The parts of a Discord message the detector needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub message_id: u64,
    pub channel_id: u64,
    pub author_id: u64,
    pub timestamp: DateTime<Utc>,
    pub interaction: Option<InteractionInfo>,
    pub content: String,
    /// Titles and descriptions of every embed, in order
    pub embed_texts: Vec<String>,
    /// Users in the message's mention list
    pub mention_ids: Vec<u64>,
}

impl InboundMessage {
    /// Converts a serenity message.
    ///
    /// The invoking user is taken from the legacy `interaction` field when present, which
    /// also carries the command name, and otherwise from `interaction_metadata`.
    // `interaction` is deprecated upstream but still populated on many command replies.
    #[allow(deprecated)]
    pub fn from_discord(message: &Message) -> Self {
        let interaction = message
            .interaction
            .as_ref()
            .map(|i| InteractionInfo {
                name: Some(i.name.clone()),
                user_id: i.user.id.get(),
            })
            .or_else(|| match message.interaction_metadata.as_deref() {
                Some(MessageInteractionMetadata::Command(metadata)) => Some(InteractionInfo {
                    name: None,
                    user_id: metadata.user.id.get(),
                }),
                _ => None,
            });

        let embed_texts = message
            .embeds
            .iter()
            .flat_map(|embed| [embed.title.clone(), embed.description.clone()])
            .flatten()
            .collect();

        Self {
            message_id: message.id.get(),
            channel_id: message.channel_id.get(),
            author_id: message.author.id.get(),
            timestamp: message.timestamp.to_utc(),
            interaction,
            content: message.content.clone(),
            embed_texts,
            mention_ids: message.mentions.iter().map(|u| u.id.get()).collect(),
        }
    }
}
