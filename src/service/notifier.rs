//! Outbound chat messages.
//!
//! Services post to Discord through the [`Notifier`] trait instead of holding a serenity
//! `Http` directly, which keeps the bump and reminder flows testable without a gateway.

use serenity::all::{ChannelId, CreateMessage, EditMessage, MessageId};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::error::AppError;

/// Sends and edits plain-text messages in a channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Posts `content` to `channel_id`, returning the new message's ID.
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError>;

    /// Replaces the content of a message previously posted by the bot.
    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError>;
}

/// Notifier backed by the bot's Discord HTTP client.
#[derive(Clone)]
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    /// Creates a new DiscordNotifier.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client shared with the gateway client
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError> {
        let message = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(message.id.get())
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .edit_message(
                &self.http,
                MessageId::new(message_id),
                EditMessage::new().content(content),
            )
            .await?;

        Ok(())
    }
}
