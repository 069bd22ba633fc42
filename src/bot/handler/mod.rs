use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Message, Ready};
use serenity::async_trait;
use tokio::sync::mpsc;

use crate::{model::event::BotEvent, service::detector::BumpDetector};

pub mod interaction;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub events: mpsc::Sender<BotEvent>,
    pub detector: BumpDetector,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        events: mpsc::Sender<BotEvent>,
        detector: BumpDetector,
    ) -> Self {
        Self {
            db,
            events,
            detector,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, _ctx: Context, message: Message) {
        message::handle_message(&self.events, &self.detector, message).await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.db, &self.events, &self.detector, ctx, interaction)
            .await;
    }
}
