use serenity::all::Message;
use tokio::sync::mpsc;

use crate::{
    error::internal::InternalError,
    model::{event::BotEvent, message::InboundMessage},
    service::detector::{BumpDetector, Detection},
};

/// Handle message creation in a channel
///
/// Messages from anyone but the promotion bot are ignored. A detected bump is queued for
/// the bump worker; an ambiguous success reply is logged and dropped.
pub async fn handle_message(
    events: &mpsc::Sender<BotEvent>,
    detector: &BumpDetector,
    message: Message,
) {
    if message.author.id.get() != detector.bump_bot_id() {
        return;
    }

    match detector.detect(&InboundMessage::from_discord(&message)) {
        Detection::Bump(signal) => {
            tracing::info!(
                "Detected bump by user {} in channel {} via {}",
                signal.user_id,
                signal.channel_id,
                signal.source.as_str()
            );

            let user_id = signal.user_id;
            if events.send(BotEvent::Bump(signal)).await.is_err() {
                tracing::error!(
                    "Failed to queue bump by user {}: {}",
                    user_id,
                    InternalError::EventChannelClosed
                );
            }
        }
        Detection::Ambiguous(reason) => {
            tracing::warn!("Ignoring promotion bot reply {}: {}", message.id, reason);
        }
        Detection::NotABump => {}
    }
}
