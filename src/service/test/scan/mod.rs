use crate::{
    data::{
        bump::BumpRepository, reminder::ReminderRepository, setting::SettingRepository,
        user::UserRepository,
    },
    error::{command::CommandError, AppError},
    model::{
        bump::{BumpSignal, BumpSource},
        event::BotEvent,
        message::{InboundMessage, InteractionInfo},
        scan::{ScanOutcome, ScanReport},
    },
    scheduler::worker::BumpWorker,
    service::{
        detector::{BumpDetector, Detection},
        notifier::recording::RecordingNotifier,
        reward::RewardPacing,
        scan::ScanService,
    },
};
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, factory};
use tokio::sync::{mpsc, oneshot};

mod authorize;

const BUMP_BOT: u64 = 302050872383242240;

fn detector() -> BumpDetector {
    BumpDetector::new(BUMP_BOT)
}

/// A promotion bot reply for a bump by `user_id`, `minutes` after a fixed start.
fn bump_reply(message_id: u64, user_id: u64, minutes: i64) -> InboundMessage {
    InboundMessage {
        message_id,
        channel_id: 500,
        author_id: BUMP_BOT,
        timestamp: Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()
            + Duration::minutes(minutes),
        interaction: Some(InteractionInfo {
            name: Some("bump".to_string()),
            user_id,
        }),
        content: String::new(),
        embed_texts: Vec::new(),
        mention_ids: Vec::new(),
    }
}

/// An ordinary chat message.
fn chatter(message_id: u64, minutes: i64) -> InboundMessage {
    InboundMessage {
        author_id: 1,
        interaction: None,
        content: "hello".to_string(),
        ..bump_reply(message_id, 0, minutes)
    }
}
