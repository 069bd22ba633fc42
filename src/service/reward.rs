//! Reward messages posted after a bump: the slot machine, the thank-you note and
//! milestone congratulations.
//!
//! Everything here is pure. Randomness is drawn up front into a [`RewardDraw`] so the
//! bump service never holds an RNG across an await point.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::time::Duration;

/// Symbols on each slot reel.
pub const REEL_SYMBOLS: [&str; 4] = ["💎", "⭐", "🔔", "😭"];

/// Cumulative counts that earn an extra congratulation.
pub const MILESTONES: [i32; 5] = [10, 50, 100, 150, 200];

const THANKS_LINES: [&str; 5] = [
    "Thanks for keeping the server visible!",
    "Your bump just pushed us back to the top!",
    "Another bump in the books, much appreciated!",
    "The server thanks you for your service!",
    "Nice timing, that bump counts!",
];

/// Delays between the reward messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardPacing {
    /// Pause before each reel is revealed
    pub reel_delay: Duration,
    /// Pause between the slot outcome and the thank-you message
    pub thanks_delay: Duration,
}

impl RewardPacing {
    /// No pauses at all.
    pub fn instant() -> Self {
        Self {
            reel_delay: Duration::ZERO,
            thanks_delay: Duration::ZERO,
        }
    }
}

impl Default for RewardPacing {
    fn default() -> Self {
        Self {
            reel_delay: Duration::from_secs(1),
            thanks_delay: Duration::from_secs(2),
        }
    }
}

/// Result of a slot spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    /// Three diamonds
    Jackpot,
    /// Three stars
    BigWin,
    /// Three bells
    Win,
    /// Any two reels equal
    NearMiss,
    Miss,
}

impl SlotOutcome {
    /// Scores three revealed reels.
    pub fn from_reels(reels: &[&str; 3]) -> Self {
        let [a, b, c] = *reels;

        if a == b && b == c {
            return match a {
                "💎" => Self::Jackpot,
                "⭐" => Self::BigWin,
                "🔔" => Self::Win,
                // Three of the losing symbol still pays out as a near miss
                _ => Self::NearMiss,
            };
        }

        if a == b || b == c || a == c {
            Self::NearMiss
        } else {
            Self::Miss
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Jackpot => "💰 **JACKPOT!!!** 💰 Incredible luck!",
            Self::BigWin => "🎉 **BIG WIN!** 🎉 The stars are aligned!",
            Self::Win => "🔔 **WIN!** 🔔 Ding ding ding!",
            Self::NearMiss => "😮 So close! Just one reel off...",
            Self::Miss => "🍀 No luck this time. Try again on the next bump!",
        }
    }
}

/// Randomness for one round of reward messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardDraw {
    pub reels: [&'static str; 3],
    pub thanks: &'static str,
}

impl RewardDraw {
    /// Draws reels and a thanks line from the thread-local RNG.
    pub fn roll() -> Self {
        Self::roll_with(&mut rand::rng())
    }

    pub fn roll_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut reel = || REEL_SYMBOLS[rng.random_range(0..REEL_SYMBOLS.len())];
        let reels = [reel(), reel(), reel()];
        let thanks = THANKS_LINES[rng.random_range(0..THANKS_LINES.len())];

        Self { reels, thanks }
    }
}

/// Renders the slot machine with the first `revealed` reels shown and the rest hidden.
pub fn slot_frame(user_id: u64, reels: &[&str; 3], revealed: usize) -> String {
    let shown: Vec<&str> = reels
        .iter()
        .enumerate()
        .map(|(i, symbol)| if i < revealed { *symbol } else { "?" })
        .collect();

    format!(
        "🎰 <@{}>'s bump slot!\n**[ {} | {} | {} ]**",
        user_id, shown[0], shown[1], shown[2]
    )
}

/// Title earned at a cumulative bump count.
pub fn bump_title(count: i32) -> &'static str {
    match count {
        i32::MIN..=9 => "Rookie Bumper 🔰",
        10..=49 => "Regular Bumper ⭐",
        50..=99 => "Expert Bumper ✨",
        100..=199 => "Bump Hero 👑",
        _ => "Bump Legend ⛩️",
    }
}

pub fn is_milestone(count: i32) -> bool {
    MILESTONES.contains(&count)
}

/// Formats a time as a Discord relative timestamp.
pub fn relative_timestamp(time: DateTime<Utc>) -> String {
    format!("<t:{}:R>", time.timestamp())
}

/// Builds the thank-you message posted after the slot result.
///
/// # Arguments
/// - `user_id` - User who bumped
/// - `bump_count` - User's cumulative count including this bump
/// - `next_bump_at` - Time the server can bump again
/// - `thanks` - Thanks line drawn for this bump
pub fn thank_you_message(
    user_id: u64,
    bump_count: i32,
    next_bump_at: DateTime<Utc>,
    thanks: &str,
) -> String {
    format!(
        "**{}** <@{}>\n{}\nYou have bumped **{}** times so far.\nNext bump: {}",
        bump_title(bump_count),
        user_id,
        thanks,
        bump_count,
        relative_timestamp(next_bump_at)
    )
}

pub fn milestone_message(user_id: u64, bump_count: i32) -> String {
    format!(
        "🎊 **Milestone!** 🎊\nCongratulations <@{}> on reaching **{}** bumps! You are now a **{}**!",
        user_id,
        bump_count,
        bump_title(bump_count)
    )
}
