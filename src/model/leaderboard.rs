use super::user::BumpUser;

/// Number of users shown on the leaderboard and mentioned by the escalation reminder.
pub const LEADERBOARD_SIZE: u64 = 5;

/// Top contributors plus the server-wide bump total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    /// Users ordered by bump count, highest first
    pub entries: Vec<BumpUser>,
    /// Sum of every user's bump count
    pub total_bumps: i64,
}

impl Leaderboard {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
