/// Default and maximum number of history messages a scan may walk.
pub const DEFAULT_SCAN_LIMIT: u64 = 1000;
pub const MAX_SCAN_LIMIT: u64 = 10000;

/// Result of walking a channel's history for past bumps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Messages inspected
    pub scanned: usize,
    /// Bump messages found by the detector
    pub detected: usize,
    /// Bumps newly counted by this scan
    pub recorded: usize,
    /// Bumps found that were already counted
    pub already_counted: usize,
}

/// Outcome of a scan request that passed the permission and completion checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Bumps were found and the scan is now marked complete.
    Completed(ScanReport),
    /// No bumps were found; the completion flag stays unset so the scan can be retried.
    NothingFound(ScanReport),
}
