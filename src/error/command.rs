use thiserror::Error;

/// Slash command rejections that are reported back to the invoking user.
///
/// None of these change state. The `Display` text is what the user sees.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Invoker lacks the administrator permission required by the command.
    #[error("This command can only be used by server administrators.")]
    MissingPermission,

    /// The one-time history scan has already been run on this deployment.
    #[error("**Error: the history scan has already been completed!**")]
    ScanAlreadyCompleted,

    /// Command was used outside of a guild channel.
    #[error("This command can only be used inside a server.")]
    GuildOnly,

    /// A required option was not supplied or had the wrong type.
    #[error("Missing or invalid option `{0}`.")]
    InvalidOption(String),
}
