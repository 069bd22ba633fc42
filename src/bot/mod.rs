//! Discord gateway integration.
//!
//! The bot watches guild messages for promotion bot replies and answers the slash
//! commands. It never updates bump counts or reminders from the gateway task itself:
//! detected bumps are queued for the bump worker as `BotEvent::Bump`, and the administrator
//! history scan hands its fetched messages to the worker as `BotEvent::Scan` and waits for
//! the result.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability
//! - `GUILD_MESSAGES` - Message create events in guild channels
//! - `MESSAGE_CONTENT` - Embed and content text of other bots' replies (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled in the
//! Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
