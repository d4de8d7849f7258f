use std::time::Duration;
use async_trait::async_trait;
use crate::domain::entities::{ChannelRef, Reply};
use crate::application::errors::BotError;

/// Platform trait - the narrow slice of the chat service the dispatcher needs.
///
/// Connection lifecycle, reconnection and rendering are the implementor's
/// business; the dispatcher only sends replies and looks channels up by name.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Send a reply to a channel
    async fn send(&self, channel_id: &str, reply: &Reply) -> Result<(), BotError>;

    /// Look up a channel by exact name among a guild's channels
    async fn find_channel(&self, guild_id: Option<&str>, name: &str) -> Result<Option<ChannelRef>, BotError>;

    /// Last observed round-trip latency to the platform
    async fn latency(&self) -> Option<Duration>;

    /// Set the bot's presence text
    async fn set_presence(&self, activity: &str);
}
