use std::sync::Arc;
use crate::domain::entities::{Reply, ResponseTable, User};
use crate::domain::traits::Platform;
use crate::application::errors::BotError;

/// Greets members who join the guild
pub struct WelcomeService {
    channel_name: String,
    responses: Arc<ResponseTable>,
}

impl WelcomeService {
    pub fn new(channel_name: impl Into<String>, responses: Arc<ResponseTable>) -> Self {
        Self {
            channel_name: channel_name.into(),
            responses,
        }
    }

    pub fn greeting(&self, member: &User) -> String {
        format!("Welcome {}! {}", member.mention(), self.responses.welcome_message)
    }

    /// Post the greeting in the welcome channel. Returns `false` when the guild
    /// has no such channel, which is not an error.
    pub async fn greet(&self, platform: &dyn Platform, guild_id: Option<&str>, member: &User) -> Result<bool, BotError> {
        let Some(channel) = platform.find_channel(guild_id, &self.channel_name).await? else {
            tracing::debug!("No #{} channel, skipping greeting for {}", self.channel_name, member.id);
            return Ok(false);
        };

        platform.send(&channel.id, &Reply::text(self.greeting(member))).await?;
        tracing::info!("Welcomed {} in #{}", member.display_name(), channel.name);
        Ok(true)
    }
}
