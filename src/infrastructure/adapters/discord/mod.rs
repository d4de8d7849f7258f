//! Discord adapter
//!
//! Wraps serenity: the gateway connection, reconnects and embed rendering all
//! live in serenity; this module translates its events into invocations and
//! implements [`Platform`] over a serenity [`Context`].
//!
//! # Gateway Intents
//!
//! - `GUILDS` - guild and channel cache
//! - `GUILD_MESSAGES` - prefix commands
//! - `GUILD_MEMBERS` - member joins (privileged)
//! - `MESSAGE_CONTENT` - command text (privileged)
//!
//! Both privileged intents must be enabled in the Discord Developer Portal.

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use serenity::all::{
    ActivityData, ChannelId, ChannelType, Client, Colour, Context, CreateEmbed, CreateEmbedFooter,
    CreateMessage, EventHandler, GatewayIntents, GuildChannel, GuildId, Member, Message, Ready,
    RoleId, UserId,
};
use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;

use crate::domain::entities::{Card, ChannelRef, Invocation, Reply, User};
use crate::domain::traits::Platform;
use crate::application::errors::BotError;
use crate::application::messaging::CommandDispatcher;
use crate::application::services::WelcomeService;

/// Shard manager handle, stored in the client data for latency lookups
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// [`Platform`] over one serenity context
pub struct DiscordPlatform {
    ctx: Context,
}

impl DiscordPlatform {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Guild owner, ADMINISTRATOR permission through any role, or the named admin role
    pub fn member_is_admin(&self, guild_id: GuildId, user_id: UserId, roles: &[RoleId], admin_role: Option<&str>) -> bool {
        let Some(guild) = self.ctx.cache.guild(guild_id) else {
            tracing::warn!("Guild {} not cached, treating {} as non-admin", guild_id, user_id);
            return false;
        };

        if guild.owner_id == user_id {
            return true;
        }

        roles
            .iter()
            .filter_map(|id| guild.roles.get(id))
            .any(|role| role.permissions.administrator() || admin_role.is_some_and(|name| role.name == name))
    }

    /// Current name of a channel, from the cache when possible
    pub async fn channel_ref(&self, guild_id: GuildId, channel_id: ChannelId) -> ChannelRef {
        let cached = self
            .ctx
            .cache
            .guild(guild_id)
            .and_then(|guild| guild.channels.get(&channel_id).map(|c| c.name.clone()));

        let name = match cached {
            Some(name) => name,
            None => match channel_id.to_channel(&self.ctx).await {
                Ok(channel) => channel.guild().map(|c| c.name).unwrap_or_default(),
                Err(e) => {
                    tracing::warn!("Failed to resolve name of channel {}: {}", channel_id, e);
                    String::new()
                }
            },
        };

        ChannelRef::new(channel_id.to_string(), name)
    }

    /// `None` when the guild is not in the cache
    fn find_cached_channel(&self, guild_id: GuildId, name: &str) -> Option<Option<ChannelRef>> {
        let guild = self.ctx.cache.guild(guild_id)?;
        Some(find_named(guild.channels.values(), name))
    }
}

fn find_named<'a>(mut channels: impl Iterator<Item = &'a GuildChannel>, name: &str) -> Option<ChannelRef> {
    channels
        .find(|c| c.name == name && matches!(c.kind, ChannelType::Text | ChannelType::News))
        .map(|c| ChannelRef::new(c.id.to_string(), c.name.clone()))
}

fn parse_id(id: &str) -> Result<u64, BotError> {
    id.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| BotError::Internal(format!("Invalid Discord id: {}", id)))
}

/// Render a card as a Discord embed
pub fn embed(card: &Card) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&card.title)
        .colour(Colour::new(card.colour));

    if let Some(description) = &card.description {
        embed = embed.description(description);
    }
    for field in &card.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &card.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }
    embed
}

#[async_trait]
impl Platform for DiscordPlatform {
    async fn send(&self, channel_id: &str, reply: &Reply) -> Result<(), BotError> {
        let channel_id = ChannelId::new(parse_id(channel_id)?);
        let message = match reply {
            Reply::Text(text) => CreateMessage::new().content(text),
            Reply::Card(card) => CreateMessage::new().embed(embed(card)),
        };

        channel_id
            .send_message(&self.ctx.http, message)
            .await
            .map_err(|e| BotError::Platform(e.to_string()))?;
        Ok(())
    }

    async fn find_channel(&self, guild_id: Option<&str>, name: &str) -> Result<Option<ChannelRef>, BotError> {
        let Some(guild_id) = guild_id else {
            return Ok(None);
        };
        let guild_id = GuildId::new(parse_id(guild_id)?);

        if let Some(found) = self.find_cached_channel(guild_id, name) {
            return Ok(found);
        }

        let channels = guild_id
            .channels(&self.ctx.http)
            .await
            .map_err(|e| BotError::Platform(e.to_string()))?;
        Ok(find_named(channels.values(), name))
    }

    async fn latency(&self) -> Option<Duration> {
        let manager = self.ctx.data.read().await.get::<ShardManagerContainer>().cloned()?;
        let runners = manager.runners.lock().await;
        runners.get(&self.ctx.shard_id).and_then(|runner| runner.latency)
    }

    async fn set_presence(&self, activity: &str) {
        self.ctx.set_activity(Some(ActivityData::playing(activity)));
    }
}

/// Discord bot event handler
pub struct Handler {
    dispatcher: Arc<CommandDispatcher>,
    welcome: WelcomeService,
    presence: String,
    admin_role: Option<String>,
}

impl Handler {
    pub fn new(dispatcher: Arc<CommandDispatcher>, welcome: WelcomeService, presence: impl Into<String>, admin_role: Option<String>) -> Self {
        Self {
            dispatcher,
            welcome,
            presence: presence.into(),
            admin_role,
        }
    }
}

#[serenity::async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} has connected to Discord!", ready.user.name);
        tracing::info!("Bot is in {} server(s)", ready.guilds.len());

        DiscordPlatform::new(ctx).set_presence(&self.presence).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        let member = User::new(new_member.user.id.to_string())
            .with_username(new_member.user.name.clone())
            .with_nickname(new_member.nick.clone());
        let guild_id = new_member.guild_id.to_string();

        let platform = DiscordPlatform::new(ctx);
        if let Err(e) = self.welcome.greet(&platform, Some(&guild_id), &member).await {
            tracing::error!("Failed to welcome {}: {}", member.id, e);
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        // Commands are guild-only
        let Some(guild_id) = msg.guild_id else {
            return;
        };
        let Some(parsed) = self.dispatcher.parse(&msg.content) else {
            return;
        };
        if self.dispatcher.commands().find(&parsed.name).is_none() {
            return;
        }

        let platform = DiscordPlatform::new(ctx);

        let roles = msg.member.as_ref().map(|m| m.roles.clone()).unwrap_or_default();
        let is_admin = platform.member_is_admin(guild_id, msg.author.id, &roles, self.admin_role.as_deref());
        let author = User::new(msg.author.id.to_string())
            .with_username(msg.author.global_name.clone().unwrap_or_else(|| msg.author.name.clone()))
            .with_nickname(msg.member.as_ref().and_then(|m| m.nick.clone()))
            .with_admin(is_admin);

        let channel = platform.channel_ref(guild_id, msg.channel_id).await;
        let invocation = Invocation::new(parsed.name, author, channel)
            .with_guild(guild_id.to_string())
            .with_argument(parsed.argument);
        let id = invocation.id.clone();
        let command = invocation.command.clone();

        match self.dispatcher.dispatch(&platform, invocation).await {
            Ok(outcome) => tracing::debug!("[{}] {} finished: {:?}", id, command, outcome),
            Err(e) => tracing::error!("[{}] Command {} failed: {}", id, command, e),
        }
    }
}

/// Connects to Discord and runs until the client shuts down
pub async fn start_bot(token: &str, handler: Handler) -> Result<(), BotError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| BotError::Platform(e.to_string()))?;

    client
        .data
        .write()
        .await
        .insert::<ShardManagerContainer>(Arc::clone(&client.shard_manager));

    tracing::info!("Starting Discord bot...");

    client
        .start()
        .await
        .map_err(|e| BotError::Platform(e.to_string()))
}
