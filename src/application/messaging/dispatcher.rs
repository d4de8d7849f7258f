//! Command dispatcher - Routes invocations through policy checks to handlers

use std::sync::Arc;
use std::time::{Duration, Instant};
use crate::domain::entities::{Card, ChannelRef, Command, CommandAction, Invocation, Reply, ResponseTable, User};
use crate::domain::traits::Platform;
use crate::application::errors::{BotError, CommandError};
use crate::application::policy::{self, CooldownPolicy};
use crate::application::services::{find_answer, CommandService};
use super::parser::{CommandParser, ParsedCommand};
use super::middleware::{ChannelMiddleware, Context, CooldownMiddleware, LoggingMiddleware, Middleware, MiddlewareChain, Next};

/// Terminal state of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Handler ran and its reply was sent
    Executed,
    /// Wrong channel, redirect notice sent
    Redirected,
    /// Cooldown still open, rate-limit notice sent
    CooldownRejected,
    /// Required argument missing, usage hint sent
    MissingArgument,
    /// Not a registered command, nothing sent
    Ignored,
}

/// Dispatcher settings
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    pub prefix: String,
    pub help_channel: String,
    pub cooldown: Duration,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            help_channel: "help".to_string(),
            cooldown: Duration::from_secs(3),
        }
    }
}

/// Command dispatcher - runs every invocation through cooldown and channel
/// checks before its handler, then sends exactly one reply
pub struct CommandDispatcher {
    parser: CommandParser,
    commands: CommandService,
    middleware: Arc<[Arc<dyn Middleware>]>,
    cooldown: Arc<CooldownPolicy>,
    responses: Arc<ResponseTable>,
    help_channel: String,
}

impl CommandDispatcher {
    pub fn new(config: DispatcherConfig, responses: Arc<ResponseTable>) -> Self {
        let commands = CommandService::with_defaults(&config.prefix);
        Self::with_commands(config, commands, responses)
    }

    pub fn with_commands(config: DispatcherConfig, commands: CommandService, responses: Arc<ResponseTable>) -> Self {
        let cooldown = Arc::new(CooldownPolicy::new(config.cooldown));
        // Cooldown is evaluated before the channel check
        let middleware = MiddlewareChain::new()
            .add(LoggingMiddleware)
            .add(CooldownMiddleware::new(Arc::clone(&cooldown)))
            .add(ChannelMiddleware::new(&config.help_channel))
            .build();

        Self {
            parser: CommandParser::new(config.prefix),
            commands,
            middleware,
            cooldown,
            responses,
            help_channel: config.help_channel,
        }
    }

    pub fn parse(&self, text: &str) -> Option<ParsedCommand> {
        self.parser.parse(text)
    }

    pub fn prefix(&self) -> &str {
        self.parser.prefix()
    }

    pub fn cooldown(&self) -> &CooldownPolicy {
        &self.cooldown
    }

    pub fn commands(&self) -> &CommandService {
        &self.commands
    }

    /// Parse raw text and dispatch it. Non-command text is ignored.
    pub async fn dispatch_text(
        &self,
        platform: &dyn Platform,
        text: &str,
        author: User,
        guild_id: Option<String>,
        channel: ChannelRef,
    ) -> Result<DispatchOutcome, BotError> {
        let Some(parsed) = self.parse(text) else {
            return Ok(DispatchOutcome::Ignored);
        };

        let mut invocation = Invocation::new(parsed.name, author, channel).with_argument(parsed.argument);
        invocation.guild_id = guild_id;
        self.dispatch(platform, invocation).await
    }

    pub async fn dispatch(&self, platform: &dyn Platform, invocation: Invocation) -> Result<DispatchOutcome, BotError> {
        self.dispatch_at(platform, invocation, Instant::now()).await
    }

    /// Dispatch with an explicit clock reading
    pub async fn dispatch_at(&self, platform: &dyn Platform, invocation: Invocation, now: Instant) -> Result<DispatchOutcome, BotError> {
        let Some(command) = self.commands.find(&invocation.command) else {
            tracing::debug!("[{}] Ignoring unknown command {}", invocation.id, invocation.command);
            return Ok(DispatchOutcome::Ignored);
        };

        let ctx = Context::new(invocation, command.name.clone(), command.policy, now);
        let invocation = ctx.invocation.clone();

        let result = match Next::new(Arc::clone(&self.middleware)).run(ctx) {
            Ok(ctx) => self.handle(platform, command, &ctx.invocation).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(reply) => {
                self.reply(platform, &invocation, reply).await?;
                Ok(DispatchOutcome::Executed)
            }
            Err(CommandError::CooldownExceeded { retry_after }) => {
                self.reply(platform, &invocation, Reply::text(cooldown_notice(retry_after))).await?;
                Ok(DispatchOutcome::CooldownRejected)
            }
            Err(CommandError::ChannelUnauthorized { required, .. }) => {
                let notice = self.redirect(platform, &invocation, &required).await;
                self.reply(platform, &invocation, Reply::text(notice)).await?;
                Ok(DispatchOutcome::Redirected)
            }
            Err(CommandError::MissingArgument(hint)) => {
                tracing::debug!("[{}] Missing argument for {}", invocation.id, command.name);
                self.reply(platform, &invocation, Reply::text(hint)).await?;
                Ok(DispatchOutcome::MissingArgument)
            }
        }
    }

    /// Resolve the required channel for this invocation and build the notice
    async fn redirect(&self, platform: &dyn Platform, invocation: &Invocation, required: &str) -> String {
        let found = match platform.find_channel(invocation.guild_id.as_deref(), required).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("[{}] Channel lookup for #{} failed: {}", invocation.id, required, e);
                None
            }
        };
        if found.is_none() {
            tracing::warn!("Designated channel #{} not found in guild", required);
        }
        policy::redirect_notice(found.as_ref(), required)
    }

    /// Run the command's handler and build its reply
    async fn handle(&self, platform: &dyn Platform, command: &Command, invocation: &Invocation) -> Result<Reply, CommandError> {
        let reply: Reply = match &command.action {
            CommandAction::Ask => {
                let question = invocation.argument().ok_or_else(|| {
                    CommandError::MissingArgument(format!(
                        "Please provide a question! Example: `{}ask where can I park?`",
                        self.prefix()
                    ))
                })?;

                let answer = find_answer(question, &self.responses);
                Card::new("Gullhacks Helper")
                    .with_description(answer)
                    .with_colour(Card::BLUE)
                    .with_footer(format!("Asked by {}", invocation.author.display_name()))
                    .into()
            }
            CommandAction::Static(card) => card.clone().into(),
            CommandAction::Help => self.commands.get_help(&self.help_channel).into(),
            CommandAction::Ping => {
                let text = match platform.latency().await {
                    Some(latency) => format!("Pong! Latency: {}ms", (latency.as_secs_f64() * 1000.0).round() as u64),
                    None => "Pong! Latency: n/a".to_string(),
                };
                Reply::Text(text)
            }
        };

        Ok(reply)
    }

    async fn reply(&self, platform: &dyn Platform, invocation: &Invocation, reply: Reply) -> Result<(), BotError> {
        tracing::debug!("[{}] Replying in #{}: {}", invocation.id, invocation.channel.name, reply.preview());
        platform.send(&invocation.channel.id, &reply).await
    }
}

/// Rate-limit notice with the wait rounded to one decimal
pub fn cooldown_notice(retry_after: Duration) -> String {
    format!("Slow down! Try again in {:.1}s.", retry_after.as_secs_f64())
}
