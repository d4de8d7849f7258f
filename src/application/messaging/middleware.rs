//! Middleware system for command processing pipeline

use std::sync::Arc;
use std::time::Instant;
use crate::domain::entities::{CommandPolicy, Invocation};
use crate::application::errors::CommandError;
use crate::application::policy::{self, CooldownOutcome, CooldownPolicy};

/// Context passed through middleware chain
#[derive(Debug, Clone)]
pub struct Context {
    pub invocation: Invocation,
    /// Canonical command name, used as the cooldown key even when an alias was typed
    pub command: String,
    pub policy: CommandPolicy,
    pub now: Instant,
}

impl Context {
    pub fn new(invocation: Invocation, command: impl Into<String>, policy: CommandPolicy, now: Instant) -> Self {
        Self {
            invocation,
            command: command.into(),
            policy,
            now,
        }
    }
}

/// Middleware trait - checks that can stop an invocation before its handler runs
pub trait Middleware: Send + Sync {
    /// Process an invocation and either pass it on or reject it
    fn process(&self, ctx: Context, next: Next) -> MiddlewareResult;
}

/// Result of middleware processing
pub type MiddlewareResult = Result<Context, CommandError>;

/// Next middleware in chain
#[derive(Clone)]
pub struct Next {
    chain: Arc<[Arc<dyn Middleware>]>,
    index: usize,
}

impl Next {
    pub fn new(chain: Arc<[Arc<dyn Middleware>]>) -> Self {
        Self { chain, index: 0 }
    }

    /// Process remaining middleware
    pub fn run(self, ctx: Context) -> MiddlewareResult {
        match self.chain.get(self.index) {
            Some(current) => {
                let next = Next {
                    chain: Arc::clone(&self.chain),
                    index: self.index + 1,
                };
                current.process(ctx, next)
            }
            // No more middleware, processing complete
            None => Ok(ctx),
        }
    }
}

/// Middleware chain builder
pub struct MiddlewareChain {
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    pub fn add<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    pub fn build(self) -> Arc<[Arc<dyn Middleware>]> {
        self.middlewares.into()
    }
}

impl Default for MiddlewareChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Cooldown middleware, keyed by (author, canonical command)
pub struct CooldownMiddleware {
    policy: Arc<CooldownPolicy>,
}

impl CooldownMiddleware {
    pub fn new(policy: Arc<CooldownPolicy>) -> Self {
        Self { policy }
    }
}

impl Middleware for CooldownMiddleware {
    fn process(&self, ctx: Context, next: Next) -> MiddlewareResult {
        if ctx.policy.cooldown {
            let author = &ctx.invocation.author;
            let outcome = self.policy.check_and_consume(&author.id, &ctx.command, author.is_admin, ctx.now);
            if let CooldownOutcome::Denied { retry_after } = outcome {
                return Err(CommandError::CooldownExceeded { retry_after });
            }
        }

        next.run(ctx)
    }
}

/// Designated-channel middleware
pub struct ChannelMiddleware {
    required: String,
}

impl ChannelMiddleware {
    pub fn new(required: impl Into<String>) -> Self {
        Self {
            required: required.into(),
        }
    }
}

impl Middleware for ChannelMiddleware {
    fn process(&self, ctx: Context, next: Next) -> MiddlewareResult {
        if ctx.policy.channel_restricted
            && !policy::is_authorized(&ctx.invocation.channel.name, &self.required)
        {
            return Err(CommandError::ChannelUnauthorized {
                channel: ctx.invocation.channel.name.clone(),
                required: self.required.clone(),
            });
        }

        next.run(ctx)
    }
}

/// Logging middleware for debugging
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn process(&self, ctx: Context, next: Next) -> MiddlewareResult {
        let id = ctx.invocation.id.clone();
        let command = ctx.command.clone();

        tracing::debug!(
            "[{}] {} by {} in #{}",
            id,
            command,
            ctx.invocation.author.id,
            ctx.invocation.channel.name
        );

        let result = next.run(ctx);

        match &result {
            Ok(_) => tracing::debug!("[{}] {} passed checks", id, command),
            Err(e) => tracing::info!("[{}] {} rejected: {}", id, command, e),
        }

        result
    }
}
