use std::collections::HashMap;
use super::Card;

/// What a command does once it has passed the policy checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// Free-text question answered from the response table
    Ask,
    /// Gateway latency report
    Ping,
    /// Listing of registered commands
    Help,
    /// Pre-authored card
    Static(Card),
}

/// Per-command policy evaluated uniformly by the middleware chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandPolicy {
    /// Only runs in the designated help channel
    pub channel_restricted: bool,
    /// Subject to the per-user cooldown
    pub cooldown: bool,
}

impl CommandPolicy {
    pub const RESTRICTED: Self = Self { channel_restricted: true, cooldown: true };
    pub const ANY_CHANNEL: Self = Self { channel_restricted: false, cooldown: true };
    pub const UNRESTRICTED: Self = Self { channel_restricted: false, cooldown: false };
}

impl Default for CommandPolicy {
    fn default() -> Self {
        Self::RESTRICTED
    }
}

/// Represents a bot command
#[derive(Debug, Clone)]
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub aliases: Vec<String>,
    pub usage: Option<String>,
    pub policy: CommandPolicy,
    pub action: CommandAction,
}

impl Command {
    pub fn new(name: impl Into<String>, action: CommandAction) -> Self {
        Self {
            name: name.into(),
            description: None,
            aliases: Vec::new(),
            usage: None,
            policy: CommandPolicy::default(),
            action,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn with_policy(mut self, policy: CommandPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Exact, case-sensitive match on the name or an alias
    pub fn matches(&self, input: &str) -> bool {
        self.name == input || self.aliases.iter().any(|a| a == input)
    }
}

/// Command registry for managing available commands
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
    order: Vec<String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering an existing name replaces the command but keeps its position
    pub fn register(&mut self, command: Command) {
        if !self.commands.contains_key(&command.name) {
            self.order.push(command.name.clone());
        }
        self.commands.insert(command.name.clone(), command);
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Lookup by name, then by alias. Colliding aliases go to the first registered command.
    pub fn find(&self, input: &str) -> Option<&Command> {
        self.get(input)
            .or_else(|| self.all().find(|c| c.matches(input)))
    }

    /// Commands in registration order
    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.order.iter().filter_map(|name| self.commands.get(name))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
