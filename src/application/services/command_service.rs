use crate::domain::entities::{Card, Command, CommandAction, CommandPolicy, CommandRegistry};
use super::catalog;

/// Service for managing the available commands
pub struct CommandService {
    registry: CommandRegistry,
    prefix: String,
}

impl CommandService {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            prefix: prefix.into(),
        }
    }

    /// Service with the built-in commands already registered
    pub fn with_defaults(prefix: impl Into<String>) -> Self {
        let mut service = Self::new(prefix);
        service.register_defaults();
        service
    }

    pub fn register(&mut self, command: Command) {
        self.registry.register(command);
    }

    pub fn register_defaults(&mut self) {
        let usage = format!("{}ask <question>", self.prefix);
        self.register(Command::new("ask", CommandAction::Ask)
            .with_description("Ask a question about the hackathon")
            .with_usage(usage));

        for command in catalog::static_commands() {
            self.register(command);
        }

        // Listing stays reachable from any channel
        self.register(Command::new("help", CommandAction::Help)
            .with_description("List available commands")
            .with_aliases(vec!["commands".to_string()])
            .with_policy(CommandPolicy::ANY_CHANNEL));

        self.register(Command::new("ping", CommandAction::Ping)
            .with_description("Check if the bot is responsive")
            .with_policy(CommandPolicy::UNRESTRICTED));
    }

    pub fn find(&self, name: &str) -> Option<&Command> {
        self.registry.find(name)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Help card listing every command in registration order
    pub fn get_help(&self, help_channel: &str) -> Card {
        let mut card = Card::new("Gullhacks Helper Commands")
            .with_colour(Card::BLUE)
            .with_description(format!(
                "Most commands only work in #{}. `{}ping` and `{}help` work anywhere.",
                help_channel, self.prefix, self.prefix
            ));

        for cmd in self.registry.all() {
            let mut name = match &cmd.usage {
                Some(usage) => format!("`{}`", usage),
                None => format!("`{}{}`", self.prefix, cmd.name),
            };
            for alias in &cmd.aliases {
                name.push_str(&format!(" / `{}{}`", self.prefix, alias));
            }
            card = card.with_field(name, cmd.description.as_deref().unwrap_or("No description"), true);
        }
        card
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_all_user_commands() {
        let service = CommandService::with_defaults("!");
        for name in [
            "date", "parking", "food", "location", "schedule", "workshops", "categories",
            "submission", "faq", "sponsors", "checkin", "troll", "info", "help", "commands",
            "ping", "ask",
        ] {
            assert!(service.find(name).is_some(), "missing {}", name);
        }
        assert!(service.find("Ping").is_none());
    }

    #[test]
    fn test_exempt_commands() {
        let service = CommandService::with_defaults("!");
        assert_eq!(service.find("ping").unwrap().policy, CommandPolicy::UNRESTRICTED);
        assert!(!service.find("help").unwrap().policy.channel_restricted);
        assert!(!service.find("commands").unwrap().policy.channel_restricted);
        assert!(service.find("ask").unwrap().policy.channel_restricted);
    }

    #[test]
    fn test_help_lists_usage() {
        let service = CommandService::with_defaults("!");
        let card = service.get_help("help");
        assert!(card.fields.iter().any(|f| f.name == "`!ask <question>`"));
        assert!(card.fields.iter().any(|f| f.name == "`!ping`"));
        assert_eq!(card.fields.len(), service.registry().len());
    }

    #[test]
    fn test_help_lists_aliases() {
        let service = CommandService::with_defaults("?");
        let card = service.get_help("help");
        assert!(card.fields.iter().any(|f| f.name == "`?help` / `?commands`"));
        assert!(card.fields.iter().all(|f| !f.name.starts_with("`?commands`")));
    }
}
