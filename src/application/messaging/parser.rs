//! Command parser - Splits prefixed text into a command name and argument text

/// A prefix-stripped command token with the rest of the line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub argument: Option<String>,
}

/// Parses incoming text into commands
#[derive(Debug, Clone)]
pub struct CommandParser {
    command_prefix: String,
}

impl CommandParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.command_prefix
    }

    /// Parse a text message. Returns `None` for anything that is not a command.
    ///
    /// The name is the first whitespace-delimited token after the prefix, kept
    /// as typed. The argument is the remainder of the line with surrounding
    /// whitespace trimmed; inner whitespace is preserved.
    pub fn parse(&self, text: &str) -> Option<ParsedCommand> {
        if self.command_prefix.is_empty() {
            return None;
        }
        let cmd_text = text.strip_prefix(&self.command_prefix)?;

        // "! ask" is not a command
        if cmd_text.starts_with(char::is_whitespace) {
            return None;
        }

        let (name, rest) = match cmd_text.find(char::is_whitespace) {
            Some(idx) => cmd_text.split_at(idx),
            None => (cmd_text, ""),
        };
        if name.is_empty() {
            return None;
        }

        let rest = rest.trim();
        Some(ParsedCommand {
            name: name.to_string(),
            argument: (!rest.is_empty()).then(|| rest.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_argument() {
        let parser = CommandParser::new("!");
        let parsed = parser.parse("!ask where can I  park?").unwrap();
        assert_eq!(parsed.name, "ask");
        assert_eq!(parsed.argument.as_deref(), Some("where can I  park?"));
    }

    #[test]
    fn test_parse_command_without_argument() {
        let parser = CommandParser::new("!");
        let parsed = parser.parse("!date   ").unwrap();
        assert_eq!(parsed.name, "date");
        assert!(parsed.argument.is_none());
    }

    #[test]
    fn test_parse_keeps_case() {
        let parser = CommandParser::new("!");
        assert_eq!(parser.parse("!Date").unwrap().name, "Date");
    }

    #[test]
    fn test_parse_rejects_non_commands() {
        let parser = CommandParser::new("!");
        assert!(parser.parse("hello there").is_none());
        assert!(parser.parse("!").is_none());
        assert!(parser.parse("! ask food").is_none());
        assert!(parser.parse("?ask food").is_none());
    }

    #[test]
    fn test_parse_multichar_prefix() {
        let parser = CommandParser::new("gh!");
        let parsed = parser.parse("gh!ask\nwifi password").unwrap();
        assert_eq!(parsed.name, "ask");
        assert_eq!(parsed.argument.as_deref(), Some("wifi password"));
    }
}
