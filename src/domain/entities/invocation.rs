use super::User;

/// A channel as seen by the dispatcher: platform id plus its current name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRef {
    pub id: String,
    pub name: String,
}

impl ChannelRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

/// One command invocation, built from an inbound platform event and
/// discarded once the dispatcher has handled it
#[derive(Debug, Clone)]
pub struct Invocation {
    pub id: String,
    pub command: String,
    pub author: User,
    pub guild_id: Option<String>,
    pub channel: ChannelRef,
    pub argument: Option<String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>, author: User, channel: ChannelRef) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            command: command.into(),
            author,
            guild_id: None,
            channel,
            argument: None,
        }
    }

    pub fn with_guild(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    /// Blank argument text is stored as `None`
    pub fn with_argument(mut self, argument: Option<impl Into<String>>) -> Self {
        self.argument = argument
            .map(|a| a.into())
            .filter(|a| !a.trim().is_empty());
        self
    }

    /// Argument text, trimmed, if any was given
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref().map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_argument_is_none() {
        let inv = Invocation::new("ask", User::new("1"), ChannelRef::new("9", "help"))
            .with_argument(Some("   "));
        assert!(inv.argument().is_none());

        let inv = inv.with_argument(Some("  where can I park? "));
        assert_eq!(inv.argument(), Some("where can I park?"));
    }

    #[test]
    fn test_channel_mention() {
        assert_eq!(ChannelRef::new("77", "help").mention(), "<#77>");
    }
}
