//! Console adapter for development/testing

use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use crate::domain::entities::{ChannelRef, Reply};
use crate::domain::traits::Platform;
use crate::application::errors::BotError;

/// Console platform adapter for local development.
///
/// Channels are simulated by name; ids are the names themselves.
pub struct ConsoleAdapter {
    channels: Vec<ChannelRef>,
    input: Mutex<Lines<BufReader<Stdin>>>,
}

impl ConsoleAdapter {
    pub fn new<S: Into<String>>(channel_names: impl IntoIterator<Item = S>) -> Self {
        let channels = channel_names
            .into_iter()
            .map(|name| {
                let name = name.into();
                ChannelRef::new(name.clone(), name)
            })
            .collect();

        Self {
            channels,
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    pub fn channel(&self, name: &str) -> ChannelRef {
        self.channels
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .unwrap_or_else(|| ChannelRef::new(name, name))
    }

    /// Prompt and read one line; `None` on end of input
    pub async fn read_line(&self, prompt: &str) -> Option<String> {
        let mut stdout = tokio::io::stdout();
        let _ = stdout.write_all(prompt.as_bytes()).await;
        let _ = stdout.flush().await;

        let mut input = self.input.lock().await;
        match input.next_line().await {
            Ok(Some(line)) => Some(line.trim().to_string()),
            Ok(None) => None,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn render(channel_id: &str, reply: &Reply) -> String {
        match reply {
            Reply::Text(text) => format!("[#{}] {}", channel_id, text),
            Reply::Card(card) => {
                let mut out = format!("[#{}] == {} ==", channel_id, card.title);
                if let Some(description) = &card.description {
                    out.push_str(&format!("\n  {}", description));
                }
                for field in &card.fields {
                    out.push_str(&format!("\n  {}: {}", field.name, field.value));
                }
                if let Some(footer) = &card.footer {
                    out.push_str(&format!("\n  -- {}", footer));
                }
                out
            }
        }
    }
}

#[async_trait]
impl Platform for ConsoleAdapter {
    async fn send(&self, channel_id: &str, reply: &Reply) -> Result<(), BotError> {
        println!("{}", Self::render(channel_id, reply));
        Ok(())
    }

    async fn find_channel(&self, _guild_id: Option<&str>, name: &str) -> Result<Option<ChannelRef>, BotError> {
        Ok(self.channels.iter().find(|c| c.name == name).cloned())
    }

    async fn latency(&self) -> Option<Duration> {
        Some(Duration::ZERO)
    }

    async fn set_presence(&self, activity: &str) {
        tracing::info!("Presence: {}", activity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Card;

    #[tokio::test]
    async fn test_find_channel_by_exact_name() {
        let adapter = ConsoleAdapter::new(["help", "welcome"]);
        assert!(adapter.find_channel(None, "help").await.unwrap().is_some());
        assert!(adapter.find_channel(None, "Help").await.unwrap().is_none());
    }

    #[test]
    fn test_render_card() {
        let card = Card::new("Gullhacks Helper").with_description("Lot B").with_footer("Asked by Alice");
        let out = ConsoleAdapter::render("help", &Reply::Card(card));
        assert_eq!(out, "[#help] == Gullhacks Helper ==\n  Lot B\n  -- Asked by Alice");
    }
}
