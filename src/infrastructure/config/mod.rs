//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::application::errors::ConfigError;
use crate::application::messaging::DispatcherConfig;

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub channels: ChannelsConfig,
    pub cooldown: CooldownConfig,
    pub responses: ResponsesConfig,
    pub discord: DiscordConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
    pub presence: String,
}

/// Channel names, matched exactly and case-sensitively
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ChannelsConfig {
    pub help: String,
    pub welcome: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CooldownConfig {
    pub seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ResponsesConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DiscordConfig {
    pub token: Option<String>,
    /// Members holding this role bypass the cooldown
    pub admin_role: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "gullhacks-helper".to_string(),
            prefix: "!".to_string(),
            presence: "!ask for help".to_string(),
        }
    }
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        Self {
            help: "help".to_string(),
            welcome: "welcome".to_string(),
        }
    }
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self { seconds: 3 }
    }
}

impl Default for ResponsesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("responses.json"),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Config file if present, then environment, then the command-line token.
    /// The merged result is validated.
    pub fn resolve(path: impl AsRef<Path>, token_override: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve_with(path, token_override, |key| std::env::var(key).ok())
    }

    /// [`Config::resolve`] with an explicit variable lookup
    pub fn resolve_with<F>(path: impl AsRef<Path>, token_override: Option<String>, vars: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Config::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            })
        } else {
            Config::default()
        };

        config.apply_vars(vars);
        if let Some(token) = token_override {
            config.discord.token = Some(token);
        }

        config.validate()?;
        Ok(config)
    }

    /// Overlay `DISCORD_TOKEN`, `BOT_PREFIX`, `HELP_CHANNEL` and `COOLDOWN_SECONDS`
    fn apply_vars<F>(&mut self, vars: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = vars("DISCORD_TOKEN") {
            if !token.trim().is_empty() {
                self.discord.token = Some(token);
            }
        }

        if let Some(prefix) = vars("BOT_PREFIX") {
            self.bot.prefix = prefix;
        }

        if let Some(channel) = vars("HELP_CHANNEL") {
            self.channels.help = channel;
        }

        if let Some(seconds) = vars("COOLDOWN_SECONDS") {
            match seconds.parse() {
                Ok(seconds) => self.cooldown.seconds = seconds,
                Err(_) => tracing::warn!("Ignoring invalid COOLDOWN_SECONDS={}", seconds),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue("bot.prefix must not be empty".to_string()));
        }
        if self.channels.help.is_empty() {
            return Err(ConfigError::InvalidValue("channels.help must not be empty".to_string()));
        }
        Ok(())
    }

    /// The bot token, required to connect
    pub fn token(&self) -> Result<&str, ConfigError> {
        self.discord
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField("DISCORD_TOKEN".to_string()))
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown.seconds)
    }

    pub fn dispatcher(&self) -> DispatcherConfig {
        DispatcherConfig {
            prefix: self.bot.prefix.clone(),
            help_channel: self.channels.help.clone(),
            cooldown: self.cooldown(),
        }
    }
}
