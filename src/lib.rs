//! Gullhacks helper bot
//!
//! Answers canned questions about the event, greets new members, and keeps
//! bot commands in the designated help channel with a per-user cooldown.

pub mod domain;
pub mod application;
pub mod infrastructure;
