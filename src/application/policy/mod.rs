//! Invocation policies - who may run a command, where, and how often

pub mod channel;
pub mod cooldown;

pub use channel::{is_authorized, redirect_notice};
pub use cooldown::{CooldownBucket, CooldownOutcome, CooldownPolicy};
