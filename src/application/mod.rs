//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Command catalog, keyword matching, welcome greetings
//! - Policy: Cooldown and designated-channel rules
//! - Errors: Domain-specific errors
//! - Messaging: Command parsing, middleware, dispatching

pub mod errors;
pub mod messaging;
pub mod policy;
pub mod services;
