//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (User, Invocation, Command, Card, ResponseTable)
//! - Traits: Abstractions for infrastructure (Platform, ResponseSource)

pub mod entities;
pub mod traits;
