//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: Response table loading
//! - Adapters: Platform integrations (Discord, console)

pub mod config;
pub mod storage;
pub mod adapters;
