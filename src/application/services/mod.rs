//! Application services - Business logic orchestration

pub mod catalog;
pub mod command_service;
pub mod keyword_matcher;
pub mod welcome_service;

pub use command_service::CommandService;
pub use keyword_matcher::find_answer;
pub use welcome_service::WelcomeService;
