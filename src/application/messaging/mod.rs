//! Command handling - Parsing, policy middleware, dispatching

pub mod dispatcher;
pub mod middleware;
pub mod parser;

pub use dispatcher::{CommandDispatcher, DispatchOutcome, DispatcherConfig};
pub use middleware::{Middleware, MiddlewareChain};
pub use parser::{CommandParser, ParsedCommand};
