//! Domain entities - Core business objects with no external dependencies

pub mod user;
pub mod invocation;
pub mod command;
pub mod card;
pub mod response;

pub use user::User;
pub use invocation::{ChannelRef, Invocation};
pub use command::{Command, CommandAction, CommandPolicy, CommandRegistry};
pub use card::{Card, CardField, Reply};
pub use response::{ResponseEntry, ResponseTable};
