//! Argument converters used by the bot's moderation and logging commands.

pub mod converters;
mod utils;

pub use converters::*;
pub use utils::*;

pub type CmdCtx = howl::commands::Context<Error, State>;
pub type Result<T, E = Error> = std::result::Result<T, E>;
