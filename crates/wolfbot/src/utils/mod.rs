mod config;
mod error;
mod invite;
mod state;

pub use config::*;
pub use error::*;
pub use invite::*;
pub use state::*;
