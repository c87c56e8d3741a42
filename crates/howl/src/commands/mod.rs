//! Commands

pub mod context;
pub mod converter;
pub mod lookup;
pub mod words;

pub use context::Context;
pub use converter::*;
pub use words::Words;
