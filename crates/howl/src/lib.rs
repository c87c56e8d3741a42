pub mod cache;
pub mod commands;
pub mod error;
pub mod http;
pub mod permissions;
pub mod types;

pub use cache::GlobalCache;
pub use error::{ArgumentError, Error, Result};
pub use http::{Api, HttpClient};
pub use permissions::Permissions;

pub use async_trait::async_trait;
