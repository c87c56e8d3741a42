//! Wolfbot Test Utils
//!
//! Shared fixtures for exercising converters without a live platform
//! connection.
//!
//! # Overview
//!
//! - **factory**: platform objects built from api-shaped JSON
//! - **api**: `MockApi`, an in-memory [`howl::Api`] that records every call
//! - **builder**: `TestBuilder`, which fills a roster cache and produces a
//!   command `Context` for one invocation
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory::*};
//!
//! #[tokio::test]
//! async fn resolves_member() {
//!     let guild = create_test_guild(GUILD_ID, "Den", Permissions::VIEW_CHANNEL);
//!     let test = TestBuilder::new()
//!         .with_guild(guild)
//!         .with_member(create_test_member(GUILD_ID, create_test_user(USER_ID, "wolf")))
//!         .build::<Error, ()>(());
//!
//!     // test.context is ready to hand to a converter
//! }
//! ```

pub mod api;
pub mod builder;
pub mod factory;

pub use api::MockApi;
pub use builder::{TestBuilder, TestContext};
