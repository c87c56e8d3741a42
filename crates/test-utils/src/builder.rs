use std::sync::Arc;

use howl::{
    Error, GlobalCache,
    commands::Context,
    types::{Channel, Guild, Id, Member, User},
};

use crate::{
    api::MockApi,
    factory::{create_test_message, create_test_user},
};

pub const AUTHOR_ID: &str = "200000000000000099";
pub const DM_CHANNEL_ID: &str = "300000000000000099";

/// Builder for a single command invocation over an in-memory roster.
///
/// Cache entries describe what the bot can already see; api entries are
/// only reachable through [`MockApi`], which is how off-roster accounts are
/// modelled.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_guild(create_test_guild(GUILD_ID, "Den", Permissions::VIEW_CHANNEL))
///     .with_channel(create_test_text_channel(GENERAL, GUILD_ID, "general", 0))
///     .with_api_user(create_test_user(STRANGER, "stranger"))
///     .build::<Error, State>(state);
/// ```
pub struct TestBuilder {
    cache: GlobalCache,
    api: MockApi,
    guild_id: Option<Id>,
    channel_id: Option<Id>,
    author: User,
    content: String,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            cache: GlobalCache::new(),
            api: MockApi::new(),
            guild_id: None,
            channel_id: None,
            author: create_test_user(AUTHOR_ID, "invoker"),
            content: String::new(),
        }
    }

    /// Caches the guild and invokes from inside it.
    pub fn with_guild(mut self, guild: Guild) -> Self {
        self.guild_id = Some(guild.id.clone());
        self.cache.insert_guild(guild);
        self
    }

    /// Caches a guild without invoking from it.
    pub fn with_other_guild(self, guild: Guild) -> Self {
        self.cache.insert_guild(guild);
        self
    }

    /// Caches the channel. The first text channel of the invoking guild
    /// becomes the invocation channel unless one was set with [`Self::in_channel`].
    pub fn with_channel(mut self, channel: Channel) -> Self {
        if self.channel_id.is_none()
            && channel.as_text().is_some()
            && channel.guild_id() == self.guild_id.as_deref()
        {
            self.channel_id = Some(channel.id().to_string());
        }

        self.cache.insert_channel(channel);
        self
    }

    pub fn in_channel(mut self, channel_id: &str) -> Self {
        self.channel_id = Some(channel_id.to_string());
        self
    }

    /// Caches the member, putting them on the guild's roster.
    pub fn with_member(self, member: Member) -> Self {
        self.cache.insert_member(member);
        self
    }

    /// Caches a user that is not on any roster.
    pub fn with_user(self, user: User) -> Self {
        self.cache.insert_user(user);
        self
    }

    /// Makes the user reachable only through the api.
    pub fn with_api_user(mut self, user: User) -> Self {
        self.api = self.api.with_user(user);
        self
    }

    /// Makes the member reachable only through the api.
    pub fn with_api_member(mut self, member: Member) -> Self {
        self.api = self.api.with_member(member);
        self
    }

    pub fn with_api_failure(mut self, error: Error) -> Self {
        self.api = self.api.failing(error);
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn build<E, S>(self, state: S) -> TestContext<E, S> {
        let api = Arc::new(self.api);
        let channel_id = self
            .channel_id
            .unwrap_or_else(|| DM_CHANNEL_ID.to_string());

        let message = create_test_message(
            &channel_id,
            self.guild_id.as_deref(),
            self.author,
            &self.content,
        );

        TestContext {
            context: Context::new(self.cache, api.clone(), message, state),
            api,
        }
    }
}

/// A built invocation plus a handle on the api it talks to.
pub struct TestContext<E, S> {
    pub context: Context<E, S>,
    pub api: Arc<MockApi>,
}

#[cfg(test)]
mod tests {
    use howl::{Permissions, commands::lookup};

    use crate::factory::*;

    use super::*;

    #[tokio::test]
    async fn builds_an_invocation_inside_the_guild() {
        let test = TestBuilder::new()
            .with_guild(create_test_guild(GUILD_ID, "Den", Permissions::VIEW_CHANNEL))
            .with_channel(create_test_text_channel(
                "300000000000000001",
                GUILD_ID,
                "general",
                0,
            ))
            .with_member(create_test_member(
                GUILD_ID,
                create_test_user("200000000000000001", "wolf"),
            ))
            .content("kick wolf")
            .build::<Error, ()>(());

        let context = &test.context;

        assert_eq!(context.get_current_guild().unwrap().id, GUILD_ID);
        assert_eq!(context.get_current_channel().unwrap().id(), "300000000000000001");
        assert_eq!(context.words.next().as_deref(), Some("kick"));

        let member = lookup::find_member(context, "wolf").await.unwrap().unwrap();
        assert_eq!(member.id(), "200000000000000001");
        assert!(test.api.calls().is_empty());
    }

    #[test]
    fn defaults_to_a_direct_message() {
        let test = TestBuilder::new().build::<Error, ()>(());

        assert!(matches!(
            test.context.get_current_guild(),
            Err(Error::NotInServer)
        ));
        assert_eq!(test.context.message.channel_id, DM_CHANNEL_ID);
    }
}
