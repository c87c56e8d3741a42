//! Account lookups that reach past the current guild's roster.
//!
//! Both converters try the framework's structured lookup first, then pull an
//! id out of the input and ask the platform for that account directly. Only
//! when every step comes back empty does the conversion fail.

use std::sync::LazyLock;

use howl::{
    async_trait,
    commands::{Converter, lookup},
    types::{Id, Member, User},
};
use regex::Regex;

use crate::{CmdCtx, Error, Result, State};

static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<@!?([0-9]+)>$").unwrap());

/// Id to look up on the platform: a bare snowflake or any user mention.
pub(crate) fn extract_user_id(input: &str) -> Option<&str> {
    lookup::id_match(input).or_else(|| {
        MENTION_REGEX
            .captures(input)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    })
}

async fn fetch_offline_user(context: &CmdCtx, input: &str) -> Result<Option<User>> {
    let Some(id) = extract_user_id(input) else {
        return Ok(None);
    };

    match context.http.fetch_user(id).await {
        Ok(user) => Ok(Some(user)),
        Err(howl::Error::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Cache lookup, then the platform. Fails once both come back empty.
async fn resolve_offline_user(context: &CmdCtx, input: &str) -> Result<User> {
    if let Some(user) = lookup::find_user(context, input).await? {
        return Ok(user);
    }

    fetch_offline_user(context, input)
        .await?
        .ok_or_else(|| user_not_found(input))
}

fn user_not_found(input: &str) -> Error {
    log::error!(
        "Couldn't find offline user matching ID {input}. They may have been banned system-wide \
         or their ID was typed wrong."
    );

    howl::Error::converter(format!("User \"{input}\" could not be found. Do they exist?")).into()
}

/// Any account on the platform, whether or not it shares a guild with the bot.
///
/// Falling back to the platform costs a request, so this is meant for
/// command arguments only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflineUser(pub User);

#[async_trait]
impl Converter<Error, State> for OfflineUser {
    async fn convert(context: &CmdCtx, input: String) -> Result<Self> {
        resolve_offline_user(context, &input).await.map(Self)
    }
}

/// A member of the current guild, or a bare account when they aren't on
/// its roster.
///
/// Guild-scoped data (nickname, roles, join date) is only present for
/// [`OfflineMember::Member`]; the accessors for it return `None` for
/// [`OfflineMember::User`] rather than a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfflineMember {
    Member(Member),
    User(User),
}

impl OfflineMember {
    pub fn user(&self) -> &User {
        match self {
            Self::Member(member) => &member.user,
            Self::User(user) => user,
        }
    }

    pub fn member(&self) -> Option<&Member> {
        match self {
            Self::Member(member) => Some(member),
            Self::User(_) => None,
        }
    }

    pub fn into_member(self) -> Option<Member> {
        match self {
            Self::Member(member) => Some(member),
            Self::User(_) => None,
        }
    }

    pub fn is_member(&self) -> bool {
        matches!(self, Self::Member(_))
    }

    pub fn id(&self) -> &str {
        &self.user().id
    }

    pub fn mention(&self) -> String {
        self.user().mention()
    }

    pub fn nick(&self) -> Option<&str> {
        self.member().and_then(|member| member.nick.as_deref())
    }

    pub fn roles(&self) -> Option<&[Id]> {
        self.member().map(|member| member.roles.as_slice())
    }

    pub fn joined_at(&self) -> Option<&str> {
        self.member().and_then(|member| member.joined_at.as_deref())
    }
}

#[async_trait]
impl Converter<Error, State> for OfflineMember {
    async fn convert(context: &CmdCtx, input: String) -> Result<Self> {
        if let Some(member) = lookup::find_member(context, &input).await? {
            return Ok(Self::Member(member));
        }

        resolve_offline_user(context, &input).await.map(Self::User)
    }
}
