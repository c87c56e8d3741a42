//! Structured lookups against the cache, shared by the built-in converters.
//!
//! Each lookup answers `Ok(None)` when nothing matches so callers can chain
//! their own fallbacks; any other failure is returned as is.

use std::{cmp::Ordering, sync::LazyLock};

use regex::Regex;

use crate::{
    Error,
    commands::Context,
    types::{Channel, Member, TextChannel, User},
};

static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("^([0-9]{15,20})$").unwrap());
static USER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^<@!?([0-9]{15,20})>$").unwrap());
static CHANNEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^<#([0-9]{15,20})>$").unwrap());
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("^(.+)#([0-9]{4})$").unwrap());

/// Matches a bare snowflake id.
pub fn id_match(input: &str) -> Option<&str> {
    ID_REGEX
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Matches a user mention or a bare id.
pub fn user_id_match(input: &str) -> Option<&str> {
    USER_REGEX
        .captures(input)
        .or_else(|| ID_REGEX.captures(input))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Matches a channel mention or a bare id.
pub fn channel_id_match(input: &str) -> Option<&str> {
    CHANNEL_REGEX
        .captures(input)
        .or_else(|| ID_REGEX.captures(input))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

fn user_matches(user: &User, input: &str) -> bool {
    if let Some(captures) = TAG_REGEX.captures(input) {
        let (name, discriminator) = (&captures[1], &captures[2]);

        if user.username == name && user.discriminator.as_deref() == Some(discriminator) {
            return true;
        }
    }

    user.username == input || user.global_name.as_deref() == Some(input)
}

/// Orders snowflakes numerically without parsing them.
pub fn snowflake_cmp(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn member_matches(member: &Member, input: &str) -> bool {
    user_matches(&member.user, input) || member.nick.as_deref() == Some(input)
}

/// Resolves a mention, id, tag or name to a user.
///
/// In a guild, names and nicknames are searched in its roster; otherwise
/// names are searched in every cached user.
pub async fn find_user<E, S>(context: &Context<E, S>, input: &str) -> Result<Option<User>, Error> {
    if let Some(id) = user_id_match(input) {
        return Ok(context.cache.get_user(id));
    }

    if let Some(guild_id) = context.guild_id() {
        let mut members = context.cache.guild_members(guild_id);
        members.sort_by(|a, b| snowflake_cmp(a.id(), b.id()));

        return Ok(members
            .into_iter()
            .find(|member| member_matches(member, input))
            .map(|member| member.user));
    }

    let mut users = context.cache.users();
    users.sort_by(|a, b| snowflake_cmp(&a.id, &b.id));

    Ok(users.into_iter().find(|user| user_matches(user, input)))
}

/// Resolves a mention, id, tag, name or nickname to a member of the current guild.
///
/// Ids missing from the cache are fetched from the api.
pub async fn find_member<E, S>(
    context: &Context<E, S>,
    input: &str,
) -> Result<Option<Member>, Error> {
    let Some(guild_id) = context.guild_id() else {
        return Ok(None);
    };

    if let Some(id) = user_id_match(input) {
        if let Some(member) = context.cache.get_member(guild_id, id) {
            return Ok(Some(member));
        }

        return match context.http.fetch_member(guild_id, id).await {
            Ok(member) => Ok(Some(member)),
            Err(Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        };
    }

    let mut members = context.cache.guild_members(guild_id);
    members.sort_by(|a, b| snowflake_cmp(a.id(), b.id()));

    Ok(members.into_iter().find(|member| member_matches(member, input)))
}

/// Resolves a channel mention, id or name to a text channel of the current guild.
pub async fn find_text_channel<E, S>(
    context: &Context<E, S>,
    input: &str,
) -> Result<Option<TextChannel>, Error> {
    let guild_id = context.guild_id();

    if let Some(id) = channel_id_match(input) {
        return Ok(match context.cache.get_channel(id) {
            Some(Channel::TextChannel(channel))
                if guild_id.is_none_or(|guild_id| guild_id == channel.guild_id) =>
            {
                Some(channel)
            }
            _ => None,
        });
    }

    let Some(guild_id) = guild_id else {
        return Ok(None);
    };

    Ok(context
        .cache
        .guild_text_channels(guild_id)
        .into_iter()
        .find(|channel| channel.name == input))
}
