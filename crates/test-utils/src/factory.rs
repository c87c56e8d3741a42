//! Factories for platform objects.
//!
//! Objects are deserialized from JSON shaped like the api's responses, so the
//! fixtures go through the same serde paths as live data.

use howl::{
    Permissions,
    types::{Channel, Guild, Member, Message, PermissionOverwrite, User},
};
use serde_json::json;

pub const GUILD_ID: &str = "100000000000000001";
pub const OTHER_GUILD_ID: &str = "100000000000000002";

/// Creates a user with no discriminator or global name.
///
/// # Panics
/// - If the JSON cannot be deserialized (indicates invalid test data)
pub fn create_test_user(id: &str, username: &str) -> User {
    serde_json::from_value(json!({
        "id": id,
        "username": username,
    }))
    .expect("valid user fixture")
}

/// Creates a user with a legacy `#discriminator` tag.
pub fn create_test_tagged_user(id: &str, username: &str, discriminator: &str) -> User {
    serde_json::from_value(json!({
        "id": id,
        "username": username,
        "discriminator": discriminator,
    }))
    .expect("valid user fixture")
}

pub fn create_test_member(guild_id: &str, user: User) -> Member {
    serde_json::from_value(json!({
        "user": user,
        "guild_id": guild_id,
        "roles": [],
        "joined_at": "2019-04-01T00:00:00Z",
    }))
    .expect("valid member fixture")
}

pub fn create_test_member_with_nick(guild_id: &str, user: User, nick: &str) -> Member {
    Member {
        nick: Some(nick.to_string()),
        ..create_test_member(guild_id, user)
    }
}

/// Creates a guild whose @everyone role carries `everyone` permissions.
pub fn create_test_guild(guild_id: &str, name: &str, everyone: Permissions) -> Guild {
    let mut roles = serde_json::Map::new();
    roles.insert(
        guild_id.to_string(),
        json!({
            "id": guild_id,
            "name": "@everyone",
            "permissions": everyone.0.to_string(),
            "position": 0,
        }),
    );

    serde_json::from_value(json!({
        "id": guild_id,
        "name": name,
        "owner_id": "200000000000000000",
        "roles": roles,
        "channels": [],
    }))
    .expect("valid guild fixture")
}

pub fn create_test_text_channel(id: &str, guild_id: &str, name: &str, position: i64) -> Channel {
    create_test_text_channel_with_overwrites(id, guild_id, name, position, Vec::new())
}

pub fn create_test_text_channel_with_overwrites(
    id: &str,
    guild_id: &str,
    name: &str,
    position: i64,
    overwrites: Vec<PermissionOverwrite>,
) -> Channel {
    serde_json::from_value(json!({
        "type": "TextChannel",
        "id": id,
        "guild_id": guild_id,
        "name": name,
        "position": position,
        "permission_overwrites": overwrites,
    }))
    .expect("valid text channel fixture")
}

pub fn create_test_voice_channel(id: &str, guild_id: &str, name: &str, position: i64) -> Channel {
    serde_json::from_value(json!({
        "type": "VoiceChannel",
        "id": id,
        "guild_id": guild_id,
        "name": name,
        "position": position,
    }))
    .expect("valid voice channel fixture")
}

/// Role overwrite denying read access, e.g. to hide a channel from @everyone.
pub fn deny_read(role_id: &str) -> PermissionOverwrite {
    serde_json::from_value(json!({
        "id": role_id,
        "kind": "role",
        "deny": Permissions::VIEW_CHANNEL.0.to_string(),
    }))
    .expect("valid overwrite fixture")
}

/// Role overwrite explicitly granting read access.
pub fn allow_read(role_id: &str) -> PermissionOverwrite {
    serde_json::from_value(json!({
        "id": role_id,
        "kind": "role",
        "allow": Permissions::VIEW_CHANNEL.0.to_string(),
    }))
    .expect("valid overwrite fixture")
}

pub fn create_test_message(
    channel_id: &str,
    guild_id: Option<&str>,
    author: User,
    content: &str,
) -> Message {
    serde_json::from_value(json!({
        "id": "400000000000000001",
        "channel_id": channel_id,
        "guild_id": guild_id,
        "author": author,
        "content": content,
    }))
    .expect("valid message fixture")
}
