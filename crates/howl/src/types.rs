//! Platform objects as returned by the api.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Permissions;

/// Snowflake id, kept in its string form.
pub type Id = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

impl User {
    pub fn mention(&self) -> String {
        format!("<@{}>", &self.id)
    }

    /// `name#discriminator`, or just the username for accounts without one.
    pub fn tag(&self) -> String {
        match self.discriminator.as_deref() {
            Some(discriminator) if discriminator != "0" => {
                format!("{}#{discriminator}", &self.username)
            }
            _ => self.username.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub user: User,
    pub guild_id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,
}

impl Member {
    pub fn id(&self) -> &str {
        &self.user.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub permissions: Permissions,
    #[serde(default)]
    pub position: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwriteKind {
    Role,
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOverwrite {
    pub id: Id,
    pub kind: OverwriteKind,
    #[serde(default)]
    pub allow: Permissions,
    #[serde(default)]
    pub deny: Permissions,
}

/// Channel-level overrides for a single role or member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overwrite {
    pub allow: Permissions,
    pub deny: Permissions,
}

impl Overwrite {
    /// `Some(false)` when explicitly denied, `Some(true)` when explicitly allowed,
    /// `None` when the channel inherits the role's value.
    pub fn get(&self, permission: Permissions) -> Option<bool> {
        if self.deny.has(permission) {
            Some(false)
        } else if self.allow.has(permission) {
            Some(true)
        } else {
            None
        }
    }

    pub fn read_messages(&self) -> Option<bool> {
        self.get(Permissions::VIEW_CHANNEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChannel {
    pub id: Id,
    pub guild_id: Id,
    pub name: String,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub permission_overwrites: Vec<PermissionOverwrite>,
}

impl TextChannel {
    pub fn overwrites_for(&self, id: &str) -> Overwrite {
        self.permission_overwrites
            .iter()
            .find(|overwrite| overwrite.id == id)
            .map(|overwrite| Overwrite {
                allow: overwrite.allow,
                deny: overwrite.deny,
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceChannel {
    pub id: Id,
    pub guild_id: Id,
    pub name: String,
    #[serde(default)]
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Channel {
    TextChannel(TextChannel),
    VoiceChannel(VoiceChannel),
    DirectMessage { id: Id, recipients: Vec<Id> },
}

impl Channel {
    pub fn id(&self) -> &str {
        match self {
            Channel::TextChannel(channel) => &channel.id,
            Channel::VoiceChannel(channel) => &channel.id,
            Channel::DirectMessage { id, .. } => id,
        }
    }

    pub fn guild_id(&self) -> Option<&str> {
        match self {
            Channel::TextChannel(channel) => Some(&channel.guild_id),
            Channel::VoiceChannel(channel) => Some(&channel.guild_id),
            Channel::DirectMessage { .. } => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextChannel> {
        match self {
            Channel::TextChannel(channel) => Some(channel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub id: Id,
    pub name: String,
    pub owner_id: Id,
    #[serde(default)]
    pub roles: HashMap<Id, Role>,
    /// Channel ids in the order the api reported them.
    #[serde(default)]
    pub channels: Vec<Id>,
}

impl Guild {
    /// The @everyone role, which shares the guild's id.
    pub fn default_role(&self) -> Option<&Role> {
        self.roles.get(&self.id)
    }
}

/// The message a command was invoked from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Id,
    pub channel_id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id>,
    pub author: User,
    #[serde(default)]
    pub content: String,
}
