use std::sync::Arc;

use dashmap::DashMap;

use crate::{
    commands::lookup::snowflake_cmp,
    types::{Channel, Guild, Member, TextChannel, User},
};

#[derive(Debug, Clone, Default)]
pub struct GlobalCache {
    pub guilds: Arc<DashMap<String, Guild>>,
    pub users: Arc<DashMap<String, User>>,
    pub members: Arc<DashMap<String, DashMap<String, Member>>>,
    pub channels: Arc<DashMap<String, Channel>>,
}

impl GlobalCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_guild(&self, guild_id: &str) -> Option<Guild> {
        self.guilds.get(guild_id).map(|r| r.value().clone())
    }

    pub fn insert_guild(&self, guild: Guild) {
        self.guilds.insert(guild.id.clone(), guild);
    }

    pub fn get_user(&self, user_id: &str) -> Option<User> {
        self.users.get(user_id).map(|r| r.value().clone())
    }

    pub fn insert_user(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn users(&self) -> Vec<User> {
        self.users.iter().map(|r| r.value().clone()).collect()
    }

    pub fn get_member(&self, guild_id: &str, user_id: &str) -> Option<Member> {
        self.members
            .get(guild_id)
            .and_then(|members| members.get(user_id).map(|r| r.value().clone()))
    }

    /// Inserts the member and the user it wraps.
    pub fn insert_member(&self, member: Member) {
        self.insert_user(member.user.clone());

        self.members
            .entry(member.guild_id.clone())
            .or_default()
            .insert(member.user.id.clone(), member);
    }

    pub fn guild_members(&self, guild_id: &str) -> Vec<Member> {
        self.members
            .get(guild_id)
            .map(|members| members.iter().map(|r| r.value().clone()).collect())
            .unwrap_or_default()
    }

    pub fn get_channel(&self, channel_id: &str) -> Option<Channel> {
        self.channels.get(channel_id).map(|r| r.value().clone())
    }

    /// Inserts the channel and registers it with its guild.
    pub fn insert_channel(&self, channel: Channel) {
        if let Some(guild_id) = channel.guild_id() {
            if let Some(mut guild) = self.guilds.get_mut(guild_id) {
                if !guild.channels.iter().any(|id| id == channel.id()) {
                    guild.channels.push(channel.id().to_string());
                }
            }
        }

        self.channels.insert(channel.id().to_string(), channel);
    }

    pub fn remove_channel(&self, channel_id: &str) -> Option<Channel> {
        let (_, channel) = self.channels.remove(channel_id)?;

        if let Some(guild_id) = channel.guild_id() {
            if let Some(mut guild) = self.guilds.get_mut(guild_id) {
                guild.channels.retain(|id| id != channel_id);
            }
        }

        Some(channel)
    }

    /// Text channels of a guild, ordered by position then id.
    pub fn guild_text_channels(&self, guild_id: &str) -> Vec<TextChannel> {
        let Some(guild) = self.get_guild(guild_id) else {
            return Vec::new();
        };

        let mut channels = guild
            .channels
            .iter()
            .filter_map(|id| self.get_channel(id))
            .filter_map(|channel| match channel {
                Channel::TextChannel(channel) if channel.guild_id == guild.id => Some(channel),
                _ => None,
            })
            .collect::<Vec<_>>();

        channels.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| snowflake_cmp(&a.id, &b.id))
        });

        channels
    }
}
