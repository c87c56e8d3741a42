use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Deserializer, Serialize};

use crate::Result;

/// Channel slots the bot looks up under `specialChannels`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKey {
    StaffLog,
}

impl ChannelKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StaffLog => "STAFF_LOG",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(
        rename = "specialChannels",
        default,
        deserialize_with = "channel_ids"
    )]
    pub special_channels: HashMap<String, String>,
}

impl Config {
    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(Into::into)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Id of a configured special channel. Unset keys are `None`, not an error.
    pub fn special_channel(&self, key: ChannelKey) -> Option<&str> {
        self.special_channels.get(key.as_str()).map(String::as_str)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(u64),
    Str(String),
}

/// Ids may be written as strings or as bare integers.
fn channel_ids<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<HashMap<String, String>, D::Error> {
    let raw = HashMap::<String, RawId>::deserialize(deserializer)?;

    Ok(raw
        .into_iter()
        .map(|(key, id)| match id {
            RawId::Int(id) => (key, id.to_string()),
            RawId::Str(id) => (key, id),
        })
        .collect())
}
