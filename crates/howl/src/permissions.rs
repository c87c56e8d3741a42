use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Raw permission bitset as sent by the api.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPermissions", into = "u64")]
pub struct Permissions(pub u64);

impl Permissions {
    pub const CREATE_INSTANT_INVITE: Self = Self(1 << 0);
    pub const KICK_MEMBERS: Self = Self(1 << 1);
    pub const BAN_MEMBERS: Self = Self(1 << 2);
    pub const ADMINISTRATOR: Self = Self(1 << 3);
    pub const MANAGE_CHANNELS: Self = Self(1 << 4);
    pub const MANAGE_GUILD: Self = Self(1 << 5);
    pub const VIEW_AUDIT_LOG: Self = Self(1 << 7);
    /// Also known as read messages.
    pub const VIEW_CHANNEL: Self = Self(1 << 10);
    pub const SEND_MESSAGES: Self = Self(1 << 11);
    pub const MANAGE_MESSAGES: Self = Self(1 << 13);
    pub const READ_MESSAGE_HISTORY: Self = Self(1 << 16);
    pub const MANAGE_ROLES: Self = Self(1 << 28);
    pub const MODERATE_MEMBERS: Self = Self(1 << 40);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn has(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn read_messages(self) -> bool {
        self.has(Self::VIEW_CHANNEL)
    }
}

impl BitOr for Permissions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Permissions {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl From<u64> for Permissions {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Permissions> for u64 {
    fn from(value: Permissions) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPermissions {
    Int(u64),
    Str(String),
}

impl TryFrom<RawPermissions> for Permissions {
    type Error = std::num::ParseIntError;

    fn try_from(value: RawPermissions) -> Result<Self, Self::Error> {
        match value {
            RawPermissions::Int(bits) => Ok(Self(bits)),
            RawPermissions::Str(bits) => bits.parse().map(Self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_requires_every_bit() {
        let perms = Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES;

        assert!(perms.has(Permissions::VIEW_CHANNEL));
        assert!(perms.has(Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES));
        assert!(!perms.has(Permissions::VIEW_CHANNEL | Permissions::MANAGE_MESSAGES));
        assert!(perms.intersects(Permissions::VIEW_CHANNEL | Permissions::MANAGE_MESSAGES));
    }

    #[test]
    fn deserializes_string_and_integer_bits() {
        let from_str: Permissions = serde_json::from_str("\"1024\"").unwrap();
        let from_int: Permissions = serde_json::from_str("1024").unwrap();

        assert_eq!(from_str, Permissions::VIEW_CHANNEL);
        assert_eq!(from_int, Permissions::VIEW_CHANNEL);
        assert!(from_str.read_messages());
        assert!(serde_json::from_str::<Permissions>("\"lots\"").is_err());
    }
}
