mod channel_context;
mod date_diff;
mod invite_link;
mod offline;

pub use channel_context::ChannelContext;
pub use date_diff::DateDiff;
pub use invite_link::InviteLink;
pub use offline::{OfflineMember, OfflineUser};
