use howl::{async_trait, commands::Converter};

use crate::{CmdCtx, Error, Result, State, get_fragment_from_invite};

/// The code of an invite, given either the code itself or a full link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteLink(pub String);

#[async_trait]
impl Converter<Error, State> for InviteLink {
    async fn convert(_context: &CmdCtx, input: String) -> Result<Self> {
        Ok(Self(get_fragment_from_invite(&input)))
    }
}
