use std::time::Duration;

use howl::{async_trait, commands::Converter};

use crate::{CmdCtx, Error, Result, State};

/// Inputs that mean "never expires".
const PERMANENT: [&str; 6] = ["0", "perm", "permanent", "inf", "infinite", "-"];

/// A relative expiry such as `30m` or `1d 12h`, or no expiry at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDiff {
    Permanent,
    Relative(Duration),
}

impl DateDiff {
    pub fn parse(input: &str) -> Result<Self> {
        if PERMANENT.contains(&input) {
            return Ok(Self::Permanent);
        }

        humantime::parse_duration(input)
            .map(Self::Relative)
            .map_err(|e| howl::Error::converter(e.to_string()).into())
    }

    /// `None` when permanent.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Self::Permanent => None,
            Self::Relative(duration) => Some(*duration),
        }
    }

    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent)
    }
}

#[async_trait]
impl Converter<Error, State> for DateDiff {
    async fn convert(_context: &CmdCtx, input: String) -> Result<Self> {
        Self::parse(&input)
    }
}
