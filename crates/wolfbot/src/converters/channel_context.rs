use howl::{
    async_trait,
    commands::Converter,
    types::{Guild, TextChannel},
};

use crate::{ChannelKey, CmdCtx, Error, Result, State};

/// A named set of text channels picked by one argument.
///
/// - `all`: every text channel except the staff log
/// - `public`: every text channel @everyone can read
/// - anything else: a comma separated list of channel mentions, ids or names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelContext {
    pub name: String,
    pub channels: Vec<TextChannel>,
}

impl ChannelContext {
    pub fn channel_ids(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|channel| channel.id.as_str())
    }
}

fn all_channels(context: &CmdCtx, guild: &Guild) -> Vec<TextChannel> {
    let config = context.state.config();
    let staff_log = config.special_channel(ChannelKey::StaffLog);

    context
        .cache
        .guild_text_channels(&guild.id)
        .into_iter()
        .filter(|channel| Some(channel.id.as_str()) != staff_log)
        .collect()
}

fn public_channels(context: &CmdCtx, guild: &Guild) -> Result<Vec<TextChannel>> {
    let Some(everyone) = guild
        .default_role()
        .filter(|role| role.permissions.read_messages())
    else {
        return Err(howl::Error::converter("No public channels exist in this guild.").into());
    };

    Ok(context
        .cache
        .guild_text_channels(&guild.id)
        .into_iter()
        .filter(|channel| channel.overwrites_for(&everyone.id).read_messages() != Some(false))
        .collect())
}

/// Renders names as a list literal, e.g. `['general', 'random']`.
fn list_name(channels: &[TextChannel]) -> String {
    let names = channels
        .iter()
        .map(|channel| format!("'{}'", &channel.name))
        .collect::<Vec<_>>();

    format!("[{}]", names.join(", "))
}

#[async_trait]
impl Converter<Error, State> for ChannelContext {
    async fn convert(context: &CmdCtx, input: String) -> Result<Self> {
        let channels = match input.to_lowercase().as_str() {
            "all" => all_channels(context, &context.get_current_guild()?),
            "public" => public_channels(context, &context.get_current_guild()?)?,
            _ => {
                let mut channels = Vec::new();

                for key in input.split(',') {
                    let channel = <TextChannel as Converter<Error, State>>::convert(
                        context,
                        key.trim().to_string(),
                    )
                    .await?;

                    channels.push(channel);
                }

                let name = match channels.as_slice() {
                    [channel] => channel.name.clone(),
                    channels => list_name(channels),
                };

                return Ok(Self { name, channels });
            }
        };

        if channels.is_empty() {
            return Err(howl::Error::converter(format!("No channels matched \"{input}\".")).into());
        }

        Ok(Self {
            name: input,
            channels,
        })
    }
}
