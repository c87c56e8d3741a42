use std::{fmt, marker::PhantomData, sync::Arc};

use crate::{
    Api, Error, GlobalCache,
    commands::Words,
    types::{Channel, Guild, Message},
};

/// Everything a converter may look at while resolving one argument.
pub struct Context<E, S> {
    pub cache: GlobalCache,
    pub http: Arc<dyn Api>,
    pub prefix: Option<String>,
    pub message: Message,
    pub state: S,
    pub words: Words,
    _error: PhantomData<fn() -> E>,
}

impl<E, S> Context<E, S> {
    pub fn new(cache: GlobalCache, http: Arc<dyn Api>, message: Message, state: S) -> Self {
        let words = Words::new(&message.content);

        Self {
            cache,
            http,
            prefix: None,
            message,
            state,
            words,
            _error: PhantomData,
        }
    }

    /// Drops `prefix` from the front of the message before splitting it into words.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();

        let rest = self
            .message
            .content
            .strip_prefix(prefix.as_str())
            .unwrap_or(&self.message.content);

        self.words = Words::new(rest);
        self.prefix = Some(prefix);

        self
    }

    pub fn get_current_channel(&self) -> Result<Channel, Error> {
        self.cache
            .get_channel(&self.message.channel_id)
            .ok_or(Error::InternalError)
    }

    pub fn guild_id(&self) -> Option<&str> {
        self.message.guild_id.as_deref()
    }

    pub fn get_current_guild(&self) -> Result<Guild, Error> {
        let guild_id = self.guild_id().ok_or(Error::NotInServer)?;

        self.cache.get_guild(guild_id).ok_or(Error::InternalError)
    }
}

impl<E, S: Clone> Clone for Context<E, S> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            http: self.http.clone(),
            prefix: self.prefix.clone(),
            message: self.message.clone(),
            state: self.state.clone(),
            words: self.words.clone(),
            _error: PhantomData,
        }
    }
}

impl<E, S: fmt::Debug> fmt::Debug for Context<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("prefix", &self.prefix)
            .field("message", &self.message)
            .field("state", &self.state)
            .field("words", &self.words)
            .finish_non_exhaustive()
    }
}

impl<E, S> AsRef<GlobalCache> for Context<E, S> {
    fn as_ref(&self) -> &GlobalCache {
        &self.cache
    }
}
