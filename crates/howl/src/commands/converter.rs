use async_trait::async_trait;

use crate::{
    ArgumentError, Error,
    commands::{Context, lookup},
    types::{Member, TextChannel, User},
};

#[async_trait]
pub trait Converter<E: From<Error> + Send, S: Send + Sync>: Sized {
    async fn from_context(context: &Context<E, S>) -> Result<Self, E> {
        let input = context.words.next().ok_or(Error::MissingParameter)?;

        Self::convert(context, input).await
    }

    async fn convert(context: &Context<E, S>, input: String) -> Result<Self, E>;
}

#[async_trait]
impl<E: From<Error> + Send, S: Send + Sync> Converter<E, S> for u32 {
    async fn convert(_context: &Context<E, S>, input: String) -> Result<Self, E> {
        input
            .parse::<u32>()
            .map_err(|e| Error::converter(e.to_string()).into())
    }
}

#[async_trait]
impl<E: From<Error> + Send, S: Send + Sync> Converter<E, S> for u64 {
    async fn convert(_context: &Context<E, S>, input: String) -> Result<Self, E> {
        input
            .parse::<u64>()
            .map_err(|e| Error::converter(e.to_string()).into())
    }
}

#[async_trait]
impl<E: From<Error> + Send, S: Send + Sync> Converter<E, S> for String {
    async fn convert(_context: &Context<E, S>, input: String) -> Result<Self, E> {
        Ok(input)
    }
}

#[async_trait]
impl<E: From<Error> + Send, S: Send + Sync> Converter<E, S> for User {
    async fn convert(context: &Context<E, S>, input: String) -> Result<Self, E> {
        lookup::find_user(context, &input)
            .await?
            .ok_or_else(|| Error::converter(format!("User \"{input}\" not found.")).into())
    }
}

#[async_trait]
impl<E: From<Error> + Send, S: Send + Sync> Converter<E, S> for Member {
    async fn convert(context: &Context<E, S>, input: String) -> Result<Self, E> {
        lookup::find_member(context, &input)
            .await?
            .ok_or_else(|| Error::converter(format!("Member \"{input}\" not found.")).into())
    }
}

#[async_trait]
impl<E: From<Error> + Send, S: Send + Sync> Converter<E, S> for TextChannel {
    async fn convert(context: &Context<E, S>, input: String) -> Result<Self, E> {
        lookup::find_text_channel(context, &input)
            .await?
            .ok_or_else(|| Error::converter(format!("Channel \"{input}\" not found.")).into())
    }
}

/// Optional argument: a missing word or one that doesn't convert gives `None`
/// and leaves the word for the next argument. Failed lookups still propagate.
#[async_trait]
impl<E, S, T> Converter<E, S> for Option<T>
where
    E: From<Error> + ArgumentError + Send,
    S: Send + Sync,
    T: Converter<E, S> + Send,
{
    async fn from_context(context: &Context<E, S>) -> Result<Self, E> {
        let Some(input) = context.words.next() else {
            return Ok(None);
        };

        match T::convert(context, input).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_bad_argument() => {
                context.words.undo();

                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn convert(context: &Context<E, S>, input: String) -> Result<Self, E> {
        match T::convert(context, input).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_bad_argument() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

pub struct ConsumeRest<T = String>(pub T);

#[async_trait]
impl<E, S, T> Converter<E, S> for ConsumeRest<T>
where
    E: From<Error> + Send,
    S: Send + Sync,
    T: Converter<E, S> + Send,
{
    async fn from_context(context: &Context<E, S>) -> Result<Self, E> {
        let words = context.words.rest();

        if words.is_empty() {
            return Err(Error::MissingParameter.into());
        }

        Self::convert(context, words.join(" ")).await
    }

    async fn convert(context: &Context<E, S>, input: String) -> Result<Self, E> {
        T::convert(context, input).await.map(Self)
    }
}

pub struct Rest(pub Vec<String>);

#[async_trait]
impl<E: From<Error> + Send, S: Send + Sync> Converter<E, S> for Rest {
    async fn from_context(context: &Context<E, S>) -> Result<Self, E> {
        Ok(Self(context.words.rest()))
    }

    async fn convert(_context: &Context<E, S>, input: String) -> Result<Self, E> {
        Ok(Self(vec![input]))
    }
}
