use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use crate::{
    error::{Error, Result},
    types::{Member, User},
};

/// Lookups that have to go to the platform instead of the cache.
#[async_trait]
pub trait Api: Debug + Send + Sync {
    /// Fetches any account, including ones that share no guild with the bot.
    /// Unknown ids fail with [`Error::NotFound`].
    async fn fetch_user(&self, user_id: &str) -> Result<User>;

    async fn fetch_member(&self, guild_id: &str, user_id: &str) -> Result<Member>;
}

#[derive(Clone, Debug)]
pub struct HttpClient {
    pub base: String,
    pub token: Option<String>,
    pub inner: Client,
}

impl HttpClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            token,
            inner: Client::new(),
        }
    }

    pub fn request(&self, method: Method, route: impl AsRef<str>) -> HttpRequest {
        let mut builder = self
            .inner
            .request(method, format!("{}{}", &self.base, route.as_ref()))
            .header("Accept", "application/json");

        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bot {token}"));
        }

        HttpRequest { builder }
    }
}

#[async_trait]
impl Api for HttpClient {
    async fn fetch_user(&self, user_id: &str) -> Result<User> {
        self.request(Method::GET, format!("/users/{user_id}"))
            .response()
            .await
    }

    async fn fetch_member(&self, guild_id: &str, user_id: &str) -> Result<Member> {
        self.request(Method::GET, format!("/guilds/{guild_id}/members/{user_id}"))
            .response()
            .await
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub struct HttpRequest {
    builder: RequestBuilder,
}

impl HttpRequest {
    pub async fn execute(self) -> Result<Response> {
        let (client, request) = self.builder.build_split();
        let request = request?;

        log::debug!("{} {}", request.method(), request.url());

        let response = client.execute(request).await.inspect_err(|e| {
            log::warn!("Request failed: {e}");
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }

        if status.is_client_error() || status.is_server_error() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);

            log::warn!("Api returned {status}: {message}");

            return Err(Error::HttpError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    pub async fn response<O: for<'a> Deserialize<'a>>(self) -> Result<O> {
        self.execute().await?.json().await.map_err(Into::into)
    }
}
