//! In-memory stand-in for the platform api.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use howl::{
    Api, Error, Result,
    types::{Id, Member, User},
};

/// Answers lookups from fixed maps and records each call.
///
/// Unknown ids fail with [`Error::NotFound`], mirroring a 404 from the api.
/// When an error is configured through [`MockApi::failing`], every call fails
/// with it instead.
#[derive(Debug, Default)]
pub struct MockApi {
    users: HashMap<Id, User>,
    members: HashMap<(Id, Id), Member>,
    failure: Option<Error>,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id.clone(), user);
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.users.insert(member.user.id.clone(), member.user.clone());
        self.members
            .insert((member.guild_id.clone(), member.user.id.clone()), member);
        self
    }

    pub fn failing(mut self, error: Error) -> Self {
        self.failure = Some(error);
        self
    }

    /// Calls made so far, formatted as `fetch_user:<id>` or
    /// `fetch_member:<guild>:<id>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl Api for MockApi {
    async fn fetch_user(&self, user_id: &str) -> Result<User> {
        self.record(format!("fetch_user:{user_id}"));

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        self.users.get(user_id).cloned().ok_or(Error::NotFound)
    }

    async fn fetch_member(&self, guild_id: &str, user_id: &str) -> Result<Member> {
        self.record(format!("fetch_member:{guild_id}:{user_id}"));

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        self.members
            .get(&(guild_id.to_string(), user_id.to_string()))
            .cloned()
            .ok_or(Error::NotFound)
    }
}
