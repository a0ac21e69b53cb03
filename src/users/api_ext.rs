use crate::{
    api::Api,
    error::Error as TaskpingError,
    users::{User, UserCreateParams},
};
use anyhow::bail;
use lettre::message::Mailbox;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// Describes the API to work with users.
pub struct UsersApiExt<'a> {
    api: &'a Api,
}

impl<'a> UsersApiExt<'a> {
    /// Creates Users API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Returns user by its id.
    pub async fn get_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        self.api.store.get_user(id).await
    }

    /// Creates a new user with the specified parameters.
    pub async fn create_user(&self, params: UserCreateParams) -> anyhow::Result<User> {
        if let Some(ref email) = params.email {
            if Mailbox::from_str(email).is_err() {
                bail!(TaskpingError::client(format!(
                    "Cannot parse user email address: {email}."
                )));
            }
        }

        let user = User {
            id: Uuid::now_v7(),
            email: params.email,
            created_at: OffsetDateTime::now_utc(),
        };

        self.api.store.insert_user(&user).await?;

        Ok(user)
    }
}

impl Api {
    /// Returns an API to work with users.
    pub fn users(&self) -> UsersApiExt<'_> {
        UsersApiExt::new(self)
    }
}
