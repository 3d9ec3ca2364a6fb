//! The adapter contract the authentication framework calls, and its
//! relational implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::db;
use crate::dto::{
    AdapterAccount, AdapterSession, AdapterUser, NewAccount, NewSession, NewUser,
    SessionAndUser, SessionUpdate, UserUpdate, VerificationToken,
};
use crate::error::AdapterResult;
use crate::services::{AccountService, SessionService, UserService, VerificationTokenService};

/// Lifecycle operations the authentication framework performs against storage.
///
/// Identifiers cross this boundary as decimal strings. Operations returning
/// `Option` use `None` for "no such record"; every other failure is an `Err`.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Create a user, or return the existing user with the same email.
    async fn create_user(&self, user: NewUser) -> AdapterResult<AdapterUser>;

    /// Fetch a user by id. A missing user is an error.
    async fn get_user(&self, id: &str) -> AdapterResult<AdapterUser>;

    async fn get_user_by_email(&self, email: &str) -> AdapterResult<Option<AdapterUser>>;

    /// Fetch the user a provider account is linked to.
    async fn get_user_by_account(
        &self,
        provider: &str,
        provider_account_id: &str,
    ) -> AdapterResult<Option<AdapterUser>>;

    async fn update_user(&self, user: UserUpdate) -> AdapterResult<AdapterUser>;

    /// Delete a user, returning the deleted record.
    async fn delete_user(&self, id: &str) -> AdapterResult<AdapterUser>;

    async fn link_account(&self, account: NewAccount) -> AdapterResult<Option<AdapterAccount>>;

    /// Always fails with [`crate::AdapterError::NotImplemented`].
    async fn unlink_account(
        &self,
        provider: &str,
        provider_account_id: &str,
    ) -> AdapterResult<()>;

    async fn create_session(&self, session: NewSession) -> AdapterResult<AdapterSession>;

    async fn get_session_and_user(
        &self,
        session_token: &str,
    ) -> AdapterResult<Option<SessionAndUser>>;

    async fn update_session(&self, session: SessionUpdate) -> AdapterResult<AdapterSession>;

    /// Delete a session by token, returning the deleted record.
    async fn delete_session(&self, session_token: &str) -> AdapterResult<AdapterSession>;

    async fn create_verification_token(
        &self,
        token: VerificationToken,
    ) -> AdapterResult<VerificationToken>;

    /// Consume a verification token. Each token can be used once.
    async fn use_verification_token(
        &self,
        identifier: &str,
        token: &str,
    ) -> AdapterResult<Option<VerificationToken>>;
}

/// [`Adapter`] over the `users`, `accounts`, `sessions` and
/// `verification_tokens` tables.
#[derive(Debug, Clone)]
pub struct SqlAdapter {
    db: DatabaseConnection,
}

impl SqlAdapter {
    /// Create an adapter from an existing database connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an adapter by connecting with `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn connect(config: &Config) -> AdapterResult<Self> {
        Ok(Self::new(db::connect(config).await?))
    }

    /// The underlying connection.
    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl Adapter for SqlAdapter {
    async fn create_user(&self, user: NewUser) -> AdapterResult<AdapterUser> {
        UserService::create_user(&self.db, user).await
    }

    async fn get_user(&self, id: &str) -> AdapterResult<AdapterUser> {
        UserService::get_user(&self.db, id).await
    }

    async fn get_user_by_email(&self, email: &str) -> AdapterResult<Option<AdapterUser>> {
        UserService::get_user_by_email(&self.db, email).await
    }

    async fn get_user_by_account(
        &self,
        provider: &str,
        provider_account_id: &str,
    ) -> AdapterResult<Option<AdapterUser>> {
        UserService::get_user_by_account(&self.db, provider, provider_account_id).await
    }

    async fn update_user(&self, user: UserUpdate) -> AdapterResult<AdapterUser> {
        UserService::update_user(&self.db, user).await
    }

    async fn delete_user(&self, id: &str) -> AdapterResult<AdapterUser> {
        UserService::delete_user(&self.db, id).await
    }

    async fn link_account(&self, account: NewAccount) -> AdapterResult<Option<AdapterAccount>> {
        AccountService::link_account(&self.db, account).await
    }

    async fn unlink_account(
        &self,
        provider: &str,
        provider_account_id: &str,
    ) -> AdapterResult<()> {
        AccountService::unlink_account(provider, provider_account_id)
    }

    async fn create_session(&self, session: NewSession) -> AdapterResult<AdapterSession> {
        SessionService::create_session(&self.db, session).await
    }

    async fn get_session_and_user(
        &self,
        session_token: &str,
    ) -> AdapterResult<Option<SessionAndUser>> {
        SessionService::get_session_and_user(&self.db, session_token).await
    }

    async fn update_session(&self, session: SessionUpdate) -> AdapterResult<AdapterSession> {
        SessionService::update_session(&self.db, session).await
    }

    async fn delete_session(&self, session_token: &str) -> AdapterResult<AdapterSession> {
        SessionService::delete_session(&self.db, session_token).await
    }

    async fn create_verification_token(
        &self,
        token: VerificationToken,
    ) -> AdapterResult<VerificationToken> {
        VerificationTokenService::create_verification_token(&self.db, token).await
    }

    async fn use_verification_token(
        &self,
        identifier: &str,
        token: &str,
    ) -> AdapterResult<Option<VerificationToken>> {
        VerificationTokenService::use_verification_token(&self.db, identifier, token).await
    }
}
