use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::{DUPLICATE_SCAN_LIMIT, exactly_one, expect_deleted};
use crate::dto::{AdapterUser, NewUser, UserUpdate};
use crate::entities::{accounts, users};
use crate::error::{AdapterError, AdapterResult};
use crate::utils::{format_id, parse_id};

pub struct UserService;

impl UserService {
    /// Create a user, or return the existing one registered under the same email
    pub async fn create_user(
        db: &DatabaseConnection,
        new_user: NewUser,
    ) -> AdapterResult<AdapterUser> {
        if new_user.email.trim().is_empty() {
            return Err(AdapterError::malformed(
                "user",
                new_user.email,
                "email would be empty",
            ));
        }

        let existing = users::Entity::find()
            .filter(users::Column::Email.eq(&new_user.email))
            .order_by_asc(users::Column::Id)
            .one(db)
            .await?;

        if let Some(user) = existing.filter(users::Model::is_well_formed) {
            tracing::debug!(user_id = user.id, "User with this email already exists");
            return Ok(user.into());
        }

        let now = Utc::now().fixed_offset();
        let user = users::ActiveModel {
            email: Set(new_user.email),
            email_verified: Set(new_user.email_verified.map(|at| at.fixed_offset())),
            name: Set(new_user.name),
            image: Set(new_user.image),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let created = user.insert(db).await?;
        tracing::debug!(user_id = created.id, "User created");

        Ok(created.into())
    }

    /// Get user by ID
    pub async fn get_user(db: &DatabaseConnection, id: &str) -> AdapterResult<AdapterUser> {
        Self::find_by_id(db, id).await.map(Into::into)
    }

    /// Get user by email, if exactly one user has it
    pub async fn get_user_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> AdapterResult<Option<AdapterUser>> {
        let found = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .limit(DUPLICATE_SCAN_LIMIT)
            .all(db)
            .await?;

        Ok(exactly_one(found).map(Into::into))
    }

    /// Resolve the user a provider account is linked to
    pub async fn get_user_by_account(
        db: &DatabaseConnection,
        provider: &str,
        provider_account_id: &str,
    ) -> AdapterResult<Option<AdapterUser>> {
        let found = accounts::Entity::find()
            .filter(accounts::Column::Provider.eq(provider))
            .filter(accounts::Column::ProviderAccountId.eq(provider_account_id))
            .limit(DUPLICATE_SCAN_LIMIT)
            .all(db)
            .await?;

        let Some(user_id) = exactly_one(found).and_then(|account| account.user_id) else {
            return Ok(None);
        };

        // The account points at this user, so a missing row is a broken link.
        let user = users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AdapterError::not_found("user", format_id(user_id)))?;

        if !user.is_well_formed() {
            tracing::warn!(user_id, provider, "Linked user has no email");
            return Err(AdapterError::malformed(
                "user",
                format_id(user_id),
                "email is empty",
            ));
        }

        Ok(Some(user.into()))
    }

    /// Overwrite the profile fields supplied in `update`
    pub async fn update_user(
        db: &DatabaseConnection,
        update: UserUpdate,
    ) -> AdapterResult<AdapterUser> {
        if update
            .email
            .as_deref()
            .is_some_and(|email| email.trim().is_empty())
        {
            return Err(AdapterError::malformed(
                "user",
                update.id,
                "email would be empty",
            ));
        }

        let found = Self::find_well_formed(db, &update.id).await?;
        let user_id = found.id;

        let mut user: users::ActiveModel = found.into();
        if let Some(email) = update.email {
            user.email = Set(email);
        }
        if let Some(verified_at) = update.email_verified {
            user.email_verified = Set(Some(verified_at.fixed_offset()));
        }
        if let Some(name) = update.name {
            user.name = Set(Some(name));
        }
        if let Some(image) = update.image {
            user.image = Set(Some(image));
        }
        user.updated_at = Set(Utc::now().fixed_offset());

        let updated = user.update(db).await?;
        tracing::debug!(user_id, "User updated");

        Ok(updated.into())
    }

    /// Delete a user and return the removed record
    pub async fn delete_user(db: &DatabaseConnection, id: &str) -> AdapterResult<AdapterUser> {
        let found = Self::find_well_formed(db, id).await?;

        let result = users::Entity::delete_by_id(found.id).exec(db).await?;
        expect_deleted("user", result.rows_affected)?;
        tracing::debug!(user_id = found.id, "User deleted");

        Ok(found.into())
    }

    async fn find_by_id(db: &DatabaseConnection, id: &str) -> AdapterResult<users::Model> {
        let user_id = parse_id("user", id)?;

        users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AdapterError::not_found("user", id))
    }

    async fn find_well_formed(db: &DatabaseConnection, id: &str) -> AdapterResult<users::Model> {
        let user = Self::find_by_id(db, id).await?;

        if !user.is_well_formed() {
            tracing::warn!(user_id = user.id, "User has no email");
            return Err(AdapterError::malformed("user", id, "email is empty"));
        }

        Ok(user)
    }
}
