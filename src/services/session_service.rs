use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, Set,
};

use super::{DUPLICATE_SCAN_LIMIT, exactly_one, expect_deleted, expect_one};
use crate::dto::{AdapterSession, NewSession, SessionAndUser, SessionUpdate};
use crate::entities::{sessions, users};
use crate::error::{AdapterError, AdapterResult};
use crate::utils::{format_id, parse_id};

pub struct SessionService;

impl SessionService {
    /// Store a new session for a user
    pub async fn create_session(
        db: &DatabaseConnection,
        new_session: NewSession,
    ) -> AdapterResult<AdapterSession> {
        let user_id = parse_id("user", &new_session.user_id)?;

        let session = sessions::ActiveModel {
            session_token: Set(new_session.session_token),
            user_id: Set(user_id),
            expires: Set(new_session.expires.fixed_offset()),
            ..Default::default()
        };

        let created = session.insert(db).await?;
        tracing::debug!(session_id = created.id, user_id, "Session created");

        Ok(created.into())
    }

    /// Get the session for a token together with the user who owns it
    pub async fn get_session_and_user(
        db: &DatabaseConnection,
        session_token: &str,
    ) -> AdapterResult<Option<SessionAndUser>> {
        let Some(session) = exactly_one(Self::find_by_token(db, session_token).await?) else {
            return Ok(None);
        };

        let Some(user) = users::Entity::find_by_id(session.user_id).one(db).await? else {
            return Ok(None);
        };

        if !user.is_well_formed() {
            tracing::warn!(user_id = user.id, session_id = session.id, "Session owner has no email");
            return Err(AdapterError::malformed(
                "user",
                format_id(user.id),
                "email is empty",
            ));
        }

        Ok(Some(SessionAndUser {
            session: session.into(),
            user: user.into(),
        }))
    }

    /// Rewrite a session located by its token, keeping its expiry unless a new one is given
    pub async fn update_session(
        db: &DatabaseConnection,
        update: SessionUpdate,
    ) -> AdapterResult<AdapterSession> {
        let found = expect_one(
            Self::find_by_token(db, &update.session_token).await?,
            "session",
            &update.session_token,
        )?;
        let session_id = found.id;
        let expires = update
            .expires
            .map_or(found.expires, |expires| expires.fixed_offset());

        let mut session: sessions::ActiveModel = found.into();
        session.session_token = Set(update.session_token);
        session.expires = Set(expires);

        let updated = session.update(db).await?;
        tracing::debug!(session_id, "Session updated");

        Ok(updated.into())
    }

    /// Delete the session for a token and return the removed record
    pub async fn delete_session(
        db: &DatabaseConnection,
        session_token: &str,
    ) -> AdapterResult<AdapterSession> {
        let found = expect_one(
            Self::find_by_token(db, session_token).await?,
            "session",
            session_token,
        )?;

        let result = sessions::Entity::delete_by_id(found.id).exec(db).await?;
        expect_deleted("session", result.rows_affected)?;
        tracing::debug!(session_id = found.id, "Session deleted");

        Ok(found.into())
    }

    async fn find_by_token(
        db: &DatabaseConnection,
        session_token: &str,
    ) -> AdapterResult<Vec<sessions::Model>> {
        Ok(sessions::Entity::find()
            .filter(sessions::Column::SessionToken.eq(session_token))
            .limit(DUPLICATE_SCAN_LIMIT)
            .all(db)
            .await?)
    }
}
