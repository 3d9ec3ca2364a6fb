use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use super::expect_deleted;
use crate::dto::VerificationToken;
use crate::entities::verification_tokens;
use crate::error::{AdapterError, AdapterResult};

pub struct VerificationTokenService;

impl VerificationTokenService {
    /// Store a freshly issued verification token
    pub async fn create_verification_token(
        db: &DatabaseConnection,
        token: VerificationToken,
    ) -> AdapterResult<VerificationToken> {
        let record = verification_tokens::ActiveModel {
            identifier: Set(token.identifier),
            token: Set(token.token),
            expires: Set(token.expires.fixed_offset()),
        };

        let created = record.insert(db).await?;
        tracing::debug!(identifier = %created.identifier, "Verification token created");

        Ok(created.into())
    }

    /// Consume a verification token: return it and delete it.
    ///
    /// An unknown pair, or one consumed by a concurrent caller between the
    /// lookup and the delete, yields `None`. Store failures are returned as errors.
    pub async fn use_verification_token(
        db: &DatabaseConnection,
        identifier: &str,
        token: &str,
    ) -> AdapterResult<Option<VerificationToken>> {
        let key = (identifier.to_string(), token.to_string());

        let Some(found) = verification_tokens::Entity::find_by_id(key.clone())
            .one(db)
            .await?
        else {
            return Ok(None);
        };

        let deleted = verification_tokens::Entity::delete_by_id(key)
            .exec(db)
            .await
            .map_err(AdapterError::from)
            .and_then(|result| expect_deleted("verification token", result.rows_affected));
        match deleted {
            Ok(()) => {}
            Err(err) if err.is_not_found() => {
                tracing::debug!(identifier, "Verification token already consumed");
                return Ok(None);
            }
            Err(err) => return Err(err),
        }
        tracing::debug!(identifier, "Verification token used");

        Ok(Some(found.into()))
    }
}
