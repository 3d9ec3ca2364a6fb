use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

use crate::dto::{AdapterAccount, NewAccount};
use crate::entities::accounts;
use crate::error::{AdapterError, AdapterResult};
use crate::utils::parse_id;

pub struct AccountService;

impl AccountService {
    /// Link a provider account to an existing user.
    ///
    /// Yields `None` when the store reports that nothing was inserted.
    pub async fn link_account(
        db: &DatabaseConnection,
        account: NewAccount,
    ) -> AdapterResult<Option<AdapterAccount>> {
        let user_id = parse_id("user", &account.user_id)?;

        let record = accounts::ActiveModel {
            user_id: Set(Some(user_id)),
            provider: Set(account.provider),
            provider_account_id: Set(account.provider_account_id),
            account_type: Set(account.account_type.as_str().to_string()),
            refresh_token: Set(account.refresh_token),
            access_token: Set(account.access_token),
            expires_at: Set(account.expires_at),
            token_type: Set(account.token_type),
            scope: Set(account.scope),
            id_token: Set(account.id_token),
            session_state: Set(account.session_state),
            ..Default::default()
        };

        let created = match record.insert(db).await {
            Ok(created) => created,
            Err(DbErr::RecordNotInserted) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(
            account_id = created.id,
            user_id,
            provider = %created.provider,
            "Account linked"
        );

        AdapterAccount::try_from(created).map(Some)
    }

    /// Unlinking has no storage behavior yet; callers get a definite error
    /// instead of a silent success.
    pub fn unlink_account(provider: &str, provider_account_id: &str) -> AdapterResult<()> {
        tracing::warn!(
            provider,
            provider_account_id,
            "Account unlinking requested but not implemented"
        );
        Err(AdapterError::NotImplemented("unlink_account"))
    }
}
