use serde::{Deserialize, Serialize};

use crate::entities::{AccountType, accounts};
use crate::error::AdapterError;
use crate::utils::format_id;

/// A provider identity to link to a local user, with whatever tokens the
/// provider issued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub user_id: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub provider: String,
    pub provider_account_id: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    /// Seconds since the Unix epoch
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub session_state: Option<String>,
}

/// A linked account as returned to the framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterAccount {
    pub id: String,
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub provider: String,
    pub provider_account_id: String,
    pub refresh_token: Option<String>,
    pub access_token: Option<String>,
    pub expires_at: Option<i64>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub id_token: Option<String>,
    pub session_state: Option<String>,
}

impl TryFrom<accounts::Model> for AdapterAccount {
    type Error = AdapterError;

    fn try_from(account: accounts::Model) -> Result<Self, Self::Error> {
        let account_type = AccountType::from_str(&account.account_type).ok_or_else(|| {
            AdapterError::malformed("account", format_id(account.id), "unknown account type")
        })?;

        Ok(Self {
            id: format_id(account.id),
            user_id: account.user_id.map(format_id),
            account_type,
            provider: account.provider,
            provider_account_id: account.provider_account_id,
            refresh_token: account.refresh_token,
            access_token: account.access_token,
            expires_at: account.expires_at,
            token_type: account.token_type,
            scope: account.scope,
            id_token: account.id_token,
            session_state: account.session_state,
        })
    }
}
