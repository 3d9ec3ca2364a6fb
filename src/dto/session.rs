use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdapterUser;
use crate::entities::sessions;
use crate::utils::format_id;

/// A session issued at sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub session_token: String,
    pub user_id: String,
    pub expires: DateTime<Utc>,
}

/// Rewrite of an existing session, located by its token.
///
/// Without `expires` the session is written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    pub session_token: String,
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
}

/// A stored session as returned to the framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterSession {
    pub id: String,
    pub session_token: String,
    pub user_id: String,
    pub expires: DateTime<Utc>,
}

impl From<sessions::Model> for AdapterSession {
    fn from(session: sessions::Model) -> Self {
        Self {
            id: format_id(session.id),
            session_token: session.session_token,
            user_id: format_id(session.user_id),
            expires: session.expires.with_timezone(&Utc),
        }
    }
}

/// Session lookup result paired with its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAndUser {
    pub session: AdapterSession,
    pub user: AdapterUser,
}
