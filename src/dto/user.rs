use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::users;
use crate::utils::format_id;

// ============ Request DTOs ============

/// Profile data for a user signing in for the first time
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    #[serde(default)]
    pub email_verified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Profile changes for an existing user.
///
/// `None` leaves the stored column as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

// ============ Response DTOs ============

/// User as seen by the authentication framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterUser {
    pub id: String,
    pub email: String,
    pub email_verified: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl From<users::Model> for AdapterUser {
    fn from(user: users::Model) -> Self {
        Self {
            id: format_id(user.id),
            email: user.email,
            email_verified: user.email_verified.map(|at| at.with_timezone(&Utc)),
            name: user.name,
            image: user.image,
        }
    }
}
