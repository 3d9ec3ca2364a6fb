use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::verification_tokens;

/// Single-use passwordless sign-in token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    pub identifier: String,
    pub token: String,
    pub expires: DateTime<Utc>,
}

impl From<verification_tokens::Model> for VerificationToken {
    fn from(token: verification_tokens::Model) -> Self {
        Self {
            identifier: token.identifier,
            token: token.token,
            expires: token.expires.with_timezone(&Utc),
        }
    }
}
