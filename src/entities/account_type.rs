use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of provider an account was linked through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// OAuth 2 provider
    #[default]
    Oauth,
    /// OpenID Connect provider
    Oidc,
    /// Passwordless email sign-in
    Email,
    /// Username/password or other custom credentials
    Credentials,
    /// Passkey / WebAuthn authenticator
    Webauthn,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AccountType {
    /// Convert from database string representation
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "oauth" => Some(Self::Oauth),
            "oidc" => Some(Self::Oidc),
            "email" => Some(Self::Email),
            "credentials" => Some(Self::Credentials),
            "webauthn" => Some(Self::Webauthn),
            _ => None,
        }
    }

    /// Convert to database string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Oauth => "oauth",
            Self::Oidc => "oidc",
            Self::Email => "email",
            Self::Credentials => "credentials",
            Self::Webauthn => "webauthn",
        }
    }
}
