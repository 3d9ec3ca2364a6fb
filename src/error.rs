use sea_orm::DbErr;

/// Result type returned by every adapter operation.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Failures surfaced to the authentication framework.
///
/// Expected "no such row" outcomes on read paths are not errors; those
/// operations return `Ok(None)`. The variants below are the hard failures.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// A record the operation requires does not exist
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A statement touched a different number of rows than the operation expects
    #[error("expected 1 {entity} to be {action}, got {count}")]
    UnexpectedRowCount {
        entity: &'static str,
        action: &'static str,
        count: u64,
    },

    /// A stored row is missing data the adapter contract requires
    #[error("malformed {entity} {key}: {reason}")]
    Malformed {
        entity: &'static str,
        key: String,
        reason: &'static str,
    },

    /// An identifier from the caller is not a decimal integer
    #[error("invalid {entity} id: {value:?}")]
    InvalidId { entity: &'static str, value: String },

    /// The operation exists in the contract but has no storage behavior yet
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The store rejected or failed a statement
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl AdapterError {
    pub(crate) fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub(crate) fn malformed(
        entity: &'static str,
        key: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::Malformed {
            entity,
            key: key.into(),
            reason,
        }
    }

    /// Whether this error only means the target row is absent.
    ///
    /// A delete that removed nothing counts: the row went away between the
    /// lookup and the delete.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::UnexpectedRowCount { count: 0, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(AdapterError::not_found("user", "42").is_not_found());
        assert!(
            AdapterError::UnexpectedRowCount {
                entity: "verification token",
                action: "deleted",
                count: 0,
            }
            .is_not_found()
        );
    }

    #[test]
    fn test_store_errors_are_not_not_found() {
        assert!(!AdapterError::Database(DbErr::Conn(sea_orm::RuntimeErr::Internal(
            "connection refused".into()
        )))
        .is_not_found());
        assert!(!AdapterError::Database(DbErr::RecordNotUpdated).is_not_found());
        assert!(
            !AdapterError::UnexpectedRowCount {
                entity: "session",
                action: "deleted",
                count: 2,
            }
            .is_not_found()
        );
        assert!(!AdapterError::NotImplemented("unlink_account").is_not_found());
        assert!(!AdapterError::malformed("user", "1", "email is empty").is_not_found());
    }

    #[test]
    fn test_messages_name_the_record() {
        assert_eq!(
            AdapterError::not_found("session", "abc").to_string(),
            "session not found: abc"
        );
        assert_eq!(
            AdapterError::InvalidId {
                entity: "user",
                value: "x1".into(),
            }
            .to_string(),
            "invalid user id: \"x1\""
        );
        assert_eq!(
            AdapterError::NotImplemented("unlink_account").to_string(),
            "unlink_account is not implemented"
        );
    }
}
