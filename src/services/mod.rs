pub mod account_service;
pub mod session_service;
pub mod user_service;
pub mod verification_token_service;

pub use account_service::AccountService;
pub use session_service::SessionService;
pub use user_service::UserService;
pub use verification_token_service::VerificationTokenService;

use crate::error::{AdapterError, AdapterResult};

/// Upper bound for lookups that only need to tell "one" from "several".
const DUPLICATE_SCAN_LIMIT: u64 = 2;

/// The only row of `rows`, or `None` when there are zero or several.
fn exactly_one<T>(mut rows: Vec<T>) -> Option<T> {
    if rows.len() == 1 { rows.pop() } else { None }
}

/// The only row of `rows`, failing when there are zero or several.
fn expect_one<T>(mut rows: Vec<T>, entity: &'static str, key: &str) -> AdapterResult<T> {
    match rows.len() {
        0 => Err(AdapterError::not_found(entity, key)),
        1 => rows.pop().ok_or_else(|| AdapterError::not_found(entity, key)),
        n => Err(AdapterError::UnexpectedRowCount {
            entity,
            action: "found",
            count: u64::try_from(n).unwrap_or(u64::MAX),
        }),
    }
}

/// Check that a delete-by-primary-key removed exactly one row.
const fn expect_deleted(entity: &'static str, rows_affected: u64) -> AdapterResult<()> {
    if rows_affected == 1 {
        Ok(())
    } else {
        Err(AdapterError::UnexpectedRowCount {
            entity,
            action: "deleted",
            count: rows_affected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one() {
        assert_eq!(exactly_one(Vec::<i32>::new()), None);
        assert_eq!(exactly_one(vec![7]), Some(7));
        assert_eq!(exactly_one(vec![7, 8]), None);
    }

    #[test]
    fn test_expect_one() {
        assert!(matches!(
            expect_one(Vec::<i32>::new(), "session", "tok"),
            Err(AdapterError::NotFound { entity: "session", .. })
        ));
        assert_eq!(expect_one(vec![3], "session", "tok").ok(), Some(3));
        assert!(matches!(
            expect_one(vec![3, 4], "session", "tok"),
            Err(AdapterError::UnexpectedRowCount { count: 2, .. })
        ));
    }

    #[test]
    fn test_expect_deleted() {
        assert!(expect_deleted("user", 1).is_ok());
        assert!(matches!(
            expect_deleted("user", 0),
            Err(AdapterError::UnexpectedRowCount { count: 0, action: "deleted", .. })
        ));
    }
}
