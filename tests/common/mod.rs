#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use authstore::dto::{AdapterUser, NewAccount, NewUser};
use authstore::entities::{AccountType, users};
use authstore::{Adapter, SqlAdapter, db};

/// Install a log subscriber once per test binary; honours `RUST_LOG`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "authstore=debug,sea_orm=warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Connect to a fresh in-memory database without any tables.
pub async fn empty_db() -> DatabaseConnection {
    init_tracing();
    sea_orm::Database::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database")
}

/// Adapter over a fresh in-memory database with the auth tables installed.
pub async fn test_adapter() -> SqlAdapter {
    let db = empty_db().await;
    db::install_schema(&db)
        .await
        .expect("failed to install auth tables");
    SqlAdapter::new(db)
}

/// A whole-second timestamp, so values survive storage unchanged.
pub fn at(unix_seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_seconds, 0).expect("timestamp out of range")
}

pub fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        ..Default::default()
    }
}

/// Helper: create a user and return it.
pub async fn create_user(adapter: &SqlAdapter, email: &str) -> AdapterUser {
    adapter
        .create_user(new_user(email))
        .await
        .expect("create_user failed")
}

/// Helper: write a user row with a blank email straight to the table and return its id.
pub async fn insert_user_without_email(adapter: &SqlAdapter) -> String {
    let now = Utc::now().fixed_offset();
    let user = users::ActiveModel {
        email: Set(String::new()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(adapter.db())
    .await
    .expect("direct insert failed");
    user.id.to_string()
}

pub fn oauth_account(user_id: &str, provider: &str, provider_account_id: &str) -> NewAccount {
    NewAccount {
        user_id: user_id.to_string(),
        account_type: AccountType::Oauth,
        provider: provider.to_string(),
        provider_account_id: provider_account_id.to_string(),
        ..Default::default()
    }
}
