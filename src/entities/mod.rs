pub mod account_type;
pub mod accounts;
pub mod sessions;
pub mod users;
pub mod verification_tokens;

pub use account_type::AccountType;
