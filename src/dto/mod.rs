pub mod account;
pub mod session;
pub mod user;
pub mod verification_token;

pub use account::{AdapterAccount, NewAccount};
pub use session::{AdapterSession, NewSession, SessionAndUser, SessionUpdate};
pub use user::{AdapterUser, NewUser, UserUpdate};
pub use verification_token::VerificationToken;
