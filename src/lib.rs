//! authstore - relational storage for an authentication framework
//!
//! This crate maps the framework's lifecycle calls onto four tables:
//! - Users, created on first sign-in and looked up by id, email or linked account
//! - Provider accounts linked to users
//! - Sessions, looked up by their opaque token
//! - Single-use verification tokens for passwordless sign-in

pub mod adapter;
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod services;
pub mod utils;

pub use adapter::{Adapter, SqlAdapter};
pub use config::Config;
pub use error::{AdapterError, AdapterResult};
