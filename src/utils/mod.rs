pub mod ids;

pub use ids::{format_id, parse_id};
