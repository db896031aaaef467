//! Services implementing the advisor's business logic.
//!
//! Each service wraps a shared [`Dex`](crate::data::dex::Dex) and is registered as app data by
//! the matching REST API module.

pub mod matchup;
pub mod moves;
pub mod pokemon;
pub mod team;
pub mod types;
