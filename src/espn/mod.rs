//! ESPN Fantasy Basketball payloads and the logic that reads them.

pub mod cache_players;
pub mod compute;
pub mod http;
pub mod registry;
pub mod types;
