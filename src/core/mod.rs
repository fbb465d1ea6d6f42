//! Core utilities shared across commands
//!
//! - `cache`: file system caching of raw ESPN payloads
//! - `http`: shared HTTP client and ESPN cookie headers

pub mod cache;
pub mod http;

pub use cache::{players_cache_path, try_read_to_string, write_string};
pub use http::{fetch_text, http_client, maybe_cookie_header_map};
