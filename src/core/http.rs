//! HTTP utilities for ESPN and injury report requests

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::Client;
use std::sync::LazyLock;

static HTTP: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .user_agent(concat!("espn-fba/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
});

/// Process-wide HTTP client.
pub fn http_client() -> &'static Client {
    &HTTP
}

/// Build cookie headers from `ESPN_SWID` and `ESPN_S2`, if present.
///
/// Returns `Ok(None)` when either env var is missing (public leagues).
pub fn maybe_cookie_header_map() -> Result<Option<HeaderMap>> {
    let swid = std::env::var("ESPN_SWID").ok();
    let s2 = std::env::var("ESPN_S2").ok();
    if let (Some(swid), Some(s2)) = (swid, s2) {
        let mut h = HeaderMap::new();
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let cookie = format!("SWID={}; espn_s2={}", swid, s2);
        h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
        Ok(Some(h))
    } else {
        Ok(None)
    }
}

/// GET a page body as text.
pub async fn fetch_text(url: &str) -> Result<String> {
    let body = http_client()
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}
