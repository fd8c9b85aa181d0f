use std::time::Duration;

use reqwest::{
    Client,
    Response,
};
use tracing::warn;

use crate::core::SpyCatError;

const USER_AGENT_VALUE: &str = concat!("spycat/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

pub fn http_client(timeout: Duration) -> Result<Client, SpyCatError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT_VALUE)
        .build()
        .map_err(|e| SpyCatError::Custom(format!("HTTP client build failed: {e}")))
}

/// Passes 2xx responses through; anything else becomes [`SpyCatError::Status`]
/// carrying the response body.
pub async fn ensure_success(resp: Response) -> Result<Response, SpyCatError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let url = resp.url().clone();
    let body = resp.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), %url, "request failed");
    Err(SpyCatError::Status { status: status.as_u16(), body })
}

/// Joins a base URL and a path without doubling or dropping the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
