use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::WaitlistError;

pub const DEFAULT_WAITLIST_PATH: &str = "/api/waitlist";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// The waitlist registration endpoint.
///
/// Futures are `?Send`: the browser implementation holds JS handles.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait WaitlistApi {
    async fn join(&self, request: &JoinRequest) -> Result<(), WaitlistError>;
}

/// Maps a raw endpoint answer onto the submission outcome.
///
/// Any 2xx with a JSON body is a success. A non-2xx uses the body's `error`
/// string when it has a non-empty one. A body that is not JSON at all is
/// treated as malformed regardless of status.
pub fn interpret_response(status: u16, body: &str) -> Result<(), WaitlistError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| WaitlistError::MalformedResponse(format!("status {}: {}", status, e)))?;

    if (200..300).contains(&status) {
        return Ok(());
    }

    let message = serde_json::from_value::<ErrorBody>(value)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty());
    Err(WaitlistError::Rejected { status, message })
}
