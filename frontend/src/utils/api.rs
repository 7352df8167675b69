use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use jobtrackpath_core::{interpret_response, JoinRequest, WaitlistApi, WaitlistError};
use serde::Serialize;

/// Thin builder over `gloo_net` requests to the backend.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
}

impl RequestWrapper {
    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, GlooError> {
        self.request = self.request.json(data)?;
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        self.request.send().await
    }
}

impl Api {
    /// Create a POST request to an absolute or same-origin URL
    pub fn post(url: &str) -> RequestWrapper {
        RequestWrapper {
            request: Request::post(url),
        }
    }
}

/// Waitlist endpoint reached through the browser's `fetch`.
pub struct BrowserWaitlistApi {
    url: String,
}

impl BrowserWaitlistApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl WaitlistApi for BrowserWaitlistApi {
    async fn join(&self, request: &JoinRequest) -> Result<(), WaitlistError> {
        let response = Api::post(&self.url)
            .json(request)
            .map_err(|e| WaitlistError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| WaitlistError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WaitlistError::MalformedResponse(e.to_string()))?;
        interpret_response(status, &body)
    }
}
