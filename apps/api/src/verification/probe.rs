//! Network probe: the only place in the verification layer that touches the network.
//!
//! `LinkProbe` is the seam the verifier depends on; tests substitute counting
//! or delaying mocks for `HttpProbe`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("probe timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("request blocked: {0}")]
    Blocked(String),
}

/// What a successful probe learned. `status` is `None` for opaque responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: Option<u16>,
}

#[async_trait]
pub trait LinkProbe: Send + Sync {
    async fn probe(&self, url: &Url) -> Result<ProbeResponse, ProbeError>;
}

/// Lightweight existence check over HTTP: HEAD, falling back to GET when
/// the server rejects HEAD.
#[derive(Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .redirect(reqwest::redirect::Policy::limited(5))
                .user_agent(concat!("curator/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    async fn send(&self, method: Method, url: &Url) -> Result<StatusCode, ProbeError> {
        self.client
            .request(method, url.clone())
            .send()
            .await
            .map(|r| r.status())
            .map_err(map_reqwest_error)
    }
}

#[async_trait]
impl LinkProbe for HttpProbe {
    async fn probe(&self, url: &Url) -> Result<ProbeResponse, ProbeError> {
        let mut status = self.send(Method::HEAD, url).await?;
        if status == StatusCode::METHOD_NOT_ALLOWED {
            status = self.send(Method::GET, url).await?;
        }
        Ok(ProbeResponse {
            status: Some(status.as_u16()),
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ProbeError {
    if e.is_timeout() {
        ProbeError::Timeout
    } else if e.is_redirect() {
        ProbeError::Blocked(e.to_string())
    } else {
        ProbeError::Network(e.to_string())
    }
}
