use std::time::Duration;

use async_trait::async_trait;
use bookwatch_shared::api::{self, PollResp, rest::RestError};

use crate::AppError;

/// Where poll cycles get their records from.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> Result<PollResp, RestError>;
}

/// `GET {server_url}/poll` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let base = crate::config::normalize_server_url(server_url);
        url::Url::parse(&base)
            .map_err(|e| AppError::Config(format!("invalid server_url {base}: {e}")))?;
        let client = api::rest::build_client(timeout)
            .map_err(|e| AppError::Http(format!("client setup failed: {e}")))?;
        Ok(Self { base, client })
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn fetch(&self) -> Result<PollResp, RestError> {
        api::rest::poll(&self.client, &self.base).await
    }
}
