use serde::Deserialize;
use speed_core::{Article, QueueUpdate, TransitionError};
use speed_logging::{speed_debug, speed_warn};

use crate::{EngineSettings, FailureKind, FetchError};

/// Outbound update call: moves one article to a new queue.
#[async_trait::async_trait]
pub trait QueueUpdater: Send + Sync {
    async fn update_queue(&self, update: &QueueUpdate) -> Result<(), TransitionError>;
}

/// Article listing used to (re)populate the working set.
#[async_trait::async_trait]
pub trait ArticleSource: Send + Sync {
    async fn list_articles(&self) -> Result<Vec<Article>, FetchError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// reqwest-backed client for the SPEED REST endpoints.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    settings: EngineSettings,
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(settings: EngineSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl QueueUpdater for ReqwestClient {
    async fn update_queue(&self, update: &QueueUpdate) -> Result<(), TransitionError> {
        let url = self
            .settings
            .update_url()
            .map_err(|err| TransitionError::transport(err.to_string()))?;
        speed_debug!(
            "POST {} articleId={} newQueueValue={}",
            url,
            update.article_id,
            update.new_queue_value
        );

        let response = self
            .client
            .post(url)
            .json(update)
            .send()
            .await
            .map_err(|err| TransitionError::transport(map_reqwest_error(err).to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Fall back to the status line when the body carries no `error`.
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        speed_warn!(
            "Update of article {} rejected with {}: {}",
            update.article_id,
            status,
            message
        );
        Err(TransitionError::RemoteRejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl ArticleSource for ReqwestClient {
    async fn list_articles(&self) -> Result<Vec<Article>, FetchError> {
        let url = self.settings.articles_url()?;
        speed_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
