use std::time::Duration;

use url::Url;

use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_UPDATE_PATH: &str = "/api/updateArticle";
pub const DEFAULT_ARTICLES_PATH: &str = "/api/articles";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub base_url: String,
    pub update_path: String,
    pub articles_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            update_path: DEFAULT_UPDATE_PATH.to_string(),
            articles_path: DEFAULT_ARTICLES_PATH.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl EngineSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn update_url(&self) -> Result<Url, FetchError> {
        self.endpoint(&self.update_path)
    }

    pub fn articles_url(&self) -> Result<Url, FetchError> {
        self.endpoint(&self.articles_path)
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_without_double_slashes() {
        let settings = EngineSettings::with_base_url("http://speed.test/");
        assert_eq!(
            settings.update_url().unwrap().as_str(),
            "http://speed.test/api/updateArticle"
        );
        assert_eq!(
            settings.articles_url().unwrap().as_str(),
            "http://speed.test/api/articles"
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let settings = EngineSettings::with_base_url("not a url");
        let err = settings.update_url().unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
