use async_trait::async_trait;

use crate::errors::{AppError, AppResult};

/// Retrieves raw HTML from the upstream site.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, url: &str) -> AppResult<String>;
}

/// Single GET per call. No retry, no cache and the client's default timeout.
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpPageSource {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str) -> AppResult<String> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::error!(
                "Failed to fetch content from {}: {} {}",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            );
            return Err(AppError::UpstreamFetch {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_page_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpPageSource>();
    }

    #[actix_web::test]
    async fn test_unreachable_host_is_an_unknown_error() {
        let source = HttpPageSource::default();
        // nothing listens on the discard port
        let err = source
            .fetch_page("http://127.0.0.1:9/audits-and-reports")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unknown(_)));
    }
}
