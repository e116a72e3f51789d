use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::Result;

/// Transport seam for the row source: fetch one published sheet export as
/// text. Production goes over HTTPS; tests substitute fixed strings.
#[async_trait::async_trait]
pub trait SheetFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// HTTPS fetcher for published sheet exports.
///
/// One outbound read per call; no caching, no retry. A non-success status
/// is an error, fatal for the sheet being processed.
pub struct HttpSheetFetcher {
    client: Client,
}

impl HttpSheetFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .user_agent(concat!("glossa/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl SheetFetcher for HttpSheetFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        tracing::debug!(%url, "fetching sheet export");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}
