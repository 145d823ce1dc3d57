use async_trait::async_trait;
use tracing::warn;

use crate::error::IconError;

/// Response of a single icon download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedImage {
    pub status: u16,
    pub bytes: Vec<u8>,
}

impl FetchedImage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait IconFetcher: Send + Sync {
    /// GET `url` and hand back the status and body.
    ///
    /// A non-2xx status is still `Ok`; only a request that never produced a
    /// response is an error.
    async fn fetch(&self, url: &str) -> Result<FetchedImage, IconError>;
}

/// `reqwest`-backed fetcher shared by every invocation.
#[derive(Clone, Debug)]
pub struct HttpIconFetcher {
    client: reqwest::Client,
}

impl HttpIconFetcher {
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl IconFetcher for HttpIconFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, IconError> {
        let fetch_failed = || IconError::FetchFailed {
            url: url.to_owned(),
            status: None,
        };

        let response = self.client.get(url).send().await.map_err(|source| {
            warn!(?source, url, "icon image request failed");
            fetch_failed()
        })?;

        let status = response.status();
        if !status.is_success() {
            return Ok(FetchedImage {
                status: status.as_u16(),
                bytes: Vec::new(),
            });
        }

        let bytes = response.bytes().await.map_err(|source| {
            warn!(?source, url, "failed to read icon image body");
            fetch_failed()
        })?;

        Ok(FetchedImage {
            status: status.as_u16(),
            bytes: bytes.to_vec(),
        })
    }
}
