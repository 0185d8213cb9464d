//! HTTP storage implementation for CSVs served by the deployed site.

use async_trait::async_trait;
use url::Url;

use crate::error::Result;
use crate::models::HttpConfig;
use crate::storage::SourceStorage;
use crate::utils::http::{create_async_client, fetch_text};

/// Fetches resources relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpStorage {
    client: reqwest::Client,
    base: Url,
}

impl HttpStorage {
    /// Create a storage for `base`; a trailing slash is implied.
    pub fn new(base: &str, config: &HttpConfig) -> Result<Self> {
        let base = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{base}/"))?
        };
        let client = create_async_client(config)?;
        Ok(Self { client, base })
    }

    fn resource_url(&self, name: &str) -> Result<Url> {
        Ok(self.base.join(name)?)
    }
}

#[async_trait]
impl SourceStorage for HttpStorage {
    async fn read_text(&self, name: &str) -> Result<Option<String>> {
        let url = self.resource_url(name)?;
        log::debug!("GET {url}");
        fetch_text(&self.client, url.as_str()).await
    }

    fn location(&self, name: &str) -> String {
        self.resource_url(name)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| format!("{}{}", self.base, name))
    }
}
