use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use self::pinboard::{AuthToken, Endpoint, redact_url};

pub mod export;
pub mod pinboard;

// anything that can hand back the raw posts/all response body
#[async_trait]
pub trait BookmarkSource: Send + Sync {
    async fn fetch_all_posts(&self) -> Result<Vec<u8>>;
}

pub struct PinboardClient {
    pub client: Client,
    pub api_base: String,
    pub auth: AuthToken,
}

impl PinboardClient {
    pub fn new(api_base: String, auth: AuthToken) -> Self {
        Self {
            client: Client::new(),
            api_base,
            auth,
        }
    }
}

#[async_trait]
impl BookmarkSource for PinboardClient {
    async fn fetch_all_posts(&self) -> Result<Vec<u8>> {
        let url = self.auth.build_url(&Endpoint::AllPosts.url(&self.api_base))?;
        tracing::info!("PinboardClient: Fetching all posts from {}...", redact_url(&url));

        let res = self.client.get(url).send().await;

        match res {
            Ok(response) if response.status() == StatusCode::OK => {
                let body = match response.bytes().await {
                    Ok(body) => body,
                    Err(e) => bail!("Failed to read response body: {}", e.without_url()),
                };
                tracing::info!("PinboardClient: Received {} bytes.", body.len());
                Ok(body.to_vec())
            }
            Ok(response) => {
                bail!("Response was: {}", response.status());
            }
            Err(e) => {
                // the request url carries the token, keep it out of the message
                bail!("Failed to connect to the Pinboard API: {}", e.without_url());
            }
        }
    }
}
