use crate::ScraperError;
use reqwest::{Client, ClientBuilder, StatusCode};
use tracing::debug;

pub const USER_AGENT: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

#[async_trait::async_trait]
pub trait Fetcher {
    /// One GET attempt. Anything but a readable 200 body is an error.
    async fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::from_builder(client_builder())
    }

    pub fn from_builder(builder: ClientBuilder) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: builder.build()?,
        })
    }
}

/// Client settings shared by every request of a run.
pub fn client_builder() -> ClientBuilder {
    Client::builder().user_agent(USER_AGENT)
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let request = self
            .client
            .get(url)
            .build()
            .map_err(|source| ScraperError::InvalidUrl {
                url: url.to_string(),
                source,
            })?;

        debug!("Visit {}", url);
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|source| ScraperError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScraperError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| ScraperError::Body {
            url: url.to_string(),
            source,
        })
    }
}
