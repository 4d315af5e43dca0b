use crate::errors::ArtError;
use art_resolver_core::errors::ErrorKind;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Instant;

#[async_trait]
pub trait Requester: Send + Sync {
    async fn request(&self, url: &str) -> Result<String, ArtError>;
}

pub struct HttpRequester {
    client: Client,
}

impl HttpRequester {
    pub fn new() -> HttpRequester {
        HttpRequester {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Requester for HttpRequester {
    async fn request(&self, url: &str) -> Result<String, ArtError> {
        let now = Instant::now();

        debug!("Requesting {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ArtError::new(
                ErrorKind::Request,
                format!("{} responded with status {}", url, response.status()),
            ));
        }

        let body = response.text().await?;

        debug!(
            "Got {} in {} milliseconds",
            url,
            now.elapsed().as_millis()
        );

        Ok(body)
    }
}
