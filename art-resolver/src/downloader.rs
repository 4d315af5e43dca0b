use crate::errors::ArtError;
use art_resolver_core::errors::ErrorKind;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

const DEFAULT_ARCHIVE_NAME: &'static str = "archive";

#[async_trait]
pub trait Downloader: Send + Sync {
    async fn download(&self, url: &str, target_dir: &Path) -> Result<PathBuf, ArtError>;
}

pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    pub fn new() -> HttpDownloader {
        HttpDownloader {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &str, target_dir: &Path) -> Result<PathBuf, ArtError> {
        let now = Instant::now();

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ArtError::new(
                ErrorKind::Download,
                format!("{} responded with status {}", url, response.status()),
            ));
        }

        let content = response.bytes().await?;

        let file_name = url
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(DEFAULT_ARCHIVE_NAME);

        let archive_path = target_dir.join(file_name);
        fs::write(&archive_path, &content)?;

        debug!(
            "Downloaded {} in {} milliseconds",
            url,
            now.elapsed().as_millis()
        );

        Ok(archive_path)
    }
}
