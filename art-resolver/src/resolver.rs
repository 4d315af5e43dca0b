use crate::archiver::Archiver;
use crate::config::Config;
use crate::downloader::Downloader;
use crate::errors::ArtError;
use crate::request::Requester;
use crate::tempdirs::TempSpace;
use art_resolver_core::release::{extract_versions, VersionEntry};
use art_resolver_core::source::{parse_source, ARTIFACTORY_PREFIX};
use art_resolver_core::version::clean;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a previous `fetch` resolved to.
///
/// Hosts hand it back on the next call for the same package so the resolver
/// can decide whether the cached contents are still good.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct FetchResult {
    pub contents: PathBuf,
    pub resolution: Resolution,
}

pub struct ArtResolver<'a> {
    config: &'a Config,
    requester: &'a dyn Requester,
    downloader: &'a dyn Downloader,
    archiver: &'a dyn Archiver,
    temp: TempSpace,
}

impl<'a> ArtResolver<'a> {
    pub fn new(
        config: &'a Config,
        requester: &'a dyn Requester,
        downloader: &'a dyn Downloader,
        archiver: &'a dyn Archiver,
        temp: TempSpace,
    ) -> ArtResolver<'a> {
        ArtResolver {
            config,
            requester,
            downloader,
            archiver,
            temp,
        }
    }

    /// Tells whether this resolver supports the given source.
    pub fn matches(&self, source: &str) -> bool {
        source.starts_with(ARTIFACTORY_PREFIX)
    }

    /// Lists the resolvable targets of a package, in registry listing order.
    pub async fn versions(&self, source: &str) -> Result<Vec<VersionEntry>, ArtError> {
        let registry_url = self.config.registry.artifactory_url()?;
        let package = parse_source(source)?;

        let request_url = format!(
            "{}/refs/{}/{}",
            registry_url, package.organization, package.repository
        );

        info!("Listing versions of {}", source);
        let response = self.requester.request(&request_url).await?;

        Ok(extract_versions(&response))
    }

    /// Fetches `target` into a temporary directory and resolves it.
    ///
    /// Returns `None` when the host should keep its cached contents: a
    /// previously fetched semantic version cannot move, while branches and
    /// other floating refs are always fetched again.
    pub async fn fetch(
        &self,
        source: &str,
        target: &str,
        old_resolution: Option<&Resolution>,
    ) -> Result<Option<FetchResult>, ArtError> {
        if let Some(old) = old_resolution {
            if old.version.is_some() {
                debug!("Reusing cached contents of {}#{}", source, old.target);
                return Ok(None);
            }
        }

        let registry_url = self.config.registry.artifactory_url()?;
        let package = parse_source(source)?;

        let download_url = format!(
            "{}/binaries/{}/{}.git/{}",
            registry_url, package.organization, package.repository, target
        );

        let download_dir = self.temp.acquire("art-download")?;

        info!("Fetching {}#{}", source, target);
        let archive_path = self
            .downloader
            .download(&download_url, download_dir.path())
            .await?;

        let extract_dir = self.temp.acquire("art-extract")?;

        debug!("Extracting {}#{} to {:?}", source, target, extract_dir.path());
        self.archiver.extract_to(&archive_path, extract_dir.path())?;

        if let Err(err) = download_dir.close() {
            debug!("Failed to remove download directory: {}", err);
        }

        let resolution = Resolution {
            source: source.to_string(),
            target: target.to_string(),
            version: clean(target),
        };

        Ok(Some(FetchResult {
            contents: extract_dir.into_path(),
            resolution,
        }))
    }
}
