use crate::errors::{ArtCoreError, ErrorKind};
use serde::Deserialize;

const ARTIFACTORY_MARKER: &'static str = "artifactory";

/// Registry section of the `.artrc` configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub register: String,
    #[serde(default)]
    pub search: Vec<String>,
}

impl RegistryConfig {
    /// URL of the configured Artifactory endpoint.
    ///
    /// The `register` entry wins; otherwise the first `search` entry naming
    /// an Artifactory host is used.
    pub fn artifactory_url(&self) -> Result<&str, ArtCoreError> {
        if self.register.contains(ARTIFACTORY_MARKER) {
            return Ok(&self.register);
        }

        match self
            .search
            .iter()
            .find(|entry| entry.contains(ARTIFACTORY_MARKER))
        {
            Some(url) => Ok(url),
            None => Err(ArtCoreError::new(
                ErrorKind::NoConfig,
                String::from(
                    "Artifactory registry not configured, set it in registry.register or registry.search of .artrc",
                ),
            )),
        }
    }
}
