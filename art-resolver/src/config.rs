use crate::errors::ArtError;
use art_resolver_core::errors::ErrorKind;
use art_resolver_core::registry::RegistryConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RcFile {
    registry: Option<RegistryConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub registry: RegistryConfig,
}

impl Config {
    pub fn new(rc_file_content: &str) -> Result<Config, ArtError> {
        match serde_json::from_str::<RcFile>(rc_file_content) {
            Ok(RcFile {
                registry: Some(registry),
            }) => Ok(Config { registry }),
            Ok(RcFile { registry: None }) => Err(ArtError::new(
                ErrorKind::NoConfig,
                String::from(
                    "No registry section in .artrc, please set registry.register or registry.search",
                ),
            )),
            Err(_) => Err(ArtError::new(
                ErrorKind::NoConfig,
                String::from("Fail to parse .artrc, please make sure it is a valid JSON"),
            )),
        }
    }

    pub fn from_file(rc_file_path: &Path) -> Result<Config, ArtError> {
        let content = fs::read_to_string(rc_file_path)?;

        Config::new(&content)
    }
}
