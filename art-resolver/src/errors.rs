use art_resolver_core::errors::{ArtCoreError, ErrorKind};
use reqwest;
use std::fmt::{Display, Error, Formatter};
use std::io;
use zip::result::ZipError;

#[derive(Debug, Clone, PartialEq)]
pub struct ArtError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ArtError {
    pub fn new(kind: ErrorKind, message: String) -> ArtError {
        ArtError { kind, message }
    }
}

impl Display for ArtError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}: {}", self.kind.code(), self.message)
    }
}

impl From<io::Error> for ArtError {
    fn from(error: io::Error) -> Self {
        ArtError::new(ErrorKind::Io, error.to_string())
    }
}

impl From<reqwest::Error> for ArtError {
    fn from(error: reqwest::Error) -> Self {
        ArtError::new(ErrorKind::Request, error.to_string())
    }
}

impl From<ZipError> for ArtError {
    fn from(error: ZipError) -> Self {
        ArtError::new(ErrorKind::Extract, error.to_string())
    }
}

impl From<ArtCoreError> for ArtError {
    fn from(error: ArtCoreError) -> Self {
        ArtError::new(error.kind, error.message)
    }
}
