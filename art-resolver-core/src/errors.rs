use std::fmt::{Display, Error, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoConfig,
    InvalidSource,
    Request,
    Download,
    Extract,
    Io,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NoConfig => "ENOCONFIG",
            ErrorKind::InvalidSource => "EINVEND",
            ErrorKind::Request => "EREQUEST",
            ErrorKind::Download => "EDOWNLOAD",
            ErrorKind::Extract => "EEXTRACT",
            ErrorKind::Io => "EIO",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtCoreError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ArtCoreError {
    pub fn new(kind: ErrorKind, message: String) -> ArtCoreError {
        ArtCoreError { kind, message }
    }
}

impl Display for ArtCoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}: {}", self.kind.code(), self.message)
    }
}
