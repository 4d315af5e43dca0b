use crate::errors::ArtError;
use std::env;
use std::path::PathBuf;
use tempdir::TempDir;

/// Hands out scoped temporary directories under a single root.
///
/// A directory is removed when its handle drops; `TempDir::into_path`
/// detaches one that must outlive the call.
pub struct TempSpace {
    root: PathBuf,
}

impl TempSpace {
    pub fn new() -> TempSpace {
        TempSpace {
            root: env::temp_dir(),
        }
    }

    pub fn in_dir(root: PathBuf) -> TempSpace {
        TempSpace { root }
    }

    pub fn acquire(&self, prefix: &str) -> Result<TempDir, ArtError> {
        let dir = TempDir::new_in(&self.root, prefix)?;

        Ok(dir)
    }
}
