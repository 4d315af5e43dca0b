use crate::errors::ArtError;
use art_resolver_core::errors::ErrorKind;
use flate2::read::GzDecoder;
use std::fs;
use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;
use tar::Archive;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4b, 0x03, 0x04];

pub trait Archiver: Send + Sync {
    fn extract_to(&self, archive_path: &Path, target_path: &Path) -> Result<(), ArtError>;
}

#[derive(Debug, Clone)]
pub struct DefaultArchiver {}

impl DefaultArchiver {
    pub fn new() -> DefaultArchiver {
        DefaultArchiver {}
    }

    fn extract_tar<R: Read>(&self, reader: R, target_path: &Path) -> Result<(), ArtError> {
        let mut archive = Archive::new(reader);

        match archive.unpack(target_path) {
            Ok(()) => Ok(()),
            Err(err) => Err(ArtError::new(ErrorKind::Extract, err.to_string())),
        }
    }

    fn extract_zip(&self, archive_path: &Path, target_path: &Path) -> Result<(), ArtError> {
        let file = File::open(archive_path)?;
        let mut archive = zip::ZipArchive::new(file)?;

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;

            // Entries escaping the target directory are skipped.
            let entry_path = match entry.enclosed_name() {
                Some(path) => path.to_owned(),
                None => continue,
            };

            let file_path = target_path.join(entry_path);

            if entry.is_dir() {
                fs::create_dir_all(&file_path)?;
            } else {
                if let Some(parent) = file_path.parent() {
                    fs::create_dir_all(parent)?;
                }

                let mut file = File::create(&file_path)?;
                io::copy(&mut entry, &mut file)?;
            }
        }

        Ok(())
    }
}

impl Archiver for DefaultArchiver {
    /// The download URL's last segment is a bare target name, so the format
    /// is sniffed from the archive's magic bytes rather than its extension.
    fn extract_to(&self, archive_path: &Path, target_path: &Path) -> Result<(), ArtError> {
        let mut magic = [0u8; 4];
        let read = File::open(archive_path)?.read(&mut magic)?;

        if magic[..read].starts_with(&GZIP_MAGIC) {
            let tar_gz = File::open(archive_path)?;

            self.extract_tar(GzDecoder::new(tar_gz), target_path)
        } else if magic[..read] == ZIP_MAGIC {
            self.extract_zip(archive_path, target_path)
        } else {
            let tar = File::open(archive_path)?;

            self.extract_tar(tar, target_path)
        }
    }
}
