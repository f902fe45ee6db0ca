//! Rendered barcode images on their way to the messenger.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Utc;
use tempfile::NamedTempFile;

use crate::{barcode::BarcodeRequest, messaging::types::PhotoSource, Result};

/// How a rendered image is handed to the messenger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ArtifactMode {
    /// Upload straight from memory; nothing touches the disk.
    #[default]
    Memory,
    /// Write to a temporary file in this directory and upload from there.
    Spool(PathBuf),
}

enum Payload {
    Memory(Vec<u8>),
    Spooled(NamedTempFile),
}

/// A rendered barcode, valid for one reply.
///
/// In spool mode the backing file is owned by this value and removed when it
/// is dropped, so an early return or panic cannot leak it.
pub struct BarcodeArtifact {
    file_name: String,
    payload: Payload,
}

impl BarcodeArtifact {
    pub fn new(req: &BarcodeRequest, data: Vec<u8>, mode: &ArtifactMode) -> Result<Self> {
        let stem = format!("barcode_{}_{}", req.as_str(), Utc::now().timestamp_millis());
        let file_name = format!("{stem}.png");

        let payload = match mode {
            ArtifactMode::Memory => Payload::Memory(data),
            ArtifactMode::Spool(dir) => Payload::Spooled(spool(dir, &stem, &data)?),
        };

        Ok(Self { file_name, payload })
    }

    /// `barcode_<digits>_<unix millis>.png`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Backing file, in spool mode.
    pub fn path(&self) -> Option<&Path> {
        match &self.payload {
            Payload::Memory(_) => None,
            Payload::Spooled(f) => Some(f.path()),
        }
    }

    pub fn photo(&self) -> PhotoSource {
        match &self.payload {
            Payload::Memory(data) => PhotoSource::Bytes {
                file_name: self.file_name.clone(),
                data: data.clone(),
            },
            Payload::Spooled(f) => PhotoSource::Path(f.path().to_path_buf()),
        }
    }

    /// Release the artifact, reporting a failed file removal instead of ignoring it.
    pub fn close(self) -> Result<()> {
        match self.payload {
            Payload::Memory(_) => Ok(()),
            Payload::Spooled(f) => Ok(f.close()?),
        }
    }
}

// Random suffix from `tempfile` keeps concurrent requests for the same digits
// in the same millisecond apart.
fn spool(dir: &Path, stem: &str, data: &[u8]) -> Result<NamedTempFile> {
    fs::create_dir_all(dir)?;
    let mut file = tempfile::Builder::new()
        .prefix(&format!("{stem}_"))
        .suffix(".png")
        .tempfile_in(dir)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(s: &str) -> BarcodeRequest {
        BarcodeRequest::parse(s).unwrap()
    }

    #[test]
    fn memory_artifact_keeps_bytes() {
        let a = BarcodeArtifact::new(&req("123"), vec![1, 2, 3], &ArtifactMode::Memory).unwrap();
        assert!(a.file_name().starts_with("barcode_123_"));
        assert!(a.file_name().ends_with(".png"));
        assert!(a.path().is_none());
        match a.photo() {
            PhotoSource::Bytes { file_name, data } => {
                assert_eq!(file_name, a.file_name());
                assert_eq!(data, vec![1, 2, 3]);
            }
            other => panic!("unexpected photo source: {other:?}"),
        }
        a.close().unwrap();
    }

    #[test]
    fn spooled_artifact_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let mode = ArtifactMode::Spool(dir.path().join("nested"));

        let a = BarcodeArtifact::new(&req("42"), b"png".to_vec(), &mode).unwrap();
        let path = a.path().unwrap().to_path_buf();
        assert_eq!(std::fs::read(&path).unwrap(), b"png");
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("barcode_42_"), "{name}");
        assert!(name.ends_with(".png"), "{name}");
        assert_eq!(a.photo(), PhotoSource::Path(path.clone()));

        drop(a);
        assert!(!path.exists());
    }

    #[test]
    fn spooled_artifact_is_removed_on_close() {
        let dir = tempfile::tempdir().unwrap();
        let mode = ArtifactMode::Spool(dir.path().to_path_buf());

        let a = BarcodeArtifact::new(&req("7"), b"png".to_vec(), &mode).unwrap();
        let path = a.path().unwrap().to_path_buf();
        a.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn same_digits_get_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let mode = ArtifactMode::Spool(dir.path().to_path_buf());

        let a = BarcodeArtifact::new(&req("1"), vec![0], &mode).unwrap();
        let b = BarcodeArtifact::new(&req("1"), vec![0], &mode).unwrap();
        assert_ne!(a.path(), b.path());
    }
}
