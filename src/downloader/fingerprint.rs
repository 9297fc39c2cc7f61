//! Content fingerprints for duplicate detection.
//!
//! Nothing is cached: every lookup re-reads every regular file in the
//! output directory.

use std::fmt;
use std::fs;
use std::path::Path;

use itertools::Itertools;
use md5::{Digest, Md5};

use crate::error::FetchError;

/// MD5 digest of a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint([u8; 16]);

impl Fingerprint {
    pub fn of(content: &[u8]) -> Self {
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&Md5::digest(content));
        Self(bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First 8 hex characters.
    pub fn short(&self) -> String {
        self.to_hex()[..8].to_string()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Name of the first regular file in `dir` (by name order) whose content has
/// the given fingerprint.
pub fn find_match(dir: &Path, fingerprint: &Fingerprint) -> Result<Option<String>, FetchError> {
    let entries = fs::read_dir(dir).map_err(|err| FetchError::io("list", dir, err))?;

    let files = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|path| path.is_file())
        .sorted();

    for path in files {
        let content = fs::read(&path).map_err(|err| FetchError::io("read", &path, err))?;

        if Fingerprint::of(&content) == *fingerprint {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Ok(Some(name));
        }
    }

    Ok(None)
}
