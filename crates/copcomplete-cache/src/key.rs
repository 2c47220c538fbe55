//! Content-derived cache keys
//!
//! A key is the SHA-256 of the schema version followed by the hex digest of
//! every governing file that exists, in the order the files were given. Two
//! projects with byte-identical governing files share a key; any byte change
//! in any of them produces a new key and leaves the old entry unreachable.

use std::fmt;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::{CacheError, Result};

/// Digest naming a cached registry snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Hex SHA-256 of `data`
    pub fn digest(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        format!("{:x}", hasher.finalize())
    }

    /// Key over a schema version and already computed file digests
    pub fn from_components<I, S>(schema_version: u32, digests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = schema_version.to_string();
        for digest in digests {
            joined.push_str(digest.as_ref());
        }
        Self(Self::digest(joined.as_bytes()))
    }

    /// Key over a schema version and the contents of `files`
    ///
    /// Files that do not exist are skipped; any other read failure is an
    /// error.
    pub fn from_files<P: AsRef<Path>>(schema_version: u32, files: &[P]) -> Result<Self> {
        let mut digests = Vec::with_capacity(files.len());

        for path in files {
            let path = path.as_ref();
            match std::fs::read(path) {
                Ok(content) => digests.push(Self::digest(&content)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(CacheError::GoverningFile {
                        path: path.display().to_string(),
                        source,
                    })
                }
            }
        }

        Ok(Self::from_components(schema_version, digests))
    }

    /// Wrap an existing digest string
    pub fn parse(value: &str) -> Result<Self> {
        let valid = value.len() == 64 && value.bytes().all(|b| b.is_ascii_hexdigit());
        if !valid {
            return Err(CacheError::InvalidKey {
                key: value.to_string(),
            });
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    /// The hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
