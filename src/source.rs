use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::error::{DomainError, Result};
use crate::parser::parse_rule_text;

/// Default refresh interval for a downloaded suffix list: 7 days
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Canonical upstream location of the public suffix list
pub const DEFAULT_LIST_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";

/// Provider of raw suffix list bytes.
///
/// The engine pulls from its source exactly when it needs a rule set and none
/// has been loaded; where the bytes come from (bundle, file, network) is the
/// source's business.
pub trait SuffixListSource: Send + Sync {
    /// Produce the suffix list bytes.
    fn load(&self) -> Result<Vec<u8>>;
}

/// Source backed by the suffix list snapshot compiled into the crate.
#[cfg(feature = "bundled")]
pub struct BundledSource;

#[cfg(feature = "bundled")]
impl SuffixListSource for BundledSource {
    fn load(&self) -> Result<Vec<u8>> {
        Ok(include_bytes!("../data/public_suffix_list.dat").to_vec())
    }
}

/// Source that reads the suffix list from a file path.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SuffixListSource for FileSource {
    fn load(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }
}

/// In-memory source for testing.
pub struct MemorySource {
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl SuffixListSource for MemorySource {
    fn load(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// Nil source - every load fails.
pub struct NilSource;

impl SuffixListSource for NilSource {
    fn load(&self) -> Result<Vec<u8>> {
        Err(DomainError::DataUnavailable(
            "no suffix list source configured".to_string(),
        ))
    }
}

/// Source that keeps an on-disk copy of the suffix list fresh by downloading
/// it from an upstream URL.
///
/// The cached file is refreshed when it is missing, empty, or older than the
/// update interval. Downloads land in a temporary file, are verified by
/// parsing, and are renamed into place; if a refresh fails and a previous
/// copy exists, the stale copy is served instead.
pub struct RemoteSource {
    url: String,
    cache_path: PathBuf,
    update_interval: Duration,
}

impl RemoteSource {
    pub fn new(cache_path: impl AsRef<Path>) -> Self {
        Self {
            url: DEFAULT_LIST_URL.to_string(),
            cache_path: cache_path.as_ref().to_path_buf(),
            update_interval: DEFAULT_UPDATE_INTERVAL,
        }
    }

    /// Set a custom download URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the refresh interval for the cached file.
    /// Default is 7 days (DEFAULT_UPDATE_INTERVAL).
    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    /// Check if the cached file needs a download.
    fn should_refresh(&self) -> bool {
        match fs::metadata(&self.cache_path) {
            Ok(meta) => {
                if meta.len() == 0 {
                    return true;
                }
                match meta.modified() {
                    Ok(mtime) => SystemTime::now()
                        .duration_since(mtime)
                        .map(|d| d > self.update_interval)
                        .unwrap_or(true),
                    Err(_) => true,
                }
            }
            Err(_) => true,
        }
    }

    /// Download the list into the cache path.
    fn refresh(&self) -> Result<()> {
        log::debug!("downloading suffix list from {}", self.url);

        if let Some(parent) = self.cache_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Download to a temporary file first.
        let tmp_path = self.cache_path.with_extension("tmp");

        let response = ureq::get(&self.url)
            .call()
            .map_err(|e| DomainError::DownloadFailed(e.to_string()))?;

        let (_, body) = response.into_parts();
        let mut reader = body.into_reader();
        let mut file = fs::File::create(&tmp_path)?;
        std::io::copy(&mut reader, &mut file)?;
        file.flush()?;
        drop(file);

        // Verify the download parses before putting it in place.
        let bytes = fs::read(&tmp_path)?;
        if let Err(e) = parse_rule_text(&bytes) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DomainError::DownloadFailed(format!(
                "downloaded suffix list failed verification: {}",
                e
            )));
        }

        fs::rename(&tmp_path, &self.cache_path)?;

        log::debug!("suffix list saved to {}", self.cache_path.display());
        Ok(())
    }
}

impl SuffixListSource for RemoteSource {
    fn load(&self) -> Result<Vec<u8>> {
        if self.should_refresh() {
            if let Err(e) = self.refresh() {
                if !self.cache_path.exists() {
                    return Err(e);
                }
                log::warn!("suffix list refresh failed, using existing copy: {}", e);
            }
        }
        Ok(fs::read(&self.cache_path)?)
    }
}
