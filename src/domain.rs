//! Domain parsing facade.
//!
//! Owns the currently-loaded rule set and answers domain part queries
//! against it.

use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use lru::LruCache;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

use crate::decompose::decompose;
use crate::error::Result;
use crate::matcher::find_best_match;
use crate::parser::{parse_rule_file, parse_rule_text};
use crate::rules::RuleSet;
use crate::source::SuffixListSource;
use crate::types::DomainParts;

/// Default LRU cache size for per-host results
pub const DEFAULT_CACHE_SIZE: usize = 1024;

static SHARED: Lazy<DomainParser> = Lazy::new(DomainParser::new);

/// A process-wide parser instance for callers that don't need their own.
///
/// Uses the default data source; loading a data set through it is visible to
/// every caller of this function.
pub fn shared() -> &'static DomainParser {
    &SHARED
}

/// Parses hostnames into their domain parts against a loaded suffix rule set.
///
/// The rule set is loaded explicitly via [`DomainParser::load_data_set`] or
/// lazily from the parser's [`SuffixListSource`] on first use. Parse results
/// are LRU-cached per host until the next load. A parser is internally
/// synchronized and can be shared across threads.
pub struct DomainParser {
    rule_set: RwLock<Option<Arc<RuleSet>>>,
    cache: Mutex<LruCache<String, Option<DomainParts>>>,
    source: Box<dyn SuffixListSource>,
}

impl DomainParser {
    /// Create a parser backed by the default suffix list source.
    ///
    /// With the `bundled` feature (on by default) that is the snapshot
    /// compiled into the crate; without it the parser has no default data
    /// and returns `None` for every host until a data set is loaded.
    pub fn new() -> Self {
        #[cfg(feature = "bundled")]
        {
            Self::with_source(crate::source::BundledSource)
        }
        #[cfg(not(feature = "bundled"))]
        {
            Self::with_source(crate::source::NilSource)
        }
    }

    /// Create a parser backed by the given suffix list source.
    pub fn with_source(source: impl SuffixListSource + 'static) -> Self {
        Self {
            rule_set: RwLock::new(None),
            cache: Mutex::new(LruCache::new(cache_capacity(DEFAULT_CACHE_SIZE))),
            source: Box::new(source),
        }
    }

    /// Set the per-host result cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache = Mutex::new(LruCache::new(cache_capacity(size)));
        self
    }

    /// Parse `bytes` as suffix list text and replace the current rule set.
    ///
    /// On failure the previously-loaded rule set stays in place.
    pub fn load_data_set(&self, bytes: &[u8]) -> Result<()> {
        let rules = parse_rule_text(bytes)?;
        self.install(rules);
        Ok(())
    }

    /// Load a suffix list from a file path and replace the current rule set.
    pub fn load_data_set_from_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let rules = parse_rule_file(path)?;
        self.install(rules);
        Ok(())
    }

    /// The current rule set, lazily loading from the source if none has been
    /// loaded yet.
    ///
    /// A failed lazy load is swallowed - base domain computation is best
    /// effort, so the caller just sees `None` results until a load succeeds.
    pub fn rule_set(&self) -> Option<Arc<RuleSet>> {
        if let Some(rules) = self.rule_set.read().as_ref() {
            return Some(rules.clone());
        }

        let loaded = self
            .source
            .load()
            .and_then(|bytes| parse_rule_text(&bytes));
        let rules = match loaded {
            Ok(rules) => Arc::new(rules),
            Err(e) => {
                log::debug!("suffix list unavailable from default source: {}", e);
                return None;
            }
        };

        let mut slot = self.rule_set.write();
        // Another thread may have loaded while we parsed.
        if let Some(existing) = slot.as_ref() {
            return Some(existing.clone());
        }
        log::debug!("lazily loaded suffix list with {} rules", rules.len());
        *slot = Some(rules.clone());
        Some(rules)
    }

    /// Parse a host to get the breakdown of its domain parts.
    ///
    /// Returns `None` when no rule set is available, no rule matches, or the
    /// host has no label above the matched suffix.
    pub fn parse_host(&self, host: &str) -> Option<DomainParts> {
        // Callers hand over already-lowercased hosts, but matching is exact.
        // Normalize defensively, only allocating when uppercase is present.
        let lowered;
        let host = if host.bytes().any(|b| b.is_ascii_uppercase()) {
            lowered = host.to_lowercase();
            &lowered
        } else {
            host
        };

        let rules = self.rule_set()?;

        let mut cache = self.cache.lock();

        if let Some(cached) = cache.get(host) {
            return cached.clone();
        }

        // Cache miss - compute while holding the lock. Matching is CPU-only,
        // and this keeps concurrent lookups of the same host from all
        // recomputing it.
        let result =
            find_best_match(host, &rules).and_then(|rule_match| decompose(host, &rule_match));
        cache.put(host.to_string(), result.clone());

        result
    }

    /// Parse the base domain (eTLD+1) of a host.
    pub fn parse_base_domain(&self, host: &str) -> Option<String> {
        self.parse_host(host).map(|parts| parts.domain())
    }

    fn install(&self, rules: RuleSet) {
        log::debug!("loaded suffix list with {} rules", rules.len());
        *self.rule_set.write() = Some(Arc::new(rules));
        self.cache.lock().clear();
    }
}

impl Default for DomainParser {
    fn default() -> Self {
        Self::new()
    }
}

fn cache_capacity(size: usize) -> NonZeroUsize {
    NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN)
}
