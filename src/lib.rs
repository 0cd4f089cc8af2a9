//! Domain Parts - A Public Suffix List domain parsing engine for Rust
//!
//! This library splits a hostname into its domain parts using
//! Public-Suffix-List-style rules:
//! - Top-level domain (the public suffix, e.g. `co.uk`)
//! - Second-level domain (the registrable label, e.g. `example`)
//! - Subdomain (everything before that, e.g. `sub`)
//!
//! The base domain (`example.co.uk`) gives callers a stable identity for a
//! site regardless of subdomain - for example, to match saved credentials
//! against the page being visited.
//!
//! # Example
//!
//! ```rust
//! use domain_parts::DomainParser;
//!
//! let suffixes = "\
//! // A few rules in public suffix list format
//! com
//! co.uk
//! *.compute.amazonaws.com
//! !city.kobe.jp
//! ";
//!
//! let parser = DomainParser::new();
//! parser.load_data_set(suffixes.as_bytes()).unwrap();
//!
//! let parts = parser.parse_host("sub.example.co.uk").unwrap();
//! assert_eq!(parts.top_level_domain, "co.uk");
//! assert_eq!(parts.second_level_domain, "example");
//! assert_eq!(parts.sub_domain, "sub");
//!
//! assert_eq!(
//!     parser.parse_base_domain("sub.example.co.uk"),
//!     Some("example.co.uk".to_string()),
//! );
//! ```
//!
//! # Rule Syntax
//!
//! One rule per line, following the format of
//! <https://publicsuffix.org/list/>:
//!
//! | Line | Category | Stored as |
//! |------|----------|-----------|
//! | `com` | Normal | `com` |
//! | `*.compute.amazonaws.com` | Wildcard | `compute.amazonaws.com` |
//! | `!city.kobe.jp` | Exception | `city.kobe.jp` |
//! | `// comment` or blank | Ignored | - |
//!
//! A wildcard rule matches any single label plus its stored suffix; an
//! exception rule carves an exact suffix back out of a wildcard's coverage.
//! The longest matching rule wins.
//!
//! # No match is not an error
//!
//! `parse_host` and `parse_base_domain` return `Option`: an unmatched host,
//! a bare suffix with no registrable label, or a missing rule set all yield
//! `None`. Callers should fall back to treating the full host as its own
//! identity. Only the explicit `load_data_set` APIs surface errors.

pub mod decompose;
pub mod domain;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod rules;
pub mod source;
pub mod types;

// Re-export commonly used items
pub use decompose::decompose;
pub use domain::{shared, DomainParser, DEFAULT_CACHE_SIZE};
pub use error::{DomainError, Result};
pub use matcher::find_best_match;
pub use parser::{parse_rule_file, parse_rule_text};
pub use rules::RuleSet;
pub use source::{
    FileSource, MemorySource, NilSource, RemoteSource, SuffixListSource, DEFAULT_LIST_URL,
    DEFAULT_UPDATE_INTERVAL,
};
#[cfg(feature = "bundled")]
pub use source::BundledSource;
pub use types::{DomainParts, RuleCategory, RuleMatch};
