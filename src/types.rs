/// Rule categories found in a public suffix list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// Exception rule (`!city.kobe.jp`) - carves an exact suffix out of a
    /// broader wildcard rule's coverage
    Exception,
    /// Normal rule (`co.uk`) - a literal suffix
    Normal,
    /// Wildcard rule (`*.compute.amazonaws.com`) - any single label plus the
    /// stored suffix
    Wildcard,
}

impl RuleCategory {
    /// All categories, in match-priority order.
    ///
    /// When two rules of the same length match a host, the earlier category
    /// in this array wins.
    pub const ALL: [RuleCategory; 3] = [
        RuleCategory::Exception,
        RuleCategory::Normal,
        RuleCategory::Wildcard,
    ];
}

/// The winning rule for a host, produced by the matcher and consumed by the
/// decomposer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Category of the matched rule
    pub category: RuleCategory,
    /// The matched suffix as stored in the rule set. For wildcard rules this
    /// is the non-wildcard portion (e.g. `compute.amazonaws.com` for
    /// `*.compute.amazonaws.com`).
    pub suffix: String,
}

impl RuleMatch {
    pub fn new(category: RuleCategory, suffix: impl Into<String>) -> Self {
        Self {
            category,
            suffix: suffix.into(),
        }
    }
}

/// The breakdown of a hostname into its domain parts.
///
/// Example: `sub.example.co.uk`
/// - Top-level domain: `co.uk`
/// - Second-level domain: `example`
/// - Subdomain: `sub`
/// - Base domain: `example.co.uk`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    /// The effective top-level domain (public suffix) of the host
    pub top_level_domain: String,
    /// The registrable label directly beneath the top-level domain
    pub second_level_domain: String,
    /// Any labels preceding the second-level domain, joined with `.`; empty
    /// when the host has none
    pub sub_domain: String,
}

impl DomainParts {
    /// The base domain (eTLD+1), constructed from the second-level and
    /// top-level domains.
    pub fn domain(&self) -> String {
        format!("{}.{}", self.second_level_domain, self.top_level_domain)
    }
}
