use crate::types::{DomainParts, RuleCategory, RuleMatch};

/// Split a host into its domain parts using the winning rule.
///
/// Returns `None` when the host has no label preceding the matched suffix:
/// a host that *is* a bare rule string ("com" against rule "com") never
/// decomposes, and a wildcard rule requires one extra label beyond the
/// stored suffix. There is no partial result in these cases.
pub fn decompose(host: &str, rule_match: &RuleMatch) -> Option<DomainParts> {
    // Locate the dot that separates the TLD from the rest of the host,
    // searching backwards from the end of the string.
    let tld_dot = match rule_match.category {
        RuleCategory::Exception | RuleCategory::Normal => {
            host.rfind(&format!(".{}", rule_match.suffix))?
        }
        RuleCategory::Wildcard => {
            // The stored suffix is the non-wildcard portion. Find it first,
            // then back up one more label within the remaining prefix to
            // cover the wildcard-matched label.
            let non_wildcard_dot = host.rfind(&format!(".{}", rule_match.suffix))?;
            host[..non_wildcard_dot].rfind('.')?
        }
    };

    let top_level_domain = &host[tld_dot + 1..];

    // Whatever precedes the TLD:
    // - 0 parts: just a TLD, no domain or subdomain.
    // - 1 part: the domain, no subdomain.
    // - 2+ parts: the last part is the domain, the rest (joined) the subdomain.
    let prefix = &host[..tld_dot];
    let mut parts: Vec<&str> = prefix.split('.').filter(|p| !p.is_empty()).collect();
    let second_level_domain = parts.pop().unwrap_or("");
    let sub_domain = parts.join(".");

    Some(DomainParts {
        top_level_domain: top_level_domain.to_string(),
        second_level_domain: second_level_domain.to_string(),
        sub_domain,
    })
}
