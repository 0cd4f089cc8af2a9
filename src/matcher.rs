use crate::rules::RuleSet;
use crate::types::{RuleCategory, RuleMatch};

/// Find the best matching rule for a host.
///
/// The host's labels are walked from the rightmost (most general) label
/// toward the first, accumulating a partial domain at each step and testing
/// it against every rule category. Among all matches the longest (most label
/// parts) wins, so a specific rule like `co.uk` always beats a shorter,
/// more general one like `uk`. At equal length the categories tie-break in
/// [`RuleCategory::ALL`] order.
///
/// Expects `host` to be lowercase already; the rule set stores lowercase
/// suffixes and lookups are exact.
pub fn find_best_match(host: &str, rules: &RuleSet) -> Option<RuleMatch> {
    let mut partial_domain = String::with_capacity(host.len());
    let mut best: Option<RuleMatch> = None;
    let mut best_parts = 0;

    for (i, label) in host.rsplit('.').enumerate() {
        if partial_domain.is_empty() {
            partial_domain.insert_str(0, label);
        } else {
            partial_domain.insert_str(0, ".");
            partial_domain.insert_str(0, label);
        }
        let part_count = i + 1;

        // Each step adds a label, so a later match is strictly longer and
        // replaces the current best; within a step the first matching
        // category wins.
        for category in RuleCategory::ALL {
            if rules.is_match(&partial_domain, category) && part_count > best_parts {
                best = Some(RuleMatch::new(category, partial_domain.clone()));
                best_parts = part_count;
            }
        }
    }

    best
}
