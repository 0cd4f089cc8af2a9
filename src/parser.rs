use std::fs;
use std::path::Path;

use crate::error::{DomainError, Result};
use crate::rules::RuleSet;

/// Parse public suffix list text into a [`RuleSet`].
///
/// The input follows the PSL format: one rule per line, `//` comment lines
/// and blank lines ignored, `*.` prefixes marking wildcard rules and `!`
/// prefixes marking exception rules.
///
/// Fails with [`DomainError::DataUnavailable`] if the bytes are not valid
/// UTF-8 or decode to an empty string.
pub fn parse_rule_text(bytes: &[u8]) -> Result<RuleSet> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| DomainError::DataUnavailable(format!("suffix list is not UTF-8: {}", e)))?;
    if text.is_empty() {
        return Err(DomainError::DataUnavailable(
            "suffix list is empty".to_string(),
        ));
    }

    let mut exceptions = Vec::new();
    let mut normals = Vec::new();
    let mut wildcards = Vec::new();

    for line in text.lines() {
        // Strip out comment and whitespace-only lines. Trimming decides
        // skip/keep only; the stored rule text is never trimmed.
        if line.starts_with("//") || line.trim().is_empty() {
            continue;
        }

        // Classify by leading marker and store just the suffix.
        if line.starts_with('*') {
            // Drop "*.".
            wildcards.push(drop_chars(line, 2).to_string());
        } else if let Some(rest) = line.strip_prefix('!') {
            exceptions.push(rest.to_string());
        } else {
            normals.push(line.to_string());
        }
    }

    Ok(RuleSet::new(exceptions, normals, wildcards))
}

/// Parse a public suffix list from a file.
pub fn parse_rule_file(path: impl AsRef<Path>) -> Result<RuleSet> {
    let bytes = fs::read(path.as_ref())?;
    parse_rule_text(&bytes)
}

/// Drop the first `n` characters of `s` (char-boundary safe).
fn drop_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(i, _)| &s[i..])
}
