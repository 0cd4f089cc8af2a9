//! End-to-end tests driving the parser the way an application would: load a
//! rule set once, then resolve base domains for a stream of hosts.

use domain_parts::{DomainParser, DomainParts, NilSource, RuleCategory};

const DATA_SET: &str = "\
com
co.uk
com.ai
*.compute.amazonaws.com
!city.kobe.jp
";

fn loaded_parser() -> DomainParser {
    let parser = DomainParser::with_source(NilSource);
    parser.load_data_set(DATA_SET.as_bytes()).unwrap();
    parser
}

fn parts(tld: &str, second: &str, sub: &str) -> DomainParts {
    DomainParts {
        top_level_domain: tld.to_string(),
        second_level_domain: second.to_string(),
        sub_domain: sub.to_string(),
    }
}

#[test]
fn test_normal_rule_host() {
    let parser = loaded_parser();

    assert_eq!(
        parser.parse_host("example.com"),
        Some(parts("com", "example", ""))
    );
    assert_eq!(
        parser.parse_base_domain("example.com"),
        Some("example.com".to_string())
    );
}

#[test]
fn test_multi_label_suffix_host() {
    let parser = loaded_parser();

    assert_eq!(
        parser.parse_host("sub.example.co.uk"),
        Some(parts("co.uk", "example", "sub"))
    );
    assert_eq!(
        parser.parse_base_domain("sub.example.co.uk"),
        Some("example.co.uk".to_string())
    );
}

#[test]
fn test_wildcard_rule_host() {
    let parser = loaded_parser();

    assert_eq!(
        parser.parse_host("sub.example.compute.amazonaws.com"),
        Some(parts("example.compute.amazonaws.com", "sub", ""))
    );
    assert_eq!(
        parser.parse_host("foo.sub.example.compute.amazonaws.com"),
        Some(parts("example.compute.amazonaws.com", "sub", "foo"))
    );
    assert_eq!(
        parser.parse_base_domain("foo.sub.example.compute.amazonaws.com"),
        Some("sub.example.compute.amazonaws.com".to_string())
    );
}

#[test]
fn test_exception_rule_host() {
    let parser = loaded_parser();

    assert_eq!(
        parser.parse_host("example.city.kobe.jp"),
        Some(parts("city.kobe.jp", "example", ""))
    );
    assert_eq!(
        parser.parse_host("sub.example.city.kobe.jp"),
        Some(parts("city.kobe.jp", "example", "sub"))
    );
    assert_eq!(
        parser.parse_base_domain("sub.example.city.kobe.jp"),
        Some("example.city.kobe.jp".to_string())
    );
}

#[test]
fn test_bare_suffix_hosts_do_not_decompose() {
    let parser = loaded_parser();

    // A host that is exactly a rule string has no registrable label.
    assert_eq!(parser.parse_host("com"), None);
    assert_eq!(parser.parse_host("co.uk"), None);
    assert_eq!(parser.parse_host("city.kobe.jp"), None);

    // A wildcard rule mandates a label beyond the stored suffix.
    assert_eq!(parser.parse_host("compute.amazonaws.com"), None);
}

#[test]
fn test_unmatched_hosts() {
    let parser = loaded_parser();

    assert_eq!(parser.parse_host("example.test"), None);
    assert_eq!(parser.parse_host("localhost"), None);
    assert_eq!(parser.parse_base_domain("intranet.local"), None);
}

#[test]
fn test_no_rule_set_available() {
    // No load, and the source never produces data: every query degrades to
    // None rather than erroring.
    let parser = DomainParser::with_source(NilSource);
    assert_eq!(parser.parse_host("example.com"), None);
    assert_eq!(parser.parse_base_domain("sub.example.co.uk"), None);
}

#[test]
fn test_longest_match_beats_shorter_rule() {
    let parser = DomainParser::with_source(NilSource);
    parser.load_data_set(b"uk\nco.uk").unwrap();

    // "co.uk" (2 parts) wins over "uk" (1 part), so "example" is the
    // registrable label.
    assert_eq!(
        parser.parse_host("sub.example.co.uk"),
        Some(parts("co.uk", "example", "sub"))
    );
}

#[test]
fn test_rule_categories_exposed_through_match() {
    use domain_parts::{find_best_match, parse_rule_text};

    let rules = parse_rule_text(DATA_SET.as_bytes()).unwrap();

    let m = find_best_match("example.city.kobe.jp", &rules).unwrap();
    assert_eq!(m.category, RuleCategory::Exception);

    let m = find_best_match("example.com", &rules).unwrap();
    assert_eq!(m.category, RuleCategory::Normal);

    let m = find_best_match("a.b.compute.amazonaws.com", &rules).unwrap();
    assert_eq!(m.category, RuleCategory::Wildcard);
}

#[test]
fn test_reload_replaces_rules_wholesale() {
    let parser = loaded_parser();
    assert_eq!(
        parser.parse_base_domain("example.com"),
        Some("example.com".to_string())
    );

    parser.load_data_set(b"org").unwrap();
    assert_eq!(parser.parse_base_domain("example.com"), None);
    assert_eq!(
        parser.parse_base_domain("example.org"),
        Some("example.org".to_string())
    );
}

#[test]
fn test_load_from_file() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("public_suffix_list.dat");
    let mut f = std::fs::File::create(&path).unwrap();
    write!(f, "{}", DATA_SET).unwrap();
    drop(f);

    let parser = DomainParser::with_source(NilSource);
    parser.load_data_set_from_path(&path).unwrap();
    assert_eq!(
        parser.parse_base_domain("sub.example.co.uk"),
        Some("example.co.uk".to_string())
    );
}

#[cfg(feature = "bundled")]
#[test]
fn test_bundled_data_set_covers_common_hosts() {
    let parser = DomainParser::new();

    assert_eq!(
        parser.parse_base_domain("www.example.com"),
        Some("example.com".to_string())
    );
    assert_eq!(
        parser.parse_base_domain("news.bbc.co.uk"),
        Some("bbc.co.uk".to_string())
    );
    assert_eq!(
        parser.parse_host("bucket.s3.amazonaws.com"),
        Some(parts("s3.amazonaws.com", "bucket", ""))
    );
    assert_eq!(
        parser.parse_base_domain("user.github.io"),
        Some("user.github.io".to_string())
    );
}
