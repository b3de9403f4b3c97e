use juery::pattern::{ANCHOR, Pattern, PatternToken, matches};

fn path(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

fn is_match(tokens: &[&str], segments: &[&str]) -> bool {
    Pattern::new(tokens).matches(&path(segments))
}

// ========================================================================
// Token parsing
// ========================================================================

#[test]
fn test_bare_token() {
    let token = PatternToken::parse("name");
    assert_eq!(token.key, "name");
    assert!(!token.anchored);
}

#[test]
fn test_anchored_token() {
    let token = PatternToken::parse("^name");
    assert_eq!(token.key, "name");
    assert!(token.anchored);
    assert_eq!(token.to_string(), "^name");
}

#[test]
fn test_only_one_anchor_is_stripped() {
    let token = PatternToken::parse("^^name");
    assert_eq!(token.key, "^name");
    assert!(token.anchored);
}

#[test]
fn test_lone_anchor_matches_empty_key() {
    let token = PatternToken::parse("^");
    assert_eq!(token.key, "");
    assert!(token.anchored);
    assert!(is_match(&["^"], &[""]));
}

#[test]
fn test_pattern_from_str_splits_on_whitespace() {
    let pattern: Pattern = "users  ^0\t^name".parse().unwrap();

    assert_eq!(pattern, Pattern::new(["users", "^0", "^name"]));
    assert_eq!(pattern.to_string(), "users ^0 ^name");
    assert_eq!(pattern.tokens()[1].key, "0");
    assert_eq!(ANCHOR, '^');
}

#[test]
fn test_pattern_collects_from_iterator() {
    let pattern: Pattern = vec!["a".to_string(), "^b".to_string()].into_iter().collect();
    assert_eq!(pattern.len(), 2);
    assert!(pattern.tokens()[1].anchored);
}

// ========================================================================
// Matching
// ========================================================================

#[test]
fn test_unanchored_tokens_skip_levels() {
    assert!(is_match(&["a", "c"], &["a", "b", "c"]));
}

#[test]
fn test_anchored_token_requires_adjacency() {
    assert!(!is_match(&["a", "^c"], &["a", "b", "c"]));
    assert!(is_match(&["b", "^c"], &["a", "b", "c"]));
}

#[test]
fn test_pattern_exhausted_before_path_end_fails() {
    assert!(!is_match(&["a"], &["a", "b"]));
    assert!(!is_match(&["b"], &["a", "b", "c"]));
}

#[test]
fn test_single_token_matches_single_segment() {
    assert!(is_match(&["a"], &["a"]));
}

#[test]
fn test_first_token_aligns_anywhere() {
    assert!(is_match(&["c"], &["a", "b", "c"]));
}

#[test]
fn test_anchored_first_token_must_match_root_segment() {
    assert!(!is_match(&["^b"], &["a", "b"]));
    assert!(is_match(&["^a", "^b"], &["a", "b"]));
}

#[test]
fn test_pattern_longer_than_path_fails() {
    assert!(!is_match(&["a", "b", "c"], &["a", "b"]));
}

#[test]
fn test_empty_pattern_never_matches() {
    assert!(!is_match(&[], &["a"]));
    assert!(Pattern::default().is_empty());
}

#[test]
fn test_comparison_ignores_case() {
    assert!(is_match(&["A", "^B"], &["a", "b"]));
    assert!(is_match(&["user"], &["USER"]));
    assert!(is_match(&["ÉCOLE"], &["école"]));
}

#[test]
fn test_matching_is_greedy() {
    // "c" is consumed at position 1, leaving position 2 with no token left
    assert!(!is_match(&["a", "c"], &["a", "c", "c"]));
    // "x" binds to the first x, so "^y" meets "z" and fails
    assert!(!is_match(&["x", "^y"], &["x", "z", "x", "y"]));
}

#[test]
fn test_array_index_tokens() {
    assert!(is_match(&["users", "^0", "^name"], &["users", "0", "name"]));
    assert!(!is_match(&["users", "^1", "^name"], &["users", "0", "name"]));
}

#[test]
fn test_free_function_matches() {
    assert!(matches(&["a", "b", "c"], &["a", "^b", "^c"]));
    assert!(!matches(&["a", "b", "c"], &["a", "^c"]));
}
