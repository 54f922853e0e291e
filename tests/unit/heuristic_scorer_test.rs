//! Unit tests for the local heuristic scorer.
//!
//! Tests the five-check scoring, the six-step label table, the empty-input
//! case, and the weight formula.

use passvault::services::heuristic_scorer;
use passvault::types::strength::Provenance;
use rstest::rstest;

// ─── Score scenarios ───

/// One point each for: length >= 8, lowercase, uppercase, digit, special.
#[rstest]
#[case("abc", 1, "Weak", 20.0)]
#[case("a", 1, "Weak", 20.0)]
#[case("A", 1, "Weak", 20.0)]
#[case("7", 1, "Weak", 20.0)]
#[case("!", 1, "Weak", 20.0)]
#[case("password", 2, "Fair", 40.0)]
#[case("PASSWORD", 2, "Fair", 40.0)]
#[case("Pass1234", 4, "Strong", 80.0)]
#[case("aB3!", 4, "Strong", 80.0)]
#[case("Abc123!@", 5, "Very Strong", 100.0)]
fn test_score_scenarios(
    #[case] password: &str,
    #[case] score: u8,
    #[case] label: &str,
    #[case] percent: f32,
) {
    let result = heuristic_scorer::evaluate(password);
    assert_eq!(result.score, score, "score for {password:?}");
    assert_eq!(result.label, label, "label for {password:?}");
    assert_eq!(result.percent, percent, "percent for {password:?}");
}

// ─── Empty input ───

#[test]
fn test_empty_password_yields_none_label() {
    let result = heuristic_scorer::evaluate("");
    assert_eq!(result.score, 0);
    assert_eq!(result.label, "None");
    assert_eq!(result.percent, 0.0);
    assert_eq!(result.provenance, Provenance::Heuristic);
}

// ─── Check breakdown ───

#[test]
fn test_checks_breakdown_lowercase_only() {
    let result = heuristic_scorer::evaluate("abc");
    let checks = result.checks.expect("heuristic results carry checks");
    assert!(checks.lowercase);
    assert!(!checks.length);
    assert!(!checks.uppercase);
    assert!(!checks.digit);
    assert!(!checks.special);
}

#[test]
fn test_length_check_requires_eight_characters() {
    let seven = heuristic_scorer::evaluate("abcdefg");
    assert!(!seven.checks.unwrap().length);

    let eight = heuristic_scorer::evaluate("abcdefgh");
    assert!(eight.checks.unwrap().length);
}

#[test]
fn test_non_ascii_character_counts_as_special() {
    let result = heuristic_scorer::evaluate("naïve");
    assert!(result.checks.unwrap().special);
}

#[test]
fn test_whitespace_counts_as_special() {
    let result = heuristic_scorer::evaluate("correct horse battery staple");
    let checks = result.checks.unwrap();
    assert!(checks.special);
    assert_eq!(result.score, 3); // length + lowercase + special
}

// ─── Purity ───

#[test]
fn test_identical_input_yields_identical_result() {
    let first = heuristic_scorer::evaluate("Tr0ub4dor&3");
    let second = heuristic_scorer::evaluate("Tr0ub4dor&3");
    assert_eq!(first, second);
}

#[test]
fn test_heuristic_results_have_no_remote_fields() {
    let result = heuristic_scorer::evaluate("Abc123!@");
    assert!(result.suggestions.is_empty());
    assert!(result.warning.is_none());
    assert!(result.crack_time.is_none());
}
