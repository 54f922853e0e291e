//! Local password-strength heuristic.
//!
//! Pure fallback scorer used when the backend's strength endpoint is
//! unavailable. Scores a plaintext against five independent checks and maps
//! the count onto a six-step label scale.

use crate::types::strength::{Provenance, StrengthChecks, StrengthResult};

/// Label/color table indexed by heuristic score (0-5).
const HEURISTIC_SCALE: [(&str, &str); 6] = [
    ("Very Weak", "#ef4444"),
    ("Weak", "#f97316"),
    ("Fair", "#eab308"),
    ("Good", "#3b82f6"),
    ("Strong", "#22c55e"),
    ("Very Strong", "#16a34a"),
];

const NONE_COLOR: &str = "#6b7280";

/// Scores a plaintext password: one point each for length >= 8, a lowercase
/// letter, an uppercase letter, a digit, and a character outside the
/// alphanumeric set.
///
/// Deterministic and side-effect free. An empty password scores 0 with the
/// label "None" rather than raising an error.
pub fn evaluate(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult {
            score: 0,
            label: "None".to_string(),
            color: NONE_COLOR.to_string(),
            percent: 0.0,
            suggestions: Vec::new(),
            warning: None,
            crack_time: None,
            checks: Some(StrengthChecks::default()),
            provenance: Provenance::Heuristic,
        };
    }

    let checks = StrengthChecks {
        length: password.chars().count() >= 8,
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        digit: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
    };
    let score = checks.satisfied();
    let (label, color) = HEURISTIC_SCALE[usize::from(score).min(HEURISTIC_SCALE.len() - 1)];

    StrengthResult {
        score,
        label: label.to_string(),
        color: color.to_string(),
        percent: f32::from(score) * 20.0,
        suggestions: Vec::new(),
        warning: None,
        crack_time: None,
        checks: Some(checks),
        provenance: Provenance::Heuristic,
    }
}
