use serde::{Deserialize, Serialize};

/// Where a strength rating came from: the backend's scorer, or the local
/// heuristic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    Remote,
    Heuristic,
}

/// Which of the five heuristic checks a password satisfied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthChecks {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl StrengthChecks {
    /// Number of checks satisfied.
    pub fn satisfied(&self) -> u8 {
        [
            self.length,
            self.lowercase,
            self.uppercase,
            self.digit,
            self.special,
        ]
        .iter()
        .filter(|passed| **passed)
        .count() as u8
    }
}

/// Strength rating for a single credential. At most one of these exists per
/// credential identifier at any time; new ratings replace old ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub score: u8,
    pub label: String,
    pub color: String,
    /// Visual weight as a percentage (0-100) for the indicator bar.
    pub percent: f32,
    pub suggestions: Vec<String>,
    pub warning: Option<String>,
    pub crack_time: Option<String>,
    /// Per-check breakdown, present only on heuristic ratings.
    pub checks: Option<StrengthChecks>,
    pub provenance: Provenance,
}

/// Wire payload returned by the backend's strength endpoint. Every field is
/// optional; a missing score is treated as 0.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrengthReport {
    #[serde(default)]
    pub score: Option<u8>,
    /// Backend-supplied label, preferred over the client's lookup table.
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub crack_time: Option<String>,
}
