//! Remote strength cache.
//!
//! Keeps at most one [`StrengthResult`] per visible credential, fetched
//! from the backend's strength endpoint one credential at a time. A failed
//! fetch substitutes a rating from the local heuristic scorer so the
//! indicator never stays blank over a transient backend fault.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::api::StrengthApi;
use crate::services::heuristic_scorer;
use crate::types::credential::Credential;
use crate::types::strength::{Provenance, StrengthReport, StrengthResult};

/// Label/color table indexed by remote score (0-4). The remote scale tops
/// out one step below the heuristic's; the two tables are intentionally
/// kept separate.
const REMOTE_SCALE: [(&str, &str); 5] = [
    ("Very Weak", "#ef4444"),
    ("Weak", "#f97316"),
    ("Fair", "#eab308"),
    ("Good", "#3b82f6"),
    ("Strong", "#22c55e"),
];

/// Maps a backend strength report onto a [`StrengthResult`].
///
/// A missing score counts as 0. The weight formula (score+1)/5 differs from
/// the heuristic's score/5: on the remote scale 0 is the weakest observed
/// rating, not the absence of one, so it still fills a fifth of the bar.
/// A backend-supplied label wins over the table label.
pub fn map_remote_report(report: &StrengthReport) -> StrengthResult {
    let score = report.score.unwrap_or(0);
    let (table_label, color) = REMOTE_SCALE[usize::from(score).min(REMOTE_SCALE.len() - 1)];

    StrengthResult {
        score,
        label: report
            .strength
            .clone()
            .unwrap_or_else(|| table_label.to_string()),
        color: color.to_string(),
        percent: (f32::from(score) + 1.0) * 20.0,
        suggestions: report.suggestions.clone(),
        warning: report.warning.clone(),
        crack_time: report.crack_time.clone(),
        checks: None,
        provenance: Provenance::Remote,
    }
}

/// Per-credential strength state: the merged result map plus the set of
/// identifiers with an outstanding remote request.
///
/// Only this cache and the list view's eviction step write to the map; the
/// rendering side reads through [`results`](Self::results) and
/// [`loading`](Self::loading) and must tolerate a rating changing from
/// heuristic to remote between reads.
pub struct StrengthCache {
    results: HashMap<String, StrengthResult>,
    loading: HashSet<String>,
}

impl StrengthCache {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
            loading: HashSet::new(),
        }
    }

    /// Read-only view of the merged strength map.
    pub fn results(&self) -> &HashMap<String, StrengthResult> {
        &self.results
    }

    pub fn get(&self, credential_id: &str) -> Option<&StrengthResult> {
        self.results.get(credential_id)
    }

    /// Identifiers currently awaiting a remote result.
    pub fn loading(&self) -> &HashSet<String> {
        &self.loading
    }

    pub fn is_loading(&self, credential_id: &str) -> bool {
        self.loading.contains(credential_id)
    }

    /// Drops a credential's rating, if any. Called when the credential's
    /// secret changes or the credential is deleted, so a stale rating is
    /// never shown.
    pub fn evict(&mut self, credential_id: &str) {
        self.results.remove(credential_id);
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Full resynchronization against a (changed) credential collection:
    /// prior contents are discarded wholesale, then every credential is
    /// fetched in collection order. Full invalidation trades some redundant
    /// requests for never carrying an entry of a deleted credential.
    pub async fn resync<A: StrengthApi>(&mut self, api: &A, credentials: &[Credential]) {
        self.results.clear();
        for credential in credentials {
            self.refresh_one(api, credentials, &credential.id).await;
        }
    }

    /// Fetches one credential's strength and stores the outcome.
    ///
    /// Skips when a request for the same identifier is already outstanding,
    /// which also dedupes a collection that repeats an id. On failure the
    /// credential's plaintext is looked up in `credentials` and scored
    /// locally instead; a failure for one credential never blocks another.
    /// The identifier leaves the loading set however the fetch settles.
    pub async fn refresh_one<A: StrengthApi>(
        &mut self,
        api: &A,
        credentials: &[Credential],
        credential_id: &str,
    ) {
        if !self.loading.insert(credential_id.to_string()) {
            return;
        }

        match api.fetch_strength(credential_id).await {
            Ok(report) => {
                self.results
                    .insert(credential_id.to_string(), map_remote_report(&report));
            }
            Err(err) => {
                warn!(
                    "Strength lookup failed for credential {}: {}",
                    credential_id, err
                );
                if let Some(credential) = credentials.iter().find(|c| c.id == credential_id) {
                    self.results.insert(
                        credential_id.to_string(),
                        heuristic_scorer::evaluate(&credential.secret),
                    );
                }
            }
        }

        self.loading.remove(credential_id);
    }
}

impl Default for StrengthCache {
    fn default() -> Self {
        Self::new()
    }
}
