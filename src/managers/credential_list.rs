//! Credential list state and mutation orchestration.
//!
//! Owns the visible credential collection, the search term, the strength
//! cache, and the transient alert raised after each mutation attempt. Every
//! successful mutation evicts the touched credential's strength entry and
//! then re-fetches the whole collection, which re-triggers a full cache
//! resynchronization.

use std::collections::{HashMap, HashSet};

use crate::api::VaultApi;
use crate::services::strength_cache::StrengthCache;
use crate::types::alert::Alert;
use crate::types::credential::{Credential, CredentialDraft, CredentialUpdate};
use crate::types::errors::ApiError;
use crate::types::strength::StrengthResult;

pub struct CredentialList {
    credentials: Vec<Credential>,
    cache: StrengthCache,
    search: String,
    alert: Option<Alert>,
}

impl CredentialList {
    pub fn new() -> Self {
        Self {
            credentials: Vec::new(),
            cache: StrengthCache::new(),
            search: String::new(),
            alert: None,
        }
    }

    // --- read side ---

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn find(&self, credential_id: &str) -> Option<&Credential> {
        self.credentials.iter().find(|c| c.id == credential_id)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    /// Merged strength map, keyed by credential id.
    pub fn strengths(&self) -> &HashMap<String, StrengthResult> {
        self.cache.results()
    }

    pub fn strength_of(&self, credential_id: &str) -> Option<&StrengthResult> {
        self.cache.get(credential_id)
    }

    /// Ids still awaiting a remote strength result.
    pub fn loading(&self) -> &HashSet<String> {
        self.cache.loading()
    }

    /// The current alert, if one is showing and has not auto-dismissed.
    pub fn current_alert(&self) -> Option<&Alert> {
        self.alert.as_ref().filter(|alert| !alert.is_expired())
    }

    // --- synchronization ---

    /// Re-fetches the collection for the current search term and fully
    /// resynchronizes the strength cache against it.
    ///
    /// Authentication failures propagate untouched so the caller can route
    /// back to login; any other failure raises an error alert and leaves
    /// the collection and cache as they were.
    pub async fn refresh<A: VaultApi>(&mut self, api: &A) -> Result<(), ApiError> {
        match api.fetch_credentials(&self.search).await {
            Ok(credentials) => {
                self.credentials = credentials;
                self.cache.resync(api, &self.credentials).await;
                Ok(())
            }
            Err(err) if err.is_authentication() => Err(err),
            Err(err) => {
                self.alert = Some(Alert::error(err.to_string()));
                Err(err)
            }
        }
    }

    // --- mutations ---

    /// Creates a credential, then refreshes the collection. On failure the
    /// collection and cache are unchanged and an error alert is raised.
    pub async fn add<A: VaultApi>(
        &mut self,
        api: &A,
        draft: CredentialDraft,
    ) -> Result<(), ApiError> {
        match api.create_credential(&draft).await {
            Ok(()) => {
                self.alert = Some(Alert::success("Password added successfully!"));
                self.refresh(api).await
            }
            Err(err) => {
                self.alert = Some(Alert::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Applies a partial update to a credential. On success the old
    /// strength entry is evicted before the list refresh, so a stale rating
    /// is never shown against a changed secret.
    pub async fn save_edit<A: VaultApi>(
        &mut self,
        api: &A,
        credential_id: &str,
        update: CredentialUpdate,
    ) -> Result<(), ApiError> {
        match api.update_credential(credential_id, &update).await {
            Ok(()) => {
                self.cache.evict(credential_id);
                self.alert = Some(Alert::success("Password updated successfully!"));
                self.refresh(api).await
            }
            Err(err) => {
                self.alert = Some(Alert::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Deletes a credential. On success its strength entry is evicted
    /// before the list refresh, so no entry for the removed id survives.
    pub async fn delete<A: VaultApi>(
        &mut self,
        api: &A,
        credential_id: &str,
    ) -> Result<(), ApiError> {
        match api.delete_credential(credential_id).await {
            Ok(()) => {
                self.cache.evict(credential_id);
                self.alert = Some(Alert::success("Password deleted successfully!"));
                self.refresh(api).await
            }
            Err(err) => {
                self.alert = Some(Alert::error(err.to_string()));
                Err(err)
            }
        }
    }
}

impl Default for CredentialList {
    fn default() -> Self {
        Self::new()
    }
}
