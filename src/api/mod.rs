// PassVault transport boundary
// Capability traits live here; the concrete reqwest client is in `client`.

pub mod client;
pub mod session;

use crate::types::credential::{Credential, CredentialDraft, CredentialUpdate};
use crate::types::errors::ApiError;
use crate::types::strength::StrengthReport;

/// Access to the backend's per-credential strength endpoint.
#[allow(async_fn_in_trait)]
pub trait StrengthApi {
    /// Requests the authoritative strength rating for one stored
    /// credential. The plaintext itself is never re-sent; the backend
    /// already holds it.
    async fn fetch_strength(&self, credential_id: &str) -> Result<StrengthReport, ApiError>;
}

/// Credential API: list, create, update, delete, plus strength lookups.
#[allow(async_fn_in_trait)]
pub trait VaultApi: StrengthApi {
    /// Fetches the caller's credentials, optionally filtered by a search
    /// term. Fails with `ApiError::Authentication` when the session token
    /// is rejected.
    async fn fetch_credentials(&self, search: &str) -> Result<Vec<Credential>, ApiError>;

    async fn create_credential(&self, draft: &CredentialDraft) -> Result<(), ApiError>;

    async fn update_credential(
        &self,
        credential_id: &str,
        update: &CredentialUpdate,
    ) -> Result<(), ApiError>;

    async fn delete_credential(&self, credential_id: &str) -> Result<(), ApiError>;
}
