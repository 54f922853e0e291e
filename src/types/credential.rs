use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A stored credential as the client sees it: the backend-assigned
/// identifier plus the service/username/secret triple. The authoritative
/// copy lives in the backend; this value only exists for the page session.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    #[zeroize(skip)]
    pub id: String,
    #[zeroize(skip)]
    pub service: String,
    #[zeroize(skip)]
    pub username: String,
    pub secret: String,
    #[zeroize(skip)]
    pub created_at: Option<String>,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("service", &self.service)
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Fields for a credential that does not exist yet.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CredentialDraft {
    #[zeroize(skip)]
    pub service: String,
    #[zeroize(skip)]
    pub username: String,
    pub secret: String,
}

/// Partial update for an existing credential. `None` fields are left
/// untouched by the backend.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct CredentialUpdate {
    #[zeroize(skip)]
    pub service: Option<String>,
    #[zeroize(skip)]
    pub username: Option<String>,
    pub secret: Option<String>,
}
