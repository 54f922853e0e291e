use zeroize::Zeroize;

/// In-memory holder for the backend session token.
///
/// The token is an opaque string issued at login/signup and attached to
/// every authenticated request. It is zeroized when cleared or dropped.
#[derive(Default)]
pub struct SessionStore {
    token: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { token: None }
    }

    pub fn set_token(&mut self, token: &str) {
        self.clear();
        self.token = Some(token.to_string());
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn clear(&mut self) {
        if let Some(mut token) = self.token.take() {
            token.zeroize();
        }
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        self.clear();
    }
}
