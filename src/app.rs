//! App core for the PassVault client.
//!
//! Central struct wiring configuration, the API client, and the credential
//! list, managing the session lifecycle.

use crate::api::client::{ApiClient, UserProfile};
use crate::config::Config;
use crate::managers::credential_list::CredentialList;
use crate::types::errors::ApiError;

/// Central application struct holding the transport client and list state.
pub struct App {
    pub api: ApiClient,
    pub list: CredentialList,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(Self {
            api: ApiClient::new(&config.api_url)?,
            list: CredentialList::new(),
        })
    }

    pub async fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.api.sign_up(name, email, password).await
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        self.api.login(email, password).await
    }

    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.api.get_user().await
    }

    /// Drops the session token and the page-session list state.
    pub fn logout(&mut self) {
        self.api.logout();
        self.list = CredentialList::new();
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.is_authenticated()
    }

    /// Refreshes the credential list and its strength indicators. An
    /// authentication failure clears the session, mirroring the redirect
    /// to login.
    pub async fn refresh_list(&mut self) -> Result<(), ApiError> {
        match self.list.refresh(&self.api).await {
            Err(err) if err.is_authentication() => {
                self.logout();
                Err(err)
            }
            other => other,
        }
    }
}
