//! HTTP client for the PassVault backend.
//!
//! Thin typed wrappers over the backend's auth and password endpoints.
//! All real logic (authentication, persistence, encryption, strength
//! scoring) lives server-side; this client only shapes requests, attaches
//! the session token, and maps failures onto [`ApiError`].

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::api::session::SessionStore;
use crate::api::{StrengthApi, VaultApi};
use crate::types::credential::{Credential, CredentialDraft, CredentialUpdate};
use crate::types::errors::ApiError;
use crate::types::strength::StrengthReport;

const AUTH_TOKEN_HEADER: &str = "auth-token";

/// Profile of the authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Wire record for a stored password. The backend calls the service label
/// `title`.
#[derive(Debug, Deserialize)]
struct PasswordRecord {
    id: String,
    title: String,
    username: String,
    password: String,
    #[serde(default, rename = "createdAt")]
    created_at: Option<String>,
}

impl From<PasswordRecord> for Credential {
    fn from(record: PasswordRecord) -> Self {
        Credential {
            id: record.id,
            service: record.title,
            username: record.username,
            secret: record.password,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default, rename = "authToken")]
    auth_token: Option<String>,
}

/// Error body: either `{message}` or `{errors: [{msg}]}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    msg: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .or_else(|| self.errors.into_iter().find_map(|detail| detail.msg))
    }
}

/// Reqwest-backed client holding the base URL and the session token.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session: SessionStore::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.session.token() {
            builder = builder.header(AUTH_TOKEN_HEADER, token);
        }
        builder
    }

    /// Sends a request and decodes the JSON body, mapping failures onto the
    /// client error taxonomy: transport faults become `Network`, 401/403
    /// become `Authentication`, everything else non-success becomes
    /// `Validation` carrying the backend's message when one is present.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Validation(format!("Malformed response body: {}", e)));
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(ApiError::Authentication(message))
        } else {
            Err(ApiError::Validation(message))
        }
    }

    // --- auth ---

    /// Registers a new account. Stores the returned session token on
    /// success so follow-up calls are authenticated.
    pub async fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let body = json!({ "name": name, "email": email, "password": password });
        let response: AuthResponse = self
            .send(self.request(Method::POST, "/api/auth/signUp").json(&body))
            .await?;
        if let Some(token) = response.auth_token {
            self.session.set_token(&token);
        }
        Ok(())
    }

    /// Exchanges email/password for a session token.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = json!({ "email": email, "password": password });
        let response: AuthResponse = self
            .send(self.request(Method::POST, "/api/auth/login").json(&body))
            .await?;
        if let Some(token) = response.auth_token {
            self.session.set_token(&token);
        }
        Ok(())
    }

    pub async fn get_user(&self) -> Result<UserProfile, ApiError> {
        self.send(self.request(Method::POST, "/api/auth/getUser"))
            .await
    }

    /// Discards the session token. No backend call is involved.
    pub fn logout(&mut self) {
        self.session.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

impl StrengthApi for ApiClient {
    async fn fetch_strength(&self, credential_id: &str) -> Result<StrengthReport, ApiError> {
        let path = format!("/api/password/checkstrength/{}", credential_id);
        debug!("Requesting strength for credential {}", credential_id);
        self.send(self.request(Method::POST, &path)).await
    }
}

impl VaultApi for ApiClient {
    async fn fetch_credentials(&self, search: &str) -> Result<Vec<Credential>, ApiError> {
        let mut builder = self.request(Method::GET, "/api/password/getPasswords");
        if !search.is_empty() {
            builder = builder.query(&[("q", search)]);
        }
        let records: Vec<PasswordRecord> = self.send(builder).await?;
        Ok(records.into_iter().map(Credential::from).collect())
    }

    async fn create_credential(&self, draft: &CredentialDraft) -> Result<(), ApiError> {
        let body = json!({
            "title": draft.service,
            "username": draft.username,
            "password": draft.secret,
        });
        let _: serde_json::Value = self
            .send(
                self.request(Method::POST, "/api/password/addPassword")
                    .json(&body),
            )
            .await?;
        Ok(())
    }

    async fn update_credential(
        &self,
        credential_id: &str,
        update: &CredentialUpdate,
    ) -> Result<(), ApiError> {
        let mut body = serde_json::Map::new();
        if let Some(service) = &update.service {
            body.insert("title".to_string(), json!(service));
        }
        if let Some(username) = &update.username {
            body.insert("username".to_string(), json!(username));
        }
        if let Some(secret) = &update.secret {
            body.insert("password".to_string(), json!(secret));
        }

        let path = format!("/api/password/updatePassword/{}", credential_id);
        let _: serde_json::Value = self
            .send(self.request(Method::PUT, &path).json(&body))
            .await?;
        Ok(())
    }

    async fn delete_credential(&self, credential_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/password/deletePassword/{}", credential_id);
        let _: serde_json::Value = self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}
