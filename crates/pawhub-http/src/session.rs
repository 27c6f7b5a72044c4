//! Session context for platform requests.

use std::sync::{Arc, RwLock};

use tracing::{debug, instrument};

use pawhub_core::domain::User;
use pawhub_core::error::AuthError;
use pawhub_core::types::{AccessToken, ApiUrl};
use pawhub_core::Result;

use crate::client::HttpClient;
use crate::endpoints::{self, RegisterRequest};

/// An explicitly injected session context.
///
/// Holds the API base URL and the bearer credential the identity
/// provider issued. The credential is written at sign-in/sign-out and
/// read on every request; nothing here touches ambient storage, so tests
/// construct sessions directly and concurrency reasoning stays local.
///
/// Cloning is cheap and clones share the credential slot.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    base: ApiUrl,
    client: HttpClient,
    token: RwLock<Option<AccessToken>>,
}

impl Session {
    /// An anonymous session: public endpoints only.
    pub fn anonymous(base: ApiUrl) -> Self {
        Self::build(base, None)
    }

    /// A session restored from a persisted credential.
    pub fn with_token(base: ApiUrl, token: AccessToken) -> Self {
        Self::build(base, Some(token))
    }

    fn build(base: ApiUrl, token: Option<AccessToken>) -> Self {
        let client = HttpClient::new(base.clone());
        Self {
            inner: Arc::new(SessionInner {
                base,
                client,
                token: RwLock::new(token),
            }),
        }
    }

    /// The API base URL this session talks to.
    pub fn base(&self) -> &ApiUrl {
        &self.inner.base
    }

    /// True if a credential is attached.
    pub fn is_signed_in(&self) -> bool {
        self.inner.token.read().unwrap().is_some()
    }

    /// A snapshot of the current credential, for persistence.
    pub fn token(&self) -> Option<AccessToken> {
        self.inner.token.read().unwrap().clone()
    }

    /// Attach the credential the identity provider issued (sign-in).
    pub fn set_token(&self, token: AccessToken) {
        *self.inner.token.write().unwrap() = Some(token);
        debug!("credential attached");
    }

    /// Drop the credential (sign-out).
    pub fn clear_token(&self) {
        *self.inner.token.write().unwrap() = None;
        debug!("credential cleared");
    }

    pub(crate) fn client(&self) -> &HttpClient {
        &self.inner.client
    }

    /// The bearer string to attach, if signed in.
    pub(crate) fn bearer(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .unwrap()
            .as_ref()
            .map(|t| t.as_str().to_string())
    }

    /// The bearer string, or a fast-failing error for operations that
    /// require sign-in.
    pub(crate) fn require_bearer(&self) -> Result<String> {
        self.bearer().ok_or(AuthError::NotSignedIn.into())
    }

    /// Fetch the platform record of the signed-in identity.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User> {
        let token = self.require_bearer()?;
        self.client()
            .get(endpoints::AUTH_ME, &endpoints::NO_QUERY, Some(&token))
            .await
    }

    /// Register a freshly signed-up identity with the platform.
    #[instrument(skip(self, profile))]
    pub async fn register(&self, profile: &RegisterRequest) -> Result<User> {
        let token = self.require_bearer()?;
        self.client()
            .post(endpoints::AUTH_REGISTER, profile, Some(&token))
            .await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base", &self.inner.base)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
