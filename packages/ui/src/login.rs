//! Login and logout.

use api::{AuthApi, LoginOutcome, LoginRequest};
use store::{KeyValueStore, Session};
use thiserror::Error;

/// Credential form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Message shown inline on the login card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoginError {
    /// One or more empty fields, messages joined with ", ".
    #[error("{0}")]
    Invalid(String),
    #[error("Login failed. Please check your credentials.")]
    Rejected,
    #[error("An error occurred. Please try again later.")]
    Unavailable,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<LoginRequest, LoginError> {
        let mut messages = Vec::new();
        if self.username.is_empty() {
            messages.push("Username is required");
        }
        if self.password.is_empty() {
            messages.push("Password is required");
        }
        if !messages.is_empty() {
            return Err(LoginError::Invalid(messages.join(", ")));
        }

        Ok(LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

/// Validate, exchange the credentials for a token and store it in `session`.
/// The caller navigates to the dashboard on `Ok`.
pub async fn submit_login<A, S>(
    api: &A,
    session: &Session<S>,
    form: &LoginForm,
) -> Result<(), LoginError>
where
    A: AuthApi,
    S: KeyValueStore,
{
    let request = form.validate()?;

    match api.login(&request).await {
        Ok(LoginOutcome::Authenticated(response)) => {
            tracing::info!("Login successful");
            session.set(&response.token);
            Ok(())
        }
        Ok(LoginOutcome::Rejected { status }) => {
            tracing::warn!("Login returned HTTP {status} without a token");
            Err(LoginError::Rejected)
        }
        Err(e) => {
            tracing::error!("An error occurred during login: {e}");
            Err(LoginError::Unavailable)
        }
    }
}

/// Forget the token and leave through `redirect`.
pub fn logout<S: KeyValueStore, R: FnOnce()>(session: &Session<S>, redirect: R) {
    session.clear();
    redirect();
}
