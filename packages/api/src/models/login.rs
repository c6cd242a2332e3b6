//! Login request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST users/login/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of a `200 OK` login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Result of a login call that reached the server with a 2xx status.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// `200 OK` with a token.
    Authenticated(LoginResponse),
    /// Any other success status. The backend did not issue a token.
    Rejected { status: u16 },
}
