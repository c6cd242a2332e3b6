//! # HTTP client for the admission backend
//!
//! [`HttpClient`] implements [`AdmissionApi`] and [`AuthApi`] with a shared
//! [`reqwest::Client`]. On WASM reqwest uses the browser's `fetch`, on native it
//! uses hyper, so the same code serves the web build and native tests.
//!
//! ## Endpoints
//!
//! | Call | Method | URL |
//! |------|--------|-----|
//! | `list_applicants` | GET | `{admission}/applicants/` |
//! | `list_categories` | GET | `{admission}/categories/` |
//! | `create_applicant` | POST | `{admission}/applicants/` |
//! | `update_applicant` | PUT | `{admission}/applicants/{id}/` |
//! | `delete_applicant` | DELETE | `{admission}/applicants/{id}/` |
//! | `login` | POST | `{auth}/users/login/` |
//!
//! Mutations treat any 2xx status as success and ignore the response body.
//! No request carries the session token; the backend does not ask for one.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use store::AdmissionConfig;

use crate::error::ApiError;
use crate::models::{
    Applicant, ApplicantPayload, Category, LoginOutcome, LoginRequest, LoginResponse,
};
use crate::{AdmissionApi, AuthApi};

/// Resolved endpoint URLs.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints {
    admission: String,
    auth: String,
}

impl Endpoints {
    /// Trailing slashes on the bases are ignored.
    pub fn new(admission_base: &str, auth_base: &str) -> Self {
        Self {
            admission: admission_base.trim_end_matches('/').to_string(),
            auth: auth_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AdmissionConfig) -> Self {
        Self::new(&config.api.admission_url, &config.api.auth_url)
    }

    pub fn applicants(&self) -> String {
        format!("{}/applicants/", self.admission)
    }

    pub fn applicant(&self, id: i64) -> String {
        format!("{}/applicants/{id}/", self.admission)
    }

    pub fn categories(&self) -> String {
        format!("{}/categories/", self.admission)
    }

    pub fn login(&self) -> String {
        format!("{}/users/login/", self.auth)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_config(&AdmissionConfig::default())
    }
}

/// reqwest-backed implementation of the backend traits.
#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    http: Client,
    endpoints: Endpoints,
}

impl HttpClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            http: Client::new(),
            endpoints,
        }
    }

    pub fn from_config(config: &AdmissionConfig) -> Self {
        Self::new(Endpoints::from_config(config))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        tracing::debug!("GET {url}");
        let response = success(self.http.get(&url).send().await?)?;
        Ok(response.json().await?)
    }
}

/// Map a non-2xx status to [`ApiError::Status`].
fn check_status(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

fn success(response: Response) -> Result<Response, ApiError> {
    check_status(response.status())?;
    Ok(response)
}

/// Only `200 OK` carries a token. Any other 2xx answer is a rejection.
fn login_rejection(status: StatusCode) -> Option<LoginOutcome> {
    (status != StatusCode::OK).then(|| LoginOutcome::Rejected {
        status: status.as_u16(),
    })
}

impl AdmissionApi for HttpClient {
    async fn list_applicants(&self) -> Result<Vec<Applicant>, ApiError> {
        self.get_json(self.endpoints.applicants()).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(self.endpoints.categories()).await
    }

    async fn create_applicant(&self, payload: &ApplicantPayload) -> Result<(), ApiError> {
        let url = self.endpoints.applicants();
        tracing::debug!("POST {url}");
        success(self.http.post(&url).json(payload).send().await?)?;
        Ok(())
    }

    async fn update_applicant(&self, id: i64, payload: &ApplicantPayload) -> Result<(), ApiError> {
        let url = self.endpoints.applicant(id);
        tracing::debug!("PUT {url}");
        success(self.http.put(&url).json(payload).send().await?)?;
        Ok(())
    }

    async fn delete_applicant(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoints.applicant(id);
        tracing::debug!("DELETE {url}");
        success(self.http.delete(&url).send().await?)?;
        Ok(())
    }
}

impl AuthApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome, ApiError> {
        let url = self.endpoints.login();
        tracing::debug!("POST {url}");
        let response = success(self.http.post(&url).json(request).send().await?)?;

        if let Some(rejected) = login_rejection(response.status()) {
            return Ok(rejected);
        }
        let body: LoginResponse = response.json().await?;
        Ok(LoginOutcome::Authenticated(body))
    }
}
