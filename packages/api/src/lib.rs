//! # API crate: typed access to the admission REST backend
//!
//! The dashboard never talks to its own server: every operation is a direct
//! call to a remote REST backend. This crate defines what those calls look
//! like so the `ui` crate can be written, and tested, against traits rather
//! than HTTP.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: `Applicant`, `ApplicantPayload`, `Category`, login request/response |
//! | [`client`] | `HttpClient`, the reqwest implementation, and `Endpoints` URL building |
//! | [`error`] | `ApiError` (transport failure or non-success status) |
//!
//! ## Traits
//!
//! - [`AdmissionApi`]: list/create/update/delete applicants, list categories
//! - [`AuthApi`]: exchange username and password for a bearer token
//!
//! Both return plain futures so implementations can use `async fn`; the
//! dashboard runs on a single-threaded executor and never needs `Send`.

use std::future::Future;

pub mod client;
pub mod error;
pub mod models;

pub use client::{Endpoints, HttpClient};
pub use error::ApiError;
pub use models::{
    Applicant, ApplicantPayload, Category, LoginOutcome, LoginRequest, LoginResponse,
    WEBSITE_SOURCE,
};

/// Applicant and category resources.
pub trait AdmissionApi {
    fn list_applicants(&self) -> impl Future<Output = Result<Vec<Applicant>, ApiError>>;
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, ApiError>>;
    fn create_applicant(
        &self,
        payload: &ApplicantPayload,
    ) -> impl Future<Output = Result<(), ApiError>>;
    /// Replace the applicant with the given id.
    fn update_applicant(
        &self,
        id: i64,
        payload: &ApplicantPayload,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn delete_applicant(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;
}

/// Credential exchange.
pub trait AuthApi {
    fn login(&self, request: &LoginRequest) -> impl Future<Output = Result<LoginOutcome, ApiError>>;
}
