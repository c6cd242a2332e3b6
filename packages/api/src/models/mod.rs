//! Wire models for the admission REST backend.

mod applicant;
mod category;
mod login;

pub use applicant::{Applicant, ApplicantPayload, WEBSITE_SOURCE};
pub use category::Category;
pub use login::{LoginOutcome, LoginRequest, LoginResponse};
