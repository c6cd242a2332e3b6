//! This crate contains the shared UI and view logic for the admission
//! dashboard.
//!
//! The framework-independent core (session guard, applicant view model, form
//! drafts, mutation and login flows) is written against the `api` traits and
//! `store` sessions so it can be unit tested without a browser. The Dioxus
//! components and views below are thin wiring over that core.

pub mod applicants;
pub mod draft;
pub mod guard;
pub mod login;
pub mod mutation;

mod session;
pub use session::{make_session, use_client, use_session, AdmissionProvider, AppSession, PlatformStore};

mod applicant_form;
pub use applicant_form::{AddApplicantModal, EditApplicantModal};

mod applicant_table;
pub use applicant_table::{ApplicantRow, ApplicantTable};

pub mod views;

pub use applicants::{filter_applicants, ApplicantsViewModel};
pub use guard::{GuardState, SessionGate, SessionGuard};
pub use login::{logout, submit_login, LoginError, LoginForm};
pub use mutation::{MutationError, MutationSink};

#[cfg(test)]
mod testing;
