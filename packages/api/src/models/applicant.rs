//! # Applicant records
//!
//! ## [`Applicant`]
//!
//! One admission candidate exactly as the backend returns it from
//! `GET applicants/`. `id`, `created_at` and `updated_at` are server-assigned:
//! `id` is present if and only if the record has been persisted, and the
//! timestamps are never sent back.
//!
//! ## [`ApplicantPayload`]
//!
//! The body of `POST applicants/` and `PUT applicants/{id}/`. It carries every
//! editable field and nothing else. `source` is not taken from the record; it
//! is always [`WEBSITE_SOURCE`], the provenance value this dashboard writes.

use serde::{Deserialize, Serialize};

/// Provenance written on every create and update.
pub const WEBSITE_SOURCE: &str = "website";

/// Applicant record as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    /// ISO calendar date, e.g. "2006-04-17".
    pub date_of_birth: String,
    pub phone_number: String,
    pub secondary_phone_number: String,
    /// Category id.
    pub category: i64,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Applicant {
    /// Whether `search` matches any name (case-insensitive) or phone number
    /// (literal).
    ///
    /// `lowered` must be `search.to_lowercase()`; it is passed in so callers
    /// filtering a whole collection lowercase the term once.
    pub fn matches(&self, search: &str, lowered: &str) -> bool {
        self.first_name.to_lowercase().contains(lowered)
            || self.last_name.to_lowercase().contains(lowered)
            || self.middle_name.to_lowercase().contains(lowered)
            || self.phone_number.contains(search)
            || self.secondary_phone_number.contains(search)
    }
}

/// Create/update request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicantPayload {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub secondary_phone_number: String,
    pub category: i64,
    pub source: String,
}

impl ApplicantPayload {
    /// Build a payload from fields that are already validated.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        middle_name: String,
        date_of_birth: String,
        phone_number: String,
        secondary_phone_number: String,
        category: i64,
    ) -> Self {
        Self {
            first_name,
            last_name,
            middle_name,
            date_of_birth,
            phone_number,
            secondary_phone_number,
            category,
            source: WEBSITE_SOURCE.to_string(),
        }
    }
}

impl From<&Applicant> for ApplicantPayload {
    /// Drops `id` and the timestamps; `source` is forced to [`WEBSITE_SOURCE`].
    fn from(applicant: &Applicant) -> Self {
        Self::new(
            applicant.first_name.clone(),
            applicant.last_name.clone(),
            applicant.middle_name.clone(),
            applicant.date_of_birth.clone(),
            applicant.phone_number.clone(),
            applicant.secondary_phone_number.clone(),
            applicant.category,
        )
    }
}
