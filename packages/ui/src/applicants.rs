//! # Applicant list and search state
//!
//! [`ApplicantsViewModel`] owns the two collections the dashboard shows: the
//! applicants and the category lookup table. Each is replaced wholesale by its
//! load operation; a failed load is logged and leaves the previous collection
//! in place, so the table keeps showing stale rows instead of going blank.
//!
//! Searching never touches the network. [`filter_applicants`] re-scans the
//! whole collection on every keystroke and keeps fetch order.

use api::{AdmissionApi, ApiError, Applicant, Category};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicantsViewModel {
    applicants: Vec<Applicant>,
    categories: Vec<Category>,
}

impl ApplicantsViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Replace the applicants with a fetch result. Errors keep the old list.
    pub fn apply_applicants(&mut self, result: Result<Vec<Applicant>, ApiError>) {
        match result {
            Ok(applicants) => self.applicants = applicants,
            Err(e) => tracing::error!("Failed to fetch applicants: {e}"),
        }
    }

    /// Replace the categories with a fetch result. Errors keep the old list.
    pub fn apply_categories(&mut self, result: Result<Vec<Category>, ApiError>) {
        match result {
            Ok(categories) => self.categories = categories,
            Err(e) => tracing::error!("Failed to fetch categories: {e}"),
        }
    }

    pub async fn load_applicants<A: AdmissionApi>(&mut self, api: &A) {
        let result = api.list_applicants().await;
        self.apply_applicants(result);
    }

    pub async fn load_categories<A: AdmissionApi>(&mut self, api: &A) {
        let result = api.list_categories().await;
        self.apply_categories(result);
    }

    pub fn filtered(&self, search: &str) -> Vec<&Applicant> {
        filter_applicants(&self.applicants, search)
    }

    pub fn category_name(&self, id: i64) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Category name for display, or the raw id when it is not in the table.
    pub fn category_label(&self, id: i64) -> String {
        self.category_name(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }
}

/// Applicants whose names contain `search` (ignoring case) or whose phone
/// numbers contain it literally. An empty search returns everything.
pub fn filter_applicants<'a>(applicants: &'a [Applicant], search: &str) -> Vec<&'a Applicant> {
    if search.is_empty() {
        return applicants.iter().collect();
    }
    let lowered = search.to_lowercase();
    applicants
        .iter()
        .filter(|applicant| applicant.matches(search, &lowered))
        .collect()
}
