//! # Form drafts for the add and edit modals
//!
//! ## [`NewApplicant`]
//!
//! Add-form state. Text fields start empty and the category starts
//! unselected. [`NewApplicant::to_payload`] refuses to build a payload while a
//! required field is empty, matching the `required` attribute on every input.
//!
//! ## Edit drafts
//!
//! The edit form is seeded from the selected row, so its draft is an
//! `Option<Applicant>`. [`merge_field`] overwrites one field and returns the new
//! draft; a `None` draft stays `None`.
//!
//! Category values arrive as the `<select>` option value (the category id as
//! text). A value that does not parse leaves the previous category in place.

use api::{Applicant, ApplicantPayload};
use thiserror::Error;

/// An editable applicant field, named after its form input id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApplicantField {
    FirstName,
    LastName,
    MiddleName,
    DateOfBirth,
    PhoneNumber,
    SecondaryPhoneNumber,
    Category,
}

impl ApplicantField {
    /// Fields rendered as `<input>` elements.
    pub const TEXT: [ApplicantField; 6] = [
        ApplicantField::FirstName,
        ApplicantField::LastName,
        ApplicantField::MiddleName,
        ApplicantField::DateOfBirth,
        ApplicantField::PhoneNumber,
        ApplicantField::SecondaryPhoneNumber,
    ];

    /// Input id, identical to the JSON field name.
    pub fn id(self) -> &'static str {
        match self {
            ApplicantField::FirstName => "first_name",
            ApplicantField::LastName => "last_name",
            ApplicantField::MiddleName => "middle_name",
            ApplicantField::DateOfBirth => "date_of_birth",
            ApplicantField::PhoneNumber => "phone_number",
            ApplicantField::SecondaryPhoneNumber => "secondary_phone_number",
            ApplicantField::Category => "category",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApplicantField::FirstName => "First Name",
            ApplicantField::LastName => "Last Name",
            ApplicantField::MiddleName => "Middle Name",
            ApplicantField::DateOfBirth => "Date of Birth",
            ApplicantField::PhoneNumber => "Phone Number",
            ApplicantField::SecondaryPhoneNumber => "Secondary Phone Number",
            ApplicantField::Category => "Category",
        }
    }

    /// HTML input type.
    pub fn input_type(self) -> &'static str {
        match self {
            ApplicantField::DateOfBirth => "date",
            ApplicantField::PhoneNumber | ApplicantField::SecondaryPhoneNumber => "tel",
            _ => "text",
        }
    }
}

/// A required field was left empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{} is required", .0.label())]
pub struct MissingField(pub ApplicantField);

/// Add-form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewApplicant {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub secondary_phone_number: String,
    pub category: Option<i64>,
}

impl NewApplicant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style single-field update.
    pub fn with_field(mut self, field: ApplicantField, value: &str) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn set_field(&mut self, field: ApplicantField, value: &str) {
        let value = value.to_string();
        match field {
            ApplicantField::FirstName => self.first_name = value,
            ApplicantField::LastName => self.last_name = value,
            ApplicantField::MiddleName => self.middle_name = value,
            ApplicantField::DateOfBirth => self.date_of_birth = value,
            ApplicantField::PhoneNumber => self.phone_number = value,
            ApplicantField::SecondaryPhoneNumber => self.secondary_phone_number = value,
            ApplicantField::Category => self.category = parse_category(&value),
        }
    }

    /// Current input value of `field`.
    pub fn value(&self, field: ApplicantField) -> String {
        match field {
            ApplicantField::FirstName => self.first_name.clone(),
            ApplicantField::LastName => self.last_name.clone(),
            ApplicantField::MiddleName => self.middle_name.clone(),
            ApplicantField::DateOfBirth => self.date_of_birth.clone(),
            ApplicantField::PhoneNumber => self.phone_number.clone(),
            ApplicantField::SecondaryPhoneNumber => self.secondary_phone_number.clone(),
            ApplicantField::Category => self.category.map(|c| c.to_string()).unwrap_or_default(),
        }
    }

    /// The create payload, or the first empty required field.
    pub fn to_payload(&self) -> Result<ApplicantPayload, MissingField> {
        if let Some(field) = ApplicantField::TEXT
            .into_iter()
            .find(|field| self.value(*field).is_empty())
        {
            return Err(MissingField(field));
        }
        let category = self.category.ok_or(MissingField(ApplicantField::Category))?;

        Ok(ApplicantPayload::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.middle_name.clone(),
            self.date_of_birth.clone(),
            self.phone_number.clone(),
            self.secondary_phone_number.clone(),
            category,
        ))
    }
}

/// Overwrite one field of an edit draft.
pub fn merge_field(
    draft: Option<Applicant>,
    field: ApplicantField,
    value: &str,
) -> Option<Applicant> {
    let mut applicant = draft?;
    let text = value.to_string();
    match field {
        ApplicantField::FirstName => applicant.first_name = text,
        ApplicantField::LastName => applicant.last_name = text,
        ApplicantField::MiddleName => applicant.middle_name = text,
        ApplicantField::DateOfBirth => applicant.date_of_birth = text,
        ApplicantField::PhoneNumber => applicant.phone_number = text,
        ApplicantField::SecondaryPhoneNumber => applicant.secondary_phone_number = text,
        ApplicantField::Category => {
            if let Some(category) = parse_category(value) {
                applicant.category = category;
            }
        }
    }
    Some(applicant)
}

/// Current input value of `field` on a stored applicant.
pub fn field_value(applicant: &Applicant, field: ApplicantField) -> String {
    match field {
        ApplicantField::FirstName => applicant.first_name.clone(),
        ApplicantField::LastName => applicant.last_name.clone(),
        ApplicantField::MiddleName => applicant.middle_name.clone(),
        ApplicantField::DateOfBirth => applicant.date_of_birth.clone(),
        ApplicantField::PhoneNumber => applicant.phone_number.clone(),
        ApplicantField::SecondaryPhoneNumber => applicant.secondary_phone_number.clone(),
        ApplicantField::Category => applicant.category.to_string(),
    }
}

fn parse_category(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
