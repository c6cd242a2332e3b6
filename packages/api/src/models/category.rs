use serde::{Deserialize, Serialize};

/// Read-only classification value referenced by [`crate::Applicant::category`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
