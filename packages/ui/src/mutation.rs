//! # Create, update and delete
//!
//! Every write follows the same pattern: call the backend, and only on a 2xx
//! status re-fetch the whole applicant list and close the modal. Nothing is
//! reconciled locally. Failures are logged and the caller's state is left
//! exactly as it was, so a failed save keeps the modal open with the form
//! intact and a failed delete keeps the row visible.
//!
//! The reload and close effects go through [`MutationSink`], which the
//! applicants view implements over its signals.

use std::future::Future;

use api::{AdmissionApi, ApiError, Applicant, ApplicantPayload};
use thiserror::Error;

use crate::draft::{MissingField, NewApplicant};

/// Effects a successful mutation triggers.
pub trait MutationSink {
    /// Re-fetch the canonical applicant list.
    fn reload(&mut self) -> impl Future<Output = ()>;
    /// Close the modal that submitted the mutation.
    fn close(&mut self);
}

#[derive(Debug, Error)]
pub enum MutationError {
    #[error(transparent)]
    Invalid(#[from] MissingField),
    #[error("no persisted applicant selected")]
    NoSelection,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Submit the add form. On success: one reload, then one close.
pub async fn create_applicant<A, S>(
    api: &A,
    form: &NewApplicant,
    sink: &mut S,
) -> Result<(), MutationError>
where
    A: AdmissionApi,
    S: MutationSink,
{
    let result = async {
        let payload = form.to_payload()?;
        api.create_applicant(&payload).await?;
        Ok::<(), MutationError>(())
    }
    .await;

    finish(result, sink, "add").await
}

/// Submit the edit form as a replace-by-id. The id and timestamps are not
/// sent and `source` is forced, whatever the seed carried.
pub async fn update_applicant<A, S>(
    api: &A,
    draft: Option<&Applicant>,
    sink: &mut S,
) -> Result<(), MutationError>
where
    A: AdmissionApi,
    S: MutationSink,
{
    let result = async {
        let applicant = draft.ok_or(MutationError::NoSelection)?;
        let id = applicant.id.ok_or(MutationError::NoSelection)?;
        api.update_applicant(id, &ApplicantPayload::from(applicant))
            .await?;
        Ok::<(), MutationError>(())
    }
    .await;

    finish(result, sink, "update").await
}

/// Delete by id. On success: one reload; there is no modal to close.
pub async fn delete_applicant<A, S>(api: &A, id: i64, sink: &mut S) -> Result<(), MutationError>
where
    A: AdmissionApi,
    S: MutationSink,
{
    match api.delete_applicant(id).await {
        Ok(()) => {
            sink.reload().await;
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to delete applicant {id}: {e}");
            Err(e.into())
        }
    }
}

async fn finish<S: MutationSink>(
    result: Result<(), MutationError>,
    sink: &mut S,
    action: &str,
) -> Result<(), MutationError> {
    match result {
        Ok(()) => {
            sink.reload().await;
            sink.close();
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to {action} applicant: {e}");
            Err(e)
        }
    }
}
