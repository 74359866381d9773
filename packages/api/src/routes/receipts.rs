use axum::{
    extract::{Multipart, State},
    http::StatusCode,
};
use bytes::Bytes;

use crate::error::ApiError;
use crate::state::AppState;
use crate::storage::UploadError;

/// The receipt listing renders nothing yet.
#[tracing::instrument(name = "GET /receipt")]
pub async fn list_receipts() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Stores the `file` part of a multipart request in the receipt bucket.
///
/// Registered on GET, and reads the request body regardless of the verb.
#[tracing::instrument(name = "GET /receipt_upload", skip(state, multipart))]
pub async fn upload_receipt(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<&'static str, ApiError> {
    let Some(receipts) = state.receipts.as_ref() else {
        return Err(ApiError::service_unavailable(
            "receipt storage is not configured",
        ));
    };

    let mut stored = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let body: Bytes = field.bytes().await?;
        stored = Some(receipts.put_receipt(&filename, body).await?);
        break;
    }

    match stored {
        Some(_) => Ok("uploaded"),
        None => Err(UploadError::MissingFile.into()),
    }
}
