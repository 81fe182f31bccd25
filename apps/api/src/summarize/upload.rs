use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;

/// Multipart field carrying the document.
pub const FILE_FIELD: &str = "file";

/// A PDF upload that passed the filename check.
#[derive(Debug)]
pub struct PdfUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Pulls the `file` field out of a multipart body and checks its extension.
/// Other fields are skipped.
pub async fn read_pdf_upload(mut multipart: Multipart) -> Result<PdfUpload, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if name != FILE_FIELD {
            warn!("Ignoring unknown multipart field: {name}");
            continue;
        }
        let file_name = field.file_name().unwrap_or("").to_string();
        let bytes = field.bytes().await?;
        upload = Some(PdfUpload { file_name, bytes });
        break;
    }

    let upload = upload.ok_or_else(|| AppError::Validation("No file uploaded.".to_string()))?;

    if !has_pdf_extension(&upload.file_name) {
        return Err(AppError::Validation(
            "Invalid file format. Please upload a PDF file.".to_string(),
        ));
    }

    info!(
        "Received upload '{}' ({} bytes)",
        upload.file_name,
        upload.bytes.len()
    );
    Ok(upload)
}

/// Extension check only; the content is not sniffed. A bare `.pdf` passes.
pub fn has_pdf_extension(file_name: &str) -> bool {
    file_name.len() >= 4
        && file_name
            .get(file_name.len() - 4..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".pdf"))
}
