pub mod extract;

use bytes::Bytes;
use tracing::{info, warn};

use crate::models::resume::{DocumentKind, ResumeDocument};
use extract::{extract_text, ExtractionError};

/// Turns an uploaded file into a `ResumeDocument`.
///
/// Extraction runs on the blocking pool. Any failure (including a panic inside
/// the PDF parser) is logged and leaves the resume text empty; the upload is
/// never rejected at this point.
pub async fn ingest_upload(filename: String, kind: DocumentKind, bytes: Bytes) -> ResumeDocument {
    let size_bytes = bytes.len();

    let outcome = tokio::task::spawn_blocking(move || extract_text(&bytes, kind))
        .await
        .unwrap_or_else(|e| Err(ExtractionError::Aborted(e.to_string())));

    let text = match outcome {
        Ok(text) => {
            info!(
                "Extracted {} characters from {:?} resume ({} bytes)",
                text.chars().count(),
                kind,
                size_bytes
            );
            text
        }
        Err(e) => {
            warn!("Resume extraction failed, continuing without resume text: {e}");
            String::new()
        }
    };

    ResumeDocument {
        kind,
        filename,
        size_bytes,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_upload_degrades_to_empty_text() {
        let doc = ingest_upload(
            "cv.pdf".to_string(),
            DocumentKind::Pdf,
            Bytes::from_static(b"not a pdf"),
        )
        .await;
        assert_eq!(doc.kind, DocumentKind::Pdf);
        assert_eq!(doc.size_bytes, 9);
        assert!(!doc.has_text());
    }
}
