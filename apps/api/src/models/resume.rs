use serde::Serialize;

/// Number of characters shown when echoing an extracted resume back to the candidate.
pub const RESUME_PREVIEW_CHARS: usize = 300;

/// Accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Picks the kind from the filename extension. `None` for anything
    /// other than `.pdf` / `.docx`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// An uploaded resume after text extraction. The raw bytes are not retained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeDocument {
    pub kind: DocumentKind,
    pub filename: String,
    pub size_bytes: usize,
    /// Empty when extraction failed or the document had no text.
    #[serde(skip_serializing)]
    pub text: String,
}

impl ResumeDocument {
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// First `RESUME_PREVIEW_CHARS` characters followed by "...".
    pub fn preview(&self) -> Option<String> {
        if !self.has_text() {
            return None;
        }
        let head: String = self.text.chars().take(RESUME_PREVIEW_CHARS).collect();
        Some(format!("{head}..."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(text: &str) -> ResumeDocument {
        ResumeDocument {
            kind: DocumentKind::Pdf,
            filename: "cv.pdf".to_string(),
            size_bytes: 1024,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(DocumentKind::from_filename("cv.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("My CV.DOCX"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_filename("cv.doc"), None);
        assert_eq!(DocumentKind::from_filename("resume"), None);
    }

    #[test]
    fn test_preview_is_truncated_on_char_boundary() {
        let long = "é".repeat(RESUME_PREVIEW_CHARS + 50);
        let preview = resume(&long).preview().unwrap();
        assert_eq!(preview.chars().count(), RESUME_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_empty_resume_has_no_preview() {
        assert!(!resume("").has_text());
        assert_eq!(resume("").preview(), None);
    }
}
