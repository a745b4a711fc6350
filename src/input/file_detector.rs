//! File type detection and upload validation

use crate::config::UploadConfig;
use crate::error::{Result, ScreenerError};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Docx,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            "docx" => FileType::Docx,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
    }
}

/// Check an uploaded file's size and extension before reading it.
pub fn validate_upload(path: &Path, size: u64, config: &UploadConfig) -> Result<()> {
    if size > config.max_file_size_bytes() {
        return Err(ScreenerError::FileTooLarge {
            size,
            limit_mb: config.max_file_size_mb,
        });
    }

    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| ScreenerError::InvalidInput(format!("File has no extension: {}", path.display())))?
        .to_lowercase();

    if config.allowed_extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&ext)) {
        Ok(())
    } else {
        Err(ScreenerError::InvalidInput(format!(
            "Unsupported file extension: .{}. Allowed: {}",
            ext,
            config.allowed_extensions.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection_is_case_insensitive() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("Md"), FileType::Markdown);
        assert_eq!(FileType::from_extension("docx"), FileType::Docx);
        assert_eq!(FileType::from_extension("xyz"), FileType::Unknown);
        assert_eq!(FileType::from_path(Path::new("resume")), None);
    }

    #[test]
    fn test_upload_size_limit() {
        let config = UploadConfig::default();
        let path = Path::new("resume.pdf");
        assert!(validate_upload(path, 10 * 1024 * 1024, &config).is_ok());

        let err = validate_upload(path, 10 * 1024 * 1024 + 1, &config).unwrap_err();
        assert!(matches!(err, ScreenerError::FileTooLarge { limit_mb: 10, .. }));
        assert!(err.to_string().starts_with("File size exceeds 10MB limit"));
    }

    #[test]
    fn test_upload_extension_allow_list() {
        let config = UploadConfig::default();
        assert!(validate_upload(Path::new("CV.TXT"), 100, &config).is_ok());

        let err = validate_upload(Path::new("cv.exe"), 100, &config).unwrap_err();
        assert!(err.to_string().contains("Allowed: pdf, txt, md"));

        assert!(validate_upload(Path::new("cv"), 100, &config).is_err());
    }
}
