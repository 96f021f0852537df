// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::config::UploadConfig;
use crate::error::{ClientError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    /// A file is uploadable when it exists, has an allowed extension,
    /// and stays under the configured size cap.
    pub fn validate_upload_file(path: &Path, config: &UploadConfig) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|e| {
            ClientError::Validation(format!("Cannot read file {}: {}", path.display(), e))
        })?;

        if !metadata.is_file() {
            return Err(ClientError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if !config.allowed_extensions.contains(&extension) {
            return Err(ClientError::Validation(format!(
                "Unsupported file type '{}' (allowed: {})",
                extension,
                config.allowed_extensions.join(", ")
            )));
        }

        let max_bytes = config.max_file_size_mb * 1024 * 1024;
        if metadata.len() > max_bytes {
            return Err(ClientError::Validation(format!(
                "File {} exceeds the {} MB upload limit",
                path.display(),
                config.max_file_size_mb
            )));
        }

        Ok(())
    }

    pub fn validate_query_not_empty(query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(ClientError::Validation(
                "Search query must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_document_id(id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(ClientError::Validation(
                "Document id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn upload_config() -> UploadConfig {
        Config::default_config().upload
    }

    #[test]
    fn test_missing_file_rejected() {
        let result = Validator::validate_upload_file(Path::new("/nonexistent/report.pdf"), &upload_config());
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_extension_rejected() {
        let mut file = tempfile::Builder::new().suffix(".exe").tempfile().unwrap();
        writeln!(file, "binary").unwrap();
        let result = Validator::validate_upload_file(file.path(), &upload_config());
        assert!(result.is_err());
    }

    #[test]
    fn test_valid_file_accepted() {
        let mut file = NamedTempFile::with_suffix(".pdf").unwrap();
        writeln!(file, "%PDF-1.4").unwrap();
        assert!(Validator::validate_upload_file(file.path(), &upload_config()).is_ok());
    }

    #[test]
    fn test_oversized_file_rejected() {
        let mut config = upload_config();
        config.max_file_size_mb = 1;
        let mut file = NamedTempFile::with_suffix(".txt").unwrap();
        file.write_all(&vec![b'a'; 2 * 1024 * 1024]).unwrap();
        assert!(Validator::validate_upload_file(file.path(), &config).is_err());
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(Validator::validate_query_not_empty("  ").is_err());
        assert!(Validator::validate_query_not_empty("revenue growth").is_ok());
    }

    #[test]
    fn test_empty_document_id_rejected() {
        assert!(Validator::validate_document_id("").is_err());
        assert!(Validator::validate_document_id("42").is_ok());
    }
}
