//! Settings validation logic.

use std::path::Path;

use url::Url;

use crate::config::modes::RunMode;
use crate::config::settings::Settings;
use crate::error::{Error, Result};

/// Validate the entire run configuration.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_source_url(&settings.source_url)?;
    validate_output(&settings.output, settings.mode)?;

    if settings.timeout.is_some_and(|t| t.is_zero()) {
        return Err(Error::ConfigValidation {
            field: "timeout".to_string(),
            message: "Timeout must be at least one second".to_string(),
        });
    }

    Ok(())
}

/// Validate the source page URL.
pub fn validate_source_url(source_url: &str) -> Result<()> {
    let source_url = source_url.trim();

    if source_url.is_empty() {
        return Err(Error::ConfigValidation {
            field: "source_url".to_string(),
            message: "Source URL cannot be empty".to_string(),
        });
    }

    let parsed = Url::parse(source_url).map_err(|e| Error::ConfigValidation {
        field: "source_url".to_string(),
        message: format!("'{}' is not a valid URL: {}", source_url, e),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::ConfigValidation {
            field: "source_url".to_string(),
            message: format!("Unsupported URL scheme '{}' (expected http or https)", other),
        }),
    }
}

/// Validate the output path for the given mode.
///
/// Download mode needs a directory (created later if missing); record mode
/// needs a file path.
pub fn validate_output(output: &Path, mode: RunMode) -> Result<()> {
    if output.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "output".to_string(),
            message: "Output path cannot be empty".to_string(),
        });
    }

    match mode {
        RunMode::Download if output.exists() && !output.is_dir() => {
            Err(Error::ConfigValidation {
                field: "output".to_string(),
                message: format!(
                    "'{}' exists and is not a directory",
                    output.display()
                ),
            })
        }
        RunMode::Record if output.is_dir() => Err(Error::ConfigValidation {
            field: "output".to_string(),
            message: format!("'{}' is a directory, expected a file", output.display()),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_valid_source_url() {
        assert!(validate_source_url("http://webdatacommons.org/structureddata/schemaorgtables/").is_ok());
        assert!(validate_source_url("https://x/").is_ok());
    }

    #[test]
    fn test_invalid_source_url() {
        assert!(validate_source_url("").is_err());
        assert!(validate_source_url("not a url").is_err());
        assert!(validate_source_url("ftp://x/tables").is_err());
    }

    #[test]
    fn test_download_output_must_be_directory() {
        let dir = tempdir().unwrap();
        assert!(validate_output(dir.path(), RunMode::Download).is_ok());
        assert!(validate_output(&dir.path().join("missing"), RunMode::Download).is_ok());

        let file = NamedTempFile::new().unwrap();
        assert!(validate_output(file.path(), RunMode::Download).is_err());
    }

    #[test]
    fn test_record_output_must_be_file() {
        let dir = tempdir().unwrap();
        assert!(validate_output(dir.path(), RunMode::Record).is_err());
        assert!(validate_output(&dir.path().join("links.txt"), RunMode::Record).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = tempdir().unwrap();
        let mut settings = Settings::new("https://x/", dir.path(), RunMode::Download);
        assert!(validate_settings(&settings).is_ok());

        settings.timeout = Some(Duration::from_secs(0));
        assert!(validate_settings(&settings).is_err());
    }
}
