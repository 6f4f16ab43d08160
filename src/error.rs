use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid {kind} '{file}'")]
#[diagnostic(
    code(module_carousel::json_parse_error),
    help("Check the JSON syntax near the highlighted position")
)]
pub struct JsonParseError {
    pub kind: &'static str,
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum ModuleCarouselError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(module_carousel::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("There is no package.json file here")]
    #[diagnostic(
        code(module_carousel::missing_manifest),
        help("Run the command from a package root or pass --cwd pointing at one")
    )]
    MissingManifest { cwd: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParseError(Box<JsonParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    RecordsParseError(Box<JsonParseError>),

    #[error("Invalid glob pattern '{pattern}'")]
    #[diagnostic(
        code(module_carousel::pattern_error),
        help("Patterns use glob syntax, for example '**/*.module.ts'")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(module_carousel::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(module_carousel::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(module_carousel::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(module_carousel::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl ModuleCarouselError {
    /// Wrap a `serde_json` failure with the offending source so miette can
    /// point at the line and column it reported.
    pub fn manifest_parse(file: &str, content: &str, source: serde_json::Error) -> Self {
        ModuleCarouselError::ManifestParseError(Box::new(JsonParseError::new(
            "package manifest",
            file,
            content,
            source,
        )))
    }

    /// Same as [`Self::manifest_parse`] for a `--records` file
    pub fn records_parse(file: &str, content: &str, source: serde_json::Error) -> Self {
        ModuleCarouselError::RecordsParseError(Box::new(JsonParseError::new(
            "records file",
            file,
            content,
            source,
        )))
    }
}

impl JsonParseError {
    fn new(kind: &'static str, file: &str, content: &str, source: serde_json::Error) -> Self {
        let span = line_column_offset(content, source.line(), source.column())
            .map(|offset| SourceSpan::new(offset.into(), 1));

        Self {
            kind,
            file: file.to_string(),
            source_code: NamedSource::new(file, content.to_string()),
            span,
            source,
        }
    }
}

// serde_json reports 1-based lines and columns; 0 means "unknown"
fn line_column_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);

    (offset < content.len()).then_some(offset)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_missing_manifest_display() {
        let error = ModuleCarouselError::MissingManifest {
            cwd: PathBuf::from("/tmp/nowhere"),
        };

        assert_eq!(error.to_string(), "There is no package.json file here");
    }

    #[test]
    fn test_manifest_parse_error_display() {
        let content = "{\n  \"dependencies\": {,}\n}";
        let json_err = serde_json::from_str::<serde_json::Value>(content).unwrap_err();

        let error = ModuleCarouselError::manifest_parse("package.json", content, json_err);

        assert_eq!(error.to_string(), "Invalid package manifest 'package.json'");
        match error {
            ModuleCarouselError::ManifestParseError(inner) => assert!(inner.span.is_some()),
            _ => panic!("Expected ManifestParseError variant"),
        }
    }

    #[test]
    fn test_records_parse_error_points_at_json() {
        let content = "[{ \"module\": \"a\" ]";
        let json_err = serde_json::from_str::<serde_json::Value>(content).unwrap_err();

        let error = ModuleCarouselError::records_parse("records.json", content, json_err);

        assert_eq!(error.to_string(), "Invalid records file 'records.json'");
        match error {
            ModuleCarouselError::RecordsParseError(inner) => assert!(inner.span.is_some()),
            _ => panic!("Expected RecordsParseError variant"),
        }
    }

    #[test]
    fn test_line_column_offset() {
        let content = "ab\ncd\nef";
        assert_eq!(line_column_offset(content, 1, 1), Some(0));
        assert_eq!(line_column_offset(content, 2, 2), Some(4));
        assert_eq!(line_column_offset(content, 3, 1), Some(6));
        assert_eq!(line_column_offset(content, 0, 0), None);
        assert_eq!(line_column_offset(content, 9, 9), None);
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = ModuleCarouselError::FileReadError {
            path: PathBuf::from("/tmp/missing.ts"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.ts'");
    }

    #[test]
    fn test_configuration_error() {
        let error = ModuleCarouselError::ConfigurationError {
            message: "Invalid configuration value".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration value"
        );
    }

    #[test]
    fn test_invalid_pattern_error() {
        let source = glob::Pattern::new("[").unwrap_err();
        let error = ModuleCarouselError::InvalidPattern {
            pattern: "[".to_string(),
            source,
        };

        assert_eq!(error.to_string(), "Invalid glob pattern '['");
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = ModuleCarouselError::MissingManifest {
            cwd: PathBuf::from("."),
        };
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let carousel_err: ModuleCarouselError = io_err.into();

        match carousel_err {
            ModuleCarouselError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let carousel_err: ModuleCarouselError = json_err.into();

        match carousel_err {
            ModuleCarouselError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
