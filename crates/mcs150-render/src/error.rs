//! Error types for the rendering layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. [`RenderError`] is the
//! single error type the public rendering entry points return.

use mcs150_core::FilingError;
use thiserror::Error;

/// Error type for template rendering operations.
///
/// A render is all-or-nothing: any variant here means no output file was
/// produced at the requested path.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The filing payload was rejected before any PDF work started.
    #[error(transparent)]
    InvalidInput(#[from] FilingError),

    /// The template could not be loaded or does not have the expected
    /// structure (missing AcroForm, wrong page count, encrypted).
    #[error("template error: {0}")]
    Template(String),

    /// A field the mapping table depends on is absent from the template.
    #[error("template field not found: {0}")]
    MissingField(String),

    /// The filled document could not be serialized.
    #[error("render failure: {0}")]
    Render(String),

    /// Error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_error_display() {
        let err = RenderError::Template("no interactive form".to_string());
        assert_eq!(err.to_string(), "template error: no interactive form");
    }

    #[test]
    fn missing_field_display() {
        let err = RenderError::MissingField("24ddDescribe".to_string());
        assert_eq!(err.to_string(), "template field not found: 24ddDescribe");
    }

    #[test]
    fn invalid_input_from_filing_error() {
        let err: RenderError = FilingError::InvalidInput("not an object".to_string()).into();
        assert!(matches!(err, RenderError::InvalidInput(_)));
        assert_eq!(err.to_string(), "invalid filing input: not an object");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: RenderError = io_err.into();
        assert!(matches!(err, RenderError::Io(_)));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn render_error_implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(RenderError::Render("test".to_string()));
        assert!(err.to_string().contains("test"));
    }
}
