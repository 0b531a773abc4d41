//! Error adapter for converting StrataError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use strata::StrataError;

/// Adapter exposing a [`StrataError`] as a miette diagnostic.
///
/// Parse errors carry the diagram source and, when the TOML parser reports
/// one, the span of the offending input.
pub struct ErrorAdapter<'a>(pub &'a StrataError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            StrataError::Io(_) => "strata::io",
            StrataError::Parse { .. } => "strata::parse",
            StrataError::Config(_) => "strata::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            StrataError::Parse { .. } => Some(Box::new(
                "every [[layers]] table needs a `kind`; block kinds also need a `name`; \
                 field names must match exactly",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            StrataError::Parse { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let StrataError::Parse {
            message,
            span: Some(span),
            ..
        } = self.0
        else {
            return None;
        };

        let span = SourceSpan::from(span.start..span.end);
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(message.clone()), span),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_has_label() {
        let err = StrataError::Parse {
            message: "expected `=`".to_string(),
            span: Some(3..5),
            src: "abc def".to_string(),
        };
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "strata::parse");
        assert!(adapter.source_code().is_some());
        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 3);
        assert_eq!(labels[0].len(), 2);
    }

    #[test]
    fn test_config_error_has_no_source() {
        let err = StrataError::Config("bad palette".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "strata::config");
        assert!(adapter.source_code().is_none());
        assert!(adapter.labels().is_none());
    }
}
