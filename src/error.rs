use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Configuration key or builder field that caused the error (e.g., "api_key", "output_dir")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected value, resolution hint)
    pub details: Option<String>,
    /// Source of the error (e.g., "builder", "artifact_store")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the crate.
///
/// Aggregates the low-level failure modes of a conversion (configuration,
/// provider response, transport, filesystem) into one actionable enum.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// The provider answered with a non-success status. Carries the raw
    /// response body; no retryable/permanent classification is attempted.
    #[error("provider returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error without extra context
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new provider error from a response status and raw body
    pub fn provider(status: u16, body: impl Into<String>) -> Self {
        Error::Provider {
            status,
            body: body.into(),
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display_carries_status_and_body() {
        let err = Error::provider(401, "unauthorized");
        let rendered = err.to_string();
        assert!(rendered.contains("401"), "missing status in: {}", rendered);
        assert!(
            rendered.contains("unauthorized"),
            "missing body in: {}",
            rendered
        );
    }

    #[test]
    fn configuration_error_formats_context() {
        let err = Error::configuration_with_context(
            "API key required",
            ErrorContext::new()
                .with_field_path("api_key")
                .with_source("builder"),
        );
        let rendered = err.to_string();
        assert!(rendered.contains("field: api_key"));
        assert!(rendered.contains("source: builder"));
    }
}
