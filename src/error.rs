//! Error types for the demo.
//!
//! The demo distinguishes exactly two failure kinds: authorization failures
//! (which get a remediation hint at the call site) and everything else. No
//! kind is retried and no kind aborts the process.

use aws_sdk_bedrock::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// The caller's IAM identity is not authorized for the operation or the
    /// model. Surfaced separately so the demo can suggest requesting model
    /// access in the AWS console.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Any other failure reported by the Bedrock API.
    #[error("Bedrock API error: {0}")]
    Api(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;

impl DemoError {
    /// Whether this error is an authorization failure.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, DemoError::AccessDenied(_))
    }
}

/// Map an AWS SDK error from either Bedrock client into a [`DemoError`].
///
/// Authorization failures are recognized by the `AccessDeniedException`
/// error code in the response metadata; everything else keeps the SDK's
/// full error chain via [`DisplayErrorContext`].
pub(crate) fn classify_sdk_error<E, R>(operation: &str, err: SdkError<E, R>) -> DemoError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    if err.code() == Some("AccessDeniedException") {
        let message = err.message().unwrap_or("access denied").to_string();
        DemoError::AccessDenied(format!("{operation}: {message}"))
    } else {
        DemoError::Api(format!("{operation}: {}", DisplayErrorContext(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_bedrock::error::ErrorMetadata;
    use std::fmt;

    /// Minimal service error carrying only response metadata, standing in
    /// for the generated operation error types.
    #[derive(Debug)]
    struct MockServiceError(ErrorMetadata);

    impl fmt::Display for MockServiceError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0.message().unwrap_or("service error"))
        }
    }

    impl std::error::Error for MockServiceError {}

    impl ProvideErrorMetadata for MockServiceError {
        fn meta(&self) -> &ErrorMetadata {
            &self.0
        }
    }

    fn service_error(code: &str, message: &str) -> SdkError<MockServiceError, ()> {
        let metadata = ErrorMetadata::builder().code(code).message(message).build();
        SdkError::service_error(MockServiceError(metadata), ())
    }

    #[test]
    fn test_error_display() {
        let err = DemoError::AccessDenied("ListFoundationModels: no model access".to_string());
        assert_eq!(err.to_string(), "Access denied: ListFoundationModels: no model access");

        let err = DemoError::Api("InvokeModel: throttled".to_string());
        assert_eq!(err.to_string(), "Bedrock API error: InvokeModel: throttled");
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: DemoError = json_err.into();
        assert!(matches!(err, DemoError::Serde(_)));
        assert!(!err.is_access_denied());
    }

    #[test]
    fn test_is_access_denied() {
        assert!(DemoError::AccessDenied("nope".to_string()).is_access_denied());
        assert!(!DemoError::Api("boom".to_string()).is_access_denied());
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(DemoError::Api("invalid".to_string()));
        assert!(err_result.is_err());
    }

    #[test]
    fn test_classify_access_denied_code() {
        let err = classify_sdk_error(
            "ListFoundationModels",
            service_error("AccessDeniedException", "no model access"),
        );

        assert!(err.is_access_denied());
        assert_eq!(err.to_string(), "Access denied: ListFoundationModels: no model access");
    }

    #[test]
    fn test_classify_other_codes_as_api_error() {
        let err = classify_sdk_error(
            "InvokeModel",
            service_error("ThrottlingException", "too many requests"),
        );

        assert!(!err.is_access_denied());
        assert!(matches!(err, DemoError::Api(_)));

        let rendered = err.to_string();
        assert!(rendered.starts_with("Bedrock API error: InvokeModel:"));
        assert!(rendered.contains("too many requests"));
    }

    #[test]
    fn test_classify_errors_without_code_as_api_error() {
        let err = classify_sdk_error(
            "InvokeModel",
            SdkError::<MockServiceError, ()>::timeout_error("request timed out"),
        );

        assert!(!err.is_access_denied());
        assert!(matches!(err, DemoError::Api(_)));
    }
}
