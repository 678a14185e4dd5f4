use std::error::Error;
use cryptonaut::errors::{ConfigError, HandlerError};

#[test]
fn test_errors_implement_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    assert_error(&ConfigError::MissingHandler);

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert_error(&HandlerError::from(json_err));
}

#[test]
fn test_config_error_display() {
    assert_eq!(
        format!("{}", ConfigError::UnknownHandler("trader".to_string())),
        "Unknown handler: trader"
    );
    assert_eq!(
        format!("{}", ConfigError::MissingHandler),
        "No handler selected: set CRYPTONAUT_HANDLER or AWS_LAMBDA_FUNCTION_NAME"
    );
}

#[test]
fn test_handler_error_converts_into_runtime_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
    let err: lambda_runtime::Error = HandlerError::from(json_err).into();

    assert!(err.to_string().contains("Failed to serialize response body"));
}
