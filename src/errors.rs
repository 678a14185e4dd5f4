use thiserror::Error;

/// Errors a handler can return to the Lambda runtime.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while loading configuration at cold start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No handler selected: set CRYPTONAUT_HANDLER or AWS_LAMBDA_FUNCTION_NAME")]
    MissingHandler,

    #[error("Unknown handler: {0}")]
    UnknownHandler(String),
}
