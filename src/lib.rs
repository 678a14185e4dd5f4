/// Cryptonaut - Lambda entry points for the Cryptonaut Telegram bot.
///
/// This crate packages every Cryptonaut Lambda behind a single trait and a
/// single `bootstrap` binary:
/// 1. Two sample Lambdas that answer with a greeting
/// 2. A Telegram notifier and a Telegram webhook receiver
/// 3. A CrewAI orchestrator
/// 4. A portfolio engine
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - `lambda_runtime` and Tokio for the invocation loop
/// - An explicit [`core::config::AppConfig`] read once at cold start
/// - An injectable [`observe::Observer`] for diagnostic output
///
/// # Example
///
/// ```
/// use cryptonaut::core::config::AppConfig;
/// use cryptonaut::core::models::{Event, InvocationContext};
/// use cryptonaut::handlers::HandlerKind;
/// use cryptonaut::observe::RecordingObserver;
///
/// let config = AppConfig {
///     audit_table: Some("cryptonaut-audit".to_string()),
///     telegram_secret_name: Some("cryptonaut/telegram-bot".to_string()),
///     crewai_secret_name: None,
///     handler: Some(HandlerKind::Notifier),
/// };
///
/// let handler = HandlerKind::Notifier.build(&config);
/// let observer = RecordingObserver::default();
/// let response = handler
///     .handle(&Event::new(), &InvocationContext::default(), &observer)
///     .unwrap();
///
/// assert_eq!(response.status_code, 200);
/// assert!(response.body.contains("\"secret_configured\":true"));
/// ```
pub mod core;
pub mod errors;
pub mod handlers;
pub mod observe;
pub mod response;
pub mod runtime;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. `RUST_LOG` overrides the default level, which is INFO (DEBUG with
/// the `debug-logs` feature). Calling it more than once is harmless: later
/// calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// cryptonaut::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
