//! Lambda handlers and the registry that selects between them

pub mod notifier;
pub mod orchestrator;
pub mod portfolio;
pub mod sample;
pub mod webhook;

use std::fmt;
use std::str::FromStr;

use crate::core::config::AppConfig;
use crate::core::models::{Event, InvocationContext, Response};
use crate::errors::{ConfigError, HandlerError};
use crate::observe::Observer;

pub use notifier::Notifier;
pub use orchestrator::Orchestrator;
pub use portfolio::Portfolio;
pub use sample::Sample;
pub use webhook::Webhook;

/// Prefix the deployed function names carry, e.g. `cryptonaut-lambda1`.
pub const FUNCTION_NAME_PREFIX: &str = "cryptonaut-";

/// A single request/response step invoked once per Lambda trigger.
pub trait InvocationHandler: Send + Sync {
    /// Canonical name of the handler, as accepted by [`HandlerKind::from_str`].
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns an error only if the response body cannot be serialized.
    fn handle(
        &self,
        event: &Event,
        ctx: &InvocationContext,
        observer: &dyn Observer,
    ) -> Result<Response, HandlerError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    Lambda1,
    Lambda2,
    Notifier,
    Orchestrator,
    Portfolio,
    Webhook,
}

impl HandlerKind {
    pub const ALL: [HandlerKind; 6] = [
        HandlerKind::Lambda1,
        HandlerKind::Lambda2,
        HandlerKind::Notifier,
        HandlerKind::Orchestrator,
        HandlerKind::Portfolio,
        HandlerKind::Webhook,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            HandlerKind::Lambda1 => "lambda1",
            HandlerKind::Lambda2 => "lambda2",
            HandlerKind::Notifier => "notifier",
            HandlerKind::Orchestrator => "orchestrator",
            HandlerKind::Portfolio => "portfolio",
            HandlerKind::Webhook => "webhook",
        }
    }

    /// Name of the deployed Lambda function serving this handler.
    #[must_use]
    pub fn function_name(self) -> String {
        format!("{FUNCTION_NAME_PREFIX}{}", self.name())
    }

    /// Construct the handler, capturing whatever settings it needs from `config`.
    #[must_use]
    pub fn build(self, config: &AppConfig) -> Box<dyn InvocationHandler> {
        match self {
            HandlerKind::Lambda1 => Box::new(Sample::lambda1()),
            HandlerKind::Lambda2 => Box::new(Sample::lambda2()),
            HandlerKind::Notifier => Box::new(Notifier::new(config)),
            HandlerKind::Orchestrator => Box::new(Orchestrator::new(config)),
            HandlerKind::Portfolio => Box::new(Portfolio::new(config)),
            HandlerKind::Webhook => Box::new(Webhook::new(config)),
        }
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HandlerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let bare = lowered
            .strip_prefix(FUNCTION_NAME_PREFIX)
            .unwrap_or(&lowered);

        HandlerKind::ALL
            .into_iter()
            .find(|kind| kind.name() == bare)
            .ok_or_else(|| ConfigError::UnknownHandler(s.to_string()))
    }
}

/// Serialize the event the way every handler logs it.
pub(crate) fn event_json(event: &Event) -> Result<String, HandlerError> {
    Ok(serde_json::to_string(event)?)
}
