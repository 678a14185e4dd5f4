//! Telegram notifier.
//!
//! Triggered by the orchestrator or other services. Delivery to the Telegram
//! Bot API is not wired up yet; the handler reports whether the bot secret is
//! configured and acknowledges the request.

use super::{InvocationHandler, event_json};
use crate::core::config::{AppConfig, display_setting};
use crate::core::models::{Event, InvocationContext, Response};
use crate::errors::HandlerError;
use crate::observe::Observer;
use crate::response::{SecretStatus, format_response};

pub const MESSAGE: &str = "Notification Sent";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifier {
    audit_table: Option<String>,
    secret_name: Option<String>,
}

impl Notifier {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            audit_table: config.audit_table.clone(),
            secret_name: config.telegram_secret_name.clone(),
        }
    }
}

impl InvocationHandler for Notifier {
    fn name(&self) -> &'static str {
        "notifier"
    }

    fn handle(
        &self,
        event: &Event,
        _ctx: &InvocationContext,
        observer: &dyn Observer,
    ) -> Result<Response, HandlerError> {
        observer.log("Telegram Notifier Invoked");
        observer.log(&format!("Event: {}", event_json(event)?));
        observer.log(&format!(
            "Audit Table: {}, Secret: {}",
            display_setting(self.audit_table.as_deref()),
            display_setting(self.secret_name.as_deref()),
        ));

        format_response(200, &SecretStatus::new(MESSAGE, self.secret_name.as_deref()))
    }
}
