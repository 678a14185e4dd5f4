//! Telegram webhook receiver, fronted by API Gateway.
//!
//! Command processing is not implemented; every update is acknowledged with
//! a fixed message so Telegram stops redelivering it.

use super::{InvocationHandler, event_json};
use crate::core::config::{AppConfig, display_setting};
use crate::core::models::{Event, InvocationContext, Response};
use crate::errors::HandlerError;
use crate::observe::Observer;
use crate::response::ok_message;

pub const MESSAGE: &str = "Webhook Processed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Webhook {
    audit_table: Option<String>,
    secret_name: Option<String>,
}

impl Webhook {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            audit_table: config.audit_table.clone(),
            secret_name: config.telegram_secret_name.clone(),
        }
    }
}

impl InvocationHandler for Webhook {
    fn name(&self) -> &'static str {
        "webhook"
    }

    fn handle(
        &self,
        event: &Event,
        _ctx: &InvocationContext,
        observer: &dyn Observer,
    ) -> Result<Response, HandlerError> {
        observer.log("Telegram Webhook Received");
        observer.log(&format!("Event: {}", event_json(event)?));
        observer.log(&format!(
            "Audit Table: {}, Secret: {}",
            display_setting(self.audit_table.as_deref()),
            display_setting(self.secret_name.as_deref()),
        ));

        ok_message(MESSAGE)
    }
}
