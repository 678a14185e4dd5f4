use super::{InvocationHandler, event_json};
use crate::core::config::{AppConfig, display_setting};
use crate::core::models::{Event, InvocationContext, Response};
use crate::errors::HandlerError;
use crate::observe::Observer;
use crate::response::ok_message;

pub const MESSAGE: &str = "Portfolio Analyzed";

/// Portfolio engine. Invoked by the orchestrator or the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    audit_table: Option<String>,
}

impl Portfolio {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            audit_table: config.audit_table.clone(),
        }
    }
}

impl InvocationHandler for Portfolio {
    fn name(&self) -> &'static str {
        "portfolio"
    }

    fn handle(
        &self,
        event: &Event,
        _ctx: &InvocationContext,
        observer: &dyn Observer,
    ) -> Result<Response, HandlerError> {
        observer.log("Portfolio Engine Invoked");
        observer.log(&format!("Event: {}", event_json(event)?));
        observer.log(&format!(
            "Audit Table: {}",
            display_setting(self.audit_table.as_deref())
        ));

        ok_message(MESSAGE)
    }
}
