//! CrewAI orchestrator, triggered by API Gateway or EventBridge.

use super::{InvocationHandler, event_json};
use crate::core::config::{AppConfig, display_setting};
use crate::core::models::{Event, InvocationContext, Response};
use crate::errors::HandlerError;
use crate::observe::Observer;
use crate::response::{SecretStatus, format_response};

pub const MESSAGE: &str = "Crew Orchestrator Executed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Orchestrator {
    audit_table: Option<String>,
    secret_name: Option<String>,
}

impl Orchestrator {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            audit_table: config.audit_table.clone(),
            secret_name: config.crewai_secret_name.clone(),
        }
    }
}

impl InvocationHandler for Orchestrator {
    fn name(&self) -> &'static str {
        "orchestrator"
    }

    fn handle(
        &self,
        event: &Event,
        _ctx: &InvocationContext,
        observer: &dyn Observer,
    ) -> Result<Response, HandlerError> {
        observer.log("Crew Orchestrator Invoked");
        observer.log(&format!("Event: {}", event_json(event)?));
        observer.log(&format!(
            "Audit Table: {}, Secret: {}",
            display_setting(self.audit_table.as_deref()),
            display_setting(self.secret_name.as_deref()),
        ));

        format_response(200, &SecretStatus::new(MESSAGE, self.secret_name.as_deref()))
    }
}
