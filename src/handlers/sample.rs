//! The two sample Lambdas. Each logs the event and answers with a greeting.

use super::{InvocationHandler, event_json};
use crate::core::models::{Event, InvocationContext, Response};
use crate::errors::HandlerError;
use crate::observe::Observer;
use crate::response::ok_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    name: &'static str,
    label: &'static str,
}

impl Sample {
    #[must_use]
    pub fn lambda1() -> Self {
        Self {
            name: "lambda1",
            label: "Lambda 1",
        }
    }

    #[must_use]
    pub fn lambda2() -> Self {
        Self {
            name: "lambda2",
            label: "Lambda 2",
        }
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        format!("Hello from {}", self.label)
    }
}

impl InvocationHandler for Sample {
    fn name(&self) -> &'static str {
        self.name
    }

    fn handle(
        &self,
        event: &Event,
        _ctx: &InvocationContext,
        observer: &dyn Observer,
    ) -> Result<Response, HandlerError> {
        observer.log(&format!("{} event: {}", self.label, event_json(event)?));
        ok_message(&self.greeting())
    }
}
