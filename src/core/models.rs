use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Payload delivered by the invoker. No shape is enforced.
pub type Event = Map<String, Value>;

/// Per-invocation metadata handed to every handler alongside the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationContext {
    pub request_id: String,
    pub invoked_function_arn: String,
    /// Epoch milliseconds after which the runtime kills the invocation.
    pub deadline_ms: u64,
}

impl From<&lambda_runtime::Context> for InvocationContext {
    fn from(ctx: &lambda_runtime::Context) -> Self {
        Self {
            request_id: ctx.request_id.clone(),
            invoked_function_arn: ctx.invoked_function_arn.clone(),
            deadline_ms: ctx.deadline,
        }
    }
}

/// API Gateway style result returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: i64,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl Response {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
