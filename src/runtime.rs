//! Glue between `lambda_runtime` and [`InvocationHandler`].

use lambda_runtime::{Error, LambdaEvent};
use std::sync::Arc;
use tracing::{error, info};

use crate::core::models::{Event, InvocationContext, Response};
use crate::errors::HandlerError;
use crate::handlers::InvocationHandler;
use crate::observe::{Observer, TracingObserver};

/// Run one invocation against `handler`, logging the outcome.
///
/// # Errors
///
/// Returns the handler's error unchanged so the runtime reports the
/// invocation as failed.
#[tracing::instrument(level = "info", skip_all, fields(handler = handler.name(), request_id = %ctx.request_id))]
pub fn invoke(
    handler: &dyn InvocationHandler,
    event: &Event,
    ctx: &InvocationContext,
    observer: &dyn Observer,
) -> Result<Response, HandlerError> {
    match handler.handle(event, ctx, observer) {
        Ok(response) => {
            info!(status_code = response.status_code, "Invocation handled");
            Ok(response)
        }
        Err(e) => {
            error!("Invocation failed: {}", e);
            Err(e)
        }
    }
}

/// Lambda handler for a prebuilt [`InvocationHandler`].
///
/// # Errors
///
/// Returns an error if the handler fails to build its response.
pub async fn function_handler(
    handler: Arc<dyn InvocationHandler>,
    event: LambdaEvent<Event>,
) -> Result<Response, Error> {
    let (payload, context) = event.into_parts();
    let ctx = InvocationContext::from(&context);
    let observer = TracingObserver::new(handler.name());

    invoke(handler.as_ref(), &payload, &ctx, &observer).map_err(Error::from)
}

/// Serve `handler` until the runtime shuts the process down.
///
/// # Errors
///
/// Returns an error if the runtime loop fails.
pub async fn serve(handler: Arc<dyn InvocationHandler>) -> Result<(), Error> {
    lambda_runtime::run(lambda_runtime::service_fn(move |event: LambdaEvent<Event>| {
        function_handler(Arc::clone(&handler), event)
    }))
    .await
}
