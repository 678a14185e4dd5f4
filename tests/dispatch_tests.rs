use cryptonaut::core::config::AppConfig;
use cryptonaut::core::models::{Event, InvocationContext};
use cryptonaut::errors::ConfigError;
use cryptonaut::handlers::HandlerKind;
use cryptonaut::observe::RecordingObserver;
use cryptonaut::runtime::invoke;

/// Tests for handler selection and uniform dispatch

#[test]
fn test_names_round_trip() {
    for kind in HandlerKind::ALL {
        assert_eq!(kind.name().parse::<HandlerKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.name());
    }
}

#[test]
fn test_function_names_parse() {
    assert_eq!(
        "cryptonaut-lambda1".parse::<HandlerKind>(),
        Ok(HandlerKind::Lambda1)
    );
    assert_eq!(HandlerKind::Webhook.function_name(), "cryptonaut-webhook");
    assert_eq!(
        HandlerKind::Orchestrator.function_name().parse::<HandlerKind>(),
        Ok(HandlerKind::Orchestrator)
    );
}

#[test]
fn test_parsing_is_case_insensitive_and_trims() {
    assert_eq!(" Notifier ".parse::<HandlerKind>(), Ok(HandlerKind::Notifier));
    assert_eq!(
        "CRYPTONAUT-PORTFOLIO".parse::<HandlerKind>(),
        Ok(HandlerKind::Portfolio)
    );
}

#[test]
fn test_unknown_names_fail() {
    assert_eq!(
        "lambda3".parse::<HandlerKind>(),
        Err(ConfigError::UnknownHandler("lambda3".to_string()))
    );
    assert!("".parse::<HandlerKind>().is_err());
    assert!("cryptonaut-".parse::<HandlerKind>().is_err());
}

#[test]
fn test_built_handler_matches_kind() {
    let config = AppConfig::default();

    for kind in HandlerKind::ALL {
        assert_eq!(kind.build(&config).name(), kind.name());
    }
}

#[test]
fn test_invoke_dispatches_to_selected_handler() {
    let config = AppConfig::from_lookup(|name| match name {
        "AWS_LAMBDA_FUNCTION_NAME" => Some("cryptonaut-lambda2".to_string()),
        _ => None,
    })
    .unwrap();
    let handler = config.selected_handler().unwrap().build(&config);
    let observer = RecordingObserver::default();

    let response = invoke(
        handler.as_ref(),
        &Event::new(),
        &InvocationContext::default(),
        &observer,
    )
    .unwrap();

    assert!(response.body.contains("Hello from Lambda 2"));
    assert_eq!(observer.lines(), vec!["Lambda 2 event: {}".to_string()]);
}
