use std::env;

use crate::errors::ConfigError;
use crate::handlers::HandlerKind;

pub const AUDIT_TABLE: &str = "AUDIT_TABLE";
pub const TELEGRAM_SECRET_NAME: &str = "TELEGRAM_SECRET_NAME";
pub const CREWAI_SECRET_NAME: &str = "CREWAI_SECRET_NAME";
pub const HANDLER_SELECTOR: &str = "CRYPTONAUT_HANDLER";
pub const FUNCTION_NAME: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Settings captured once at cold start and passed into each handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub audit_table: Option<String>,
    pub telegram_secret_name: Option<String>,
    pub crewai_secret_name: Option<String>,
    /// `None` when neither selector variable is set.
    pub handler: Option<HandlerKind>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if the handler selector names an unknown handler.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the handler selector names an unknown handler.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let handler = read(HANDLER_SELECTOR)
            .or_else(|| read(FUNCTION_NAME))
            .map(|name| name.parse::<HandlerKind>())
            .transpose()?;

        Ok(Self {
            audit_table: read(AUDIT_TABLE),
            telegram_secret_name: read(TELEGRAM_SECRET_NAME),
            crewai_secret_name: read(CREWAI_SECRET_NAME),
            handler,
        })
    }

    /// The handler the bootstrap binary should serve.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingHandler`] when no selector was configured.
    pub fn selected_handler(&self) -> Result<HandlerKind, ConfigError> {
        self.handler.ok_or(ConfigError::MissingHandler)
    }
}

/// Renders an optional setting the way the handlers log it.
pub(crate) fn display_setting(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn missing_values_are_none() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.selected_handler(), Err(ConfigError::MissingHandler));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (TELEGRAM_SECRET_NAME, ""),
            (AUDIT_TABLE, "audit"),
        ]))
        .unwrap();
        assert_eq!(config.telegram_secret_name, None);
        assert_eq!(config.audit_table.as_deref(), Some("audit"));
    }

    #[test]
    fn selector_wins_over_function_name() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (HANDLER_SELECTOR, "portfolio"),
            (FUNCTION_NAME, "cryptonaut-lambda1"),
        ]))
        .unwrap();
        assert_eq!(config.selected_handler(), Ok(HandlerKind::Portfolio));
    }

    #[test]
    fn falls_back_to_function_name() {
        let config =
            AppConfig::from_lookup(lookup_from(&[(FUNCTION_NAME, "cryptonaut-lambda2")])).unwrap();
        assert_eq!(config.handler, Some(HandlerKind::Lambda2));
    }

    #[test]
    fn unknown_selector_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[(HANDLER_SELECTOR, "trader")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownHandler("trader".to_string()));
    }

    #[test]
    fn display_setting_renders_none() {
        assert_eq!(display_setting(None), "None");
        assert_eq!(display_setting(Some("t")), "t");
    }
}
