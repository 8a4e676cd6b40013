//! Runtime configuration from environment variables (`.env` supported)

use std::env;
use std::time::Duration;

use crate::error::AssistantError;
use crate::models::Locale;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    pub port: u16,
    pub default_locale: Locale,
    /// Pause before the chatbot answers
    pub thinking_delay: Duration,
    /// Simulated payment gateway latency
    pub payment_delay: Duration,
    /// Pause between a spoken confirmation and the route change
    pub navigation_delay: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            default_locale: Locale::En,
            thinking_delay: Duration::from_millis(1000),
            payment_delay: Duration::from_millis(3000),
            navigation_delay: Duration::from_millis(1000),
        }
    }
}

impl AssistantConfig {
    /// Same settings with every simulated delay removed
    pub fn without_delays(self) -> Self {
        Self {
            thinking_delay: Duration::ZERO,
            payment_delay: Duration::ZERO,
            navigation_delay: Duration::ZERO,
            ..self
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT").or_else(|| lookup("API_PORT")) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| AssistantError::Config(format!("invalid port: {}", raw)))?,
            None => defaults.port,
        };

        let default_locale = match lookup("GULLAK_LOCALE") {
            Some(raw) => raw.parse()?,
            None => defaults.default_locale,
        };

        Ok(Self {
            port,
            default_locale,
            thinking_delay: millis(&lookup, "GULLAK_THINKING_DELAY_MS", defaults.thinking_delay)?,
            payment_delay: millis(&lookup, "GULLAK_PAYMENT_DELAY_MS", defaults.payment_delay)?,
            navigation_delay: millis(
                &lookup,
                "GULLAK_NAVIGATION_DELAY_MS",
                defaults.navigation_delay,
            )?,
        })
    }
}

fn millis<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| AssistantError::Config(format!("{} must be milliseconds, got {}", key, raw))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AssistantConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AssistantConfig::default());
        assert_eq!(config.thinking_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_reads_values() {
        let config = AssistantConfig::from_lookup(lookup_from(&[
            ("API_PORT", "9000"),
            ("GULLAK_LOCALE", "hi-IN"),
            ("GULLAK_PAYMENT_DELAY_MS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.default_locale, Locale::Hi);
        assert_eq!(config.payment_delay, Duration::ZERO);
        assert_eq!(config.navigation_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_port_takes_precedence() {
        let config =
            AssistantConfig::from_lookup(lookup_from(&[("PORT", "3000"), ("API_PORT", "9000")]))
                .unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = AssistantConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, AssistantError::Config(_)));

        let err = AssistantConfig::from_lookup(lookup_from(&[("GULLAK_THINKING_DELAY_MS", "-1")]))
            .unwrap_err();
        assert!(err.to_string().contains("GULLAK_THINKING_DELAY_MS"));

        let err = AssistantConfig::from_lookup(lookup_from(&[("GULLAK_LOCALE", "fr")])).unwrap_err();
        assert!(matches!(err, AssistantError::InvalidLocale(_)));
    }

    #[test]
    fn test_without_delays() {
        let config = AssistantConfig::default().without_delays();
        assert!(config.thinking_delay.is_zero());
        assert!(config.payment_delay.is_zero());
        assert!(config.navigation_delay.is_zero());
        assert_eq!(config.port, 8080);
    }
}
