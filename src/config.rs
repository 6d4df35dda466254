//! Runtime settings for [`DeliverySystem`](crate::lifecycle::DeliverySystem).

use crate::error::{DeliveryError, Result};

pub const CHANNEL_CAPACITY_VAR: &str = "DELIVERY_CHANNEL_CAPACITY";
pub const RECENT_ORDERS_LIMIT_VAR: &str = "DELIVERY_RECENT_ORDERS_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Bounded channel size of every actor.
    pub channel_capacity: usize,
    /// How many orders `recent_orders` returns.
    pub recent_orders_limit: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            recent_orders_limit: 10,
        }
    }
}

impl SystemConfig {
    /// Defaults overridden by `DELIVERY_CHANNEL_CAPACITY` and `DELIVERY_RECENT_ORDERS_LIMIT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SystemConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = parse_positive(CHANNEL_CAPACITY_VAR, &raw)?;
        }
        if let Some(raw) = lookup(RECENT_ORDERS_LIMIT_VAR) {
            config.recent_orders_limit = parse_positive(RECENT_ORDERS_LIMIT_VAR, &raw)?;
        }
        Ok(config)
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(DeliveryError::Validation(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = SystemConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.recent_orders_limit, 10);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = SystemConfig::from_lookup(lookup_from(&[
            (CHANNEL_CAPACITY_VAR, "64"),
            (RECENT_ORDERS_LIMIT_VAR, " 5 "),
        ]))
        .unwrap();
        assert_eq!(config.channel_capacity, 64);
        assert_eq!(config.recent_orders_limit, 5);
    }

    #[test]
    fn test_zero_or_garbage_is_rejected() {
        let zero = SystemConfig::from_lookup(lookup_from(&[(CHANNEL_CAPACITY_VAR, "0")]));
        assert!(matches!(zero, Err(DeliveryError::Validation(_))));

        let garbage = SystemConfig::from_lookup(lookup_from(&[(RECENT_ORDERS_LIMIT_VAR, "ten")]));
        assert!(matches!(garbage, Err(DeliveryError::Validation(_))));
    }
}
