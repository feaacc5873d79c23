//! Orchestrator configuration.

use serde::{Deserialize, Serialize};
use sortvis_core::{DriverConfig, Element, SortError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Size of the dataset generated at startup.
    pub default_data_size: usize,
    /// Mode selected at startup.
    pub initial_mode: String,
    /// Bounds applied to speed changes, in milliseconds.
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Inclusive range of generated values.
    pub value_min: Element,
    pub value_max: Element,
    /// Fixed seed for the data generator (reproducible sessions).
    pub seed: Option<u64>,
    /// Passed to every visualizer; `driver.delay_ms` is the initial speed.
    pub driver: DriverConfig,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            default_data_size: 15,
            initial_mode: "basic".to_string(),
            min_delay_ms: 10,
            max_delay_ms: 1000,
            value_min: 5,
            value_max: 100,
            seed: None,
            driver: DriverConfig::default(),
        }
    }
}

impl OrchestratorConfig {
    pub fn validate(&self) -> Result<(), SortError> {
        if self.min_delay_ms > self.max_delay_ms {
            return Err(SortError::InvalidConfig(format!(
                "delay bounds {}..={} are empty",
                self.min_delay_ms, self.max_delay_ms
            )));
        }
        if self.value_min > self.value_max {
            return Err(SortError::InvalidConfig(format!(
                "value range {}..={} is empty",
                self.value_min, self.value_max
            )));
        }
        if self.driver.max_ticks_per_update == 0 {
            return Err(SortError::InvalidConfig(
                "max_ticks_per_update must be at least 1".into(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn clamp_delay(&self, ms: u64) -> u64 {
        ms.clamp(self.min_delay_ms, self.max_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: OrchestratorConfig =
            serde_json::from_str(r#"{"initial_mode":"heap","seed":3}"#).unwrap();
        assert_eq!(cfg.initial_mode, "heap");
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.default_data_size, 15);
        assert_eq!(cfg.driver.delay_ms, 100);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn clamp_delay_respects_bounds() {
        let cfg = OrchestratorConfig::default();
        assert_eq!(cfg.clamp_delay(0), 10);
        assert_eq!(cfg.clamp_delay(250), 250);
        assert_eq!(cfg.clamp_delay(5000), 1000);
    }

    #[test]
    fn inverted_bounds_are_invalid() {
        let cfg = OrchestratorConfig {
            min_delay_ms: 500,
            max_delay_ms: 100,
            ..OrchestratorConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(SortError::InvalidConfig(_))));
    }
}
