//! Driver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the animation driver.
/// Keep this minimal; hosts usually only touch the delay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Wait between two ticks, in milliseconds.
    pub delay_ms: u64,
    /// Upper bound on ticks run by one `update()` call when the host falls
    /// behind (large `dt`, zero delay).
    pub max_ticks_per_update: usize,
}

impl DriverConfig {
    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            delay_ms: 100,
            max_ticks_per_update: 64,
        }
    }
}
