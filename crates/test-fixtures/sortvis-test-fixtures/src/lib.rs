//! Shared datasets and scripted scenarios for the workspace tests.
//!
//! `fixtures/manifest.json` maps fixture names to files under `fixtures/`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    datasets: BTreeMap<String, String>,
    #[serde(default)]
    scenarios: BTreeMap<String, String>,
}

/// Parse the file registered under `name` in one manifest section.
fn load_entry<T: DeserializeOwned>(
    section: &BTreeMap<String, String>,
    kind: &str,
    name: &str,
) -> Result<T> {
    let rel = section
        .get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))?;
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../../fixtures")
        .join(rel);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {kind} fixture {rel}"))
}

/// Input arrays (`[i32]` JSON).
pub mod datasets {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.datasets.keys().cloned().collect()
    }

    pub fn values(name: &str) -> Result<Vec<i32>> {
        load_entry(&MANIFEST.datasets, "dataset", name)
    }
}

/// Scripted intent sequences with expected outcomes; the shape is up to the
/// consuming test.
pub mod scenarios {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.scenarios.keys().cloned().collect()
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        load_entry(&MANIFEST.scenarios, "scenario", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dataset_loads() {
        for key in datasets::keys() {
            let values = datasets::values(&key).unwrap();
            assert!(values.len() <= 50, "{key} is larger than any test needs");
        }
    }

    #[test]
    fn every_scenario_parses() {
        for key in scenarios::keys() {
            let _: serde_json::Value = scenarios::load(&key).unwrap();
        }
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert!(datasets::values("missing").is_err());
    }
}
