//! Mode registry: the visualizer families the orchestrator can switch to.
//!
//! Entries are looked up by id and kept in registration order so hosts can
//! build their mode menu from [`ModeRegistry::iter`].

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use sortvis_core::{
    BasicVisualizer, Dataset, DriverConfig, HeapVisualizer, MergeVisualizer, QuickVisualizer,
    SortError, Visualizer,
};

/// Builds a visualizer over the (already truncated) dataset.
pub type VisualizerFactory =
    fn(Dataset, &DriverConfig) -> Result<Box<dyn Visualizer>, SortError>;

static SHARED: Lazy<Arc<ModeRegistry>> = Lazy::new(|| Arc::new(ModeRegistry::standard()));

/// One selectable mode.
#[derive(Clone)]
pub struct ModeConfig {
    pub id: String,
    pub title: String,
    pub factory: VisualizerFactory,
    /// Datasets are truncated to this many elements before the factory runs.
    pub max_size: Option<usize>,
    /// Whether the mode offers a choice between several algorithms.
    pub algorithm_choice: bool,
}

impl ModeConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>, factory: VisualizerFactory) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            factory,
            max_size: None,
            algorithm_choice: false,
        }
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn with_algorithm_choice(mut self) -> Self {
        self.algorithm_choice = true;
        self
    }

    /// Truncate `data` to this mode's cap.
    pub fn fit(&self, data: &Dataset) -> Dataset {
        data.truncated(self.max_size)
    }

    pub fn build(
        &self,
        data: Dataset,
        cfg: &DriverConfig,
    ) -> Result<Box<dyn Visualizer>, SortError> {
        (self.factory)(data, cfg)
    }
}

impl fmt::Debug for ModeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeConfig")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("max_size", &self.max_size)
            .field("algorithm_choice", &self.algorithm_choice)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct ModeRegistry {
    modes: IndexMap<String, ModeConfig>,
}

impl ModeRegistry {
    /// Empty registry; tests use this to build isolated instances.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four built-in modes.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(
            ModeConfig::new("basic", "Basic Sorting Algorithms", BasicVisualizer::boxed)
                .with_algorithm_choice(),
        );
        registry.register(
            ModeConfig::new("quick", "Quick Sort", QuickVisualizer::boxed).with_max_size(8),
        );
        registry.register(
            ModeConfig::new("merge", "Merge Sort", MergeVisualizer::boxed).with_max_size(8),
        );
        registry.register(
            ModeConfig::new("heap", "Heap Sort", HeapVisualizer::boxed).with_max_size(10),
        );
        registry
    }

    /// Process-wide read-only instance of [`ModeRegistry::standard`].
    pub fn shared() -> Arc<ModeRegistry> {
        Arc::clone(&SHARED)
    }

    /// Insert or replace a mode. Returns the replaced entry.
    pub fn register(&mut self, mode: ModeConfig) -> Option<ModeConfig> {
        self.modes.insert(mode.id.clone(), mode)
    }

    pub fn get(&self, id: &str) -> Option<&ModeConfig> {
        self.modes.get(id)
    }

    pub fn lookup(&self, id: &str) -> Result<&ModeConfig, SortError> {
        self.get(id)
            .ok_or_else(|| SortError::UnknownMode(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.modes.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModeConfig> {
        self.modes.values()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
