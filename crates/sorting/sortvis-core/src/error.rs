use thiserror::Error;

/// Errors surfaced by the core and recovered at the orchestrator boundary.
///
/// None of these are fatal: callers log them and reflect them through status
/// text. Invalid control calls (stepping outside step mode, sorting while
/// running) are not errors at all; see [`crate::SortStart`] and
/// [`crate::StepOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("unknown mode '{0}'")]
    UnknownMode(String),
    #[error("visualizer for '{0}' is not available")]
    VisualizerUnavailable(String),
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
