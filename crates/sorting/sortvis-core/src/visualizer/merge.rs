//! Merge sort family.

use crate::algorithm::Algorithm;
use crate::canvas::{Frame, Layout};
use crate::config::DriverConfig;
use crate::dataset::Dataset;
use crate::driver::AnimationDriver;
use crate::error::SortError;

use super::{SortStart, Visualizer, VisualizerKind};

#[derive(Debug)]
pub struct MergeVisualizer {
    driver: AnimationDriver,
}

impl MergeVisualizer {
    pub fn new(data: Dataset, cfg: &DriverConfig) -> Self {
        Self {
            driver: AnimationDriver::new(data, cfg.clone()),
        }
    }

    pub fn boxed(data: Dataset, cfg: &DriverConfig) -> Result<Box<dyn Visualizer>, SortError> {
        Ok(Box::new(Self::new(data, cfg)))
    }

    fn decorate_frame(frame: &mut Frame) {
        frame.layout = Layout::Split;
    }
}

impl Visualizer for MergeVisualizer {
    fn kind(&self) -> VisualizerKind {
        VisualizerKind::Merge
    }

    fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    fn driver_mut(&mut self) -> &mut AnimationDriver {
        &mut self.driver
    }

    fn decorate(&self) -> fn(&mut Frame) {
        Self::decorate_frame
    }

    fn sort(&mut self, _selector: Option<Algorithm>) -> SortStart {
        self.driver.sort(|data| Algorithm::Merge.producer(data))
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Merge
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::step::StepAction;

    #[test]
    fn merge_writes_into_place() {
        let mut vis = MergeVisualizer::new(Dataset::new(vec![4, 3, 2, 1]), &DriverConfig::default());
        let mut canvas = RecordingCanvas::new();
        vis.sort(None);
        let mut writes = 0;
        while !vis.phase().is_complete() {
            let out = vis.update(Duration::from_millis(100), &mut canvas);
            writes += out
                .steps
                .iter()
                .filter(|s| matches!(s.action, StepAction::Write { .. }))
                .count();
        }
        assert_eq!(vis.array(), &[1, 2, 3, 4]);
        assert_eq!(writes, 8);
        assert!(canvas.frames.iter().all(|f| f.layout == Layout::Split));
    }
}
