//! Heap sort family. Frames carry the heap boundary: positions before it
//! form the max-heap, positions from it on are already sorted.

use crate::algorithm::Algorithm;
use crate::canvas::{Frame, Layout};
use crate::config::DriverConfig;
use crate::dataset::Dataset;
use crate::driver::AnimationDriver;
use crate::error::SortError;

use super::{SortStart, Visualizer, VisualizerKind};

#[derive(Debug)]
pub struct HeapVisualizer {
    driver: AnimationDriver,
}

impl HeapVisualizer {
    pub fn new(data: Dataset, cfg: &DriverConfig) -> Self {
        Self {
            driver: AnimationDriver::new(data, cfg.clone()),
        }
    }

    pub fn boxed(data: Dataset, cfg: &DriverConfig) -> Result<Box<dyn Visualizer>, SortError> {
        Ok(Box::new(Self::new(data, cfg)))
    }

    fn decorate_frame(frame: &mut Frame) {
        frame.layout = Layout::Tree;
        // extraction marks the tail one position at a time
        frame.heap_size = Some(frame.values.len().saturating_sub(frame.sorted.len()));
    }
}

impl Visualizer for HeapVisualizer {
    fn kind(&self) -> VisualizerKind {
        VisualizerKind::Heap
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
        self.driver.sort(|data| Algorithm::Heap.producer(data))
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Heap
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::canvas::RecordingCanvas;

    #[test]
    fn heap_size_shrinks_to_zero() {
        let mut vis = HeapVisualizer::new(Dataset::new(vec![2, 5, 1, 4, 3]), &DriverConfig::default());
        let mut canvas = RecordingCanvas::new();
        assert_eq!(vis.frame().heap_size, Some(5));
        vis.sort(None);
        while !vis.phase().is_complete() {
            vis.update(Duration::from_millis(100), &mut canvas);
        }
        let sizes: Vec<usize> = canvas.frames.iter().filter_map(|f| f.heap_size).collect();
        assert!(sizes.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(sizes.last(), Some(&0));
        assert_eq!(vis.array(), &[1, 2, 3, 4, 5]);
    }
}
