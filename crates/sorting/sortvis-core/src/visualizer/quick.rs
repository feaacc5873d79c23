//! Quick sort family. Frames use the partition layout so the renderer can
//! show the pivot and the current partition bounds.

use crate::algorithm::Algorithm;
use crate::canvas::{Frame, Layout};
use crate::config::DriverConfig;
use crate::dataset::Dataset;
use crate::driver::AnimationDriver;
use crate::error::SortError;

use super::{SortStart, Visualizer, VisualizerKind};

#[derive(Debug)]
pub struct QuickVisualizer {
    driver: AnimationDriver,
}

impl QuickVisualizer {
    pub fn new(data: Dataset, cfg: &DriverConfig) -> Self {
        Self {
            driver: AnimationDriver::new(data, cfg.clone()),
        }
    }

    pub fn boxed(data: Dataset, cfg: &DriverConfig) -> Result<Box<dyn Visualizer>, SortError> {
        Ok(Box::new(Self::new(data, cfg)))
    }

    fn decorate_frame(frame: &mut Frame) {
        frame.layout = Layout::Partition;
    }
}

impl Visualizer for QuickVisualizer {
    fn kind(&self) -> VisualizerKind {
        VisualizerKind::Quick
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
        self.driver.sort(|data| Algorithm::Quick.producer(data))
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Quick
    }
}
