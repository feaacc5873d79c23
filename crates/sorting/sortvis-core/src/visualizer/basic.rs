//! Basic family: bubble, selection and insertion sort on plain bars.

use tracing::debug;

use crate::algorithm::Algorithm;
use crate::canvas::{Frame, Layout};
use crate::config::DriverConfig;
use crate::dataset::Dataset;
use crate::driver::AnimationDriver;
use crate::error::SortError;

use super::{SortStart, Visualizer, VisualizerKind};

#[derive(Debug)]
pub struct BasicVisualizer {
    driver: AnimationDriver,
    // fallback when sort() gets no selector
    default_algorithm: Algorithm,
}

impl BasicVisualizer {
    pub fn new(data: Dataset, cfg: &DriverConfig) -> Self {
        Self {
            driver: AnimationDriver::new(data, cfg.clone()),
            default_algorithm: Algorithm::Bubble,
        }
    }

    pub fn boxed(data: Dataset, cfg: &DriverConfig) -> Result<Box<dyn Visualizer>, SortError> {
        Ok(Box::new(Self::new(data, cfg)))
    }

    /// Change the fallback algorithm. Only the basic algorithms are accepted.
    pub fn set_default_algorithm(&mut self, algorithm: Algorithm) -> Result<(), SortError> {
        if !Algorithm::BASIC.contains(&algorithm) {
            return Err(SortError::UnknownAlgorithm(algorithm.id().to_string()));
        }
        self.default_algorithm = algorithm;
        Ok(())
    }

    fn decorate_frame(frame: &mut Frame) {
        frame.layout = Layout::Bars;
    }
}

impl Visualizer for BasicVisualizer {
    fn kind(&self) -> VisualizerKind {
        VisualizerKind::Basic
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

    fn sort(&mut self, selector: Option<Algorithm>) -> SortStart {
        let algorithm = match selector {
            Some(a) if Algorithm::BASIC.contains(&a) => a,
            Some(other) => {
                debug!(algorithm = other.id(), "not a basic algorithm; using default");
                self.default_algorithm
            }
            None => self.default_algorithm,
        };
        self.driver.sort(|data| algorithm.producer(data))
    }

    fn algorithm(&self) -> Algorithm {
        self.default_algorithm
    }
}
