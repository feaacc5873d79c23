//! Animation driver: pumps a step producer at a configurable cadence.
//!
//! The host owns the clock and calls [`AnimationDriver::update`] with the
//! elapsed frame time. The driver converts elapsed time into ticks; one tick
//! consumes exactly one step, applies it and draws. Between ticks the driver
//! holds a cancellable wait: `stop()` or `reset()` drop it, so no further step
//! is consumed and the producer stays on its next unconsumed step.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::canvas::{Canvas, Frame};
use crate::config::DriverConfig;
use crate::dataset::{Dataset, Element};
use crate::outputs::{DriverOutputs, SortEvent};
use crate::producer::StepProducer;
use crate::step::{AlgorithmStep, StepAction};
use crate::visualizer::{SortStart, StepOutcome};

/// Family-specific frame decoration (layout, extra markers).
pub type Decorate = fn(&mut Frame);

/// Lifecycle of one visualizer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPhase {
    /// No producer; array at its pre-sort value.
    #[default]
    Idle,
    /// Producer installed and ticking (or awaiting `step()` in step mode).
    Running,
    /// Producer suspended between two steps.
    Paused,
    /// Producer exhausted; array sorted.
    Complete,
}

impl SortPhase {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Complete => "complete",
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Wait scheduled before the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingTick {
    waited: Duration,
    wait: Duration,
}

impl PendingTick {
    fn now() -> Self {
        Self {
            waited: Duration::ZERO,
            wait: Duration::ZERO,
        }
    }

    fn after(wait: Duration) -> Self {
        Self {
            waited: Duration::ZERO,
            wait,
        }
    }

    #[inline]
    fn is_due(&self) -> bool {
        self.waited >= self.wait
    }
}

/// Visualizer state plus the tick pump.
#[derive(Debug)]
pub struct AnimationDriver {
    cfg: DriverConfig,
    original: Dataset,
    array: Vec<Element>,
    sorted: Vec<bool>,
    phase: SortPhase,
    step_mode: bool,
    delay: Duration,
    producer: Option<Box<dyn StepProducer>>,
    pending: Option<PendingTick>,
    last_step: Option<AlgorithmStep>,
    steps_applied: u64,
    // Events raised by control calls, handed out with the next outputs.
    queued: Vec<SortEvent>,
    outputs: DriverOutputs,
}

impl AnimationDriver {
    /// `cfg.max_ticks_per_update` is raised to 1 if zero.
    pub fn new(data: Dataset, mut cfg: DriverConfig) -> Self {
        cfg.max_ticks_per_update = cfg.max_ticks_per_update.max(1);
        let array = data.as_slice().to_vec();
        Self {
            sorted: vec![false; array.len()],
            delay: cfg.delay(),
            cfg,
            original: data,
            array,
            phase: SortPhase::Idle,
            step_mode: false,
            producer: None,
            pending: None,
            last_step: None,
            steps_applied: 0,
            queued: Vec::new(),
            outputs: DriverOutputs::default(),
        }
    }

    #[inline]
    pub fn phase(&self) -> SortPhase {
        self.phase
    }

    #[inline]
    pub fn array(&self) -> &[Element] {
        &self.array
    }

    /// Array restored by `reset()`.
    #[inline]
    pub fn original(&self) -> &Dataset {
        &self.original
    }

    #[inline]
    pub fn step_mode(&self) -> bool {
        self.step_mode
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[inline]
    pub fn steps_applied(&self) -> u64 {
        self.steps_applied
    }

    #[inline]
    pub fn last_step(&self) -> Option<&AlgorithmStep> {
        self.last_step.as_ref()
    }

    #[inline]
    pub fn has_producer(&self) -> bool {
        self.producer.is_some()
    }

    #[inline]
    pub fn outputs(&self) -> &DriverOutputs {
        &self.outputs
    }

    /// A producer is suspended between steps and has steps left.
    pub fn can_resume(&self) -> bool {
        self.phase.is_paused() && self.producer.as_ref().is_some_and(|p| !p.is_exhausted())
    }

    /// Start a fresh run, resume a paused one, or ignore the call while running.
    pub fn sort<F>(&mut self, make_producer: F) -> SortStart
    where
        F: FnOnce(&[Element]) -> Box<dyn StepProducer>,
    {
        match self.phase {
            SortPhase::Running => {
                debug!("sort() ignored: already running");
                SortStart::AlreadyRunning
            }
            SortPhase::Paused if self.can_resume() => {
                self.phase = SortPhase::Running;
                self.pending = Some(PendingTick::now());
                self.queued.push(SortEvent::Resumed);
                debug!(steps = self.steps_applied, "run resumed");
                SortStart::Resumed
            }
            _ => {
                let producer = make_producer(&self.array);
                let algorithm = producer.algorithm();
                self.producer = Some(producer);
                self.sorted = vec![false; self.array.len()];
                self.last_step = None;
                self.steps_applied = 0;
                self.phase = SortPhase::Running;
                self.pending = Some(PendingTick::now());
                self.queued.push(SortEvent::Started { algorithm });
                info!(algorithm = algorithm.id(), len = self.array.len(), "run started");
                SortStart::Started
            }
        }
    }

    /// Suspend before the next step. Keeps the producer.
    pub fn stop(&mut self) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        self.phase = SortPhase::Paused;
        self.pending = None;
        self.queued.push(SortEvent::Paused);
        debug!(steps = self.steps_applied, "run paused");
        true
    }

    /// Drop any producer and restore (or replace) the pre-sort array.
    pub fn reset(&mut self, data: Option<Dataset>, canvas: &mut dyn Canvas, decorate: Decorate) {
        if let Some(data) = data {
            self.original = data;
        }
        self.array = self.original.as_slice().to_vec();
        self.sorted = vec![false; self.array.len()];
        self.producer = None;
        self.pending = None;
        self.last_step = None;
        self.steps_applied = 0;
        self.phase = SortPhase::Idle;
        self.queued.push(SortEvent::Reset);
        debug!(len = self.array.len(), "driver reset");
        self.draw(canvas, decorate);
    }

    pub fn set_step_mode(&mut self, enabled: bool) {
        self.step_mode = enabled;
        if !enabled && self.phase.is_running() && self.pending.is_none() {
            self.pending = Some(PendingTick::after(self.delay));
        }
    }

    /// New delay; a wait already in progress keeps its length.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Advance the clock by `dt`, running every tick that became due.
    pub fn update(
        &mut self,
        dt: Duration,
        canvas: &mut dyn Canvas,
        decorate: Decorate,
    ) -> &DriverOutputs {
        self.begin_outputs();
        if !self.phase.is_running() || self.step_mode {
            return &self.outputs;
        }

        let mut pending = self
            .pending
            .unwrap_or_else(|| PendingTick::after(self.delay));
        pending.waited = pending.waited.saturating_add(dt);

        let mut ticks = 0usize;
        while pending.is_due() && ticks < self.cfg.max_ticks_per_update {
            let carry = pending.waited - pending.wait;
            self.tick(canvas, decorate);
            ticks += 1;
            if !self.phase.is_running() {
                self.pending = None;
                return &self.outputs;
            }
            pending = PendingTick {
                waited: carry,
                wait: self.delay,
            };
        }
        // drop backlog the cap did not let us run
        pending.waited = pending.waited.min(pending.wait);
        self.pending = Some(pending);
        &self.outputs
    }

    /// Step mode only: consume exactly one step.
    pub fn step(&mut self, canvas: &mut dyn Canvas, decorate: Decorate) -> StepOutcome {
        self.begin_outputs();
        if !self.step_mode {
            debug!("step() ignored: not in step mode");
            return StepOutcome::Ignored;
        }
        if self.producer.is_none() {
            debug!("step() ignored: no producer");
            return StepOutcome::Ignored;
        }
        self.tick(canvas, decorate);
        if self.phase.is_complete() {
            StepOutcome::Completed
        } else {
            StepOutcome::Applied
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, decorate: Decorate) {
        canvas.draw(&self.frame(decorate));
    }

    /// Current render request.
    pub fn frame(&self, decorate: Decorate) -> Frame {
        let highlights = match (&self.last_step, self.phase) {
            (_, SortPhase::Complete) | (None, _) => Vec::new(),
            (Some(step), _) => Frame::highlights_for(step),
        };
        let mut frame = Frame {
            values: self.array.clone(),
            highlights,
            sorted: self
                .sorted
                .iter()
                .enumerate()
                .filter_map(|(i, &done)| done.then_some(i))
                .collect(),
            phase: self.phase,
            steps_applied: self.steps_applied,
            ..Frame::default()
        };
        decorate(&mut frame);
        frame
    }

    fn begin_outputs(&mut self) {
        self.outputs.clear();
        self.outputs.events.append(&mut self.queued);
    }

    /// Consume one step (or detect exhaustion), apply, draw.
    fn tick(&mut self, canvas: &mut dyn Canvas, decorate: Decorate) {
        let next = match self.producer.as_mut() {
            Some(producer) => producer.next_step(),
            None => return,
        };
        match next {
            Some(step) => {
                self.apply(step);
                if self.producer.as_ref().is_some_and(|p| p.is_exhausted()) {
                    self.complete();
                }
            }
            None => self.complete(),
        }
        self.draw(canvas, decorate);
    }

    fn apply(&mut self, step: AlgorithmStep) {
        step.apply(&mut self.array);
        if let StepAction::MarkSorted { index } = step.action {
            if let Some(slot) = self.sorted.get_mut(index) {
                *slot = true;
            }
        }
        self.steps_applied += 1;
        self.outputs.push_step(step.clone());
        self.last_step = Some(step);
    }

    fn complete(&mut self) {
        let Some(producer) = self.producer.take() else {
            return;
        };
        let algorithm = producer.algorithm();
        self.pending = None;
        self.phase = SortPhase::Complete;
        self.sorted.iter_mut().for_each(|s| *s = true);
        self.outputs.push_event(SortEvent::Completed {
            algorithm,
            steps: self.steps_applied,
        });
        info!(
            algorithm = algorithm.id(),
            steps = self.steps_applied,
            "run complete"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::canvas::RecordingCanvas;

    fn bars(_: &mut Frame) {}

    fn driver(values: Vec<Element>, delay_ms: u64) -> AnimationDriver {
        AnimationDriver::new(
            Dataset::new(values),
            DriverConfig {
                delay_ms,
                ..DriverConfig::default()
            },
        )
    }

    fn bubble(data: &[Element]) -> Box<dyn StepProducer> {
        Algorithm::Bubble.producer(data)
    }

    #[test]
    fn first_tick_is_due_immediately() {
        let mut d = driver(vec![2, 1], 100);
        let mut canvas = RecordingCanvas::new();
        assert_eq!(d.sort(bubble), SortStart::Started);
        let out = d.update(Duration::ZERO, &mut canvas, bars);
        assert_eq!(out.steps.len(), 1);
        assert!(matches!(out.events[0], SortEvent::Started { algorithm: Algorithm::Bubble }));
    }

    #[test]
    fn ticks_follow_the_delay() {
        let mut d = driver(vec![5, 4, 3, 2, 1], 100);
        let mut canvas = RecordingCanvas::new();
        d.sort(bubble);
        d.update(Duration::ZERO, &mut canvas, bars);
        assert_eq!(d.steps_applied(), 1);
        d.update(Duration::from_millis(99), &mut canvas, bars);
        assert_eq!(d.steps_applied(), 1);
        d.update(Duration::from_millis(1), &mut canvas, bars);
        assert_eq!(d.steps_applied(), 2);
        // surplus time carries over
        d.update(Duration::from_millis(250), &mut canvas, bars);
        assert_eq!(d.steps_applied(), 4);
        d.update(Duration::from_millis(50), &mut canvas, bars);
        assert_eq!(d.steps_applied(), 5);
    }

    #[test]
    fn stop_during_wait_prevents_consumption() {
        let mut d = driver(vec![3, 2, 1], 100);
        let mut canvas = RecordingCanvas::new();
        d.sort(bubble);
        d.update(Duration::ZERO, &mut canvas, bars);
        d.update(Duration::from_millis(60), &mut canvas, bars);
        assert!(d.stop());
        d.update(Duration::from_millis(500), &mut canvas, bars);
        assert_eq!(d.steps_applied(), 1);
        assert!(d.can_resume());
        assert!(!d.stop(), "second stop is a no-op");
    }

    #[test]
    fn delay_change_applies_to_next_wait() {
        let mut d = driver(vec![5, 4, 3, 2, 1], 100);
        let mut canvas = RecordingCanvas::new();
        d.sort(bubble);
        d.update(Duration::ZERO, &mut canvas, bars);
        d.set_delay(Duration::from_millis(10));
        // wait in progress still lasts 100ms
        d.update(Duration::from_millis(50), &mut canvas, bars);
        assert_eq!(d.steps_applied(), 1);
        d.update(Duration::from_millis(50), &mut canvas, bars);
        assert_eq!(d.steps_applied(), 2);
        d.update(Duration::from_millis(10), &mut canvas, bars);
        assert_eq!(d.steps_applied(), 3);
    }

    #[test]
    fn tick_cap_bounds_catch_up() {
        let mut d = AnimationDriver::new(
            Dataset::new((0..40).rev().collect()),
            DriverConfig {
                delay_ms: 0,
                max_ticks_per_update: 5,
            },
        );
        let mut canvas = RecordingCanvas::new();
        d.sort(bubble);
        d.update(Duration::from_secs(10), &mut canvas, bars);
        assert_eq!(d.steps_applied(), 5);
        assert_eq!(canvas.frames.len(), 5);
    }

    #[test]
    fn zero_tick_cap_still_progresses() {
        let mut d = AnimationDriver::new(
            Dataset::new(vec![3, 2, 1]),
            DriverConfig {
                delay_ms: 10,
                max_ticks_per_update: 0,
            },
        );
        let mut canvas = RecordingCanvas::new();
        d.sort(bubble);
        assert_eq!(d.update(Duration::ZERO, &mut canvas, bars).steps.len(), 1);
        for _ in 0..100 {
            d.update(Duration::from_secs(1), &mut canvas, bars);
        }
        assert_eq!(d.phase(), SortPhase::Complete);
        assert_eq!(d.array(), &[1, 2, 3]);
    }

    #[test]
    fn empty_array_completes_on_first_tick() {
        let mut d = driver(vec![], 100);
        let mut canvas = RecordingCanvas::new();
        d.sort(bubble);
        let out = d.update(Duration::ZERO, &mut canvas, bars);
        assert!(out.completed());
        assert!(out.steps.is_empty());
        assert_eq!(d.phase(), SortPhase::Complete);
    }

    #[test]
    fn frame_reports_highlights_and_sorted() {
        let mut d = driver(vec![2, 1], 100);
        let mut canvas = RecordingCanvas::new();
        d.sort(|data: &[Element]| Algorithm::Selection.producer(data));
        d.update(Duration::ZERO, &mut canvas, bars);
        let frame = canvas.last().unwrap();
        assert_eq!(frame.highlights.len(), 2);
        assert_eq!(frame.phase, SortPhase::Running);
        d.update(Duration::from_secs(1), &mut canvas, bars);
        let frame = canvas.last().unwrap();
        assert_eq!(frame.phase, SortPhase::Complete);
        assert_eq!(frame.sorted, vec![0, 1]);
        assert!(frame.highlights.is_empty());
    }
}
