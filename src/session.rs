// One drawing session: the mark store, the distance accumulator and the
// sensitivity, plus the discrete commands that act on them.
// Visual: nothing here touches pixels; the canvas reads `marks()` each frame.

use crate::config::Settings;
use crate::random::{FastRandom, RandomSource};
use crate::sampler::ClawSampler;
use crate::store::MarkStore;
use crate::types::{FrameInput, MarkSegment};
use std::ops::Range;
use tracing::{debug, info};

/// Per-session counters that change every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccumulatorState {
    pub pending_distance: f32, // travel since the last batch of marks
    pub sensitivity: f32,      // scales claw jitter
}

/// What a frame update did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Idle,        // button up
    Accumulated, // moved, but not far enough yet
    Emitted { claws: usize, evicted: usize },
}

/// Discrete key-triggered actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Clear,
    Export,
    AdjustSensitivity,
}

impl Command {
    /// `c`/`C` clear, `s`/`S` export, space re-rolls sensitivity.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'c' | 'C' => Some(Command::Clear),
            's' | 'S' => Some(Command::Export),
            ' ' => Some(Command::AdjustSensitivity),
            _ => None,
        }
    }
}

/// What the host has to do after a command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommandOutcome {
    Cleared,                  // repaint the background now
    ExportRequested,          // capture the canvas
    SensitivityChanged(f32),
}

pub struct Session<R = FastRandom> {
    store: MarkStore,
    sampler: ClawSampler,
    state: AccumulatorState,
    threshold: f32,
    sensitivity_range: Range<f32>,
    rng: R,
}

impl<R: RandomSource> Session<R> {
    pub fn new(settings: &Settings, rng: R) -> Self {
        Self {
            store: MarkStore::new(settings.capacity, settings.evict_batch),
            sampler: ClawSampler::from_settings(settings),
            state: AccumulatorState {
                pending_distance: 0.0,
                sensitivity: settings.initial_sensitivity,
            },
            threshold: settings.threshold,
            sensitivity_range: settings.sensitivity.clone(),
            rng,
        }
    }

    /// Run once per frame.
    ///
    /// While the button is held, pointer travel accumulates; once it passes the
    /// threshold a batch of claw marks is sampled along this frame's movement and
    /// the accumulator starts again from zero.
    pub fn update(&mut self, input: FrameInput) -> FrameOutcome {
        if !input.active {
            return FrameOutcome::Idle;
        }

        self.state.pending_distance += input.previous.distance(input.pointer);
        if self.state.pending_distance <= self.threshold {
            return FrameOutcome::Accumulated;
        }

        let batch = self
            .sampler
            .sample(input.previous, input.pointer, self.state.sensitivity, &mut self.rng);
        let evicted = self.store.append(&batch);
        self.state.pending_distance = 0.0;

        debug!(claws = batch.len(), stored = self.store.len(), "scratch");
        if evicted > 0 {
            debug!(evicted, "dropped oldest marks");
        }
        FrameOutcome::Emitted { claws: batch.len(), evicted }
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Clear => {
                self.store.clear();
                info!("Scratches cleared");
                CommandOutcome::Cleared
            }
            Command::Export => CommandOutcome::ExportRequested,
            Command::AdjustSensitivity => {
                let (start, end) = (self.sensitivity_range.start, self.sensitivity_range.end);
                let sensitivity = self.rng.range(start, end).clamp(start, end);
                self.state.sensitivity = sensitivity;
                info!("Scratch sensitivity: {:.2}", sensitivity);
                CommandOutcome::SensitivityChanged(sensitivity)
            }
        }
    }

    /// Everything to draw this frame, oldest first.
    pub fn marks(&self) -> &[MarkSegment] {
        self.store.snapshot()
    }

    pub fn state(&self) -> AccumulatorState {
        self.state
    }
}
