//! Recorded input tapes
//!
//! A tape holds the seed, the settings and every tick's decoded input, which
//! is enough to rebuild a match exactly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReplayError;
use crate::settings::MatchSettings;
use crate::sim::{Intent, MatchState, Side, Snapshot, TickInput, tick};

/// One tick of recorded input, `[x, y]` per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub left: [i8; 2],
    pub right: [i8; 2],
    #[serde(default)]
    pub abort: bool,
}

impl Frame {
    pub fn to_input(&self) -> TickInput {
        TickInput {
            left: Intent::new(self.left[0], self.left[1]),
            right: Intent::new(self.right[0], self.right[1]),
            abort: self.abort,
        }
    }
}

impl From<&TickInput> for Frame {
    fn from(input: &TickInput) -> Self {
        Self {
            left: [input.left.x, input.left.y],
            right: [input.right.x, input.right.y],
            abort: input.abort,
        }
    }
}

/// A recorded match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tape {
    pub seed: u64,
    #[serde(default)]
    pub settings: MatchSettings,
    pub frames: Vec<Frame>,
}

/// What a replay produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayOutcome {
    /// Frames consumed before the tape ran out or the match ended
    pub ticks: usize,
    pub snapshot: Snapshot,
    pub winner: Option<Side>,
}

impl Tape {
    pub fn new(seed: u64, settings: MatchSettings) -> Self {
        Self {
            seed,
            settings,
            frames: Vec::new(),
        }
    }

    /// Append one tick of input
    pub fn record(&mut self, input: &TickInput) {
        self.frames.push(Frame::from(input));
    }

    /// Parse and validate a JSON tape
    pub fn decode(json: &str) -> Result<Self, ReplayError> {
        let tape: Self = serde_json::from_str(json)?;
        tape.validate()?;
        Ok(tape)
    }

    /// Read a JSON tape from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tape = Self::decode(&json)?;
        log::info!(
            "Loaded tape {} ({} frames)",
            path.as_ref().display(),
            tape.frames.len()
        );
        Ok(tape)
    }

    pub fn encode(&self) -> Result<String, ReplayError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Settings must be playable and every axis one of -1, 0, 1
    pub fn validate(&self) -> Result<(), ReplayError> {
        self.settings.validate()?;
        for (tick, frame) in self.frames.iter().enumerate() {
            let mut axes = frame.left.iter().chain(frame.right.iter());
            if let Some(&value) = axes.find(|v| !(-1i8..=1).contains(*v)) {
                return Err(ReplayError::InvalidAxis { tick, value });
            }
        }
        Ok(())
    }
}

/// Play a tape from a fresh match
///
/// Stops at the end of the tape or as soon as the match is over.
pub fn run(tape: &Tape) -> Result<ReplayOutcome, ReplayError> {
    let mut state = MatchState::new(tape.settings.clone(), tape.seed)?;
    let mut ticks = 0;

    for frame in &tape.frames {
        if state.phase.is_over() {
            break;
        }
        tick(&mut state, &frame.to_input());
        ticks += 1;
    }

    Ok(ReplayOutcome {
        ticks,
        snapshot: state.snapshot(),
        winner: state.phase.winner(),
    })
}
