//! Session state for a single run.

use crate::background::Background;
use crate::camera::Camera;
use crate::config::RunConfig;
use crate::constants::*;
use crate::course;
use crate::entity::Entity;
use crate::rabbit::Rabbit;
use serde::{Deserialize, Serialize};

/// How a run ended. Terminal: once set, gameplay state stops mutating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The rabbit reached the endpoint before the time limit.
    Completed,
    /// The time limit expired first.
    TimedOut,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Completed => "Level Completed!",
            Self::TimedOut => "Game Over!",
        }
    }
}

/// Everything a run owns: the rabbit, the live entity set, the looping
/// background, the camera, and the session clock/score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub config: RunConfig,
    pub rabbit: Rabbit,
    pub entities: Vec<Entity>,
    pub background: Background,
    pub camera: Camera,
    pub score: u32,
    /// Physics frames elapsed since the run started.
    pub frame_count: u64,
    /// Sub-frame accumulator for fixed-step ticking (milliseconds).
    pub accumulated_ms: u64,
    /// Frames remaining on the current move-right hold window.
    pub move_hold_frames: u32,
    /// Jump input queued for the next frame.
    pub jump_queued: bool,
    /// Two-frame run animation counter.
    pub run_anim_frame: u32,
    pub outcome: Option<Outcome>,
}

impl RunState {
    pub fn new(config: RunConfig) -> Self {
        Self {
            rabbit: Rabbit::new(RABBIT_START_X, config.ground_level),
            entities: course::standard_course(),
            background: Background::new(BACKGROUND_TILE_WIDTH),
            camera: Camera::new(),
            score: 0,
            frame_count: 0,
            accumulated_ms: 0,
            move_hold_frames: 0,
            jump_queued: false,
            run_anim_frame: 0,
            outcome: None,
            config,
        }
    }

    /// Seconds of run time elapsed, derived from the fixed frame clock.
    pub fn elapsed_seconds(&self) -> f64 {
        self.frame_count as f64 * FRAME_TICK_MS as f64 / 1000.0
    }

    /// Seconds left before the run times out.
    pub fn remaining_seconds(&self) -> f64 {
        (self.config.time_limit_seconds - self.elapsed_seconds()).max(0.0)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn carrots_remaining(&self) -> usize {
        self.entities
            .iter()
            .filter(|e| e.kind.is_collectible())
            .count()
    }
}
