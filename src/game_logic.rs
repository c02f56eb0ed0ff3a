//! The frame update loop: input intake, jump physics, scrolling, and
//! the per-frame collision scan.

use crate::constants::*;
use crate::game_state::{Outcome, RunState};

/// UI-agnostic input actions for a run in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    /// Right arrow -- opens/refreshes the move-right hold window.
    MoveRight,
    /// Up arrow -- queued, consumed by the next frame.
    Jump,
    /// Any other key.
    Other,
}

/// Events produced while advancing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    CarrotCollected { reward: u32 },
    EndpointReached,
    TimeExpired,
}

/// Process player input. Inputs are queued and consumed by the next
/// physics frame; once the run is over they are ignored.
pub fn process_input(state: &mut RunState, input: RunnerInput) {
    if state.is_over() {
        return;
    }

    match input {
        RunnerInput::MoveRight => state.move_hold_frames = MOVE_HOLD_FRAMES,
        RunnerInput::Jump => state.jump_queued = true,
        RunnerInput::Other => {}
    }
}

/// Advance the run by `dt_ms` of wall-clock time.
///
/// Internally steps in fixed 16ms frames; `dt_ms` is clamped to 100ms
/// so a stalled terminal cannot explode the physics. Returns the events
/// that occurred, in order.
pub fn tick_run(state: &mut RunState, dt_ms: u64) -> Vec<RunEvent> {
    let mut events = Vec::new();
    if state.is_over() {
        return events;
    }

    let dt_ms = dt_ms.min(MAX_FRAME_DELTA_MS);
    state.accumulated_ms += dt_ms;

    while state.accumulated_ms >= FRAME_TICK_MS {
        state.accumulated_ms -= FRAME_TICK_MS;
        step_frame(state, &mut events);

        if state.is_over() {
            break;
        }
    }

    events
}

/// Single fixed frame.
fn step_frame(state: &mut RunState, events: &mut Vec<RunEvent>) {
    state.frame_count += 1;

    // 1. Session clock. A frame that starts at or past the limit ends
    //    the run before anything else moves.
    if state.elapsed_seconds() >= state.config.time_limit_seconds {
        state.outcome = Some(Outcome::TimedOut);
        events.push(RunEvent::TimeExpired);
        return;
    }

    // 2. Horizontal movement while the hold window is open; the camera
    //    follows once the rabbit passes its center.
    if state.move_hold_frames > 0 {
        state.move_hold_frames -= 1;
        state.rabbit.move_right(state.config.move_speed);
        state.camera.follow(state.rabbit.x);
    }

    // 3. Consume the queued jump (ignored by the rabbit if airborne).
    if state.jump_queued {
        state.rabbit.jump(state.config.jump_speed);
        state.jump_queued = false;
    }

    // 4. Vertical motion under gravity, clamped to the ground.
    state.rabbit.apply_gravity(state.config.gravity);

    // 5. Background tiles re-seat behind the camera, every frame.
    state.background.update(state.camera.left());

    // 6. Collision scan: carrots score and vanish, the endpoint ends
    //    the run, boxes are scenery.
    resolve_collisions(state, events);

    // 7. Run animation while grounded.
    if state.rabbit.is_grounded() && state.frame_count % RUN_ANIM_INTERVAL == 0 {
        state.run_anim_frame = (state.run_anim_frame + 1) % RUN_ANIM_FRAMES;
    }
}

/// O(n) overlap scan of the live entity set against the rabbit.
fn resolve_collisions(state: &mut RunState, events: &mut Vec<RunEvent>) {
    let bounds = state.rabbit.bounds();

    let mut i = 0;
    while i < state.entities.len() {
        let entity = state.entities[i];

        if !bounds.intersects(&entity.bounds()) {
            i += 1;
            continue;
        }

        if entity.kind.is_collectible() {
            state.score += state.config.carrot_reward;
            events.push(RunEvent::CarrotCollected {
                reward: state.config.carrot_reward,
            });
            // swap_remove moves the tail entity into slot i; re-test it
            state.entities.swap_remove(i);
            continue;
        }

        if entity.kind.is_terminal() {
            state.outcome = Some(Outcome::Completed);
            events.push(RunEvent::EndpointReached);
            return;
        }

        i += 1;
    }
}
