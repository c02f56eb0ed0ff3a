//! Integration test: session termination
//!
//! Covers outcome precedence (endpoint vs. time limit), the terminal
//! nature of an ended session, and the invariants that must hold for a
//! whole run.

use bunny_run::config::{Preset, RunConfig};
use bunny_run::constants::FRAME_TICK_MS;
use bunny_run::course;
use bunny_run::game_logic::{process_input, tick_run, RunEvent, RunnerInput};
use bunny_run::game_state::{Outcome, RunState};

fn new_run(preset: Preset) -> RunState {
    RunState::new(RunConfig::from_preset(preset))
}

fn step(state: &mut RunState) -> Vec<RunEvent> {
    tick_run(state, FRAME_TICK_MS)
}

// =============================================================================
// Outcome precedence
// =============================================================================

#[test]
fn test_time_limit_expiry_times_out() {
    let mut state = new_run(Preset::Classic);

    // One frame short of the 60s limit (3750 frames at 16ms)
    state.frame_count = 3_749;
    assert!(state.remaining_seconds() > 0.0);

    let events = step(&mut state);

    assert_eq!(state.outcome, Some(Outcome::TimedOut));
    assert_eq!(events, vec![RunEvent::TimeExpired]);
}

#[test]
fn test_endpoint_overlap_completes_regardless_of_remaining_time() {
    let mut state = new_run(Preset::Classic);

    // Teleport the rabbit onto the endpoint in the first second of play
    state.rabbit.x = course::endpoint_x();
    let events = step(&mut state);

    assert_eq!(state.outcome, Some(Outcome::Completed));
    assert!(events.contains(&RunEvent::EndpointReached));
    assert!(
        state.remaining_seconds() > 59.0,
        "completion must not wait for the clock"
    );
}

#[test]
fn test_timeout_frame_does_not_also_complete() {
    let mut state = new_run(Preset::Classic);

    // Rabbit parked on the endpoint, but the clock has already run out:
    // the expiry check runs before anything else in the frame.
    state.rabbit.x = course::endpoint_x();
    state.frame_count = 3_750;

    let events = step(&mut state);

    assert_eq!(state.outcome, Some(Outcome::TimedOut));
    assert!(!events.contains(&RunEvent::EndpointReached));
}

// =============================================================================
// Terminal session state
// =============================================================================

#[test]
fn test_ended_session_stops_mutating() {
    let mut state = new_run(Preset::Classic);
    state.rabbit.x = course::endpoint_x();
    step(&mut state);
    assert!(state.is_over());

    let frames_before = state.frame_count;
    let score_before = state.score;
    let x_before = state.rabbit.x;

    process_input(&mut state, RunnerInput::MoveRight);
    process_input(&mut state, RunnerInput::Jump);
    let events = tick_run(&mut state, 1_000);

    assert!(events.is_empty());
    assert_eq!(state.frame_count, frames_before);
    assert_eq!(state.score, score_before);
    assert_eq!(state.rabbit.x, x_before);
    assert!(!state.jump_queued);
}

#[test]
fn test_outcome_is_set_at_most_once() {
    let mut state = new_run(Preset::Classic);
    state.rabbit.x = course::endpoint_x();
    step(&mut state);
    assert_eq!(state.outcome, Some(Outcome::Completed));

    // Push the clock past the limit: the outcome must not flip
    state.frame_count = 1_000_000;
    step(&mut state);
    assert_eq!(state.outcome, Some(Outcome::Completed));
}

// =============================================================================
// Whole-run invariants
// =============================================================================

#[test]
fn test_invariants_hold_under_jump_spam() {
    let mut state = new_run(Preset::Swift);
    let mut last_score = 0;

    for frame in 0..1_000u32 {
        process_input(&mut state, RunnerInput::MoveRight);
        if frame % 30 == 0 {
            process_input(&mut state, RunnerInput::Jump);
        }
        step(&mut state);

        assert!(
            state.rabbit.y <= state.config.ground_level,
            "rabbit may never sink below ground"
        );
        assert_eq!(state.background.tiles().len(), 2);
        assert!(state.score >= last_score, "score is monotonic");
        last_score = state.score;

        if state.is_over() {
            break;
        }
    }
}

#[test]
fn test_console_summary_strings() {
    assert_eq!(Outcome::Completed.message(), "Level Completed!");
    assert_eq!(Outcome::TimedOut.message(), "Game Over!");
}
