//! Key handling for the Game screen.

use crate::game_logic::{process_input, RunnerInput};
use crate::game_state::RunState;
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling one key event during a run.
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Player abandoned the run (Esc or q). Nothing to report.
    Abandon,
}

/// Map a key event to a runner action and feed it to the simulation.
pub fn handle_game_key(key: KeyEvent, state: &mut RunState) -> InputResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputResult::Abandon,
        KeyCode::Right => {
            process_input(state, RunnerInput::MoveRight);
            InputResult::Continue
        }
        KeyCode::Up | KeyCode::Char(' ') => {
            process_input(state, RunnerInput::Jump);
            InputResult::Continue
        }
        _ => {
            process_input(state, RunnerInput::Other);
            InputResult::Continue
        }
    }
}
