mod background;
mod build_info;
mod camera;
mod config;
mod constants;
mod course;
mod entity;
mod game_logic;
mod game_state;
mod input;
mod rabbit;
mod rect;
mod ui;

use config::{Preset, RunConfig};
use constants::*;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game_logic::tick_run;
use game_state::{Outcome, RunState};
use input::InputResult;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use ui::menu_scene::{self, MenuAction, MenuScreen};

enum Screen {
    Menu,
    Game,
    Ending,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    let mut preset = Preset::Classic;
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "bunny-run {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Bunny Run - Terminal Endless Runner\n");
                println!("Usage: bunny-run [preset]\n");
                println!("Presets:");
                println!("  classic    Gentle gravity, measured pace (default)");
                println!("  swift      Heavier gravity, triple ground speed");
                println!();
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => match Preset::from_arg(other) {
                Some(p) => preset = p,
                None => {
                    eprintln!("Unknown preset: {}", other);
                    eprintln!("Run 'bunny-run --help' for usage.");
                    std::process::exit(1);
                }
            },
        }
    }

    // Screen state variables
    let mut current_screen = Screen::Menu;
    let mut menu = MenuScreen::new();
    let mut run_state: Option<RunState> = None;
    let mut summary: Option<(Outcome, u32)> = None;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    'outer: loop {
        match current_screen {
            Screen::Menu => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    menu_scene::draw(frame, area, &menu);
                })?;

                if event::poll(Duration::from_millis(MENU_POLL_MS))? {
                    let mut action = None;
                    match event::read()? {
                        Event::Key(key_event) => match key_event.code {
                            KeyCode::Up => menu.select_prev(),
                            KeyCode::Down => menu.select_next(),
                            KeyCode::Enter => {
                                action = Some(menu_scene::selected_action(&menu));
                            }
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                action = Some(MenuAction::Exit);
                            }
                            _ => {}
                        },
                        Event::Mouse(mouse_event) => {
                            if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) {
                                action = menu_scene::hit_test(
                                    terminal.size()?,
                                    mouse_event.column,
                                    mouse_event.row,
                                );
                            }
                        }
                        _ => {}
                    }

                    match action {
                        Some(MenuAction::Play) => {
                            run_state = Some(RunState::new(RunConfig::from_preset(preset)));
                            current_screen = Screen::Game;
                        }
                        Some(MenuAction::Exit) => break 'outer,
                        None => {}
                    }
                }
            }

            Screen::Game => {
                // Take the run state (always Some when entering this screen)
                let mut state = run_state
                    .take()
                    .expect("run state should be initialized when entering the Game screen");

                let mut last_frame = Instant::now();
                loop {
                    terminal.draw(|frame| {
                        let area = frame.size();
                        ui::run_scene::draw(frame, area, &state);
                    })?;

                    // Poll for input (non-blocking)
                    if event::poll(Duration::from_millis(GAME_POLL_MS))? {
                        if let Event::Key(key_event) = event::read()? {
                            if let InputResult::Abandon =
                                input::handle_game_key(key_event, &mut state)
                            {
                                // Abandoned runs report nothing
                                current_screen = Screen::Menu;
                                break;
                            }
                        }
                    }

                    // Advance the simulation by the elapsed wall-clock time
                    let dt_ms = last_frame.elapsed().as_millis() as u64;
                    last_frame = Instant::now();
                    let _events = tick_run(&mut state, dt_ms);

                    if let Some(outcome) = state.outcome {
                        summary = Some((outcome, state.score));
                        current_screen = Screen::Ending;
                        break;
                    }
                }
            }

            Screen::Ending => {
                let (outcome, score) =
                    summary.expect("summary should be set when entering the Ending screen");

                terminal.draw(|frame| {
                    let area = frame.size();
                    ui::ending_scene::draw(frame, area, outcome, score);
                })?;

                if event::poll(Duration::from_millis(MENU_POLL_MS))? {
                    match event::read()? {
                        Event::Key(_) => break 'outer,
                        Event::Mouse(mouse_event) => {
                            if let MouseEventKind::Down(_) = mouse_event.kind {
                                break 'outer;
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    // Outcome and final score go to the console once the terminal is restored
    if let Some((outcome, score)) = summary {
        println!("{}", outcome.message());
        println!("Final Score: {}", score);
    }

    Ok(())
}
