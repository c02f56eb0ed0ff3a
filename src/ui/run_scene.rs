//! Run scene rendering.
//!
//! The play field is drawn into a 2D cell grid for per-character color
//! control, then stamped row-by-row as Paragraph widgets: looping
//! background tiles, the ground band, course entities, and the rabbit.

use super::common::{create_game_layout, render_info_panel_frame, render_status_bar};
use super::sprites;
use crate::constants::{CARROT_COUNT, VIEW_WIDTH};
use crate::game_state::RunState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const GROUND_CHAR: char = '\u{2593}';
const GROUND_SUB: char = '\u{2591}';

/// World units of jump height represented by one terminal row.
const WORLD_UNITS_PER_ROW: f64 = 7.0;

/// Render the run scene.
pub fn draw(frame: &mut Frame, area: Rect, state: &RunState) {
    let layout = create_game_layout(frame, area, " Bunny Run ", Color::LightGreen, 12, 22);

    render_play_field(frame, layout.content, state);
    render_status(frame, layout.status_bar, state);
    render_info_panel(frame, layout.info_panel, state);
}

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Render the play field: background tiles, ground, entities, rabbit,
/// score and timer.
fn render_play_field(frame: &mut Frame, area: Rect, state: &RunState) {
    if area.height < 6 || area.width < 20 {
        return;
    }

    let render_width = area.width;
    let render_height = area.height;

    let mut buffer: Vec<Vec<Cell>> =
        vec![vec![Cell::default(); render_width as usize]; render_height as usize];

    let cols_per_unit = render_width as f64 / VIEW_WIDTH;
    let view_left = state.camera.left();
    let world_col = |x: f64| ((x - view_left) * cols_per_unit).round() as i32;

    // Ground band occupies the last two rows; entities stand on top.
    let ground_row = (render_height - 2) as usize;

    // ── Background tiles ──────────────────────────────────────────────
    // A dotted seam at each tile boundary plus sparse scenery inside the
    // tile make the two-tile loop visible as it scrolls.
    for &tile_x in &state.background.tiles() {
        let seam = world_col(tile_x);
        if seam >= 0 && seam < render_width as i32 {
            for row in (0..ground_row).step_by(2) {
                buffer[row][seam as usize] = Cell {
                    ch: '\u{00b7}',
                    fg: Color::Rgb(60, 60, 50),
                    bg: Color::Reset,
                };
            }
        }

        for &(offset, row, ch) in &[
            (90.0_f64, 2usize, '~'),
            (210.0, 1, '\u{00b7}'),
            (330.0, 3, '~'),
            (480.0, 2, '\u{00b7}'),
        ] {
            let col = world_col(tile_x + offset);
            if col >= 0 && col < render_width as i32 && row < ground_row {
                buffer[row][col as usize] = Cell {
                    ch,
                    fg: Color::Rgb(50, 55, 45),
                    bg: Color::Reset,
                };
            }
        }
    }

    // ── Ground band ───────────────────────────────────────────────────
    for cell in buffer[ground_row].iter_mut() {
        *cell = Cell {
            ch: GROUND_CHAR,
            fg: Color::Rgb(90, 70, 50),
            bg: Color::Rgb(50, 40, 30),
        };
    }
    if ground_row + 1 < render_height as usize {
        for (i, cell) in buffer[ground_row + 1].iter_mut().enumerate() {
            *cell = Cell {
                ch: if i % 5 == 0 { GROUND_SUB } else { GROUND_CHAR },
                fg: Color::Rgb(70, 55, 40),
                bg: Color::Rgb(40, 32, 24),
            };
        }
    }

    // ── Course entities ───────────────────────────────────────────────
    for entity in &state.entities {
        let (ch, fg) = sprites::entity_glyph(entity.kind);
        let (w_cells, h_cells) = sprites::entity_cells(entity.kind);
        let left = world_col(entity.x);

        for dx in 0..w_cells as i32 {
            let col = left + dx;
            if col < 0 || col >= render_width as i32 {
                continue;
            }
            for dy in 0..h_cells as i32 {
                let row = ground_row as i32 - 1 - dy;
                if row >= 0 {
                    buffer[row as usize][col as usize] = Cell {
                        ch,
                        fg,
                        bg: Color::Reset,
                    };
                }
            }
        }
    }

    // ── Rabbit ────────────────────────────────────────────────────────
    let lift = ((state.config.ground_level - state.rabbit.y) / WORLD_UNITS_PER_ROW).round() as i32;
    let foot_row = ground_row as i32 - 1 - lift;
    let rabbit_col = world_col(state.rabbit.x);
    let rows = sprites::rabbit_rows(state.run_anim_frame, state.rabbit.airborne);

    for (i, row_art) in rows.iter().enumerate() {
        let row = foot_row - (rows.len() as i32 - 1 - i as i32);
        if row < 0 || row >= ground_row as i32 {
            continue;
        }
        for (dx, ch) in row_art.chars().enumerate() {
            let col = rabbit_col + dx as i32;
            if ch != ' ' && col >= 0 && col < render_width as i32 {
                buffer[row as usize][col as usize] = Cell {
                    ch,
                    fg: sprites::RABBIT_COLOR,
                    bg: Color::Reset,
                };
            }
        }
    }

    // ── Timer (top-left) and score (top-right) ────────────────────────
    let timer_text = format!("Time: {}s", state.remaining_seconds().ceil() as u64);
    for (i, ch) in timer_text.chars().enumerate() {
        if i < render_width as usize {
            buffer[0][i] = Cell {
                ch,
                fg: Color::White,
                bg: Color::Reset,
            };
        }
    }

    let score_text = format!("Score: {}", state.score);
    let score_start = (render_width as usize).saturating_sub(score_text.len() + 1);
    for (i, ch) in score_text.chars().enumerate() {
        let col = score_start + i;
        if col < render_width as usize {
            buffer[0][col] = Cell {
                ch,
                fg: Color::White,
                bg: Color::Reset,
            };
        }
    }

    // ── Render buffer to terminal ─────────────────────────────────────
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(area.x, area.y + row_idx as u16, render_width, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(line, row_area);
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, state: &RunState) {
    let status = if state.rabbit.airborne { "Boing!" } else { "Run!" };
    render_status_bar(
        frame,
        area,
        status,
        Color::LightGreen,
        &[
            ("[\u{2192}]", "Run"),
            ("[\u{2191}/Space]", "Jump"),
            ("[Esc]", "Quit"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, state: &RunState) {
    let inner = render_info_panel_frame(frame, area);

    let carrots_taken = CARROT_COUNT - state.carrots_remaining();

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Preset: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                state.config.preset.name(),
                Style::default().fg(Color::LightGreen),
            ),
        ]),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", state.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Carrots: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", carrots_taken, CARROT_COUNT),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" \u{2588}\u{2588} ", Style::default().fg(sprites::RABBIT_COLOR)),
            Span::styled("Rabbit", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" #  ", Style::default().fg(Color::Rgb(140, 110, 80))),
            Span::styled("Box", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" *  ", Style::default().fg(Color::Rgb(237, 145, 33))),
            Span::styled("Carrot", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" \u{2588}  ", Style::default().fg(Color::Red)),
            Span::styled("Finish", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}
