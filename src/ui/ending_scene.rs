//! Ending screen: outcome banner and the final score.

use crate::game_state::Outcome;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const BANNER_COLOR: Color = Color::Rgb(255, 153, 0);

/// Render the ending screen.
pub fn draw(frame: &mut Frame, area: Rect, outcome: Outcome, score: u32) {
    frame.render_widget(Clear, area);

    let border_color = match outcome {
        Outcome::Completed => Color::LightGreen,
        Outcome::TimedOut => Color::Red,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner = match outcome {
        Outcome::Completed => ["LEVEL", "COMPLETED!"],
        Outcome::TimedOut => ["GAME", "OVER"],
    };

    let mut lines: Vec<Line> = Vec::new();
    let pad = inner.height.saturating_sub(8) / 2;
    for _ in 0..pad {
        lines.push(Line::from(""));
    }
    for word in banner {
        lines.push(Line::from(Span::styled(
            spaced(word),
            Style::default()
                .fg(BANNER_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format!("Final Score: {}", score),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to exit",
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Widen a word with letter spacing for the banner.
fn spaced(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, ch) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
