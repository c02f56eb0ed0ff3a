//! Main menu: title banner plus PLAY and EXIT buttons.
//!
//! The buttons are fixed rectangles activated by mouse click; Up/Down +
//! Enter work as keyboard equivalents.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BUTTON_WIDTH: u16 = 20;
const BUTTON_HEIGHT: u16 = 3;

const PLAY_COLOR: Color = Color::Rgb(150, 250, 50);
const EXIT_COLOR: Color = Color::Rgb(160, 80, 19);

/// Menu screen state: which button the keyboard cursor is on.
pub struct MenuScreen {
    pub selected: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected == 0 {
            self.selected = 1;
        }
    }
}

/// What a menu activation means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Exit,
}

/// The two button rectangles for a given terminal area.
fn button_areas(area: Rect) -> (Rect, Rect) {
    let width = BUTTON_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let play_y = area.y + area.height / 2;
    let play = Rect::new(x, play_y, width, BUTTON_HEIGHT);
    let exit = Rect::new(x, play_y + BUTTON_HEIGHT + 1, width, BUTTON_HEIGHT);
    (play, exit)
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

/// Map a mouse click position to a button, if any.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<MenuAction> {
    let (play, exit) = button_areas(area);
    if rect_contains(play, column, row) {
        Some(MenuAction::Play)
    } else if rect_contains(exit, column, row) {
        Some(MenuAction::Exit)
    } else {
        None
    }
}

/// The action for the currently selected button.
pub fn selected_action(menu: &MenuScreen) -> MenuAction {
    if menu.selected == 0 {
        MenuAction::Play
    } else {
        MenuAction::Exit
    }
}

/// Render the menu.
pub fn draw(frame: &mut Frame, area: Rect, menu: &MenuScreen) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightGreen));
    frame.render_widget(block, area);

    // Title banner above the buttons
    let title_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "B U N N Y   R U N",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "jump the boxes, grab the carrots",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let title_area = Rect {
        height: area.height / 2,
        ..area
    };
    let title = Paragraph::new(title_lines).alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let (play_area, exit_area) = button_areas(area);
    render_button(frame, play_area, "PLAY", PLAY_COLOR, menu.selected == 0);
    render_button(frame, exit_area, "EXIT", EXIT_COLOR, menu.selected == 1);

    // Hint line at the bottom
    if area.height > 2 {
        let hint = Paragraph::new(Line::from(Span::styled(
            "[Click] a button, or [\u{2191}/\u{2193}] + [Enter]",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        let hint_area = Rect {
            y: area.y + area.height - 2,
            height: 1,
            ..area
        };
        frame.render_widget(hint, hint_area);
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, color: Color, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(color));
    frame.render_widget(text, inner);
}
