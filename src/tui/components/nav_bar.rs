//! # Navigation Bar
//!
//! Bottom line with the previous / today / next controls and key hints.
//! Previous and next are dimmed at the first and last verse.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const HINTS: &str = "s Verses  l Language  q Quit ";

pub struct NavBar {
    pub can_previous: bool,
    pub can_next: bool,
}

impl NavBar {
    pub fn new(can_previous: bool, can_next: bool) -> Self {
        Self {
            can_previous,
            can_next,
        }
    }
}

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [controls_area, hints_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(HINTS.len() as u16)])
                .areas(area);

        let controls = Line::from(vec![
            Span::styled(" ◀ Prev [←]", control_style(self.can_previous)),
            Span::raw("   "),
            Span::styled("Today [t]", Style::default().fg(Color::Cyan)),
            Span::raw("   "),
            Span::styled("Next [→] ▶", control_style(self.can_next)),
        ]);
        frame.render_widget(controls, controls_area);
        frame.render_widget(
            Line::from(Span::styled(HINTS, Style::default().fg(Color::DarkGray))).right_aligned(),
            hints_area,
        );
    }
}
