//! # StatusBar Component
//!
//! Second line: the date status ("Margazhi Day 3 - December 18, 2025") and,
//! after a rejected action, a transient notice in red.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct StatusBar<'a> {
    pub status: &'a str,
    pub notice: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: &'a str, notice: Option<&'a str>) -> Self {
        Self { status, notice }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(self.status, Style::default().fg(Color::Gray))];
        if let Some(notice) = self.notice {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(notice, Style::default().fg(Color::Red)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(bar: &mut StatusBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_status_only() {
        let text = render_text(&mut StatusBar::new("Margazhi Day 3 - December 18, 2025", None));
        assert!(text.contains("Margazhi Day 3 - December 18, 2025"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_status_with_notice() {
        let text = render_text(&mut StatusBar::new(
            "Outside Margazhi period - June 1, 2026",
            Some("unsupported language: \"latin\""),
        ));
        assert!(text.contains("Outside Margazhi period"));
        assert!(text.contains("| unsupported language"));
    }
}
