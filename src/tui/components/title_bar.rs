//! # TitleBar Component
//!
//! Top line: application name, verse position and display language.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(5, 30, Language::Tamil);
//! title_bar.render(frame, area);
//! // "Thiruppavai | Pasuram 5 of 30 | Tamil (தமிழ்)"
//! ```

use crate::core::verse::Language;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// 1-based position of the current verse
    pub position: usize,
    pub total: usize,
    pub language: Language,
}

impl TitleBar {
    pub fn new(position: usize, total: usize, language: Language) -> Self {
        Self {
            position,
            total,
            language,
        }
    }

    fn language_text(&self) -> String {
        if self.language.label() == self.language.native_label() {
            self.language.label().to_string()
        } else {
            format!("{} ({})", self.language.label(), self.language.native_label())
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                "Thiruppavai",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | Pasuram {} of {} | ", self.position, self.total)),
            Span::styled(self.language_text(), Style::default().fg(Color::Cyan)),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_shows_position_and_language() {
        let text = render_text(&mut TitleBar::new(5, 30, Language::English));
        assert!(text.contains("Thiruppavai"));
        assert!(text.contains("Pasuram 5 of 30"));
        assert!(text.contains("English"));
        assert!(!text.contains('('));
    }

    #[test]
    fn test_language_text_includes_native_name() {
        let title_bar = TitleBar::new(1, 30, Language::Sanskrit);
        assert_eq!(
            title_bar.language_text(),
            format!("Sanskrit ({})", Language::Sanskrit.native_label())
        );
    }
}
