//! # Media Panel
//!
//! Lists the audio and video recitation links of the current verse.
//! Only laid out when the verse has at least one of them.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::tui::component::Component;

pub struct MediaPanel<'a> {
    pub audio: Option<&'a str>,
    pub video: Option<&'a str>,
}

impl<'a> MediaPanel<'a> {
    pub fn new(audio: Option<&'a str>, video: Option<&'a str>) -> Self {
        Self { audio, video }
    }

    /// Rows needed including borders; 0 when there is nothing to show.
    pub fn height(&self) -> u16 {
        let rows = self.entries().len() as u16;
        if rows == 0 { 0 } else { rows + 2 }
    }

    fn entries(&self) -> Vec<(&'static str, &'a str)> {
        [("Audio Recitation", self.audio), ("Video Recitation", self.video)]
            .into_iter()
            .filter_map(|(label, uri)| uri.map(|uri| (label, uri)))
            .collect()
    }
}

impl Component for MediaPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = self
            .entries()
            .into_iter()
            .map(|(label, uri)| {
                Line::from(vec![
                    Span::styled(label, label_style),
                    Span::raw("  "),
                    Span::styled(uri, Style::default().add_modifier(Modifier::UNDERLINED)),
                ])
            })
            .collect();

        let block = Block::bordered()
            .title(" Media ")
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_height_tracks_entries() {
        assert_eq!(MediaPanel::new(None, None).height(), 0);
        assert_eq!(MediaPanel::new(Some("a.mp3"), None).height(), 3);
        assert_eq!(MediaPanel::new(Some("a.mp3"), Some("v")).height(), 4);
    }

    #[test]
    fn test_renders_only_present_links() {
        let backend = TestBackend::new(70, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut panel = MediaPanel::new(None, Some("https://example.org/embed/1"));

        terminal
            .draw(|f| {
                panel.render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Video Recitation"));
        assert!(text.contains("https://example.org/embed/1"));
        assert!(!text.contains("Audio Recitation"));
    }
}
