//! # Verse Panel
//!
//! Scrollable, bordered view of the current verse in the selected language.
//! The scroll position returns to the top on every render signal, so moving
//! to another verse always starts at its first line.
//!
//! Paragraph height is measured with `Paragraph::line_count` (needs ratatui's
//! `unstable-rendered-line-info` feature) to size the `ScrollView` canvas.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::view::{PLACEHOLDER_TEXT, VerseLine, VerseView};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the verse text. Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct VersePanelState {
    pub scroll_state: ScrollViewState,
    /// Height of the wrapped verse text from the last frame.
    pub content_height: u16,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl VersePanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first line.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for VersePanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp | TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown | TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

pub struct VersePanel<'a> {
    view: &'a VerseView<'a>,
    state: &'a mut VersePanelState,
}

impl<'a> VersePanel<'a> {
    pub fn new(view: &'a VerseView<'a>, state: &'a mut VersePanelState) -> Self {
        Self { view, state }
    }

    fn heading(&self) -> String {
        match self.view.title {
            Some(title) => format!(" Pasuram {} · {} ", self.view.label, title),
            None => format!(" Pasuram {} ", self.view.label),
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        self.view
            .lines
            .iter()
            .map(|line| match line {
                VerseLine::Text(text) => Line::from(*text),
                VerseLine::Break => Line::from(""),
                VerseLine::Placeholder => Line::from(Span::styled(
                    PLACEHOLDER_TEXT,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )),
            })
            .collect()
    }
}

impl Component for VersePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(self.heading())
            .title_top(Line::from(format!(" {} ", self.view.language.native_label())).right_aligned())
            .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM))
            .title_style(Style::default().fg(Color::Yellow))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.lines()).wrap(Wrap { trim: false });
        let content_height = canvas_height(paragraph.line_count(content_width));

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// Wrapped line count as a canvas height, saturating at `u16::MAX`.
fn canvas_height(line_count: usize) -> u16 {
    u16::try_from(line_count).unwrap_or(u16::MAX)
}
