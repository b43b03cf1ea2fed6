//! # Picker Component
//!
//! Centered list overlay used for both selectors: verses (`s`) and
//! display language (`l`). Enter picks, Esc dismisses.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PickerState` lives in `TuiState` while the overlay is open
//! - `Picker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows moved by PageUp/PageDown.
const PAGE_STEP: usize = 10;

/// Persistent state for a picker overlay.
pub struct PickerState {
    pub title: String,
    pub items: Vec<String>,
    pub selected: usize,
    /// Entry matching the current navigator state, marked with `*`.
    pub current: usize,
    pub list_state: ListState,
}

impl PickerState {
    /// Opens with the cursor on `current`.
    pub fn new(title: impl Into<String>, items: Vec<String>, current: usize) -> Self {
        let selected = current.min(items.len().saturating_sub(1));
        let mut list_state = ListState::default();
        if !items.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            title: title.into(),
            items,
            selected,
            current,
            list_state,
        }
    }

    fn move_to(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.selected = index.min(self.items.len() - 1);
        self.list_state.select(Some(self.selected));
    }
}

/// Events emitted by a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    Select(usize),
    Dismiss,
}

impl EventHandler for PickerState {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(PickerEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.move_to(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.move_to(self.selected + 1);
                None
            }
            TuiEvent::ScrollPageUp => {
                self.move_to(self.selected.saturating_sub(PAGE_STEP));
                None
            }
            TuiEvent::ScrollPageDown => {
                self.move_to(self.selected + PAGE_STEP);
                None
            }
            TuiEvent::Submit => {
                (self.selected < self.items.len()).then_some(PickerEvent::Select(self.selected))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the picker overlay.
pub struct Picker<'a> {
    state: &'a mut PickerState,
}

impl<'a> Picker<'a> {
    pub fn new(state: &'a mut PickerState) -> Self {
        Self { state }
    }
}

impl Component for Picker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        if self.state.items.is_empty() {
            let empty = Paragraph::new("Nothing to choose from.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let inner_width = overlay.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .state
            .items
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let is_current = i == self.state.current;
                let marker = if is_current { " *" } else { "" };
                let text = truncate_str(label, inner_width.saturating_sub(marker.len()));

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_current {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(text, style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
