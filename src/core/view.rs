//! # Verse View
//!
//! Display-ready data derived from the navigator on every render signal.
//! Adapters draw a `VerseView`; they never reach into the catalog themselves.

use chrono::NaiveDate;

use crate::core::navigator::Navigator;
use crate::core::preferences::PreferenceStore;
use crate::core::verse::{Language, VerseLabel};

/// Shown when a verse has no text in the selected language.
pub const PLACEHOLDER_TEXT: &str = "Content coming soon...";

/// One rendered line of verse text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseLine<'a> {
    Text(&'a str),
    /// A blank source line, drawn as paragraph spacing.
    Break,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseView<'a> {
    pub label: &'a VerseLabel,
    pub title: Option<&'a str>,
    /// 1-based position in the catalog.
    pub position: usize,
    pub total: usize,
    pub language: Language,
    pub lines: Vec<VerseLine<'a>>,
    pub audio: Option<&'a str>,
    pub video: Option<&'a str>,
    pub can_previous: bool,
    pub can_next: bool,
    /// Index the verse selector should highlight.
    pub selected_index: usize,
    pub status: String,
}

impl<'a> VerseView<'a> {
    pub fn build<P: PreferenceStore>(navigator: &'a Navigator<P>, today: NaiveDate) -> Self {
        let state = navigator.state();
        let verse = navigator.current_verse();
        let total = navigator.catalog().len();

        Self {
            label: &verse.number,
            title: verse.title.as_deref(),
            position: state.current_index + 1,
            total,
            language: state.current_language,
            lines: verse_lines(verse.text(state.current_language)),
            audio: verse.audio(),
            video: verse.video(),
            can_previous: state.current_index > 0,
            can_next: state.current_index + 1 < total,
            selected_index: state.current_index,
            status: navigator.period().status_line(today),
        }
    }

    pub fn has_media(&self) -> bool {
        self.audio.is_some() || self.video.is_some()
    }
}

/// Splits verse text into lines; blank lines become breaks, no text becomes the placeholder.
pub fn verse_lines(text: Option<&str>) -> Vec<VerseLine<'_>> {
    match text {
        None => vec![VerseLine::Placeholder],
        Some(text) => text
            .split('\n')
            .map(|line| {
                if line.trim().is_empty() {
                    VerseLine::Break
                } else {
                    VerseLine::Text(line.trim_end_matches('\r'))
                }
            })
            .collect(),
    }
}
