//! # Actions
//!
//! Everything the user can do to the navigator becomes an `Action`.
//! Left arrow? That's `Action::Previous`. Picking a verse from the selector?
//! That's `Action::SelectVerse(index)`.
//!
//! `update()` routes an action to the matching [`Navigator`] operation and
//! hands back the resulting [`Effect`]. No terminal I/O happens here.
//!
//! ```text
//! Navigator + Action  →  update()  →  Effect (None | Render(state) | Quit)
//! ```

use chrono::NaiveDate;
use log::debug;

use crate::core::navigator::{Effect, NavigationError, Navigator};
use crate::core::preferences::PreferenceStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    JumpToToday,
    SelectVerse(usize),
    /// Raw language key, validated by the navigator.
    SetLanguage(String),
    Quit,
}

/// Applies `action`. `today` is only consulted by `JumpToToday`.
pub fn update<P: PreferenceStore>(
    navigator: &mut Navigator<P>,
    action: Action,
    today: NaiveDate,
) -> Result<Effect, NavigationError> {
    debug!("Action: {:?}", action);
    match action {
        Action::Previous => Ok(navigator.previous()),
        Action::Next => Ok(navigator.next()),
        Action::JumpToToday => Ok(navigator.jump_to_today(today)),
        Action::SelectVerse(index) => navigator.select_verse(index),
        Action::SetLanguage(key) => navigator.set_language(&key),
        Action::Quit => Ok(Effect::Quit),
    }
}
