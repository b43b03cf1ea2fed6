//! # Verse Navigator
//!
//! Owns the [`NavigationState`] (current verse index + display language) and
//! is the only place it changes. Each successful operation returns an
//! [`Effect::Render`] carrying the full new state; the display layer reacts
//! to that signal instead of being poked mid-mutation.
//!
//! ```text
//! Navigator
//! ├── catalog: VerseCatalog        // fixed verse sequence, len N >= 1
//! ├── period: ObservancePeriod     // date -> default verse
//! ├── prefs: P                     // persisted language preference
//! └── state: NavigationState
//!     ├── current_index: usize     // invariant: < N
//!     └── current_language: Language
//! ```
//!
//! "Today" is always passed in by the caller so the navigator never reads a clock.

use std::fmt;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::core::period::ObservancePeriod;
use crate::core::preferences::{LANGUAGE_KEY, PreferenceStore};
use crate::core::verse::{Language, VerseCatalog, VerseRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: usize,
    pub current_language: Language,
}

/// What the caller should do after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Redraw with this state.
    Render(NavigationState),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    IndexOutOfRange { index: usize, len: usize },
    UnsupportedLanguage(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: {index} (have {len} verses)")
            }
            NavigationError::UnsupportedLanguage(key) => {
                write!(f, "unsupported language: {key:?}")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

pub struct Navigator<P: PreferenceStore> {
    catalog: VerseCatalog,
    period: ObservancePeriod,
    prefs: P,
    state: NavigationState,
}

impl<P: PreferenceStore> Navigator<P> {
    /// Builds the navigator for a new session and returns the initial render signal.
    ///
    /// The language comes from the preference store, falling back to
    /// `default_language` when absent or not a supported key. The index is the
    /// default verse for `today`.
    pub fn initialize(
        catalog: VerseCatalog,
        period: ObservancePeriod,
        prefs: P,
        default_language: Language,
        today: NaiveDate,
    ) -> (Self, Effect) {
        let current_language = match prefs.get(LANGUAGE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring saved language preference: {}", e);
                default_language
            }),
            None => default_language,
        };

        let mut navigator = Self {
            catalog,
            period,
            prefs,
            state: NavigationState {
                current_index: 0,
                current_language,
            },
        };
        navigator.state.current_index = navigator.index_for(today);

        info!(
            "Navigator initialized: verse {} of {}, language {}",
            navigator.state.current_index + 1,
            navigator.catalog.len(),
            navigator.state.current_language
        );
        let effect = navigator.render();
        (navigator, effect)
    }

    pub fn previous(&mut self) -> Effect {
        if self.state.current_index == 0 {
            return Effect::None;
        }
        self.state.current_index -= 1;
        self.render()
    }

    pub fn next(&mut self) -> Effect {
        if self.state.current_index >= self.catalog.last_index() {
            return Effect::None;
        }
        self.state.current_index += 1;
        self.render()
    }

    /// Moves to the default verse for `today`. Always signals a render.
    pub fn jump_to_today(&mut self, today: NaiveDate) -> Effect {
        self.state.current_index = self.index_for(today);
        self.render()
    }

    pub fn select_verse(&mut self, index: usize) -> Result<Effect, NavigationError> {
        if index >= self.catalog.len() {
            return Err(NavigationError::IndexOutOfRange {
                index,
                len: self.catalog.len(),
            });
        }
        self.state.current_index = index;
        Ok(self.render())
    }

    /// Switches the display language and persists it.
    pub fn set_language(&mut self, key: &str) -> Result<Effect, NavigationError> {
        let language: Language = key
            .parse()
            .map_err(|_| NavigationError::UnsupportedLanguage(key.to_string()))?;
        self.state.current_language = language;
        self.prefs.set(LANGUAGE_KEY, language.key());
        info!("Language set to {}", language);
        Ok(self.render())
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn catalog(&self) -> &VerseCatalog {
        &self.catalog
    }

    pub fn period(&self) -> &ObservancePeriod {
        &self.period
    }

    pub fn preferences(&self) -> &P {
        &self.prefs
    }

    /// Ends the session, handing back the preference store.
    pub fn into_preferences(self) -> P {
        self.prefs
    }

    pub fn current_verse(&self) -> &VerseRecord {
        &self.catalog.as_slice()[self.state.current_index]
    }

    /// Default verse for `date`, clamped to catalogs shorter than the period.
    fn index_for(&self, date: NaiveDate) -> usize {
        self.period
            .default_verse_index(date)
            .min(self.catalog.last_index())
    }

    fn render(&self) -> Effect {
        debug!("Render signal: {:?}", self.state);
        Effect::Render(self.state)
    }
}
