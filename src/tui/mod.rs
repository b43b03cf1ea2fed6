//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the verse
//! view, and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms per poll and only
//! redraws after an event, a terminal resize, or a change of calendar day
//! (the status line shows today's date).
//!
//! ## Keys
//!
//! | Key            | Effect                     |
//! |----------------|----------------------------|
//! | `←` / `p`      | previous verse             |
//! | `→` / `n`      | next verse                 |
//! | `t`            | today's verse              |
//! | `s`            | verse selector overlay     |
//! | `l`            | language selector overlay  |
//! | `↑` `↓` PgUp PgDn | scroll verse text       |
//! | `q` / Esc      | quit                       |
//! | Ctrl+C         | quit from anywhere         |

mod component;
pub mod components;
mod event;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info, warn};

use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigator::{Effect, NavigationState, Navigator};
use crate::core::preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use crate::core::verse::{Language, VerseCatalog};
use crate::tui::component::EventHandler;
use crate::tui::components::{PickerEvent, PickerState, VersePanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Open selector overlay. Both share the picker component.
pub enum Overlay {
    VerseSelector(PickerState),
    LanguageSelector(PickerState),
}

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub verse_panel: VersePanelState,
    /// Selector overlay (None = hidden)
    pub overlay: Option<Overlay>,
    /// Transient message after a rejected action; cleared by the next render signal.
    pub notice: Option<String>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            verse_panel: VersePanelState::new(),
            overlay: None,
            notice: None,
        }
    }

    /// Reacts to a render signal from the navigator.
    fn on_render(&mut self, state: NavigationState) {
        debug!("Render: verse index {}, language {}", state.current_index, state.current_language);
        self.verse_panel.reset();
        self.notice = None;
    }

    pub fn open_verse_selector<P: PreferenceStore>(&mut self, navigator: &Navigator<P>) {
        let items = navigator
            .catalog()
            .iter()
            .map(|verse| match &verse.title {
                Some(title) => format!("{}. {}", verse.number, title),
                None => format!("{}.", verse.number),
            })
            .collect();
        self.overlay = Some(Overlay::VerseSelector(PickerState::new(
            "Select Verse",
            items,
            navigator.state().current_index,
        )));
    }

    pub fn open_language_selector<P: PreferenceStore>(&mut self, navigator: &Navigator<P>) {
        let current = navigator.state().current_language;
        let items = Language::ALL
            .iter()
            .map(|lang| format!("{} ({})", lang.label(), lang.native_label()))
            .collect();
        let current_index = Language::ALL
            .iter()
            .position(|lang| *lang == current)
            .unwrap_or(0);
        self.overlay = Some(Overlay::LanguageSelector(PickerState::new(
            "Language",
            items,
            current_index,
        )));
    }
}

/// What a key does when no overlay is open.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Core(Action),
    OpenVerseSelector,
    OpenLanguageSelector,
    Scroll,
}

fn command_for(event: TuiEvent) -> Option<Command> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Escape | TuiEvent::InputChar('q') => {
            Some(Command::Core(Action::Quit))
        }
        TuiEvent::CursorLeft | TuiEvent::InputChar('p') => Some(Command::Core(Action::Previous)),
        TuiEvent::CursorRight | TuiEvent::InputChar('n') => Some(Command::Core(Action::Next)),
        TuiEvent::InputChar('t') => Some(Command::Core(Action::JumpToToday)),
        TuiEvent::InputChar('s') => Some(Command::OpenVerseSelector),
        TuiEvent::InputChar('l') => Some(Command::OpenLanguageSelector),
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => Some(Command::Scroll),
        _ => None,
    }
}

/// Runs `action` and applies the resulting effect. Returns true on quit.
fn dispatch<P: PreferenceStore>(
    navigator: &mut Navigator<P>,
    tui: &mut TuiState,
    action: Action,
    today: NaiveDate,
) -> bool {
    match update(navigator, action, today) {
        Ok(Effect::Render(state)) => tui.on_render(state),
        Ok(Effect::Quit) => return true,
        Ok(Effect::None) => {}
        Err(e) => {
            warn!("Action rejected: {}", e);
            tui.notice = Some(e.to_string());
        }
    }
    false
}

/// Routes one terminal event. Returns true when the app should quit.
fn handle_event<P: PreferenceStore>(
    navigator: &mut Navigator<P>,
    tui: &mut TuiState,
    event: TuiEvent,
    today: NaiveDate,
) -> bool {
    // Ctrl+C always quits regardless of overlay
    if event == TuiEvent::ForceQuit {
        return dispatch(navigator, tui, Action::Quit, today);
    }

    // When an overlay is open, route all events to it
    if let Some(overlay) = tui.overlay.as_mut() {
        let action = match overlay {
            Overlay::VerseSelector(picker) => match picker.handle_event(&event) {
                Some(PickerEvent::Select(index)) => Some(Some(Action::SelectVerse(index))),
                Some(PickerEvent::Dismiss) => Some(None),
                None => None,
            },
            Overlay::LanguageSelector(picker) => match picker.handle_event(&event) {
                Some(PickerEvent::Select(index)) => Some(
                    Language::ALL
                        .get(index)
                        .map(|lang| Action::SetLanguage(lang.key().to_string())),
                ),
                Some(PickerEvent::Dismiss) => Some(None),
                None => None,
            },
        };
        // Outer Some = the overlay closes; inner = action to run after it does
        if let Some(action) = action {
            tui.overlay = None;
            if let Some(action) = action {
                return dispatch(navigator, tui, action, today);
            }
        }
        return false;
    }

    match command_for(event) {
        Some(Command::Core(action)) => dispatch(navigator, tui, action, today),
        Some(Command::OpenVerseSelector) => {
            tui.open_verse_selector(navigator);
            false
        }
        Some(Command::OpenLanguageSelector) => {
            tui.open_language_selector(navigator);
            false
        }
        Some(Command::Scroll) => {
            tui.verse_panel.handle_event(&event);
            false
        }
        None => false,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// The session's "today": the `--date` override or the local calendar date.
fn today(config: &ResolvedConfig) -> NaiveDate {
    config
        .today_override
        .unwrap_or_else(|| Local::now().date_naive())
}

fn open_preferences(config: &ResolvedConfig) -> Box<dyn PreferenceStore> {
    match &config.preferences_path {
        Some(path) => Box::new(FilePreferenceStore::open(path)),
        None => {
            warn!("No home directory; language preference will not be saved");
            Box::new(MemoryPreferenceStore::new())
        }
    }
}

fn load_catalog(config: &ResolvedConfig) -> io::Result<VerseCatalog> {
    let catalog = match &config.verses_path {
        Some(path) => VerseCatalog::load(path),
        None => VerseCatalog::builtin(),
    };
    catalog.map_err(io::Error::other)
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let catalog = load_catalog(&config)?;
    let prefs = open_preferences(&config);

    let (mut navigator, effect) = Navigator::initialize(
        catalog,
        config.period.clone(),
        prefs,
        config.default_language,
        today(&config),
    );
    let mut tui = TuiState::new();
    if let Effect::Render(state) = effect {
        tui.on_render(state);
    }

    if let Some(language) = config.language_override {
        dispatch(
            &mut navigator,
            &mut tui,
            Action::SetLanguage(language.key().to_string()),
            today(&config),
        );
    }

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut navigator, &mut tui, &config));
    ratatui::restore();
    info!("Session ended");
    result
}

fn event_loop<P: PreferenceStore>(
    terminal: &mut ratatui::DefaultTerminal,
    navigator: &mut Navigator<P>,
    tui: &mut TuiState,
    config: &ResolvedConfig,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    let mut shown_day = today(config);

    loop {
        let day = today(config);
        if day != shown_day {
            debug!("Calendar day changed to {}", day);
            shown_day = day;
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, navigator, tui, day))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut pending = poll_event_timeout(Duration::from_millis(500))?;
        while let Some(event) = pending {
            needs_redraw = true;
            if handle_event(navigator, tui, event, day) {
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}
