//! # TUI Components
//!
//! All UI pieces of the verse reader.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as struct fields:
//! - `TitleBar`: app name, verse position, language
//! - `StatusBar`: date status line and transient notices
//! - `MediaPanel`: audio / video recitation links
//! - `NavBar`: previous / today / next controls
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state in `TuiState` and handle events:
//! - `VersePanel`: scrollable verse text (`VersePanelState`)
//! - `Picker`: list overlay for choosing a verse or a language (`PickerState`)
//!
//! Components receive external data as props, never by reaching into the
//! navigator, which keeps them testable against a `TestBackend`.

mod media_panel;
mod nav_bar;
pub mod picker;
mod status_bar;
mod title_bar;
pub mod verse_panel;

pub use media_panel::MediaPanel;
pub use nav_bar::NavBar;
pub use picker::{Picker, PickerEvent, PickerState};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use verse_panel::{VersePanel, VersePanelState};
