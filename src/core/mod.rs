//! # Core Application Logic
//!
//! This module contains the verse reader's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Period (date rule)   │
//!                    │  • Navigator (state)    │
//!                    │  • Action / update()    │
//!                    │  • VerseView (derived)  │
//!                    │                         │
//!                    │  No terminal. No clock. │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`period`]: `ObservancePeriod`, date → period day number → default verse
//! - [`verse`]: `VerseRecord`, `Language`, and the immutable `VerseCatalog`
//! - [`preferences`]: the key-value store that remembers the language
//! - [`navigator`]: `Navigator`, the only owner of `NavigationState`
//! - [`action`]: the `Action` enum and `update()` dispatcher
//! - [`view`]: `VerseView`, what the display layer draws
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod navigator;
pub mod period;
pub mod preferences;
pub mod verse;
pub mod view;
