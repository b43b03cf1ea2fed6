use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::navigator::Navigator;
use crate::core::preferences::PreferenceStore;
use crate::core::view::VerseView;
use crate::tui::component::Component;
use crate::tui::components::{MediaPanel, NavBar, Picker, StatusBar, TitleBar, VersePanel};
use crate::tui::{Overlay, TuiState};

/// Draws one frame from the navigator's current state.
///
/// ```text
/// ┌ title bar ─────────────────────────────┐ 1
/// │ status line                            │ 1
/// │ verse panel (scrollable)               │ rest
/// │ media panel (only with audio/video)    │ 0 or 3-4
/// └ navigation bar ────────────────────────┘ 1
/// ```
pub fn draw_ui<P: PreferenceStore>(
    frame: &mut Frame,
    navigator: &Navigator<P>,
    tui: &mut TuiState,
    today: NaiveDate,
) {
    use Constraint::{Length, Min};

    let view = VerseView::build(navigator, today);
    let mut media = MediaPanel::new(view.audio, view.video);

    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(media.height()), Length(1)]);
    let [title_area, status_area, verse_area, media_area, nav_area] = layout.areas(frame.area());

    TitleBar::new(view.position, view.total, view.language).render(frame, title_area);
    StatusBar::new(&view.status, tui.notice.as_deref()).render(frame, status_area);
    VersePanel::new(&view, &mut tui.verse_panel).render(frame, verse_area);
    if view.has_media() {
        media.render(frame, media_area);
    }
    NavBar::new(view.can_previous, view.can_next).render(frame, nav_area);

    if let Some(overlay) = tui.overlay.as_mut() {
        let state = match overlay {
            Overlay::VerseSelector(state) | Overlay::LanguageSelector(state) => state,
        };
        Picker::new(state).render(frame, frame.area());
    }
}
