//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **Snapshot**: the session computes a [`SessionSnapshot`]
//! 2. **Component Rendering**: components append ANSI-styled lines to a buffer
//!
//! The result is returned as a `String` rather than printed, so the caller
//! decides where a frame goes and tests can inspect it.
//!
//! # Example
//!
//! ```rust
//! use ncosearch::app::SearchSession;
//! use ncosearch::ui::{render, Theme};
//!
//! let frame = render(&SearchSession::default(), &Theme::default(), 100);
//! assert!(frame.contains("NCO Occupation Search"));
//! ```

use crate::app::SearchSession;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SessionSnapshot;

/// Renders the current session state for a terminal `cols` characters wide.
#[must_use]
pub fn render(session: &SearchSession, theme: &Theme, cols: usize) -> String {
    render_snapshot(&session.snapshot(), theme, cols)
}

/// Renders a precomputed snapshot.
#[must_use]
pub fn render_snapshot(snapshot: &SessionSnapshot, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_frame(&mut out, snapshot, theme, cols);
    out
}
