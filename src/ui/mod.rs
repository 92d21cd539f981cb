//! Terminal rendering layer.
//!
//! Turns a [`SessionSnapshot`] into ANSI-styled text. Nothing here mutates
//! the session.
//!
//! ```text
//! SearchSession → snapshot → SessionSnapshot → render_snapshot → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Snapshot types consumed by the renderer
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Header, search bar, table, empty state, footer
//! - [`helpers`]: Character-aware truncation and padding
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_snapshot};
pub use theme::Theme;
pub use viewmodel::{ResultRow, SessionSnapshot};
