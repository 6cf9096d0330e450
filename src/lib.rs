//! FolioView: a desktop viewer for a personal portfolio.
//!
//! The `app` module holds the content model, preferences, and interaction
//! rules; `ui` builds the FLTK widgets and maps their callbacks onto
//! [`app::Message`] values handled by [`app::state::AppState`].

pub mod app;
pub mod ui;
