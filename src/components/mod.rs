//! The components module contains all shared components for our app.

mod app_view;
mod songs;

pub use app_view::*;
pub use songs::*;
