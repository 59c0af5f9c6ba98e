//! Local web server for the labeling UI.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
