//! Terminal front end: event loop, key mapping, effect execution, rendering.
mod app;
pub(crate) mod config;
mod effects;
mod input;
mod ui;

pub(crate) use app::run_app;
