// The binary in main.rs drives the terminal; everything it needs lives here so
// integration tests can exercise the dashboard without a real terminal.

pub mod app;
pub mod config;
pub mod event;
pub mod keymap;
pub mod logging;
pub mod problem;
pub mod ui;
