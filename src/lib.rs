//! Moses Estate: a terminal personal-finance dashboard shell.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod input;
pub mod logging;
pub mod ui;

pub use app::App;
