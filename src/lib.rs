//! Termfolio — a personal portfolio presented as a terminal-native command line.

pub mod config;
pub mod content;
pub mod logging;
pub mod session;
pub mod timer;
pub mod tui;
