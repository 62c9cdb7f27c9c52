//! Static portfolio content — the command table and the profile panel data.
//!
//! Everything here is baked into the binary; nothing is loaded at runtime.

pub mod commands;
pub mod profile;

pub use commands::{answer, not_found, CLEAR, VOCABULARY, WELCOME_COMMAND, WELCOME_TEXT};
pub use profile::{Profile, SocialLink, PROFILE};
