//! Input resolver — turns a submitted line into a transcript action.

use crate::content;

use super::transcript::CommandEntry;

/// What submitting a line should do to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Blank input: nothing is appended.
    Ignore,
    /// Empty the transcript and stop any animation.
    Reset,
    /// Append one entry and animate it.
    Append(CommandEntry),
}

/// Trim and lowercase raw input. Matching and echoing both use this form.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolve raw input against the fixed command table.
pub fn resolve(raw: &str) -> Resolution {
    let command = normalize(raw);
    if command.is_empty() {
        return Resolution::Ignore;
    }
    if command == content::CLEAR {
        return Resolution::Reset;
    }
    let output = match content::answer(&command) {
        Some(text) => text.to_string(),
        None => content::not_found(&command),
    };
    Resolution::Append(CommandEntry { command, output })
}
