//! Theme system — colour schemes for the chrome and for each markup element kind.

pub mod builtin;
pub mod config;

use ratatui::style::Color;

/// A complete colour theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Chrome
    pub background: Color,
    pub border: Color,
    pub accent: Color,
    pub muted: Color,

    // Profile card
    pub profile_name: Color,
    pub profile_title: Color,
    pub avatar: Color,

    // Prompt & input
    pub prompt_user: Color,
    pub prompt_path: Color,
    pub command: Color,
    pub input: Color,
    pub placeholder: Color,
    pub hint: Color,
    pub clock: Color,

    // Markup
    pub text: Color,
    pub strong: Color,
    pub emphasis: Color,
    pub heading: Color,
    pub link: Color,
    pub link_url: Color,
    pub code_fg: Color,
    pub code_bg: Color,
    pub quote: Color,
    pub quote_bar: Color,
    pub bullet: Color,
}

/// Pick the startup theme and the list Ctrl-T cycles through.
///
/// A `requested` name matching a builtin (case-insensitive) wins; otherwise the
/// user's theme.yaml is used if present, else the default.
pub fn select_theme(requested: Option<&str>, custom: Option<Theme>) -> (Theme, Vec<Theme>) {
    let mut available = builtin::all_builtins();
    if let Some(ref custom) = custom {
        if find_theme(&available, &custom.name).is_none() {
            available.push(custom.clone());
        }
    }

    let chosen = requested
        .and_then(|name| find_theme(&available, name).cloned())
        .or(custom)
        .unwrap_or_else(builtin::default);
    (chosen, available)
}

/// Find a theme by case-insensitive name.
pub fn find_theme<'a>(themes: &'a [Theme], name: &str) -> Option<&'a Theme> {
    themes.iter().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}

/// Cycle to the next theme in the list, wrapping around.
pub fn cycle_theme(current: &Theme, themes: &[Theme]) -> Theme {
    if themes.is_empty() {
        return current.clone();
    }
    let idx = themes
        .iter()
        .position(|t| t.name == current.name)
        .map(|i| (i + 1) % themes.len())
        .unwrap_or(0);
    themes[idx].clone()
}
