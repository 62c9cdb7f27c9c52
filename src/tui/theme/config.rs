//! Theme YAML config — load a custom theme from ~/.termfolio/theme.yaml.

use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;
use tracing::warn;

use super::Theme;

/// Intermediate YAML representation — all fields optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeConfig {
    name: Option<String>,

    background: Option<String>,
    border: Option<String>,
    accent: Option<String>,
    muted: Option<String>,

    profile_name: Option<String>,
    profile_title: Option<String>,
    avatar: Option<String>,

    prompt_user: Option<String>,
    prompt_path: Option<String>,
    command: Option<String>,
    input: Option<String>,
    placeholder: Option<String>,
    hint: Option<String>,
    clock: Option<String>,

    text: Option<String>,
    strong: Option<String>,
    emphasis: Option<String>,
    heading: Option<String>,
    link: Option<String>,
    link_url: Option<String>,
    code_fg: Option<String>,
    code_bg: Option<String>,
    quote: Option<String>,
    quote_bar: Option<String>,
    bullet: Option<String>,
}

/// Parse a colour string: "#RRGGBB" hex or a named colour.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

/// Load a custom theme from ~/.termfolio/theme.yaml.
/// Returns None if the file doesn't exist or can't be parsed.
pub fn load_theme_from_yaml() -> Option<Theme> {
    let path = crate::config::config_dir()?.join("theme.yaml");
    load_theme_file(&path)
}

/// Load a theme file, logging (not failing) on malformed content.
pub fn load_theme_file(path: &Path) -> Option<Theme> {
    let content = std::fs::read_to_string(path).ok()?;
    let theme = parse_theme_yaml(&content);
    if theme.is_none() {
        warn!(path = %path.display(), "ignoring malformed theme file");
    }
    theme
}

/// Parse a YAML string into a Theme, filling missing fields from the default.
fn parse_theme_yaml(yaml: &str) -> Option<Theme> {
    let config: ThemeConfig = serde_yaml::from_str(yaml).ok()?;
    let d = super::builtin::default();

    let color_or = |opt: Option<String>, fallback: Color| -> Color {
        opt.and_then(|s| parse_color(&s)).unwrap_or(fallback)
    };

    Some(Theme {
        name: config.name.unwrap_or_else(|| "Custom".to_string()),

        background: color_or(config.background, d.background),
        border: color_or(config.border, d.border),
        accent: color_or(config.accent, d.accent),
        muted: color_or(config.muted, d.muted),

        profile_name: color_or(config.profile_name, d.profile_name),
        profile_title: color_or(config.profile_title, d.profile_title),
        avatar: color_or(config.avatar, d.avatar),

        prompt_user: color_or(config.prompt_user, d.prompt_user),
        prompt_path: color_or(config.prompt_path, d.prompt_path),
        command: color_or(config.command, d.command),
        input: color_or(config.input, d.input),
        placeholder: color_or(config.placeholder, d.placeholder),
        hint: color_or(config.hint, d.hint),
        clock: color_or(config.clock, d.clock),

        text: color_or(config.text, d.text),
        strong: color_or(config.strong, d.strong),
        emphasis: color_or(config.emphasis, d.emphasis),
        heading: color_or(config.heading, d.heading),
        link: color_or(config.link, d.link),
        link_url: color_or(config.link_url, d.link_url),
        code_fg: color_or(config.code_fg, d.code_fg),
        code_bg: color_or(config.code_bg, d.code_bg),
        quote: color_or(config.quote, d.quote),
        quote_bar: color_or(config.quote_bar, d.quote_bar),
        bullet: color_or(config.bullet, d.bullet),
    })
}
