//! Built-in themes — three colour schemes shipped with termfolio.

use ratatui::style::Color;

use super::Theme;

/// Phosphor — green-on-black terminal, the default look.
pub fn default() -> Theme {
    Theme {
        name: "Phosphor".to_string(),

        background: Color::Black,
        border: Color::Rgb(74, 222, 128), // green-400
        accent: Color::Rgb(74, 222, 128),
        muted: Color::Rgb(107, 114, 128), // gray-500

        profile_name: Color::Rgb(74, 222, 128),
        profile_title: Color::Rgb(156, 163, 175), // gray-400
        avatar: Color::Rgb(34, 197, 94),          // green-500

        prompt_user: Color::Rgb(34, 211, 238), // cyan-400
        prompt_path: Color::Rgb(74, 222, 128),
        command: Color::Rgb(74, 222, 128),
        input: Color::Rgb(74, 222, 128),
        placeholder: Color::Rgb(75, 85, 99), // gray-600
        hint: Color::Rgb(74, 222, 128),
        clock: Color::Rgb(74, 222, 128),

        text: Color::White,
        strong: Color::Rgb(134, 239, 172), // green-300
        emphasis: Color::Rgb(134, 239, 172),
        heading: Color::Rgb(134, 239, 172),
        link: Color::Rgb(34, 211, 238),
        link_url: Color::Rgb(75, 85, 99),
        code_fg: Color::Rgb(103, 232, 249), // cyan-300
        code_bg: Color::Rgb(17, 24, 39),    // gray-900
        quote: Color::Rgb(156, 163, 175),
        quote_bar: Color::Rgb(74, 222, 128),
        bullet: Color::Rgb(74, 222, 128),
    }
}

/// Amber — monochrome amber CRT.
pub fn amber() -> Theme {
    let amber = Color::Rgb(255, 176, 0);
    let bright = Color::Rgb(255, 204, 102);
    let dim = Color::Rgb(153, 102, 0);
    Theme {
        name: "Amber".to_string(),

        background: Color::Black,
        border: amber,
        accent: amber,
        muted: dim,

        profile_name: bright,
        profile_title: dim,
        avatar: amber,

        prompt_user: bright,
        prompt_path: amber,
        command: amber,
        input: amber,
        placeholder: dim,
        hint: amber,
        clock: amber,

        text: amber,
        strong: bright,
        emphasis: bright,
        heading: bright,
        link: bright,
        link_url: dim,
        code_fg: bright,
        code_bg: Color::Rgb(40, 26, 0),
        quote: dim,
        quote_bar: amber,
        bullet: amber,
    }
}

/// Plain — terminal default colours, for light backgrounds and limited palettes.
pub fn plain() -> Theme {
    Theme {
        name: "Plain".to_string(),

        background: Color::Reset,
        border: Color::Reset,
        accent: Color::Reset,
        muted: Color::DarkGray,

        profile_name: Color::Reset,
        profile_title: Color::DarkGray,
        avatar: Color::Reset,

        prompt_user: Color::Blue,
        prompt_path: Color::Reset,
        command: Color::Reset,
        input: Color::Reset,
        placeholder: Color::DarkGray,
        hint: Color::Reset,
        clock: Color::Reset,

        text: Color::Reset,
        strong: Color::Reset,
        emphasis: Color::Reset,
        heading: Color::Reset,
        link: Color::Blue,
        link_url: Color::DarkGray,
        code_fg: Color::Magenta,
        code_bg: Color::Reset,
        quote: Color::DarkGray,
        quote_bar: Color::DarkGray,
        bullet: Color::Reset,
    }
}

/// All built-in themes in cycle order.
pub fn all_builtins() -> Vec<Theme> {
    vec![default(), amber(), plain()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_unique() {
        let themes = all_builtins();
        for (i, a) in themes.iter().enumerate() {
            for b in &themes[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn default_is_first() {
        assert_eq!(all_builtins()[0].name, default().name);
    }
}
