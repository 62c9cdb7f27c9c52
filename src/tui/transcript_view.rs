//! Terminal panel content — hint row, rendered transcript and the input line.

use ratatui::style::{Modifier, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::markup::{render_markup, wrap_styled_lines, StyledLine, StyledSpan};
use super::theme::Theme;
use crate::content::{Profile, VOCABULARY};
use crate::session::{InputBuffer, Session};

pub const PLACEHOLDER: &str = "Type a command...";
const OUTPUT_INDENT: &str = "  ";
const HINT_SEPARATOR: &str = " │ ";

/// The vocabulary as a hint row, wrapped to `width`.
pub fn hint_lines(theme: &Theme, width: usize) -> Vec<StyledLine> {
    let mut line = StyledLine::new();
    line.push_str("Commands: ", Style::default().fg(theme.muted));
    for (i, command) in VOCABULARY.iter().enumerate() {
        if i > 0 {
            line.push_str(HINT_SEPARATOR, Style::default().fg(theme.muted));
        }
        line.push_str(command, Style::default().fg(theme.hint));
    }
    wrap_styled_lines(&[line], width)
}

fn prompt_spans(line: &mut StyledLine, profile: &Profile, theme: &Theme) {
    line.push_str(
        profile.prompt_user,
        Style::default()
            .fg(theme.prompt_user)
            .add_modifier(Modifier::BOLD),
    );
    line.push_str(profile.prompt_path, Style::default().fg(theme.prompt_path));
    line.push_str(" ", Style::default());
}

/// Every transcript entry as prompt line, indented output and a blank
/// separator, wrapped to `width`.
pub fn transcript_lines(
    session: &Session,
    profile: &Profile,
    theme: &Theme,
    width: usize,
) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    let output_width = width.saturating_sub(OUTPUT_INDENT.len()).max(1);

    for (index, entry) in session.transcript().entries().iter().enumerate() {
        let mut prompt = StyledLine::new();
        prompt_spans(&mut prompt, profile, theme);
        prompt.push_str(&entry.command, Style::default().fg(theme.command));
        lines.extend(wrap_styled_lines(&[prompt], width));

        for mut line in render_markup(session.displayed_output(index), theme, output_width) {
            let indent = StyledSpan {
                text: OUTPUT_INDENT.to_string(),
                style: Style::default(),
            };
            line.spans.insert(0, indent);
            lines.push(line);
        }
        lines.push(StyledLine::new());
    }
    lines
}

/// The input line and the screen column of its cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct InputLine {
    pub line: StyledLine,
    pub cursor_column: u16,
}

/// Render the prompt and input buffer into one row of `width` columns,
/// scrolling the input horizontally so the cursor stays visible.
pub fn input_line(input: &InputBuffer, profile: &Profile, theme: &Theme, width: usize) -> InputLine {
    let mut line = StyledLine::new();
    prompt_spans(&mut line, profile, theme);
    let prompt_width = line.width();
    let available = width.saturating_sub(prompt_width);

    if input.is_empty() {
        line.push_str(PLACEHOLDER, Style::default().fg(theme.placeholder));
        return InputLine {
            line,
            cursor_column: prompt_width.min(width.saturating_sub(1)) as u16,
        };
    }

    let chars: Vec<char> = input.as_str().chars().collect();
    let char_width = |c: &char| UnicodeWidthChar::width(*c).unwrap_or(0);
    let cursor_col: usize = chars[..input.cursor()].iter().map(char_width).sum();

    // Keep one column free for the cursor at the end of the line.
    let mut start = 0;
    let mut skipped = 0;
    while start < chars.len() && available > 0 && cursor_col - skipped >= available {
        skipped += char_width(&chars[start]);
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for c in &chars[start..] {
        let w = char_width(c);
        if used + w > available {
            break;
        }
        visible.push(*c);
        used += w;
    }
    line.push_str(&visible, Style::default().fg(theme.input));

    let column = prompt_width + cursor_col - skipped;
    InputLine {
        line,
        cursor_column: column.min(width.saturating_sub(1)) as u16,
    }
}

/// Display width of the prompt prefix, e.g. `user@host:~$ `.
pub fn prompt_width(profile: &Profile) -> usize {
    UnicodeWidthStr::width(profile.prompt().as_str()) + 1
}
