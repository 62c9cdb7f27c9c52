//! Markup rendering — Markdown answer text to styled, wrapped terminal lines.
//!
//! Each element kind (strong, emphasis, link, list, heading, inline code,
//! block quote) maps to one style taken from the active [`Theme`].

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;

const BULLET: &str = "•";
const QUOTE_BAR: &str = "│ ";
const RULE_WIDTH: usize = 24;

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

/// One display line, plus the prefix repeated on lines it wraps onto.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
    /// Quote bars and hanging indent for wrapped continuation lines.
    pub continuation: Vec<StyledSpan>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text, merging into the last span when the style matches.
    pub fn push_str(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.spans.push(StyledSpan {
                text: text.to_string(),
                style,
            }),
        }
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        spans_width(&self.spans)
    }

    /// The unstyled text of the line.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// True if the line shows nothing but whitespace and quote bars.
    pub fn is_blank(&self) -> bool {
        self.spans
            .iter()
            .all(|s| s.text.chars().all(|c| c.is_whitespace() || c == '│'))
    }
}

impl From<StyledLine> for Line<'static> {
    fn from(line: StyledLine) -> Self {
        Line::from(
            line.spans
                .into_iter()
                .map(|s| Span::styled(s.text, s.style))
                .collect::<Vec<_>>(),
        )
    }
}

fn spans_width(spans: &[StyledSpan]) -> usize {
    spans
        .iter()
        .map(|s| UnicodeWidthStr::width(s.text.as_str()))
        .sum()
}

/// Parse Markdown into unwrapped styled lines.
pub fn parse_markup(text: &str, theme: &Theme) -> Vec<StyledLine> {
    let mut builder = MarkupBuilder::new(theme);
    for event in Parser::new_ext(text, Options::empty()) {
        builder.event(event);
    }
    builder.finish()
}

/// Parse and wrap Markdown to `width` columns.
pub fn render_markup(text: &str, theme: &Theme, width: usize) -> Vec<StyledLine> {
    wrap_styled_lines(&parse_markup(text, theme), width)
}

struct MarkupBuilder<'t> {
    theme: &'t Theme,
    lines: Vec<StyledLine>,
    current: StyledLine,
    /// Whether `current` holds anything beyond its prefix.
    has_content: bool,
    style_stack: Vec<Style>,
    /// Next number for each open list; `None` for bullet lists.
    lists: Vec<Option<u64>>,
    /// Hanging indent of each open list item, in columns.
    indents: Vec<usize>,
    quote_depth: usize,
    /// Just emitted a list marker; the item's first paragraph continues the line.
    item_open: bool,
    /// Destination and collected text of the link being built.
    link: Option<(String, String)>,
}

impl<'t> MarkupBuilder<'t> {
    fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            lines: Vec::new(),
            current: StyledLine::new(),
            has_content: false,
            style_stack: vec![Style::default().fg(theme.text)],
            lists: Vec::new(),
            indents: Vec::new(),
            quote_depth: 0,
            item_open: false,
            link: None,
        }
    }

    fn style(&self) -> Style {
        self.style_stack
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.theme.text))
    }

    fn push_style(&mut self, f: impl FnOnce(Style) -> Style) {
        let next = f(self.style());
        self.style_stack.push(next);
    }

    fn pop_style(&mut self) {
        if self.style_stack.len() > 1 {
            self.style_stack.pop();
        }
    }

    fn prefix(&self, indent: usize) -> StyledLine {
        let mut line = StyledLine::new();
        for _ in 0..self.quote_depth {
            line.push_str(QUOTE_BAR, Style::default().fg(self.theme.quote_bar));
        }
        line.push_str(&" ".repeat(indent), Style::default());
        line.continuation = line.spans.clone();
        line
    }

    fn fresh_line(&self) -> StyledLine {
        self.prefix(self.indents.last().copied().unwrap_or(0))
    }

    /// Rebuild the prefix of an untouched line after nesting changed.
    fn refresh_prefix(&mut self) {
        if !self.has_content {
            self.current = self.fresh_line();
        }
    }

    fn flush(&mut self) {
        let next = self.fresh_line();
        self.lines.push(std::mem::replace(&mut self.current, next));
        self.has_content = false;
    }

    fn break_line(&mut self) {
        if self.has_content {
            self.flush();
        }
    }

    fn blank_line(&mut self) {
        self.break_line();
        if self.lines.last().is_some_and(|l| !l.is_blank()) {
            let blank = self.fresh_line();
            self.lines.push(blank);
        }
    }

    fn push_text(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        self.current.push_str(text, style);
        self.has_content = true;
        self.item_open = false;
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                let style = self.style();
                if let Some((_, ref mut collected)) = self.link {
                    collected.push_str(&text);
                }
                for (i, part) in text.split('\n').enumerate() {
                    if i > 0 {
                        self.flush();
                    }
                    self.push_text(part, style);
                }
            }
            Event::Code(code) => {
                let style = Style::default()
                    .fg(self.theme.code_fg)
                    .bg(self.theme.code_bg);
                if let Some((_, ref mut collected)) = self.link {
                    collected.push_str(&code);
                }
                self.push_text(&format!(" {code} "), style);
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                let style = self.style();
                self.push_text(html.trim_end_matches('\n'), style);
            }
            Event::SoftBreak => {
                let style = self.style();
                self.push_text(" ", style);
            }
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.break_line();
                let style = Style::default().fg(self.theme.muted);
                self.push_text(&"─".repeat(RULE_WIDTH), style);
                self.blank_line();
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if !self.item_open {
                    self.break_line();
                }
            }
            Tag::Heading { level, .. } => {
                self.break_line();
                let color = self.theme.heading;
                self.push_style(|s| {
                    let s = s.fg(color).add_modifier(Modifier::BOLD);
                    if level == HeadingLevel::H1 {
                        s.add_modifier(Modifier::UNDERLINED)
                    } else {
                        s
                    }
                });
            }
            Tag::BlockQuote(_) => {
                self.break_line();
                self.quote_depth += 1;
                self.refresh_prefix();
                let color = self.theme.quote;
                self.push_style(|s| s.fg(color).add_modifier(Modifier::ITALIC));
            }
            Tag::List(start) => {
                self.break_line();
                self.lists.push(start);
            }
            Tag::Item => {
                self.break_line();
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let m = format!("  {n}. ");
                        *n += 1;
                        m
                    }
                    _ => format!("  {BULLET} "),
                };
                let base = self.indents.last().copied().unwrap_or(0);
                let indent = base + UnicodeWidthStr::width(marker.as_str());
                self.current
                    .push_str(&marker, Style::default().fg(self.theme.bullet));
                self.current.continuation = self.prefix(indent).spans;
                self.indents.push(indent);
                self.has_content = true;
                self.item_open = true;
            }
            Tag::Strong => {
                let color = self.theme.strong;
                self.push_style(|s| s.fg(color).add_modifier(Modifier::BOLD));
            }
            Tag::Emphasis => {
                let color = self.theme.emphasis;
                self.push_style(|s| s.fg(color).add_modifier(Modifier::ITALIC));
            }
            Tag::Link { dest_url, .. } => {
                let color = self.theme.link;
                self.push_style(|s| s.fg(color).add_modifier(Modifier::UNDERLINED));
                self.link = Some((dest_url.to_string(), String::new()));
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if self.lists.is_empty() {
                    self.blank_line();
                } else {
                    self.break_line();
                }
            }
            TagEnd::Heading(_) => {
                self.pop_style();
                self.blank_line();
            }
            TagEnd::BlockQuote(_) => {
                self.pop_style();
                self.break_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.refresh_prefix();
                self.blank_line();
            }
            TagEnd::List(_) => {
                self.lists.pop();
                self.break_line();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Item => {
                self.break_line();
                self.indents.pop();
                self.item_open = false;
                self.refresh_prefix();
            }
            TagEnd::Strong | TagEnd::Emphasis => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some((url, text)) = self.link.take() {
                    if !url.is_empty() && url != text {
                        let style = Style::default().fg(self.theme.link_url);
                        self.push_text(&format!(" ({url})"), style);
                    }
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<StyledLine> {
        self.break_line();
        while self.lines.last().is_some_and(StyledLine::is_blank) {
            self.lines.pop();
        }
        self.lines
    }
}

/// Word-wrap styled lines to `max_width` columns, repeating each line's
/// continuation prefix on the lines it wraps onto. Words longer than a line
/// are broken between characters.
pub fn wrap_styled_lines(lines: &[StyledLine], max_width: usize) -> Vec<StyledLine> {
    if max_width == 0 {
        return lines.to_vec();
    }
    let mut result = Vec::with_capacity(lines.len());
    for line in lines {
        if line.width() <= max_width {
            result.push(line.clone());
        } else {
            wrap_line(line, max_width, &mut result);
        }
    }
    result
}

fn wrap_line(line: &StyledLine, max_width: usize, out: &mut Vec<StyledLine>) {
    let prefix: &[StyledSpan] = if spans_width(&line.continuation) < max_width {
        &line.continuation
    } else {
        &[]
    };
    let prefix_width = spans_width(prefix);
    let continuation_line = || StyledLine {
        spans: prefix.to_vec(),
        continuation: line.continuation.clone(),
    };

    let mut current = StyledLine {
        spans: Vec::new(),
        continuation: line.continuation.clone(),
    };
    let mut width = 0;
    let mut at_line_start = true;

    for segment in segments(line) {
        if width + segment.width <= max_width {
            segment.push_onto(&mut current);
            width += segment.width;
            at_line_start = false;
            continue;
        }
        // Spaces at a break point are dropped.
        if segment.is_space {
            if !at_line_start {
                out.push(trim_end(std::mem::replace(&mut current, continuation_line())));
                width = prefix_width;
                at_line_start = true;
            }
            continue;
        }
        if !at_line_start {
            out.push(trim_end(std::mem::replace(&mut current, continuation_line())));
            width = prefix_width;
            at_line_start = true;
            if width + segment.width <= max_width {
                segment.push_onto(&mut current);
                width += segment.width;
                at_line_start = false;
                continue;
            }
        }
        for span in &segment.pieces {
            for ch in span.text.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if width + ch_width > max_width && !at_line_start {
                    out.push(std::mem::replace(&mut current, continuation_line()));
                    width = prefix_width;
                }
                let mut buf = [0u8; 4];
                current.push_str(ch.encode_utf8(&mut buf), span.style);
                width += ch_width;
                at_line_start = false;
            }
        }
    }

    if !current.spans.is_empty() {
        out.push(current);
    }
}

fn trim_end(mut line: StyledLine) -> StyledLine {
    while let Some(last) = line.spans.last_mut() {
        let trimmed = last.text.trim_end_matches(' ').len();
        last.text.truncate(trimmed);
        if !last.text.is_empty() {
            break;
        }
        line.spans.pop();
    }
    line
}

/// A run of spaces, or a word that may span several styles.
struct Segment {
    pieces: Vec<StyledSpan>,
    width: usize,
    is_space: bool,
}

impl Segment {
    fn push_onto(&self, line: &mut StyledLine) {
        for piece in &self.pieces {
            line.push_str(&piece.text, piece.style);
        }
    }
}

/// Split a line into alternating runs of spaces and words, keeping styles.
fn segments(line: &StyledLine) -> Vec<Segment> {
    let mut result: Vec<Segment> = Vec::new();
    for span in &line.spans {
        for ch in span.text.chars() {
            let is_space = ch == ' ';
            let extend = result.last().is_some_and(|seg| seg.is_space == is_space);
            if !extend {
                result.push(Segment {
                    pieces: Vec::new(),
                    width: 0,
                    is_space,
                });
            }
            if let Some(seg) = result.last_mut() {
                match seg.pieces.last_mut() {
                    Some(piece) if piece.style == span.style => piece.text.push(ch),
                    _ => seg.pieces.push(StyledSpan {
                        text: ch.to_string(),
                        style: span.style,
                    }),
                }
                seg.width += UnicodeWidthChar::width(ch).unwrap_or(0);
            }
        }
    }
    result
}
