//! Layout — panel arrangement for wide and narrow terminals.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals narrower than this stack the profile above the terminal panel.
pub const NARROW_WIDTH: u16 = 80;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
/// Height of the profile card when stacked.
const STACKED_PROFILE_HEIGHT: u16 = 12;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub profile: Rect,
    pub terminal: Rect,
    pub footer: Rect,
    pub stacked: bool,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let body = rows[1];
        let stacked = area.width < NARROW_WIDTH;
        let panels = if stacked {
            let profile_height = STACKED_PROFILE_HEIGHT.min(body.height / 2);
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(profile_height), Constraint::Min(0)])
                .split(body)
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(body)
        };

        Self {
            header: rows[0],
            profile: panels[0],
            terminal: panels[1],
            footer: rows[2],
            stacked,
        }
    }
}

/// Split the terminal panel's inner area into the hint rows and the
/// scrolling transcript. Hints never take more than half the panel.
pub fn split_terminal(inner: Rect, hint_rows: u16) -> (Rect, Rect) {
    let hint_rows = hint_rows.min(inner.height / 2);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(hint_rows), Constraint::Min(0)])
        .split(inner);
    (parts[0], parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_layout_splits_side_by_side() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30));
        assert!(!layout.stacked);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.profile.width, 35);
        assert_eq!(layout.terminal.width, 65);
        assert_eq!(layout.profile.y, layout.terminal.y);
    }

    #[test]
    fn narrow_layout_stacks() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 60, 40));
        assert!(layout.stacked);
        assert_eq!(layout.profile.width, 60);
        assert_eq!(layout.terminal.width, 60);
        assert_eq!(layout.profile.height, STACKED_PROFILE_HEIGHT);
        assert_eq!(layout.terminal.y, layout.profile.y + layout.profile.height);
    }

    #[test]
    fn stacked_profile_never_takes_more_than_half() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 60, 14));
        assert!(layout.profile.height <= layout.terminal.height);
    }

    #[test]
    fn hints_capped_at_half_of_panel() {
        let (hints, transcript) = split_terminal(Rect::new(0, 0, 40, 6), 5);
        assert_eq!(hints.height, 3);
        assert_eq!(transcript.height, 3);
    }
}
