//! Typing animator — reveals one entry's raw text a character per tick.
//!
//! The animator works on the Markdown source, not the rendered output, so a
//! half-revealed entry may show unfinished markup until the reveal completes.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::timer::IntervalTimer;

/// Default delay between revealed characters.
pub const DEFAULT_TYPING_INTERVAL: Duration = Duration::from_millis(15);

/// Display state of a transcript entry.
///
/// Appended entries become `Animating` immediately; there is no observable
/// pending phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Animating,
    Settled,
}

/// Which entry is mid-animation and how much of it is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationCursor {
    pub target: Option<usize>,
    pub revealed: String,
}

/// Single-target reveal driven by one interval timer.
#[derive(Debug, Clone)]
pub struct TypingAnimator {
    cursor: AnimationCursor,
    /// Byte offset of the next character to reveal.
    offset: usize,
    timer: IntervalTimer,
    enabled: bool,
}

impl TypingAnimator {
    /// Create an animator. A zero interval disables animation entirely.
    pub fn new(interval: Duration) -> Self {
        Self {
            cursor: AnimationCursor {
                target: None,
                revealed: String::new(),
            },
            offset: 0,
            timer: IntervalTimer::new(interval),
            enabled: !interval.is_zero(),
        }
    }

    /// Make `index` the animation target, superseding any running animation.
    pub fn start(&mut self, index: usize, now: Instant) {
        self.timer.cancel();
        self.cursor.revealed.clear();
        self.offset = 0;
        if !self.enabled {
            self.cursor.target = None;
            return;
        }
        self.cursor.target = Some(index);
        self.timer.start(now);
        debug!(index, "typing animation started");
    }

    /// Stop animating and forget the revealed text. Safe to call when idle.
    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.cursor.target = None;
        self.cursor.revealed.clear();
        self.offset = 0;
    }

    /// Reveal one character of `text` for each elapsed period. Once everything
    /// is visible, the following period settles the entry.
    ///
    /// Returns true if the revealed text or the target changed.
    pub fn tick(&mut self, text: &str, now: Instant) -> bool {
        if self.cursor.target.is_none() {
            return false;
        }
        let fired = self.timer.poll(now);
        let mut changed = false;
        for _ in 0..fired {
            match text.get(self.offset..).and_then(|rest| rest.chars().next()) {
                Some(ch) => {
                    self.cursor.revealed.push(ch);
                    self.offset += ch.len_utf8();
                }
                None => {
                    debug!(index = ?self.cursor.target, "typing animation finished");
                    self.cursor.target = None;
                    self.timer.cancel();
                    changed = true;
                    break;
                }
            }
            changed = true;
        }
        changed
    }

    pub fn cursor(&self) -> &AnimationCursor {
        &self.cursor
    }

    pub fn target(&self) -> Option<usize> {
        self.cursor.target
    }

    pub fn revealed(&self) -> &str {
        &self.cursor.revealed
    }

    pub fn is_animating(&self) -> bool {
        self.cursor.target.is_some()
    }

    pub fn entry_state(&self, index: usize) -> EntryState {
        if self.cursor.target == Some(index) {
            EntryState::Animating
        } else {
            EntryState::Settled
        }
    }

    /// Deadline of the next reveal step, if animating.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    pub fn interval(&self) -> Duration {
        self.timer.period()
    }
}

impl Default for TypingAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_TYPING_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(10);

    #[test]
    fn start_resets_revealed_text() {
        let t0 = Instant::now();
        let mut anim = TypingAnimator::new(STEP);
        anim.start(0, t0);
        anim.tick("hello", t0 + STEP * 3);
        assert_eq!(anim.revealed(), "hel");

        anim.start(1, t0 + STEP * 3);
        assert_eq!(anim.revealed(), "");
        assert_eq!(anim.target(), Some(1));
    }

    #[test]
    fn reveals_one_char_per_period() {
        let t0 = Instant::now();
        let mut anim = TypingAnimator::new(STEP);
        anim.start(0, t0);
        assert!(!anim.tick("abc", t0 + STEP / 2));
        assert!(anim.tick("abc", t0 + STEP));
        assert_eq!(anim.revealed(), "a");
        assert!(anim.tick("abc", t0 + STEP * 2));
        assert_eq!(anim.revealed(), "ab");
    }

    #[test]
    fn settles_one_period_after_full_reveal() {
        let t0 = Instant::now();
        let mut anim = TypingAnimator::new(STEP);
        anim.start(3, t0);
        anim.tick("ab", t0 + STEP * 2);
        assert_eq!(anim.revealed(), "ab");
        assert_eq!(anim.entry_state(3), EntryState::Animating);

        assert!(anim.tick("ab", t0 + STEP * 3));
        assert_eq!(anim.target(), None);
        assert_eq!(anim.entry_state(3), EntryState::Settled);
        assert!(anim.next_deadline().is_none());
    }

    #[test]
    fn multibyte_characters_are_revealed_whole() {
        let t0 = Instant::now();
        let mut anim = TypingAnimator::new(STEP);
        anim.start(0, t0);
        anim.tick("💻é!", t0 + STEP * 2);
        assert_eq!(anim.revealed(), "💻é");
    }

    #[test]
    fn cancel_is_idempotent() {
        let t0 = Instant::now();
        let mut anim = TypingAnimator::new(STEP);
        anim.start(0, t0);
        anim.cancel();
        anim.cancel();
        assert!(!anim.is_animating());
        assert_eq!(anim.revealed(), "");
        assert!(!anim.tick("abc", t0 + STEP * 10));
    }

    #[test]
    fn zero_interval_disables_animation() {
        let mut anim = TypingAnimator::new(Duration::ZERO);
        anim.start(0, Instant::now());
        assert!(!anim.is_animating());
        assert_eq!(anim.entry_state(0), EntryState::Settled);
    }

    #[test]
    fn only_target_is_animating() {
        let t0 = Instant::now();
        let mut anim = TypingAnimator::new(STEP);
        anim.start(2, t0);
        assert_eq!(anim.entry_state(0), EntryState::Settled);
        assert_eq!(anim.entry_state(1), EntryState::Settled);
        assert_eq!(anim.entry_state(2), EntryState::Animating);
    }
}
