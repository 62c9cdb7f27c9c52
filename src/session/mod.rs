//! Terminal session — transcript, input line, typing animation, and clock.
//!
//! All mutable state lives in [`Session`]; the event loop drives it through
//! [`Session::submit`] and [`Session::tick`], passing the current instant so
//! behaviour is deterministic under test.

pub mod animator;
pub mod clock;
pub mod input;
pub mod resolver;
pub mod transcript;

pub use animator::{AnimationCursor, EntryState, TypingAnimator, DEFAULT_TYPING_INTERVAL};
pub use clock::Clock;
pub use input::InputBuffer;
pub use resolver::{normalize, resolve, Resolution};
pub use transcript::{CommandEntry, Transcript};

use std::time::{Duration, Instant};

use chrono::FixedOffset;
use tracing::debug;

use crate::content;

/// Knobs for a new session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Delay between revealed characters; zero shows entries at once.
    pub typing_interval: Duration,
    /// Timezone of the footer clock.
    pub utc_offset: FixedOffset,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            typing_interval: DEFAULT_TYPING_INTERVAL,
            utc_offset: clock::ist(),
        }
    }
}

/// What a submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    Cleared,
    Appended(usize),
}

/// What changed during a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Revealed text grew or an entry settled.
    pub content_changed: bool,
    pub clock_changed: bool,
}

/// One visitor's terminal session.
#[derive(Debug, Clone)]
pub struct Session {
    transcript: Transcript,
    input: InputBuffer,
    animator: TypingAnimator,
    clock: Clock,
}

impl Session {
    /// Start a session with the welcome entry already animating.
    pub fn new(options: SessionOptions, now: Instant) -> Self {
        let mut session = Self {
            transcript: Transcript::new(),
            input: InputBuffer::new(),
            animator: TypingAnimator::new(options.typing_interval),
            clock: Clock::new(options.utc_offset, now),
        };
        let index = session.transcript.push(CommandEntry::new(
            content::WELCOME_COMMAND,
            content::WELCOME_TEXT,
        ));
        session.animator.start(index, now);
        session
    }

    /// Submit whatever is in the input buffer.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        let line = self.input.take();
        self.submit_line(&line, now)
    }

    /// Resolve `raw` and apply the result to the transcript and animator.
    pub fn submit_line(&mut self, raw: &str, now: Instant) -> SubmitOutcome {
        match resolve(raw) {
            Resolution::Ignore => SubmitOutcome::Ignored,
            Resolution::Reset => {
                debug!("transcript cleared");
                self.transcript.clear();
                self.animator.cancel();
                SubmitOutcome::Cleared
            }
            Resolution::Append(entry) => {
                debug!(command = %entry.command, "command appended");
                let index = self.transcript.push(entry);
                self.animator.start(index, now);
                SubmitOutcome::Appended(index)
            }
        }
    }

    /// Advance the animation and clock timers to `now`.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let content_changed = match self.animator.target() {
            Some(index) => match self.transcript.get(index) {
                Some(entry) => self.animator.tick(&entry.output, now),
                None => {
                    self.animator.cancel();
                    true
                }
            },
            None => false,
        };
        TickOutcome {
            content_changed,
            clock_changed: self.clock.tick(now),
        }
    }

    /// Text to show for entry `index`: the revealed prefix while it animates,
    /// its full output otherwise.
    pub fn displayed_output(&self, index: usize) -> &str {
        match self.animator.entry_state(index) {
            EntryState::Animating => self.animator.revealed(),
            EntryState::Settled => self
                .transcript
                .get(index)
                .map(|e| e.output.as_str())
                .unwrap_or(""),
        }
    }

    pub fn entry_state(&self, index: usize) -> EntryState {
        self.animator.entry_state(index)
    }

    /// Earliest instant at which a timer needs servicing.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.animator.next_deadline(), self.clock.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    pub fn animator(&self) -> &TypingAnimator {
        &self.animator
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}
