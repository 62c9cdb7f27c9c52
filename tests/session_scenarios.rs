//! Session scenarios — command resolution, transcript transitions, and the
//! typing animation driven with injected time.

use std::time::{Duration, Instant};

use termfolio::content::{self, VOCABULARY};
use chrono::{TimeZone, Timelike, Utc};

use termfolio::session::{AnimationCursor, EntryState, Session, SessionOptions, SubmitOutcome};

const STEP: Duration = Duration::from_millis(15);

fn session(now: Instant) -> Session {
    Session::new(SessionOptions::default(), now)
}

fn instant_session(now: Instant) -> Session {
    let options = SessionOptions {
        typing_interval: Duration::ZERO,
        ..SessionOptions::default()
    };
    Session::new(options, now)
}

/// Tick in single steps until nothing is animating. Returns the revealed text
/// observed after each tick.
fn run_animation(session: &mut Session, mut now: Instant) -> (Vec<String>, Instant) {
    let mut seen = Vec::new();
    for _ in 0..10_000 {
        if !session.animator().is_animating() {
            break;
        }
        now += STEP;
        session.tick(now);
        seen.push(session.animator().revealed().to_string());
    }
    (seen, now)
}

fn animating_count(session: &Session) -> usize {
    (0..session.transcript().len())
        .filter(|&i| session.entry_state(i) == EntryState::Animating)
        .count()
}

// =============================================================================
// Fresh session
// =============================================================================

#[test]
fn fresh_session_has_one_welcome_entry() {
    let s = session(Instant::now());
    assert_eq!(s.transcript().len(), 1);
    let entry = &s.transcript().entries()[0];
    assert_eq!(entry.command, "welcome");
    assert_eq!(entry.output, content::WELCOME_TEXT);
    assert_eq!(s.entry_state(0), EntryState::Animating);
    assert_eq!(s.displayed_output(0), "");
}

#[test]
fn welcome_animation_reveals_greeting() {
    let now = Instant::now();
    let mut s = session(now);
    run_animation(&mut s, now);
    assert_eq!(s.entry_state(0), EntryState::Settled);
    assert_eq!(s.displayed_output(0), content::WELCOME_TEXT);
}

// =============================================================================
// Command resolution
// =============================================================================

#[test]
fn every_command_in_any_casing_appends_its_answer() {
    let now = Instant::now();
    for name in VOCABULARY.iter().filter(|n| **n != content::CLEAR) {
        let variants = [
            name.to_string(),
            name.to_uppercase(),
            format!("  {}\t", name),
            format!(" {} ", capitalize(name)),
        ];
        for raw in variants {
            let mut s = instant_session(now);
            let before = s.transcript().len();
            let outcome = s.submit_line(&raw, now);
            assert_eq!(outcome, SubmitOutcome::Appended(before));
            assert_eq!(s.transcript().len(), before + 1);
            let entry = s.transcript().last().unwrap();
            assert_eq!(entry.command, *name);
            assert_eq!(Some(entry.output.as_str()), content::answer(name));
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[test]
fn upper_case_help_appends_help_entry() {
    let now = Instant::now();
    let mut s = instant_session(now);
    s.submit_line("HELP", now);
    let entry = s.transcript().last().unwrap();
    assert_eq!(entry.command, "help");
    assert_eq!(Some(entry.output.as_str()), content::answer("help"));
}

#[test]
fn unknown_input_echoes_normalized_text() {
    let now = Instant::now();
    let mut s = instant_session(now);
    s.submit_line("xyz123", now);
    assert!(s.transcript().last().unwrap().output.contains("xyz123"));

    s.submit_line("  FooBar ", now);
    let entry = s.transcript().last().unwrap();
    assert_eq!(entry.command, "foobar");
    assert!(entry.output.contains("foobar"));
    assert_eq!(s.transcript().len(), 3);
}

#[test]
fn blank_input_never_changes_transcript() {
    let now = Instant::now();
    let mut s = session(now);
    for raw in ["", " ", "\t", "  \n "] {
        assert_eq!(s.submit_line(raw, now), SubmitOutcome::Ignored);
    }
    assert_eq!(s.transcript().len(), 1);
    // The welcome animation is unaffected.
    assert_eq!(s.entry_state(0), EntryState::Animating);
}

// =============================================================================
// Clear
// =============================================================================

#[test]
fn about_then_clear_empties_transcript() {
    let now = Instant::now();
    let mut s = session(now);
    s.submit_line("about", now);
    assert_eq!(s.submit_line("clear", now), SubmitOutcome::Cleared);
    assert!(s.transcript().is_empty());
    assert!(!s.animator().is_animating());
    assert!(s.animator().next_deadline().is_none());
}

#[test]
fn clear_on_empty_transcript_is_harmless() {
    let now = Instant::now();
    let mut s = instant_session(now);
    s.submit_line("CLEAR", now);
    s.submit_line(" clear ", now);
    assert!(s.transcript().is_empty());
}

#[test]
fn clear_mid_animation_leaves_no_stale_text() {
    let now = Instant::now();
    let mut s = session(now);
    s.tick(now + STEP * 3);
    assert!(!s.animator().revealed().is_empty());
    s.submit_line("clear", now + STEP * 3);
    assert_eq!(s.animator().revealed(), "");

    // Later ticks must not bring anything back.
    assert!(!s.tick(now + STEP * 100).content_changed);
    assert!(s.transcript().is_empty());
}

// =============================================================================
// Animation
// =============================================================================

#[test]
fn animation_grows_monotonically_to_stored_text() {
    let now = Instant::now();
    let mut s = session(now);
    let (_, now) = run_animation(&mut s, now);
    let outcome = s.submit_line("contact", now);
    let SubmitOutcome::Appended(index) = outcome else {
        panic!("expected an appended entry");
    };
    assert_eq!(s.displayed_output(index), "");

    let (seen, _) = run_animation(&mut s, now);
    let full = content::answer("contact").unwrap();
    let mut previous = String::new();
    for revealed in &seen {
        assert!(revealed.starts_with(previous.as_str()));
        assert!(revealed.len() >= previous.len());
        previous = revealed.clone();
    }
    assert_eq!(previous, full);
    assert_eq!(s.displayed_output(index), full);
}

#[test]
fn reveal_takes_one_character_per_interval() {
    let now = Instant::now();
    let mut s = session(now);
    s.tick(now + STEP * 5);
    assert_eq!(s.animator().revealed().chars().count(), 5);
}

#[test]
fn new_command_supersedes_running_animation() {
    let now = Instant::now();
    let mut s = session(now);
    s.tick(now + STEP * 2);
    s.submit_line("skills", now + STEP * 2);

    assert_eq!(animating_count(&s), 1);
    assert_eq!(s.entry_state(0), EntryState::Settled);
    assert_eq!(s.entry_state(1), EntryState::Animating);
    // The superseded entry shows its full text immediately.
    assert_eq!(s.displayed_output(0), content::WELCOME_TEXT);
    assert_eq!(s.displayed_output(1), "");
    assert_eq!(
        s.animator().cursor(),
        &AnimationCursor {
            target: Some(1),
            revealed: String::new(),
        }
    );
}

#[test]
fn at_most_one_entry_animates_throughout() {
    let mut now = Instant::now();
    let mut s = session(now);
    for command in ["help", "about", "nope", "projects", "experience"] {
        s.submit_line(command, now);
        for _ in 0..7 {
            now += STEP;
            s.tick(now);
            assert!(animating_count(&s) <= 1);
        }
    }
}

#[test]
fn zero_interval_shows_answers_immediately() {
    let now = Instant::now();
    let mut s = instant_session(now);
    s.submit_line("about", now);
    assert_eq!(animating_count(&s), 0);
    assert_eq!(s.displayed_output(1), content::answer("about").unwrap());
}

#[test]
fn stalled_loop_catches_up() {
    let now = Instant::now();
    let mut s = session(now);
    let len = content::WELCOME_TEXT.chars().count() as u32;
    // One long stall covers every character plus the settle step.
    s.tick(now + STEP * (len + 1));
    assert_eq!(s.entry_state(0), EntryState::Settled);
    assert_eq!(s.displayed_output(0), content::WELCOME_TEXT);
}

// =============================================================================
// Input buffer
// =============================================================================

#[test]
fn submit_takes_the_input_buffer() {
    let now = Instant::now();
    let mut s = instant_session(now);
    for c in "Skills".chars() {
        s.input_mut().insert_char(c);
    }
    let outcome = s.submit(now);
    assert_eq!(outcome, SubmitOutcome::Appended(1));
    assert!(s.input().is_empty());
    assert_eq!(s.transcript().last().unwrap().command, "skills");
}

// =============================================================================
// Clock
// =============================================================================

#[test]
fn clock_ticks_once_per_second() {
    let now = Instant::now();
    let mut s = instant_session(now);
    assert!(!s.tick(now + Duration::from_millis(500)).clock_changed);
    assert!(s.tick(now + Duration::from_millis(1000)).clock_changed);
}

#[test]
fn pinned_clock_reads_in_ist() {
    let now = Instant::now();
    let mut s = instant_session(now);
    // 09:34:05 UTC is 15:04:05 IST
    s.clock_mut()
        .set_time(Utc.with_ymd_and_hms(2026, 10, 19, 9, 34, 5).unwrap());
    let current = s.clock().current();
    assert_eq!(current.offset().local_minus_utc(), 330 * 60);
    assert_eq!((current.hour(), current.minute()), (15, 4));
    assert_eq!(s.clock().display(), "19/10/2026, 3:04:05 pm");
}

#[test]
fn next_deadline_prefers_the_animation() {
    let now = Instant::now();
    let s = session(now);
    assert_eq!(s.next_deadline(), Some(now + STEP));

    let idle = instant_session(now);
    assert_eq!(idle.next_deadline(), Some(now + Duration::from_secs(1)));
}
