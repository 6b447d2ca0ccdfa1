use super::*;
use crate::consts::REFRESH_SETTLE_MS;

fn feed(count: usize) -> ActivityState {
    let items = (0..count)
        .map(|i| ActivityContent {
            icon: "•".to_owned(),
            title: format!("Entry {i}"),
            time: format!("{i}h ago"),
        })
        .collect::<Vec<_>>();
    ActivityState::from_content(&items)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_feed_is_idle_and_fully_visible() {
    let state = feed(3);
    assert_eq!(state.cue, RefreshCue::Idle);
    assert_eq!(state.refresh_seq, 0);
    assert!(state.entries.iter().all(|e| e.opacity() == 1.0));
    assert_eq!(state.entries[2].id, 2);
}

#[test]
fn refresh_cue_classes_and_glyphs() {
    assert!(RefreshCue::Rotating.button_class().contains("rotating"));
    assert!(!RefreshCue::Idle.button_class().contains("rotating"));
    assert_eq!(RefreshCue::Confirmed.glyph(), "✓");
    assert_eq!(RefreshCue::Idle.glyph(), RefreshCue::Rotating.glyph());
}

// =============================================================
// Refresh sequence
// =============================================================

#[test]
fn restore_delays_are_staggered() {
    assert_eq!(restore_delay_ms(0), 250);
    assert_eq!(restore_delay_ms(1), 330);
    assert_eq!(restore_delay_ms(5), 650);
}

#[test]
fn begin_refresh_dims_every_entry_and_spins() {
    let mut state = feed(4);
    let (seq, steps) = state.begin_refresh();
    assert_eq!(seq, 1);
    assert_eq!(state.cue, RefreshCue::Rotating);
    assert!(state.entries.iter().all(|e| e.dimmed && e.opacity() == 0.45));
    let delays = steps.iter().map(|s| s.delay_ms).collect::<Vec<_>>();
    assert_eq!(delays, vec![250, 330, 410, 490]);
}

#[test]
fn entries_restore_within_settle_window() {
    let mut state = feed(5);
    let (seq, steps) = state.begin_refresh();
    let mut pending = steps;
    pending.sort_by_key(|s| s.delay_ms);
    for step in pending.iter().filter(|s| s.delay_ms <= REFRESH_SETTLE_MS) {
        assert!(state.restore(seq, step.index));
    }
    assert!(state.all_restored());
    assert!(state.settle(seq));
    assert_eq!(state.cue, RefreshCue::Confirmed);
    assert!(state.revert(seq));
    assert_eq!(state.cue, RefreshCue::Idle);
}

#[test]
fn stale_timers_are_ignored_after_a_second_refresh() {
    let mut state = feed(2);
    let (first, _) = state.begin_refresh();
    let (second, _) = state.begin_refresh();
    assert!(!state.settle(first));
    assert_eq!(state.cue, RefreshCue::Rotating);
    assert!(state.settle(second));
    assert!(!state.revert(first));
    assert_eq!(state.cue, RefreshCue::Confirmed);
}

#[test]
fn revert_requires_confirmation_first() {
    let mut state = feed(1);
    let (seq, _) = state.begin_refresh();
    assert!(!state.revert(seq));
    assert_eq!(state.cue, RefreshCue::Rotating);
}

#[test]
fn restore_out_of_range_is_ignored() {
    let mut state = feed(1);
    let (seq, _) = state.begin_refresh();
    assert!(!state.restore(seq, 7));
    assert!(!state.all_restored());
}

#[test]
fn superseded_restore_timer_leaves_newer_dimming_alone() {
    let mut state = feed(3);
    let (first, first_steps) = state.begin_refresh();
    let (second, second_steps) = state.begin_refresh();

    for step in &first_steps {
        assert!(!state.restore(first, step.index));
    }
    assert!(state.entries.iter().all(|e| e.dimmed));

    for step in &second_steps {
        assert!(state.restore(second, step.index));
    }
    assert!(state.all_restored());
}
