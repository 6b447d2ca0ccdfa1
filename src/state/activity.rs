//! Recent-activity feed and the simulated refresh sequence.
//!
//! SYSTEM CONTEXT
//! ==============
//! A refresh fabricates nothing but motion: entries dim and come back one by
//! one, the trigger spins, shows a check mark, then returns to its idle
//! glyph. The timers that drive the sequence carry the refresh sequence
//! number so callbacks from an earlier click cannot clobber a later one.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use crate::consts::{ACTIVITY_DIM_OPACITY, ACTIVITY_RESTORE_BASE_MS, ACTIVITY_RESTORE_STAGGER_MS};
use crate::content::ActivityContent;

/// Visual cue on the refresh trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshCue {
    #[default]
    Idle,
    Rotating,
    Confirmed,
}

impl RefreshCue {
    #[must_use]
    pub fn button_class(self) -> &'static str {
        match self {
            Self::Rotating => "icon-btn small rotating",
            Self::Idle | Self::Confirmed => "icon-btn small",
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Confirmed => "✓",
            Self::Idle | Self::Rotating => "⟳",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityEntry {
    pub id: usize,
    pub icon: String,
    pub title: String,
    pub time: String,
    pub dimmed: bool,
}

impl ActivityEntry {
    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.dimmed { ACTIVITY_DIM_OPACITY } else { 1.0 }
    }
}

/// Restore instruction produced when a refresh starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestoreStep {
    pub index: usize,
    pub delay_ms: u32,
}

/// Delay before entry `index` returns to full opacity.
#[must_use]
pub fn restore_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    ACTIVITY_RESTORE_BASE_MS.saturating_add(index.saturating_mul(ACTIVITY_RESTORE_STAGGER_MS))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityState {
    pub entries: Vec<ActivityEntry>,
    pub cue: RefreshCue,
    /// Incremented by every refresh; timers compare against it.
    pub refresh_seq: u64,
}

impl ActivityState {
    #[must_use]
    pub fn from_content(items: &[ActivityContent]) -> Self {
        let entries = items
            .iter()
            .enumerate()
            .map(|(id, item)| ActivityEntry {
                id,
                icon: item.icon.clone(),
                title: item.title.clone(),
                time: item.time.clone(),
                dimmed: false,
            })
            .collect();
        Self { entries, ..Self::default() }
    }

    /// Start a refresh: spin the trigger, dim every entry, and return the
    /// sequence number plus the per-entry restore schedule.
    pub fn begin_refresh(&mut self) -> (u64, Vec<RestoreStep>) {
        self.refresh_seq += 1;
        self.cue = RefreshCue::Rotating;
        let steps = self
            .entries
            .iter_mut()
            .enumerate()
            .map(|(index, entry)| {
                entry.dimmed = true;
                RestoreStep { index, delay_ms: restore_delay_ms(index) }
            })
            .collect();
        (self.refresh_seq, steps)
    }

    /// Bring entry `index` back to full opacity. Returns `false` when `seq`
    /// belongs to a superseded refresh or `index` is out of range.
    pub fn restore(&mut self, seq: u64, index: usize) -> bool {
        if seq != self.refresh_seq {
            return false;
        }
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.dimmed = false;
        true
    }

    /// End of the spin: show the confirmation glyph. Returns `false` when
    /// `seq` belongs to a superseded refresh.
    pub fn settle(&mut self, seq: u64) -> bool {
        if seq != self.refresh_seq {
            return false;
        }
        self.cue = RefreshCue::Confirmed;
        true
    }

    /// Return the trigger to its idle glyph.
    pub fn revert(&mut self, seq: u64) -> bool {
        if seq != self.refresh_seq || self.cue != RefreshCue::Confirmed {
            return false;
        }
        self.cue = RefreshCue::Idle;
        true
    }

    #[must_use]
    pub fn all_restored(&self) -> bool {
        self.entries.iter().all(|e| !e.dimmed)
    }
}
