//! Staggered entrance timing for dashboard cards.
//!
//! Cards are staggered as one sequence in document order, so a card in a
//! later section always enters after every card above it.

#[cfg(test)]
#[path = "entrance_test.rs"]
mod entrance_test;

use crate::consts::{ENTRANCE_STAGGER_MS, ENTRANCE_START_MS};

/// Delay before card `index` starts its entrance transition.
#[must_use]
pub fn entrance_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX / ENTRANCE_STAGGER_MS);
    ENTRANCE_START_MS
        .saturating_add(ENTRANCE_STAGGER_MS)
        .saturating_add(index.saturating_mul(ENTRANCE_STAGGER_MS))
}

/// Inline style applying the entrance delay to card `index`.
#[must_use]
pub fn entrance_style(index: usize) -> String {
    format!("animation-delay: {}ms", entrance_delay_ms(index))
}

/// Sequence position of the first card in each dashboard block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntranceOrder {
    pub hero: usize,
    pub stats: usize,
    pub projects: usize,
    pub skills: usize,
    pub analytics: usize,
    pub activity: usize,
}

impl EntranceOrder {
    /// Lay out the sequence for a dashboard with the given card counts.
    #[must_use]
    pub fn new(stat_count: usize, project_count: usize, analytics_count: usize) -> Self {
        let hero = 0;
        let stats = hero + 1;
        let projects = stats + stat_count;
        let skills = projects + project_count;
        let analytics = skills + 1;
        let activity = analytics + analytics_count;
        Self { hero, stats, projects, skills, analytics, activity }
    }
}
