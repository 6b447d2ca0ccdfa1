//! Animated counter values for hero stats and analytics tiles.
//!
//! DESIGN
//! ======
//! Every counter carries a generation number. Starting an animation bumps
//! the generation and hands back an [`AnimationTicket`]; frame ticks holding
//! an older ticket are ignored and stop their loop. The board also keeps the
//! [`FrameHandle`] of each counter's running loop and cancels it when a new
//! animation replaces it, so a re-triggered counter always follows the
//! newest animation (cancel-and-replace).

#[cfg(test)]
#[path = "counters_test.rs"]
mod counters_test;

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use leptos::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::{ANALYTICS_INTRO_BASE_MS, ANALYTICS_INTRO_JITTER_MS};
use crate::util::frame_loop::{self, FrameHandle};
use crate::util::tween::Tween;

/// The four analytics tiles nudged by an activity refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnalyticsCounter {
    Visitors,
    ProjectsViewed,
    ResumeDownloads,
    SkillsViews,
}

impl AnalyticsCounter {
    pub const ALL: [AnalyticsCounter; 4] = [
        AnalyticsCounter::Visitors,
        AnalyticsCounter::ProjectsViewed,
        AnalyticsCounter::ResumeDownloads,
        AnalyticsCounter::SkillsViews,
    ];

    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Visitors => "visitors",
            Self::ProjectsViewed => "projectsViewed",
            Self::ResumeDownloads => "resumeDownloads",
            Self::SkillsViews => "skillsViews",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Visitors => "Visitors",
            Self::ProjectsViewed => "Projects viewed",
            Self::ResumeDownloads => "Resume downloads",
            Self::SkillsViews => "Skills views",
        }
    }

    /// Increment range applied by one activity refresh.
    #[must_use]
    pub fn bump_range(self) -> RangeInclusive<u64> {
        match self {
            Self::Visitors => 1..=3,
            Self::ProjectsViewed | Self::ResumeDownloads | Self::SkillsViews => 1..=2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CounterKey {
    /// Hero stat card by position.
    Stat(usize),
    Analytics(AnalyticsCounter),
}

/// Identifies one animation run of one counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTicket {
    pub key: CounterKey,
    pub generation: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Counter {
    displayed: u64,
    tween: Option<Tween>,
    generation: u64,
}

impl Counter {
    #[must_use]
    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    /// Value the counter is heading to (the displayed value when idle).
    #[must_use]
    pub fn target(&self) -> u64 {
        self.tween.map_or(self.displayed, |t| t.target)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct CounterBoard {
    counters: BTreeMap<CounterKey, Counter>,
    loops: BTreeMap<CounterKey, FrameHandle>,
    rng: SmallRng,
}

impl CounterBoard {
    /// Empty board whose random bumps come from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { counters: BTreeMap::new(), loops: BTreeMap::new(), rng: SmallRng::seed_from_u64(seed) }
    }

    /// Register a counter showing `value`. Re-registering resets it.
    pub fn insert(&mut self, key: CounterKey, value: u64) {
        self.counters.insert(key, Counter { displayed: value, ..Counter::default() });
    }

    #[must_use]
    pub fn get(&self, key: CounterKey) -> Option<&Counter> {
        self.counters.get(&key)
    }

    /// Displayed value; unknown counters read as 0.
    #[must_use]
    pub fn value(&self, key: CounterKey) -> u64 {
        self.get(key).map_or(0, Counter::displayed)
    }

    /// Begin animating `key` from its displayed value toward `target`.
    ///
    /// Any in-flight animation on the same counter is superseded and its
    /// frame loop cancelled. Returns `None` for unknown counters.
    pub fn start(&mut self, key: CounterKey, target: u64, duration_ms: f64, now_ms: f64) -> Option<AnimationTicket> {
        let counter = self.counters.get_mut(&key)?;
        counter.generation += 1;
        if let Some(previous) = self.loops.remove(&key) {
            previous.cancel();
        }
        let tween = Tween::new(counter.displayed, target, now_ms, duration_ms);
        if tween.is_finished(now_ms) {
            counter.displayed = target;
            counter.tween = None;
        } else {
            counter.tween = Some(tween);
        }
        Some(AnimationTicket { key, generation: counter.generation })
    }

    /// Show 0 on `key`, then animate up to `target` (page-load intro).
    pub fn start_from_zero(
        &mut self,
        key: CounterKey,
        target: u64,
        duration_ms: f64,
        now_ms: f64,
    ) -> Option<AnimationTicket> {
        self.counters.get_mut(&key)?.displayed = 0;
        self.start(key, target, duration_ms, now_ms)
    }

    /// Advance the animation identified by `ticket` to `now_ms`.
    ///
    /// Returns `true` while further frames are needed. Stale tickets return
    /// `false` without touching the counter.
    pub fn tick(&mut self, ticket: AnimationTicket, now_ms: f64) -> bool {
        let Some(counter) = self.counters.get_mut(&ticket.key) else {
            return false;
        };
        if counter.generation != ticket.generation {
            return false;
        }
        let Some(tween) = counter.tween else {
            return false;
        };
        counter.displayed = tween.value_at(now_ms);
        if tween.is_finished(now_ms) {
            counter.tween = None;
            self.loops.remove(&ticket.key);
            return false;
        }
        true
    }

    /// Record the frame loop driving `ticket`. A handle for a ticket that is
    /// already stale or finished is cancelled instead of stored.
    pub fn attach(&mut self, ticket: AnimationTicket, handle: FrameHandle) {
        let current = self
            .counters
            .get(&ticket.key)
            .is_some_and(|c| c.generation == ticket.generation && c.is_animating());
        if !current {
            handle.cancel();
            return;
        }
        if let Some(previous) = self.loops.insert(ticket.key, handle) {
            previous.cancel();
        }
    }

    /// Randomized intro duration for an analytics tile.
    pub fn analytics_intro_ms(&mut self) -> f64 {
        ANALYTICS_INTRO_BASE_MS + self.rng.random::<f64>() * ANALYTICS_INTRO_JITTER_MS
    }

    /// Add a random increment to every registered analytics counter and
    /// animate each to its new total.
    pub fn bump_analytics(&mut self, duration_ms: f64, now_ms: f64) -> Vec<AnimationTicket> {
        let mut tickets = Vec::with_capacity(AnalyticsCounter::ALL.len());
        for which in AnalyticsCounter::ALL {
            let key = CounterKey::Analytics(which);
            let Some(base) = self.get(key).map(Counter::target) else {
                continue;
            };
            let delta = self.rng.random_range(which.bump_range());
            if let Some(ticket) = self.start(key, base.saturating_add(delta), duration_ms, now_ms) {
                tickets.push(ticket);
            }
        }
        tickets
    }
}

/// Drive `ticket` on the frame loop until it finishes or is superseded.
///
/// The loop's handle is stored on the board, so starting another animation
/// on the same counter cancels this loop.
pub fn drive(counters: RwSignal<CounterBoard>, ticket: AnimationTicket) {
    let running = counters.with_untracked(|board| board.get(ticket.key).is_some_and(Counter::is_animating));
    if !running {
        return;
    }
    let Some(handle) =
        frame_loop::spawn(move |now| counters.try_update(|board| board.tick(ticket, now)).unwrap_or(false))
    else {
        return;
    };
    counters.try_update(|board| board.attach(ticket, handle));
}
