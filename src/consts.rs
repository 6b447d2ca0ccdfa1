//! Shared timing and layout constants for the dashboard.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the theme flag (`"dark"` or `"light"`).
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Counters ────────────────────────────────────────────────────

/// Duration of the page-load animation for hero stat cards.
pub const STAT_INTRO_MS: f64 = 900.0;

/// Base duration of the page-load animation for analytics counters.
pub const ANALYTICS_INTRO_BASE_MS: f64 = 1000.0;

/// Random extra duration added on top of [`ANALYTICS_INTRO_BASE_MS`].
pub const ANALYTICS_INTRO_JITTER_MS: f64 = 800.0;

/// Duration of the animation after an activity refresh bumps a counter.
pub const BUMP_ANIMATION_MS: f64 = 650.0;

// ── Activity refresh ────────────────────────────────────────────

/// Opacity applied to activity entries while a refresh is in flight.
pub const ACTIVITY_DIM_OPACITY: f64 = 0.45;

/// Delay before the first activity entry is restored.
pub const ACTIVITY_RESTORE_BASE_MS: u32 = 250;

/// Extra restore delay per entry index.
pub const ACTIVITY_RESTORE_STAGGER_MS: u32 = 80;

/// Delay between the click and the end of the rotating cue.
pub const REFRESH_SETTLE_MS: u32 = 900;

/// How long the confirmation glyph stays visible.
pub const REFRESH_CONFIRM_MS: u32 = 800;

// ── Layout ──────────────────────────────────────────────────────

/// Main column offset while the sidebar is expanded.
pub const SIDEBAR_EXPANDED_PX: u32 = 240;

/// Main column offset while the sidebar is collapsed to its icon rail.
pub const SIDEBAR_COLLAPSED_PX: u32 = 72;

/// Viewports at or below this width start with the sidebar hidden.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ── Entrance ────────────────────────────────────────────────────

/// Delay before the card entrance sequence begins.
pub const ENTRANCE_START_MS: u32 = 220;

/// Per-card stagger of the entrance sequence.
pub const ENTRANCE_STAGGER_MS: u32 = 80;
