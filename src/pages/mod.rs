//! Page modules for the two top-level views.
//!
//! ARCHITECTURE
//! ============
//! Each page owns view-scoped layout and delegates rendering details
//! to `components`. Only one page is visible at a time; `PageVisibility`
//! decides which.

pub mod dashboard;
pub mod profile;
