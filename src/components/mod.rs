//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod activity_feed;
pub mod analytics_panel;
pub mod footer;
pub mod project_list;
pub mod sidebar;
pub mod skill_list;
pub mod stat_cards;
pub mod topbar;
