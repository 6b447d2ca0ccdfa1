//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `sidebar`, `counters`, etc.) so
//! individual components can depend on small focused models. Each model is
//! a plain struct held in an `RwSignal` and provided via context by `App`.

pub mod activity;
pub mod counters;
pub mod page;
pub mod sections;
pub mod sidebar;
pub mod theme;
