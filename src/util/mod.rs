//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod dom;
pub mod entrance;
pub mod frame_loop;
pub mod number;
pub mod storage;
pub mod tween;
