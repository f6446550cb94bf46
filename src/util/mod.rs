//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate date/text/browser-storage concerns from page and
//! component logic to improve reuse and testability.

pub mod dates;
pub mod text;
pub mod visit;
