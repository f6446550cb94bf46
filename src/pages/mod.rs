//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The single explorer page owns command dispatch (fetches, filter resets)
//! and delegates rendering details to `components`.

pub mod explorer;
