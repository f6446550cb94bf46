//! Pure render model for the results area.
//!
//! ARCHITECTURE
//! ============
//! `facts` maps fetched payloads plus the active filter to a plain fragment
//! tree. Components in `components/` only translate that tree into DOM, so
//! everything the user sees is decided by code that tests without a browser.

pub mod facts;
