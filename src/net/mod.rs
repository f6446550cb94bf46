//! Networking modules for the facts API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the remote facts service and `types`
//! defines the JSON wire schema those calls decode into.

pub mod api;
pub mod types;
