//! First-visit flag persisted in browser localStorage.
//!
//! Gates the one delayed auto-load of today's facts so it fires at most
//! once per storage scope. SSR paths safely report "visited" absent and
//! no-op on write, keeping server rendering deterministic.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "hasVisited";

/// Whether this browser has completed a first visit before.
pub fn has_visited() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Record that the first visit happened. Best-effort.
pub fn mark_visited() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, "true");
        }
    }
}
