//! Process-global primary-surface registry.
//!
//! ## Usage
//!
//! Platform glue publishes the primary surface here once it exists;
//! controllers query and subscribe through the same registry. The registry
//! plays the role the shared application object plays on mobile platforms:
//! one well-known place that answers "what is the primary surface right
//! now?" and announces when one comes up.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::debug;

use glint::{
    Durations, SurfaceEventHub, SurfaceHandle, SurfaceProvider, VisibilityController,
};

#[derive(Default)]
struct SurfaceState {
    surface: Option<SurfaceHandle>,
}

fn surface_state() -> &'static RwLock<SurfaceState> {
    static STATE: OnceLock<RwLock<SurfaceState>> = OnceLock::new();
    STATE.get_or_init(|| RwLock::new(SurfaceState::default()))
}

/// Returns the process-wide surface availability hub.
pub fn surface_events() -> Arc<SurfaceEventHub> {
    static HUB: OnceLock<Arc<SurfaceEventHub>> = OnceLock::new();
    HUB.get_or_init(|| Arc::new(SurfaceEventHub::new())).clone()
}

/// Publishes `surface` as the primary surface and fires the availability
/// event.
///
/// Replacing a previously registered surface is allowed (resume after
/// suspend); controllers that already picked one up are not re-notified.
pub fn set_primary_surface(surface: SurfaceHandle) {
    surface_state().write().surface = Some(surface);
    debug!("primary surface registered");
    surface_events().notify_surface_available();
}

/// Clears the registered primary surface (suspend or teardown path).
pub fn clear_primary_surface() {
    surface_state().write().surface = None;
    debug!("primary surface cleared");
}

/// Returns the current primary surface, or `None` before one is registered.
pub fn primary_surface() -> Option<SurfaceHandle> {
    surface_state().read().surface.clone()
}

/// [`SurfaceProvider`] backed by the process-global registry.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrimarySurfaceProvider;

impl PrimarySurfaceProvider {
    /// Creates a provider.
    pub fn new() -> Self {
        Self
    }
}

impl SurfaceProvider for PrimarySurfaceProvider {
    fn primary_surface(&self) -> Option<SurfaceHandle> {
        primary_surface()
    }
}

/// Creates a [`VisibilityController`] wired to the process-global provider
/// and availability hub.
///
/// Pass `None` for `initial_surface` when the bar is set up before the first
/// surface exists; the controller then attaches itself once
/// [`set_primary_surface`] runs.
pub fn visibility_controller(
    initial_surface: Option<SurfaceHandle>,
    durations: Durations,
) -> Arc<VisibilityController> {
    VisibilityController::new(
        initial_surface,
        durations,
        Arc::new(PrimarySurfaceProvider::new()),
        surface_events(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // The registry is process-global, so everything is exercised in a single
    // test to keep it independent of test-runner interleaving.
    #[test]
    fn registry_round_trip_and_controller_wiring() {
        let window = Arc::new("primary-window");
        let handle = SurfaceHandle::new(&window);

        assert!(primary_surface().is_none());

        let controller = visibility_controller(None, Durations::default());
        assert!(controller.host_surface().get().is_none());

        set_primary_surface(handle.clone());
        assert_eq!(primary_surface(), Some(handle.clone()));
        assert_eq!(controller.host_surface().get(), Some(handle.clone()));

        controller.show();
        assert!(!controller.visibility().get().is_hidden);

        // A controller handed the surface directly needs no event.
        let direct = visibility_controller(Some(handle.clone()), Durations::default());
        assert_eq!(direct.host_surface().get(), Some(handle));

        clear_primary_surface();
        assert!(primary_surface().is_none());
    }
}
