//! Visibility state for the gradient loading-bar overlay.
//!
//! ## Usage
//!
//! Create a [`VisibilityController`], subscribe a renderer to its cells, and
//! drive it with [`show`](VisibilityController::show),
//! [`hide`](VisibilityController::hide) and
//! [`toggle`](VisibilityController::toggle).

use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use parking_lot::Mutex;
use tracing::debug;

use crate::{
    lifecycle::{SurfaceEventSource, SurfaceListenerKey},
    observable::Observable,
    surface::{SurfaceHandle, SurfaceProvider},
};

const DEFAULT_FADE_IN: Duration = Duration::from_millis(330);
const DEFAULT_FADE_OUT: Duration = Duration::from_millis(660);

/// Fade durations for the loading-bar overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Durations {
    /// Time the fade-in transition takes.
    pub fade_in: Duration,
    /// Time the fade-out transition takes.
    pub fade_out: Duration,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            fade_in: DEFAULT_FADE_IN,
            fade_out: DEFAULT_FADE_OUT,
        }
    }
}

/// One fade transition: animation duration, opacity target, and whether the
/// element counts as hidden once the transition completes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityUpdate {
    /// Duration of the opacity animation.
    pub duration: Duration,
    /// Opacity target at the end of the animation.
    pub alpha: f32,
    /// Whether the element should be treated as hidden afterwards.
    pub is_hidden: bool,
}

impl VisibilityUpdate {
    /// State before any command: instantly hidden and fully transparent.
    pub const ZERO: Self = Self {
        duration: Duration::ZERO,
        alpha: 0.0,
        is_hidden: true,
    };
}

/// Decides when the loading bar fades in or out and publishes the resulting
/// animation parameters plus the host surface to attach to.
///
/// Rendering, view-hierarchy insertion and animation execution belong to
/// subscribers; the controller only publishes state. A renderer subscribes to
/// [`visibility`](VisibilityController::visibility) to run each fade, and to
/// [`host_surface`](VisibilityController::host_surface) to attach its element
/// once a surface is known.
pub struct VisibilityController {
    visibility: Observable<VisibilityUpdate>,
    host_surface: Observable<Option<SurfaceHandle>>,
    durations: Durations,
    provider: Arc<dyn SurfaceProvider>,
    events: Arc<dyn SurfaceEventSource>,
    listener: Mutex<Option<SurfaceListenerKey>>,
}

impl VisibilityController {
    /// Creates a controller.
    ///
    /// With an `initial_surface` it is published immediately and no event
    /// registration is made. Without one (the usual case when the bar is set
    /// up during application startup, before the first surface exists) the
    /// controller registers on `events` and publishes the surface reported by
    /// `provider` once the availability event fires.
    pub fn new(
        initial_surface: Option<SurfaceHandle>,
        durations: Durations,
        provider: Arc<dyn SurfaceProvider>,
        events: Arc<dyn SurfaceEventSource>,
    ) -> Arc<Self> {
        let controller = Arc::new(Self {
            visibility: Observable::new(VisibilityUpdate::ZERO),
            host_surface: Observable::new(None),
            durations,
            provider,
            events,
            listener: Mutex::new(None),
        });

        match initial_surface {
            Some(surface) => controller.host_surface.set(Some(surface)),
            None => {
                let weak = Arc::downgrade(&controller);
                let key = controller
                    .events
                    .subscribe(Arc::new(move || Self::handle_surface_available(&weak)));
                *controller.listener.lock() = Some(key);
            }
        }

        controller
    }

    /// The current fade transition. Holds [`VisibilityUpdate::ZERO`] until
    /// the first command.
    pub fn visibility(&self) -> &Observable<VisibilityUpdate> {
        &self.visibility
    }

    /// The surface the bar should attach to, once one is known.
    pub fn host_surface(&self) -> &Observable<Option<SurfaceHandle>> {
        &self.host_surface
    }

    /// The fade durations this controller publishes.
    pub fn durations(&self) -> Durations {
        self.durations
    }

    /// Fades the loading bar in.
    pub fn show(&self) {
        self.visibility.set(VisibilityUpdate {
            duration: self.durations.fade_in,
            alpha: 1.0,
            is_hidden: false,
        });
    }

    /// Fades the loading bar out.
    pub fn hide(&self) {
        self.visibility.set(VisibilityUpdate {
            duration: self.durations.fade_out,
            alpha: 0.0,
            is_hidden: true,
        });
    }

    /// Shows the bar when it is hidden, hides it otherwise.
    pub fn toggle(&self) {
        if self.visibility.with(|update| update.is_hidden) {
            self.show();
        } else {
            self.hide();
        }
    }

    fn handle_surface_available(weak: &Weak<Self>) {
        if let Some(controller) = weak.upgrade() {
            controller.on_surface_available();
        }
    }

    fn on_surface_available(&self) {
        let Some(surface) = self.provider.primary_surface() else {
            // The availability event can outrun the query during startup.
            // No retry here: a later event goes through the same path.
            debug!("surface availability fired before a primary surface exists");
            return;
        };

        // Deregister before publishing so a double-delivered event cannot
        // inform subscribers twice.
        self.release_listener();
        self.host_surface.set(Some(surface));
    }

    fn release_listener(&self) {
        if let Some(key) = self.listener.lock().take() {
            self.events.unsubscribe(key);
        }
    }
}

impl Drop for VisibilityController {
    fn drop(&mut self) {
        self.release_listener();
    }
}
