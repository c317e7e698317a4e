//! Visibility state controller for gradient loading-bar overlays.
//!
//! ## Usage
//!
//! Create a [`VisibilityController`], subscribe a renderer to its two
//! observable cells, and drive it with [`show`](VisibilityController::show),
//! [`hide`](VisibilityController::hide) and
//! [`toggle`](VisibilityController::toggle). The controller decides *when* a
//! fade should run and with which parameters; drawing the gradient and
//! executing the animation stay with the subscriber.
//!
//! ```
//! use std::sync::Arc;
//!
//! use glint::{
//!     Durations, SurfaceEventHub, SurfaceHandle, SurfaceProvider, VisibilityController,
//! };
//!
//! struct NoSurface;
//!
//! impl SurfaceProvider for NoSurface {
//!     fn primary_surface(&self) -> Option<SurfaceHandle> {
//!         None
//!     }
//! }
//!
//! let window = Arc::new("main-window");
//! let controller = VisibilityController::new(
//!     Some(SurfaceHandle::new(&window)),
//!     Durations::default(),
//!     Arc::new(NoSurface),
//!     Arc::new(SurfaceEventHub::new()),
//! );
//!
//! controller.visibility().subscribe(|update| {
//!     // Animate opacity to `update.alpha` over `update.duration`, then
//!     // apply `update.is_hidden`.
//! });
//!
//! controller.show();
//! assert!(!controller.visibility().get().is_hidden);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod lifecycle;
pub mod observable;
pub mod surface;
pub mod visibility;

pub use lifecycle::{SurfaceEventHub, SurfaceEventSource, SurfaceListener, SurfaceListenerKey};
pub use observable::{Observable, SubscriptionKey};
pub use surface::{SurfaceHandle, SurfaceProvider};
pub use visibility::{Durations, VisibilityController, VisibilityUpdate};
