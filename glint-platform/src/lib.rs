//! Platform services for glint overlays.
//!
//! ## Usage
//!
//! Wire the application's windowing layer to the process-global surface
//! registry, then create controllers against it.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod application;

pub use application::{
    PrimarySurfaceProvider, clear_primary_surface, primary_surface, set_primary_surface,
    surface_events, visibility_controller,
};
