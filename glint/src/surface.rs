//! Host surface handles and queries.
//!
//! ## Usage
//!
//! Pass a [`SurfaceHandle`] for the surface an overlay should attach to, and
//! implement [`SurfaceProvider`] for whatever owns the application's primary
//! surface.

use std::{
    any::Any,
    fmt, ptr,
    sync::{Arc, Weak},
};

/// Opaque handle to the UI surface an overlay attaches to.
///
/// The handle observes the surface without owning it: cloning and storing a
/// handle never extends the surface's lifetime, and [`upgrade`](SurfaceHandle::upgrade)
/// returns `None` once the surface is gone. Equality is allocation identity.
#[derive(Clone)]
pub struct SurfaceHandle {
    inner: Weak<dyn Any + Send + Sync>,
}

impl SurfaceHandle {
    /// Creates a handle observing `surface`.
    pub fn new<S>(surface: &Arc<S>) -> Self
    where
        S: Any + Send + Sync,
    {
        let strong: Arc<dyn Any + Send + Sync> = surface.clone();
        Self {
            inner: Arc::downgrade(&strong),
        }
    }

    /// Returns a strong reference to the surface while it is still alive.
    pub fn upgrade(&self) -> Option<Arc<dyn Any + Send + Sync>> {
        self.inner.upgrade()
    }

    /// Returns whether the underlying surface is still alive.
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl PartialEq for SurfaceHandle {
    fn eq(&self, other: &Self) -> bool {
        ptr::addr_eq(self.inner.as_ptr(), other.inner.as_ptr())
    }
}

impl Eq for SurfaceHandle {}

impl fmt::Debug for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Query for the application's current primary surface.
///
/// The trait seam exists so hosts plug in their windowing layer and tests
/// substitute a scripted provider.
pub trait SurfaceProvider: Send + Sync {
    /// Returns the current primary surface, or `None` before one exists.
    fn primary_surface(&self) -> Option<SurfaceHandle>;
}
