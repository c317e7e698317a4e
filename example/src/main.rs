//! Demo wiring a fake renderer to a visibility controller.

use std::{sync::Arc, time::Duration};

use tracing::info;
use tracing_subscriber::EnvFilter;

use glint::{Durations, SurfaceHandle};

struct DemoWindow {
    name: &'static str,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let durations = Durations {
        fade_in: Duration::from_millis(300),
        fade_out: Duration::from_millis(200),
    };

    // Set up the bar before any window exists, as an application delegate
    // would during startup.
    let controller = glint_platform::visibility_controller(None, durations);

    // Stand-in for the rendering collaborator: it would animate opacity to
    // `alpha` over `duration`, then apply `is_hidden` once the animation
    // completes.
    controller.visibility().subscribe(|update| {
        info!(
            "animate gradient bar to alpha {:.1} over {:?} (hidden afterwards: {})",
            update.alpha, update.duration, update.is_hidden
        );
    });

    // ...and attach its element once a host surface is known.
    controller.host_surface().subscribe(|surface| {
        let Some(surface) = surface else { return };
        let Some(window) = surface.upgrade() else { return };
        let name = window
            .downcast_ref::<DemoWindow>()
            .map(|window| window.name)
            .unwrap_or("<unknown>");
        info!("attach gradient bar to {name}");
    });

    let window = Arc::new(DemoWindow {
        name: "main-window",
    });
    glint_platform::set_primary_surface(SurfaceHandle::new(&window));

    controller.show();
    controller.toggle();
    controller.toggle();
    controller.hide();
}
