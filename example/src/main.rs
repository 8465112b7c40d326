//! Prints the shadow layers resolved for a sweep of elevations.
//!
//! Set `RUST_LOG=tessera_elevation=trace` to see how each elevation is
//! bracketed and blended.

use tessera_elevation::{ElevationError, ElevationTable};
use tessera_shadow::{Color, Shadow, ShadowColors};

const SWEEP: [f32; 10] = [0.0, 0.5, 1.0, 5.0, 7.0, 8.5, 24.0, 60.0, 100.0, 250.0];

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,tessera_elevation=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn describe(shadow: &Shadow) -> String {
    format!(
        "offset=({:.2}, {:.2}) blur={:.2} spread={:.2} rgba=({:.2}, {:.2}, {:.2}, {:.3})",
        shadow.offset.x,
        shadow.offset.y,
        shadow.blur_radius,
        shadow.spread_radius,
        shadow.color.r,
        shadow.color.g,
        shadow.color.b,
        shadow.color.a,
    )
}

fn main() -> Result<(), ElevationError> {
    init_tracing();

    let table = ElevationTable::material_shared();
    let tint = Color::from_rgb(0.4039, 0.3137, 0.6431);

    for elevation in SWEEP {
        println!("elevation {elevation}");
        for shadow in table.as_shadows(elevation, ShadowColors::None, true)? {
            println!("  {}", describe(&shadow));
        }

        let decoration = table.as_decoration(elevation, tint, true)?;
        tracing::info!(
            elevation,
            paints_nothing = decoration.paints_nothing(),
            "Tinted decoration resolved"
        );

        for shadow in table.as_materialized_shadows(elevation, Some(tint))? {
            println!("  materialized {}", describe(&shadow));
        }
    }

    Ok(())
}
