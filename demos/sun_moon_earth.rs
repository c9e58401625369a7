//! Sun–Moon–Earth shadow demo.
//!
//! Builds a total-eclipse alignment, runs the shadow engine, prints the summary and writes the
//! boundary grid to CSV.
//!
//! ```text
//! cargo run --example sun_moon_earth -- [output.csv] [log level] [moon-earth distance km]
//! ```
use std::error::Error;

use nalgebra::Vector3;
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use umbra::constants::{EARTH_RADIUS_KM, MOON_RADIUS_KM, SUN_RADIUS_KM};
use umbra::screen_coords::screen_coordinates;
use umbra::{Body, ShadowCategory, ShadowEngine, ShadowParams, ShadowResult};

/// One CSV row per grid cell.
#[derive(Serialize)]
struct GridRow {
    eclipsee_idx: usize,
    eclipser_idx: usize,
    x_km: Option<f64>,
    y_km: Option<f64>,
    z_km: Option<f64>,
    angular_offset_rad: Option<f64>,
    category: String,
    code: u8,
}

fn write_grid(path: &str, result: &ShadowResult) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    for ((eclipsee_idx, eclipser_idx), intercept) in result.boundary_grid.iter_indexed() {
        writer.serialize(GridRow {
            eclipsee_idx,
            eclipser_idx,
            x_km: intercept.position.map(|p| p.x),
            y_km: intercept.position.map(|p| p.y),
            z_km: intercept.position.map(|p| p.z),
            angular_offset_rad: intercept.angular_offset,
            category: intercept.category.to_string(),
            code: intercept.category.code(),
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "shadow_grid.csv".to_string());
    let log_level = match args.next().unwrap_or_default().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let moon_earth: f64 = match args.next() {
        Some(v) => v.parse()?,
        None => 359_800.0,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // bodies aligned along +x, Sun kept off the frame origin
    let sun_pos = Vector3::new(0.0, 1.0e6, 0.0);
    let earth_pos = sun_pos + Vector3::new(1.4975e8, 0.0, 0.0);
    let moon_pos = earth_pos - Vector3::new(moon_earth, 0.0, 0.0);

    let sun = Body::new(sun_pos, SUN_RADIUS_KM)?;
    let moon = Body::new(moon_pos, MOON_RADIUS_KM)?;
    let earth = Body::new(earth_pos, EARTH_RADIUS_KM)?;

    let engine = ShadowEngine::new(ShadowParams::builder().step_degrees(10.0).build()?);
    let result = engine.compute(&sun, &moon, &earth)?;

    let s = &result.summary;
    println!(
        "rays: {}  hits: {}  penumbra: {}  umbra: {}  antumbra: {}  unclassified: {}",
        result.boundary_grid.len(),
        s.hits,
        s.penumbra,
        s.umbra,
        s.antumbra,
        s.unclassified
    );
    println!(
        "umbra radius at the Earth's distance: {:.1} km (antumbra: {})",
        result.cone.shadow_radius, result.cone.antumbra
    );

    match result.center_intercept.position {
        Some(center) => {
            let coords = screen_coordinates(&center, &earth);
            println!(
                "shadow center: {} at lon {:.3}°, lat {:.3}° (frame axes)",
                result.center_intercept.category,
                coords.longitude_deg(),
                coords.latitude_deg()
            );
            for category in [ShadowCategory::Umbra, ShadowCategory::Penumbra] {
                if let Some(extent) = result.footprint_extent(category) {
                    println!("{category} footprint: {extent:.1} km from the center");
                }
            }
        }
        None => println!("the centerline misses the Earth: no eclipse"),
    }

    write_grid(&output, &result)?;
    info!(path = %output, "boundary grid written");

    Ok(())
}
