use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod batch;
pub mod dates;
pub mod geo;
pub mod platform;
pub mod text;

pub use geo::{
    calculate_distance, degrees_to_radians, is_within_radius, validate_radius, GeoError, GeoPoint,
};

/// Logs go to stderr so stdout stays clean for results. `RUST_LOG` overrides
/// the default `warn` level.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
