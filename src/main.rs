use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use geodist::GeoPoint;

#[derive(Parser, Debug)]
#[command(name = "geodist")]
#[command(about = "Great-circle distance between two lat/lon points, and radius checks.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the haversine distance in meters
    Distance {
        /// Start point as "lat,lon" in degrees
        #[arg(short, long, allow_hyphen_values = true)]
        from: GeoPoint,

        /// End point as "lat,lon" in degrees
        #[arg(short, long, allow_hyphen_values = true)]
        to: GeoPoint,
    },
    /// Print whether `to` lies within `radius` meters of `from` (inclusive)
    Within {
        #[arg(short, long, allow_hyphen_values = true)]
        from: GeoPoint,

        #[arg(short, long, allow_hyphen_values = true)]
        to: GeoPoint,

        /// Radius in meters
        #[arg(short, long)]
        radius: f64,
    },
}

fn main() -> Result<()> {
    geodist::init_logging();
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    match cli.command {
        Command::Distance { from, to } => {
            println!("{:.2}", from.distance_to(&to));
        }
        Command::Within { from, to, radius } => {
            let radius = geodist::validate_radius(radius)?;
            let distance = from.distance_to(&to);
            debug!(distance, radius, "radius check");
            println!("{}", from.is_within_radius(&to, radius));
        }
    }

    Ok(())
}
