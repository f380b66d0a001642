use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use clap::Parser;

use geodist::batch::{self, BatchOptions};
use geodist::GeoPoint;

#[derive(Parser, Debug)]
#[command(name = "geodist-csv")]
#[command(about = "Rank the points of an id,lat,lon CSV by distance from an origin.", long_about = None)]
struct Cli {
    /// Path to the .csv file (header: id,lat,lon)
    #[arg(short, long)]
    csv: String,

    /// Origin as "lat,lon" in degrees
    #[arg(long, allow_hyphen_values = true)]
    origin: GeoPoint,

    /// Keep only points within this many meters of the origin
    #[arg(short, long)]
    radius: Option<f64>,

    /// Output CSV (id, distance_m, within). If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<String>,

    /// Write points outside the radius too
    #[arg(long, default_value_t = false)]
    include_outside: bool,
}

fn main() -> Result<()> {
    geodist::init_logging();
    let cli = Cli::parse();

    let radius = cli.radius.map(geodist::validate_radius).transpose()?;

    let options = BatchOptions {
        origin: cli.origin,
        radius,
        include_outside: cli.include_outside,
    };

    let input = File::open(&cli.csv).with_context(|| format!("opening {}", &cli.csv))?;

    match cli.out {
        Some(out_path) => {
            let output =
                File::create(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
            let summary = batch::run(input, Some(BufWriter::new(output)), &options)
                .with_context(|| format!("processing {}", &cli.csv))?;
            println!(
                "Wrote distances for {} of {} points to {}",
                summary.written, summary.points, out_path
            );
        }
        None => {
            let summary = batch::run(input, None::<std::io::Sink>, &options)
                .with_context(|| format!("processing {}", &cli.csv))?;
            println!("Points: {}", summary.points);
            if let Some(radius) = options.radius {
                println!("Within {} m of {}: {}", radius, options.origin, summary.within);
            }
            if let Some(maxd) = summary.max_distance {
                println!("Max distance (m): {:.2}", maxd);
            }
        }
    }

    Ok(())
}
