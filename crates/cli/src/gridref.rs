//! gridref - Resolve national grid references and look up grid squares
//!
//! Prints the centre (and optionally the bounds) of grid references, lists
//! the centre of every square or sub-square, and reports which squares and
//! sub-squares overlap a rectangle given in easting/northing.

use std::collections::BTreeMap;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use natgrid_core::geometry::{Bounds, Point};
use natgrid_core::gridref::{self, GridRef};
use natgrid_core::index::SpatialIndex;
use natgrid_core::location::{EastNorth, LonLat, Location, Normalizer};
use natgrid_core::resolve;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Resolve national grid references and look up grid squares.
#[derive(Parser, Debug)]
#[command(name = "gridref")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Use debug logging level
    #[arg(short = 'd', long, global = true, action = ArgAction::SetTrue)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the centre of each grid reference
    Resolve {
        /// One or more grid references, e.g. SD or SD91NW
        #[arg(required = true)]
        refs: Vec<String>,

        /// Also print the cell bounds (xmin xmax ymin ymax)
        #[arg(short = 'b', long, action = ArgAction::SetTrue)]
        bounds: bool,

        /// Print a JSON array instead of text lines
        #[arg(short = 'j', long, action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Print the centre of every square, in alphabetical order
    Squares {
        /// List every sub-square instead of every square
        #[arg(short = 's', long = "sub-squares", action = ArgAction::SetTrue)]
        sub_squares: bool,
    },

    /// Print the squares and sub-squares that overlap a region as JSON
    Query {
        #[arg(allow_negative_numbers = true)]
        xmin: f64,
        #[arg(allow_negative_numbers = true)]
        ymin: f64,
        #[arg(allow_negative_numbers = true)]
        xmax: f64,
        #[arg(allow_negative_numbers = true)]
        ymax: f64,
    },

    /// Normalize a location to easting/northing
    Normalize {
        /// Grid reference
        #[arg(long, conflicts_with_all = ["east", "north", "lon", "lat"])]
        grid: Option<String>,

        /// Easting
        #[arg(long, requires = "north", allow_negative_numbers = true)]
        east: Option<f64>,

        /// Northing
        #[arg(long, requires = "east", allow_negative_numbers = true)]
        north: Option<f64>,

        /// Longitude
        #[arg(
            long,
            requires = "lat",
            conflicts_with_all = ["east", "north"],
            allow_negative_numbers = true
        )]
        lon: Option<f64>,

        /// Latitude
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
    },
}

#[derive(Serialize)]
struct ResolvedRow<'a> {
    reference: &'a str,
    east: f64,
    north: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<[f64; 4]>,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_resolved<W: Write>(out: &mut W, refs: &[String], bounds: bool, json: bool) -> Result<()> {
    let mut rows = Vec::with_capacity(refs.len());
    for text in refs {
        let parsed =
            gridref::parse(text).with_context(|| format!("invalid grid reference {text}"))?;
        let cell = resolve::resolve(&parsed).with_context(|| format!("cannot resolve {text}"))?;
        let b = cell.bounds;
        rows.push(ResolvedRow {
            reference: text,
            east: cell.center.0,
            north: cell.center.1,
            bounds: bounds.then_some([b.xmin, b.xmax, b.ymin, b.ymax]),
        });
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    for row in rows {
        write!(out, "{} [{}, {}]", row.reference, row.east, row.north)?;
        if let Some([xmin, xmax, ymin, ymax]) = row.bounds {
            write!(out, " {xmin} {xmax} {ymin} {ymax}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_centres<W: Write>(out: &mut W, sub_squares: bool) -> Result<()> {
    let centres: Box<dyn Iterator<Item = (GridRef, Point)>> = if sub_squares {
        Box::new(resolve::sub_square_centres())
    } else {
        Box::new(resolve::square_centres())
    };
    for (gridref, (east, north)) in centres {
        writeln!(out, "{gridref} [{east}, {north}]")?;
    }
    Ok(())
}

fn write_query<W: Write>(out: &mut W, region: Bounds) -> Result<()> {
    let hits = SpatialIndex::global().query(&region);
    debug!(squares = hits.len(), "query complete");
    let hits: BTreeMap<&str, &Vec<u8>> = hits.iter().map(|(k, v)| (k.as_str(), v)).collect();
    serde_json::to_writer(&mut *out, &hits)?;
    writeln!(out)?;
    Ok(())
}

fn location_from_args(
    grid: Option<String>,
    east: Option<f64>,
    north: Option<f64>,
    lon: Option<f64>,
    lat: Option<f64>,
) -> Result<Location> {
    match (grid, east, north, lon, lat) {
        (Some(text), ..) => Ok(Location::GridRef(text)),
        (None, Some(east), Some(north), ..) => Ok(Location::Projected(EastNorth { east, north })),
        (None, None, None, Some(lon), Some(lat)) => Ok(Location::Ellipsoidal(LonLat { lon, lat })),
        _ => bail!("one of --grid, --east/--north or --lon/--lat is required"),
    }
}

fn run<W: Write>(command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Resolve { refs, bounds, json } => write_resolved(out, &refs, bounds, json),
        Command::Squares { sub_squares } => write_centres(out, sub_squares),
        Command::Query {
            xmin,
            ymin,
            xmax,
            ymax,
        } => write_query(out, Bounds::new(xmin, xmax, ymin, ymax)),
        Command::Normalize {
            grid,
            east,
            north,
            lon,
            lat,
        } => {
            let location = location_from_args(grid, east, north, lon, lat)?;
            let en = Normalizer::default()
                .to_east_north(&location)
                .with_context(|| format!("cannot normalize {} location", location.kind()))?;
            writeln!(out, "{en}")?;
            Ok(())
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    let mut output = BufWriter::new(io::stdout());
    let result = run(args.command, &mut output).and_then(|()| output.flush().map_err(Into::into));
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
