//! The commands under the `aerodist` CLI.

pub mod distance;
pub mod query;

use std::path::PathBuf;

use clap::Subcommand;

/// The subcommands of the `aerodist` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Levenshtein distance between the bytes of two strings.
    Levenshtein {
        /// The first string.
        a: String,
        /// The second string.
        b: String,
    },
    /// Central angle, in radians, between two points.
    #[command(allow_negative_numbers = true)]
    Haversine {
        /// Latitude of the first point.
        lat_a: f64,
        /// Longitude of the first point.
        lon_a: f64,
        /// Latitude of the second point.
        lat_b: f64,
        /// Longitude of the second point.
        lon_b: f64,
        /// The coordinates are in degrees rather than radians.
        #[arg(short('d'), long)]
        degrees: bool,
        /// Report the distance in nautical miles rather than radians.
        #[arg(short('n'), long)]
        nautical_miles: bool,
    },
    /// Convert radians of arc to nautical miles.
    #[command(allow_negative_numbers = true)]
    RadToDist {
        /// Angular distance in radians.
        rad: f64,
    },
    /// Convert nautical miles to radians of arc.
    #[command(allow_negative_numbers = true)]
    DistToRad {
        /// Distance in nautical miles.
        dist: f64,
    },
    /// Run a SQL statement with the distance functions registered.
    Query {
        /// Path to a SQLite database. An in-memory database is used if absent.
        #[arg(short('d'), long)]
        db: Option<PathBuf>,
        /// The SQL to run.
        sql: String,
    },
}

impl Commands {
    /// Runs the command and returns what should be printed.
    ///
    /// # Errors
    ///
    /// If a `query` command fails to open the database or run the statement.
    pub fn run(self) -> Result<String, String> {
        match self {
            Self::Levenshtein { a, b } => Ok(distance::levenshtein(&a, &b)),
            Self::Haversine {
                lat_a,
                lon_a,
                lat_b,
                lon_b,
                degrees,
                nautical_miles,
            } => Ok(distance::haversine([lat_a, lon_a, lat_b, lon_b], degrees, nautical_miles)),
            Self::RadToDist { rad } => Ok(aerodist::rad_to_dist(rad).to_string()),
            Self::DistToRad { dist } => Ok(aerodist::dist_to_rad(dist).to_string()),
            Self::Query { db, sql } => query::run(db.as_deref(), &sql),
        }
    }
}
