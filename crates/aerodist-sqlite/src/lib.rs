#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
//! SQLite wrappers for the distance functions implemented in `aerodist`.
//!
//! | SQL name      | Arity | Arguments      | Result    |
//! |---------------|-------|----------------|-----------|
//! | `levenshtein` | 2     | TEXT, TEXT     | INTEGER   |
//! | `haversine`   | 4     | REAL x 4       | REAL      |
//! | `radToDist`   | 1     | REAL           | REAL      |
//! | `distToRad`   | 1     | REAL           | REAL      |
//!
//! An argument of any other storage class, including an INTEGER where a
//! REAL is expected, makes the call return NULL rather than fail the query.
//!
//! ```
//! use rusqlite::Connection;
//!
//! let conn = Connection::open_in_memory()?;
//! aerodist_sqlite::register_functions(&conn)?;
//!
//! let d: i64 = conn.query_row("SELECT levenshtein('kitten', 'sitting')", [], |r| r.get(0))?;
//! assert_eq!(d, 3);
//!
//! let d: Option<f64> = conn.query_row("SELECT haversine(0, 0, 0, 0)", [], |r| r.get(0))?;
//! assert_eq!(d, None);
//! # Ok::<(), rusqlite::Error>(())
//! ```

pub mod args;
#[cfg(feature = "loadable_extension")]
pub mod extension;
pub(crate) mod geo;
pub(crate) mod strings;

use rusqlite::{functions::FunctionFlags, Connection};

pub use args::Arguments;

/// Name and arity of every SQL function registered by [`register_functions`].
pub const FUNCTIONS: [(&str, usize); 4] = [
    (strings::LEVENSHTEIN.0, strings::LEVENSHTEIN.1),
    (geo::HAVERSINE.0, geo::HAVERSINE.1),
    (geo::RAD_TO_DIST.0, geo::RAD_TO_DIST.1),
    (geo::DIST_TO_RAD.0, geo::DIST_TO_RAD.1),
];

/// Flags shared by all registered functions.
///
/// The functions are pure, so SQLite may factor them out of loops and use
/// them in indexes, views and triggers.
#[must_use]
pub fn flags() -> FunctionFlags {
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC | FunctionFlags::SQLITE_INNOCUOUS
}

/// Registers all functions with the given connection.
///
/// Registering again on the same connection replaces the functions with
/// identical definitions.
///
/// # Errors
///
/// If SQLite refuses to create a function, e.g. because the connection is
/// busy with a running statement.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    strings::register(conn)?;
    geo::register(conn)?;
    ftlog::debug!("Registered {} distance functions", FUNCTIONS.len());
    Ok(())
}

/// Converts an arity to the `c_int` expected by SQLite. Arities are single
/// digits.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn n_arg(arity: usize) -> i32 {
    arity as i32
}
