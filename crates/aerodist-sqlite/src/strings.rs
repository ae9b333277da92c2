//! SQL wrapper for the string distance.

use rusqlite::Connection;

use crate::args::{self, Arguments};

/// Name and arity of the Levenshtein distance function.
pub const LEVENSHTEIN: (&str, usize) = ("levenshtein", 2);

/// Register the string functions with the connection.
pub fn register(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(LEVENSHTEIN.0, crate::n_arg(LEVENSHTEIN.1), crate::flags(), |ctx| levenshtein(ctx))
}

/// `levenshtein(TEXT, TEXT) -> INTEGER`, comparing the raw bytes of both
/// arguments. NULL unless both arguments are TEXT.
pub fn levenshtein<A: Arguments + ?Sized>(args: &A) -> rusqlite::Result<Option<i64>> {
    let Some([a, b]) = args::texts::<2, _>(args) else {
        ftlog::debug!("{}: expected (Text, Text), got ({})", LEVENSHTEIN.0, args::describe(args));
        return Ok(None);
    };
    let distance = aerodist::levenshtein::<u64>(a, b);
    i64::try_from(distance)
        .map(Some)
        .map_err(|e| rusqlite::Error::UserFunctionError(Box::new(e)))
}
