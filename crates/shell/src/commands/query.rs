//! Running SQL with the distance functions registered.

use std::path::Path;

use rusqlite::{types::ValueRef, Connection};

/// Opens `db` (or an in-memory database), registers the distance functions
/// and runs `sql`, returning one tab-separated line per row.
///
/// # Errors
///
/// - If the database could not be opened.
/// - If the functions could not be registered.
/// - If the statement could not be prepared or executed.
pub fn run(db: Option<&Path>, sql: &str) -> Result<String, String> {
    let conn = match db {
        Some(path) => {
            ftlog::info!("Opening database {path:?}...");
            Connection::open(path)
        }
        None => Connection::open_in_memory(),
    }
    .map_err(|e| e.to_string())?;
    aerodist_sqlite::register_functions(&conn).map_err(|e| e.to_string())?;

    let mut stmt = conn.prepare(sql).map_err(|e| e.to_string())?;
    let n_columns = stmt.column_count();
    let mut rows = stmt.query([]).map_err(|e| e.to_string())?;

    let mut lines = Vec::new();
    while let Some(row) = rows.next().map_err(|e| e.to_string())? {
        let fields = (0..n_columns)
            .map(|i| row.get_ref(i).map(render))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;
        lines.push(fields.join("\t"));
    }
    ftlog::debug!("Query returned {} rows", lines.len());

    Ok(lines.join("\n"))
}

/// Renders a single SQLite value as text.
#[must_use]
pub fn render(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => r.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => {
            let hex = b.iter().map(|byte| format!("{byte:02X}")).collect::<String>();
            format!("X'{hex}'")
        }
    }
}
