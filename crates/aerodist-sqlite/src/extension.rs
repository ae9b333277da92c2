//! Entry point for loading the functions into a running SQLite process.
//!
//! ```sql
//! SELECT load_extension('target/release/libaerodist_sqlite');
//! SELECT radToDist(haversine(0.8983, -0.0079, 0.7093, -1.2877));
//! ```

use std::os::raw::{c_char, c_int};

use rusqlite::{ffi, Connection};

/// Called by SQLite when the shared library is loaded.
///
/// # Safety
///
/// Must only be called by SQLite's extension loader, which passes a valid
/// database handle, error-message slot and API routine table.
#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[no_mangle]
pub unsafe extern "C" fn sqlite3_extension_init(
    db: *mut ffi::sqlite3,
    pz_err_msg: *mut *mut c_char,
    p_api: *mut ffi::sqlite3_api_routines,
) -> c_int {
    Connection::extension_init2(db, pz_err_msg, p_api, init)
}

/// Registers the functions on the loading connection. The functions live
/// only as long as that connection, so the extension is not persistent.
fn init(db: Connection) -> rusqlite::Result<bool> {
    crate::register_functions(&db)?;
    ftlog::info!("Loaded {} distance functions", crate::FUNCTIONS.len());
    Ok(false)
}
