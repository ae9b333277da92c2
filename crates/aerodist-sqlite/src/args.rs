//! Reading positional SQL arguments.
//!
//! SQLite hands scalar functions a list of dynamically typed values. The
//! helpers here accept a call only when the argument count and every
//! storage class match exactly; there is no coercion between INTEGER and
//! REAL, and BLOBs are not read as TEXT.

use rusqlite::{functions::Context, types::ValueRef};

/// Positional arguments of a scalar function call.
pub trait Arguments {
    /// The number of arguments.
    fn len(&self) -> usize;

    /// Whether the call has no arguments.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The argument at `idx`, without conversion, or `None` if `idx` is out
    /// of range.
    fn raw(&self, idx: usize) -> Option<ValueRef<'_>>;
}

impl Arguments for Context<'_> {
    fn len(&self) -> usize {
        Context::len(self)
    }

    fn raw(&self, idx: usize) -> Option<ValueRef<'_>> {
        (idx < Context::len(self)).then(|| self.get_raw(idx))
    }
}

impl<'a> Arguments for [ValueRef<'a>] {
    fn len(&self) -> usize {
        <[ValueRef<'a>]>::len(self)
    }

    fn raw(&self, idx: usize) -> Option<ValueRef<'_>> {
        self.get(idx).copied()
    }
}

/// Reads exactly `N` TEXT arguments as raw bytes.
///
/// Returns `None` if there are not exactly `N` arguments or any of them is
/// not TEXT.
pub fn texts<const N: usize, A: Arguments + ?Sized>(args: &A) -> Option<[&[u8]; N]> {
    if args.len() != N {
        return None;
    }
    let mut out = [b"".as_slice(); N];
    for (i, slot) in out.iter_mut().enumerate() {
        match args.raw(i) {
            Some(ValueRef::Text(bytes)) => *slot = bytes,
            _ => return None,
        }
    }
    Some(out)
}

/// Reads exactly `N` REAL arguments.
///
/// Returns `None` if there are not exactly `N` arguments or any of them is
/// not REAL.
pub fn reals<const N: usize, A: Arguments + ?Sized>(args: &A) -> Option<[f64; N]> {
    if args.len() != N {
        return None;
    }
    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        match args.raw(i) {
            Some(ValueRef::Real(x)) => *slot = x,
            _ => return None,
        }
    }
    Some(out)
}

/// Lists the storage classes of the arguments, for log messages.
pub fn describe<A: Arguments + ?Sized>(args: &A) -> String {
    (0..args.len())
        .filter_map(|i| args.raw(i))
        .map(|v| v.data_type().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
