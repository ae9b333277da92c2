//! Unsigned integer output types for edit distances.

use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Unsigned integers in which an edit distance may be reported.
pub trait UInt: Copy + Default + Debug + Display + Hash + Eq + Ord + Send + Sync {
    /// The maximum possible value.
    const MAX: Self;

    /// Converts a `usize` to `Self`, saturating at [`UInt::MAX`].
    fn from_usize(n: usize) -> Self;
}

/// Macro to implement `UInt` for all unsigned integer types.
macro_rules! impl_uint {
    ($($ty:ty),*) => {
        $(
            impl UInt for $ty {
                const MAX: Self = <$ty>::MAX;

                fn from_usize(n: usize) -> Self {
                    Self::try_from(n).unwrap_or(Self::MAX)
                }
            }
        )*
    }
}

impl_uint!(u8, u16, u32, u64, u128, usize);
