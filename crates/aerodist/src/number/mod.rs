//! The `UInt` trait is used to represent edit-distance values.
//!
//! We provide implementations for all primitive unsigned integers: `u8`,
//! `u16`, `u32`, `u64`, `u128` and `usize`.

mod _uint;

pub use _uint::UInt;
