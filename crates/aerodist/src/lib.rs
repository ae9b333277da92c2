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
#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod geo;
pub mod number;
pub mod strings;
pub mod units;

pub use geo::{central_angle, Coordinate};
pub use number::UInt;
pub use strings::levenshtein;
pub use units::{dist_to_rad, rad_to_dist};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
