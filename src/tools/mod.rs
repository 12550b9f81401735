//! The tools module holds the small, self-contained transforms of the
//! toolkit.
//!
//! The tools are:
//! - bytes: codec between Latin-1 text and byte sequences.
//! - mtf: Move-To-Front recoding and its inverse, usable as a BWT
//!   post-processing stage.
//! - rle: Run-Length-Encoding over `[value, count]` byte pairs.
//!
//! Each is pure and independent of the rest of the crate.
pub mod bytes;
pub mod mtf;
pub mod rle;
