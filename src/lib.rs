//! Composable byte-stream compression transforms.
//!
//! Provides a set of independent, chainable transforms over in-memory byte
//! buffers: the Burrows-Wheeler Transform, Move-To-Front recoding,
//! Run-Length-Encoding and an adaptive LZW coder, plus the variable-width
//! bit-packing stream the LZW coder is built on.
//!
//! Every transform is a pure function over whole buffers: bytes in, bytes
//! out, no state shared between calls. Callers chain any subset in any
//! order and invert by running the inverse transforms in reverse order:
//!
//! ```
//! use squeeze::{bwt, lzw, tools::{bytes, mtf}};
//!
//! let data = bytes::to_bytes("banana bandana").unwrap();
//! let rotated = bwt::forward(&data, &Default::default()).unwrap();
//! let packed = lzw::encode(&mtf::encode(&rotated), &Default::default());
//!
//! let transformed = mtf::decode(&lzw::decode(&packed, &Default::default()));
//! let round = bwt::inverse(&transformed, &Default::default()).unwrap();
//! assert_eq!(bytes::from_bytes(&round), "banana bandana");
//! ```
//!
//! No logger is installed here; the `log` facade is used throughout, so the
//! consuming program chooses where diagnostics go.
pub mod bitstream;
pub mod bwt;
pub mod error;
pub mod lzw;
pub mod tools;

pub use error::SqueezeError;
