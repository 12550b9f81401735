//! The bitstream module is the packing layer under the adaptive LZW coder.
//!
//! Codes are packed LSB-first into consecutive bit positions, crossing byte
//! boundaries without padding, with a code width that the owner may change
//! between codes. The writer and reader are separate types because their
//! invariants differ: the writer owns a growing buffer and a bit queue, the
//! reader owns a finished buffer and a cursor.
//!
//! Width changes carry no in-band marker. The producer and consumer must
//! switch widths at the same code counts or the stream silently
//! desynchronizes; that contract is enforced by the LZW coder, not here.
pub mod bitreader;
pub mod bitwriter;

pub use bitreader::BitReader;
pub use bitwriter::BitWriter;
