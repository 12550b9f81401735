use thiserror::Error;

/// Failure kinds for the transform toolkit. All are detected synchronously
/// inside a single transform call; none are recoverable mid-call. The
/// caller must discard the partial result and retry with corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqueezeError {
    /// Byte-codec input contained a character outside the 0-255 range.
    #[error("bad character code ({code_point}) at position {position}")]
    InvalidCharacter { position: usize, code_point: u32 },

    /// RLE decode was handed an odd-length sequence.
    #[error("odd data length ({0}) passed to RLE decode")]
    MalformedInput(usize),

    /// BWT forward found the chosen sentinel already present in the input.
    #[error("marker byte {mark} detected in input at position {position}")]
    MarkerCollision { mark: u8, position: usize },

    /// BWT inverse found no sentinel in the input.
    #[error("marker byte {0} not detected in input")]
    MarkerNotFound(u8),

    /// BWT inverse found the sentinel more than once.
    #[error("multiple marker bytes ({mark}) in input")]
    MultipleMarkers { mark: u8 },
}
