//! The Burrows-Wheeler Transform and its exact inverse.
//!
//! The forward transform sorts all cyclic rotations of the block and emits
//! the last column of the sorted rotation matrix, with a reserved sentinel
//! byte spliced in at the sorted position of the original rotation. Storing
//! the sentinel in-band is what lets the inverse run without a separately
//! transmitted sort index; the price is one reserved byte value, which must
//! not occur in the input.
//!
//! BWT does not compress anything itself. It clusters equal bytes, which is
//! what makes a following MTF + RLE stage effective.
pub mod rotation_sort;

use log::debug;

use crate::error::SqueezeError;
use rotation_sort::sort_rotations;

/// Options for both directions of the transform.
#[derive(Debug, Clone, Copy)]
pub struct BwtOptions {
    /// Sentinel byte value. Must be absent from the forward input.
    pub mark: u8,
}

impl Default for BwtOptions {
    fn default() -> Self {
        Self { mark: 0 }
    }
}

/// Forward transform. Output is one byte longer than the input: the last
/// column of the sorted rotation matrix with the sentinel spliced in at the
/// original rotation's sorted position. Fails with MarkerCollision if the
/// sentinel already occurs in the input.
pub fn forward(input: &[u8], options: &BwtOptions) -> Result<Vec<u8>, SqueezeError> {
    if let Some(position) = input.iter().position(|&b| b == options.mark) {
        return Err(SqueezeError::MarkerCollision {
            mark: options.mark,
            position,
        });
    }
    let length = input.len();
    if length == 0 {
        return Ok(vec![options.mark]);
    }

    debug!("bwt: sorting {} rotations", length);
    let indexes = sort_rotations(input);

    // Last column: the byte preceding each rotation's start, wrapping. The
    // identity rotation (start index 0) wraps to the final input byte, and
    // its sorted position is where the sentinel gets spliced in.
    let mut result = Vec::with_capacity(length + 1);
    let mut insert_at = 0;
    for (i, &index) in indexes.iter().enumerate() {
        if index == 0 {
            insert_at = i;
            result.push(input[length - 1]);
        } else {
            result.push(input[index - 1]);
        }
    }
    result.insert(insert_at, options.mark);

    Ok(result)
}

/// Inverse transform via the standard LF-mapping. Fails with MarkerNotFound
/// or MultipleMarkers when the sentinel count is not exactly one.
pub fn inverse(input: &[u8], options: &BwtOptions) -> Result<Vec<u8>, SqueezeError> {
    let mut marker_at = None;
    let mut numbers = Vec::with_capacity(input.len().saturating_sub(1));
    for (i, &num) in input.iter().enumerate() {
        if num == options.mark {
            if marker_at.is_some() {
                return Err(SqueezeError::MultipleMarkers { mark: options.mark });
            }
            marker_at = Some(i);
        } else {
            numbers.push(num);
        }
    }
    let marker_at = marker_at.ok_or(SqueezeError::MarkerNotFound(options.mark))?;
    let length = numbers.len();

    // P[i] counts earlier occurrences of numbers[i]'s value; C starts as a
    // frequency table and becomes, per value, the count of strictly smaller
    // values. P[i] + C[v] is then the rank of that occurrence in sorted
    // order, which is exactly the LF step.
    let mut p = vec![0usize; length];
    let mut c = [0usize; 256];
    for (i, &num) in numbers.iter().enumerate() {
        p[i] = c[num as usize];
        c[num as usize] += 1;
    }
    let mut sum = 0;
    for count in c.iter_mut() {
        sum += *count;
        *count = sum - *count;
    }

    // Walk the LF chain from the marker position, filling right to left. A
    // sentinel in the final slot cannot come from forward(); wrap rather
    // than index out of range on such input.
    let mut i = if marker_at < length { marker_at } else { 0 };
    let mut output = vec![0u8; length];
    for j in (0..length).rev() {
        let num = numbers[i];
        output[j] = num;
        i = p[i] + c[num as usize];
    }

    Ok(output)
}
