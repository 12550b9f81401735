//! Run-Length-Encoding over `[value, count]` byte pairs.
//!
//! A run closes when the next byte differs or the count hits 255 (the
//! count is itself a single byte), so longer runs split into several
//! pairs. Worth using only on run-heavy data such as MTF output.

use crate::error::SqueezeError;

/// Encode runs of identical bytes as flattened `[value, count]` pairs.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    if input.is_empty() {
        return output;
    }

    let mut count: u8 = 1;
    for i in 0..input.len() - 1 {
        if input[i] != input[i + 1] || count == 255 {
            output.push(input[i]);
            output.push(count);
            count = 0;
        }
        count += 1;
    }
    output.push(input[input.len() - 1]);
    output.push(count);

    output
}

/// Expand `[value, count]` pairs back into the original run. Fails on an
/// odd-length input.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, SqueezeError> {
    if input.len() % 2 != 0 {
        return Err(SqueezeError::MalformedInput(input.len()));
    }

    let mut output = Vec::new();
    for pair in input.chunks_exact(2) {
        let (value, count) = (pair[0], pair[1]);
        output.extend(std::iter::repeat(value).take(count as usize));
    }
    Ok(output)
}

#[cfg(test)]
mod test {
    use super::{decode, encode};
    use crate::error::SqueezeError;

    #[test]
    fn two_runs_encode_to_two_pairs() {
        assert_eq!(encode(&[5, 5, 5, 7, 7]), vec![5, 3, 7, 2]);
        assert_eq!(decode(&[5, 3, 7, 2]).unwrap(), vec![5, 5, 5, 7, 7]);
    }

    #[test]
    fn run_of_255_is_one_pair() {
        assert_eq!(encode(&[9u8; 255]), vec![9, 255]);
    }

    #[test]
    fn run_of_256_splits() {
        let encoded = encode(&[9u8; 256]);
        assert_eq!(encoded, vec![9, 255, 9, 1]);
        assert_eq!(decode(&encoded).unwrap(), vec![9u8; 256]);
    }

    #[test]
    fn long_run_round_trips() {
        let input = vec![7u8; 1000];
        assert_eq!(decode(&encode(&input)).unwrap(), input);
    }

    #[test]
    fn single_byte() {
        assert_eq!(encode(&[42]), vec![42, 1]);
    }

    #[test]
    fn no_runs_doubles_the_data() {
        assert_eq!(encode(&[1, 2, 3]), vec![1, 1, 2, 1, 3, 1]);
    }

    #[test]
    fn empty_input_both_ways() {
        assert_eq!(encode(&[]), Vec::<u8>::new());
        assert_eq!(decode(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn odd_length_decode_is_malformed() {
        assert_eq!(decode(&[5, 3, 7]), Err(SqueezeError::MalformedInput(3)));
    }

    #[test]
    fn zero_count_pair_expands_to_nothing() {
        // Never produced by encode(), but decode treats it as an empty run.
        assert_eq!(decode(&[5, 0]).unwrap(), Vec::<u8>::new());
    }
}
