//! Move-To-Front recoding over the full 256-value alphabet.
//!
//! The symbol table starts in identity order and stays a permutation of
//! 0..=255 throughout: each step looks a value up, emits its position and
//! splices it to the front. Recently seen values therefore encode to small
//! indexes, which is what makes MTF useful directly after a BWT pass.

/// Encode into a fresh buffer of the same length.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut output = input.to_vec();
    encode_in_place(&mut output);
    output
}

/// Encode, overwriting `data`. Identical output to encode(); reusing the
/// buffer is the only difference.
pub fn encode_in_place(data: &mut [u8]) {
    let mut table = identity_table();
    for byte in data.iter_mut() {
        let value = *byte;
        // The table always holds all 256 values, so the lookup cannot miss.
        let index = table.iter().position(|&v| v == value).unwrap();
        *byte = index as u8;
        table[..=index].rotate_right(1);
    }
}

/// Decode into a fresh buffer of the same length.
pub fn decode(input: &[u8]) -> Vec<u8> {
    let mut output = input.to_vec();
    decode_in_place(&mut output);
    output
}

/// Decode, overwriting `data`.
pub fn decode_in_place(data: &mut [u8]) {
    let mut table = identity_table();
    for byte in data.iter_mut() {
        let index = *byte as usize;
        *byte = table[index];
        table[..=index].rotate_right(1);
    }
}

fn identity_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8;
    }
    table
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splice_semantics_match_hand_run() {
        // Value 3 encodes at its seed position, then at the front; value 5
        // still sits at index 5 because promoting 3 only shifted 0..2.
        assert_eq!(encode(&[3, 3, 5, 3]), vec![3, 0, 5, 1]);
    }

    #[test]
    fn decode_inverts_hand_run() {
        assert_eq!(decode(&[3, 0, 5, 1]), vec![3, 3, 5, 3]);
    }

    #[test]
    fn identity_input_encodes_by_position() {
        // Seeding is the identity permutation, so 0 encodes to 0 and each
        // later fresh value to its shifted position.
        assert_eq!(encode(&[0, 1, 2]), vec![0, 1, 2]);
    }

    #[test]
    fn round_trips_all_byte_values() {
        let input: Vec<u8> = (0u8..=255).chain((0u8..=255).rev()).collect();
        assert_eq!(decode(&encode(&input)), input);
    }

    #[test]
    fn in_place_matches_allocating() {
        let input = [9u8, 9, 0, 255, 9, 0];
        let mut buf = input;
        encode_in_place(&mut buf);
        assert_eq!(buf.to_vec(), encode(&input));
        decode_in_place(&mut buf);
        assert_eq!(buf, input);
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode(&[]), Vec::<u8>::new());
        assert_eq!(decode(&[]), Vec::<u8>::new());
    }
}
