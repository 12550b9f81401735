use crate::error::SqueezeError;

/// Map each character of `text` to its code point as a byte. Fails on the
/// first character whose scalar value exceeds 255.
pub fn to_bytes(text: &str) -> Result<Vec<u8>, SqueezeError> {
    let mut result = Vec::with_capacity(text.len());
    for (position, ch) in text.chars().enumerate() {
        let code_point = ch as u32;
        if code_point > 255 {
            return Err(SqueezeError::InvalidCharacter {
                position,
                code_point,
            });
        }
        result.push(code_point as u8);
    }
    Ok(result)
}

/// Inverse of to_bytes(). Total: every byte value maps to a character.
pub fn from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod test {
    use super::{from_bytes, to_bytes};
    use crate::error::SqueezeError;

    #[test]
    fn ascii_round_trips() {
        let text = "It was a dark and stormy night.";
        assert_eq!(from_bytes(&to_bytes(text).unwrap()), text);
    }

    #[test]
    fn full_latin1_range_round_trips() {
        let text: String = (0u8..=255).map(|b| b as char).collect();
        let bytes = to_bytes(&text).unwrap();
        assert_eq!(bytes, (0u8..=255).collect::<Vec<u8>>());
        assert_eq!(from_bytes(&bytes), text);
    }

    #[test]
    fn wide_character_is_rejected_with_position() {
        assert_eq!(
            to_bytes("ab\u{0100}"),
            Err(SqueezeError::InvalidCharacter {
                position: 2,
                code_point: 0x100
            })
        );
    }

    #[test]
    fn empty_text_is_empty_bytes() {
        assert_eq!(to_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(from_bytes(&[]), "");
    }
}
