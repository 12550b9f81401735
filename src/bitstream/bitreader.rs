/// Reads variable-width codes back out of a packed bitstream. The dual of
/// BitWriter: owns an immutable view of the buffer and a bit cursor.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Absolute bit index of the next unread bit.
    cursor: usize,
    /// Width used for subsequent shift() calls.
    bits_per_code: u32,
}

impl<'a> BitReader<'a> {
    /// Create a reader over a finished buffer, starting at 8 bits per code.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            cursor: 0,
            bits_per_code: 8,
        }
    }

    /// Change the width for subsequent shift() calls.
    pub fn set_bits_per_code(&mut self, bits_per_code: u32) {
        debug_assert!((1..=32).contains(&bits_per_code));
        self.bits_per_code = bits_per_code;
    }

    /// Extract the next code, LSB first. Returns None when fewer bits
    /// remain than the current width asks for; trailing padding is never
    /// re-interpreted as a short code.
    pub fn shift(&mut self) -> Option<u32> {
        if self.data.len() * 8 - self.cursor < self.bits_per_code as usize {
            return None;
        }

        let mut code = 0u64;
        let mut got = 0u32;
        while got < self.bits_per_code {
            let byte = self.data[self.cursor >> 3] as u64;
            let bit_index = (self.cursor & 7) as u32;
            // Take as many bits as this byte still holds, capped by need.
            let take = (8 - bit_index).min(self.bits_per_code - got);
            let bits = (byte >> bit_index) & ((1 << take) - 1);
            code |= bits << got;
            got += take;
            self.cursor += take as usize;
        }
        Some(code as u32)
    }
}
