/// Writes variable-width codes into a packed bitstream. Bits go in LSB
/// first, contiguously across byte boundaries. Call finish() to flush the
/// partial trailing byte and take the buffer.
pub struct BitWriter {
    /// Output buffer holding all completed bytes.
    data: Vec<u8>,
    /// Private queue of bits waiting to complete a byte. Bit 0 is the next
    /// bit to reach the output.
    queue: u64,
    /// Count of valid bits in the queue. Always below 8 between calls.
    q_bits: u32,
    /// Width used for subsequent push() calls.
    bits_per_code: u32,
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWriter {
    /// Create a new BitWriter with an initial width of 8 bits per code.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            queue: 0,
            q_bits: 0,
            bits_per_code: 8,
        }
    }

    /// Append `code` using the current width. The code must be
    /// representable in that many bits; higher bits are masked off rather
    /// than validated.
    pub fn push(&mut self, code: u32) {
        let mask = (1u64 << self.bits_per_code) - 1;
        self.queue |= (code as u64 & mask) << self.q_bits;
        self.q_bits += self.bits_per_code;

        while self.q_bits > 7 {
            self.data.push((self.queue & 0xff) as u8); //push the packed byte out
            self.queue >>= 8; //dequeue it
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Change the width for subsequent push() calls. Codes already pushed
    /// are unaffected.
    pub fn set_bits_per_code(&mut self, bits_per_code: u32) {
        debug_assert!((1..=32).contains(&bits_per_code));
        self.bits_per_code = bits_per_code;
    }

    /// Flush the remaining bits (1-7) as a final byte, padded with zeros in
    /// the most significant positions, and return the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.q_bits > 0 {
            self.data.push((self.queue & 0xff) as u8);
        }
        self.data
    }
}

#[cfg(test)]
mod test {
    use super::BitWriter;

    #[test]
    fn eight_bit_codes_are_plain_bytes() {
        let mut bw = BitWriter::new();
        bw.push(0x41);
        bw.push(0xff);
        bw.push(0x00);
        assert_eq!(bw.finish(), vec![0x41, 0xff, 0x00]);
    }

    #[test]
    fn nine_bit_code_splits_lsb_first() {
        let mut bw = BitWriter::new();
        bw.set_bits_per_code(9);
        bw.push(0x1ff);
        // Eight low bits fill the first byte, the ninth lands in bit 0 of
        // the padded trailing byte.
        assert_eq!(bw.finish(), vec![0xff, 0x01]);
    }

    #[test]
    fn codes_pack_across_byte_boundaries() {
        let mut bw = BitWriter::new();
        bw.set_bits_per_code(9);
        bw.push(0x100); // bit 8 set
        bw.push(0x001); // bit 0 set
        // Stream bits: 0..7 zero, bit 8 one, bit 9 one, rest zero.
        assert_eq!(bw.finish(), vec![0x00, 0x03, 0x00]);
    }

    #[test]
    fn push_masks_oversized_codes() {
        let mut bw = BitWriter::new();
        bw.set_bits_per_code(4);
        bw.push(0xab); // only 0xb representable
        bw.push(0x05);
        assert_eq!(bw.finish(), vec![0x5b]);
    }

    #[test]
    fn empty_writer_finishes_empty() {
        assert_eq!(BitWriter::new().finish(), Vec::<u8>::new());
    }
}
