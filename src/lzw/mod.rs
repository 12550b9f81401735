//! Adaptive LZW over the byte alphabet, with a growing code width.
//!
//! Codes 0-255 stand for literal bytes; multi-byte phrases get sequential
//! codes from 256 up, assigned identically (and silently capped identically)
//! by the encoder and decoder as they observe the same data. In the default
//! streaming mode codes are bit-packed through the bitstream module, with
//! the width bumped by one bit every time the code counter fills the current
//! range; in fixed-width mode codes come out as plain integers and the width
//! never moves.
//!
//! There are no clear codes: once `max_bits` is exhausted the dictionary
//! freezes on both sides and the rest of the data is coded with the phrases
//! accumulated so far. Encoder and decoder must agree on that boundary
//! bit-for-bit, which is why both state machines below mirror each other's
//! counters exactly.
pub mod dictionary;

use log::trace;

use crate::bitstream::{BitReader, BitWriter};
use dictionary::{DecodeDict, EncodeDict, FIRST_PHRASE_CODE};

/// Options shared by both directions and both modes.
#[derive(Debug, Clone, Copy)]
pub struct LzwOptions {
    /// Ceiling on the code width. The round-trip guarantee covers the
    /// 9..=16 range; values outside it are the caller's own risk, matching
    /// the width the bit-packing layer can carry.
    pub max_bits: u32,
}

impl Default for LzwOptions {
    fn default() -> Self {
        Self { max_bits: 16 }
    }
}

/// Where an encoder sends its codes: the bit-packing writer in streaming
/// mode, a plain code vector in fixed-width mode.
trait CodeSink {
    fn put(&mut self, code: u32);
    fn widen(&mut self, bits_per_code: u32);
}

impl CodeSink for BitWriter {
    fn put(&mut self, code: u32) {
        self.push(code);
    }
    fn widen(&mut self, bits_per_code: u32) {
        self.set_bits_per_code(bits_per_code);
    }
}

impl CodeSink for Vec<u32> {
    fn put(&mut self, code: u32) {
        self.push(code);
    }
    fn widen(&mut self, _bits_per_code: u32) {
        // Fixed-width mode never changes width.
    }
}

/// Where a decoder pulls its codes from. Exhaustion terminates decoding in
/// both modes.
trait CodeSource {
    fn next_code(&mut self) -> Option<u32>;
    fn widen(&mut self, bits_per_code: u32);
}

impl CodeSource for BitReader<'_> {
    fn next_code(&mut self) -> Option<u32> {
        self.shift()
    }
    fn widen(&mut self, bits_per_code: u32) {
        self.set_bits_per_code(bits_per_code);
    }
}

struct SliceSource<'a> {
    codes: &'a [u32],
    cursor: usize,
}

impl CodeSource for SliceSource<'_> {
    fn next_code(&mut self) -> Option<u32> {
        let code = self.codes.get(self.cursor).copied();
        self.cursor += 1;
        code
    }
    fn widen(&mut self, _bits_per_code: u32) {}
}

/// Encode in streaming mode: codes bit-packed LSB-first, width growing from
/// 8 bits up to `max_bits`. Empty input encodes to an empty buffer.
pub fn encode(input: &[u8], options: &LzwOptions) -> Vec<u8> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut writer = BitWriter::new();
    encode_codes(input, options.max_bits, true, &mut writer);
    writer.finish()
}

/// Encode in fixed-width mode: codes returned as plain integers, width
/// pinned at 8 bits so the dictionary is never capped.
pub fn encode_fixed(input: &[u8], options: &LzwOptions) -> Vec<u32> {
    let mut codes = Vec::new();
    if !input.is_empty() {
        encode_codes(input, options.max_bits, false, &mut codes);
    }
    codes
}

/// Decode the streaming form. Terminates when the bit reader runs out of
/// whole codes; trailing padding bits are never interpreted.
pub fn decode(input: &[u8], options: &LzwOptions) -> Vec<u8> {
    decode_codes(&mut BitReader::new(input), options.max_bits, true)
}

/// Decode the fixed-width form.
pub fn decode_fixed(input: &[u32], options: &LzwOptions) -> Vec<u8> {
    decode_codes(&mut SliceSource { codes: input, cursor: 0 }, options.max_bits, false)
}

/// The encoder state machine. Greedily extends the current phrase while the
/// dictionary knows the extension; on a miss, emits the phrase code, maybe
/// widens, and registers the extension under the next sequential code.
fn encode_codes<S: CodeSink>(input: &[u8], max_bits: u32, adaptive: bool, output: &mut S) {
    let mut dict = EncodeDict::new();
    let mut bits_per_code: u32 = 8;
    let mut code: u32 = (1 << bits_per_code) - 1;
    let mut code_limit: u32 = 1 << bits_per_code;

    // A phrase is tracked by its code: the raw byte value while it is a
    // single byte, its dictionary code once longer.
    let mut phrase = input[0] as u32;

    for &c in &input[1..] {
        if let Some(known) = dict.get(phrase, c) {
            phrase = known;
            continue;
        }

        output.put(phrase);
        code += 1;

        if code == code_limit && adaptive {
            code_limit *= 2;
            bits_per_code += 1;
            if bits_per_code <= max_bits {
                trace!("lzw: code width up to {} bits", bits_per_code);
                output.widen(bits_per_code);
            } else if bits_per_code == max_bits + 1 {
                trace!("lzw: dictionary frozen at {} phrases", dict.len());
            }
        }

        if bits_per_code <= max_bits {
            dict.insert(phrase, c, code);
        }
        phrase = c as u32;
    }

    output.put(phrase);
}

/// The decoder state machine, the mirror image of encode_codes(): same
/// counters, same width trigger (evaluated before each code is consumed),
/// same dictionary cap, lagging the encoder by exactly one phrase. A code
/// referencing the entry about to be created is the classic KwKwK case and
/// resolves to the previous phrase plus its first byte.
fn decode_codes<S: CodeSource>(source: &mut S, max_bits: u32, adaptive: bool) -> Vec<u8> {
    let mut dict = DecodeDict::new();
    let mut bits_per_code: u32 = 8;
    let mut code: u32 = FIRST_PHRASE_CODE;
    let mut code_limit: u32 = code;

    // The first code is always a literal: the encoder's first emit happens
    // before any phrase has been registered.
    let first = match source.next_code() {
        Some(c) => c,
        None => return Vec::new(),
    };
    let mut output = vec![first as u8];
    let mut last_char = first as u8;
    let mut old_code = first;

    loop {
        if adaptive && code == code_limit {
            code_limit *= 2;
            bits_per_code += 1;
            if bits_per_code <= max_bits {
                source.widen(bits_per_code);
            }
        }

        let curr = match source.next_code() {
            Some(c) => c,
            None => break,
        };

        let first_byte = if dict.contains(curr) {
            dict.emit(curr, &mut output)
        } else {
            // KwKwK: previous phrase followed by its own first byte.
            let first_byte = dict.emit(old_code, &mut output);
            output.push(last_char);
            first_byte
        };
        last_char = first_byte;

        if bits_per_code <= max_bits {
            dict.push(old_code, last_char);
            code += 1;
        }
        old_code = curr;
    }

    output
}
