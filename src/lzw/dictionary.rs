use rustc_hash::FxHashMap;

/// First code available for multi-byte phrases; codes 0-255 denote literal
/// bytes and are never stored.
pub const FIRST_PHRASE_CODE: u32 = 256;

/// Encoder-side phrase dictionary. A phrase is identified by its code, so
/// extending the current phrase by one byte is a single probe on the
/// (phrase code, next byte) key instead of a byte-string rebuild.
pub struct EncodeDict {
    map: FxHashMap<(u32, u8), u32>,
}

impl EncodeDict {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn get(&self, phrase: u32, next: u8) -> Option<u32> {
        self.map.get(&(phrase, next)).copied()
    }

    pub fn insert(&mut self, phrase: u32, next: u8, code: u32) {
        self.map.insert((phrase, next), code);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

/// Decoder-side phrase arena: (parent code, appended byte) pairs indexed by
/// `code - 256`. Entry order mirrors the encoder's assignment order exactly,
/// one phrase behind. Phrase bytes are materialized only when a phrase is
/// emitted, by walking parent links back to the literal root.
pub struct DecodeDict {
    entries: Vec<(u32, u8)>,
}

impl DecodeDict {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether `code` resolves: a literal, or an already-assigned phrase.
    pub fn contains(&self, code: u32) -> bool {
        code < FIRST_PHRASE_CODE || ((code - FIRST_PHRASE_CODE) as usize) < self.entries.len()
    }

    pub fn push(&mut self, parent: u32, byte: u8) {
        self.entries.push((parent, byte));
    }

    /// Append the phrase behind `code` to `out` and return its first byte.
    /// A dangling parent link can only come from a corrupt stream; the walk
    /// stops there with the truncated code value, keeping garbage input a
    /// garbage-output matter rather than a panic.
    pub fn emit(&self, code: u32, out: &mut Vec<u8>) -> u8 {
        let start = out.len();
        let mut c = code;
        loop {
            if c < FIRST_PHRASE_CODE {
                out.push(c as u8);
                break;
            }
            match self.entries.get((c - FIRST_PHRASE_CODE) as usize) {
                Some(&(parent, byte)) => {
                    out.push(byte);
                    c = parent;
                }
                None => {
                    out.push(c as u8);
                    break;
                }
            }
        }
        out[start..].reverse();
        out[start]
    }
}
