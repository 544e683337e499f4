/// A fixed-width key split into 8-bit digits, least significant first.
pub trait RadixKey: Copy {
    const LEVELS: usize;

    /// Digit `level` of the key, where level 0 is the least significant byte.
    fn get_level(&self, level: usize) -> u8;
}

impl RadixKey for u32 {
    const LEVELS: usize = 4;

    #[inline]
    fn get_level(&self, level: usize) -> u8 {
        (self >> (level * 8)) as u8
    }
}

impl RadixKey for i32 {
    const LEVELS: usize = 4;

    /// Digits of the two's-complement bit pattern. The shift is done on the unsigned
    /// reinterpretation, so no sign bits are smeared into the upper digits.
    #[inline]
    fn get_level(&self, level: usize) -> u8 {
        (*self as u32).get_level(level)
    }
}

/// Bucket of `value` at `digit`: `(value >> (digit * 8)) & 0xFF`.
#[inline(always)]
pub fn bucket_of<K: RadixKey>(value: K, digit: usize) -> usize {
    value.get_level(digit) as usize
}

/// How element values map to sort keys.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum KeyOrder {
    /// Sort by the raw 32-bit pattern read as unsigned. Negative values sort after every
    /// non-negative value.
    #[default]
    BitPattern,
    /// Sort by signed numeric value, an extension beyond the bit-pattern contract. The sign bit
    /// is flipped for bucket extraction only.
    Signed,
}

impl KeyOrder {
    #[inline(always)]
    pub fn key_of(self, value: i32) -> u32 {
        match self {
            KeyOrder::BitPattern => value as u32,
            KeyOrder::Signed => (value as u32) ^ 0x8000_0000,
        }
    }

    /// Bucket of `value` at `digit` under this ordering.
    #[inline(always)]
    pub fn bucket_of(self, value: i32, digit: usize) -> usize {
        bucket_of(self.key_of(value), digit)
    }
}
