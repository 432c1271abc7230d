//! Stand-alone numeral codec: a non-negative integer ↔ its minimal base-64
//! ASCII representation.
//!
//! # Format
//! Big-endian positional notation, base 64, one alphabet symbol per digit:
//! `value = Σ digit[i] × 64^(width-1-i)`.
//!
//! # Canonical form
//! An encoding never starts with the zero symbol unless it is exactly the
//! single-digit zero.  [`NumeralCodec::encode`] only ever produces canonical
//! runs; the in-place operators in [`crate::run`] preserve canonical form.

use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

use crate::alphabet::{Alphabet, MAX_DIGIT};

/// Bits carried by one digit.
pub const DIGIT_BITS: u32 = 6;

/// Widest run that can be read into a `u64` (64 bits = 10 full digits + 4 bits).
pub const MAX_U64_DIGITS: usize = 11;

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("Can not encode negative value {0}")]
    InvalidArgument(String),
    /// A positive value above `u64::MAX`.
    #[error("Value {0} does not fit in 64 bits")]
    TooWide(String),
    #[error("Can not decrement a zero value")]
    Underflow,
    /// The run holds a value wider than 64 bits.
    #[error("Digit run of width {0} does not fit in 64 bits")]
    Overflow(usize),
}

// ── Codec ────────────────────────────────────────────────────────────────────

/// Encoder/decoder bound to one alphabet.
///
/// The range-based operators (`read`, `write`, `increment`, ...) live in
/// [`crate::run`] as further methods on this type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumeralCodec {
    pub(crate) alphabet: Alphabet,
}

impl NumeralCodec {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The process-wide codec over [`Alphabet::standard`].
    pub fn standard() -> &'static NumeralCodec {
        static STANDARD: OnceLock<NumeralCodec> = OnceLock::new();
        STANDARD.get_or_init(|| NumeralCodec::new(Alphabet::standard().clone()))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Minimal encoding of `value`.
    ///
    /// Accepts any integer type.  Negative values fail with
    /// [`NumeralError::InvalidArgument`], values above `u64::MAX` with
    /// [`NumeralError::TooWide`].
    pub fn encode<V: NumeralValue>(&self, value: V) -> Result<String, NumeralError> {
        let value = to_unsigned(value)?;
        let mut buf = [0u8; MAX_U64_DIGITS];
        let digits = self.encode_into(value, &mut buf);
        Ok(ascii_to_string(digits))
    }

    /// Parse a whole string as one digit run.
    pub fn decode(&self, encoded: &str) -> Result<u64, NumeralError> {
        self.accumulate(encoded.as_bytes())
    }

    /// Write the digits of `value` into the tail of `buf`, returning the
    /// written slice.  Zero yields the single zero symbol.
    pub(crate) fn encode_into<'b>(&self, mut value: u64, buf: &'b mut [u8; MAX_U64_DIGITS]) -> &'b [u8] {
        let mut start = MAX_U64_DIGITS;
        loop {
            start -= 1;
            buf[start] = self.alphabet.symbol((value & MAX_DIGIT as u64) as u8);
            value >>= DIGIT_BITS;
            if value == 0 {
                break;
            }
        }
        &buf[start..]
    }

    /// Big-endian base-64 accumulation over `digits`.
    pub(crate) fn accumulate(&self, digits: &[u8]) -> Result<u64, NumeralError> {
        let mut value: u64 = 0;
        for &sym in digits {
            // Shifting out any set bit means the value needs more than 64 bits.
            if value >> (u64::BITS - DIGIT_BITS) != 0 {
                return Err(NumeralError::Overflow(digits.len()));
            }
            value = (value << DIGIT_BITS) | self.alphabet.digit_unchecked(sym) as u64;
        }
        Ok(value)
    }
}

/// Integer types accepted by `encode` and `write`.
pub trait NumeralValue: TryInto<u64> + PartialOrd + Default + fmt::Display + Copy {}

impl<V> NumeralValue for V where V: TryInto<u64> + PartialOrd + Default + fmt::Display + Copy {}

pub(crate) fn to_unsigned<V: NumeralValue>(value: V) -> Result<u64, NumeralError> {
    value.try_into().map_err(|_| {
        if value < V::default() {
            NumeralError::InvalidArgument(value.to_string())
        } else {
            NumeralError::TooWide(value.to_string())
        }
    })
}

/// Alphabet symbols are ASCII, so any run of them is valid UTF-8.
pub(crate) fn ascii_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&b| b as char).collect()
}
