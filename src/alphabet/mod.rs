//! Digit alphabet: a fixed bijection between digit values `0..=63` and ASCII
//! symbols.
//!
//! # Construction modes
//!   - **Table**: an explicit ordered list of 64 distinct symbols
//!     ([`Alphabet::from_symbols`]).
//!   - **Contiguous**: 64 consecutive code points starting at a base symbol
//!     ([`Alphabet::contiguous`]).
//!
//! Both modes produce the same lookup tables, so every operation downstream
//! is O(1) per digit regardless of how the alphabet was described.
//!
//! # Successor tables
//! Besides value↔symbol, the alphabet precomputes symbol→symbol tables for
//! `digit + 1` and `digit - 1` (both wrapping at the alphabet bounds).  The
//! carry and borrow loops in [`crate::run`] walk symbols through these tables
//! without ever decoding to an integer.

use thiserror::Error;

/// Number of symbols in every alphabet.
pub const RADIX: usize = 64;

/// Largest digit value.
pub const MAX_DIGIT: u8 = 63;

/// Symbols of the standard alphabet, in digit order.
pub const STANDARD_SYMBOLS: &[u8; RADIX] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ'\"";

/// Marks a byte that is not part of the alphabet in the reverse table.
const NOT_A_DIGIT: u8 = 0xFF;

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("Alphabet must contain exactly 64 symbols, got {0}")]
    WrongLength(usize),
    #[error("Symbol {symbol:?} appears at both index {first} and index {second}")]
    Duplicate { symbol: char, first: usize, second: usize },
    #[error("Symbol 0x{0:02x} at index {1} is not printable ASCII")]
    NonPrintable(u8, usize),
    #[error("Contiguous alphabet starting at 0x{0:02x} runs past the ASCII range")]
    RangeOverflow(u8),
}

/// Printable ASCII, space included.
#[inline]
const fn is_printable(sym: u8) -> bool {
    sym >= 0x20 && sym <= 0x7E
}

/// Check that a 64-symbol table is printable and free of duplicates.
const fn validate(symbols: &[u8; RADIX]) -> Result<(), AlphabetError> {
    let mut seen = [NOT_A_DIGIT; 256];
    let mut i = 0;
    while i < RADIX {
        let sym = symbols[i];
        if !is_printable(sym) {
            return Err(AlphabetError::NonPrintable(sym, i));
        }
        if seen[sym as usize] != NOT_A_DIGIT {
            return Err(AlphabetError::Duplicate {
                symbol: sym as char,
                first:  seen[sym as usize] as usize,
                second: i,
            });
        }
        seen[sym as usize] = i as u8;
        i += 1;
    }
    Ok(())
}

const _: () = assert!(matches!(validate(STANDARD_SYMBOLS), Ok(())));

static STANDARD: Alphabet = Alphabet::build(STANDARD_SYMBOLS);

// ── Alphabet ─────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// value → symbol
    symbols: [u8; RADIX],
    /// symbol → value, `NOT_A_DIGIT` for foreign bytes
    digits: [u8; 256],
    /// symbol → symbol of `digit + 1` (63 wraps to 0)
    successors: [u8; 256],
    /// symbol → symbol of `digit - 1` (0 wraps to 63)
    predecessors: [u8; 256],
}

impl Alphabet {
    /// Build an alphabet from an explicit ordered symbol table.
    ///
    /// Fails unless `symbols` holds exactly 64 distinct printable ASCII bytes
    /// (`0x20..=0x7E`).
    pub fn from_symbols(symbols: &[u8]) -> Result<Self, AlphabetError> {
        let symbols: &[u8; RADIX] = symbols
            .try_into()
            .map_err(|_| AlphabetError::WrongLength(symbols.len()))?;
        validate(symbols)?;

        tracing::debug!(
            zero = %(symbols[0] as char),
            max  = %(symbols[RADIX - 1] as char),
            "built digit alphabet"
        );

        Ok(Self::build(symbols))
    }

    /// Build an alphabet of 64 consecutive code points starting at `base`.
    pub fn contiguous(base: u8) -> Result<Self, AlphabetError> {
        if base as usize + RADIX > 0x7F {
            return Err(AlphabetError::RangeOverflow(base));
        }
        let symbols: Vec<u8> = (0..RADIX as u8).map(|d| base + d).collect();
        Self::from_symbols(&symbols)
    }

    /// The process-wide standard alphabet (`0-9`, `a-z`, `A-Z`, `'`, `"`).
    pub fn standard() -> &'static Alphabet {
        &STANDARD
    }

    /// Lookup tables for an already validated symbol table.
    const fn build(symbols: &[u8; RADIX]) -> Alphabet {
        let mut digits       = [NOT_A_DIGIT; 256];
        let mut successors   = [0u8; 256];
        let mut predecessors = [0u8; 256];
        let mut i = 0;
        while i < RADIX {
            let sym = symbols[i] as usize;
            digits[sym]       = i as u8;
            successors[sym]   = symbols[(i + 1) % RADIX];
            predecessors[sym] = symbols[(i + RADIX - 1) % RADIX];
            i += 1;
        }
        Alphabet { symbols: *symbols, digits, successors, predecessors }
    }

    /// Symbol for digit `value`.  Only the low 6 bits of `value` are used.
    #[inline]
    pub fn symbol(&self, value: u8) -> u8 {
        self.symbols[(value & MAX_DIGIT) as usize]
    }

    /// Digit value of `symbol`, or `None` if it is not part of the alphabet.
    #[inline]
    pub fn digit(&self, symbol: u8) -> Option<u8> {
        match self.digits[symbol as usize] {
            NOT_A_DIGIT => None,
            d           => Some(d),
        }
    }

    /// Digit value of a symbol already known to belong to the alphabet.
    /// Foreign bytes read as 0.
    #[inline]
    pub(crate) fn digit_unchecked(&self, symbol: u8) -> u8 {
        match self.digits[symbol as usize] {
            NOT_A_DIGIT => 0,
            d           => d,
        }
    }

    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.digits[symbol as usize] != NOT_A_DIGIT
    }

    /// Symbol of `digit(symbol) + 1`, wrapping the max digit to zero.
    #[inline]
    pub fn successor(&self, symbol: u8) -> u8 {
        self.successors[symbol as usize]
    }

    /// Symbol of `digit(symbol) - 1`, wrapping zero to the max digit.
    #[inline]
    pub fn predecessor(&self, symbol: u8) -> u8 {
        self.predecessors[symbol as usize]
    }

    #[inline]
    pub fn zero(&self) -> u8 { self.symbols[0] }

    #[inline]
    pub fn one(&self) -> u8 { self.symbols[1] }

    #[inline]
    pub fn max(&self) -> u8 { self.symbols[RADIX - 1] }

    /// The symbols in digit order.
    pub fn as_bytes(&self) -> &[u8; RADIX] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Alphabet")
            .field(&String::from_utf8_lossy(&self.symbols))
            .finish()
    }
}
