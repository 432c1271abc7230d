//! In-place arithmetic on a digit run embedded in a host string.
//!
//! A run is addressed by the half-open byte range `[first, last)` of `host`.
//! Hosts are immutable: every mutating operation returns a new host with only
//! the run's bytes replaced.  `write`, `increment` and `decrement` may change
//! the run's width, so callers must recompute `last` from the returned host
//! (`last + new.len() - old.len()`) before the next call.
//!
//! # Caller contract
//! `first < last <= host.len()` and every byte in range is an alphabet
//! symbol.  Violations are not detected.
//!
//! # Width changes
//! Increment and decrement move the value by exactly one, so a call widens
//! or narrows the run by at most one digit:
//!   - increment of an all-max run prepends the one symbol (`"""` → `100`),
//!   - decrement of `1` followed by zeros drops the leading digit
//!     (`100` → `"""`).

use crate::codec::{NumeralCodec, NumeralError, NumeralValue, MAX_U64_DIGITS, to_unsigned};

impl NumeralCodec {
    /// True iff the run is the single zero symbol.
    pub fn is_zero(&self, host: &str, first: usize, last: usize) -> bool {
        last - first == 1 && host.as_bytes()[first] == self.alphabet.zero()
    }

    /// True iff the run is the single one symbol.
    pub fn is_one(&self, host: &str, first: usize, last: usize) -> bool {
        last - first == 1 && host.as_bytes()[first] == self.alphabet.one()
    }

    /// Decode the run.  Fails only when the value needs more than 64 bits.
    pub fn read(&self, host: &str, first: usize, last: usize) -> Result<u64, NumeralError> {
        self.accumulate(&host.as_bytes()[first..last])
    }

    /// Replace the run with the minimal encoding of `value`.
    ///
    /// The new width depends only on `value`, not on `last - first`.
    pub fn write<V: NumeralValue>(&self, host: &str, first: usize, last: usize, value: V) -> Result<String, NumeralError> {
        let value = to_unsigned(value)?;
        let mut buf = [0u8; MAX_U64_DIGITS];
        let digits = self.encode_into(value, &mut buf);
        Ok(splice(host, first, last, digits.iter().copied()))
    }

    /// Add one to the run.
    ///
    /// Walks from the least significant digit, turning max digits into zero
    /// until a digit absorbs the carry.  A carry out of the most significant
    /// digit inserts a new leading one.
    pub fn increment(&self, host: &str, first: usize, last: usize) -> String {
        let bytes = host.as_bytes();
        let zero  = self.alphabet.zero();

        // Rewritten digits, least significant first.
        let mut changed = Vec::with_capacity(last - first + 1);
        let mut pos = last;
        while pos > first {
            pos -= 1;
            let next = self.alphabet.successor(bytes[pos]);
            changed.push(next);
            if next != zero {
                return splice(host, pos, last, changed.into_iter().rev());
            }
        }

        changed.push(self.alphabet.one());
        tracing::trace!(first, width = changed.len(), "carry widened digit run");
        splice(host, first, last, changed.into_iter().rev())
    }

    /// Subtract one from the run.
    ///
    /// Fails with [`NumeralError::Underflow`] on zero, leaving nothing
    /// modified.  Zero digits borrow (become max) until a non-zero digit
    /// absorbs the borrow.  If that digit is a leading one in a multi-digit
    /// run it is dropped instead of becoming a leading zero.
    pub fn decrement(&self, host: &str, first: usize, last: usize) -> Result<String, NumeralError> {
        if self.is_zero(host, first, last) {
            return Err(NumeralError::Underflow);
        }

        let bytes = host.as_bytes();
        let zero  = self.alphabet.zero();

        let mut changed = Vec::with_capacity(last - first);
        let mut pos = last;
        while pos > first {
            pos -= 1;
            let sym = bytes[pos];
            if sym == zero {
                changed.push(self.alphabet.max());
                continue;
            }

            if sym == self.alphabet.one() && pos == first && last - first > 1 {
                tracing::trace!(first, width = changed.len(), "borrow narrowed digit run");
            } else {
                changed.push(self.alphabet.predecessor(sym));
            }
            return Ok(splice(host, pos, last, changed.into_iter().rev()));
        }

        // Only reachable for a non-canonical run of zeros.
        Err(NumeralError::Underflow)
    }
}

/// `host[..from] + digits + host[to..]`
fn splice<I>(host: &str, from: usize, to: usize, digits: I) -> String
where
    I: ExactSizeIterator<Item = u8>,
{
    let mut out = String::with_capacity(host.len() - (to - from) + digits.len());
    out.push_str(&host[..from]);
    out.extend(digits.map(char::from));
    out.push_str(&host[to..]);
    out
}

// ── Standard-alphabet shorthands ─────────────────────────────────────────────

pub fn is_zero(host: &str, first: usize, last: usize) -> bool {
    NumeralCodec::standard().is_zero(host, first, last)
}

pub fn is_one(host: &str, first: usize, last: usize) -> bool {
    NumeralCodec::standard().is_one(host, first, last)
}

pub fn read(host: &str, first: usize, last: usize) -> Result<u64, NumeralError> {
    NumeralCodec::standard().read(host, first, last)
}

pub fn write<V: NumeralValue>(host: &str, first: usize, last: usize, value: V) -> Result<String, NumeralError> {
    NumeralCodec::standard().write(host, first, last, value)
}

pub fn increment(host: &str, first: usize, last: usize) -> String {
    NumeralCodec::standard().increment(host, first, last)
}

pub fn decrement(host: &str, first: usize, last: usize) -> Result<String, NumeralError> {
    NumeralCodec::standard().decrement(host, first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_without_carry_touches_one_digit() {
        assert_eq!(increment("#a|", 1, 2), "#b|");
        assert_eq!(increment("#1a|", 1, 3), "#1b|");
    }

    #[test]
    fn increment_carries_into_existing_digit() {
        assert_eq!(increment("#1\"|", 1, 3), "#20|");
    }

    #[test]
    fn increment_widens_all_max_run() {
        assert_eq!(increment("#\"|", 1, 2), "#10|");
        assert_eq!(increment("#\"\"|", 1, 3), "#100|");
    }

    #[test]
    fn decrement_without_borrow() {
        assert_eq!(decrement("#b|", 1, 2).unwrap(), "#a|");
        assert_eq!(decrement("#21|", 1, 3).unwrap(), "#20|");
    }

    #[test]
    fn decrement_one_yields_zero_symbol() {
        assert_eq!(decrement("#1|", 1, 2).unwrap(), "#0|");
    }

    #[test]
    fn decrement_borrows_through_zeros() {
        assert_eq!(decrement("#200|", 1, 4).unwrap(), "#1\"\"|");
    }

    #[test]
    fn decrement_narrows_leading_one() {
        assert_eq!(decrement("#10|", 1, 3).unwrap(), "#\"|");
        assert_eq!(decrement("#100|", 1, 4).unwrap(), "#\"\"|");
    }

    #[test]
    fn decrement_leading_one_not_dropped_without_borrow() {
        assert_eq!(decrement("#11|", 1, 3).unwrap(), "#10|");
    }

    #[test]
    fn decrement_zero_underflows() {
        assert_eq!(decrement("#0|", 1, 2), Err(NumeralError::Underflow));
        assert_eq!(decrement("#00|", 1, 3), Err(NumeralError::Underflow));
    }

    #[test]
    fn zero_and_one_tests_require_single_digit() {
        assert!(is_zero("#0|", 1, 2));
        assert!(!is_zero("#10|", 1, 3));
        assert!(!is_zero("#00|", 1, 3));
        assert!(is_one("#1|", 1, 2));
        assert!(!is_one("#01|", 1, 3));
        assert!(!is_one("#11|", 1, 3));
    }

    #[test]
    fn write_changes_width() {
        assert_eq!(write("#a|", 1, 2, 64u32).unwrap(), "#10|");
        assert_eq!(write("#100|", 1, 4, 0u32).unwrap(), "#0|");
        assert_eq!(
            write("#a|", 1, 2, -5i32),
            Err(NumeralError::InvalidArgument("-5".into()))
        );
        assert_eq!(
            write("#a|", 1, 2, u128::MAX),
            Err(NumeralError::TooWide(u128::MAX.to_string()))
        );
    }

    #[test]
    fn read_reports_width_of_embedded_run() {
        let host = "id=#g0000000000|;";
        assert_eq!(read(host, 4, 15), Err(NumeralError::Overflow(11)));
        assert_eq!(read(host, 5, 15).unwrap(), 0);
    }

    #[test]
    fn operations_leave_surrounding_bytes() {
        let host = "prefix:\u{e9}:#\"|:suffix";
        let first = host.find('#').unwrap() + 1;
        let out = increment(host, first, first + 1);
        assert_eq!(out, "prefix:\u{e9}:#10|:suffix");
    }

    #[test]
    fn increment_works_past_u64_width() {
        let run = "\"".repeat(20);
        let out = increment(&run, 0, run.len());
        assert_eq!(out.len(), 21);
        assert!(out.starts_with('1'));
        assert!(out[1..].bytes().all(|b| b == b'0'));
        assert_eq!(read(&out, 0, out.len()), Err(NumeralError::Overflow(21)));
        assert_eq!(decrement(&out, 0, out.len()).unwrap(), run);
    }
}
