pub mod alphabet;
pub mod codec;
pub mod config;
pub mod run;

pub use alphabet::{Alphabet, AlphabetError};
pub use codec::{NumeralCodec, NumeralError, NumeralValue};
pub use config::{AlphabetConfig, ConfigError};
pub use run::{is_zero, is_one, read, write, increment, decrement};

/// Minimal encoding of `value` over the standard alphabet.
pub fn encode<V: NumeralValue>(value: V) -> Result<String, NumeralError> {
    NumeralCodec::standard().encode(value)
}

/// Decode a whole string over the standard alphabet.
pub fn decode(encoded: &str) -> Result<u64, NumeralError> {
    NumeralCodec::standard().decode(encoded)
}
