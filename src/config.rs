//! Alphabet configuration, loadable from JSON.
//!
//! ```json
//! { "mode": "table", "symbols": "0123…XYZ'\"" }
//! { "mode": "contiguous", "base": ":" }
//! ```
//!
//! The alphabet is chosen once, when a [`NumeralCodec`] is built; it is never
//! reconfigured per call.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::alphabet::{Alphabet, AlphabetError, STANDARD_SYMBOLS};
use crate::codec::NumeralCodec;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed alphabet config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),
    #[error("Contiguous base {0:?} is not an ASCII character")]
    NonAsciiBase(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AlphabetConfig {
    /// Explicit symbol table, in digit order.
    Table { symbols: String },
    /// 64 consecutive code points starting at `base`.
    Contiguous { base: char },
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        AlphabetConfig::Table {
            symbols: String::from_utf8_lossy(STANDARD_SYMBOLS).into_owned(),
        }
    }
}

impl AlphabetConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading alphabet config");
        Self::from_json(&text)
    }

    pub fn build(&self) -> Result<Alphabet, ConfigError> {
        let alphabet = match self {
            AlphabetConfig::Table { symbols } => Alphabet::from_symbols(symbols.as_bytes())?,
            AlphabetConfig::Contiguous { base } => {
                if !base.is_ascii() {
                    return Err(ConfigError::NonAsciiBase(*base));
                }
                Alphabet::contiguous(*base as u8)?
            }
        };
        Ok(alphabet)
    }
}

impl NumeralCodec {
    pub fn from_config(config: &AlphabetConfig) -> Result<Self, ConfigError> {
        Ok(NumeralCodec::new(config.build()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builds_standard_alphabet() {
        let alphabet = AlphabetConfig::default().build().unwrap();
        assert_eq!(&alphabet, Alphabet::standard());
    }

    #[test]
    fn parse_contiguous() {
        let cfg = AlphabetConfig::from_json(r#"{"mode":"contiguous","base":":"}"#).unwrap();
        assert_eq!(cfg, AlphabetConfig::Contiguous { base: ':' });
        assert_eq!(cfg.build().unwrap().max(), b'y');
    }

    #[test]
    fn contiguous_from_space() {
        let cfg = AlphabetConfig::from_json(r#"{"mode":"contiguous","base":" "}"#).unwrap();
        let alphabet = cfg.build().unwrap();
        assert_eq!(alphabet.zero(), b' ');
        assert_eq!(alphabet.max(), b'_');
    }

    #[test]
    fn non_ascii_base_rejected() {
        let cfg = AlphabetConfig::Contiguous { base: 'é' };
        assert!(matches!(cfg.build(), Err(ConfigError::NonAsciiBase('é'))));
    }

    #[test]
    fn short_table_rejected() {
        let cfg = AlphabetConfig::from_json(r#"{"mode":"table","symbols":"abc"}"#).unwrap();
        assert!(matches!(
            cfg.build(),
            Err(ConfigError::Alphabet(AlphabetError::WrongLength(3)))
        ));
    }

    #[test]
    fn unknown_mode_rejected() {
        assert!(matches!(
            AlphabetConfig::from_json(r#"{"mode":"sparse"}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
