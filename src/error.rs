// SPDX-License-Identifier: MPL-2.0
//! The crate-wide error type.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Network or HTTP failure while talking to the adverse-news service.
    FetchFailed(String),
    /// Image bytes were fetched but could not be decoded into pixels.
    DecodeFailed(String),
    /// Settings file could not be read, parsed, or written.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FetchFailed(e) => write!(f, "Fetch failed: {}", e),
            Error::DecodeFailed(e) => write!(f, "Decode failed: {}", e),
            Error::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_fetch_error() {
        let err = Error::FetchFailed("connection refused".to_string());
        assert_eq!(format!("{}", err), "Fetch failed: connection refused");
    }

    #[test]
    fn display_formats_decode_error() {
        let err = Error::DecodeFailed("not an image".to_string());
        assert_eq!(format!("{}", err), "Decode failed: not an image");
    }

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("theme_mode unreadable".into());
        assert_eq!(format!("{}", err), "Config error: theme_mode unreadable");
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("disk unplugged");
        let err: Error = io_error.into();
        match err {
            Error::Config(message) => assert!(message.contains("disk unplugged")),
            _ => panic!("expected Config variant"),
        }
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_error = toml::from_str::<toml::Value>("not = valid = toml").unwrap_err();
        let err: Error = toml_error.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
