// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Source image is missing, unreadable or corrupt.
    Decode(String),
    /// Vector drawing could not be parsed or has no area.
    Parse(String),
    /// Output could not be encoded or written.
    Write(String),
    Config(String),
    /// Bad command line.
    Usage(String),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Usage errors exit with 2 like most command line tools, everything
    /// else with 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
            Error::Write(e) => write!(f, "Write Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Usage(e) => write!(f, "Usage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<resvg::usvg::Error> for Error {
    fn from(err: resvg::usvg::Error) -> Self {
        Error::Parse(err.to_string())
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

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
