use std::fmt;
use std::io;
use std::error::Error;

///
/// Errors that can happen while loading a progress bar configuration
///
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io(io::Error),

    /// The configuration was not valid JSON, or didn't describe a progress bar
    Json(serde_json::Error)
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(err)    => write!(f, "could not read configuration: {}", err),
            ConfigError::Json(err)  => write!(f, "invalid configuration: {}", err)
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(err)    => Some(err),
            ConfigError::Json(err)  => Some(err)
        }
    }
}
