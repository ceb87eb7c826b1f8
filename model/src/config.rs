use super::error::*;
use super::timing::*;

use std::fs;
use std::path::Path;

///
/// Settings for a progress bar that can be read from a JSON file
///
/// Any field that's missing from the file takes its default value.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBarConfig {
    /// Duration in seconds of an animated progress change
    pub animation_duration: f64,

    /// Easing curve for an animated progress change
    pub timing_function: TimingFunction,

    /// The progress value that the bar starts with
    pub progress: f32
}

impl ProgressBarConfig {
    /// Matches the default duration of an implicit layer animation
    pub const DEFAULT_ANIMATION_DURATION: f64 = 0.25;

    /// Progress bars start half full
    pub const DEFAULT_PROGRESS: f32 = 0.5;

    ///
    /// Reads a configuration from a JSON string
    ///
    pub fn from_json(json: &str) -> Result<ProgressBarConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    ///
    /// Reads a configuration from a JSON file
    ///
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ProgressBarConfig, ConfigError> {
        let path    = path.as_ref();
        let json    = fs::read_to_string(path)?;
        let config  = Self::from_json(&json)?;

        debug!("Loaded progress bar configuration from {}: {:?}", path.display(), config);

        Ok(config)
    }
}

impl Default for ProgressBarConfig {
    fn default() -> ProgressBarConfig {
        ProgressBarConfig {
            animation_duration: Self::DEFAULT_ANIMATION_DURATION,
            timing_function:    TimingFunction::default(),
            progress:           Self::DEFAULT_PROGRESS
        }
    }
}
