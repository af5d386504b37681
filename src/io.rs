//! Loading of motion configuration from RON files.

use crate::MotionConfig;
use anyhow::{Context, Result};
use std::{fs, path::Path};

impl MotionConfig {
    /// Reads and validates a configuration from the RON file at the given
    /// path. Fields missing from the file keep their default values.
    ///
    /// # Errors
    /// Returns an error if the file can not be read or parsed, or if the
    /// parsed configuration is invalid.
    pub fn from_ron_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = parse_ron_file(file_path.as_ref())?;
        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", file_path.as_ref().display()))?;
        Ok(config)
    }
}

fn parse_ron_file<T>(file_path: &Path) -> Result<T>
where
    T: for<'de> serde::de::Deserialize<'de>,
{
    let text = fs::read_to_string(file_path)
        .with_context(|| format!("Could not open {}", file_path.display()))?;

    ron::from_str::<T>(&text)
        .map_err(anyhow::Error::from)
        .with_context(|| format!("Invalid syntax in {}", file_path.display()))
}
