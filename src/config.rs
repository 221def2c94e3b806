use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{formatter::FormatterConfig, Error, InternalResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KumiawaseConfig {
    #[serde(default)]
    pub formatter: FormatterConfig,

    /// Print the unconsumed input next to rejected expressions.
    #[serde(default = "default_true")]
    pub show_leftover: bool,
}

impl Default for KumiawaseConfig {
    fn default() -> Self {
        Self {
            formatter: FormatterConfig::default(),
            show_leftover: default_true(),
        }
    }
}

impl KumiawaseConfig {
    /// Loads the config at `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            from_file(path)
        } else {
            tracing::debug!("config file {:?} not found, using defaults", path);
            Ok(Self::default())
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

// デフォルト値の定義
fn default_true() -> bool {
    true
}
