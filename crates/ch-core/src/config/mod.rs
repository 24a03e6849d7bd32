//! Assistant configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name the assistant loads when none is given.
pub const DEFAULT_DATA_FILE: &str = "whatsapp-university-data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Path of the JSON knowledge file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}
