//! Front end configuration, read from a JSON file.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::errors::InputError;

pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// File extensions (without the dot, lower case) accepted for file input.
    pub allowed_extensions: Vec<String>,
    pub max_input_bytes: usize,
    /// Reserved words added on top of the built-in keyword set.
    pub extra_keywords: Vec<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        FrontendConfig {
            allowed_extensions: ["c", "cpp", "py", "txt", "java", "js", "h", "hpp"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            extra_keywords: vec![],
        }
    }
}

impl FrontendConfig {
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: FrontendConfig =
            serde_json::from_str(&content).map_err(|e| InputError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        debug!("config: {:?}", config);
        Ok(config)
    }

    /// Loads `path` if one was given, otherwise uses the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, InputError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(FrontendConfig::default()),
        }
    }

    pub fn is_allowed_file(&self, file_name: &str) -> bool {
        match file_name.rsplit_once('.') {
            Some((_, extension)) => {
                let extension = extension.to_lowercase();
                self.allowed_extensions.iter().any(|allowed| *allowed == extension)
            }
            None => false,
        }
    }

    pub fn allowed_list(&self) -> String {
        self.allowed_extensions.join(", ")
    }
}
