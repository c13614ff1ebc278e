use std::path::PathBuf;

use game::config::Rules;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// SQLite database of persistent farms, every session is demo one without it.
    pub database: Option<PathBuf>,
    pub rules: Rules,
}

impl Configuration {
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}
