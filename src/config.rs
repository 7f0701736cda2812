use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON dataset consumed by the in-memory store
    pub data_file: PathBuf,
    /// Server bind address
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data/platform.json"),
            bind_addr: "127.0.0.1:9000".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(file) = std::env::var("TALENT_SEARCH_DATA_FILE") {
            config.data_file = PathBuf::from(file);
        }
        if let Ok(addr) = std::env::var("TALENT_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }

        config
    }
}
