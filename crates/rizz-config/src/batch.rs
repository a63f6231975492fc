use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_chunk_size() -> usize {
    5
}

fn default_pacing_ms() -> u64 {
    100
}

fn default_max_texts() -> usize {
    50
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BatchConfig {
    /// Texts translated concurrently per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Pause between chunks
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,
    /// Largest batch the HTTP layer accepts
    #[serde(default = "default_max_texts")]
    pub max_texts: usize,
}

impl BatchConfig {
    pub fn new() -> Self {
        Self {
            chunk_size: env_or("BATCH_CHUNK_SIZE", default_chunk_size()).max(1),
            pacing_ms: env_or("BATCH_PACING_MS", default_pacing_ms()),
            max_texts: env_or("BATCH_MAX_TEXTS", default_max_texts()),
        }
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            pacing_ms: default_pacing_ms(),
            max_texts: default_max_texts(),
        }
    }
}
