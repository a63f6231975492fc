use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_ttl_seconds() -> u64 {
    24 * 60 * 60
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// Age after which a cached translation is treated as absent
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

impl CacheConfig {
    pub fn new() -> Self {
        Self {
            ttl_seconds: env_or("CACHE_TTL_SECONDS", default_ttl_seconds()),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
        }
    }
}
