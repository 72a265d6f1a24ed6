use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub submission: SubmissionConfig,
    pub sync: SyncConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    pub base_url: String,
    pub request_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub auto_sync: bool,
    pub sync_interval: u64,
    /// Upper bound for one submission attempt. A hung request counts
    /// as unreachable and must not stall the rest of the pass.
    pub submit_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub pending_key: String,
    pub synced_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/washbook.db".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            submission: SubmissionConfig {
                base_url: "http://localhost:8080".to_string(),
                request_timeout: 30,
            },
            sync: SyncConfig {
                auto_sync: false,
                sync_interval: 300, // 5 minutes
                submit_timeout: 15,
            },
            storage: StorageConfig {
                pending_key: "pending_bookings".to_string(),
                synced_key: "synced_bookings".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("WASHBOOK_DATABASE_URL") {
            if !v.trim().is_empty() {
                cfg.database.url = v;
            }
        }
        if let Ok(v) = std::env::var("WASHBOOK_MAX_CONNECTIONS") {
            if let Some(value) = parse_u64(&v) {
                cfg.database.max_connections = value.clamp(1, 64) as u32;
            }
        }

        if let Ok(v) = std::env::var("WASHBOOK_API_BASE_URL") {
            if !v.trim().is_empty() {
                cfg.submission.base_url = v.trim_end_matches('/').to_string();
            }
        }
        if let Ok(v) = std::env::var("WASHBOOK_REQUEST_TIMEOUT_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.submission.request_timeout = value.max(1);
            }
        }

        if let Ok(v) = std::env::var("WASHBOOK_AUTO_SYNC") {
            cfg.sync.auto_sync = parse_bool(&v, cfg.sync.auto_sync);
        }
        if let Ok(v) = std::env::var("WASHBOOK_SYNC_INTERVAL_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.sync.sync_interval = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("WASHBOOK_SUBMIT_TIMEOUT_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.sync.submit_timeout = value.max(1);
            }
        }

        if let Ok(v) = std::env::var("WASHBOOK_PENDING_KEY") {
            if !v.trim().is_empty() {
                cfg.storage.pending_key = v;
            }
        }
        if let Ok(v) = std::env::var("WASHBOOK_SYNCED_KEY") {
            if !v.trim().is_empty() {
                cfg.storage.synced_key = v;
            }
        }

        cfg
    }
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}
