use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub venues_path: PathBuf,
    pub places_timeout_secs: u64,
    pub places_cache_ttl_secs: u64,
    pub places_language: String,
    pub default_exchange_rate: f64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &"[redacted]")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("venues_path", &self.venues_path)
            .field("places_timeout_secs", &self.places_timeout_secs)
            .field("places_cache_ttl_secs", &self.places_cache_ttl_secs)
            .field("places_language", &self.places_language)
            .field("default_exchange_rate", &self.default_exchange_rate)
            .finish()
    }
}
