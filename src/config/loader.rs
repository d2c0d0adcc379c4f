use crate::config::settings::ClientConfig;
use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

/// Load and validate client config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
    let raw = fs::read_to_string(path)?;
    let config: ClientConfig = serde_yaml::from_str(&raw)?;
    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &ClientConfig) -> Result<()> {
    if config.base_url.trim().is_empty() {
        bail!("base_url must not be empty");
    }
    // request paths are absolute ("/api/...") and appended verbatim
    if config.base_url.ends_with('/') {
        bail!("base_url must not end with '/'");
    }
    if config.access_token_lifetime == 0 {
        bail!("access_token_lifetime must be positive");
    }
    if config.refresh_token_lifetime < config.access_token_lifetime {
        bail!("refresh_token_lifetime must be >= access_token_lifetime");
    }
    if let Some(retry) = &config.retry {
        if retry.attempts == Some(0) {
            bail!("retry.attempts must be positive");
        }
        if let (Some(base), Some(max)) = (retry.base_delay_ms, retry.max_delay_ms) {
            if max < base {
                bail!("retry.max_delay_ms must be >= retry.base_delay_ms");
            }
        }
    }
    Ok(())
}
