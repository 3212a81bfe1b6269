use super::{Config, ConfigError};

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_host("Listen host", &self.listen_host)?;
        validate_host("Destination host", &self.dest_host)?;
        validate_port("Listen port", self.listen_port)?;
        validate_port("Destination port", self.dest_port)?;

        if self.forward_retries == 0 {
            return Err(ConfigError::InvalidConfig(
                "Forward retries must be greater than 0".to_string(),
            ));
        }

        if self.socket_timeout_ms == 0 {
            return Err(ConfigError::InvalidConfig(
                "Socket timeout must be greater than 0".to_string(),
            ));
        }

        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidConfig(
                "Max body size must be greater than 0".to_string(),
            ));
        }

        if self.log_file.is_some() && self.log_max_bytes == 0 {
            return Err(ConfigError::InvalidConfig(
                "Log max bytes must be greater than 0 when a log file is configured".to_string(),
            ));
        }

        Ok(())
    }
}

/// Validates that the host is not empty or whitespace-only.
fn validate_host(name: &str, host: &str) -> Result<(), ConfigError> {
    if host.trim().is_empty() {
        return Err(ConfigError::InvalidConfig(format!("{name} cannot be empty")));
    }
    Ok(())
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(name: &str, port: u16) -> Result<(), ConfigError> {
    if port == 0 {
        return Err(ConfigError::InvalidConfig(format!("{name} cannot be 0")));
    }
    Ok(())
}
