//! Frontend configuration module
//!
//! Build-time settings for the web client. Values are read with `option_env!`
//! so a deployment can override them without touching code.

/// Local storage key the login flow writes the doctor's credential record to.
const DEFAULT_CREDENTIAL_KEY: &str = "doctor";

/// Frontend configuration
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Local storage key holding the JSON credential record
    pub credential_key: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            credential_key: option_env!("XIAOZHI_CREDENTIAL_KEY")
                .unwrap_or(DEFAULT_CREDENTIAL_KEY)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the credential storage key
    pub fn credential_key(&self) -> &str {
        &self.credential_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.credential_key().is_empty());
        if option_env!("XIAOZHI_CREDENTIAL_KEY").is_none() {
            assert_eq!(config.credential_key(), "doctor");
        }
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.credential_key(), config2.credential_key());
    }

    #[test]
    fn test_frontend_config_debug() {
        let config = FrontendConfig::new();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("FrontendConfig"));
        assert!(debug_str.contains("credential_key"));
    }
}
