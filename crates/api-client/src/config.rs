use base64::Engine as _;

/// Backend connection settings, baked at build time.
///
/// Deployments override the defaults through compile-time environment
/// variables; there is no runtime configuration file on the devices.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Service account for the basic-auth header the data endpoints require.
    pub basic_user: String,
    pub basic_pass: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("FISCAL_API_BASE_URL")
                .unwrap_or("http://localhost:8080")
                .to_string(),
            basic_user: option_env!("FISCAL_API_BASIC_USER")
                .unwrap_or("FISCAL_APP")
                .to_string(),
            basic_pass: option_env!("FISCAL_API_BASIC_PASS")
                .unwrap_or("")
                .to_string(),
            timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    /// `Basic` authorization header value for the data endpoints.
    pub fn basic_auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.basic_user, self.basic_pass);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_auth_header_encodes_credentials() {
        let config = ApiConfig {
            base_url: "http://localhost:8080".into(),
            basic_user: "user".into(),
            basic_pass: "pass".into(),
            timeout_secs: 10,
        };
        // base64("user:pass")
        assert_eq!(config.basic_auth_header(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn default_has_a_base_url() {
        let config = ApiConfig::default();
        assert!(config.base_url.starts_with("http"));
        assert_eq!(config.timeout_secs, 10);
    }
}
