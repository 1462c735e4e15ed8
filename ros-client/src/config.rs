use std::{env, fmt, time::Duration};

use crate::error::TransportError;

pub const ENV_ADDRESS: &str = "ROS7API_ADDRESS";
pub const ENV_USERNAME: &str = "ROS7API_USERNAME";
pub const ENV_PASSWORD: &str = "ROS7API_PASSWORD";

const DEFAULT_USERNAME: &str = "admin";

/// Connection parameters for a RouterOS `www-ssl` service.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// Host and optional port, e.g. `router.example.com`, `192.0.2.1:8443` or
    /// `[2001:db8::1]:443`.
    pub address: String,
    pub username: String,
    pub password: String,
    /// Whole-request timeout applied by the HTTP client.
    pub timeout: Option<Duration>,
    /// Extra PEM-encoded root certificates to trust, for devices whose
    /// certificate chains to a CA missing from the platform store.
    pub root_certificates: Vec<Vec<u8>>,
}

impl ClientConfig {
    pub fn new(
        address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Read `ROS7API_ADDRESS`, `ROS7API_USERNAME` (default `admin`) and
    /// `ROS7API_PASSWORD` (default empty).
    pub fn from_env() -> Result<Self, TransportError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, TransportError> {
        let address = lookup(ENV_ADDRESS)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| TransportError::Config(format!("{ENV_ADDRESS} is not set")))?;
        let username = lookup(ENV_USERNAME).unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        let password = lookup(ENV_PASSWORD).unwrap_or_default();
        Ok(Self::new(address, username, password))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_root_certificate(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.root_certificates.push(pem.into());
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("root_certificates", &self.root_certificates.len())
            .finish()
    }
}
