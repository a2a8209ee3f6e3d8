use serde::Deserialize;

use crate::error::DeployError;

/// Target database host, taken from CLI flags or the `rdsHost` resource
/// property (a cluster-endpoint object; extra fields such as
/// `socketAddress` are ignored).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostInfo {
    #[serde(default)]
    pub hostname: String,
    #[serde(default, deserialize_with = "lenient_port")]
    pub port: u16,
}

impl HostInfo {
    pub fn new(hostname: impl Into<String>, port: u16) -> Result<Self, DeployError> {
        let info = Self {
            hostname: hostname.into(),
            port,
        };
        info.validate()?;
        Ok(info)
    }

    /// Checks fields in declaration order and reports the first missing one.
    /// Safe to call again after deserialization.
    pub fn validate(&self) -> Result<(), DeployError> {
        require_string("hostname", &self.hostname)?;
        require_port("port", self.port)
    }
}

/// Administrative credentials for the database host, in the managed admin
/// secret payload format.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminSecret {
    #[serde(default)]
    pub host: String,
    #[serde(default, deserialize_with = "lenient_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl AdminSecret {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, DeployError> {
        let secret = Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
        };
        secret.validate()?;
        Ok(secret)
    }

    pub fn validate(&self) -> Result<(), DeployError> {
        require_string("host", &self.host)?;
        require_port("port", self.port)?;
        require_string("username", &self.username)?;
        require_string("password", &self.password)
    }
}

/// The application database to provision and the least-privilege user to
/// create for it, in the generated app secret payload format.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSecret {
    #[serde(default)]
    pub database_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl AppSecret {
    pub fn new(
        database_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, DeployError> {
        let secret = Self {
            database_name: database_name.into(),
            username: username.into(),
            password: password.into(),
        };
        secret.validate()?;
        Ok(secret)
    }

    pub fn validate(&self) -> Result<(), DeployError> {
        require_string("databaseName", &self.database_name)?;
        require_string("username", &self.username)?;
        require_string("password", &self.password)
    }
}

/// CloudFormation stringifies scalar resource-property values, so a port can
/// arrive as either a JSON number or a numeric string.
fn lenient_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortRepr {
        Number(u16),
        Text(String),
    }

    match PortRepr::deserialize(deserializer)? {
        PortRepr::Number(port) => Ok(port),
        PortRepr::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

fn require_string(field: &'static str, value: &str) -> Result<(), DeployError> {
    if value.is_empty() {
        return Err(DeployError::missing_field(field));
    }
    Ok(())
}

fn require_port(field: &'static str, port: u16) -> Result<(), DeployError> {
    if port < 1 {
        return Err(DeployError::missing_field(field));
    }
    Ok(())
}
