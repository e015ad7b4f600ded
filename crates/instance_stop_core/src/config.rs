pub const REGION_VAR: &str = "AWS_REGION";
pub const INSTANCE_ID_VAR: &str = "INSTANCE_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Process-wide configuration, read once at startup and passed into the
/// handler by reference. The target instance and its region are fixed for
/// the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopperConfig {
    pub region: String,
    pub instance_id: String,
}

impl StopperConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let region = required_value(&lookup, REGION_VAR)?;
        let instance_id = required_value(&lookup, INSTANCE_ID_VAR)?;

        Ok(Self { region, instance_id })
    }

    /// The instance-identifier list handed to the stop operation. Always a
    /// single element.
    pub fn instance_ids(&self) -> Vec<String> {
        vec![self.instance_id.clone()]
    }
}

fn required_value<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::new(format!("{name} must be configured"))),
    }
}
