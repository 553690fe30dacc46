use serde::{Deserialize, Serialize};

// Which family of variables a command targets. The three flags combine
// freely; `VarResource::from_scope` folds them into a single remote resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct VarScope {
    /// Select a configuration variable instead of an environment variable
    #[cfg_attr(feature = "clap", arg(short, long))]
    pub config: bool,

    /// Select a device-specific variable instead of an application variable
    #[cfg_attr(feature = "clap", arg(short, long))]
    pub device: bool,

    /// Select a service variable (may be used together with --device)
    #[cfg_attr(feature = "clap", arg(short, long))]
    pub service: bool,
}

/// Remote collection holding a variable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VarResource {
    #[serde(rename = "application_environment_variable")]
    ApplicationEnv,
    #[serde(rename = "application_config_variable")]
    ApplicationConfig,
    #[serde(rename = "device_environment_variable")]
    DeviceEnv,
    #[serde(rename = "device_config_variable")]
    DeviceConfig,
    #[serde(rename = "service_environment_variable")]
    ServiceEnv,
    #[serde(rename = "device_service_environment_variable")]
    DeviceServiceEnv,
}

impl VarResource {
    /// Every resource, in a stable order.
    pub const ALL: [Self; 6] = [
        Self::ApplicationEnv,
        Self::ApplicationConfig,
        Self::DeviceEnv,
        Self::DeviceConfig,
        Self::ServiceEnv,
        Self::DeviceServiceEnv,
    ];

    /// Resolve the resource selected by a flag combination.
    ///
    /// `config` wins over `service`; `device` narrows either one.
    #[must_use]
    pub const fn from_scope(scope: VarScope) -> Self {
        match (scope.device, scope.config, scope.service) {
            (false, false, false) => Self::ApplicationEnv,
            (false, true, _) => Self::ApplicationConfig,
            (false, false, true) => Self::ServiceEnv,
            (true, false, false) => Self::DeviceEnv,
            (true, true, _) => Self::DeviceConfig,
            (true, false, true) => Self::DeviceServiceEnv,
        }
    }

    /// Resource name as used in API paths.
    #[must_use]
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::ApplicationEnv => "application_environment_variable",
            Self::ApplicationConfig => "application_config_variable",
            Self::DeviceEnv => "device_environment_variable",
            Self::DeviceConfig => "device_config_variable",
            Self::ServiceEnv => "service_environment_variable",
            Self::DeviceServiceEnv => "device_service_environment_variable",
        }
    }

    #[must_use]
    pub const fn is_config(self) -> bool {
        matches!(self, Self::ApplicationConfig | Self::DeviceConfig)
    }
}

impl std::fmt::Display for VarResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.resource_name())
    }
}
