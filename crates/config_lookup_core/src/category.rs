use std::fmt;

pub const PROFILES_PREFIX: &str = "/config/profiles";
pub const CONFIGURATIONS_PREFIX: &str = "/config/cluster-configurations";
pub const FUNCTIONS_PREFIX: &str = "/config/launch-functions";

/// Resource family served by one list handler and one get handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Profile,
    Configuration,
    Function,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Profile, Self::Configuration, Self::Function];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profiles",
            Self::Configuration => "configurations",
            Self::Function => "functions",
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Profile => PROFILES_PREFIX,
            Self::Configuration => CONFIGURATIONS_PREFIX,
            Self::Function => FUNCTIONS_PREFIX,
        }
    }

    /// Key wrapping the document array in list responses.
    pub fn collection_key(self) -> &'static str {
        match self {
            Self::Profile => "EMRProfiles",
            Self::Configuration => "ClusterConfigurations",
            Self::Function => "EMRLaunchFunctions",
        }
    }

    /// Request field holding the document name for get requests.
    pub fn name_field(self) -> &'static str {
        match self {
            Self::Profile => "ProfileName",
            Self::Configuration => "ConfigurationName",
            Self::Function => "FunctionName",
        }
    }

    pub fn not_found_label(self) -> &'static str {
        match self {
            Self::Profile => "ProfileNotFound",
            Self::Configuration => "ConfigurationNotFound",
            Self::Function => "FunctionNotFound",
        }
    }

    pub fn not_found_kind(self) -> &'static str {
        match self {
            Self::Profile => "EMRProfileNotFoundError",
            Self::Configuration => "ClusterConfigurationNotFoundError",
            Self::Function => "EMRLaunchFunctionNotFoundError",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
