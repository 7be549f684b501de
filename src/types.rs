//! Strongly typed inputs for endpoint construction.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::consts;

macro_rules! string_newtype {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    };
}

string_newtype! {
    /// Deployment platform substituted into the API host name (`www` for
    /// production, `api` style sandboxes for test gateways).
    Platform
}

string_newtype! {
    /// API version segment substituted into the URL path (`v1`, `v2`, ...).
    ApiVersion
}

string_newtype! {
    /// Connector-side transaction identifier
    TransactionId
}

string_newtype! {
    /// Payment profile identifier
    ProfileId
}

string_newtype! {
    /// Card identifier within a payment profile
    CardId
}

impl Default for Platform {
    fn default() -> Self {
        Self(consts::DEFAULT_PLATFORM.to_string())
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(consts::DEFAULT_VERSION.to_string())
    }
}

/// Platform/version pair, deserialized from service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub version: ApiVersion,
}
