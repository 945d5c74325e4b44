//! Dependency plan handed to the build phase.
//!
//! Both lists are ordered and compared element-wise; downstream consumers and
//! the tests rely on `requires` always reading publish, SDK, runtime, then
//! the optional ASP.NET entry.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PUBLISH: &str = "publish";
pub const DOTNET_SDK: &str = "dotnet-sdk";
pub const DOTNET_RUNTIME: &str = "dotnet-runtime";
pub const DOTNET_ASPNET: &str = "dotnet-aspnet";

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Which phases a requirement must be present in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseMetadata {
    #[serde(default, skip_serializing_if = "is_false")]
    pub build: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub launch: bool,
}

impl PhaseMetadata {
    pub fn build() -> Self {
        Self {
            build: true,
            launch: false,
        }
    }

    pub fn build_and_launch() -> Self {
        Self {
            build: true,
            launch: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provided {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Required {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub metadata: PhaseMetadata,
}

impl Required {
    pub fn new(name: &str, version: Option<&str>, metadata: PhaseMetadata) -> Self {
        Self {
            name: name.to_string(),
            version: version.map(str::to_string),
            metadata,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DependencyPlan {
    #[serde(default)]
    pub provides: Vec<Provided>,
    #[serde(default)]
    pub requires: Vec<Required>,
}

impl DependencyPlan {
    /// Builds the plan for an application targeting `version`. The ASP.NET
    /// entry is appended after the runtime and never replaces it.
    pub fn for_framework(version: &str, uses_aspnet: bool) -> Self {
        let mut requires = vec![
            Required::new(PUBLISH, None, PhaseMetadata::build()),
            Required::new(DOTNET_SDK, Some(version), PhaseMetadata::build_and_launch()),
            Required::new(
                DOTNET_RUNTIME,
                Some(version),
                PhaseMetadata::build_and_launch(),
            ),
        ];

        if uses_aspnet {
            requires.push(Required::new(
                DOTNET_ASPNET,
                Some(version),
                PhaseMetadata::build_and_launch(),
            ));
        }

        Self {
            provides: vec![Provided {
                name: PUBLISH.to_string(),
            }],
            requires,
        }
    }

    pub fn requirement(&self, name: &str) -> Option<&Required> {
        self.requires.iter().find(|r| r.name == name)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize plan to TOML")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize plan to JSON")
    }
}

impl fmt::Display for DependencyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_toml() {
            Ok(toml) => write!(f, "{}", toml),
            Err(e) => write!(f, "Error formatting DependencyPlan: {}", e),
        }
    }
}
