//! Target framework and ASP.NET extraction from a project file.

use super::DetectFailure;
use roxmltree::{Document, Node};
use tracing::debug;

const MONIKER_PREFIX: &str = "netcoreapp";
const ASPNET_PACKAGE: &str = "Microsoft.AspNetCore.App";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub target_framework: String,
    pub framework_version: String,
    pub uses_aspnet: bool,
}

impl ProjectMetadata {
    /// Decodes raw project file bytes as UTF-8 and parses them. Content that
    /// is not UTF-8 cannot yield a moniker.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DetectFailure> {
        let content = std::str::from_utf8(bytes).map_err(|e| {
            debug!(error = %e, "Project file is not valid UTF-8");
            DetectFailure::FrameworkNotFound
        })?;
        Self::parse(content)
    }

    /// Parses project file content. Element names are matched by local name
    /// so MSBuild-namespaced documents work too.
    pub fn parse(content: &str) -> Result<Self, DetectFailure> {
        let content = content.trim_start_matches('\u{feff}');
        let doc = Document::parse(content).map_err(|_| DetectFailure::FrameworkNotFound)?;

        let target_framework = doc
            .descendants()
            .find(|n| is_element(n, "TargetFramework"))
            .map(|n| element_text(&n))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(DetectFailure::FrameworkNotFound)?;

        let framework_version = framework_version(&target_framework)?;

        let uses_aspnet = doc.descendants().any(|n| {
            is_element(&n, "PackageReference")
                && n.attribute("Include")
                    .is_some_and(|name| name.starts_with(ASPNET_PACKAGE))
        });

        Ok(Self {
            target_framework,
            framework_version,
            uses_aspnet,
        })
    }
}

fn is_element(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// All text under `node`, skipping comments and processing instructions.
fn element_text(node: &Node) -> String {
    node.descendants()
        .filter(|d| d.is_text())
        .filter_map(|d| d.text())
        .collect()
}

/// `netcoreappX.Y` becomes `X.Y.0`; every other moniker shape is rejected.
pub fn framework_version(moniker: &str) -> Result<String, DetectFailure> {
    let unsupported = || DetectFailure::UnsupportedFramework(moniker.to_string());

    let (major, minor) = moniker
        .strip_prefix(MONIKER_PREFIX)
        .and_then(|v| v.split_once('.'))
        .ok_or_else(unsupported)?;

    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_number(major) || !is_number(minor) {
        return Err(unsupported());
    }

    Ok(format!("{}.{}.0", major, minor))
}
