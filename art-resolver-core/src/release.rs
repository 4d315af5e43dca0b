use crate::refs::parse_tags;
use crate::version::clean;
use serde::{Deserialize, Serialize};

/// A resolvable target of a package.
///
/// `version` is present only when the tag is a valid semantic version;
/// non-semver tags stay listed so they can still be requested as targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub commit: String,
}

/// Turns a raw ref listing into version entries, in listing order.
///
/// No sorting or selection happens here, picking a version is the host's job.
pub fn extract_versions(response: &str) -> Vec<VersionEntry> {
    parse_tags(response)
        .into_iter()
        .map(|(name, commit)| VersionEntry {
            version: clean(&name),
            target: name,
            commit,
        })
        .collect()
}
