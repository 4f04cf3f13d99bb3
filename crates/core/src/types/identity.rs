use serde::{Deserialize, Serialize};
use std::fmt;

/// Maven coordinates of the build being inspected.
///
/// This is the only input package derivation looks at; everything else about
/// the project lives in [`ProjectContext`](super::ProjectContext).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildIdentity {
    pub artifact_id: String,
    pub group_id: String,
}

impl BuildIdentity {
    pub fn new(artifact_id: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            group_id: group_id.into(),
        }
    }
}

impl fmt::Display for BuildIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}
