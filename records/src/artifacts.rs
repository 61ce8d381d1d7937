use serde::{Deserialize, Serialize};

use crate::opaque::OpaqueValue;

/// Metadata for a restricted document attached to a passport.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictedArtifact {
    pub id: String,
    pub passport_id: Option<String>,
    pub title: String,
    pub kind: Option<String>,
    pub url: Option<String>,
    pub metadata: Option<OpaqueValue>,
    pub created_at: String,
}
