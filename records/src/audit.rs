use serde::{Deserialize, Serialize};

use crate::opaque::OpaqueValue;

/// One audit entry from `GET /audit`. Read-only on this side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditLog {
    pub id: String,
    pub actor: Option<String>,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<String>,
    pub details: Option<OpaqueValue>,
    pub created_at: String,
}
