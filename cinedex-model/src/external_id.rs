use serde::{Deserialize, Serialize};

/// Identifier a movie carries in some other catalog, kept so entities built
/// from different providers can be correlated downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalId {
    pub external_id: String,
    pub source: String,
}

impl ExternalId {
    pub fn new(external_id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            source: source.into(),
        }
    }
}
