use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::source_type::SourceType;

/// One place a title can be watched, bought or streamed.
///
/// `details` is an open key/value bag whose shape is provider-defined
/// (formats, prices, platform hints) and deliberately not typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub details: Map<String, Value>,
    pub link: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SourceType,
}

impl Source {
    pub fn new(
        kind: SourceType,
        name: impl Into<String>,
        link: impl Into<String>,
        details: Map<String, Value>,
    ) -> Self {
        Self {
            details,
            link: link.into(),
            name: name.into(),
            kind,
        }
    }

    /// Uniqueness key: (type, name, link). `details` never participates.
    pub fn same_offer(&self, other: &Source) -> bool {
        self.kind == other.kind && self.name == other.name && self.link == other.link
    }
}
