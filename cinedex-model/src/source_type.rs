use std::fmt::{self, Display, Formatter};

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Distribution channel a [`Source`](crate::Source) belongs to.
///
/// The four well-known channels carry a fixed consolidation priority;
/// provider-defined channel names are preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceType {
    Free,
    TvEverywhere,
    Subscription,
    Purchase,
    Other(String),
}

impl SourceType {
    /// Wire name used as the snapshot bucket key.
    pub fn name(&self) -> &str {
        match self {
            SourceType::Free => "free",
            SourceType::TvEverywhere => "tvEverywhere",
            SourceType::Subscription => "subscription",
            SourceType::Purchase => "purchase",
            SourceType::Other(name) => name,
        }
    }

    /// Fixed ordering used by the consolidated projection:
    /// free < tvEverywhere < subscription < purchase < everything else.
    pub fn priority(&self) -> u8 {
        match self {
            SourceType::Free => 0,
            SourceType::TvEverywhere => 1,
            SourceType::Subscription => 2,
            SourceType::Purchase => 3,
            SourceType::Other(_) => 4,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "free" => SourceType::Free,
            "tvEverywhere" => SourceType::TvEverywhere,
            "subscription" => SourceType::Subscription,
            "purchase" => SourceType::Purchase,
            other => SourceType::Other(other.to_string()),
        }
    }
}

impl Display for SourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for SourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for SourceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name.is_empty() {
            return Err(de::Error::custom("source type cannot be empty"));
        }
        Ok(SourceType::from_name(&name))
    }
}
