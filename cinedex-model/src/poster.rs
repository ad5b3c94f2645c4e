use serde::{Deserialize, Serialize};

/// Artwork reference. Width and height default to 0 when the catalog does not
/// report dimensions; uniqueness is full structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poster {
    pub link: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

impl Poster {
    pub fn new(link: impl Into<String>, kind: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            link: link.into(),
            kind: kind.into(),
            width,
            height,
        }
    }
}
