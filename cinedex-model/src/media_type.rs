use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Simple enum for the two canonical entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    /// A feature film.
    #[serde(rename = "movie")]
    Movie,
    /// A television show (the aggregate that owns episodes).
    #[serde(rename = "tvshow")]
    TvShow,
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::TvShow => write!(f, "tvshow"),
        }
    }
}

/// Error for media type strings no catalog maps onto `movie`/`tvshow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMediaTypeError(pub String);

impl Display for ParseMediaTypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown media type: {}", self.0)
    }
}

impl std::error::Error for ParseMediaTypeError {}

impl FromStr for MediaType {
    type Err = ParseMediaTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // catalogs disagree on the label for episodic content
        match value {
            "movie" => Ok(MediaType::Movie),
            "tvshow" | "show" | "series" | "episode" | "tv" => Ok(MediaType::TvShow),
            other => Err(ParseMediaTypeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_labels() {
        assert_eq!("movie".parse::<MediaType>().unwrap(), MediaType::Movie);
        assert_eq!("series".parse::<MediaType>().unwrap(), MediaType::TvShow);
        assert_eq!("tv".parse::<MediaType>().unwrap(), MediaType::TvShow);
        assert!("radio".parse::<MediaType>().is_err());
    }

    #[test]
    fn serializes_to_wire_names() {
        assert_eq!(serde_json::to_string(&MediaType::TvShow).unwrap(), "\"tvshow\"");
    }
}
