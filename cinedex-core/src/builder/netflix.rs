//! Builder for the minimal streaming-search provider.
//!
//! The catalog exposes a single title lookup with a handful of flat fields,
//! so there is far less to normalize than for the richer providers.

use serde::Deserialize;
use serde_json::Value;

use cinedex_model::{MediaType, Movie};

use crate::builder::{scalar_string, YearField};
use crate::error::{Error, Result};

pub(crate) const PROVIDER: &str = "Netflix";

#[derive(Debug, Clone, Deserialize)]
pub struct NetflixTitle {
    #[serde(default)]
    pub show_id: Option<Value>,
    #[serde(default)]
    pub show_title: Option<String>,
    #[serde(default)]
    pub release_year: Option<YearField>,
    #[serde(default)]
    pub mediatype: Option<i64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
}

pub fn build_movie(payload: &Value) -> Result<Movie> {
    let data: NetflixTitle = serde_json::from_value(payload.clone())
        .map_err(|_| Error::malformed(PROVIDER, "title payload"))?;

    let id = data
        .show_id
        .as_ref()
        .and_then(scalar_string)
        .ok_or_else(|| Error::malformed(PROVIDER, "show_id"))?;
    let title = data
        .show_title
        .clone()
        .filter(|title| !title.is_empty())
        .ok_or_else(|| Error::malformed(PROVIDER, "show_title"))?;
    let year = data
        .release_year
        .as_ref()
        .and_then(YearField::year)
        .ok_or_else(|| Error::malformed(PROVIDER, "release_year"))?;
    // mediatype 0 is a feature film, anything else is episodic
    let kind = if data.mediatype.unwrap_or(0) == 0 {
        MediaType::Movie
    } else {
        MediaType::TvShow
    };

    let mut movie = Movie::new(id.clone(), title, kind, year);
    movie.add_external_id(id, PROVIDER);

    if let Some(link) = data.poster.filter(|link| !link.is_empty()) {
        movie.add_poster(link, "poster", 0, 0);
    }
    if let Some(plot) = data.summary.filter(|plot| !plot.is_empty()) {
        movie.set_plot(plot);
    }

    Ok(movie)
}
