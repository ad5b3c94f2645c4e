//! Builder for the general film-database provider.
//!
//! Field names are capitalized on the wire and absent values hide behind a
//! literal `"N/A"` sentinel instead of being omitted.

use serde::Deserialize;
use serde_json::Value;

use cinedex_model::{MediaType, Movie};

use crate::builder::{scalar_string, YearField};
use crate::error::{Error, Result};

pub(crate) const PROVIDER: &str = "OMDB";

const ABSENT: &str = "N/A";

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbMovie {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<Value>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<YearField>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

pub fn build_movie(payload: &Value) -> Result<Movie> {
    let data: OmdbMovie = serde_json::from_value(payload.clone())
        .map_err(|_| Error::malformed(PROVIDER, "movie payload"))?;

    let id = data
        .imdb_id
        .as_ref()
        .and_then(scalar_string)
        .ok_or_else(|| Error::malformed(PROVIDER, "imdbID"))?;
    let title = data
        .title
        .clone()
        .filter(|title| !title.is_empty())
        .ok_or_else(|| Error::malformed(PROVIDER, "Title"))?;
    let kind: MediaType = data
        .kind
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| Error::malformed(PROVIDER, "Type"))?;
    let year = data
        .year
        .as_ref()
        .and_then(YearField::year)
        .ok_or_else(|| Error::malformed(PROVIDER, "Year"))?;

    let mut movie = Movie::new(id.clone(), title, kind, year);
    movie.add_external_id(id, PROVIDER);

    if let Some(link) = data.poster.filter(|link| !link.is_empty() && link != ABSENT) {
        movie.add_poster(link, "poster", 0, 0);
    }
    if let Some(plot) = data.plot.filter(|plot| !plot.is_empty() && plot != ABSENT) {
        movie.set_plot(plot);
    }

    Ok(movie)
}
