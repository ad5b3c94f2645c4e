//! Builders for the catalog/streaming-availability provider.

use serde::Deserialize;
use serde_json::{Map, Value};

use cinedex_model::{Episode, MediaType, Movie, SourceType};

use crate::builder::{parse_date, scalar_string, year_of_date, YearField};
use crate::error::{Error, Result};

pub(crate) const PROVIDER: &str = "Guidebox";

/// Movie/show payload returned by the detail, search and listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuideboxMovie {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_year: Option<YearField>,
    #[serde(default)]
    pub first_aired: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub poster_120x171: Option<String>,
    #[serde(default)]
    pub artwork_208x117: Option<String>,
    #[serde(default)]
    pub alternate_titles: Vec<String>,
    #[serde(default)]
    pub cast: Vec<GuideboxCast>,
    #[serde(default)]
    pub directors: Vec<GuideboxPerson>,
    #[serde(default)]
    pub themoviedb: Option<Value>,
    #[serde(default)]
    pub imdb: Option<Value>,
    #[serde(default)]
    pub rottentomatoes: Option<Value>,
    #[serde(default)]
    pub wikipedia_id: Option<Value>,
    #[serde(default)]
    pub free_web_sources: Vec<WebSource>,
    #[serde(default)]
    pub tv_everywhere_web_sources: Vec<WebSource>,
    #[serde(default)]
    pub subscription_web_sources: Vec<WebSource>,
    #[serde(default)]
    pub purchase_web_sources: Vec<WebSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuideboxCast {
    pub name: String,
    #[serde(default)]
    pub character_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuideboxPerson {
    pub name: String,
}

/// One streaming/purchase offer inside a `*_web_sources` bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct WebSource {
    pub display_name: String,
    pub link: String,
    #[serde(default)]
    pub formats: Vec<Value>,
}

/// Episode payload from the show episode listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GuideboxEpisode {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub first_aired: Option<String>,
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub episode_number: Option<u32>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub thumbnail_208x117: Option<String>,
    #[serde(default)]
    pub free_web_sources: Vec<WebSource>,
    #[serde(default)]
    pub tv_everywhere_web_sources: Vec<WebSource>,
    #[serde(default)]
    pub subscription_web_sources: Vec<WebSource>,
    #[serde(default)]
    pub purchase_web_sources: Vec<WebSource>,
}

pub fn build_movie(payload: &Value, kind: MediaType) -> Result<Movie> {
    let data: GuideboxMovie = serde_json::from_value(payload.clone())
        .map_err(|_| Error::malformed(PROVIDER, "movie payload"))?;

    let id = data
        .id
        .as_ref()
        .and_then(scalar_string)
        .ok_or_else(|| Error::malformed(PROVIDER, "id"))?;
    let title = data
        .title
        .clone()
        .filter(|title| !title.is_empty())
        .ok_or_else(|| Error::malformed(PROVIDER, "title"))?;
    let year = data
        .release_year
        .as_ref()
        .and_then(YearField::year)
        .or_else(|| data.first_aired.as_deref().and_then(year_of_date))
        .or_else(|| data.release_date.as_deref().and_then(year_of_date))
        .ok_or_else(|| Error::malformed(PROVIDER, "release year"))?;

    let mut movie = Movie::new(id.clone(), title, kind, year);
    movie.add_external_id(id, PROVIDER);

    if let Some(plot) = data.overview.filter(|plot| !plot.is_empty()) {
        movie.set_plot(plot);
    }
    if let Some(rating) = data.rating.filter(|rating| !rating.is_empty()) {
        movie.set_rating(rating);
    }
    if let Some(link) = data.poster_120x171.filter(|link| !link.is_empty()) {
        movie.add_poster(link, "poster", 120, 171);
    } else if let Some(link) = data.artwork_208x117.filter(|link| !link.is_empty()) {
        movie.add_poster(link, "artwork", 208, 117);
    }

    for alternate_title in data.alternate_titles {
        movie.add_alternate_title(alternate_title);
    }
    for cast in data.cast {
        movie.add_cast(cast.name, cast.character_name);
    }
    for director in data.directors {
        movie.add_director(director.name);
    }

    let cross_references = [
        (data.themoviedb.as_ref(), "The Movie DB"),
        (data.imdb.as_ref(), "IMDB"),
        (data.rottentomatoes.as_ref(), "Rotten Tomatoes"),
        (data.wikipedia_id.as_ref(), "Wikipedia"),
    ];
    for (value, source) in cross_references {
        if let Some(external_id) = value.and_then(scalar_string) {
            movie.add_external_id(external_id, source);
        }
    }

    let buckets = [
        (SourceType::Free, data.free_web_sources),
        (SourceType::TvEverywhere, data.tv_everywhere_web_sources),
        (SourceType::Subscription, data.subscription_web_sources),
        (SourceType::Purchase, data.purchase_web_sources),
    ];
    for (source_type, sources) in buckets {
        for source in sources {
            movie.add_source(
                source_type.clone(),
                source.display_name,
                source.link,
                source_details(source.formats),
            );
        }
    }

    Ok(movie)
}

pub fn build_episode(payload: &Value) -> Result<Episode> {
    let data: GuideboxEpisode = serde_json::from_value(payload.clone())
        .map_err(|_| Error::malformed(PROVIDER, "episode payload"))?;

    let id = data
        .id
        .as_ref()
        .and_then(scalar_string)
        .ok_or_else(|| Error::malformed(PROVIDER, "id"))?;
    let title = data
        .title
        .clone()
        .filter(|title| !title.is_empty())
        .ok_or_else(|| Error::malformed(PROVIDER, "title"))?;
    let season = data
        .season_number
        .ok_or_else(|| Error::malformed(PROVIDER, "season_number"))?;
    let episode_number = data
        .episode_number
        .ok_or_else(|| Error::malformed(PROVIDER, "episode_number"))?;
    let first_aired = data.first_aired.as_deref().and_then(parse_date);

    let mut episode = Episode::new(id, title, first_aired, season, episode_number);

    if let Some(plot) = data.overview.filter(|plot| !plot.is_empty()) {
        episode.set_plot(plot);
    }
    if let Some(link) = data.thumbnail_208x117.filter(|link| !link.is_empty()) {
        episode.add_poster(link, "thumbnail", 208, 117);
    }

    let buckets = [
        (SourceType::Free, data.free_web_sources),
        (SourceType::TvEverywhere, data.tv_everywhere_web_sources),
        (SourceType::Subscription, data.subscription_web_sources),
        (SourceType::Purchase, data.purchase_web_sources),
    ];
    for (source_type, sources) in buckets {
        for source in sources {
            episode.add_source(
                source_type.clone(),
                source.display_name,
                source.link,
                source_details(source.formats),
            );
        }
    }

    Ok(episode)
}

/// The offer's `formats` list survives inside the open details bag.
fn source_details(formats: Vec<Value>) -> Map<String, Value> {
    let mut details = Map::new();
    if !formats.is_empty() {
        details.insert("formats".to_string(), Value::Array(formats));
    }
    details
}
