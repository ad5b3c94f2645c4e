//! Order-stable projections of the entity model.
//!
//! A snapshot is the fully-materialized form of an entity: every field, every
//! child, recursively. Two entities are the same recorded data iff their
//! snapshots are deeply equal, and the snapshot shape doubles as the wire
//! format downstream callers and the rehydrating builder depend on.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::credits::{Cast, Crew};
use crate::external_id::ExternalId;
use crate::media_type::MediaType;
use crate::poster::Poster;
use crate::review::Review;
use crate::source::Source;

/// Projection of a [`Movie`](crate::Movie), sources grouped by channel type.
///
/// Each type bucket is sorted case-insensitively by source name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSnapshot {
    pub id: String,
    pub alternate_titles: Vec<String>,
    pub budget: Option<u64>,
    pub cast: Vec<Cast>,
    pub collection: Option<String>,
    pub crew: Vec<Crew>,
    pub directors: Vec<String>,
    pub episodes: Vec<EpisodeSnapshot>,
    pub external_ids: Vec<ExternalId>,
    pub genres: Vec<String>,
    pub homepage: Option<String>,
    pub keywords: Vec<String>,
    pub languages: Vec<String>,
    pub plot: Option<String>,
    pub posters: Vec<Poster>,
    pub production_companies: Vec<String>,
    pub production_countries: Vec<String>,
    pub rating: Option<String>,
    pub recommendations: Vec<MovieSnapshot>,
    pub revenue: Option<u64>,
    pub reviews: Vec<Review>,
    pub runtime: Option<u32>,
    pub similar_movies: Vec<MovieSnapshot>,
    pub sources: BTreeMap<String, Vec<Source>>,
    pub status: Option<String>,
    pub tagline: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaType,
    pub year: u16,
}

/// Projection of an [`Episode`](crate::Episode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeSnapshot {
    pub id: String,
    pub cast: Vec<Cast>,
    pub crew: Vec<Crew>,
    pub episode: u32,
    pub first_aired: Option<NaiveDate>,
    pub plot: Option<String>,
    pub posters: Vec<Poster>,
    pub season: u32,
    pub sources: BTreeMap<String, Vec<Source>>,
    pub title: String,
}

/// Like [`MovieSnapshot`] but with the source collection flattened into one
/// list ordered by channel priority (free, tvEverywhere, subscription,
/// purchase, then provider-defined types), name as the tiebreak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedMovieSnapshot {
    pub id: String,
    pub alternate_titles: Vec<String>,
    pub budget: Option<u64>,
    pub cast: Vec<Cast>,
    pub collection: Option<String>,
    pub crew: Vec<Crew>,
    pub directors: Vec<String>,
    pub episodes: Vec<EpisodeSnapshot>,
    pub external_ids: Vec<ExternalId>,
    pub genres: Vec<String>,
    pub homepage: Option<String>,
    pub keywords: Vec<String>,
    pub languages: Vec<String>,
    pub plot: Option<String>,
    pub posters: Vec<Poster>,
    pub production_companies: Vec<String>,
    pub production_countries: Vec<String>,
    pub rating: Option<String>,
    pub recommendations: Vec<MovieSnapshot>,
    pub revenue: Option<u64>,
    pub reviews: Vec<Review>,
    pub runtime: Option<u32>,
    pub similar_movies: Vec<MovieSnapshot>,
    pub sources: Vec<Source>,
    pub status: Option<String>,
    pub tagline: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaType,
    pub year: u16,
}

pub(crate) fn bucket_sources(sources: &[Source]) -> BTreeMap<String, Vec<Source>> {
    let mut buckets: BTreeMap<String, Vec<Source>> = BTreeMap::new();
    for source in sources {
        buckets
            .entry(source.kind.name().to_string())
            .or_default()
            .push(source.clone());
    }
    for bucket in buckets.values_mut() {
        bucket.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }
    buckets
}

pub(crate) fn consolidate_sources(sources: &[Source]) -> Vec<Source> {
    let mut consolidated = sources.to_vec();
    // stable sort keeps insertion order for offers that tie on both keys
    consolidated.sort_by(|a, b| {
        a.kind
            .priority()
            .cmp(&b.kind.priority())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    consolidated
}
