use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::credits::{Cast, Crew};
use crate::poster::Poster;
use crate::snapshot::{bucket_sources, EpisodeSnapshot};
use crate::source::Source;
use crate::source_type::SourceType;

/// One aired unit of a show.
///
/// Identity is the composite of provider id, season and episode number,
/// rendered as a stable string key by [`Episode::identity`].
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    id: String,
    cast: Vec<Cast>,
    crew: Vec<Crew>,
    episode: u32,
    first_aired: Option<NaiveDate>,
    plot: Option<String>,
    posters: Vec<Poster>,
    season: u32,
    sources: Vec<Source>,
    title: String,
}

impl Episode {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        first_aired: Option<NaiveDate>,
        season: u32,
        episode: u32,
    ) -> Self {
        Self {
            id: id.into(),
            cast: Vec::new(),
            crew: Vec::new(),
            episode,
            first_aired,
            plot: None,
            posters: Vec::new(),
            season,
            sources: Vec::new(),
            title: title.into(),
        }
    }

    /// Stable identity key, e.g. `s01e05-1234`.
    pub fn identity(&self) -> String {
        format!("s{:02}e{:02}-{}", self.season, self.episode, self.id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_cast(
        &mut self,
        actor: impl Into<String>,
        character: impl Into<String>,
    ) -> &mut Self {
        let cast = Cast::new(actor, character);
        if !self.cast.contains(&cast) {
            self.cast.push(cast);
        }
        self
    }

    pub fn add_crew(
        &mut self,
        name: impl Into<String>,
        job: impl Into<String>,
        department: impl Into<String>,
    ) -> &mut Self {
        let crew = Crew::new(name, job, department);
        if !self.crew.contains(&crew) {
            self.crew.push(crew);
        }
        self
    }

    pub fn add_poster(
        &mut self,
        link: impl Into<String>,
        kind: impl Into<String>,
        width: u32,
        height: u32,
    ) -> &mut Self {
        let poster = Poster::new(link, kind, width, height);
        if !self.posters.contains(&poster) {
            self.posters.push(poster);
        }
        self
    }

    pub fn add_source(
        &mut self,
        kind: SourceType,
        name: impl Into<String>,
        link: impl Into<String>,
        details: Map<String, Value>,
    ) -> &mut Self {
        let source = Source::new(kind, name, link, details);
        if !self.sources.iter().any(|existing| existing.same_offer(&source)) {
            self.sources.push(source);
        }
        self
    }

    pub fn set_plot(&mut self, plot: impl Into<String>) -> &mut Self {
        self.plot = Some(plot.into());
        self
    }

    pub fn snapshot(&self) -> EpisodeSnapshot {
        EpisodeSnapshot {
            id: self.id.clone(),
            cast: self.cast.clone(),
            crew: self.crew.clone(),
            episode: self.episode,
            first_aired: self.first_aired,
            plot: self.plot.clone(),
            posters: self.posters.clone(),
            season: self.season,
            sources: bucket_sources(&self.sources),
            title: self.title.clone(),
        }
    }
}
