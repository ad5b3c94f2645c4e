use serde_json::{Map, Value};

use crate::credits::{Cast, Crew};
use crate::episode::Episode;
use crate::external_id::ExternalId;
use crate::media_type::MediaType;
use crate::poster::Poster;
use crate::review::Review;
use crate::snapshot::{bucket_sources, consolidate_sources, ConsolidatedMovieSnapshot, MovieSnapshot};
use crate::source::Source;
use crate::source_type::SourceType;

/// The canonical aggregate every catalog payload is normalized into.
///
/// Identity is the provider-assigned id, which is only meaningful within the
/// provider that issued it; cross-provider correlation goes through
/// [`ExternalId`] entries instead. Mandatory fields (id, title, kind, year)
/// are set atomically at construction; everything else accretes through the
/// `add_*`/`set_*` mutators, all of which return `&mut Self` for chaining.
///
/// Every `add_*` on a value-object collection is a set-union insert: adding
/// an element that is structurally equal (under that field's uniqueness key)
/// to an existing one is a no-op, otherwise it appends, preserving insertion
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    id: String,
    alternate_titles: Vec<String>,
    budget: Option<u64>,
    cast: Vec<Cast>,
    collection: Option<String>,
    crew: Vec<Crew>,
    directors: Vec<String>,
    episodes: Vec<Episode>,
    external_ids: Vec<ExternalId>,
    genres: Vec<String>,
    homepage: Option<String>,
    keywords: Vec<String>,
    languages: Vec<String>,
    plot: Option<String>,
    posters: Vec<Poster>,
    production_companies: Vec<String>,
    production_countries: Vec<String>,
    rating: Option<String>,
    recommendations: Vec<Movie>,
    revenue: Option<u64>,
    reviews: Vec<Review>,
    runtime: Option<u32>,
    similar_movies: Vec<Movie>,
    sources: Vec<Source>,
    status: Option<String>,
    tagline: Option<String>,
    title: String,
    kind: MediaType,
    year: u16,
}

impl Movie {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: MediaType, year: u16) -> Self {
        Self {
            id: id.into(),
            alternate_titles: Vec::new(),
            budget: None,
            cast: Vec::new(),
            collection: None,
            crew: Vec::new(),
            directors: Vec::new(),
            episodes: Vec::new(),
            external_ids: Vec::new(),
            genres: Vec::new(),
            homepage: None,
            keywords: Vec::new(),
            languages: Vec::new(),
            plot: None,
            posters: Vec::new(),
            production_companies: Vec::new(),
            production_countries: Vec::new(),
            rating: None,
            recommendations: Vec::new(),
            revenue: None,
            reviews: Vec::new(),
            runtime: None,
            similar_movies: Vec::new(),
            sources: Vec::new(),
            status: None,
            tagline: None,
            title: title.into(),
            kind,
            year,
        }
    }

    /// The provider-assigned id.
    pub fn identity(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> MediaType {
        self.kind
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn alternate_titles(&self) -> &[String] {
        &self.alternate_titles
    }

    /// Deliberately loose identity test used for cross-provider matching:
    /// only title and year participate, never snapshots or provider ids.
    pub fn is_the_same_as(&self, other: &Movie) -> bool {
        self.title == other.title && self.year == other.year
    }

    pub fn has_source(&self, name: &str, kind: &SourceType) -> bool {
        self.sources
            .iter()
            .any(|source| source.kind == *kind && source.name == name)
    }

    pub fn add_alternate_title(&mut self, alternate_title: impl Into<String>) -> &mut Self {
        let alternate_title = alternate_title.into();
        if !self.alternate_titles.contains(&alternate_title) {
            self.alternate_titles.push(alternate_title);
        }
        self
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

    pub fn add_director(&mut self, director: impl Into<String>) -> &mut Self {
        let director = director.into();
        if !self.directors.contains(&director) {
            self.directors.push(director);
        }
        self
    }

    /// Dedupes on the episode's own identity key, not structural equality.
    pub fn add_episode(&mut self, episode: Episode) -> &mut Self {
        if !self
            .episodes
            .iter()
            .any(|existing| existing.identity() == episode.identity())
        {
            self.episodes.push(episode);
        }
        self
    }

    pub fn add_external_id(
        &mut self,
        external_id: impl Into<String>,
        source: impl Into<String>,
    ) -> &mut Self {
        let external_id = ExternalId::new(external_id, source);
        if !self.external_ids.contains(&external_id) {
            self.external_ids.push(external_id);
        }
        self
    }

    pub fn add_genre(&mut self, genre: impl Into<String>) -> &mut Self {
        let genre = genre.into();
        if !self.genres.contains(&genre) {
            self.genres.push(genre);
        }
        self
    }

    pub fn add_keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        let keyword = keyword.into();
        if !self.keywords.contains(&keyword) {
            self.keywords.push(keyword);
        }
        self
    }

    pub fn add_language(&mut self, language: impl Into<String>) -> &mut Self {
        let language = language.into();
        if !self.languages.contains(&language) {
            self.languages.push(language);
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

    pub fn add_production_company(&mut self, production_company: impl Into<String>) -> &mut Self {
        let production_company = production_company.into();
        if !self.production_companies.contains(&production_company) {
            self.production_companies.push(production_company);
        }
        self
    }

    pub fn add_production_country(&mut self, production_country: impl Into<String>) -> &mut Self {
        let production_country = production_country.into();
        if !self.production_countries.contains(&production_country) {
            self.production_countries.push(production_country);
        }
        self
    }

    /// Dedupes on the nested movie's identity.
    pub fn add_recommendation(&mut self, movie: Movie) -> &mut Self {
        if !self
            .recommendations
            .iter()
            .any(|existing| existing.identity() == movie.identity())
        {
            self.recommendations.push(movie);
        }
        self
    }

    pub fn add_review(
        &mut self,
        review: impl Into<String>,
        author: impl Into<String>,
        link: impl Into<String>,
    ) -> &mut Self {
        let review = Review::new(review, author, link);
        if !self.reviews.contains(&review) {
            self.reviews.push(review);
        }
        self
    }

    /// Dedupes on the nested movie's full snapshot.
    pub fn add_similar_movie(&mut self, similar_movie: Movie) -> &mut Self {
        let snapshot = similar_movie.snapshot();
        if !self
            .similar_movies
            .iter()
            .any(|existing| existing.snapshot() == snapshot)
        {
            self.similar_movies.push(similar_movie);
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

    pub fn set_budget(&mut self, budget: u64) -> &mut Self {
        self.budget = Some(budget);
        self
    }

    pub fn set_collection(&mut self, collection: impl Into<String>) -> &mut Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn set_homepage(&mut self, homepage: impl Into<String>) -> &mut Self {
        self.homepage = Some(homepage.into());
        self
    }

    pub fn set_plot(&mut self, plot: impl Into<String>) -> &mut Self {
        self.plot = Some(plot.into());
        self
    }

    pub fn set_rating(&mut self, rating: impl Into<String>) -> &mut Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn set_revenue(&mut self, revenue: u64) -> &mut Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn set_runtime(&mut self, runtime: u32) -> &mut Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn set_status(&mut self, status: impl Into<String>) -> &mut Self {
        self.status = Some(status.into());
        self
    }

    pub fn set_tagline(&mut self, tagline: impl Into<String>) -> &mut Self {
        self.tagline = Some(tagline.into());
        self
    }

    /// Project the aggregate, sources grouped per channel type.
    pub fn snapshot(&self) -> MovieSnapshot {
        MovieSnapshot {
            id: self.id.clone(),
            alternate_titles: self.alternate_titles.clone(),
            budget: self.budget,
            cast: self.cast.clone(),
            collection: self.collection.clone(),
            crew: self.crew.clone(),
            directors: self.directors.clone(),
            episodes: self.episodes.iter().map(Episode::snapshot).collect(),
            external_ids: self.external_ids.clone(),
            genres: self.genres.clone(),
            homepage: self.homepage.clone(),
            keywords: self.keywords.clone(),
            languages: self.languages.clone(),
            plot: self.plot.clone(),
            posters: self.posters.clone(),
            production_companies: self.production_companies.clone(),
            production_countries: self.production_countries.clone(),
            rating: self.rating.clone(),
            recommendations: self.recommendations.iter().map(Movie::snapshot).collect(),
            revenue: self.revenue,
            reviews: self.reviews.clone(),
            runtime: self.runtime,
            similar_movies: self.similar_movies.iter().map(Movie::snapshot).collect(),
            sources: bucket_sources(&self.sources),
            status: self.status.clone(),
            tagline: self.tagline.clone(),
            title: self.title.clone(),
            kind: self.kind,
            year: self.year,
        }
    }

    /// Project the aggregate with all source buckets flattened into one
    /// priority-ordered list.
    pub fn consolidated_snapshot(&self) -> ConsolidatedMovieSnapshot {
        ConsolidatedMovieSnapshot {
            id: self.id.clone(),
            alternate_titles: self.alternate_titles.clone(),
            budget: self.budget,
            cast: self.cast.clone(),
            collection: self.collection.clone(),
            crew: self.crew.clone(),
            directors: self.directors.clone(),
            episodes: self.episodes.iter().map(Episode::snapshot).collect(),
            external_ids: self.external_ids.clone(),
            genres: self.genres.clone(),
            homepage: self.homepage.clone(),
            keywords: self.keywords.clone(),
            languages: self.languages.clone(),
            plot: self.plot.clone(),
            posters: self.posters.clone(),
            production_companies: self.production_companies.clone(),
            production_countries: self.production_countries.clone(),
            rating: self.rating.clone(),
            recommendations: self.recommendations.iter().map(Movie::snapshot).collect(),
            revenue: self.revenue,
            reviews: self.reviews.clone(),
            runtime: self.runtime,
            similar_movies: self.similar_movies.iter().map(Movie::snapshot).collect(),
            sources: consolidate_sources(&self.sources),
            status: self.status.clone(),
            tagline: self.tagline.clone(),
            title: self.title.clone(),
            kind: self.kind,
            year: self.year,
        }
    }
}
