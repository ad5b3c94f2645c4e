//! Rehydration of persisted snapshots back into live entities.
//!
//! This is the structural inverse of the snapshot projection: for any movie
//! `m`, `movie_from_snapshot(&m.snapshot()).snapshot() == m.snapshot()`.

use cinedex_model::{Episode, EpisodeSnapshot, Movie, MovieSnapshot};

pub fn movie_from_snapshot(snapshot: &MovieSnapshot) -> Movie {
    let mut movie = Movie::new(
        snapshot.id.clone(),
        snapshot.title.clone(),
        snapshot.kind,
        snapshot.year,
    );

    for alternate_title in &snapshot.alternate_titles {
        movie.add_alternate_title(alternate_title.clone());
    }
    if let Some(budget) = snapshot.budget {
        movie.set_budget(budget);
    }
    for cast in &snapshot.cast {
        movie.add_cast(cast.actor.clone(), cast.character.clone());
    }
    if let Some(collection) = &snapshot.collection {
        movie.set_collection(collection.clone());
    }
    for crew in &snapshot.crew {
        movie.add_crew(crew.name.clone(), crew.job.clone(), crew.department.clone());
    }
    for director in &snapshot.directors {
        movie.add_director(director.clone());
    }
    for episode in &snapshot.episodes {
        movie.add_episode(episode_from_snapshot(episode));
    }
    for external_id in &snapshot.external_ids {
        movie.add_external_id(external_id.external_id.clone(), external_id.source.clone());
    }
    for genre in &snapshot.genres {
        movie.add_genre(genre.clone());
    }
    if let Some(homepage) = &snapshot.homepage {
        movie.set_homepage(homepage.clone());
    }
    for keyword in &snapshot.keywords {
        movie.add_keyword(keyword.clone());
    }
    for language in &snapshot.languages {
        movie.add_language(language.clone());
    }
    if let Some(plot) = &snapshot.plot {
        movie.set_plot(plot.clone());
    }
    for poster in &snapshot.posters {
        movie.add_poster(
            poster.link.clone(),
            poster.kind.clone(),
            poster.width,
            poster.height,
        );
    }
    for company in &snapshot.production_companies {
        movie.add_production_company(company.clone());
    }
    for country in &snapshot.production_countries {
        movie.add_production_country(country.clone());
    }
    if let Some(rating) = &snapshot.rating {
        movie.set_rating(rating.clone());
    }
    for recommendation in &snapshot.recommendations {
        movie.add_recommendation(movie_from_snapshot(recommendation));
    }
    if let Some(revenue) = snapshot.revenue {
        movie.set_revenue(revenue);
    }
    for review in &snapshot.reviews {
        movie.add_review(
            review.review.clone(),
            review.author.clone(),
            review.link.clone(),
        );
    }
    if let Some(runtime) = snapshot.runtime {
        movie.set_runtime(runtime);
    }
    for similar_movie in &snapshot.similar_movies {
        movie.add_similar_movie(movie_from_snapshot(similar_movie));
    }
    for bucket in snapshot.sources.values() {
        for source in bucket {
            movie.add_source(
                source.kind.clone(),
                source.name.clone(),
                source.link.clone(),
                source.details.clone(),
            );
        }
    }
    if let Some(status) = &snapshot.status {
        movie.set_status(status.clone());
    }
    if let Some(tagline) = &snapshot.tagline {
        movie.set_tagline(tagline.clone());
    }

    movie
}

pub fn episode_from_snapshot(snapshot: &EpisodeSnapshot) -> Episode {
    let mut episode = Episode::new(
        snapshot.id.clone(),
        snapshot.title.clone(),
        snapshot.first_aired,
        snapshot.season,
        snapshot.episode,
    );

    for cast in &snapshot.cast {
        episode.add_cast(cast.actor.clone(), cast.character.clone());
    }
    for crew in &snapshot.crew {
        episode.add_crew(crew.name.clone(), crew.job.clone(), crew.department.clone());
    }
    if let Some(plot) = &snapshot.plot {
        episode.set_plot(plot.clone());
    }
    for poster in &snapshot.posters {
        episode.add_poster(
            poster.link.clone(),
            poster.kind.clone(),
            poster.width,
            poster.height,
        );
    }
    for bucket in snapshot.sources.values() {
        for source in bucket {
            episode.add_source(
                source.kind.clone(),
                source.name.clone(),
                source.link.clone(),
                source.details.clone(),
            );
        }
    }

    episode
}
