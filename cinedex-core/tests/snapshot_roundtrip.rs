//! The snapshot projection is the serialization contract: rebuilding an
//! entity from its own snapshot must reproduce the snapshot exactly, through
//! JSON and back included.

use serde_json::{json, Map};

use cinedex_core::builder::snapshot::{episode_from_snapshot, movie_from_snapshot};
use cinedex_model::{Episode, MediaType, Movie, MovieSnapshot, SourceType};

fn details(pairs: &[(&str, &str)]) -> Map<String, serde_json::Value> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), json!(value)))
        .collect()
}

fn rich_movie() -> Movie {
    let mut movie = Movie::new("15", "Its party time", MediaType::TvShow, 2016);
    movie
        .add_alternate_title("NYP")
        .add_alternate_title("New Years Party")
        .set_budget(24_000_000)
        .add_cast("Joe", "Fred")
        .add_cast("Bob", "Soloman")
        .set_collection("Party Time")
        .add_crew("Susie", "writer", "writing")
        .add_crew("Elliot", "director", "directors")
        .add_director("Ivan Reitman")
        .add_director("Dick Clark")
        .add_external_id("asdf8124", "ASDF")
        .add_external_id("tt12341", "The Movie DB")
        .add_genre("Comedy")
        .add_genre("Drama")
        .set_homepage("www.partytime.com")
        .add_keyword("fake")
        .add_keyword("party")
        .add_language("English")
        .add_language("Klingon")
        .set_plot("NYE Party time")
        .add_poster("www.movieposter.com", "poster", 120, 120)
        .add_poster("www.othermovieposter.com", "banner", 300, 720)
        .add_production_company("Netflix")
        .add_production_company("Amazon")
        .add_production_country("USA")
        .add_production_country("Canada")
        .set_rating("PG-13")
        .set_revenue(50_000_000)
        .add_review("its good", "me", "www.me.com")
        .add_review("it sucks", "you", "www.you.com")
        .set_runtime(180)
        .add_source(
            SourceType::Subscription,
            "Netflix",
            "www.netflix.com",
            Map::new(),
        )
        .add_source(
            SourceType::Other("Paid".to_string()),
            "Amazon",
            "www.amazon.com",
            details(&[("price", "9.99")]),
        )
        .set_status("Published")
        .set_tagline("Get ready");

    let mut episode = Episode::new(
        "15",
        "Its party time",
        chrono::NaiveDate::from_ymd_opt(2016, 1, 1),
        1,
        1,
    );
    episode
        .add_cast("Joe", "Fred")
        .add_crew("Susie", "writer", "writing")
        .set_plot("New Years party")
        .add_poster("www.newyearsparty.com", "poster", 191, 120)
        .add_source(
            SourceType::Other("Paid".to_string()),
            "Amazon",
            "www.amazon.com",
            details(&[("price", "19.99")]),
        );
    movie.add_episode(episode);

    let mut recommendation = Movie::new("20", "Ghostbusters", MediaType::Movie, 2016);
    recommendation.set_plot("who you gonna call");
    movie.add_recommendation(recommendation);

    let mut similar = Movie::new("120", "Sing", MediaType::Movie, 2016);
    similar.set_plot("they sing");
    movie.add_similar_movie(similar);

    movie
}

#[test]
fn rebuilding_from_a_snapshot_reproduces_it() {
    let movie = rich_movie();
    let snapshot = movie.snapshot();

    let rebuilt = movie_from_snapshot(&snapshot);
    assert_eq!(rebuilt.snapshot(), snapshot);
}

#[test]
fn episode_rebuild_reproduces_its_snapshot() {
    let movie = rich_movie();
    let episode_snapshot = movie.snapshot().episodes.remove(0);

    let rebuilt = episode_from_snapshot(&episode_snapshot);
    assert_eq!(rebuilt.snapshot(), episode_snapshot);
}

#[test]
fn snapshots_survive_json_round_trips() {
    let snapshot = rich_movie().snapshot();

    let encoded = serde_json::to_string(&snapshot).unwrap();
    let decoded: MovieSnapshot = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, snapshot);

    // and the rebuilt entity still agrees after the wire trip
    assert_eq!(movie_from_snapshot(&decoded).snapshot(), snapshot);
}

#[test]
fn snapshots_use_the_documented_wire_names() {
    let value = serde_json::to_value(rich_movie().snapshot()).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

    for key in [
        "id",
        "alternateTitles",
        "budget",
        "cast",
        "collection",
        "crew",
        "directors",
        "episodes",
        "externalIds",
        "genres",
        "homepage",
        "keywords",
        "languages",
        "plot",
        "posters",
        "productionCompanies",
        "productionCountries",
        "rating",
        "recommendations",
        "revenue",
        "reviews",
        "runtime",
        "similarMovies",
        "sources",
        "status",
        "tagline",
        "title",
        "type",
        "year",
    ] {
        assert!(keys.contains(&key), "missing snapshot key {key}");
    }

    let episode = &value["episodes"][0];
    assert_eq!(episode["firstAired"], json!("2016-01-01"));
    assert_eq!(episode["sources"]["Paid"][0]["details"]["price"], json!("19.99"));
}

#[test]
fn consolidated_snapshot_flattens_with_the_same_payload() {
    let movie = rich_movie();
    let consolidated = movie.consolidated_snapshot();

    // subscription outranks the provider-defined "Paid" channel
    let kinds: Vec<&str> = consolidated
        .sources
        .iter()
        .map(|source| source.kind.name())
        .collect();
    assert_eq!(kinds, vec!["subscription", "Paid"]);

    // everything except the source shape matches the per-type snapshot
    let snapshot = movie.snapshot();
    assert_eq!(consolidated.id, snapshot.id);
    assert_eq!(consolidated.episodes, snapshot.episodes);
    assert_eq!(consolidated.recommendations, snapshot.recommendations);
    assert_eq!(consolidated.similar_movies, snapshot.similar_movies);
}
