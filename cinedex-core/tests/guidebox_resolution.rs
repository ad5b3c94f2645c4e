//! Exact-then-fuzzy title resolution against the path-addressed catalog.

mod support;

use std::sync::Arc;

use serde_json::json;

use cinedex_core::{Error, EpisodeQuery, GuideboxRepository, MovieRepository};
use cinedex_model::{MediaType, Movie};

use support::StubAdapter;

fn repository(adapter: &Arc<StubAdapter>) -> GuideboxRepository {
    GuideboxRepository::new(adapter.clone())
}

fn result_entry(id: u64, title: &str, year: u16) -> serde_json::Value {
    json!({"id": id, "title": title, "release_year": year})
}

#[tokio::test]
async fn exact_phase_picks_the_requested_year() {
    support::init_tracing();
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({"results": [
        result_entry(1, "Guardians of the Galaxy", 2017),
        result_entry(2, "Guardians of the Galaxy", 2014),
    ]}));

    let movie = repository(&adapter)
        .one_of_title("Guardians of the Galaxy", Some(2014))
        .await
        .unwrap();

    assert_eq!(movie.identity(), "2");
    assert_eq!(movie.year(), 2014);

    // the title path segment is triple-encoded, a quirk the catalog requires
    let requests = adapter.requests();
    assert_eq!(
        requests[0].path,
        "search/movie/title/Guardians%252520of%252520the%252520Galaxy/exact"
    );
}

#[tokio::test]
async fn exact_phase_accepts_a_first_aired_year() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({"results": [
        {"id": 9, "title": "Halt and Catch Fire", "release_year": 2013,
         "first_aired": "2014-06-01"},
    ]}));

    let movie = repository(&adapter)
        .one_of_title("Halt and Catch Fire", Some(2014))
        .await
        .unwrap();

    // matched through first_aired even though the built year is 2013
    assert_eq!(movie.identity(), "9");
    assert_eq!(movie.year(), 2013);
}

#[tokio::test]
async fn without_a_match_and_fuzzy_disabled_the_lookup_fails() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({"results": [
        result_entry(1, "Guardians of the Galaxy", 2017),
    ]}));

    let error = repository(&adapter)
        .one_of_title("Guardians of the Galaxy", Some(2014))
        .await
        .unwrap_err();

    assert!(matches!(error, Error::NotFound));
    // no second search is issued when the fallback is off
    assert_eq!(adapter.requests().len(), 1);
}

#[tokio::test]
async fn fuzzy_phase_requires_the_score_within_the_threshold() {
    let adapter = Arc::new(StubAdapter::new());
    // exact search misses, fuzzy search offers a candidate at distance 3
    adapter.push(json!({"results": []}));
    adapter.push(json!({"results": [
        result_entry(7, "Guardians of the Galaxy II", 2017),
    ]}));

    let mut repository = repository(&adapter);
    repository.try_fuzzy_on_fail().set_threshold(2);

    let error = repository
        .one_of_title("Guardians of the Galaxy", None)
        .await
        .unwrap_err();
    assert!(matches!(error, Error::NotFound));

    let requests = adapter.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].path.ends_with("/fuzzy"));
}

#[tokio::test]
async fn fuzzy_phase_accepts_a_score_equal_to_the_threshold() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({"results": []}));
    adapter.push(json!({"results": [
        result_entry(7, "Guardians of the Galaxy II", 2017),
    ]}));

    let mut repository = repository(&adapter);
    repository.try_fuzzy_on_fail().set_threshold(3);

    let movie = repository
        .one_of_title("Guardians of the Galaxy", None)
        .await
        .unwrap();
    assert_eq!(movie.identity(), "7");
}

#[tokio::test]
async fn fuzzy_winner_must_still_match_the_year() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({"results": []}));
    adapter.push(json!({"results": [
        result_entry(7, "Guardians of the Galaxy", 2017),
    ]}));

    let mut repository = repository(&adapter);
    repository.try_fuzzy_on_fail().set_threshold(5);

    let error = repository
        .one_of_title("Guardians of the Galaxy", Some(2014))
        .await
        .unwrap_err();
    assert!(matches!(error, Error::NotFound));
}

#[tokio::test]
async fn show_searches_drop_the_movie_path_segment() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({"results": [
        {"id": 3, "title": "Stranger Things", "release_year": 2016},
    ]}));

    let mut repository = repository(&adapter);
    repository.search_for_shows();
    let movie = repository.one_of_title("Stranger Things", None).await.unwrap();

    assert_eq!(movie.kind(), MediaType::TvShow);
    assert!(adapter.requests()[0].path.starts_with("search/title/"));
}

#[tokio::test]
async fn one_of_id_with_an_empty_payload_is_not_found() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({}));

    let error = repository(&adapter).one_of_id("15").await.unwrap_err();
    assert!(matches!(error, Error::NotFound));
}

#[tokio::test]
async fn episode_listings_attach_to_the_show() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({"results": [
        {"id": 55, "title": "Pilot", "first_aired": "2014-06-01",
         "season_number": 1, "episode_number": 1},
        {"id": 56, "title": "FUD", "first_aired": "2014-06-08",
         "season_number": 1, "episode_number": 2},
        // a repeated listing entry must not produce a duplicate child
        {"id": 55, "title": "Pilot", "first_aired": "2014-06-01",
         "season_number": 1, "episode_number": 1},
    ]}));

    let show = Movie::new("321", "Halt and Catch Fire", MediaType::TvShow, 2014);
    let query = EpisodeQuery {
        season: Some(1),
        ..EpisodeQuery::default()
    };

    let show = repository(&adapter)
        .many_episodes_of_show(show, "321", &query)
        .await
        .unwrap();

    let snapshot = show.snapshot();
    assert_eq!(snapshot.episodes.len(), 2);
    assert_eq!(snapshot.episodes[0].title, "Pilot");

    let requests = adapter.requests();
    assert_eq!(requests[0].path, "show/321/episodes/1/0/25/all/all/false");
    assert_eq!(
        requests[0].params,
        vec![("reverse_ordering".to_string(), "false".to_string())]
    );
}

#[tokio::test]
async fn change_feeds_follow_the_page_count() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({
        "total_pages": 2,
        "results": [{"id": 1, "changed_at": 1466000000u64}],
    }));
    adapter.push(json!({
        "total_pages": 2,
        "results": [{"id": 2, "changed_at": 1466000100u64}],
    }));

    let mut repository = repository(&adapter);
    repository.with_updated_movies();
    let entries = repository.many_with_changes(1465000000).await.unwrap();

    assert_eq!(entries.len(), 2);
    let requests = adapter.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].path, "updates/movies/changes/1465000000");
    assert_eq!(requests[1].params[1], ("page".to_string(), "2".to_string()));
}

#[tokio::test]
async fn the_bulk_listing_builds_every_result() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({"results": [
        result_entry(1, "Road House", 1989),
        result_entry(2, "Ghostbusters", 1984),
    ]}));

    let movies = repository(&adapter).many(0, 2).await.unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(adapter.requests()[0].path, "movie/all/0/2/all/all");
}
