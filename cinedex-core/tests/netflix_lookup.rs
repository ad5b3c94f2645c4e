//! The single-endpoint streaming-search catalog: title lookup only.

mod support;

use std::sync::Arc;

use serde_json::json;

use cinedex_core::{Error, EpisodeQuery, MovieRepository, NetflixRepository};
use cinedex_model::{MediaType, Movie};

use support::StubAdapter;

fn repository(adapter: &Arc<StubAdapter>) -> NetflixRepository {
    NetflixRepository::new(adapter.clone())
}

#[tokio::test]
async fn title_lookup_pushes_the_year_to_the_provider() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({
        "show_id": 1234,
        "show_title": "Guardians of the Galaxy",
        "release_year": 2014,
        "mediatype": 0,
        "summary": "Superheros save the galaxy",
        "poster": "www.movieposters.com/guardians-of-the-galaxy",
    }));

    let movie = repository(&adapter)
        .one_of_title("Guardians of the Galaxy", Some(2014))
        .await
        .unwrap();

    assert_eq!(movie.identity(), "1234");
    assert_eq!(movie.year(), 2014);

    let request = &adapter.requests()[0];
    assert!(request
        .params
        .contains(&("title".to_string(), "Guardians of the Galaxy".to_string())));
    assert!(request
        .params
        .contains(&("year".to_string(), "2014".to_string())));
}

#[tokio::test]
async fn a_provider_error_code_is_not_found() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!({"errorcode": 404, "message": "unable to find show"}));

    let error = repository(&adapter)
        .one_of_title("Some Obscure Film", None)
        .await
        .unwrap_err();
    assert!(matches!(error, Error::NotFound));
}

#[tokio::test]
async fn a_null_payload_is_not_found() {
    let adapter = Arc::new(StubAdapter::new());
    adapter.push(json!(null));

    let error = repository(&adapter)
        .one_of_title("Some Obscure Film", None)
        .await
        .unwrap_err();
    assert!(matches!(error, Error::NotFound));
}

#[tokio::test]
async fn everything_else_is_unsupported() {
    let adapter = Arc::new(StubAdapter::new());
    let repository = repository(&adapter);

    assert!(matches!(
        repository.one_of_id("1234").await.unwrap_err(),
        Error::Unsupported(_)
    ));
    assert!(matches!(
        repository.many_with_title("x").await.unwrap_err(),
        Error::Unsupported(_)
    ));
    assert!(matches!(
        repository.many_with_title_like("x").await.unwrap_err(),
        Error::Unsupported(_)
    ));
    assert!(matches!(
        repository.many(0, 10).await.unwrap_err(),
        Error::Unsupported(_)
    ));
    let show = Movie::new("1", "Some Show", MediaType::TvShow, 2016);
    assert!(matches!(
        repository
            .many_episodes_of_show(show, "1", &EpisodeQuery::default())
            .await
            .unwrap_err(),
        Error::Unsupported(_)
    ));
    assert!(matches!(
        repository.many_with_changes(0).await.unwrap_err(),
        Error::Unsupported(_)
    ));

    // no request ever reached the adapter
    assert!(adapter.requests().is_empty());
}
