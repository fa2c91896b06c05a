// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs;

use serde_json::{Value, json};
use tempfile::TempDir;
use warp::{Filter as _, http::StatusCode, test::request};

use medialib_backend_embedded::storage::commission_storage;
use medialib_storage_fs::{Config as StorageConfig, storage::SONGS_FILE_NAME};
use medialib_websrv_warp::handle_rejection;

use super::*;

type TestResult<T> = anyhow::Result<T>;

struct Fixture {
    _data_dir: TempDir,
    service: LibraryService,
}

impl Fixture {
    fn new() -> TestResult<Self> {
        let data_dir = tempfile::tempdir()?;
        let songs = json!([
            { "id": 3, "title": "Roads", "artist": "Portishead", "album": "Dummy", "duration": 305 },
            { "id": 7, "title": "Teardrop", "artist": "Massive Attack", "album": "Mezzanine", "duration": 330 },
            { "id": 9, "title": "Angel", "artist": "Massive Attack", "album": "Mezzanine", "duration": 379 },
        ]);
        fs::write(
            data_dir.path().join(SONGS_FILE_NAME),
            serde_json::to_vec(&songs)?,
        )?;
        let gatekeeper = commission_storage(&StorageConfig {
            data_dir: data_dir.path().to_path_buf(),
            gatekeeper: Default::default(),
        })?;
        Ok(Self {
            _data_dir: data_dir,
            service: LibraryService::new(gatekeeper),
        })
    }
}

fn routes(service: LibraryService) -> BoxedFilter<(impl Reply,)> {
    create_filters(service).recover(handle_rejection).boxed()
}

fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("JSON")
}

#[tokio::test]
async fn get_library() -> TestResult<()> {
    let fixture = Fixture::new()?;
    let filters = routes(fixture.service.clone());

    let response = request().path("/library").reply(&filters).await;
    assert_eq!(StatusCode::OK, response.status());
    let titles = json_body(response.body())
        .as_array()
        .expect("array")
        .iter()
        .map(|song| song["title"].clone())
        .collect::<Vec<_>>();
    assert_eq!(vec![json!("Roads"), json!("Teardrop"), json!("Angel")], titles);

    let response = request().path("/library/7").reply(&filters).await;
    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(
        json!({ "id": 7, "title": "Teardrop", "artist": "Massive Attack", "album": "Mezzanine", "duration": 330 }),
        json_body(response.body())
    );
    Ok(())
}

#[tokio::test]
async fn get_missing_song() -> TestResult<()> {
    let fixture = Fixture::new()?;
    let response = request()
        .path("/library/42")
        .reply(&routes(fixture.service.clone()))
        .await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
    assert_eq!(json!(404), json_body(response.body())["code"]);
    Ok(())
}

#[tokio::test]
async fn create_then_get_playlist() -> TestResult<()> {
    let fixture = Fixture::new()?;
    let filters = routes(fixture.service.clone());

    let response = request()
        .method("POST")
        .path("/playlist")
        .json(&json!({ "name": "Road Trip", "songs": [3, 7, 9] }))
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::OK, response.status());
    let id = json_body(response.body())["id"].as_u64().expect("id");

    let response = request()
        .path(&format!("/playlist/{id}"))
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(
        json!({ "id": id, "name": "Road Trip", "songs": [3, 7, 9] }),
        json_body(response.body())
    );
    Ok(())
}

#[tokio::test]
async fn update_and_delete_playlist() -> TestResult<()> {
    let fixture = Fixture::new()?;
    let filters = routes(fixture.service.clone());

    for name in ["First", "Second"] {
        let response = request()
            .method("POST")
            .path("/playlist")
            .json(&json!({ "name": name, "songs": [3] }))
            .reply(&filters)
            .await;
        assert_eq!(StatusCode::OK, response.status());
    }

    // Songs are optional and replaced by an empty list
    let response = request()
        .method("POST")
        .path("/playlist/2")
        .json(&json!({ "name": "Renamed" }))
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(json!({ "id": 2 }), json_body(response.body()));

    let response = request().path("/playlist").reply(&filters).await;
    assert_eq!(
        json!([
            { "id": 1, "name": "First", "songs": [3] },
            { "id": 2, "name": "Renamed", "songs": [] },
        ]),
        json_body(response.body())
    );

    for _ in 0..2 {
        let response = request()
            .method("DELETE")
            .path("/playlist/1")
            .reply(&filters)
            .await;
        assert_eq!(StatusCode::OK, response.status());
        assert_eq!(json!({}), json_body(response.body()));
    }

    let response = request().path("/playlist/1").reply(&filters).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
    Ok(())
}

#[tokio::test]
async fn reject_invalid_playlist() -> TestResult<()> {
    let fixture = Fixture::new()?;
    let filters = routes(fixture.service.clone());

    for request_body in [json!({ "name": "", "songs": [3] }), json!({ "songs": [3] })] {
        let response = request()
            .method("POST")
            .path("/playlist")
            .json(&request_body)
            .reply(&filters)
            .await;
        assert_eq!(StatusCode::BAD_REQUEST, response.status());
        assert_eq!(json!(400), json_body(response.body())["code"]);
    }

    let response = request().path("/playlist").reply(&filters).await;
    assert_eq!(json!([]), json_body(response.body()));
    Ok(())
}

#[tokio::test]
async fn graphql_queries() -> TestResult<()> {
    let fixture = Fixture::new()?;
    let schema = graphql::build_schema(fixture.service.clone());

    let response = schema.execute("{ getSongs { id title } }").await;
    assert!(response.errors.is_empty());
    assert_eq!(
        json!({ "getSongs": [
            { "id": 3, "title": "Roads" },
            { "id": 7, "title": "Teardrop" },
            { "id": 9, "title": "Angel" },
        ] }),
        response.data.into_json()?
    );

    let response = schema
        .execute("{ getSongById(SongId: 9) { artist duration } }")
        .await;
    assert!(response.errors.is_empty());
    assert_eq!(
        json!({ "getSongById": { "artist": "Massive Attack", "duration": 379 } }),
        response.data.into_json()?
    );

    let response = schema
        .execute("{ getSongById(SongId: 42) { title } }")
        .await;
    assert_eq!(1, response.errors.len());
    assert_eq!(json!({ "getSongById": null }), response.data.into_json()?);

    // Missing entities don't affect sibling fields
    let response = schema
        .execute(
            "{ getSongs { id } getSongById(SongId: 42) { title } getPlayList(PlayListId: 5) { id } }",
        )
        .await;
    assert_eq!(2, response.errors.len());
    assert_eq!(
        json!({
            "getSongs": [{ "id": 3 }, { "id": 7 }, { "id": 9 }],
            "getSongById": null,
            "getPlayList": null,
        }),
        response.data.into_json()?
    );

    let response = schema
        .execute(r#"{ getFilterSong(SearchParam: "album", SearchValue: "MEZZ") { id } }"#)
        .await;
    assert_eq!(
        json!({ "getFilterSong": [{ "id": 7 }, { "id": 9 }] }),
        response.data.into_json()?
    );

    let response = schema
        .execute(r#"{ getFilterSong(SearchParam: "id", SearchValue: "Angel") { id } }"#)
        .await;
    assert_eq!(
        json!({ "getFilterSong": [{ "id": 9 }] }),
        response.data.into_json()?
    );

    // Durations are numbers and never match a text value
    let response = schema
        .execute(r#"{ getFilterSong(SearchParam: "duration", SearchValue: "305") { id } }"#)
        .await;
    assert_eq!(json!({ "getFilterSong": [] }), response.data.into_json()?);

    let response = schema.execute("{ getFilterSong { id } }").await;
    assert_eq!(
        json!({ "getFilterSong": [{ "id": 3 }, { "id": 7 }, { "id": 9 }] }),
        response.data.into_json()?
    );
    Ok(())
}

#[tokio::test]
async fn graphql_playlist_mutations() -> TestResult<()> {
    let fixture = Fixture::new()?;
    let schema = graphql::build_schema(fixture.service.clone());

    let response = schema
        .execute(r#"mutation { createPlayList(name: "Road Trip", songs: [3, 7, 9]) { id } }"#)
        .await;
    assert!(response.errors.is_empty());
    assert_eq!(
        json!({ "createPlayList": { "id": 1 } }),
        response.data.into_json()?
    );

    let response = schema
        .execute("{ getPlayList(PlayListId: 1) { id name songs } getPlayLists { id } }")
        .await;
    assert_eq!(
        json!({
            "getPlayList": { "id": 1, "name": "Road Trip", "songs": [3, 7, 9] },
            "getPlayLists": [{ "id": 1 }],
        }),
        response.data.into_json()?
    );

    let response = schema
        .execute(r#"mutation { createPlayList(name: "", songs: []) { id } }"#)
        .await;
    assert_eq!(1, response.errors.len());

    for _ in 0..2 {
        let response = schema.execute("mutation { deletePlayList(id: 1) }").await;
        assert_eq!(json!({ "deletePlayList": 200 }), response.data.into_json()?);
    }

    let response = schema.execute("{ getPlayLists { id } }").await;
    assert_eq!(json!({ "getPlayLists": [] }), response.data.into_json()?);
    Ok(())
}

#[tokio::test]
async fn graphql_over_http() -> TestResult<()> {
    let fixture = Fixture::new()?;
    let filters = routes(fixture.service.clone());

    let response = request()
        .method("POST")
        .path("/graphql")
        .json(&json!({ "query": "{ getSongById(SongId: 3) { title } }" }))
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(
        json!({ "data": { "getSongById": { "title": "Roads" } } }),
        json_body(response.body())
    );

    let response = request()
        .path("/graphql?query=%7BgetPlayLists%7Bid%7D%7D")
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(
        json!({ "data": { "getPlayLists": [] } }),
        json_body(response.body())
    );

    // GraphiQL IDE
    let response = request().path("/graphql").reply(&filters).await;
    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(
        Some("text/html"),
        response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
    );
    Ok(())
}
