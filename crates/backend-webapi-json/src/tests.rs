// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs;

use serde_json::json;
use tempfile::TempDir;
use test_log::test;

use medialib_backend_embedded::storage::commission_storage;
use medialib_core_json::playlist::Playlist;
use medialib_storage_fs::{Config as StorageConfig, storage::SONGS_FILE_NAME};

use super::*;

type TestResult<T> = anyhow::Result<T>;

fn commission() -> TestResult<(TempDir, LibraryService)> {
    let data_dir = tempfile::tempdir()?;
    let songs = json!([
        { "id": 3, "title": "Roads", "artist": "Portishead", "album": "Dummy", "duration": 305 },
        { "id": 7, "title": "Teardrop", "artist": "Massive Attack", "album": "Mezzanine", "duration": 330 },
    ]);
    fs::write(
        data_dir.path().join(SONGS_FILE_NAME),
        serde_json::to_vec(&songs)?,
    )?;
    let gatekeeper = commission_storage(&StorageConfig {
        data_dir: data_dir.path().to_path_buf(),
        gatekeeper: Default::default(),
    })?;
    Ok((data_dir, LibraryService::new(gatekeeper)))
}

#[test]
fn load_songs() -> TestResult<()> {
    let (_data_dir, service) = commission()?;
    let songs = song::load_all::handle_request(&service)?;
    assert_eq!(2, songs.len());
    assert_eq!(
        json!({ "id": 7, "title": "Teardrop", "artist": "Massive Attack", "album": "Mezzanine", "duration": 330 }),
        serde_json::to_value(song::load_one::handle_request(&service, 7)?)?
    );
    assert!(matches!(
        song::load_one::handle_request(&service, 42),
        Err(Error::Backend(_))
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn create_update_and_purge_playlist() -> TestResult<()> {
    let (_data_dir, service) = commission()?;
    let request_body: Playlist = serde_json::from_value(json!({ "name": "Road Trip", "songs": [3, 7, 9] }))?;
    let EntityIdBody { id } = playlist::create::handle_request(&service, request_body).await?;
    assert_eq!(
        json!({ "id": id, "name": "Road Trip", "songs": [3, 7, 9] }),
        serde_json::to_value(playlist::load_one::handle_request(&service, id)?)?
    );

    // Missing songs are replaced by an empty list
    let request_body: Playlist = serde_json::from_value(json!({ "name": "Renamed" }))?;
    assert_eq!(
        EntityIdBody { id },
        playlist::update::handle_request(&service, id, request_body).await?
    );
    assert_eq!(
        json!([{ "id": id, "name": "Renamed", "songs": [] }]),
        serde_json::to_value(playlist::load_all::handle_request(&service).await?)?
    );

    assert_eq!(
        json!({}),
        serde_json::to_value(playlist::purge::handle_request(&service, id).await)?
    );
    assert_eq!(
        json!({}),
        serde_json::to_value(playlist::purge::handle_request(&service, id).await)?
    );
    assert!(playlist::load_all::handle_request(&service).await?.is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn reject_empty_playlist_name() -> TestResult<()> {
    let (_data_dir, service) = commission()?;
    let request_body: Playlist = serde_json::from_value(json!({ "name": "", "songs": [3] }))?;
    assert!(matches!(
        playlist::create::handle_request(&service, request_body).await,
        Err(Error::BadRequest(_))
    ));
    Ok(())
}
