// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use warp::{Filter as _, Reply, filters::BoxedFilter};

use medialib_backend_embedded::LibraryService;
use medialib_backend_webapi_json as api;
use medialib_core_json::{playlist::PlaylistId, song::SongId};
use medialib_websrv_warp::reject_on_error;

pub(crate) fn create_filters(service: LibraryService) -> BoxedFilter<(impl Reply,)> {
    let service = warp::any().map(move || service.clone());

    log::info!("Creating API routes");

    let path_param_song_id = warp::path::param::<SongId>();
    let path_param_playlist_id = warp::path::param::<PlaylistId>();

    let library_path = warp::path("library");
    let playlist_path = warp::path("playlist");

    // Songs
    let library_load_all = warp::get()
        .and(library_path)
        .and(warp::path::end())
        .and(service.clone())
        .and_then(|service: LibraryService| async move {
            api::song::load_all::handle_request(&service)
                .map(|response_body| warp::reply::json(&response_body))
                .map_err(reject_on_error)
        });
    let library_load_one = warp::get()
        .and(library_path)
        .and(path_param_song_id)
        .and(warp::path::end())
        .and(service.clone())
        .and_then(|id, service: LibraryService| async move {
            api::song::load_one::handle_request(&service, id)
                .map(|response_body| warp::reply::json(&response_body))
                .map_err(reject_on_error)
        });
    let library_filters = library_load_all.or(library_load_one);

    // Playlists
    let playlist_load_all = warp::get()
        .and(playlist_path)
        .and(warp::path::end())
        .and(service.clone())
        .and_then(|service: LibraryService| async move {
            api::playlist::load_all::handle_request(&service)
                .await
                .map(|response_body| warp::reply::json(&response_body))
                .map_err(reject_on_error)
        });
    let playlist_create = warp::post()
        .and(playlist_path)
        .and(warp::path::end())
        .and(warp::body::json())
        .and(service.clone())
        .and_then(|request_body, service: LibraryService| async move {
            api::playlist::create::handle_request(&service, request_body)
                .await
                .map(|response_body| warp::reply::json(&response_body))
                .map_err(reject_on_error)
        });
    let playlist_load_one = warp::get()
        .and(playlist_path)
        .and(path_param_playlist_id)
        .and(warp::path::end())
        .and(service.clone())
        .and_then(|id, service: LibraryService| async move {
            api::playlist::load_one::handle_request(&service, id)
                .map(|response_body| warp::reply::json(&response_body))
                .map_err(reject_on_error)
        });
    let playlist_update = warp::post()
        .and(playlist_path)
        .and(path_param_playlist_id)
        .and(warp::path::end())
        .and(warp::body::json())
        .and(service.clone())
        .and_then(|id, request_body, service: LibraryService| async move {
            api::playlist::update::handle_request(&service, id, request_body)
                .await
                .map(|response_body| warp::reply::json(&response_body))
                .map_err(reject_on_error)
        });
    let playlist_purge = warp::delete()
        .and(playlist_path)
        .and(path_param_playlist_id)
        .and(warp::path::end())
        .and(service)
        .then(|id, service: LibraryService| async move {
            let response_body = api::playlist::purge::handle_request(&service, id).await;
            warp::reply::json(&response_body)
        });
    let playlist_filters = playlist_load_all
        .or(playlist_create)
        .or(playlist_load_one)
        .or(playlist_update)
        .or(playlist_purge);

    library_filters.or(playlist_filters).boxed()
}
