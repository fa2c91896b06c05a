// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{future::Future, net::SocketAddr, path::PathBuf};

use jiff::Timestamp;
use tokio::sync::watch;
use warp::{Filter as _, filters::BoxedFilter, fs::File};

use medialib_backend_embedded::{LibraryService, storage::commission_storage};
use medialib_websrv_warp::handle_rejection;

use crate::{config::Config, routing};

const REQUEST_LOG_TARGET: &str = "medialib_websrv::request";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Launching,
    Starting,
    Listening { socket_addr: SocketAddr },
    Stopping,
    Terminating,
}

fn static_files_filter(static_dir: Option<PathBuf>) -> BoxedFilter<(File,)> {
    if let Some(static_dir) = static_dir {
        log::info!(
            "Serving static files from directory {}",
            static_dir.display()
        );
        warp::get().and(warp::fs::dir(static_dir)).boxed()
    } else {
        warp::any()
            .and_then(|| async { Err::<File, _>(warp::reject::not_found()) })
            .boxed()
    }
}

/// Run the web server until the shutdown signal fires.
///
/// All state transitions are published through `current_state_tx`.
pub(crate) async fn run(
    config: Config,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
    current_state_tx: watch::Sender<Option<State>>,
) -> anyhow::Result<()> {
    let launched_at = Timestamp::now();

    log::info!("Launching");
    current_state_tx.send_replace(Some(State::Launching));

    let service = LibraryService::new(commission_storage(&config.storage)?);

    let about_json = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
        "version": env!("CARGO_PKG_VERSION"),
        "instance": {
            "launched_at": launched_at,
            "config": config,
        }
    });

    log::info!("Creating service routes");

    // GET /about
    let about_filter = warp::get()
        .and(warp::path("about"))
        .and(warp::path::end())
        .map(move || warp::reply::json(&about_json));

    let all_filters = routing::create_filters(service.clone())
        .or(about_filter)
        .or(static_files_filter(config.static_dir.clone()));

    log::info!("Initializing server");

    let server = warp::serve(
        all_filters
            .with(warp::cors().allow_any_origin())
            .with(warp::log(REQUEST_LOG_TARGET))
            .recover(handle_rejection),
    );

    log::info!("Starting");
    current_state_tx.send_replace(Some(State::Starting));

    let (socket_addr, server_listener) = server
        .try_bind_with_graceful_shutdown(config.network.endpoint.socket_addr(), shutdown_signal)?;

    log::info!("Listening on {socket_addr}");
    current_state_tx.send_replace(Some(State::Listening { socket_addr }));

    server_listener.await;

    log::info!("Stopping");
    current_state_tx.send_replace(Some(State::Stopping));

    service.gatekeeper().decommission();
    let pending_tasks = service.gatekeeper().pending_tasks();
    if pending_tasks.read > 0 || pending_tasks.write > 0 {
        log::warn!(
            "Pending storage tasks after decommissioning: {read} read(s), {write} write(s)",
            read = pending_tasks.read,
            write = pending_tasks.write,
        );
    }

    log::info!("Terminating");
    current_state_tx.send_replace(Some(State::Terminating));

    Ok(())
}
