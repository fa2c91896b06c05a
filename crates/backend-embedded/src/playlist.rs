// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use medialib_core::playlist::{Entity, Playlist, PlaylistId};

use crate::prelude::*;

pub async fn load_all(gatekeeper: &Gatekeeper) -> Result<Vec<Entity>> {
    gatekeeper
        .spawn_blocking_read_task(|storage| {
            medialib_usecases::playlist::load_all(&*storage).map_err(Error::from)
        })
        .await
        .map_err(Error::from)
        .unwrap_or_else(Err)
}

/// Load a single entity synchronously.
///
/// Playlist records are replaced atomically and can be read without
/// acquiring the access lock.
pub fn load_one(gatekeeper: &Gatekeeper, id: PlaylistId) -> Result<Entity> {
    medialib_usecases::playlist::load_one(gatekeeper.storage(), id).map_err(Into::into)
}

pub async fn create_or_update(
    gatekeeper: &Gatekeeper,
    id: Option<PlaylistId>,
    playlist: Playlist,
) -> Result<PlaylistId> {
    gatekeeper
        .spawn_blocking_write_task(move |storage| {
            medialib_usecases::playlist::create_or_update(&*storage, id, playlist)
                .map_err(Error::from)
        })
        .await
        .map_err(Error::from)
        .unwrap_or_else(Err)
}

pub async fn purge(gatekeeper: &Gatekeeper, id: PlaylistId) -> Result<()> {
    gatekeeper
        .spawn_blocking_write_task(move |storage| {
            medialib_usecases::playlist::purge(&*storage, id).map_err(Error::from)
        })
        .await
        .map_err(Error::from)
        .unwrap_or_else(Err)
}
