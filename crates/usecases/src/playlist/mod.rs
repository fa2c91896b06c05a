// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::Validate as _;

use medialib_core::playlist::{Entity, Playlist, PlaylistId};
use medialib_repo::playlist::EntityRepo;

use super::*;

#[derive(Debug)]
pub struct ValidatedInput(Playlist);

pub fn validate_input(playlist: Playlist) -> InputResult<ValidatedInput> {
    if let Err(err) = playlist.validate() {
        return Err(anyhow::anyhow!("Invalid playlist input: {err:?}").into());
    }
    Ok(ValidatedInput(playlist))
}

pub fn load_all<Repo>(repo: &Repo) -> Result<Vec<Entity>>
where
    Repo: EntityRepo + ?Sized,
{
    repo.load_playlist_entities().map_err(Into::into)
}

pub fn load_one<Repo>(repo: &Repo, id: PlaylistId) -> Result<Entity>
where
    Repo: EntityRepo + ?Sized,
{
    repo.load_playlist_entity(id).map_err(Into::into)
}

/// Store a new playlist or overwrite an existing one.
///
/// Without an id a new id is allocated. Otherwise the playlist with
/// the given id is replaced entirely or created if it doesn't exist.
pub fn create_or_update<Repo>(
    repo: &Repo,
    id: Option<PlaylistId>,
    playlist: Playlist,
) -> Result<PlaylistId>
where
    Repo: EntityRepo + ?Sized,
{
    let ValidatedInput(playlist) = validate_input(playlist)?;
    if let Some(id) = id {
        repo.replace_playlist_entity(&Entity::new(id, playlist))?;
        log::debug!("Updated playlist {id}");
        Ok(id)
    } else {
        let id = repo.insert_playlist_entity(&playlist)?;
        log::debug!("Created playlist {id}");
        Ok(id)
    }
}

/// Delete a playlist.
///
/// Succeeds if the playlist doesn't exist.
pub fn purge<Repo>(repo: &Repo, id: PlaylistId) -> Result<()>
where
    Repo: EntityRepo + ?Sized,
{
    if repo.delete_playlist_entity(id).optional()?.is_none() {
        log::debug!("Playlist {id} not found");
    }
    Ok(())
}
