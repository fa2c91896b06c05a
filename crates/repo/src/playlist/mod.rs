// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use medialib_core::playlist::{Entity, Playlist, PlaylistId};

use crate::prelude::*;

pub trait EntityRepo {
    /// Load all playlists ordered by id.
    fn load_playlist_entities(&self) -> RepoResult<Vec<Entity>>;

    fn load_playlist_entity(&self, id: PlaylistId) -> RepoResult<Entity>;

    /// Store a new playlist under a newly allocated id.
    ///
    /// Concurrent invocations must never allocate the same id. If the
    /// allocated id turns out to be occupied nevertheless or if no id
    /// is left the operation fails with [`RepoError::Conflict`].
    fn insert_playlist_entity(&self, playlist: &Playlist) -> RepoResult<PlaylistId>;

    /// Overwrite the playlist with the given id or create it if missing.
    fn replace_playlist_entity(&self, entity: &Entity) -> RepoResult<()>;

    /// Fails with [`RepoError::NotFound`] if the playlist does not exist.
    fn delete_playlist_entity(&self, id: PlaylistId) -> RepoResult<()>;
}

/// The id following the maximum of all existing ids, starting at 1.
///
/// Returns `None` if the maximum id is already occupied.
#[must_use]
pub fn next_playlist_id(
    existing_ids: impl IntoIterator<Item = PlaylistId>,
) -> Option<PlaylistId> {
    let Some(max_id) = existing_ids.into_iter().max() else {
        return Some(PlaylistId::new(1));
    };
    max_id.value().checked_add(1).map(PlaylistId::new)
}

#[cfg(test)]
mod tests;
