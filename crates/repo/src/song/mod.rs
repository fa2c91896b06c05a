// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use medialib_core::song::{Song, SongId};

use crate::prelude::*;

/// Read-only access to the catalog.
pub trait EntityRepo {
    /// Load all songs in catalog order.
    fn load_song_entities(&self) -> RepoResult<Vec<Song>>;

    fn load_song_entity(&self, id: SongId) -> RepoResult<Song> {
        self.load_song_entities()?
            .into_iter()
            .find(|song| song.id == id)
            .ok_or(RepoError::NotFound)
    }
}
