// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use medialib_core::song::{Song, SongId};
use medialib_repo::song::EntityRepo;

use super::*;

pub mod filter;
pub use self::filter::{FilterValue, SearchParam, SongFilter};

pub fn load_all<Repo>(repo: &Repo) -> Result<Vec<Song>>
where
    Repo: EntityRepo + ?Sized,
{
    repo.load_song_entities().map_err(Into::into)
}

pub fn load_one<Repo>(repo: &Repo, id: SongId) -> Result<Song>
where
    Repo: EntityRepo + ?Sized,
{
    repo.load_song_entity(id).map_err(Into::into)
}

/// Select matching songs while preserving the catalog order.
pub fn filter<Repo>(repo: &Repo, filter: &SongFilter) -> Result<Vec<Song>>
where
    Repo: EntityRepo + ?Sized,
{
    let songs = repo.load_song_entities()?;
    log::debug!("Filtering {} song(s) by {filter:?}", songs.len());
    Ok(filter.select(songs))
}
