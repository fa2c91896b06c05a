// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use thiserror::Error;

use medialib_core::{
    playlist::{Entity as PlaylistEntity, Playlist, PlaylistId},
    song::{Song, SongId},
};
use medialib_repo::prelude::RepoError;
use medialib_storage_fs::{Error as StorageError, gatekeeper::Gatekeeper};
use medialib_usecases::{self as uc, song::SongFilter};

pub mod playlist;
pub mod song;
pub mod storage;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(anyhow::Error),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Storage(StorageError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Repository(err) => Self::Repository(err),
            err => Self::Storage(err),
        }
    }
}

impl From<uc::Error> for Error {
    fn from(err: uc::Error) -> Self {
        match err {
            uc::Error::Input(uc::InputError(err)) => Self::Input(err),
            uc::Error::Repository(err) => Self::Repository(err),
            uc::Error::Other(err) => Self::Other(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use medialib_storage_fs::gatekeeper::Gatekeeper;

    pub use super::{Error, Result};
}

/// Shared handle for accessing the media library.
///
/// Every adapter receives a clone of the same handle. Operations that
/// only touch the immutable catalog or a single, atomically replaced
/// playlist record are synchronous. All other operations are executed
/// by the [`Gatekeeper`] and deliver their outcome exactly once through
/// the returned future.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct LibraryService {
    gatekeeper: Arc<Gatekeeper>,
}

impl LibraryService {
    #[must_use]
    pub fn new(gatekeeper: impl Into<Arc<Gatekeeper>>) -> Self {
        Self {
            gatekeeper: gatekeeper.into(),
        }
    }

    #[must_use]
    pub fn gatekeeper(&self) -> &Arc<Gatekeeper> {
        &self.gatekeeper
    }

    pub fn load_catalog(&self) -> Result<Vec<Song>> {
        song::load_all(&self.gatekeeper)
    }

    pub fn load_song(&self, id: SongId) -> Result<Song> {
        song::load_one(&self.gatekeeper, id)
    }

    pub fn filter_songs(&self, filter: &SongFilter) -> Result<Vec<Song>> {
        song::filter(&self.gatekeeper, filter)
    }

    pub async fn load_playlists(&self) -> Result<Vec<PlaylistEntity>> {
        playlist::load_all(&self.gatekeeper).await
    }

    pub fn load_playlist(&self, id: PlaylistId) -> Result<PlaylistEntity> {
        playlist::load_one(&self.gatekeeper, id)
    }

    pub async fn create_or_update_playlist(
        &self,
        id: Option<PlaylistId>,
        playlist: Playlist,
    ) -> Result<PlaylistId> {
        playlist::create_or_update(&self.gatekeeper, id, playlist).await
    }

    pub async fn purge_playlist(&self, id: PlaylistId) -> Result<()> {
        playlist::purge(&self.gatekeeper, id).await
    }
}
