// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Records are stored as JSON files inside the data directory:
//!
//! ```text
//! <data_dir>/
//! ├── songs.json          # the catalog, loaded once when opening
//! └── playlists/
//!     ├── 1.json
//!     └── 2.json
//! ```
//!
//! Playlist files are always replaced atomically by renaming a
//! temporary file, i.e. readers never see partially written files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use parking_lot::Mutex;

use medialib_core::{
    playlist::{Entity as PlaylistEntity, Playlist, PlaylistId},
    song::{Song, SongId},
};
use medialib_core_json as json;
use medialib_repo::{
    playlist::{EntityRepo as PlaylistRepo, next_playlist_id},
    prelude::*,
    song::EntityRepo as SongRepo,
};

use crate::Result;

pub const SONGS_FILE_NAME: &str = "songs.json";

pub const PLAYLISTS_DIR_NAME: &str = "playlists";

const RECORD_FILE_EXTENSION: &str = "json";

const TEMP_FILE_EXTENSION: &str = "tmp";

fn unavailable(err: impl Into<anyhow::Error>) -> RepoError {
    RepoError::Unavailable(err.into())
}

fn load_catalog(file_path: &Path) -> Result<Vec<Song>> {
    let bytes = fs::read(file_path).map_err(|err| {
        log::warn!(
            "Failed to read catalog from file {}: {err}",
            file_path.display()
        );
        unavailable(err)
    })?;
    let songs: Vec<json::song::Song> = serde_json::from_slice(&bytes).map_err(|err| {
        log::warn!(
            "Failed to parse catalog from file {}: {err}",
            file_path.display()
        );
        unavailable(err)
    })?;
    Ok(songs.into_iter().map(Into::into).collect())
}

#[derive(Debug)]
pub struct Storage {
    data_dir: PathBuf,

    /// Immutable after opening.
    catalog: Vec<Song>,

    /// Serializes all writers of playlist files.
    ///
    /// Id allocation reads the existing ids and creates the new file
    /// while holding this lock.
    write_lock: Mutex<()>,
}

impl Storage {
    /// Open the storage by loading the catalog.
    ///
    /// The directory for playlists is created on demand.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        log::info!("Opening storage in directory {}", data_dir.display());
        let catalog = load_catalog(&data_dir.join(SONGS_FILE_NAME))?;
        log::info!("Loaded catalog with {} song(s)", catalog.len());
        let storage = Self {
            data_dir,
            catalog,
            write_lock: Mutex::new(()),
        };
        fs::create_dir_all(storage.playlists_dir()).map_err(unavailable)?;
        Ok(storage)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn catalog(&self) -> &[Song] {
        &self.catalog
    }

    fn playlists_dir(&self) -> PathBuf {
        self.data_dir.join(PLAYLISTS_DIR_NAME)
    }

    fn playlist_file_path(&self, id: PlaylistId) -> PathBuf {
        let mut file_path = self.playlists_dir().join(id.to_string());
        file_path.set_extension(RECORD_FILE_EXTENSION);
        file_path
    }

    /// Ids of all playlist files, in no particular order.
    ///
    /// Unrelated files and temporary files are skipped.
    fn read_playlist_ids(&self) -> io::Result<Vec<PlaylistId>> {
        let mut ids = Vec::new();
        for dir_entry in fs::read_dir(self.playlists_dir())? {
            let path = dir_entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_FILE_EXTENSION) {
                continue;
            }
            let Some(id) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| stem.parse().ok())
            else {
                log::debug!("Skipping unrelated file {}", path.display());
                continue;
            };
            ids.push(id);
        }
        Ok(ids)
    }

    fn write_playlist_file(&self, entity: &PlaylistEntity) -> RepoResult<()> {
        let file_path = self.playlist_file_path(entity.id);
        let mut temp_file_path = file_path.clone();
        temp_file_path.set_extension(format!("{RECORD_FILE_EXTENSION}.{TEMP_FILE_EXTENSION}"));
        let bytes = serde_json::to_vec_pretty(&json::playlist::Entity::from(entity.clone()))
            .map_err(anyhow::Error::from)?;
        fs::write(&temp_file_path, bytes).map_err(unavailable)?;
        fs::rename(&temp_file_path, &file_path).map_err(|err| {
            if let Err(err) = fs::remove_file(&temp_file_path) {
                log::warn!(
                    "Failed to remove temporary file {}: {err}",
                    temp_file_path.display()
                );
            }
            unavailable(err)
        })?;
        log::debug!("Stored playlist {id}", id = entity.id);
        Ok(())
    }
}

impl SongRepo for Storage {
    fn load_song_entities(&self) -> RepoResult<Vec<Song>> {
        Ok(self.catalog.clone())
    }

    fn load_song_entity(&self, id: SongId) -> RepoResult<Song> {
        self.catalog
            .iter()
            .find(|song| song.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl PlaylistRepo for Storage {
    fn load_playlist_entities(&self) -> RepoResult<Vec<PlaylistEntity>> {
        let mut ids = self.read_playlist_ids().map_err(unavailable)?;
        ids.sort_unstable();
        let mut entities = Vec::with_capacity(ids.len());
        for id in ids {
            // Playlists that disappear while reading are skipped
            if let Some(entity) = self.load_playlist_entity(id).optional()? {
                entities.push(entity);
            }
        }
        Ok(entities)
    }

    fn load_playlist_entity(&self, id: PlaylistId) -> RepoResult<PlaylistEntity> {
        let file_path = self.playlist_file_path(id);
        let bytes = match fs::read(&file_path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(RepoError::NotFound);
            }
            Err(err) => {
                return Err(unavailable(err));
            }
        };
        let entity: json::playlist::Entity = serde_json::from_slice(&bytes).map_err(|err| {
            log::warn!(
                "Failed to parse playlist from file {}: {err}",
                file_path.display()
            );
            unavailable(err)
        })?;
        let mut entity = PlaylistEntity::from(entity);
        if entity.id != id {
            // The file name is authoritative
            log::warn!(
                "Mismatching id {stored_id} in file {file_path}",
                stored_id = entity.id,
                file_path = file_path.display(),
            );
            entity.id = id;
        }
        Ok(entity)
    }

    fn insert_playlist_entity(&self, playlist: &Playlist) -> RepoResult<PlaylistId> {
        let _write_guard = self.write_lock.lock();
        let Some(id) = next_playlist_id(self.read_playlist_ids().map_err(unavailable)?) else {
            log::warn!("No more playlist ids available");
            return Err(RepoError::Conflict);
        };
        if self.playlist_file_path(id).exists() {
            return Err(RepoError::Conflict);
        }
        self.write_playlist_file(&PlaylistEntity::new(id, playlist.clone()))?;
        Ok(id)
    }

    fn replace_playlist_entity(&self, entity: &PlaylistEntity) -> RepoResult<()> {
        let _write_guard = self.write_lock.lock();
        self.write_playlist_file(entity)
    }

    fn delete_playlist_entity(&self, id: PlaylistId) -> RepoResult<()> {
        let file_path = self.playlist_file_path(id);
        match fs::remove_file(&file_path) {
            Ok(()) => {
                log::debug!("Deleted playlist {id}");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(RepoError::NotFound),
            Err(err) => Err(unavailable(err)),
        }
    }
}
