// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{prelude::*, song::SongId};

mod _core {
    pub(super) use medialib_core::playlist::*;
}

pub type PlaylistId = u64;

///////////////////////////////////////////////////////////////////////
// Playlist
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub name: String,

    #[serde(default)]
    pub songs: Vec<SongId>,
}

impl From<Playlist> for _core::Playlist {
    fn from(from: Playlist) -> Self {
        let Playlist { name, songs } = from;
        Self {
            name,
            songs: songs.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<_core::Playlist> for Playlist {
    fn from(from: _core::Playlist) -> Self {
        let _core::Playlist { name, songs } = from;
        Self {
            name,
            songs: songs.into_iter().map(Into::into).collect(),
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Entity
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: PlaylistId,

    pub name: String,

    #[serde(default)]
    pub songs: Vec<SongId>,
}

impl From<Entity> for _core::Entity {
    fn from(from: Entity) -> Self {
        let Entity { id, name, songs } = from;
        Self::new(_core::PlaylistId::new(id), Playlist { name, songs })
    }
}

impl From<_core::Entity> for Entity {
    fn from(from: _core::Entity) -> Self {
        let _core::Entity { id, body } = from;
        let Playlist { name, songs } = body.into();
        Self {
            id: id.into(),
            name,
            songs,
        }
    }
}
