// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

mod _core {
    pub(super) use medialib_core::song::*;
}

pub type SongId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: _core::DurationInSeconds,
}

impl From<Song> for _core::Song {
    fn from(from: Song) -> Self {
        let Song {
            id,
            title,
            artist,
            album,
            duration,
        } = from;
        Self {
            id: id.into(),
            title,
            artist,
            album,
            duration,
        }
    }
}

impl From<_core::Song> for Song {
    fn from(from: _core::Song) -> Self {
        let _core::Song {
            id,
            title,
            artist,
            album,
            duration,
        } = from;
        Self {
            id: id.into(),
            title,
            artist,
            album,
            duration,
        }
    }
}
