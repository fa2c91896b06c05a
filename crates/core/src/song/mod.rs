// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::entity::record_id_newtype;

record_id_newtype!(SongId);

/// Duration in whole seconds.
pub type DurationInSeconds = u32;

/// An immutable entry of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: DurationInSeconds,
}
