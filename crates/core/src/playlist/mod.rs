// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{entity::record_id_newtype, prelude::*, song::SongId};

record_id_newtype!(PlaylistId);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    /// Mandatory name.
    pub name: String,

    /// Ordered references into the catalog.
    ///
    /// Neither duplicates nor references to songs that are missing
    /// in the catalog are rejected.
    pub songs: Vec<SongId>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaylistInvalidity {
    NameEmpty,
}

impl Validate for Playlist {
    type Invalidity = PlaylistInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self { name, songs: _ } = self;
        ValidationContext::new()
            .invalidate_if(name.is_empty(), Self::Invalidity::NameEmpty)
            .into()
    }
}

pub type Entity = crate::entity::Entity<PlaylistId, Playlist>;

#[cfg(test)]
mod tests;
