// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The catalog is immutable and doesn't require any locking.

use medialib_core::song::{Song, SongId};
use medialib_usecases::song::{self as uc, SongFilter};

use crate::prelude::*;

pub fn load_all(gatekeeper: &Gatekeeper) -> Result<Vec<Song>> {
    uc::load_all(gatekeeper.storage()).map_err(Into::into)
}

pub fn load_one(gatekeeper: &Gatekeeper, id: SongId) -> Result<Song> {
    uc::load_one(gatekeeper.storage(), id).map_err(Into::into)
}

pub fn filter(gatekeeper: &Gatekeeper, filter: &SongFilter) -> Result<Vec<Song>> {
    uc::filter(gatekeeper.storage(), filter).map_err(Into::into)
}
