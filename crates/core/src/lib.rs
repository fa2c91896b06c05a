// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

mod entity;
pub use self::entity::{Entity, ParseIdError};

pub mod song;
pub use self::song::{Song, SongId};

pub mod playlist;
pub use self::playlist::{Entity as PlaylistEntity, Playlist, PlaylistId};

pub mod prelude {
    pub(crate) use semval::prelude::*;
    // Re-export trait methods from semval
    pub use semval::{IsValid, Validate as _};
}
