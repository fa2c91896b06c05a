// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use medialib_core_json::song::Song;

use super::*;

mod _core {
    pub(super) use medialib_core::song::SongId;
}

pub mod load_all;
pub mod load_one;
