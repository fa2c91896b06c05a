// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use medialib_core_json::song::SongId;

use super::*;

pub type ResponseBody = Song;

pub fn handle_request(service: &LibraryService, id: SongId) -> Result<ResponseBody> {
    service
        .load_song(_core::SongId::new(id))
        .map(Into::into)
        .map_err(Into::into)
}
