// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

pub type ResponseBody = Entity;

pub fn handle_request(service: &LibraryService, id: PlaylistId) -> Result<ResponseBody> {
    service
        .load_playlist(_core::PlaylistId::new(id))
        .map(Into::into)
        .map_err(Into::into)
}
