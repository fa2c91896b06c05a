// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

pub type ResponseBody = EmptyBody;

/// Delete the playlist.
///
/// Always succeeds. Failures are only logged and not reported to
/// the client.
pub async fn handle_request(service: &LibraryService, id: PlaylistId) -> ResponseBody {
    if let Err(err) = service.purge_playlist(_core::PlaylistId::new(id)).await {
        log::warn!("Failed to delete playlist {id}: {err}");
    }
    EmptyBody::default()
}
