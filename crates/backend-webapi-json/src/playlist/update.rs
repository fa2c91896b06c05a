// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

pub type RequestBody = Playlist;

pub type ResponseBody = EntityIdBody;

/// Replace the name and all songs of the playlist.
///
/// The playlist is created if it doesn't exist yet.
pub async fn handle_request(
    service: &LibraryService,
    id: PlaylistId,
    request_body: RequestBody,
) -> Result<ResponseBody> {
    let id = service
        .create_or_update_playlist(Some(_core::PlaylistId::new(id)), request_body.into())
        .await?;
    Ok(EntityIdBody { id: id.into() })
}
