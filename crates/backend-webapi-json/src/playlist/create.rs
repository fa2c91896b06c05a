// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

pub type RequestBody = Playlist;

pub type ResponseBody = EntityIdBody;

pub async fn handle_request(
    service: &LibraryService,
    request_body: RequestBody,
) -> Result<ResponseBody> {
    let id = service
        .create_or_update_playlist(None, request_body.into())
        .await?;
    Ok(EntityIdBody { id: id.into() })
}
