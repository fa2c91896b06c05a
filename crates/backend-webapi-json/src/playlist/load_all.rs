// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

pub type ResponseBody = Vec<Entity>;

pub async fn handle_request(service: &LibraryService) -> Result<ResponseBody> {
    let entities = service.load_playlists().await?;
    Ok(entities.into_iter().map(Into::into).collect())
}
