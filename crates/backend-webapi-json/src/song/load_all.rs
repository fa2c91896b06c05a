// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

pub type ResponseBody = Vec<Song>;

pub fn handle_request(service: &LibraryService) -> Result<ResponseBody> {
    service
        .load_catalog()
        .map(|songs| songs.into_iter().map(Into::into).collect())
        .map_err(Into::into)
}
