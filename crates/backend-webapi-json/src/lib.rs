// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]

use std::result::Result as StdResult;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use medialib_backend_embedded::LibraryService;

pub mod playlist;
pub mod song;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    BadRequest(anyhow::Error),

    #[error(transparent)]
    Backend(medialib_backend_embedded::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<medialib_backend_embedded::Error> for Error {
    fn from(err: medialib_backend_embedded::Error) -> Self {
        match err {
            medialib_backend_embedded::Error::Input(err) => Self::BadRequest(err),
            err => Self::Backend(err),
        }
    }
}

pub type Result<T> = StdResult<T, Error>;

/// Response body with the id of a stored entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityIdBody {
    pub id: u64,
}

/// Response body of requests that don't return any data, i.e. `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyBody {}

#[cfg(test)]
mod tests;
