// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{convert::Infallible, error::Error as StdError, result::Result as StdResult};

use serde::Serialize;
use thiserror::Error;
use warp::{
    Reply,
    body::BodyDeserializeError,
    http::StatusCode,
    reject::{self, MethodNotAllowed, Reject, Rejection},
};

use medialib_backend_embedded as backend;
use medialib_backend_webapi_json as api;
use medialib_repo::prelude::RepoError;
use medialib_storage_fs as storage;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    BadRequest(anyhow::Error),

    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("timeout: {reason}")]
    Timeout { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<api::Error> for Error {
    fn from(err: api::Error) -> Self {
        match err {
            api::Error::BadRequest(err) => Self::BadRequest(err),
            api::Error::Backend(err) => err.into(),
            api::Error::Other(err) => Self::Other(err),
        }
    }
}

impl From<backend::Error> for Error {
    fn from(err: backend::Error) -> Self {
        match err {
            backend::Error::Input(err) => Self::BadRequest(err),
            backend::Error::Repository(err) => err.into(),
            backend::Error::Storage(err) => err.into(),
            backend::Error::Other(err) => Self::Other(err),
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => Self::NotFound,
            RepoError::Conflict => Self::Conflict,
            RepoError::Unavailable(err) => {
                log::warn!("Storage unavailable: {err}");
                Self::ServiceUnavailable
            }
            RepoError::Other(err) => Self::Other(err),
        }
    }
}

impl From<storage::Error> for Error {
    fn from(err: storage::Error) -> Self {
        match err {
            storage::Error::Io(err) => Self::Other(err.into()),
            storage::Error::Json(err) => Self::Other(err.into()),
            storage::Error::Repository(err) => err.into(),
            storage::Error::TaskScheduling(err) => Self::Other(err.into()),
            storage::Error::TaskTimeout { reason } => Self::Timeout { reason },
            storage::Error::Other(err) => Self::Other(err),
        }
    }
}

pub type Result<T> = StdResult<T, Error>;

impl Error {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Details that are more specific than the status code.
    fn detail_message(&self) -> Option<String> {
        match self {
            Self::BadRequest(err) | Self::Other(err) => Some(err.to_string()),
            Self::Timeout { reason } => Some(reason.clone()),
            Self::NotFound | Self::Conflict | Self::ServiceUnavailable => None,
        }
    }
}

impl Reject for Error {}

pub fn reject_on_error(err: impl Into<Error>) -> Rejection {
    reject::custom(err.into())
}

/// The JSON body of all error replies.
#[derive(Debug, Serialize)]
struct ErrorResponseBody {
    code: u16,
    message: String,
}

fn source_message(err: &dyn StdError) -> String {
    err.source()
        .map_or_else(|| err.to_string(), ToString::to_string)
}

#[allow(clippy::unused_async)] // async needed for warp filter
pub async fn handle_rejection(reject: Rejection) -> StdResult<impl Reply, Infallible> {
    let (code, detail_message) = if reject.is_not_found() {
        (StatusCode::NOT_FOUND, None)
    } else if let Some(err) = reject.find::<BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, Some(source_message(err)))
    } else if let Some(err) = reject.find::<Error>() {
        (err.status_code(), err.detail_message())
    } else if let Some(err) = reject.find::<MethodNotAllowed>() {
        // Checked last, most rejections contain a MethodNotAllowed element
        (StatusCode::METHOD_NOT_ALLOWED, Some(err.to_string()))
    } else {
        log::error!("Unhandled rejection {reject:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, Some(format!("{reject:?}")))
    };
    let message = detail_message.unwrap_or_else(|| {
        code.canonical_reason()
            .unwrap_or_else(|| code.as_str())
            .to_owned()
    });
    let json_reply = warp::reply::json(&ErrorResponseBody {
        code: code.as_u16(),
        message,
    });
    Ok(warp::reply::with_status(json_reply, code))
}
