// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Song catalog and playlist library.
//!
//! Re-exports the sub-crates of the workspace. Everything except the
//! domain model is only available if the corresponding feature is
//! enabled.

pub use medialib_core::*;

#[cfg(feature = "json")]
pub mod json {
    pub use medialib_core_json::*;
}

#[cfg(feature = "repo")]
pub mod repo {
    pub use medialib_repo::*;
}

#[cfg(feature = "usecases")]
pub mod usecases {
    pub use medialib_usecases::*;
}

#[cfg(feature = "storage-fs")]
pub mod storage_fs {
    pub use medialib_storage_fs::*;
}

#[cfg(feature = "backend-embedded")]
pub mod backend_embedded {
    pub use medialib_backend_embedded::*;
}

#[cfg(feature = "backend-embedded")]
pub use medialib_backend_embedded::LibraryService;
