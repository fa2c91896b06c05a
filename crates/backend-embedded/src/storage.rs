// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use medialib_storage_fs::{Config, Storage, gatekeeper::Gatekeeper};

use crate::Result;

/// Open the storage and put it under the control of a [`Gatekeeper`].
pub fn commission_storage(config: &Config) -> Result<Gatekeeper> {
    let Config {
        data_dir,
        gatekeeper,
    } = config;
    let storage = Storage::open(data_dir.clone())?;
    log::info!(
        "Commissioning storage with {} song(s) in {}",
        storage.catalog().len(),
        data_dir.display()
    );
    Ok(Gatekeeper::new(storage, *gatekeeper))
}
