// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    num::NonZeroU64,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use tokio::{sync::RwLock, task::spawn_blocking, time::sleep};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result, Storage};

/// Run blocking storage tasks asynchronously
///
/// Readers may run concurrently while writers require exclusive
/// access. Each task is executed on the blocking thread pool of
/// the Tokio runtime and its outcome is delivered once through
/// the returned future.
#[allow(missing_debug_implementations)]
pub struct Gatekeeper {
    storage: Arc<Storage>,
    access_lock: RwLock<()>,
    acquire_read_timeout: Duration,
    acquire_write_timeout: Duration,
    pending_read_tasks: AtomicUsize,
    pending_write_tasks: AtomicUsize,
    decommissioned: AtomicBool,
}

/// Counts a task as pending until dropped.
struct PendingTaskScope<'a> {
    counter: &'a AtomicUsize,
    kind: &'static str,
}

impl<'a> PendingTaskScope<'a> {
    #[must_use]
    fn enter(counter: &'a AtomicUsize, kind: &'static str) -> Self {
        let pending = counter.fetch_add(1, Ordering::Relaxed) + 1;
        log::debug!("Starting {kind} task: {pending} pending {kind} task(s)");
        Self { counter, kind }
    }
}

impl Drop for PendingTaskScope<'_> {
    fn drop(&mut self) {
        let Self { counter, kind } = self;
        let pending_before = counter.fetch_sub(1, Ordering::Relaxed);
        debug_assert!(pending_before > 0);
        log::debug!(
            "Finished {kind} task: {pending} pending {kind} task(s)",
            pending = pending_before - 1
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTasks {
    pub read: usize,
    pub write: usize,
}

impl Gatekeeper {
    #[must_use]
    pub fn new(storage: Storage, config: Config) -> Self {
        let Config {
            acquire_read_timeout_millis,
            acquire_write_timeout_millis,
        } = config;
        let acquire_read_timeout = Duration::from_millis(acquire_read_timeout_millis.get());
        let acquire_write_timeout = Duration::from_millis(acquire_write_timeout_millis.get());
        Self {
            storage: Arc::new(storage),
            access_lock: RwLock::new(()),
            acquire_read_timeout,
            acquire_write_timeout,
            pending_read_tasks: AtomicUsize::new(0),
            pending_write_tasks: AtomicUsize::new(0),
            decommissioned: AtomicBool::new(false),
        }
    }

    /// Direct access for synchronous reads.
    ///
    /// Only suitable for operations that read either immutable data
    /// or a single, atomically replaced record.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn decommission(&self) {
        self.decommissioned.store(true, Ordering::Release);
    }

    fn check_not_decommissioned(&self) -> Result<()> {
        if self.decommissioned.load(Ordering::Acquire) {
            return Err(Error::TaskTimeout {
                reason: "storage has been decommissioned".to_string(),
            });
        }
        Ok(())
    }

    pub async fn spawn_blocking_read_task<H, R>(&self, storage_handler: H) -> Result<R>
    where
        H: FnOnce(Arc<Storage>) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.check_not_decommissioned()?;
        let _pending_task_scope = PendingTaskScope::enter(&self.pending_read_tasks, "read");
        let timeout = sleep(self.acquire_read_timeout);
        tokio::pin!(timeout);
        tokio::select! {
            () = &mut timeout => Err(Error::TaskTimeout {reason: "storage is locked".to_string() }),
            _guard = self.access_lock.read() => {
                self.check_not_decommissioned()?;
                let storage = Arc::clone(&self.storage);
                spawn_blocking(move || storage_handler(storage)).await
                    .map_err(Error::TaskScheduling)
            },
        }
    }

    pub async fn spawn_blocking_write_task<H, R>(&self, storage_handler: H) -> Result<R>
    where
        H: FnOnce(Arc<Storage>) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.check_not_decommissioned()?;
        let _pending_task_scope = PendingTaskScope::enter(&self.pending_write_tasks, "write");
        let timeout = sleep(self.acquire_write_timeout);
        tokio::pin!(timeout);
        tokio::select! {
            () = &mut timeout => Err(Error::TaskTimeout {reason: "storage is locked".to_string() }),
            _guard = self.access_lock.write() => {
                self.check_not_decommissioned()?;
                let storage = Arc::clone(&self.storage);
                spawn_blocking(move || storage_handler(storage)).await
                    .map_err(Error::TaskScheduling)
            },
        }
    }

    #[must_use]
    pub fn pending_tasks(&self) -> PendingTasks {
        PendingTasks {
            read: self.pending_read_tasks.load(Ordering::Relaxed),
            write: self.pending_write_tasks.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    pub acquire_read_timeout_millis: NonZeroU64,
    pub acquire_write_timeout_millis: NonZeroU64,
}

const DEFAULT_ACQUIRE_READ_TIMEOUT_MILLIS: NonZeroU64 = NonZeroU64::new(10_000).unwrap();

const DEFAULT_ACQUIRE_WRITE_TIMEOUT_MILLIS: NonZeroU64 = NonZeroU64::new(30_000).unwrap();

impl Default for Config {
    fn default() -> Self {
        Self {
            acquire_read_timeout_millis: DEFAULT_ACQUIRE_READ_TIMEOUT_MILLIS,
            acquire_write_timeout_millis: DEFAULT_ACQUIRE_WRITE_TIMEOUT_MILLIS,
        }
    }
}
