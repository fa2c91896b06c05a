// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    env::current_exe,
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use directories::ProjectDirs;
use tokio::sync::watch;

use crate::{config::Config, runtime::State};

mod config;
mod env;
mod routing;
mod runtime;

#[must_use]
fn app_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

#[must_use]
fn app_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "medialib", app_name())
}

#[must_use]
fn app_config_dir(app_dirs: &ProjectDirs) -> &Path {
    app_dirs.config_dir()
}

#[must_use]
fn new_config_file_path(app_dirs: &ProjectDirs, file_suffix: &str) -> PathBuf {
    let mut path_buf = app_config_dir(app_dirs).to_path_buf();
    path_buf.push("config");
    path_buf.set_extension(file_suffix);
    path_buf
}

#[must_use]
fn load_app_config(app_dirs: &ProjectDirs) -> Config {
    let file_path = new_config_file_path(app_dirs, "ron");
    log::info!("Loading configuration from file: {}", file_path.display());
    match fs::read(&file_path) {
        Ok(bytes) => ron::de::from_bytes(&bytes)
            .map_err(|err| {
                log::warn!("Failed to parse configuration data: {err}");
            })
            .unwrap_or_default(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Default::default(),
        Err(err) => {
            log::warn!("Failed to read configuration data from file: {err}");
            Default::default()
        }
    }
}

fn save_app_config(app_dirs: &ProjectDirs, config: &Config) {
    let file_path = new_config_file_path(app_dirs, "ron");
    log::info!(
        "Saving current configuration into file: {}",
        file_path.display()
    );
    let bytes = match ron::ser::to_string_pretty(config, Default::default()) {
        Ok(data) => data.into_bytes(),
        Err(err) => {
            log::warn!("Failed to store configuration data: {err}");
            return;
        }
    };
    if let Some(parent_path) = file_path.parent() {
        if let Err(err) = fs::create_dir_all(parent_path) {
            log::warn!("Failed to create parent directories for configuration file: {err}");
        }
    }
    if let Err(err) = fs::write(&file_path, bytes) {
        log::warn!("Failed to write configuration data into file: {err}");
    }
}

async fn ctrl_c_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to await Ctrl-C signal: {err}");
        // Only terminate when the server stops on its own
        std::future::pending::<()>().await;
    }
    log::info!("Received Ctrl-C signal");
}

async fn observe_runtime_state(mut current_state_rx: watch::Receiver<Option<State>>) {
    while current_state_rx.changed().await.is_ok() {
        let current_state = *current_state_rx.borrow_and_update();
        log::debug!("Runtime state changed: {current_state:?}");
        if let Some(State::Listening { socket_addr }) = current_state {
            // Publish socket address on stdout
            println!("{socket_addr}");
        }
    }
}

fn main() -> ExitCode {
    env::init_environment();

    if let Err(err) = env::init_tracing_and_logging() {
        eprintln!("Failed to initialize tracing and logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Ok(exe_path) = current_exe() {
        log::info!("Executable: {}", exe_path.display());
    }
    log::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let initial_config: Config = if env::parse_default_config().unwrap_or(false) {
        log::info!("Using initial default configuration");
        Default::default()
    } else {
        app_dirs().as_ref().map(load_app_config).unwrap_or_default()
    };
    log::debug!("Initial configuration: {initial_config:?}");

    // Override config with environment variables
    log::info!("Patching configuration from .env file and environment variables");
    let mut config = initial_config.clone();
    env::parse_config_into(&mut config);
    let save_config_on_exit = if config == initial_config {
        true
    } else {
        log::debug!("Patched configuration: {config:?}");
        // Don't save on exit if using a temporary configuration
        false
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("Failed to create Tokio runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let (current_state_tx, current_state_rx) = watch::channel(None);
    let res = runtime.block_on({
        let config = config.clone();
        async move {
            let observer = tokio::spawn(observe_runtime_state(current_state_rx));
            let res = runtime::run(config, ctrl_c_signal(), current_state_tx).await;
            // Finishes after the sender has been dropped
            if let Err(err) = observer.await {
                log::warn!("Failed to observe runtime state: {err}");
            }
            res
        }
    });

    let exit_code = match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Runtime terminated with error: {err:#}");
            ExitCode::FAILURE
        }
    };

    if save_config_on_exit {
        if let Some(app_dirs) = app_dirs() {
            save_app_config(&app_dirs, &config);
        }
    } else {
        log::info!("Discarding current configuration");
    }

    log::info!("Exiting");
    exit_code
}
