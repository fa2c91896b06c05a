// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{env, path::PathBuf, str::ParseBoolError};

use anyhow::Error;
use tracing::{Subscriber, subscriber::set_global_default};
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ENDPOINT_PORT_EPHEMERAL};

pub(crate) fn init_environment() {
    if let Ok(path) = dotenvy::dotenv() {
        // Print to stderr because logging has not been initialized yet
        eprintln!("Loaded environment from dotenv file {}", path.display());
    }
}

const TRACING_SUBSCRIBER_ENV_FILTER_DEFAULT: &str = "info";

fn create_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|err| {
        if let Ok(rust_log_from_env) = env::var("RUST_LOG") {
            if !rust_log_from_env.is_empty() {
                eprintln!("Failed to parse RUST_LOG environment variable '{rust_log_from_env}': {err}");
            }
        }
        EnvFilter::new(TRACING_SUBSCRIBER_ENV_FILTER_DEFAULT)
    })
}

fn create_tracing_subscriber() -> impl Subscriber {
    tracing_subscriber::fmt()
        .with_env_filter(create_env_filter())
        .with_writer(std::io::stderr)
        .finish()
}

pub(crate) fn init_tracing_and_logging() -> anyhow::Result<()> {
    // Capture and redirect all log messages as tracing events
    LogTracer::init()?;

    let subscriber = create_tracing_subscriber();
    set_global_default(subscriber)?;

    Ok(())
}

fn parse_bool_var(var: &str) -> Result<bool, ParseBoolError> {
    var.to_lowercase().parse::<bool>().or_else(|err| {
        if let Ok(val) = var.parse::<u8>() {
            match val {
                0 => return Ok(false),
                1 => return Ok(true),
                _ => (),
            }
        }
        Err(err)
    })
}

const DEFAULT_CONFIG_ENV: &str = "DEFAULT_CONFIG";

/// Ignore the stored configuration and start with the defaults.
pub(crate) fn parse_default_config() -> anyhow::Result<bool> {
    env::var(DEFAULT_CONFIG_ENV)
        .map_err(Into::into)
        .and_then(|var| {
            tracing::debug!("{DEFAULT_CONFIG_ENV} = {var}");
            parse_bool_var(&var).map_err(|err| {
                tracing::warn!("Failed to parse {DEFAULT_CONFIG_ENV} = {var}: {err}");
                Error::from(err)
            })
        })
}

const ENDPOINT_IP_ENV: &str = "ENDPOINT_IP";

const ENDPOINT_PORT_ENV: &str = "ENDPOINT_PORT";

const DATA_DIR_ENV: &str = "DATA_DIR";

const STATIC_DIR_ENV: &str = "STATIC_DIR";

/// Override the configuration with environment variables.
///
/// Unparsable values are ignored with a warning.
pub(crate) fn parse_config_into(config: &mut Config) {
    if let Ok(var) = env::var(ENDPOINT_IP_ENV) {
        tracing::debug!("{ENDPOINT_IP_ENV} = {var}");
        match var.parse() {
            Ok(ip_addr) => config.network.endpoint.ip_addr = ip_addr,
            Err(err) => tracing::warn!("Failed to parse {ENDPOINT_IP_ENV} = {var}: {err}"),
        }
    }
    if let Ok(var) = env::var(ENDPOINT_PORT_ENV) {
        tracing::debug!("{ENDPOINT_PORT_ENV} = {var}");
        if var.trim().is_empty() {
            config.network.endpoint.port = ENDPOINT_PORT_EPHEMERAL;
        } else {
            match var.parse() {
                Ok(port) => config.network.endpoint.port = port,
                Err(err) => tracing::warn!("Failed to parse {ENDPOINT_PORT_ENV} = {var}: {err}"),
            }
        }
    }
    if let Ok(var) = env::var(DATA_DIR_ENV) {
        tracing::debug!("{DATA_DIR_ENV} = {var}");
        if var.trim().is_empty() {
            tracing::warn!("Ignoring empty {DATA_DIR_ENV}");
        } else {
            config.storage.data_dir = PathBuf::from(var);
        }
    }
    if let Ok(var) = env::var(STATIC_DIR_ENV) {
        tracing::debug!("{STATIC_DIR_ENV} = {var}");
        config.static_dir = (!var.trim().is_empty()).then(|| PathBuf::from(var));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_vars() {
        assert_eq!(Ok(true), parse_bool_var("TRUE"));
        assert_eq!(Ok(true), parse_bool_var("1"));
        assert_eq!(Ok(false), parse_bool_var("false"));
        assert_eq!(Ok(false), parse_bool_var("0"));
        assert!(parse_bool_var("2").is_err());
        assert!(parse_bool_var("yes").is_err());
    }
}
