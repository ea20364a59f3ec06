/*
 * This file is part of lmsensors-rs.
 *
 * Copyright (C) 2025 lmsensors-rs contributors
 *
 * lmsensors-rs is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * lmsensors-rs is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with lmsensors-rs. If not, see <https://www.gnu.org/licenses/>.
 */

//! Settings for [`Sensors`](crate::Sensors) initialization.
//!
//! Looked up, in order: an explicit JSON file, the `LMSENSORS_CONFIG`
//! environment variable (path to a libsensors configuration file), then
//! `$XDG_CONFIG_HOME/lmsensors/config.json`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SensorsError};

/// Environment variable naming a libsensors configuration file.
pub const CONFIG_ENV: &str = "LMSENSORS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorsConfig {
    /// libsensors configuration file; `None` lets the library use its default
    /// (`/etc/sensors3.conf` plus `/etc/sensors.d`).
    #[serde(default)]
    pub config_file: Option<PathBuf>,
}

impl SensorsConfig {
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Read a JSON settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| SensorsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: SensorsConfig = serde_json::from_str(&data)?;
        debug!(path = %path.display(), "Loaded sensors settings");
        Ok(cfg)
    }

    /// Settings taken from `LMSENSORS_CONFIG`, if set and non-empty.
    pub fn from_env() -> Option<Self> {
        match env::var(CONFIG_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                Some(Self::new(Some(PathBuf::from(value.trim()))))
            }
            _ => None,
        }
    }

    /// Environment first, then the per-user settings file, then defaults.
    pub fn discover() -> Result<Self> {
        if let Some(cfg) = Self::from_env() {
            return Ok(cfg);
        }
        let path = settings_path();
        if path.is_file() {
            return Self::load(&path);
        }
        Ok(Self::default())
    }

    /// The configured file, if any, must exist and be a regular file.
    pub fn validate(&self) -> Result<()> {
        let Some(path) = &self.config_file else {
            return Ok(());
        };
        if path.as_os_str().is_empty() {
            return Err(SensorsError::config("config_file must not be empty"));
        }
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(SensorsError::config(format!(
                "{} is not a regular file",
                path.display()
            ))),
            Err(source) => Err(SensorsError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Location of the per-user settings file.
pub fn settings_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("lmsensors").join("config.json");
    }
    if let Ok(home) = env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("lmsensors")
            .join("config.json");
    }
    PathBuf::from("/etc/lmsensors/config.json")
}
