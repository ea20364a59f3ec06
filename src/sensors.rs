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

//! The library facade: initialization, chip detection and global settings.

use std::cell::Cell;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::backend::{Backend, Cursor};
use crate::chip::{Chip, ChipName};
use crate::config::SensorsConfig;
use crate::constants::BusType;
use crate::error::{ensure_no_nul, Result, SensorsError};
use crate::handlers::{self, FatalErrorHandler, ParseErrorHandler};
use crate::readings::ChipReadings;

#[cfg(feature = "native")]
use crate::native::LibSensors;

/// An initialized libsensors instance.
///
/// libsensors keeps its state in process globals, so only one `Sensors`
/// should be alive at a time. Dropping it releases the library state.
pub struct Sensors<B: Backend> {
    backend: B,
    initialized: Cell<bool>,
}

#[cfg(feature = "native")]
impl Sensors<LibSensors> {
    pub fn builder() -> SensorsBuilder<LibSensors> {
        SensorsBuilder::new(LibSensors::new())
    }

    /// Initialize the system libsensors with its default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().init()
    }
}

impl<B: Backend> Sensors<B> {
    /// Builder over an explicit backend.
    pub fn with_backend(backend: B) -> SensorsBuilder<B> {
        SensorsBuilder::new(backend)
    }

    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// (Re)load the library configuration.
    ///
    /// Any previous state is cleaned up first. `None` loads the library's
    /// default configuration files. A config file that cannot be opened
    /// leaves the current state untouched.
    pub fn init(&self, config_file: Option<&Path>) -> Result<()> {
        let file = config_file
            .map(|path| {
                File::open(path).map_err(|source| SensorsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            })
            .transpose()?;

        self.cleanup();

        // `file` is closed when it goes out of scope, whatever the outcome.
        let status = match &file {
            Some(file) => self.backend.init_from(file),
            None => self.backend.init(),
        };
        self.check(status)?;

        self.initialized.set(true);
        info!(config = ?config_file, "libsensors initialized");
        Ok(())
    }

    /// Release everything the library loaded. Safe to call repeatedly.
    pub fn cleanup(&self) {
        if self.initialized.replace(false) {
            self.backend.cleanup();
            debug!("libsensors cleaned up");
        }
    }

    pub(crate) fn native_error(&self, status: i32) -> SensorsError {
        let message = self.backend.strerror(status);
        warn!(status, error = %message, "libsensors call failed");
        SensorsError::native(status, message)
    }

    pub(crate) fn check(&self, status: i32) -> Result<()> {
        if status != 0 {
            return Err(self.native_error(status));
        }
        Ok(())
    }

    /// Wrap a chip name for queries against this instance.
    pub fn chip(&self, name: ChipName) -> Chip<'_, B> {
        Chip::new(self, name)
    }

    /// Lazily walk the detected chips, optionally filtered by a pattern
    /// that may contain wildcards.
    pub fn iter_detected_chips<'s>(
        &'s self,
        pattern: Option<&'s ChipName>,
    ) -> impl Iterator<Item = Chip<'s, B>> + 's {
        let backend = &self.backend;
        Cursor::new(move |nr: &mut i32| match pattern {
            Some(pattern) => backend.detected_chip_matching(pattern, nr),
            None => backend.detected_chip(nr),
        })
        .map(move |name| Chip::new(self, name))
    }

    /// All detected chips matching `pattern` (every chip for `None`).
    /// Each call restarts the enumeration.
    pub fn detected_chips(&self, pattern: Option<&ChipName>) -> Vec<Chip<'_, B>> {
        let backend = &self.backend;
        let chips: Vec<Chip<'_, B>> = Cursor::new(|nr: &mut i32| match pattern {
            Some(pattern) => backend.detected_chip_matching(pattern, nr),
            None => backend.detected_chip(nr),
        })
        .map(|name| Chip::new(self, name))
        .collect();
        trace!(count = chips.len(), pattern = ?pattern, "Enumerated detected chips");
        chips
    }

    /// Parse a textual chip name such as `coretemp-isa-0000` or `it87-*`.
    pub fn parse_chip_name(&self, text: &str) -> Result<Chip<'_, B>> {
        ensure_no_nul("chip name", text)?;
        let name = self
            .backend
            .parse_chip_name(text)
            .map_err(|status| self.native_error(status))?;
        Ok(Chip::new(self, name))
    }

    /// Human-readable adapter name for a bus, e.g. `ISA adapter`.
    pub fn adapter_name(&self, bus_type: BusType, bus_nr: i16) -> Option<String> {
        self.backend.adapter_name(bus_type, bus_nr)
    }

    /// Version string of the loaded libsensors.
    pub fn libsensors_version(&self) -> String {
        self.backend.version()
    }

    pub fn set_parse_error_handler<F>(&self, handler: F)
    where
        F: Fn(&str, Option<&str>, i32) + Send + Sync + 'static,
    {
        handlers::set_parse_error_handler(handler);
    }

    pub fn set_fatal_error_handler<F>(&self, handler: F)
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        handlers::set_fatal_error_handler(handler);
    }

    pub fn clear_parse_error_handler(&self) {
        handlers::clear_parse_error_handler();
    }

    pub fn clear_fatal_error_handler(&self) {
        handlers::clear_fatal_error_handler();
    }

    /// Snapshot every detected chip.
    pub fn read_all(&self) -> Result<Vec<ChipReadings>> {
        let mut all = Vec::new();
        for chip in self.iter_detected_chips(None) {
            all.push(ChipReadings {
                chip: chip.format()?,
                adapter: self.adapter_name(chip.bus_type(), chip.bus_nr()),
                features: chip.readings()?,
            });
        }
        Ok(all)
    }
}

impl<B: Backend> Drop for Sensors<B> {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Configures and initializes a [`Sensors`] instance.
pub struct SensorsBuilder<B: Backend> {
    backend: B,
    config: SensorsConfig,
    parse_error_handler: Option<Arc<ParseErrorHandler>>,
    fatal_error_handler: Option<Arc<FatalErrorHandler>>,
}

impl<B: Backend> SensorsBuilder<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            config: SensorsConfig::default(),
            parse_error_handler: None,
            fatal_error_handler: None,
        }
    }

    /// Swap the backend, keeping every other setting.
    pub fn backend<C: Backend>(self, backend: C) -> SensorsBuilder<C> {
        SensorsBuilder {
            backend,
            config: self.config,
            parse_error_handler: self.parse_error_handler,
            fatal_error_handler: self.fatal_error_handler,
        }
    }

    pub fn config(mut self, config: SensorsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.config_file = Some(path.into());
        self
    }

    pub fn parse_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, Option<&str>, i32) + Send + Sync + 'static,
    {
        self.parse_error_handler = Some(Arc::new(handler));
        self
    }

    pub fn fatal_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        self.fatal_error_handler = Some(Arc::new(handler));
        self
    }

    /// Install the error hooks and handlers, then load the configuration.
    pub fn init(self) -> Result<Sensors<B>> {
        self.config.validate()?;

        self.backend.install_error_hooks();
        if let Some(handler) = self.parse_error_handler {
            handlers::install_parse_error_handler(Some(handler));
        }
        if let Some(handler) = self.fatal_error_handler {
            handlers::install_fatal_error_handler(Some(handler));
        }

        let sensors = Sensors {
            backend: self.backend,
            initialized: Cell::new(false),
        };
        sensors.init(self.config.config_file.as_deref())?;
        Ok(sensors)
    }
}
