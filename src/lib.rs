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

//! lmsensors - safe Rust binding for the lm_sensors library (libsensors)
//!
//! Enumerate hardware monitoring chips, their features and subfeatures,
//! read and write values, parse and format chip names, and hook the
//! library's configuration error callbacks.
//!
//! ```no_run
//! # #[cfg(feature = "native")]
//! # fn main() -> lmsensors::Result<()> {
//! use lmsensors::Sensors;
//!
//! let sensors = Sensors::new()?;
//! for chip in sensors.detected_chips(None) {
//!     println!("{}", chip.format()?);
//!     for feature in chip.features() {
//!         for sub in chip.all_subfeatures(&feature) {
//!             println!("  {} = {:?}", sub.name().unwrap_or("?"), chip.value_or_none(sub.number())?);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "native"))]
//! # fn main() {}
//! ```
//!
//! The native backend is behind the `native` feature. Without it the crate
//! still builds, and any [`Backend`] implementation can drive [`Sensors`].

pub mod backend;
pub mod chip;
pub mod config;
pub mod constants;
pub mod error;
pub mod feature;
pub mod handlers;
#[cfg(feature = "native")]
pub mod native;
pub mod readings;
pub mod sensors;
pub mod subfeature;

#[cfg(test)]
pub mod test_utils;

pub use backend::{Backend, Cursor};
pub use chip::{Chip, ChipName};
pub use config::SensorsConfig;
pub use constants::{
    status, BusType, FeatureType, SubfeatureFlags, SubfeatureType, API_VERSION, BUS_NR_ANY,
    BUS_NR_IGNORE, CHIP_NAME_ADDR_ANY,
};
pub use error::{Result, SensorsError};
pub use feature::{Feature, FeatureInternals};
#[cfg(feature = "native")]
pub use native::LibSensors;
pub use readings::{ChipReadings, FeatureReading, SubfeatureReading};
pub use sensors::{Sensors, SensorsBuilder};
pub use subfeature::Subfeature;
