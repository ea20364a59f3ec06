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

//! Chip names and the per-chip operations built on them.
//!
//! [`ChipName`] is plain data: prefix, bus, address and path. A [`Chip`]
//! pairs a name with the [`Sensors`] instance it came from and carries every
//! operation that needs libsensors (features, values, formatting).
//!
//! Wildcards (`None` prefix, [`BusType::ANY`], [`BUS_NR_ANY`],
//! [`CHIP_NAME_ADDR_ANY`]) are fine for detection and
//! [`Chip::do_chip_sets`], but libsensors rejects them for labels, single
//! values and formatting.

use std::fmt;
use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::backend::{Backend, Cursor};
use crate::constants::{BusType, SubfeatureType, BUS_NR_ANY, CHIP_NAME_ADDR_ANY};
use crate::error::{ensure_no_nul, Result, SensorsError};
use crate::feature::Feature;
use crate::readings::{FeatureReading, SubfeatureReading};
use crate::sensors::Sensors;
use crate::subfeature::Subfeature;

/// Identifier of one chip, or of a family of chips when wildcards are used.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ChipName {
    prefix: Option<String>,
    bus_type: BusType,
    bus_nr: i16,
    addr: i32,
    path: Option<String>,
}

impl ChipName {
    pub fn new(
        prefix: Option<&str>,
        bus_type: BusType,
        bus_nr: i16,
        addr: i32,
        path: Option<&str>,
    ) -> Result<Self> {
        let mut name = Self {
            bus_type,
            bus_nr,
            addr,
            ..Self::default()
        };
        name.set_prefix(prefix)?;
        name.set_path(path)?;
        Ok(name)
    }

    /// Build from strings that came out of the library and cannot hold NULs.
    pub(crate) fn from_parts(
        prefix: Option<String>,
        bus_type: BusType,
        bus_nr: i16,
        addr: i32,
        path: Option<String>,
    ) -> Self {
        Self {
            prefix,
            bus_type,
            bus_nr,
            addr,
            path,
        }
    }

    /// A pattern matching every chip.
    pub fn any() -> Self {
        Self {
            prefix: None,
            bus_type: BusType::ANY,
            bus_nr: BUS_NR_ANY,
            addr: CHIP_NAME_ADDR_ANY,
            path: None,
        }
    }

    /// `None` is the prefix wildcard.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn set_prefix(&mut self, prefix: Option<&str>) -> Result<()> {
        if let Some(prefix) = prefix {
            ensure_no_nul("prefix", prefix)?;
        }
        self.prefix = prefix.map(str::to_owned);
        Ok(())
    }

    pub fn bus_type(&self) -> BusType {
        self.bus_type
    }

    pub fn set_bus_type(&mut self, bus_type: BusType) {
        self.bus_type = bus_type;
    }

    pub fn bus_nr(&self) -> i16 {
        self.bus_nr
    }

    pub fn set_bus_nr(&mut self, bus_nr: i16) {
        self.bus_nr = bus_nr;
    }

    pub fn addr(&self) -> i32 {
        self.addr
    }

    pub fn set_addr(&mut self, addr: i32) {
        self.addr = addr;
    }

    /// sysfs path of the device, when known.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: Option<&str>) -> Result<()> {
        if let Some(path) = path {
            ensure_no_nul("path", path)?;
        }
        self.path = path.map(str::to_owned);
        Ok(())
    }

    pub fn with_prefix(mut self, prefix: Option<&str>) -> Result<Self> {
        self.set_prefix(prefix)?;
        Ok(self)
    }

    pub fn with_bus(mut self, bus_type: BusType, bus_nr: i16) -> Self {
        self.bus_type = bus_type;
        self.bus_nr = bus_nr;
        self
    }

    pub fn with_addr(mut self, addr: i32) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_path(mut self, path: Option<&str>) -> Result<Self> {
        self.set_path(path)?;
        Ok(self)
    }

    /// `ChipName(prefix="coretemp", bus_type=1, bus_nr=0, addr=0, path=None)`
    pub fn repr(&self) -> String {
        format!("{:?}", self)
    }

    /// Same test libsensors applies before refusing a query.
    pub fn has_wildcards(&self) -> bool {
        self.prefix.is_none()
            || self.bus_type == BusType::ANY
            || self.bus_nr == BUS_NR_ANY
            || self.addr == CHIP_NAME_ADDR_ANY
    }
}

impl fmt::Debug for ChipName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChipName(prefix=")?;
        match &self.prefix {
            Some(prefix) => write!(f, "{:?}", prefix)?,
            None => write!(f, "None")?,
        }
        write!(
            f,
            ", bus_type={}, bus_nr={}, addr={}, path=",
            self.bus_type.0, self.bus_nr, self.addr
        )?;
        match &self.path {
            Some(path) => write!(f, "{:?})", path),
            None => write!(f, "None)"),
        }
    }
}

/// A chip name bound to the library instance that can answer for it.
pub struct Chip<'a, B: Backend> {
    sensors: &'a Sensors<B>,
    name: ChipName,
}

impl<'a, B: Backend> Chip<'a, B> {
    pub(crate) fn new(sensors: &'a Sensors<B>, name: ChipName) -> Self {
        Self { sensors, name }
    }

    pub fn name(&self) -> &ChipName {
        &self.name
    }

    pub fn into_name(self) -> ChipName {
        self.name
    }

    fn backend(&self) -> &'a B {
        self.sensors.backend()
    }

    /// Lazily walk this chip's features.
    pub fn iter_features(&self) -> Box<dyn Iterator<Item = Feature> + '_> {
        let backend = self.backend();
        Box::new(Cursor::new(move |nr: &mut i32| backend.feature(&self.name, nr)))
    }

    /// All features of the chip, in library order. Each call starts over.
    pub fn features(&self) -> Vec<Feature> {
        let features: Vec<Feature> = self.iter_features().collect();
        trace!(chip = ?self.name, count = features.len(), "Enumerated features");
        features
    }

    /// Lazily walk the subfeatures of `feature`.
    pub fn iter_subfeatures<'s>(
        &'s self,
        feature: &'s Feature,
    ) -> Box<dyn Iterator<Item = Subfeature> + 's> {
        let backend = self.backend();
        Box::new(Cursor::new(move |nr: &mut i32| {
            backend.subfeature_at(&self.name, feature, nr)
        }))
    }

    pub fn all_subfeatures(&self, feature: &Feature) -> Vec<Subfeature> {
        let subfeatures: Vec<Subfeature> = self.iter_subfeatures(feature).collect();
        trace!(
            chip = ?self.name,
            feature = ?feature.name(),
            count = subfeatures.len(),
            "Enumerated subfeatures"
        );
        subfeatures
    }

    /// The subfeature of `feature` with the given kind, if the chip has one.
    pub fn subfeature(&self, feature: &Feature, kind: SubfeatureType) -> Option<Subfeature> {
        self.backend().subfeature(&self.name, feature, kind)
    }

    /// Display label of `feature` (configured label or the feature name).
    pub fn label(&self, feature: &Feature) -> Result<String> {
        self.backend().label(&self.name, feature).ok_or_else(|| {
            SensorsError::NotFound(format!(
                "no label for feature {} of {:?}",
                feature.name().unwrap_or("None"),
                self.name
            ))
        })
    }

    /// Read a subfeature value, with the configuration's compute statements applied.
    pub fn value(&self, subfeature_nr: i32) -> Result<f64> {
        self.backend()
            .value(&self.name, subfeature_nr)
            .map_err(|status| self.sensors.native_error(status))
    }

    /// Like [`Chip::value`] but a library failure yields `Ok(None)`.
    pub fn value_or_none(&self, subfeature_nr: i32) -> Result<Option<f64>> {
        match self.value(subfeature_nr) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_native() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn set_value(&self, subfeature_nr: i32, value: f64) -> Result<()> {
        let status = self.backend().set_value(&self.name, subfeature_nr, value);
        self.sensors.check(status)
    }

    /// Run every `set` statement of the configuration that applies to this
    /// chip name. Wildcards are allowed here.
    pub fn do_chip_sets(&self) -> Result<()> {
        let status = self.backend().do_chip_sets(&self.name);
        self.sensors.check(status)
    }

    /// Canonical text form, e.g. `coretemp-isa-0000`.
    pub fn format(&self) -> Result<String> {
        self.backend()
            .format_chip_name(&self.name)
            .map_err(|status| self.sensors.native_error(status))
    }

    /// Label and every readable value of every feature of this chip.
    ///
    /// Unreadable values come back as `None`; a feature without a label
    /// falls back to its name.
    pub fn readings(&self) -> Result<Vec<FeatureReading>> {
        let mut readings = Vec::new();
        for feature in self.iter_features() {
            let label = match self.label(&feature) {
                Ok(label) => label,
                Err(SensorsError::NotFound(_)) => feature.name().unwrap_or_default().to_string(),
                Err(err) => return Err(err),
            };
            let mut subfeatures = Vec::new();
            for subfeature in self.iter_subfeatures(&feature) {
                let value = if subfeature.is_readable() {
                    self.value_or_none(subfeature.number())?
                } else {
                    None
                };
                subfeatures.push(SubfeatureReading::new(&subfeature, value));
            }
            readings.push(FeatureReading {
                name: feature.name().map(str::to_owned),
                label,
                kind: feature.kind(),
                subfeatures,
            });
        }
        Ok(readings)
    }
}

impl<B: Backend> Deref for Chip<'_, B> {
    type Target = ChipName;

    fn deref(&self) -> &ChipName {
        &self.name
    }
}

impl<B: Backend> DerefMut for Chip<'_, B> {
    fn deref_mut(&mut self) -> &mut ChipName {
        &mut self.name
    }
}

impl<B: Backend> Clone for Chip<'_, B> {
    fn clone(&self) -> Self {
        Self {
            sensors: self.sensors,
            name: self.name.clone(),
        }
    }
}

impl<B: Backend> PartialEq for Chip<'_, B> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<B: Backend> PartialEq<ChipName> for Chip<'_, B> {
    fn eq(&self, other: &ChipName) -> bool {
        &self.name == other
    }
}

impl<B: Backend> fmt::Debug for Chip<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.name, f)
    }
}
