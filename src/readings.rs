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

//! Snapshot of every value a chip exposes, ready for serialization.

use serde::Serialize;

use crate::constants::{FeatureType, SubfeatureType};
use crate::error::Result;
use crate::subfeature::Subfeature;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubfeatureReading {
    pub name: Option<String>,
    pub number: i32,
    #[serde(rename = "type")]
    pub kind: i32,
    pub writable: bool,
    /// `None` when the subfeature is not readable or the read failed.
    pub value: Option<f64>,
}

impl SubfeatureReading {
    pub(crate) fn new(subfeature: &Subfeature, value: Option<f64>) -> Self {
        Self {
            name: subfeature.name().map(str::to_owned),
            number: subfeature.number(),
            kind: subfeature.kind().0,
            writable: subfeature.is_writable(),
            value,
        }
    }

    pub fn subfeature_type(&self) -> SubfeatureType {
        SubfeatureType(self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureReading {
    pub name: Option<String>,
    pub label: String,
    #[serde(serialize_with = "serialize_feature_type")]
    pub kind: FeatureType,
    pub subfeatures: Vec<SubfeatureReading>,
}

impl FeatureReading {
    /// First subfeature of the given kind, e.g. `TEMP_INPUT`.
    pub fn get(&self, kind: SubfeatureType) -> Option<&SubfeatureReading> {
        self.subfeatures.iter().find(|s| s.kind == kind.0)
    }
}

fn serialize_feature_type<S: serde::Serializer>(
    kind: &FeatureType,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match kind.name() {
        Some(name) => serializer.serialize_str(name),
        None => serializer.serialize_i32(kind.0),
    }
}

/// Readings of one detected chip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipReadings {
    /// Canonical name, e.g. `coretemp-isa-0000`.
    pub chip: String,
    /// Adapter the chip sits on, e.g. `ISA adapter`.
    pub adapter: Option<String>,
    pub features: Vec<FeatureReading>,
}

/// Pretty-printed JSON for a set of chip readings.
pub fn to_json(readings: &[ChipReadings]) -> Result<String> {
    Ok(serde_json::to_string_pretty(readings)?)
}
