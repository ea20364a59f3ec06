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

//! Typed mirrors of the libsensors header constants.
//!
//! Values are taken from `lmsensors-sys` so they stay byte-for-byte identical
//! to `sensors/sensors.h`. Unknown codes coming back from the library are
//! kept as-is inside the newtypes.

use std::fmt;

use bitflags::bitflags;
use lmsensors_sys as sys;

/// `SENSORS_API_VERSION` of the header these bindings were written against.
pub const API_VERSION: i32 = sys::SENSORS_API_VERSION;

/// Wildcard chip address.
pub const CHIP_NAME_ADDR_ANY: i32 = sys::SENSORS_CHIP_NAME_ADDR_ANY;

/// Wildcard bus number.
pub const BUS_NR_ANY: i16 = sys::SENSORS_BUS_NR_ANY;

/// Bus number to ignore when matching (virtual/ISA chips).
pub const BUS_NR_IGNORE: i16 = sys::SENSORS_BUS_NR_IGNORE;

// ============================================================================
// Native status codes (sensors/error.h)
// ============================================================================

pub mod status {
    use lmsensors_sys as sys;

    pub const ERR_WILDCARDS: i32 = sys::SENSORS_ERR_WILDCARDS;
    pub const ERR_NO_ENTRY: i32 = sys::SENSORS_ERR_NO_ENTRY;
    pub const ERR_ACCESS_R: i32 = sys::SENSORS_ERR_ACCESS_R;
    pub const ERR_KERNEL: i32 = sys::SENSORS_ERR_KERNEL;
    pub const ERR_DIV_ZERO: i32 = sys::SENSORS_ERR_DIV_ZERO;
    pub const ERR_CHIP_NAME: i32 = sys::SENSORS_ERR_CHIP_NAME;
    pub const ERR_BUS_NAME: i32 = sys::SENSORS_ERR_BUS_NAME;
    pub const ERR_PARSE: i32 = sys::SENSORS_ERR_PARSE;
    pub const ERR_ACCESS_W: i32 = sys::SENSORS_ERR_ACCESS_W;
    pub const ERR_IO: i32 = sys::SENSORS_ERR_IO;
    pub const ERR_RECURSION: i32 = sys::SENSORS_ERR_RECURSION;
}

// ============================================================================
// Bus types
// ============================================================================

/// Bus a chip sits on (`sensors_bus_id.type`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BusType(pub i16);

impl BusType {
    pub const ANY: BusType = BusType(sys::SENSORS_BUS_TYPE_ANY);
    pub const I2C: BusType = BusType(sys::SENSORS_BUS_TYPE_I2C);
    pub const ISA: BusType = BusType(sys::SENSORS_BUS_TYPE_ISA);
    pub const PCI: BusType = BusType(sys::SENSORS_BUS_TYPE_PCI);
    pub const SPI: BusType = BusType(sys::SENSORS_BUS_TYPE_SPI);
    pub const VIRTUAL: BusType = BusType(sys::SENSORS_BUS_TYPE_VIRTUAL);
    pub const ACPI: BusType = BusType(sys::SENSORS_BUS_TYPE_ACPI);
    pub const HID: BusType = BusType(sys::SENSORS_BUS_TYPE_HID);
    pub const MDIO: BusType = BusType(sys::SENSORS_BUS_TYPE_MDIO);
    pub const SCSI: BusType = BusType(sys::SENSORS_BUS_TYPE_SCSI);

    /// Short name used by libsensors in formatted chip names.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::ANY => Some("*"),
            Self::I2C => Some("i2c"),
            Self::ISA => Some("isa"),
            Self::PCI => Some("pci"),
            Self::SPI => Some("spi"),
            Self::VIRTUAL => Some("virtual"),
            Self::ACPI => Some("acpi"),
            Self::HID => Some("hid"),
            Self::MDIO => Some("mdio"),
            Self::SCSI => Some("scsi"),
            _ => None,
        }
    }

    /// Inverse of [`BusType::name`].
    pub fn from_name(name: &str) -> Option<BusType> {
        [
            Self::ANY,
            Self::I2C,
            Self::ISA,
            Self::PCI,
            Self::SPI,
            Self::VIRTUAL,
            Self::ACPI,
            Self::HID,
            Self::MDIO,
            Self::SCSI,
        ]
        .into_iter()
        .find(|bus| bus.name() == Some(name))
    }

    pub fn is_wildcard(self) -> bool {
        self == Self::ANY
    }
}

impl fmt::Debug for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "BusType({})", name),
            None => write!(f, "BusType({})", self.0),
        }
    }
}

impl From<i16> for BusType {
    fn from(raw: i16) -> Self {
        BusType(raw)
    }
}

// ============================================================================
// Feature types
// ============================================================================

/// Category of a [`Feature`](crate::Feature) (`sensors_feature_type`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeatureType(pub i32);

impl FeatureType {
    pub const IN: FeatureType = FeatureType(sys::SENSORS_FEATURE_IN);
    pub const FAN: FeatureType = FeatureType(sys::SENSORS_FEATURE_FAN);
    pub const TEMP: FeatureType = FeatureType(sys::SENSORS_FEATURE_TEMP);
    pub const POWER: FeatureType = FeatureType(sys::SENSORS_FEATURE_POWER);
    pub const ENERGY: FeatureType = FeatureType(sys::SENSORS_FEATURE_ENERGY);
    pub const CURR: FeatureType = FeatureType(sys::SENSORS_FEATURE_CURR);
    pub const HUMIDITY: FeatureType = FeatureType(sys::SENSORS_FEATURE_HUMIDITY);
    pub const MAX_MAIN: FeatureType = FeatureType(sys::SENSORS_FEATURE_MAX_MAIN);
    pub const VID: FeatureType = FeatureType(sys::SENSORS_FEATURE_VID);
    pub const INTRUSION: FeatureType = FeatureType(sys::SENSORS_FEATURE_INTRUSION);
    pub const MAX_OTHER: FeatureType = FeatureType(sys::SENSORS_FEATURE_MAX_OTHER);
    pub const BEEP_ENABLE: FeatureType = FeatureType(sys::SENSORS_FEATURE_BEEP_ENABLE);
    pub const MAX: FeatureType = FeatureType(sys::SENSORS_FEATURE_MAX);
    pub const UNKNOWN: FeatureType = FeatureType(sys::SENSORS_FEATURE_UNKNOWN);

    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::IN => Some("in"),
            Self::FAN => Some("fan"),
            Self::TEMP => Some("temp"),
            Self::POWER => Some("power"),
            Self::ENERGY => Some("energy"),
            Self::CURR => Some("curr"),
            Self::HUMIDITY => Some("humidity"),
            Self::VID => Some("vid"),
            Self::INTRUSION => Some("intrusion"),
            Self::BEEP_ENABLE => Some("beep_enable"),
            Self::UNKNOWN => Some("unknown"),
            _ => None,
        }
    }
}

impl fmt::Debug for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "FeatureType({})", name),
            None => write!(f, "FeatureType({:#x})", self.0),
        }
    }
}

impl From<i32> for FeatureType {
    fn from(raw: i32) -> Self {
        FeatureType(raw)
    }
}

// ============================================================================
// Subfeature types
// ============================================================================

/// Kind of a [`Subfeature`](crate::Subfeature) (`sensors_subfeature_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SubfeatureType(pub i32);

impl SubfeatureType {
    pub const IN_INPUT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_INPUT);
    pub const IN_MIN: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_MIN);
    pub const IN_MAX: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_MAX);
    pub const IN_LCRIT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_LCRIT);
    pub const IN_CRIT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_CRIT);
    pub const IN_AVERAGE: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_AVERAGE);
    pub const IN_LOWEST: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_LOWEST);
    pub const IN_HIGHEST: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_HIGHEST);
    pub const IN_ALARM: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_ALARM);
    pub const IN_MIN_ALARM: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_MIN_ALARM);
    pub const IN_MAX_ALARM: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_MAX_ALARM);
    pub const IN_BEEP: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_BEEP);
    pub const IN_LCRIT_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_IN_LCRIT_ALARM);
    pub const IN_CRIT_ALARM: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_IN_CRIT_ALARM);

    pub const FAN_INPUT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_FAN_INPUT);
    pub const FAN_MIN: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_FAN_MIN);
    pub const FAN_MAX: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_FAN_MAX);
    pub const FAN_ALARM: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_FAN_ALARM);
    pub const FAN_FAULT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_FAN_FAULT);
    pub const FAN_DIV: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_FAN_DIV);
    pub const FAN_BEEP: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_FAN_BEEP);
    pub const FAN_PULSES: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_FAN_PULSES);
    pub const FAN_MIN_ALARM: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_FAN_MIN_ALARM);
    pub const FAN_MAX_ALARM: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_FAN_MAX_ALARM);

    pub const TEMP_INPUT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_INPUT);
    pub const TEMP_MAX: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_MAX);
    pub const TEMP_MAX_HYST: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_MAX_HYST);
    pub const TEMP_MIN: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_MIN);
    pub const TEMP_CRIT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_CRIT);
    pub const TEMP_CRIT_HYST: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_CRIT_HYST);
    pub const TEMP_LCRIT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_LCRIT);
    pub const TEMP_EMERGENCY: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_EMERGENCY);
    pub const TEMP_EMERGENCY_HYST: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_EMERGENCY_HYST);
    pub const TEMP_LOWEST: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_LOWEST);
    pub const TEMP_HIGHEST: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_HIGHEST);
    pub const TEMP_MIN_HYST: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_MIN_HYST);
    pub const TEMP_LCRIT_HYST: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_LCRIT_HYST);
    pub const TEMP_ALARM: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_ALARM);
    pub const TEMP_MAX_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_MAX_ALARM);
    pub const TEMP_MIN_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_MIN_ALARM);
    pub const TEMP_CRIT_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_CRIT_ALARM);
    pub const TEMP_FAULT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_FAULT);
    pub const TEMP_TYPE: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_TYPE);
    pub const TEMP_OFFSET: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_OFFSET);
    pub const TEMP_BEEP: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_BEEP);
    pub const TEMP_EMERGENCY_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_EMERGENCY_ALARM);
    pub const TEMP_LCRIT_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_TEMP_LCRIT_ALARM);

    pub const POWER_AVERAGE: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_AVERAGE);
    pub const POWER_AVERAGE_HIGHEST: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_AVERAGE_HIGHEST);
    pub const POWER_AVERAGE_LOWEST: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_AVERAGE_LOWEST);
    pub const POWER_INPUT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_INPUT);
    pub const POWER_INPUT_HIGHEST: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_INPUT_HIGHEST);
    pub const POWER_INPUT_LOWEST: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_INPUT_LOWEST);
    pub const POWER_CAP: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_CAP);
    pub const POWER_CAP_HYST: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_CAP_HYST);
    pub const POWER_MAX: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_MAX);
    pub const POWER_CRIT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_CRIT);
    pub const POWER_AVERAGE_INTERVAL: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_AVERAGE_INTERVAL);
    pub const POWER_ALARM: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_ALARM);
    pub const POWER_CAP_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_CAP_ALARM);
    pub const POWER_MAX_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_MAX_ALARM);
    pub const POWER_CRIT_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_POWER_CRIT_ALARM);

    pub const ENERGY_INPUT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_ENERGY_INPUT);

    pub const CURR_INPUT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_INPUT);
    pub const CURR_MIN: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_MIN);
    pub const CURR_MAX: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_MAX);
    pub const CURR_LCRIT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_LCRIT);
    pub const CURR_CRIT: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_CRIT);
    pub const CURR_AVERAGE: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_AVERAGE);
    pub const CURR_LOWEST: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_LOWEST);
    pub const CURR_HIGHEST: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_HIGHEST);
    pub const CURR_ALARM: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_ALARM);
    pub const CURR_MIN_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_MIN_ALARM);
    pub const CURR_MAX_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_MAX_ALARM);
    pub const CURR_BEEP: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_BEEP);
    pub const CURR_LCRIT_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_LCRIT_ALARM);
    pub const CURR_CRIT_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_CURR_CRIT_ALARM);

    pub const HUMIDITY_INPUT: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_HUMIDITY_INPUT);

    pub const VID: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_VID);

    pub const INTRUSION_ALARM: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_INTRUSION_ALARM);
    pub const INTRUSION_BEEP: SubfeatureType =
        SubfeatureType(sys::SENSORS_SUBFEATURE_INTRUSION_BEEP);

    pub const BEEP_ENABLE: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_BEEP_ENABLE);

    pub const UNKNOWN: SubfeatureType = SubfeatureType(sys::SENSORS_SUBFEATURE_UNKNOWN);

    /// Feature category this subfeature kind belongs to (high byte).
    pub fn feature_type(self) -> FeatureType {
        if self == Self::UNKNOWN {
            return FeatureType::UNKNOWN;
        }
        FeatureType(self.0 >> 8)
    }

    /// Alarm, fault and beep kinds live in the upper half of each block.
    pub fn is_alarm(self) -> bool {
        self != Self::UNKNOWN && self.0 & 0x80 != 0
    }
}

impl From<i32> for SubfeatureType {
    fn from(raw: i32) -> Self {
        SubfeatureType(raw)
    }
}

// ============================================================================
// Subfeature flags
// ============================================================================

bitflags! {
    /// `sensors_subfeature.flags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SubfeatureFlags: u32 {
        const READABLE = sys::SENSORS_MODE_R;
        const WRITABLE = sys::SENSORS_MODE_W;
        const COMPUTE_MAPPING = sys::SENSORS_COMPUTE_MAPPING;
    }
}
