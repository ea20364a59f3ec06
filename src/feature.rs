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

//! Features: the measurement categories of a chip (`temp1`, `fan2`, ...).

use std::fmt;

use crate::constants::FeatureType;
use crate::error::{ensure_no_nul, Result};

/// libsensors bookkeeping carried by every enumerated feature.
///
/// Backends hand these back untouched when a feature is passed to a native
/// call. They take no part in equality or display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeatureInternals {
    pub first_subfeature: i32,
    pub padding: i32,
}

/// A named sensor category on a chip.
#[derive(Clone, Default)]
pub struct Feature {
    name: Option<String>,
    number: i32,
    kind: FeatureType,
    internals: FeatureInternals,
}

impl Feature {
    pub fn new(name: Option<&str>, number: i32, kind: FeatureType) -> Result<Self> {
        if let Some(name) = name {
            ensure_no_nul("name", name)?;
        }
        Ok(Self {
            name: name.map(str::to_owned),
            number,
            kind,
            internals: FeatureInternals::default(),
        })
    }

    /// Rebuild a feature exactly as a backend enumerated it.
    pub fn from_backend(
        name: impl Into<String>,
        number: i32,
        kind: FeatureType,
        internals: FeatureInternals,
    ) -> Self {
        Self {
            name: Some(name.into()),
            number,
            kind,
            internals,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<&str>) -> Result<()> {
        if let Some(name) = name {
            ensure_no_nul("name", name)?;
        }
        self.name = name.map(str::to_owned);
        Ok(())
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn kind(&self) -> FeatureType {
        self.kind
    }

    pub fn internals(&self) -> FeatureInternals {
        self.internals
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.number == other.number && self.kind == other.kind
    }
}

impl Eq for Feature {}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Feature(name={:?}, ", name)?,
            None => write!(f, "Feature(name=None, ")?,
        }
        write!(f, "number={}, type={})", self.number, self.kind.0)
    }
}

impl fmt::Debug for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SensorsError;

    #[test]
    fn test_default_feature() {
        let feature = Feature::default();
        assert_eq!(feature.name(), None);
        assert_eq!(feature.number(), 0);
        assert_eq!(feature.kind(), FeatureType::IN);
        assert_eq!(feature, feature.clone());
        assert_eq!(Feature::default(), Feature::default());
    }

    #[test]
    fn test_equality_ignores_internals() {
        let direct = Feature::new(Some("temp1"), 3, FeatureType::TEMP).unwrap();
        let enumerated = Feature::from_backend(
            "temp1",
            3,
            FeatureType::TEMP,
            FeatureInternals { first_subfeature: 17, padding: 0x5a5a },
        );
        assert_eq!(direct, enumerated);
        assert_ne!(direct.internals(), enumerated.internals());
    }

    #[test]
    fn test_equality_fields() {
        let base = Feature::new(Some("fan1"), 1, FeatureType::FAN).unwrap();
        assert_ne!(base, Feature::new(Some("fan2"), 1, FeatureType::FAN).unwrap());
        assert_ne!(base, Feature::new(Some("fan1"), 2, FeatureType::FAN).unwrap());
        assert_ne!(base, Feature::new(Some("fan1"), 1, FeatureType::TEMP).unwrap());
        assert_ne!(base, Feature::new(None, 1, FeatureType::FAN).unwrap());
    }

    #[test]
    fn test_set_name() {
        let mut feature = Feature::default();
        feature.set_name(Some("in0")).unwrap();
        assert_eq!(feature.name(), Some("in0"));
        feature.set_name(None).unwrap();
        assert_eq!(feature.name(), None);
    }

    #[test]
    fn test_nul_in_name_rejected() {
        let err = Feature::new(Some("te\0mp"), 0, FeatureType::TEMP).unwrap_err();
        assert!(matches!(err, SensorsError::InvalidArgument(_)));

        let mut feature = Feature::new(Some("temp1"), 0, FeatureType::TEMP).unwrap();
        assert!(feature.set_name(Some("\0")).is_err());
        assert_eq!(feature.name(), Some("temp1"));
    }

    #[test]
    fn test_display() {
        let feature = Feature::new(Some("temp1"), 4, FeatureType::TEMP).unwrap();
        assert_eq!(feature.to_string(), "Feature(name=\"temp1\", number=4, type=2)");
        assert_eq!(
            Feature::default().to_string(),
            "Feature(name=None, number=0, type=0)"
        );
        let empty = Feature::new(Some(""), 0, FeatureType::IN).unwrap();
        assert_eq!(empty.to_string(), "Feature(name=\"\", number=0, type=0)");
    }
}
