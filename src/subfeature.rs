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

//! Subfeatures: the individual value slots of a feature (`temp1_input`,
//! `fan1_min`, ...).

use std::fmt;

use crate::constants::{SubfeatureFlags, SubfeatureType};
use crate::error::{ensure_no_nul, Result};

/// One readable/writable value slot under a [`Feature`](crate::Feature).
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Subfeature {
    name: Option<String>,
    number: i32,
    kind: SubfeatureType,
    mapping: i32,
    flags: SubfeatureFlags,
}

impl Subfeature {
    pub fn new(
        name: Option<&str>,
        number: i32,
        kind: SubfeatureType,
        mapping: i32,
        flags: SubfeatureFlags,
    ) -> Result<Self> {
        if let Some(name) = name {
            ensure_no_nul("name", name)?;
        }
        Ok(Self {
            name: name.map(str::to_owned),
            number,
            kind,
            mapping,
            flags,
        })
    }

    /// Copy of a subfeature as enumerated by a backend.
    pub fn from_backend(
        name: impl Into<String>,
        number: i32,
        kind: SubfeatureType,
        mapping: i32,
        flags: SubfeatureFlags,
    ) -> Self {
        Self {
            name: Some(name.into()),
            number,
            kind,
            mapping,
            flags,
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

    /// Subfeature number, the key for value reads and writes.
    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn kind(&self) -> SubfeatureType {
        self.kind
    }

    /// Number of the feature this subfeature belongs to.
    pub fn mapping(&self) -> i32 {
        self.mapping
    }

    pub fn flags(&self) -> SubfeatureFlags {
        self.flags
    }

    pub fn is_readable(&self) -> bool {
        self.flags.contains(SubfeatureFlags::READABLE)
    }

    pub fn is_writable(&self) -> bool {
        self.flags.contains(SubfeatureFlags::WRITABLE)
    }

    pub fn compute_mapping(&self) -> bool {
        self.flags.contains(SubfeatureFlags::COMPUTE_MAPPING)
    }
}

impl fmt::Display for Subfeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Subfeature(name={:?}, ", name)?,
            None => write!(f, "Subfeature(name=None, ")?,
        }
        write!(
            f,
            "number={}, type={}, mapping={}, flags={:#x})",
            self.number,
            self.kind.0,
            self.mapping,
            self.flags.bits()
        )
    }
}

impl fmt::Debug for Subfeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
