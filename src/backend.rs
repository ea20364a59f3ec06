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

//! The seam between the safe API and libsensors.
//!
//! [`Backend`] mirrors the libsensors C API one call at a time. Status codes
//! are returned raw (negative on failure) and enumeration cursors are plain
//! `&mut i32` counters owned by the caller; turning those into `Result`s and
//! sequences is the job of [`Sensors`](crate::Sensors) and
//! [`Chip`](crate::Chip). The production implementation is `LibSensors`
//! (feature `native`); tests plug in mocks or in-memory fakes.

use std::fs::File;

use crate::chip::ChipName;
use crate::constants::{BusType, SubfeatureType};
use crate::feature::Feature;
use crate::subfeature::Subfeature;

#[cfg_attr(test, mockall::automock)]
pub trait Backend {
    /// `sensors_init(NULL)`: load the library's default configuration.
    fn init(&self) -> i32;

    /// `sensors_init(file)`. The caller keeps ownership of `config`.
    fn init_from(&self, config: &File) -> i32;

    /// `sensors_cleanup()`
    fn cleanup(&self);

    /// Point the library's error callbacks at the handler dispatch in
    /// [`handlers`](crate::handlers).
    fn install_error_hooks(&self);

    /// `sensors_get_detected_chips(NULL, cursor)`
    fn detected_chip(&self, cursor: &mut i32) -> Option<ChipName>;

    /// `sensors_get_detected_chips(pattern, cursor)`
    fn detected_chip_matching(&self, pattern: &ChipName, cursor: &mut i32) -> Option<ChipName>;

    /// `sensors_get_features(chip, cursor)`
    fn feature(&self, chip: &ChipName, cursor: &mut i32) -> Option<Feature>;

    /// `sensors_get_all_subfeatures(chip, feature, cursor)`
    fn subfeature_at(
        &self,
        chip: &ChipName,
        feature: &Feature,
        cursor: &mut i32,
    ) -> Option<Subfeature>;

    /// `sensors_get_subfeature(chip, feature, kind)`
    fn subfeature(
        &self,
        chip: &ChipName,
        feature: &Feature,
        kind: SubfeatureType,
    ) -> Option<Subfeature>;

    /// `sensors_get_label`; the native buffer is copied and freed.
    fn label(&self, chip: &ChipName, feature: &Feature) -> Option<String>;

    /// `sensors_get_value`; `Err` carries the negative status.
    fn value(&self, chip: &ChipName, subfeature_nr: i32) -> Result<f64, i32>;

    /// `sensors_set_value`
    fn set_value(&self, chip: &ChipName, subfeature_nr: i32, value: f64) -> i32;

    /// `sensors_do_chip_sets`
    fn do_chip_sets(&self, chip: &ChipName) -> i32;

    /// `sensors_snprintf_chip_name`
    fn format_chip_name(&self, chip: &ChipName) -> Result<String, i32>;

    /// `sensors_parse_chip_name` followed by `sensors_free_chip_name`.
    fn parse_chip_name(&self, text: &str) -> Result<ChipName, i32>;

    /// `sensors_get_adapter_name`
    fn adapter_name(&self, bus_type: BusType, bus_nr: i16) -> Option<String>;

    /// `sensors_strerror`; accepts negated or positive codes.
    fn strerror(&self, status: i32) -> String;

    /// `libsensors_version`
    fn version(&self) -> String;
}

/// Lazy sequence over a native enumeration cursor.
///
/// The cursor starts at zero for every new `Cursor`, so re-creating one
/// restarts the enumeration. Iteration ends the first time `step` yields
/// `None`.
pub struct Cursor<F> {
    nr: i32,
    done: bool,
    step: F,
}

impl<F> Cursor<F> {
    pub fn new(step: F) -> Self {
        Self {
            nr: 0,
            done: false,
            step,
        }
    }
}

impl<T, F> Iterator for Cursor<F>
where
    F: FnMut(&mut i32) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let item = (self.step)(&mut self.nr);
        if item.is_none() {
            self.done = true;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_first_none() {
        let items = ["a", "b", "c"];
        let cursor = Cursor::new(|nr: &mut i32| {
            let item = items.get(*nr as usize).copied();
            *nr += 1;
            item
        });
        assert_eq!(cursor.collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cursor_is_fused() {
        let mut calls = 0;
        let mut cursor = Cursor::new(|nr: &mut i32| {
            calls += 1;
            *nr += 1;
            // A misbehaving source that would resume after reporting the end.
            if *nr == 2 { None } else { Some(*nr) }
        });
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
        drop(cursor);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_cursor_starts_at_zero() {
        let mut seen = Vec::new();
        let first: Vec<i32> = Cursor::new(|nr: &mut i32| {
            seen.push(*nr);
            *nr += 1;
            if *nr <= 2 { Some(*nr) } else { None }
        })
        .collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
