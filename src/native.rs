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

//! [`Backend`] on top of the system libsensors.
//!
//! Every call builds short-lived C views of its Rust arguments (`CString`s
//! plus the matching `#[repr(C)]` struct) and copies results back into owned
//! Rust values before returning, so no pointer into libsensors memory
//! escapes this module.

use std::ffi::{CStr, CString};
use std::fs::File;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::os::unix::io::AsRawFd;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use libc::{c_char, c_int, c_void};
use lmsensors_sys as sys;
use tracing::debug;

use crate::backend::Backend;
use crate::chip::ChipName;
use crate::constants::{status, BusType, FeatureType, SubfeatureFlags, SubfeatureType};
use crate::feature::{Feature, FeatureInternals};
use crate::handlers;
use crate::subfeature::Subfeature;

/// Size of the buffer handed to `sensors_snprintf_chip_name`.
const CHIP_NAME_BUFFER: usize = 512;

/// The real library.
///
/// libsensors is not thread-safe, so this type is neither `Send` nor `Sync`.
#[derive(Debug, Default)]
pub struct LibSensors {
    _not_thread_safe: PhantomData<*const ()>,
}

impl LibSensors {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// C views of Rust values
// ============================================================================

/// A `sensors_chip_name` borrowing from owned C strings.
struct CChipName {
    _prefix: Option<CString>,
    _path: Option<CString>,
    raw: sys::sensors_chip_name,
}

impl CChipName {
    fn new(chip: &ChipName) -> Result<Self, i32> {
        let prefix = to_cstring(chip.prefix())?;
        let path = to_cstring(chip.path())?;
        let raw = sys::sensors_chip_name {
            prefix: as_mut_ptr(&prefix),
            bus: sys::sensors_bus_id {
                type_: chip.bus_type().0,
                nr: chip.bus_nr(),
            },
            addr: chip.addr(),
            path: as_mut_ptr(&path),
        };
        Ok(Self {
            _prefix: prefix,
            _path: path,
            raw,
        })
    }

    fn as_ptr(&self) -> *const sys::sensors_chip_name {
        &self.raw
    }
}

/// A `sensors_feature` carrying the internals it was enumerated with.
struct CFeature {
    _name: Option<CString>,
    raw: sys::sensors_feature,
}

impl CFeature {
    fn new(feature: &Feature) -> Result<Self, i32> {
        let name = to_cstring(feature.name())?;
        let internals = feature.internals();
        let raw = sys::sensors_feature {
            name: as_mut_ptr(&name),
            number: feature.number(),
            type_: feature.kind().0,
            first_subfeature: internals.first_subfeature,
            padding1: internals.padding,
        };
        Ok(Self { _name: name, raw })
    }

    fn as_ptr(&self) -> *const sys::sensors_feature {
        &self.raw
    }
}

fn to_cstring(value: Option<&str>) -> Result<Option<CString>, i32> {
    value
        .map(CString::new)
        .transpose()
        .map_err(|_| -status::ERR_CHIP_NAME)
}

fn as_mut_ptr(value: &Option<CString>) -> *mut c_char {
    value
        .as_ref()
        .map_or(ptr::null_mut(), |s| s.as_ptr() as *mut c_char)
}

/// Copy a C string, `None` for NULL.
///
/// # Safety
/// `ptr` must be NULL or point to a NUL-terminated string.
unsafe fn opt_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

/// # Safety
/// Pointers inside `raw` must be NULL or valid C strings.
unsafe fn chip_from_raw(raw: &sys::sensors_chip_name) -> ChipName {
    ChipName::from_parts(
        opt_string(raw.prefix),
        BusType(raw.bus.type_),
        raw.bus.nr,
        raw.addr,
        opt_string(raw.path),
    )
}

/// # Safety
/// `raw.name` must be NULL or a valid C string.
unsafe fn feature_from_raw(raw: &sys::sensors_feature) -> Feature {
    Feature::from_backend(
        opt_string(raw.name).unwrap_or_default(),
        raw.number,
        FeatureType(raw.type_),
        FeatureInternals {
            first_subfeature: raw.first_subfeature,
            padding: raw.padding1,
        },
    )
}

/// # Safety
/// `raw.name` must be NULL or a valid C string.
unsafe fn subfeature_from_raw(raw: &sys::sensors_subfeature) -> Subfeature {
    Subfeature::from_backend(
        opt_string(raw.name).unwrap_or_default(),
        raw.number,
        SubfeatureType(raw.type_),
        raw.mapping,
        SubfeatureFlags::from_bits_retain(raw.flags),
    )
}

/// Frees the strings of a parsed chip name on every exit path.
struct ParsedChipName(sys::sensors_chip_name);

impl Drop for ParsedChipName {
    fn drop(&mut self) {
        unsafe { sys::sensors_free_chip_name(&mut self.0) }
    }
}

// ============================================================================
// Error callbacks
// ============================================================================

unsafe extern "C" fn parse_error_trampoline(
    err: *const c_char,
    filename: *const c_char,
    lineno: c_int,
) {
    let message = opt_string(err).unwrap_or_default();
    let filename = opt_string(filename);
    // Unwinding into C is undefined behavior.
    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        handlers::report_parse_error(&message, filename.as_deref(), lineno)
    }));
}

unsafe extern "C" fn fatal_error_trampoline(procedure: *const c_char, err: *const c_char) {
    let procedure = opt_string(procedure).unwrap_or_default();
    let message = opt_string(err).unwrap_or_default();
    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        handlers::report_fatal_error(&procedure, &message)
    }));
    // Reached only when the handler panicked.
    std::process::exit(handlers::FATAL_EXIT_CODE);
}

// ============================================================================
// Backend
// ============================================================================

impl Backend for LibSensors {
    fn init(&self) -> i32 {
        unsafe { sys::sensors_init(ptr::null_mut()) }
    }

    fn init_from(&self, config: &File) -> i32 {
        // libsensors reads through a stdio stream; give it a duplicate
        // descriptor so closing the stream leaves `config` untouched.
        unsafe {
            let fd = libc::dup(config.as_raw_fd());
            if fd < 0 {
                return -status::ERR_IO;
            }
            let stream = libc::fdopen(fd, b"r\0".as_ptr() as *const c_char);
            if stream.is_null() {
                libc::close(fd);
                return -status::ERR_IO;
            }
            let result = sys::sensors_init(stream);
            libc::fclose(stream);
            result
        }
    }

    fn cleanup(&self) {
        unsafe { sys::sensors_cleanup() }
    }

    fn install_error_hooks(&self) {
        debug!("Installing libsensors error callbacks");
        unsafe {
            sys::sensors_parse_error_wfn = Some(parse_error_trampoline);
            sys::sensors_fatal_error = Some(fatal_error_trampoline);
        }
    }

    fn detected_chip(&self, cursor: &mut i32) -> Option<ChipName> {
        unsafe {
            let raw = sys::sensors_get_detected_chips(ptr::null(), cursor);
            raw.as_ref().map(|raw| chip_from_raw(raw))
        }
    }

    fn detected_chip_matching(&self, pattern: &ChipName, cursor: &mut i32) -> Option<ChipName> {
        let pattern = CChipName::new(pattern).ok()?;
        unsafe {
            let raw = sys::sensors_get_detected_chips(pattern.as_ptr(), cursor);
            raw.as_ref().map(|raw| chip_from_raw(raw))
        }
    }

    fn feature(&self, chip: &ChipName, cursor: &mut i32) -> Option<Feature> {
        let chip = CChipName::new(chip).ok()?;
        unsafe {
            let raw = sys::sensors_get_features(chip.as_ptr(), cursor);
            raw.as_ref().map(|raw| feature_from_raw(raw))
        }
    }

    fn subfeature_at(
        &self,
        chip: &ChipName,
        feature: &Feature,
        cursor: &mut i32,
    ) -> Option<Subfeature> {
        let chip = CChipName::new(chip).ok()?;
        let feature = CFeature::new(feature).ok()?;
        unsafe {
            let raw = sys::sensors_get_all_subfeatures(chip.as_ptr(), feature.as_ptr(), cursor);
            raw.as_ref().map(|raw| subfeature_from_raw(raw))
        }
    }

    fn subfeature(
        &self,
        chip: &ChipName,
        feature: &Feature,
        kind: SubfeatureType,
    ) -> Option<Subfeature> {
        let chip = CChipName::new(chip).ok()?;
        let feature = CFeature::new(feature).ok()?;
        unsafe {
            let raw = sys::sensors_get_subfeature(chip.as_ptr(), feature.as_ptr(), kind.0);
            raw.as_ref().map(|raw| subfeature_from_raw(raw))
        }
    }

    fn label(&self, chip: &ChipName, feature: &Feature) -> Option<String> {
        let chip = CChipName::new(chip).ok()?;
        let feature = CFeature::new(feature).ok()?;
        unsafe {
            let raw = sys::sensors_get_label(chip.as_ptr(), feature.as_ptr());
            if raw.is_null() {
                return None;
            }
            let label = CStr::from_ptr(raw).to_string_lossy().into_owned();
            libc::free(raw as *mut c_void);
            Some(label)
        }
    }

    fn value(&self, chip: &ChipName, subfeature_nr: i32) -> Result<f64, i32> {
        let chip = CChipName::new(chip)?;
        let mut value = 0.0;
        let result = unsafe { sys::sensors_get_value(chip.as_ptr(), subfeature_nr, &mut value) };
        if result < 0 {
            return Err(result);
        }
        Ok(value)
    }

    fn set_value(&self, chip: &ChipName, subfeature_nr: i32, value: f64) -> i32 {
        match CChipName::new(chip) {
            Ok(chip) => unsafe { sys::sensors_set_value(chip.as_ptr(), subfeature_nr, value) },
            Err(status) => status,
        }
    }

    fn do_chip_sets(&self, chip: &ChipName) -> i32 {
        match CChipName::new(chip) {
            Ok(chip) => unsafe { sys::sensors_do_chip_sets(chip.as_ptr()) },
            Err(status) => status,
        }
    }

    fn format_chip_name(&self, chip: &ChipName) -> Result<String, i32> {
        let chip = CChipName::new(chip)?;
        let mut buffer = [0 as c_char; CHIP_NAME_BUFFER];
        unsafe {
            let result =
                sys::sensors_snprintf_chip_name(buffer.as_mut_ptr(), buffer.len(), chip.as_ptr());
            if result < 0 {
                return Err(result);
            }
            Ok(CStr::from_ptr(buffer.as_ptr()).to_string_lossy().into_owned())
        }
    }

    fn parse_chip_name(&self, text: &str) -> Result<ChipName, i32> {
        let text = CString::new(text).map_err(|_| -status::ERR_CHIP_NAME)?;
        let mut raw = MaybeUninit::<sys::sensors_chip_name>::zeroed();
        unsafe {
            let result = sys::sensors_parse_chip_name(text.as_ptr(), raw.as_mut_ptr());
            if result != 0 {
                // libsensors already released whatever it allocated.
                return Err(result);
            }
            let parsed = ParsedChipName(raw.assume_init());
            Ok(chip_from_raw(&parsed.0))
        }
    }

    fn adapter_name(&self, bus_type: BusType, bus_nr: i16) -> Option<String> {
        let bus = sys::sensors_bus_id {
            type_: bus_type.0,
            nr: bus_nr,
        };
        unsafe { opt_string(sys::sensors_get_adapter_name(&bus)) }
    }

    fn strerror(&self, status: i32) -> String {
        unsafe { opt_string(sys::sensors_strerror(status)) }.unwrap_or_default()
    }

    fn version(&self) -> String {
        unsafe { opt_string(sys::libsensors_version) }.unwrap_or_default()
    }
}
