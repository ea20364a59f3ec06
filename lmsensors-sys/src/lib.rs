//! Raw bindings for libsensors
//!
//! Mirrors `sensors/sensors.h` and `sensors/error.h` from lm_sensors 3.x.
//! Nothing here is safe to call directly; the `lmsensors` crate wraps these
//! declarations behind its `Backend` trait.
//!
//! Linking against `libsensors.so` only happens with the `link` feature.

#![allow(non_camel_case_types)]

use libc::{c_char, c_double, c_int, c_short, c_uint, size_t, FILE};

// ============================================================================
// Versions
// ============================================================================

pub const SENSORS_API_VERSION: c_int = 0x500;

// ============================================================================
// Wildcards
// ============================================================================

pub const SENSORS_CHIP_NAME_ADDR_ANY: c_int = -1;

pub const SENSORS_BUS_TYPE_ANY: c_short = -1;
pub const SENSORS_BUS_TYPE_I2C: c_short = 0;
pub const SENSORS_BUS_TYPE_ISA: c_short = 1;
pub const SENSORS_BUS_TYPE_PCI: c_short = 2;
pub const SENSORS_BUS_TYPE_SPI: c_short = 3;
pub const SENSORS_BUS_TYPE_VIRTUAL: c_short = 4;
pub const SENSORS_BUS_TYPE_ACPI: c_short = 5;
pub const SENSORS_BUS_TYPE_HID: c_short = 6;
pub const SENSORS_BUS_TYPE_MDIO: c_short = 7;
pub const SENSORS_BUS_TYPE_SCSI: c_short = 8;

pub const SENSORS_BUS_NR_ANY: c_short = -1;
pub const SENSORS_BUS_NR_IGNORE: c_short = -2;

// ============================================================================
// Subfeature flags
// ============================================================================

pub const SENSORS_MODE_R: c_uint = 1;
pub const SENSORS_MODE_W: c_uint = 2;
pub const SENSORS_COMPUTE_MAPPING: c_uint = 4;

// ============================================================================
// Error codes (sensors/error.h). Functions return the negated value.
// ============================================================================

pub const SENSORS_ERR_WILDCARDS: c_int = 1;
pub const SENSORS_ERR_NO_ENTRY: c_int = 2;
pub const SENSORS_ERR_ACCESS_R: c_int = 3;
pub const SENSORS_ERR_KERNEL: c_int = 4;
pub const SENSORS_ERR_DIV_ZERO: c_int = 5;
pub const SENSORS_ERR_CHIP_NAME: c_int = 6;
pub const SENSORS_ERR_BUS_NAME: c_int = 7;
pub const SENSORS_ERR_PARSE: c_int = 8;
pub const SENSORS_ERR_ACCESS_W: c_int = 9;
pub const SENSORS_ERR_IO: c_int = 10;
pub const SENSORS_ERR_RECURSION: c_int = 11;

// ============================================================================
// sensors_feature_type
// ============================================================================

pub type sensors_feature_type = c_int;

pub const SENSORS_FEATURE_IN: sensors_feature_type = 0x00;
pub const SENSORS_FEATURE_FAN: sensors_feature_type = 0x01;
pub const SENSORS_FEATURE_TEMP: sensors_feature_type = 0x02;
pub const SENSORS_FEATURE_POWER: sensors_feature_type = 0x03;
pub const SENSORS_FEATURE_ENERGY: sensors_feature_type = 0x04;
pub const SENSORS_FEATURE_CURR: sensors_feature_type = 0x05;
pub const SENSORS_FEATURE_HUMIDITY: sensors_feature_type = 0x06;
pub const SENSORS_FEATURE_MAX_MAIN: sensors_feature_type = 0x07;
pub const SENSORS_FEATURE_VID: sensors_feature_type = 0x10;
pub const SENSORS_FEATURE_INTRUSION: sensors_feature_type = 0x11;
pub const SENSORS_FEATURE_MAX_OTHER: sensors_feature_type = 0x12;
pub const SENSORS_FEATURE_BEEP_ENABLE: sensors_feature_type = 0x18;
pub const SENSORS_FEATURE_MAX: sensors_feature_type = 0x19;
pub const SENSORS_FEATURE_UNKNOWN: sensors_feature_type = c_int::MAX;

// ============================================================================
// sensors_subfeature_type
//
// The high byte is the owning feature type, bit 0x80 marks alarm/beep style
// subfeatures.
// ============================================================================

pub type sensors_subfeature_type = c_int;

pub const SENSORS_SUBFEATURE_IN_INPUT: sensors_subfeature_type = 0x000;
pub const SENSORS_SUBFEATURE_IN_MIN: sensors_subfeature_type = 0x001;
pub const SENSORS_SUBFEATURE_IN_MAX: sensors_subfeature_type = 0x002;
pub const SENSORS_SUBFEATURE_IN_LCRIT: sensors_subfeature_type = 0x003;
pub const SENSORS_SUBFEATURE_IN_CRIT: sensors_subfeature_type = 0x004;
pub const SENSORS_SUBFEATURE_IN_AVERAGE: sensors_subfeature_type = 0x005;
pub const SENSORS_SUBFEATURE_IN_LOWEST: sensors_subfeature_type = 0x006;
pub const SENSORS_SUBFEATURE_IN_HIGHEST: sensors_subfeature_type = 0x007;
pub const SENSORS_SUBFEATURE_IN_ALARM: sensors_subfeature_type = 0x080;
pub const SENSORS_SUBFEATURE_IN_MIN_ALARM: sensors_subfeature_type = 0x081;
pub const SENSORS_SUBFEATURE_IN_MAX_ALARM: sensors_subfeature_type = 0x082;
pub const SENSORS_SUBFEATURE_IN_BEEP: sensors_subfeature_type = 0x083;
pub const SENSORS_SUBFEATURE_IN_LCRIT_ALARM: sensors_subfeature_type = 0x084;
pub const SENSORS_SUBFEATURE_IN_CRIT_ALARM: sensors_subfeature_type = 0x085;

pub const SENSORS_SUBFEATURE_FAN_INPUT: sensors_subfeature_type = 0x100;
pub const SENSORS_SUBFEATURE_FAN_MIN: sensors_subfeature_type = 0x101;
pub const SENSORS_SUBFEATURE_FAN_MAX: sensors_subfeature_type = 0x102;
pub const SENSORS_SUBFEATURE_FAN_ALARM: sensors_subfeature_type = 0x180;
pub const SENSORS_SUBFEATURE_FAN_FAULT: sensors_subfeature_type = 0x181;
pub const SENSORS_SUBFEATURE_FAN_DIV: sensors_subfeature_type = 0x182;
pub const SENSORS_SUBFEATURE_FAN_BEEP: sensors_subfeature_type = 0x183;
pub const SENSORS_SUBFEATURE_FAN_PULSES: sensors_subfeature_type = 0x184;
pub const SENSORS_SUBFEATURE_FAN_MIN_ALARM: sensors_subfeature_type = 0x185;
pub const SENSORS_SUBFEATURE_FAN_MAX_ALARM: sensors_subfeature_type = 0x186;

pub const SENSORS_SUBFEATURE_TEMP_INPUT: sensors_subfeature_type = 0x200;
pub const SENSORS_SUBFEATURE_TEMP_MAX: sensors_subfeature_type = 0x201;
pub const SENSORS_SUBFEATURE_TEMP_MAX_HYST: sensors_subfeature_type = 0x202;
pub const SENSORS_SUBFEATURE_TEMP_MIN: sensors_subfeature_type = 0x203;
pub const SENSORS_SUBFEATURE_TEMP_CRIT: sensors_subfeature_type = 0x204;
pub const SENSORS_SUBFEATURE_TEMP_CRIT_HYST: sensors_subfeature_type = 0x205;
pub const SENSORS_SUBFEATURE_TEMP_LCRIT: sensors_subfeature_type = 0x206;
pub const SENSORS_SUBFEATURE_TEMP_EMERGENCY: sensors_subfeature_type = 0x207;
pub const SENSORS_SUBFEATURE_TEMP_EMERGENCY_HYST: sensors_subfeature_type = 0x208;
pub const SENSORS_SUBFEATURE_TEMP_LOWEST: sensors_subfeature_type = 0x209;
pub const SENSORS_SUBFEATURE_TEMP_HIGHEST: sensors_subfeature_type = 0x20a;
pub const SENSORS_SUBFEATURE_TEMP_MIN_HYST: sensors_subfeature_type = 0x20b;
pub const SENSORS_SUBFEATURE_TEMP_LCRIT_HYST: sensors_subfeature_type = 0x20c;
pub const SENSORS_SUBFEATURE_TEMP_ALARM: sensors_subfeature_type = 0x280;
pub const SENSORS_SUBFEATURE_TEMP_MAX_ALARM: sensors_subfeature_type = 0x281;
pub const SENSORS_SUBFEATURE_TEMP_MIN_ALARM: sensors_subfeature_type = 0x282;
pub const SENSORS_SUBFEATURE_TEMP_CRIT_ALARM: sensors_subfeature_type = 0x283;
pub const SENSORS_SUBFEATURE_TEMP_FAULT: sensors_subfeature_type = 0x284;
pub const SENSORS_SUBFEATURE_TEMP_TYPE: sensors_subfeature_type = 0x285;
pub const SENSORS_SUBFEATURE_TEMP_OFFSET: sensors_subfeature_type = 0x286;
pub const SENSORS_SUBFEATURE_TEMP_BEEP: sensors_subfeature_type = 0x287;
pub const SENSORS_SUBFEATURE_TEMP_EMERGENCY_ALARM: sensors_subfeature_type = 0x288;
pub const SENSORS_SUBFEATURE_TEMP_LCRIT_ALARM: sensors_subfeature_type = 0x289;

pub const SENSORS_SUBFEATURE_POWER_AVERAGE: sensors_subfeature_type = 0x300;
pub const SENSORS_SUBFEATURE_POWER_AVERAGE_HIGHEST: sensors_subfeature_type = 0x301;
pub const SENSORS_SUBFEATURE_POWER_AVERAGE_LOWEST: sensors_subfeature_type = 0x302;
pub const SENSORS_SUBFEATURE_POWER_INPUT: sensors_subfeature_type = 0x303;
pub const SENSORS_SUBFEATURE_POWER_INPUT_HIGHEST: sensors_subfeature_type = 0x304;
pub const SENSORS_SUBFEATURE_POWER_INPUT_LOWEST: sensors_subfeature_type = 0x305;
pub const SENSORS_SUBFEATURE_POWER_CAP: sensors_subfeature_type = 0x306;
pub const SENSORS_SUBFEATURE_POWER_CAP_HYST: sensors_subfeature_type = 0x307;
pub const SENSORS_SUBFEATURE_POWER_MAX: sensors_subfeature_type = 0x308;
pub const SENSORS_SUBFEATURE_POWER_CRIT: sensors_subfeature_type = 0x309;
pub const SENSORS_SUBFEATURE_POWER_AVERAGE_INTERVAL: sensors_subfeature_type = 0x380;
pub const SENSORS_SUBFEATURE_POWER_ALARM: sensors_subfeature_type = 0x381;
pub const SENSORS_SUBFEATURE_POWER_CAP_ALARM: sensors_subfeature_type = 0x382;
pub const SENSORS_SUBFEATURE_POWER_MAX_ALARM: sensors_subfeature_type = 0x383;
pub const SENSORS_SUBFEATURE_POWER_CRIT_ALARM: sensors_subfeature_type = 0x384;

pub const SENSORS_SUBFEATURE_ENERGY_INPUT: sensors_subfeature_type = 0x400;

pub const SENSORS_SUBFEATURE_CURR_INPUT: sensors_subfeature_type = 0x500;
pub const SENSORS_SUBFEATURE_CURR_MIN: sensors_subfeature_type = 0x501;
pub const SENSORS_SUBFEATURE_CURR_MAX: sensors_subfeature_type = 0x502;
pub const SENSORS_SUBFEATURE_CURR_LCRIT: sensors_subfeature_type = 0x503;
pub const SENSORS_SUBFEATURE_CURR_CRIT: sensors_subfeature_type = 0x504;
pub const SENSORS_SUBFEATURE_CURR_AVERAGE: sensors_subfeature_type = 0x505;
pub const SENSORS_SUBFEATURE_CURR_LOWEST: sensors_subfeature_type = 0x506;
pub const SENSORS_SUBFEATURE_CURR_HIGHEST: sensors_subfeature_type = 0x507;
pub const SENSORS_SUBFEATURE_CURR_ALARM: sensors_subfeature_type = 0x580;
pub const SENSORS_SUBFEATURE_CURR_MIN_ALARM: sensors_subfeature_type = 0x581;
pub const SENSORS_SUBFEATURE_CURR_MAX_ALARM: sensors_subfeature_type = 0x582;
pub const SENSORS_SUBFEATURE_CURR_BEEP: sensors_subfeature_type = 0x583;
pub const SENSORS_SUBFEATURE_CURR_LCRIT_ALARM: sensors_subfeature_type = 0x584;
pub const SENSORS_SUBFEATURE_CURR_CRIT_ALARM: sensors_subfeature_type = 0x585;

pub const SENSORS_SUBFEATURE_HUMIDITY_INPUT: sensors_subfeature_type = 0x600;

pub const SENSORS_SUBFEATURE_VID: sensors_subfeature_type = 0x1000;

pub const SENSORS_SUBFEATURE_INTRUSION_ALARM: sensors_subfeature_type = 0x1100;
pub const SENSORS_SUBFEATURE_INTRUSION_BEEP: sensors_subfeature_type = 0x1101;

pub const SENSORS_SUBFEATURE_BEEP_ENABLE: sensors_subfeature_type = 0x1800;

pub const SENSORS_SUBFEATURE_UNKNOWN: sensors_subfeature_type = c_int::MAX;

// ============================================================================
// Structures
// ============================================================================

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct sensors_bus_id {
    pub type_: c_short,
    pub nr: c_short,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct sensors_chip_name {
    pub prefix: *mut c_char,
    pub bus: sensors_bus_id,
    pub addr: c_int,
    pub path: *mut c_char,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct sensors_feature {
    pub name: *mut c_char,
    pub number: c_int,
    pub type_: sensors_feature_type,
    // libsensors internal
    pub first_subfeature: c_int,
    pub padding1: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct sensors_subfeature {
    pub name: *mut c_char,
    pub number: c_int,
    pub type_: sensors_subfeature_type,
    pub mapping: c_int,
    pub flags: c_uint,
}

pub type sensors_parse_error_wfn_t =
    Option<unsafe extern "C" fn(err: *const c_char, filename: *const c_char, lineno: c_int)>;

pub type sensors_fatal_error_t =
    Option<unsafe extern "C" fn(proc_: *const c_char, err: *const c_char)>;

// ============================================================================
// Functions
// ============================================================================

#[cfg_attr(feature = "link", link(name = "sensors"))]
extern "C" {
    pub static libsensors_version: *const c_char;

    pub static mut sensors_parse_error_wfn: sensors_parse_error_wfn_t;
    pub static mut sensors_fatal_error: sensors_fatal_error_t;

    pub fn sensors_init(input: *mut FILE) -> c_int;
    pub fn sensors_cleanup();

    pub fn sensors_parse_chip_name(orig_name: *const c_char, res: *mut sensors_chip_name) -> c_int;
    pub fn sensors_free_chip_name(chip: *mut sensors_chip_name);
    pub fn sensors_snprintf_chip_name(
        str_: *mut c_char,
        size: size_t,
        chip: *const sensors_chip_name,
    ) -> c_int;

    pub fn sensors_get_adapter_name(bus: *const sensors_bus_id) -> *const c_char;
    pub fn sensors_get_label(
        name: *const sensors_chip_name,
        feature: *const sensors_feature,
    ) -> *mut c_char;

    pub fn sensors_get_value(
        name: *const sensors_chip_name,
        subfeat_nr: c_int,
        value: *mut c_double,
    ) -> c_int;
    pub fn sensors_set_value(
        name: *const sensors_chip_name,
        subfeat_nr: c_int,
        value: c_double,
    ) -> c_int;
    pub fn sensors_do_chip_sets(name: *const sensors_chip_name) -> c_int;

    pub fn sensors_get_detected_chips(
        match_: *const sensors_chip_name,
        nr: *mut c_int,
    ) -> *const sensors_chip_name;
    pub fn sensors_get_features(
        name: *const sensors_chip_name,
        nr: *mut c_int,
    ) -> *const sensors_feature;
    pub fn sensors_get_all_subfeatures(
        name: *const sensors_chip_name,
        feature: *const sensors_feature,
        nr: *mut c_int,
    ) -> *const sensors_subfeature;
    pub fn sensors_get_subfeature(
        name: *const sensors_chip_name,
        feature: *const sensors_feature,
        type_: sensors_subfeature_type,
    ) -> *const sensors_subfeature;

    pub fn sensors_strerror(errnum: c_int) -> *const c_char;
}
