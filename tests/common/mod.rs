/*
 * In-memory libsensors stand-in for the integration tests.
 *
 * FakeLibrary follows libsensors' observable behavior: cursor enumeration,
 * chip name parsing and formatting, wildcard matching, error codes and
 * messages, `set` statements and parse error reporting.
 */

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::rc::Rc;

use lmsensors::handlers;
use lmsensors::{
    status, Backend, BusType, ChipName, Feature, FeatureInternals, FeatureType, Subfeature,
    SubfeatureFlags, SubfeatureType, BUS_NR_ANY, CHIP_NAME_ADDR_ANY,
};

pub const CONFIG_NAME: &str = "sensors3.conf";

pub struct FakeFeature {
    pub feature: Feature,
    pub label: Option<String>,
    pub subfeatures: Vec<Subfeature>,
}

pub struct FakeChip {
    pub name: ChipName,
    pub features: Vec<FakeFeature>,
}

#[derive(Default)]
pub struct FakeState {
    pub chips: Vec<FakeChip>,
    pub values: HashMap<(ChipName, i32), f64>,
    /// `set` statements from the loaded configuration: (chip pattern, subfeature name, value).
    pub sets: Vec<(ChipName, String, f64)>,
    pub labels: Vec<(ChipName, String, String)>,
    pub init_calls: usize,
    pub cleanup_calls: usize,
    pub hook_installs: usize,
    pub loaded: bool,
}

#[derive(Clone, Default)]
pub struct FakeLibrary {
    pub state: Rc<RefCell<FakeState>>,
}

fn readable(name: &str, number: i32, kind: SubfeatureType, mapping: i32) -> Subfeature {
    Subfeature::from_backend(name, number, kind, mapping, SubfeatureFlags::READABLE)
}

fn writable(name: &str, number: i32, kind: SubfeatureType, mapping: i32) -> Subfeature {
    Subfeature::from_backend(
        name,
        number,
        kind,
        mapping,
        SubfeatureFlags::READABLE | SubfeatureFlags::WRITABLE,
    )
}

fn feature(name: &str, number: i32, kind: FeatureType, first_subfeature: i32) -> Feature {
    Feature::from_backend(
        name,
        number,
        kind,
        FeatureInternals {
            first_subfeature,
            padding: 0,
        },
    )
}

impl FakeLibrary {
    /// A desktop board: `coretemp-isa-0000` and `nct6798-isa-0290`.
    pub fn desktop() -> Self {
        let coretemp = ChipName::new(Some("coretemp"), BusType::ISA, 0, 0, None).unwrap();
        let nct = ChipName::new(Some("nct6798"), BusType::ISA, 0, 0x290, None).unwrap();

        let mut state = FakeState::default();
        state.chips.push(FakeChip {
            name: coretemp.clone(),
            features: vec![
                FakeFeature {
                    feature: feature("temp1", 0, FeatureType::TEMP, 0),
                    label: Some("Package id 0".to_string()),
                    subfeatures: vec![
                        readable("temp1_input", 0, SubfeatureType::TEMP_INPUT, 0),
                        readable("temp1_max", 1, SubfeatureType::TEMP_MAX, 0),
                        readable("temp1_crit", 2, SubfeatureType::TEMP_CRIT, 0),
                    ],
                },
                FakeFeature {
                    feature: feature("temp2", 1, FeatureType::TEMP, 3),
                    label: Some("Core 0".to_string()),
                    subfeatures: vec![readable("temp2_input", 3, SubfeatureType::TEMP_INPUT, 1)],
                },
            ],
        });
        state.chips.push(FakeChip {
            name: nct.clone(),
            features: vec![
                FakeFeature {
                    feature: feature("in0", 0, FeatureType::IN, 0),
                    label: None,
                    subfeatures: vec![
                        readable("in0_input", 0, SubfeatureType::IN_INPUT, 0),
                        writable("in0_min", 1, SubfeatureType::IN_MIN, 0),
                    ],
                },
                FakeFeature {
                    feature: feature("fan1", 1, FeatureType::FAN, 2),
                    label: None,
                    subfeatures: vec![
                        readable("fan1_input", 2, SubfeatureType::FAN_INPUT, 1),
                        writable("fan1_min", 3, SubfeatureType::FAN_MIN, 1),
                        Subfeature::from_backend(
                            "fan1_beep",
                            4,
                            SubfeatureType::FAN_BEEP,
                            1,
                            SubfeatureFlags::WRITABLE,
                        ),
                    ],
                },
            ],
        });

        state.values.insert((coretemp.clone(), 0), 45.0);
        state.values.insert((coretemp.clone(), 1), 80.0);
        state.values.insert((coretemp.clone(), 2), 100.0);
        state.values.insert((coretemp, 3), 43.0);
        state.values.insert((nct.clone(), 0), 1.02);
        state.values.insert((nct.clone(), 1), 0.0);
        state.values.insert((nct.clone(), 2), 1150.0);
        state.values.insert((nct, 3), 0.0);

        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn stored_value(&self, chip: &ChipName, nr: i32) -> Option<f64> {
        self.state.borrow().values.get(&(chip.clone(), nr)).copied()
    }

    fn chip_matches(pattern: &ChipName, chip: &ChipName) -> bool {
        (pattern.prefix().is_none() || pattern.prefix() == chip.prefix())
            && (pattern.bus_type() == BusType::ANY || pattern.bus_type() == chip.bus_type())
            && (pattern.bus_nr() == BUS_NR_ANY || pattern.bus_nr() == chip.bus_nr())
            && (pattern.addr() == CHIP_NAME_ADDR_ANY || pattern.addr() == chip.addr())
    }

    fn nth_chip(&self, pattern: Option<&ChipName>, cursor: &mut i32) -> Option<ChipName> {
        let state = self.state.borrow();
        if !state.loaded {
            return None;
        }
        while let Some(chip) = state.chips.get(*cursor as usize) {
            *cursor += 1;
            if pattern.map_or(true, |p| Self::chip_matches(p, &chip.name)) {
                return Some(chip.name.clone());
            }
        }
        None
    }

    fn with_subfeature<T>(
        &self,
        chip: &ChipName,
        nr: i32,
        f: impl FnOnce(&Subfeature) -> T,
    ) -> Option<T> {
        let state = self.state.borrow();
        let chip = state.chips.iter().find(|c| &c.name == chip)?;
        chip.features
            .iter()
            .flat_map(|feature| feature.subfeatures.iter())
            .find(|s| s.number() == nr)
            .map(f)
    }

    fn load(&self, config: &File) -> i32 {
        let mut current: Option<ChipName> = None;
        let mut errors = 0;
        let mut sets = Vec::new();
        let mut labels = Vec::new();

        for (idx, line) in BufReader::new(config).lines().enumerate() {
            let Ok(line) = line else {
                return -status::ERR_IO;
            };
            let lineno = idx as i32 + 1;
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let words: Vec<&str> = line.split_whitespace().collect();
            match words.as_slice() {
                ["chip", pattern] => match parse_name(pattern.trim_matches('"')) {
                    Ok(name) => current = Some(name),
                    Err(_) => {
                        errors += 1;
                        handlers::report_parse_error(
                            "Invalid chip name",
                            Some(CONFIG_NAME),
                            lineno,
                        );
                    }
                },
                ["set", name, value] => match (&current, value.parse::<f64>()) {
                    (Some(chip), Ok(value)) => sets.push((chip.clone(), name.to_string(), value)),
                    _ => {
                        errors += 1;
                        handlers::report_parse_error("Syntax error", Some(CONFIG_NAME), lineno);
                    }
                },
                ["label", name, rest @ ..] if current.is_some() && !rest.is_empty() => {
                    if let Some(chip) = &current {
                        let text = rest.join(" ").trim_matches('"').to_string();
                        labels.push((chip.clone(), name.to_string(), text));
                    }
                }
                ["ignore", _] | ["compute", ..] | ["bus", ..] => {}
                _ => {
                    errors += 1;
                    handlers::report_parse_error("Syntax error", Some(CONFIG_NAME), lineno);
                }
            }
        }

        if errors > 0 {
            return -status::ERR_PARSE;
        }
        let mut state = self.state.borrow_mut();
        state.sets = sets;
        state.labels = labels;
        state.loaded = true;
        0
    }
}

/// libsensors' chip name grammar: `prefix[-bus[-nr]-addr]`, `*` for wildcards.
pub fn parse_name(text: &str) -> Result<ChipName, i32> {
    let err = -status::ERR_CHIP_NAME;
    if text.is_empty() {
        return Err(err);
    }
    let mut parts = text.split('-');
    let prefix = match parts.next() {
        Some("*") => None,
        Some(p) if !p.is_empty() => Some(p),
        _ => return Err(err),
    };
    let mut name = ChipName::any().with_prefix(prefix).map_err(|_| err)?;

    let Some(bus) = parts.next() else {
        return Ok(name);
    };
    let (bus_type, has_nr) = match bus {
        "*" => (BusType::ANY, false),
        "isa" => (BusType::ISA, false),
        "pci" => (BusType::PCI, false),
        "virtual" => (BusType::VIRTUAL, false),
        "acpi" => (BusType::ACPI, false),
        "mdio" => (BusType::MDIO, false),
        "i2c" => (BusType::I2C, true),
        "spi" => (BusType::SPI, true),
        "hid" => (BusType::HID, true),
        "scsi" => (BusType::SCSI, true),
        _ => return Err(-status::ERR_BUS_NAME),
    };
    name.set_bus_type(bus_type);
    if bus_type != BusType::ANY {
        name.set_bus_nr(0);
    }
    if has_nr {
        match parts.next() {
            Some("*") => name.set_bus_nr(BUS_NR_ANY),
            Some(nr) => name.set_bus_nr(nr.parse().map_err(|_| err)?),
            None => return Err(err),
        }
    }
    match parts.next() {
        Some("*") | None => name.set_addr(CHIP_NAME_ADDR_ANY),
        Some(addr) => name.set_addr(i32::from_str_radix(addr, 16).map_err(|_| err)?),
    }
    if parts.next().is_some() {
        return Err(err);
    }
    Ok(name)
}

pub fn format_name(chip: &ChipName) -> Result<String, i32> {
    if chip.has_wildcards() {
        return Err(-status::ERR_WILDCARDS);
    }
    let prefix = chip.prefix().unwrap_or_default();
    let (nr, addr) = (chip.bus_nr(), chip.addr());
    let text = match chip.bus_type() {
        BusType::ISA => format!("{prefix}-isa-{addr:04x}"),
        BusType::PCI => format!("{prefix}-pci-{addr:04x}"),
        BusType::I2C => format!("{prefix}-i2c-{nr}-{addr:02x}"),
        BusType::SPI => format!("{prefix}-spi-{nr}-{addr:x}"),
        BusType::VIRTUAL => format!("{prefix}-virtual-{addr:x}"),
        BusType::ACPI => format!("{prefix}-acpi-{addr:x}"),
        BusType::HID => format!("{prefix}-hid-{nr}-{addr:x}"),
        BusType::MDIO => format!("{prefix}-mdio-{addr:x}"),
        BusType::SCSI => format!("{prefix}-scsi-{nr}-{addr:x}"),
        _ => return Err(-status::ERR_CHIP_NAME),
    };
    Ok(text)
}

impl Backend for FakeLibrary {
    fn init(&self) -> i32 {
        let mut state = self.state.borrow_mut();
        state.init_calls += 1;
        state.loaded = true;
        0
    }

    fn init_from(&self, config: &File) -> i32 {
        self.state.borrow_mut().init_calls += 1;
        self.load(config)
    }

    fn cleanup(&self) {
        let mut state = self.state.borrow_mut();
        state.cleanup_calls += 1;
        state.loaded = false;
        state.sets.clear();
        state.labels.clear();
    }

    fn install_error_hooks(&self) {
        self.state.borrow_mut().hook_installs += 1;
    }

    fn detected_chip(&self, cursor: &mut i32) -> Option<ChipName> {
        self.nth_chip(None, cursor)
    }

    fn detected_chip_matching(&self, pattern: &ChipName, cursor: &mut i32) -> Option<ChipName> {
        self.nth_chip(Some(pattern), cursor)
    }

    fn feature(&self, chip: &ChipName, cursor: &mut i32) -> Option<Feature> {
        let state = self.state.borrow();
        let chip = state.chips.iter().find(|c| &c.name == chip)?;
        let feature = chip.features.get(*cursor as usize)?;
        *cursor += 1;
        Some(feature.feature.clone())
    }

    fn subfeature_at(
        &self,
        chip: &ChipName,
        feature: &Feature,
        cursor: &mut i32,
    ) -> Option<Subfeature> {
        let state = self.state.borrow();
        let chip = state.chips.iter().find(|c| &c.name == chip)?;
        let feature = chip.features.iter().find(|f| &f.feature == feature)?;
        let sub = feature.subfeatures.get(*cursor as usize)?;
        *cursor += 1;
        Some(sub.clone())
    }

    fn subfeature(
        &self,
        chip: &ChipName,
        feature: &Feature,
        kind: SubfeatureType,
    ) -> Option<Subfeature> {
        let state = self.state.borrow();
        let chip = state.chips.iter().find(|c| &c.name == chip)?;
        let feature = chip.features.iter().find(|f| &f.feature == feature)?;
        feature.subfeatures.iter().find(|s| s.kind() == kind).cloned()
    }

    fn label(&self, chip: &ChipName, feature: &Feature) -> Option<String> {
        if chip.has_wildcards() {
            return None;
        }
        let state = self.state.borrow();
        let name = feature.name()?;
        if let Some((_, _, label)) = state
            .labels
            .iter()
            .find(|(pattern, n, _)| n == name && Self::chip_matches(pattern, chip))
        {
            return Some(label.clone());
        }
        let known = state
            .chips
            .iter()
            .find(|c| &c.name == chip)
            .and_then(|c| c.features.iter().find(|f| &f.feature == feature));
        match known {
            Some(f) => Some(f.label.clone().unwrap_or_else(|| name.to_string())),
            None => Some(name.to_string()),
        }
    }

    fn value(&self, chip: &ChipName, subfeature_nr: i32) -> Result<f64, i32> {
        if chip.has_wildcards() {
            return Err(-status::ERR_WILDCARDS);
        }
        let readable = self
            .with_subfeature(chip, subfeature_nr, Subfeature::is_readable)
            .ok_or(-status::ERR_NO_ENTRY)?;
        if !readable {
            return Err(-status::ERR_ACCESS_R);
        }
        self.stored_value(chip, subfeature_nr)
            .ok_or(-status::ERR_KERNEL)
    }

    fn set_value(&self, chip: &ChipName, subfeature_nr: i32, value: f64) -> i32 {
        if chip.has_wildcards() {
            return -status::ERR_WILDCARDS;
        }
        match self.with_subfeature(chip, subfeature_nr, Subfeature::is_writable) {
            None => -status::ERR_NO_ENTRY,
            Some(false) => -status::ERR_ACCESS_W,
            Some(true) => {
                self.state
                    .borrow_mut()
                    .values
                    .insert((chip.clone(), subfeature_nr), value);
                0
            }
        }
    }

    fn do_chip_sets(&self, pattern: &ChipName) -> i32 {
        let mut writes = Vec::new();
        {
            let state = self.state.borrow();
            for chip in state.chips.iter().filter(|c| Self::chip_matches(pattern, &c.name)) {
                for (set_pattern, name, value) in &state.sets {
                    if !Self::chip_matches(set_pattern, &chip.name) {
                        continue;
                    }
                    let sub = chip
                        .features
                        .iter()
                        .flat_map(|f| f.subfeatures.iter())
                        .find(|s| s.name() == Some(name.as_str()));
                    match sub {
                        Some(sub) if sub.is_writable() => {
                            writes.push((chip.name.clone(), sub.number(), *value))
                        }
                        _ => return -status::ERR_ACCESS_W,
                    }
                }
            }
        }
        let mut state = self.state.borrow_mut();
        for (chip, nr, value) in writes {
            state.values.insert((chip, nr), value);
        }
        0
    }

    fn format_chip_name(&self, chip: &ChipName) -> Result<String, i32> {
        format_name(chip)
    }

    fn parse_chip_name(&self, text: &str) -> Result<ChipName, i32> {
        parse_name(text)
    }

    fn adapter_name(&self, bus_type: BusType, bus_nr: i16) -> Option<String> {
        let name = match bus_type {
            BusType::ISA => "ISA adapter".to_string(),
            BusType::PCI => "PCI adapter".to_string(),
            BusType::SPI => "SPI adapter".to_string(),
            BusType::VIRTUAL => "Virtual device".to_string(),
            BusType::ACPI => "ACPI interface".to_string(),
            BusType::HID => "HID adapter".to_string(),
            BusType::MDIO => "MDIO adapter".to_string(),
            BusType::SCSI => "SCSI adapter".to_string(),
            BusType::I2C if bus_nr == 0 => "SMBus I801 adapter at efa0".to_string(),
            _ => return None,
        };
        Some(name)
    }

    fn strerror(&self, status: i32) -> String {
        let message = match status.abs() {
            1 => "Wildcard found in chip name",
            2 => "No such subfeature known",
            3 => "Can't read",
            4 => "Kernel interface error",
            5 => "Divide by zero",
            6 => "Can't parse chip name",
            7 => "Can't parse bus name",
            8 => "General parse error",
            9 => "Can't write",
            10 => "Input/output error",
            11 => "Evaluation recurses too deep",
            _ => "Unknown error",
        };
        message.to_string()
    }

    fn version(&self) -> String {
        "3.6.0".to_string()
    }
}
