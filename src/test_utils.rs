/*
 * Test utilities and mock helpers for lmsensors-rs
 *
 * Shared chip names and pre-wired mock backends for the unit tests.
 */

use crate::backend::MockBackend;
use crate::chip::ChipName;
use crate::constants::BusType;
use crate::sensors::Sensors;

/// `coretemp-isa-0000`
pub fn coretemp() -> ChipName {
    ChipName::new(Some("coretemp"), BusType::ISA, 0, 0, None).unwrap()
}

/// A mock that accepts hook installation, a default init and cleanup.
/// Tests add the expectations for the calls they exercise.
pub fn mock_backend() -> MockBackend {
    let mut backend = MockBackend::new();
    backend.expect_install_error_hooks().return_const(());
    backend.expect_init().return_const(0);
    backend.expect_cleanup().return_const(());
    backend
}

/// Initialize a facade over `backend` without a configuration file.
pub fn sensors_with(backend: MockBackend) -> Sensors<MockBackend> {
    match Sensors::with_backend(backend).init() {
        Ok(sensors) => sensors,
        Err(err) => panic!("mock initialization failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coretemp_is_concrete() {
        assert!(!coretemp().has_wildcards());
    }

    #[test]
    fn test_sensors_with_initializes() {
        assert!(sensors_with(mock_backend()).is_initialized());
    }
}
