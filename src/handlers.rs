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

//! Process-wide error callbacks.
//!
//! libsensors reports configuration parse errors and fatal errors through
//! two global C function pointers. Backends point those at
//! [`report_parse_error`] and [`report_fatal_error`], which forward to
//! whatever Rust closure is currently installed here.
//!
//! A fatal error always ends the process, whether or not a handler is
//! installed and whatever the handler does.

use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;
use tracing::{debug, error, warn};

/// Called with `(message, file name if known, line number)`.
pub type ParseErrorHandler = dyn Fn(&str, Option<&str>, i32) + Send + Sync;

/// Called with `(procedure, message)` right before the process exits.
pub type FatalErrorHandler = dyn Fn(&str, &str) + Send + Sync;

/// Exit status used after a fatal library error.
pub const FATAL_EXIT_CODE: i32 = 1;

lazy_static! {
    static ref PARSE_ERROR_HANDLER: Mutex<Option<Arc<ParseErrorHandler>>> = Mutex::new(None);
    static ref FATAL_ERROR_HANDLER: Mutex<Option<Arc<FatalErrorHandler>>> = Mutex::new(None);
}

fn store<T: ?Sized>(slot: &Mutex<Option<Arc<T>>>, value: Option<Arc<T>>) {
    // The previous handler is dropped outside the lock.
    let previous = match slot.lock() {
        Ok(mut guard) => std::mem::replace(&mut *guard, value),
        Err(poisoned) => std::mem::replace(&mut *poisoned.into_inner(), value),
    };
    drop(previous);
}

fn load<T: ?Sized>(slot: &Mutex<Option<Arc<T>>>) -> Option<Arc<T>> {
    match slot.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Install `handler` for configuration parse errors, replacing any previous one.
pub fn set_parse_error_handler<F>(handler: F)
where
    F: Fn(&str, Option<&str>, i32) + Send + Sync + 'static,
{
    install_parse_error_handler(Some(Arc::new(handler)));
}

/// Install `handler` for fatal errors, replacing any previous one.
pub fn set_fatal_error_handler<F>(handler: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    install_fatal_error_handler(Some(Arc::new(handler)));
}

pub fn clear_parse_error_handler() {
    install_parse_error_handler(None);
}

pub fn clear_fatal_error_handler() {
    install_fatal_error_handler(None);
}

pub(crate) fn install_parse_error_handler(handler: Option<Arc<ParseErrorHandler>>) {
    debug!(installed = handler.is_some(), "Replacing parse error handler");
    store(&PARSE_ERROR_HANDLER, handler);
}

pub(crate) fn install_fatal_error_handler(handler: Option<Arc<FatalErrorHandler>>) {
    debug!(installed = handler.is_some(), "Replacing fatal error handler");
    store(&FATAL_ERROR_HANDLER, handler);
}

pub fn has_parse_error_handler() -> bool {
    load(&PARSE_ERROR_HANDLER).is_some()
}

pub fn has_fatal_error_handler() -> bool {
    load(&FATAL_ERROR_HANDLER).is_some()
}

/// Entry point for a backend's parse error callback.
///
/// Runs the installed handler synchronously. Without one, the error is
/// written to stderr and execution continues.
pub fn report_parse_error(message: &str, filename: Option<&str>, line: i32) {
    warn!(error = message, filename, line, "libsensors configuration parse error");

    match load(&PARSE_ERROR_HANDLER) {
        Some(handler) => handler(message, filename, line),
        None => match filename {
            Some(filename) => eprintln!(
                "sensors: parse error in {} at line {}: {}",
                filename, line, message
            ),
            None => eprintln!("sensors: parse error: {}", message),
        },
    }
}

/// Entry point for a backend's fatal error callback. Never returns.
pub fn report_fatal_error(procedure: &str, message: &str) -> ! {
    notify_fatal_error(procedure, message);
    std::process::exit(FATAL_EXIT_CODE);
}

/// Everything [`report_fatal_error`] does short of exiting. Returns whether
/// a handler ran.
pub(crate) fn notify_fatal_error(procedure: &str, message: &str) -> bool {
    error!(procedure, error = message, "libsensors fatal error");

    match load(&FATAL_ERROR_HANDLER) {
        Some(handler) => {
            handler(procedure, message);
            true
        }
        None => {
            eprintln!("sensors: fatal error in `{}`: {}", procedure, message);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    #[serial]
    fn test_parse_handler_invoked_once_with_arguments() {
        let calls: Arc<Mutex<Vec<(String, Option<String>, i32)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        set_parse_error_handler(move |msg, file, line| {
            sink.lock().unwrap().push((msg.to_string(), file.map(str::to_string), line));
        });

        report_parse_error("Undeclared bus id referenced", Some("/etc/sensors3.conf"), 12);

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            (
                "Undeclared bus id referenced".to_string(),
                Some("/etc/sensors3.conf".to_string()),
                12
            )
        );
        drop(calls);
        clear_parse_error_handler();
    }

    #[test]
    #[serial]
    fn test_replacing_parse_handler_silences_previous() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = first.clone();
        set_parse_error_handler(move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        report_parse_error("first", None, 1);

        let counter = second.clone();
        set_parse_error_handler(move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        report_parse_error("second", None, 2);
        report_parse_error("third", None, 3);

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 2);
        clear_parse_error_handler();
    }

    #[test]
    #[serial]
    fn test_replaced_handler_is_released() {
        let token = Arc::new(());
        let held = token.clone();
        set_parse_error_handler(move |_, _, _| {
            let _ = &held;
        });
        assert_eq!(Arc::strong_count(&token), 2);

        set_parse_error_handler(|_, _, _| {});
        assert_eq!(Arc::strong_count(&token), 1);
        clear_parse_error_handler();
        assert!(!has_parse_error_handler());
    }

    #[test]
    #[serial]
    fn test_parse_error_without_handler_continues() {
        clear_parse_error_handler();
        report_parse_error("Syntax error", Some("sensors.conf"), 3);
        report_parse_error("Syntax error", None, 0);
    }

    #[test]
    #[serial]
    fn test_handler_may_replace_itself() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        set_parse_error_handler(move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            clear_parse_error_handler();
        });
        report_parse_error("once", None, 1);
        report_parse_error("twice", None, 2);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[serial]
    fn test_fatal_handler_notified() {
        let seen: Arc<Mutex<Option<(String, String)>>> = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        set_fatal_error_handler(move |proc_name, msg| {
            *sink.lock().unwrap() = Some((proc_name.to_string(), msg.to_string()));
        });

        assert!(notify_fatal_error("sensors_init", "Out of memory"));
        assert_eq!(
            seen.lock().unwrap().clone(),
            Some(("sensors_init".to_string(), "Out of memory".to_string()))
        );

        clear_fatal_error_handler();
        assert!(!has_fatal_error_handler());
        assert!(!notify_fatal_error("sensors_init", "Out of memory"));
    }
}
