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

//! Error type shared by every lmsensors operation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using SensorsError
pub type Result<T> = std::result::Result<T, SensorsError>;

#[derive(Error, Debug)]
pub enum SensorsError {
    /// Rejected before reaching libsensors.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// libsensors returned a negative status code.
    #[error("{message}")]
    Native { status: i32, message: String },

    /// The query is valid but libsensors has no answer for it.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SensorsError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a native error from a (possibly negated) status code.
    pub fn native(status: i32, message: impl Into<String>) -> Self {
        Self::Native {
            status: status.abs(),
            message: message.into(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native { .. })
    }

    /// Positive libsensors error code, if this is a native failure.
    pub fn status(&self) -> Option<i32> {
        match self {
            Self::Native { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Strings cross the FFI boundary as C strings; interior NULs would truncate them.
pub(crate) fn ensure_no_nul(field: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(SensorsError::invalid_argument(format!(
            "{} must not contain a NUL byte",
            field
        )));
    }
    Ok(())
}
