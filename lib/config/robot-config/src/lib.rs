/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

#![warn(missing_docs)]

//! Robot command configuration.
//!
//! Reads the JSON command document and checks it against the expected shape before anything is
//! handed to the simulation:
//!
//! ```json
//! {
//!     "robot_commands": [
//!         { "PLACE": { "x": "0", "y": "0", "direction": "NORTH" } },
//!         "MOVE",
//!         "REPORT"
//!     ]
//! }
//! ```
//!
//! Coordinates arrive as single digit strings and are turned into integers here, so the
//! simulation only ever sees typed [`Command`]s.

use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use toy_robot::{Command, Heading, Instruction};

/// Name of the document key holding the command list.
pub const COMMANDS_KEY: &str = "robot_commands";

/// Name of the object key introducing a placement.
pub const PLACE_KEY: &str = "PLACE";

/// Default file the command document is read from.
pub const DEFAULT_CONFIG_PATH: &str = "robot_config.json";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    /// The configuration file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,

        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not well formed JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The document is JSON but does not have the expected shape.
    #[error("{0}")]
    Validation(String),
}

/// A validated command document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotConfig {
    commands: Vec<Command>,
}

impl RobotConfig {
    /// Read and validate the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let config = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            commands = config.commands.len(),
            "loaded robot configuration"
        );
        Ok(config)
    }

    /// Parse and validate a document held in memory.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let document: Value = serde_json::from_str(json).map_err(ConfigError::Syntax)?;
        Self::from_value(&document)
    }

    /// Validate an already parsed document.
    pub fn from_value(document: &Value) -> Result<Self, ConfigError> {
        let object = document.as_object().ok_or_else(|| {
            ConfigError::Validation(format!("{} is not of type 'object'", document))
        })?;
        let entries = object.get(COMMANDS_KEY).ok_or_else(|| {
            ConfigError::Validation(format!("'{}' is a required property", COMMANDS_KEY))
        })?;
        let entries = entries.as_array().ok_or_else(|| {
            ConfigError::Validation(format!("{}: {} is not of type 'array'", COMMANDS_KEY, entries))
        })?;

        let commands = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                parse_command(entry).map_err(|message| {
                    ConfigError::Validation(format!("{}[{}]: {}", COMMANDS_KEY, index, message))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { commands })
    }

    /// The validated commands, in document order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Take the validated commands, in document order.
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}

#[derive(Deserialize)]
struct PlaceEntry {
    #[serde(deserialize_with = "coordinate")]
    x: i32,
    #[serde(deserialize_with = "coordinate")]
    y: i32,
    direction: Heading,
}

// Coordinates must match ^[0-5]$.
fn coordinate<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.as_bytes() {
        [digit @ b'0'..=b'5'] => Ok(i32::from(digit - b'0')),
        _ => Err(de::Error::custom(format!("{:?} does not match '^[0-5]$'", s))),
    }
}

fn parse_command(entry: &Value) -> Result<Command, String> {
    match entry {
        Value::String(token) => token
            .parse::<Instruction>()
            .map(Command::Simple)
            .map_err(|e| e.to_string()),
        Value::Object(object) => {
            let place = object
                .get(PLACE_KEY)
                .ok_or_else(|| format!("'{}' is a required property", PLACE_KEY))?;
            let place =
                PlaceEntry::deserialize(place).map_err(|e| format!("{}: {}", PLACE_KEY, e))?;
            Ok(Command::place(place.x, place.y, place.direction))
        }
        other => Err(format!(
            "{} is not a {} object or one of MOVE, LEFT, RIGHT, REPORT",
            other, PLACE_KEY
        )),
    }
}
