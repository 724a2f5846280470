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

use crate::Heading;

/// Instruction parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown instruction: {0:?}, expected one of MOVE, LEFT, RIGHT, REPORT")]
pub struct ParseInstructionError(pub String);

/// A command that acts on an already placed robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Step one unit along the current heading, unless that leaves the grid.
    Move,

    /// Rotate counter-clockwise.
    Left,

    /// Rotate clockwise.
    Right,

    /// Emit the current position and heading.
    Report,
}

impl Instruction {
    pub const ALL: [Instruction; 4] = [
        Instruction::Move,
        Instruction::Left,
        Instruction::Right,
        Instruction::Report,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Instruction::Move => "MOVE",
            Instruction::Left => "LEFT",
            Instruction::Right => "RIGHT",
            Instruction::Report => "REPORT",
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Instruction {
    type Err = ParseInstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|instruction| instruction.as_str() == s)
            .ok_or_else(|| ParseInstructionError(s.to_string()))
    }
}

/// Where and facing which way a new robot is put down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
}

/// One entry of the command stream: either a placement, which replaces the current robot, or a
/// simple instruction for the robot already on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Place(Placement),
    Simple(Instruction),
}

impl Command {
    pub fn place(x: i32, y: i32, heading: Heading) -> Self {
        Command::Place(Placement { x, y, heading })
    }
}

impl From<Instruction> for Command {
    fn from(instruction: Instruction) -> Self {
        Command::Simple(instruction)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Place(Placement { x, y, heading }) => {
                write!(f, "PLACE({}, {}, {})", x, y, heading)
            }
            Command::Simple(instruction) => write!(f, "{}", instruction),
        }
    }
}
