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

use crate::{Grid, Heading, Instruction};

/// Placement error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The requested position is outside the grid.
    #[error("cannot place robot at ({x}, {y}): outside grid bounds 0..={max}")]
    OffGrid { x: i32, y: i32, max: i32 },
}

/// A snapshot of where the robot is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.heading)
    }
}

/// What a single instruction did. No instruction can fail, a blocked move is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// MOVE committed, robot now stands on the contained position.
    Moved(Position),

    /// MOVE would have stepped to `(x, y)`, which is off the grid. Nothing changed. The target is
    /// widened so a step past `i32::MAX` is still reported exactly.
    Blocked { x: i64, y: i64 },

    /// LEFT or RIGHT, robot now faces the contained heading.
    Turned(Heading),

    /// REPORT.
    Reported(Position),

    /// The robot has been lifted off the grid and ignores instructions.
    NotOnGrid,
}

/// Robot is the single agent on the grid. It can only be created by a placement, and its
/// position and heading only change through [`Robot::execute`].
///
/// Each robot borrows the grid it was placed on, so the grid outlives every robot and can be
/// shared between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot<'g> {
    grid: &'g Grid,
    x: i32,
    y: i32,
    heading: Heading,
    on_grid: bool,
}

impl<'g> Robot<'g> {
    /// Place a new robot on the grid. Fails if `(x, y)` is not a valid grid position.
    pub fn place(grid: &'g Grid, x: i32, y: i32, heading: Heading) -> Result<Self, PlacementError> {
        if !grid.position_is_valid(x, y) {
            return Err(PlacementError::OffGrid {
                x,
                y,
                max: grid.max_coordinate(),
            });
        }
        Ok(Self {
            grid,
            x,
            y,
            heading,
            on_grid: true,
        })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
            heading: self.heading,
        }
    }

    /// Always true for now: no instruction takes the robot off the grid.
    pub fn is_on_grid(&self) -> bool {
        self.on_grid
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Apply a single instruction.
    pub fn execute(&mut self, instruction: Instruction) -> Outcome {
        if !self.on_grid {
            tracing::debug!(%instruction, "robot is not on the grid, ignoring instruction");
            return Outcome::NotOnGrid;
        }

        let outcome = match instruction {
            Instruction::Move => self.advance(),
            Instruction::Left => {
                self.heading = self.heading.left();
                Outcome::Turned(self.heading)
            }
            Instruction::Right => {
                self.heading = self.heading.right();
                Outcome::Turned(self.heading)
            }
            Instruction::Report => Outcome::Reported(self.position()),
        };
        tracing::debug!(%instruction, ?outcome, "executed instruction");
        outcome
    }

    /// Apply instructions in order, returning the outcome of each.
    pub fn execute_all<I>(&mut self, instructions: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = Instruction>,
    {
        instructions
            .into_iter()
            .map(|instruction| self.execute(instruction))
            .collect()
    }

    fn advance(&mut self) -> Outcome {
        let (dx, dy) = self.heading.delta();
        let target = self.x.checked_add(dx).zip(self.y.checked_add(dy));

        match target {
            Some((new_x, new_y)) if self.grid.position_is_valid(new_x, new_y) => {
                self.x = new_x;
                self.y = new_y;
                Outcome::Moved(self.position())
            }
            _ => {
                let x = i64::from(self.x) + i64::from(dx);
                let y = i64::from(self.y) + i64::from(dy);
                tracing::debug!(x, y, heading = %self.heading, "movement blocked at grid edge");
                Outcome::Blocked { x, y }
            }
        }
    }
}
