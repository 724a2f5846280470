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

//! A single robot on a bounded square grid, driven by a stream of discrete commands.
//!
//! The [`Grid`] is the leaf: it only answers whether a position is inside its bounds. A
//! [`Robot`] borrows one grid and interprets [`Instruction`]s against it, refusing any MOVE that
//! would step off the edge. The [`Simulation`] sits on top and plays a full [`Command`] stream,
//! swapping in a fresh robot on every placement.
//!
//! Nothing here reads files or parses documents, callers hand over already typed commands.

pub mod command;
pub mod grid;
pub mod heading;
pub mod robot;
pub mod simulation;

pub use command::{Command, Instruction, ParseInstructionError, Placement};
pub use grid::{Grid, GridError};
pub use heading::{Heading, ParseHeadingError};
pub use robot::{Outcome, PlacementError, Position, Robot};
pub use simulation::Simulation;
