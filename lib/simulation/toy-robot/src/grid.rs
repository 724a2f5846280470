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

/// Grid error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The grid must span at least one step on each axis.
    #[error("grid size must be positive, got {0}")]
    NonPositiveSize(i32),
}

/// Grid is the bounded square the robot lives on. Both axes share the inclusive range
/// `[min_coordinate, max_coordinate]`, so a grid of size 5 has 6 valid columns and rows.
///
/// The grid is immutable once built and knows nothing about robots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    size: i32,
    min_coordinate: i32,
    max_coordinate: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            min_coordinate: 0,
            max_coordinate: Self::DEFAULT_SIZE,
        }
    }
}

impl Grid {
    /// Size used when none is configured.
    pub const DEFAULT_SIZE: i32 = 5;

    /// Create a new grid spanning `0..=size` on both axes.
    pub fn new(size: i32) -> Result<Self, GridError> {
        if size <= 0 {
            return Err(GridError::NonPositiveSize(size));
        }
        Ok(Self {
            size,
            min_coordinate: 0,
            max_coordinate: size,
        })
    }

    /// Check if a position lies within the grid bounds, inclusive on both ends.
    pub fn position_is_valid(&self, x: i32, y: i32) -> bool {
        (self.min_coordinate..=self.max_coordinate).contains(&x)
            && (self.min_coordinate..=self.max_coordinate).contains(&y)
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn min_coordinate(&self) -> i32 {
        self.min_coordinate
    }

    pub fn max_coordinate(&self) -> i32 {
        self.max_coordinate
    }
}
