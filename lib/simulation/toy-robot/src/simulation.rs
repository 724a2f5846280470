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

use std::io::Write;

use crate::{Command, Grid, Outcome, Robot};

/// A Simulation feeds an ordered command stream to at most one robot at a time, and renders what
/// each command did to an output sink.
///
/// A placement always builds a brand new [`Robot`] and drops the previous one, so no state carries
/// over between placements. A placement off the grid still drops the previous robot but leaves the
/// slot empty. While there is no robot every other command is dropped without output.
pub struct Simulation<'g, W: Write> {
    grid: &'g Grid,
    robot: Option<Robot<'g>>,
    output: W,
}

impl<'g, W: Write> Simulation<'g, W> {
    pub fn new(grid: &'g Grid, output: W) -> Self {
        Self {
            grid,
            robot: None,
            output,
        }
    }

    /// Apply every command in order. Only a failure to write output stops the run.
    pub fn run<I>(&mut self, commands: I) -> std::io::Result<()>
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    /// Apply a single command.
    pub fn apply(&mut self, command: Command) -> std::io::Result<()> {
        match command {
            Command::Place(placement) => {
                match Robot::place(self.grid, placement.x, placement.y, placement.heading) {
                    Ok(robot) => {
                        tracing::debug!(%command, "placed robot");
                        self.robot = Some(robot);
                    }
                    Err(e) => {
                        tracing::debug!(%command, error = %e, "rejected placement");
                        self.robot = None;
                        writeln!(
                            self.output,
                            "Warning: Placement rejected. ({}, {}) is off the table.",
                            placement.x, placement.y
                        )?;
                    }
                }
                Ok(())
            }
            Command::Simple(instruction) => {
                let Some(robot) = self.robot.as_mut() else {
                    tracing::debug!(%command, "no robot placed yet, dropping command");
                    return Ok(());
                };
                let outcome = robot.execute(instruction);
                self.render(outcome)
            }
        }
    }

    fn render(&mut self, outcome: Outcome) -> std::io::Result<()> {
        match outcome {
            Outcome::Reported(position) => writeln!(self.output, "{}", position),
            Outcome::Blocked { x, y } => writeln!(
                self.output,
                "Warning: Movement blocked. Would move to ({}, {}) which is off the table.",
                x, y
            ),
            Outcome::NotOnGrid => writeln!(
                self.output,
                "Robot is not on the table. Cannot execute movement commands."
            ),
            Outcome::Moved(_) | Outcome::Turned(_) => Ok(()),
        }
    }

    /// The robot currently on the grid, if any.
    pub fn robot(&self) -> Option<&Robot<'g>> {
        self.robot.as_ref()
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Instruction::{Left, Move, Report, Right};
    use crate::{Heading, Instruction, Position};

    fn run(grid: &Grid, commands: Vec<Command>) -> (Option<Position>, String) {
        let mut simulation = Simulation::new(grid, Vec::new());
        simulation.run(commands).expect("writing to a Vec cannot fail");
        let position = simulation.robot().map(Robot::position);
        let output = String::from_utf8(simulation.into_output()).expect("output is utf-8");
        (position, output)
    }

    fn simple(instructions: &[Instruction]) -> Vec<Command> {
        instructions.iter().copied().map(Command::from).collect()
    }

    #[test]
    fn test_three_moves_north() {
        let grid = Grid::default();
        let mut commands = vec![Command::place(0, 0, Heading::North)];
        commands.extend(simple(&[Move, Move, Move, Report]));
        let (_, output) = run(&grid, commands);
        assert_eq!(output, "0, 3, NORTH\n");
    }

    #[test]
    fn test_blocked_move_writes_warning() {
        let grid = Grid::default();
        let mut commands = vec![Command::place(0, 5, Heading::North)];
        commands.extend(simple(&[Move, Report]));
        let (_, output) = run(&grid, commands);
        assert_eq!(
            output,
            "Warning: Movement blocked. Would move to (0, 6) which is off the table.\n\
             0, 5, NORTH\n"
        );
    }

    #[test]
    fn test_east_then_left() {
        let grid = Grid::default();
        let mut commands = vec![Command::place(1, 2, Heading::East)];
        commands.extend(simple(&[Move, Move, Left, Move, Report]));
        let (_, output) = run(&grid, commands);
        assert_eq!(output, "3, 3, NORTH\n");
    }

    #[test]
    fn test_blocked_move_then_continue() {
        let grid = Grid::default();
        let mut commands = vec![Command::place(3, 3, Heading::North)];
        commands.extend(simple(&[Move, Move, Move, Left, Move, Report]));
        let (_, output) = run(&grid, commands);
        assert_eq!(
            output,
            "Warning: Movement blocked. Would move to (3, 6) which is off the table.\n\
             2, 5, WEST\n"
        );
    }

    #[test]
    fn test_full_right_rotation() {
        let grid = Grid::default();
        let mut commands = vec![Command::place(2, 2, Heading::South)];
        commands.extend(simple(&[Right, Right, Right, Right, Report]));
        let (_, output) = run(&grid, commands);
        assert_eq!(output, "2, 2, SOUTH\n");
    }

    #[test]
    fn test_commands_before_first_place_are_dropped() {
        let grid = Grid::default();
        let mut commands = simple(&[Move, Left, Report, Right]);
        assert_eq!(run(&grid, commands.clone()), (None, String::new()));

        commands.push(Command::place(2, 2, Heading::North));
        commands.extend(simple(&[Move, Report]));
        let (_, output) = run(&grid, commands);
        assert_eq!(output, "2, 3, NORTH\n");
    }

    #[test]
    fn test_second_place_replaces_robot() {
        let grid = Grid::default();
        let mut commands = vec![Command::place(0, 0, Heading::North)];
        commands.extend(simple(&[Move]));
        commands.push(Command::place(2, 2, Heading::East));
        commands.extend(simple(&[Move, Left, Report]));
        let (position, output) = run(&grid, commands);
        assert_eq!(output, "3, 2, NORTH\n");
        assert_eq!(
            position,
            Some(Position {
                x: 3,
                y: 2,
                heading: Heading::North
            })
        );
    }

    #[test]
    fn test_second_place_resets_position() {
        let grid = Grid::default();
        let mut commands = vec![Command::place(1, 1, Heading::North)];
        commands.extend(simple(&[Move, Move]));
        commands.push(Command::place(4, 4, Heading::South));
        let (position, output) = run(&grid, commands);
        assert_eq!(output, "");
        assert_eq!(
            position,
            Some(Position {
                x: 4,
                y: 4,
                heading: Heading::South
            })
        );
    }

    #[test]
    fn test_off_grid_place_drops_previous_robot() {
        let grid = Grid::new(3).expect("valid size");
        let commands = vec![
            Command::place(0, 0, Heading::North),
            Command::from(Move),
            Command::place(5, 5, Heading::West),
            Command::from(Move),
            Command::from(Report),
        ];
        let (position, output) = run(&grid, commands);
        assert_eq!(output, "Warning: Placement rejected. (5, 5) is off the table.\n");
        assert_eq!(position, None);
    }

    #[test]
    fn test_valid_place_after_rejected_place() {
        let grid = Grid::new(3).expect("valid size");
        let commands = vec![
            Command::place(4, 0, Heading::West),
            Command::from(Report),
            Command::place(1, 1, Heading::East),
            Command::from(Report),
        ];
        let (_, output) = run(&grid, commands);
        assert_eq!(
            output,
            "Warning: Placement rejected. (4, 0) is off the table.\n1, 1, EAST\n"
        );
    }

    fn any_heading() -> impl Strategy<Value = Heading> {
        prop_oneof![
            Just(Heading::North),
            Just(Heading::East),
            Just(Heading::South),
            Just(Heading::West),
        ]
    }

    fn any_instructions() -> impl Strategy<Value = Vec<Instruction>> {
        prop::collection::vec(
            prop_oneof![Just(Move), Just(Left), Just(Right), Just(Report)],
            0..30,
        )
    }

    proptest! {
        #[test]
        fn test_place_discards_history(
            history in any_instructions(),
            x in 0..=5i32,
            y in 0..=5i32,
            heading in any_heading(),
        ) {
            let grid = Grid::default();
            let mut commands = vec![Command::place(0, 0, Heading::North)];
            commands.extend(simple(&history));
            commands.push(Command::place(x, y, heading));
            let (position, _) = run(&grid, commands);
            prop_assert_eq!(position, Some(Position { x, y, heading }));
        }

        #[test]
        fn test_unplaced_commands_have_no_effect(
            prefix in any_instructions(),
            suffix in any_instructions(),
        ) {
            let grid = Grid::default();
            let mut with_prefix = simple(&prefix);
            with_prefix.push(Command::place(2, 2, Heading::East));
            with_prefix.extend(simple(&suffix));

            let mut without_prefix = vec![Command::place(2, 2, Heading::East)];
            without_prefix.extend(simple(&suffix));

            prop_assert_eq!(run(&grid, with_prefix), run(&grid, without_prefix));
        }
    }
}
