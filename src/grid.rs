use std::cmp::min;
use std::ops::Range;

use ndarray::prelude::*;

use crate::instruction::{Command, Instruction};

pub const GRID_SIZE: usize = 1000;

/// How one light reacts to each of the three commands.  Selected once, at
/// grid construction, through the type parameter of `Grid`.
pub trait LightPolicy {
    type Cell: Copy;
    /// The state of every light in a freshly built grid.
    const OFF: Self::Cell;
    fn turn_on(cell: Self::Cell) -> Self::Cell;
    fn turn_off(cell: Self::Cell) -> Self::Cell;
    fn toggle(cell: Self::Cell) -> Self::Cell;
    /// How much this light contributes to the grid total.
    fn brightness(cell: Self::Cell) -> u64;
}

/// Part 1: each light is simply on or off.
pub struct OnOff;

impl LightPolicy for OnOff {
    type Cell = bool;
    const OFF: bool = false;
    fn turn_on(_: bool) -> bool {
        true
    }
    fn turn_off(_: bool) -> bool {
        false
    }
    fn toggle(cell: bool) -> bool {
        !cell
    }
    fn brightness(cell: bool) -> u64 {
        u64::from(cell)
    }
}

/// Part 2: each light has a brightness level with a floor of zero.
pub struct Dimmable;

impl LightPolicy for Dimmable {
    type Cell = u32;
    const OFF: u32 = 0;
    fn turn_on(cell: u32) -> u32 {
        cell + 1
    }
    fn turn_off(cell: u32) -> u32 {
        cell.saturating_sub(1)
    }
    fn toggle(cell: u32) -> u32 {
        cell + 2
    }
    fn brightness(cell: u32) -> u64 {
        u64::from(cell)
    }
}

pub struct Grid<P: LightPolicy> {
    cells: Array2<P::Cell>,
}

/// Half-open bounds for one axis of the addressed rectangle.  An inverted
/// pair (start > end) selects nothing; an end past the edge of the grid is
/// cut off at the edge.  The parser's three-digit limit means only callers
/// building instructions by hand can reach the clamp.
fn axis_bounds(start: usize, end: usize) -> Range<usize> {
    let limit = min(end.saturating_add(1), GRID_SIZE);
    if start >= limit {
        0..0
    } else {
        start..limit
    }
}

impl<P: LightPolicy> Grid<P> {
    pub fn new() -> Grid<P> {
        Grid {
            cells: Array2::from_elem((GRID_SIZE, GRID_SIZE), P::OFF),
        }
    }

    /// Apply one instruction in place to exactly the lights it addresses.
    pub fn obey(&mut self, instruction: &Instruction) {
        let rows = axis_bounds(instruction.start.x, instruction.end.x);
        let cols = axis_bounds(instruction.start.y, instruction.end.y);
        let update: fn(P::Cell) -> P::Cell = match instruction.command {
            Command::TurnOn => P::turn_on,
            Command::TurnOff => P::turn_off,
            Command::Toggle => P::toggle,
        };
        self.cells
            .slice_mut(s![rows, cols])
            .map_inplace(|cell| *cell = update(*cell));
    }

    pub fn total_brightness(&self) -> u64 {
        self.cells.iter().map(|cell| P::brightness(*cell)).sum()
    }
}

#[cfg(test)]
use crate::instruction::Point;

#[cfg(test)]
fn instruction(command: Command, start: (usize, usize), end: (usize, usize)) -> Instruction {
    Instruction {
        command,
        start: Point {
            x: start.0,
            y: start.1,
        },
        end: Point { x: end.0, y: end.1 },
    }
}

#[test]
fn test_on_off_policy() {
    let mut grid: Grid<OnOff> = Grid::new();
    assert_eq!(grid.total_brightness(), 0);

    grid.obey(&instruction(Command::TurnOn, (2, 2), (4, 4)));
    assert_eq!(grid.total_brightness(), 9);
    assert!(grid.cells[(2, 2)]);
    assert!(grid.cells[(4, 4)]);
    // Lights outside the rectangle stay untouched.
    assert!(!grid.cells[(1, 2)]);
    assert!(!grid.cells[(5, 4)]);

    // Turning an on light on again changes nothing.
    grid.obey(&instruction(Command::TurnOn, (2, 2), (4, 4)));
    assert_eq!(grid.total_brightness(), 9);

    grid.obey(&instruction(Command::TurnOff, (2, 2), (4, 4)));
    assert_eq!(grid.total_brightness(), 0);
}

#[test]
fn test_on_off_toggle_twice_is_identity() {
    let mut grid: Grid<OnOff> = Grid::new();
    grid.obey(&instruction(Command::TurnOn, (0, 0), (9, 9)));
    grid.obey(&instruction(Command::Toggle, (5, 5), (14, 14)));
    let after_one = grid.total_brightness();
    assert_eq!(after_one, 100 - 25 + 75);
    grid.obey(&instruction(Command::Toggle, (5, 5), (14, 14)));
    assert_eq!(grid.total_brightness(), 100);
}

#[test]
fn test_dimmable_policy() {
    let mut grid: Grid<Dimmable> = Grid::new();

    // turn off never drops a light below zero.
    grid.obey(&instruction(Command::TurnOff, (0, 0), (999, 999)));
    assert_eq!(grid.total_brightness(), 0);

    // toggle raises brightness by two.
    grid.obey(&instruction(Command::Toggle, (0, 0), (1, 1)));
    assert_eq!(grid.total_brightness(), 8);
    assert_eq!(grid.cells[(0, 0)], 2);

    // repeated turn on keeps incrementing; it is not idempotent.
    grid.obey(&instruction(Command::TurnOn, (0, 0), (0, 0)));
    grid.obey(&instruction(Command::TurnOn, (0, 0), (0, 0)));
    assert_eq!(grid.cells[(0, 0)], 4);

    // turn off saturates per light, not per range.
    grid.obey(&instruction(Command::TurnOff, (0, 0), (999, 999)));
    assert_eq!(grid.cells[(0, 0)], 3);
    assert_eq!(grid.cells[(1, 1)], 1);
    assert_eq!(grid.cells[(2, 2)], 0);
}

#[test]
fn test_inverted_range_touches_nothing() {
    let mut binary: Grid<OnOff> = Grid::new();
    binary.obey(&instruction(Command::TurnOn, (10, 0), (9, 999)));
    binary.obey(&instruction(Command::TurnOn, (0, 10), (999, 9)));
    assert_eq!(binary.total_brightness(), 0);

    let mut counting: Grid<Dimmable> = Grid::new();
    counting.obey(&instruction(Command::Toggle, (500, 500), (499, 500)));
    assert_eq!(counting.total_brightness(), 0);
}

#[test]
fn test_axis_bounds() {
    assert_eq!(axis_bounds(0, 999), 0..1000);
    assert_eq!(axis_bounds(3, 3), 3..4);
    assert_eq!(axis_bounds(4, 3), 0..0);
    // Only reachable through hand-built instructions.
    assert_eq!(axis_bounds(990, 5000), 990..1000);
    assert_eq!(axis_bounds(5000, 6000), 0..0);
}
