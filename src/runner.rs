use tracing::{event, Level};

use crate::grid::{Grid, LightPolicy};
use crate::instruction::{Error, Parser};

/// Apply every line, in file order, to a fresh grid and reduce it to a
/// single total.  The first bad line aborts the whole run; nothing partial
/// is ever reported.
pub fn run<P: LightPolicy>(lines: &[String]) -> Result<u64, Error> {
    let parser = Parser::new();
    let mut grid: Grid<P> = Grid::new();
    for line in lines {
        let instruction = parser.parse(line)?;
        event!(Level::TRACE, "obeying '{}'", &instruction);
        grid.obey(&instruction);
    }
    event!(Level::DEBUG, "obeyed {} instructions", lines.len());
    Ok(grid.total_brightness())
}

#[cfg(test)]
use crate::grid::{Dimmable, OnOff};

#[cfg(test)]
fn lines(input: &[&str]) -> Vec<String> {
    input.iter().map(|line| line.to_string()).collect()
}

#[test]
fn test_run_on_empty_input() {
    assert_eq!(run::<OnOff>(&[]), Ok(0));
    assert_eq!(run::<Dimmable>(&[]), Ok(0));
}

#[test]
fn test_run_binary_grid() {
    let input = lines(&[
        "turn on 0,0 through 999,999",
        "toggle 0,0 through 999,0",
        "turn off 499,499 through 500,500",
    ]);
    // 1000000 lit, minus 1000 toggled back off, minus 4 switched off.
    assert_eq!(run::<OnOff>(&input), Ok(999996));
}

#[test]
fn test_run_counting_grid() {
    let input = lines(&[
        "turn on 0,0 through 999,999",
        "toggle 0,0 through 999,0",
        "turn off 499,499 through 500,500",
    ]);
    // 1000000 from the blanket turn on, plus 2 for each of the 1000
    // toggled lights, minus 1 for each of the 4 dimmed lights.
    assert_eq!(run::<Dimmable>(&input), Ok(1001996));
}

#[test]
fn test_run_aborts_on_first_bad_line() {
    let input = lines(&[
        "turn on 0,0 through 9,9",
        "turn off 1,2 through",
        "toggle 0,0 through 999,999",
    ]);
    assert_eq!(run::<OnOff>(&input), Err(Error::Misformatted));
    assert_eq!(
        run::<Dimmable>(&lines(&["launch 0,0 through 9,9"])),
        Err(Error::UnrecognisedInstruction)
    );
}
