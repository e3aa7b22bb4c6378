use std::error;
use std::fmt::{self, Display, Formatter};

use regex::Regex;

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    TurnOn,
    TurnOff,
    Toggle,
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Command::TurnOn => "turn on",
            Command::TurnOff => "turn off",
            Command::Toggle => "toggle",
        })
    }
}

/// One line of the input file: a command and the inclusive rectangle it
/// applies to.  Nothing guarantees start <= end; an inverted rectangle
/// simply selects no lights.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Instruction {
    pub command: Command,
    pub start: Point,
    pub end: Point,
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} through {}", self.command, self.start, self.end)
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    Misformatted,
    UnrecognisedInstruction,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Misformatted => f.write_str(
                "Misformatted input file row - Expected format: \
		 INSTRUCTION COORDINATE,COORDINATE through COORDINATE,COORDINATE",
            ),
            Error::UnrecognisedInstruction => f.write_str("Unrecognised instruction input"),
        }
    }
}

impl error::Error for Error {}

pub struct Parser {
    coord_pair_rx: Regex,
}

impl Parser {
    pub fn new() -> Parser {
        Parser {
            // A coordinate pair is 1-3 ASCII digits, a comma, 1-3 ASCII
            // digits, bounded on each side by whitespace or the edge of the
            // line.  The delimiters are consumed, so matches never overlap.
            // [0-9] rather than \d: \d also matches Unicode digits, which
            // str::parse would then reject.
            coord_pair_rx: Regex::new(r"(?:^|\s)([0-9]{1,3},[0-9]{1,3})(?:\s|$)").unwrap(),
        }
    }

    pub fn parse(&self, line: &str) -> Result<Instruction, Error> {
        let token = match line.find(|ch: char| ch.is_ascii_digit()) {
            Some(first_digit) => &line[..first_digit],
            None => line,
        }
        .trim();
        let pairs: Vec<&str> = self
            .coord_pair_rx
            .captures_iter(line)
            .map(|caps| caps.get(1).expect("pattern has one capture group").as_str())
            .collect();
        if token.is_empty() || pairs.len() != 2 {
            return Err(Error::Misformatted);
        }
        let command = match token {
            "turn on" => Command::TurnOn,
            "turn off" => Command::TurnOff,
            "toggle" => Command::Toggle,
            _ => {
                return Err(Error::UnrecognisedInstruction);
            }
        };
        Ok(Instruction {
            command,
            start: point_from_pair(pairs[0]),
            end: point_from_pair(pairs[1]),
        })
    }
}

fn point_from_pair(pair: &str) -> Point {
    // The pattern only matches digits,digits so the splits cannot fail.
    let (x, y) = pair.split_once(',').expect("matched pair contains a comma");
    Point {
        x: x.parse().expect("1-3 digits fit in usize"),
        y: y.parse().expect("1-3 digits fit in usize"),
    }
}

#[test]
fn test_parse_turn_on() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse("turn on 0,0 through 999,999"),
        Ok(Instruction {
            command: Command::TurnOn,
            start: Point { x: 0, y: 0 },
            end: Point { x: 999, y: 999 },
        })
    );
}

#[test]
fn test_parse_turn_off_and_toggle() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse("turn off 499,499 through 500,500"),
        Ok(Instruction {
            command: Command::TurnOff,
            start: Point { x: 499, y: 499 },
            end: Point { x: 500, y: 500 },
        })
    );
    assert_eq!(
        parser.parse("toggle 0,0 through 999,0"),
        Ok(Instruction {
            command: Command::Toggle,
            start: Point { x: 0, y: 0 },
            end: Point { x: 999, y: 0 },
        })
    );
}

#[test]
fn test_parse_tolerates_extra_whitespace() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse("  turn on  1,2 through 3,4 "),
        Ok(Instruction {
            command: Command::TurnOn,
            start: Point { x: 1, y: 2 },
            end: Point { x: 3, y: 4 },
        })
    );
}

#[test]
fn test_parse_keeps_pairs_in_textual_order() {
    let parser = Parser::new();
    let instruction = parser
        .parse("turn on 9,8 through 1,2")
        .expect("inverted ranges are not the parser's problem");
    assert_eq!(instruction.start, Point { x: 9, y: 8 });
    assert_eq!(instruction.end, Point { x: 1, y: 2 });
}

#[test]
fn test_parse_rejects_misformatted_rows() {
    let parser = Parser::new();
    for line in [
        "",
        "111,222 through 333,444",         // no command token
        "turn on through",                 // no coordinates at all
        "toggle through 333,444",          // only one pair
        "turn off 111,222 through",        // only one pair
        "turn on 1,1 through 2,2 through 3,3", // too many pairs
        "turn on 1111,0 through 0,0",      // 4-digit component
        "turn on 0,1111 through 0,0",
        "turn on 0,0 through 1111,0",
        "turn on 0,0 through 0,1111",
        "turn on 1,1 through \u{0663},\u{0663}", // Arabic-Indic digits are not coordinates
        "turn on \u{FF11},\u{FF11} through 2,2", // fullwidth digits are not coordinates
    ] {
        assert_eq!(parser.parse(line), Err(Error::Misformatted), "line: {:?}", line);
    }
    assert_eq!(
        Error::Misformatted.to_string(),
        "Misformatted input file row - Expected format: \
	 INSTRUCTION COORDINATE,COORDINATE through COORDINATE,COORDINATE"
    );
}

#[test]
fn test_parse_scan_skips_pairs_without_their_own_delimiters() {
    // The delimiter after a matched pair is consumed, so "2,2" here has no
    // leading whitespace left to match against and the scan moves on.
    let parser = Parser::new();
    let instruction = parser.parse("turn on 1,1 2,2 through 3,3").unwrap();
    assert_eq!(instruction.start, Point { x: 1, y: 1 });
    assert_eq!(instruction.end, Point { x: 3, y: 3 });
}

#[test]
fn test_parse_rejects_unknown_commands() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse("flip 1,1 through 2,2"),
        Err(Error::UnrecognisedInstruction)
    );
    assert_eq!(
        Error::UnrecognisedInstruction.to_string(),
        "Unrecognised instruction input"
    );
}
