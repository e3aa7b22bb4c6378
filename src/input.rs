use std::env;
use std::fs::File;
use std::io;
use std::io::prelude::*;

/// Raw instruction lines from the file named by the first command line
/// argument, or from stdin when no argument is given.
pub fn read_lines() -> Result<Vec<String>, String> {
    match env::args().nth(1) {
        Some(path) => {
            let file =
                File::open(&path).map_err(|e| format!("failed to open {}: {}", path, e))?;
            collect_lines(io::BufReader::new(file))
        }
        None => collect_lines(io::BufReader::new(io::stdin())),
    }
}

fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<String>, String> {
    reader
        .lines()
        .map(|line| line.map_err(|e| format!("failed to read input: {}", e)))
        .collect()
}

#[test]
fn test_collect_lines() {
    let text = io::Cursor::new("turn on 0,0 through 1,1\ntoggle 2,2 through 3,3\n");
    assert_eq!(
        collect_lines(text),
        Ok(vec![
            "turn on 0,0 through 1,1".to_string(),
            "toggle 2,2 through 3,3".to_string(),
        ])
    );
}
